//! Field patterns, compiled once per process.

use regex::Regex;
use std::sync::OnceLock;

/// Region digit, college letters, batch year, branch letters, optional roll number.
const USN_PATTERN: &str = r"^[0-9][A-Za-z]{2}[0-9]{2}[A-Za-z]{2,3}([0-9]{3})?$";

/// One to three digit seat numbers chained with `-` or `,`.
const RANGE_PATTERN: &str = r"^[0-9]{1,3}([-,][0-9]{1,3})*$";

/// The results portal page: a single alphanumeric exam segment before `index.php`.
const RESULT_URL_PATTERN: &str = r"^https://results\.vtu\.ac\.in/[a-zA-Z0-9]+/index\.php$";

fn compiled(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("field pattern must compile"))
}

/// True if `usn` looks like `2AG21CS` or `2AG21CS001` (letters in any case).
pub fn is_valid_usn(usn: &str) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    compiled(&RE, USN_PATTERN).is_match(usn)
}

/// True if `range` looks like `1-60` or `1,5,9`.
pub fn is_valid_range(range: &str) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    compiled(&RE, RANGE_PATTERN).is_match(range)
}

/// True if `url` is a results portal page such as
/// `https://results.vtu.ac.in/DJcbcs25/index.php`.
pub fn is_valid_result_url(url: &str) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    compiled(&RE, RESULT_URL_PATTERN).is_match(url)
}

//! Client-side field validation.
//!
//! Every submit recomputes the full set of field errors; a form is only sent
//! when all three fields pass at the same time.

mod patterns;

pub use patterns::{is_valid_range, is_valid_result_url, is_valid_usn};

use crate::form::{Field, FormData};

pub const USN_MESSAGE: &str = "Invalid USN format (e.g., 2AG21CS or 2AG21CS001)";
pub const RANGE_MESSAGE: &str = "Invalid Range format (e.g., 1-60)";
pub const URL_MESSAGE: &str =
    "Invalid URL format (e.g., https://results.vtu.ac.in/DJcbcs25/index.php)";

/// Per-field validation messages. `None` means the field passed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub usn: Option<String>,
    pub range: Option<String>,
    pub url: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.usn.is_none() && self.range.is_none() && self.url.is_none()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Usn => self.usn.as_deref(),
            Field::Range => self.range.as_deref(),
            Field::Url => self.url.as_deref(),
        }
    }

    /// Failing fields in form order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        Field::ALL
            .into_iter()
            .filter_map(move |f| self.get(f).map(|msg| (f, msg)))
    }
}

/// Runs all three field checks against `form`.
pub fn validate_form(form: &FormData) -> FieldErrors {
    let check = |ok: bool, message: &str| (!ok).then(|| message.to_string());
    FieldErrors {
        usn: check(is_valid_usn(&form.usn), USN_MESSAGE),
        range: check(is_valid_range(&form.range), RANGE_MESSAGE),
        url: check(is_valid_result_url(&form.url), URL_MESSAGE),
    }
}

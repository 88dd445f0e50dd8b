//! Pull the final response's `Content-Type` out of collected header lines.

/// Returns the `Content-Type` of the last response in `lines`.
///
/// libcurl reports header lines for every response when following redirects,
/// so a status line (`HTTP/...`) starts a fresh header block.
pub(crate) fn content_type(lines: &[String]) -> Option<String> {
    let mut found = None;
    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with("HTTP/") {
            found = None;
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.trim().eq_ignore_ascii_case("content-type") {
                let value = value.trim();
                if !value.is_empty() {
                    found = Some(value.to_string());
                }
            }
        }
    }
    found
}

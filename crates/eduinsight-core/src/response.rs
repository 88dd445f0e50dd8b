//! Response branch: spreadsheet download or JSON message.

use crate::error::SubmitError;
use crate::transport::HttpResponse;
use serde_json::{Map, Value};

/// MIME type of the results workbook.
pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// What a successful answer carried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Workbook bytes to save.
    Spreadsheet(Vec<u8>),
    /// JSON acknowledgement; `None` when the service sent no `message`.
    Message(Option<String>),
}

/// True if the content type names the xlsx MIME type (parameters and case ignored).
pub fn is_spreadsheet(content_type: Option<&str>) -> bool {
    content_type.is_some_and(|ct| ct.to_ascii_lowercase().contains(XLSX_CONTENT_TYPE))
}

/// Splits a response into a [`Reply`], or the error to show the user.
///
/// A spreadsheet is accepted whatever the status. Anything else must be JSON;
/// on a non-2xx status the message comes from `error`, then `message`, then the
/// service's per-field `errors` map, then a generic `Request failed: <status>`.
pub fn classify(response: HttpResponse) -> Result<Reply, SubmitError> {
    if is_spreadsheet(response.content_type.as_deref()) {
        return Ok(Reply::Spreadsheet(response.body));
    }

    let data: Value =
        serde_json::from_slice(&response.body).map_err(SubmitError::InvalidResponse)?;
    let fields = data.as_object();
    let pick = |key: &str| fields.and_then(|m| m.get(key)).and_then(text);

    if !response.is_success() {
        let message = pick("error")
            .or_else(|| pick("message"))
            .or_else(|| fields.and_then(|m| m.get("errors")).and_then(flatten_errors))
            .unwrap_or_else(|| format!("Request failed: {}", response.status));
        return Err(SubmitError::Server {
            status: response.status,
            message,
        });
    }

    Ok(Reply::Message(pick("message")))
}

/// Renders a JSON value as alert text. Null and empty strings count as absent.
fn text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Flattens `{"field": ["msg", ...], "non_field_errors": [...]}` into one line.
fn flatten_errors(value: &Value) -> Option<String> {
    let joined = match value {
        Value::Object(map) => join_field_errors(map),
        Value::Array(items) => join_messages(items),
        other => text(other)?,
    };
    (!joined.is_empty()).then_some(joined)
}

fn join_field_errors(map: &Map<String, Value>) -> String {
    map.iter()
        .filter_map(|(field, v)| {
            let msg = match v {
                Value::Array(items) => join_messages(items),
                other => text(other)?,
            };
            if msg.is_empty() {
                None
            } else if field == "non_field_errors" {
                Some(msg)
            } else {
                Some(format!("{field}: {msg}"))
            }
        })
        .collect::<Vec<_>>()
        .join("; ")
}

fn join_messages(items: &[Value]) -> String {
    items.iter().filter_map(text).collect::<Vec<_>>().join(" ")
}

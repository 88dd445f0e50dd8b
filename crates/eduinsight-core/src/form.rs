//! Form state and the submit flow.
//!
//! [`ScraperForm`] holds the three input fields, the per-field errors from the
//! last submit, and the alert describing its outcome. [`ScraperForm::submit`]
//! validates, posts once, and routes the answer to a [`ResultSink`] or an alert.

use crate::config::InsightConfig;
use crate::error::SubmitError;
use crate::response::{self, Reply};
use crate::storage::ResultSink;
use crate::transport::Transport;
use crate::usn::Usn;
use crate::validate::{validate_form, FieldErrors};
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

pub const DOWNLOADED_MESSAGE: &str = "Results downloaded successfully!";
pub const PROCESSED_MESSAGE: &str = "Request processed successfully!";

/// One of the three user-editable fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Usn,
    Range,
    Url,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Usn, Field::Range, Field::Url];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Usn => "usn",
            Field::Range => "range",
            Field::Url => "url",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Usn => "USN",
            Field::Range => "Range",
            Field::Url => "Result URL",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The request body sent to the scraping service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormData {
    pub usn: String,
    pub range: String,
    pub url: String,
    pub is_reval: bool,
}

impl FormData {
    pub fn new(usn: &str, range: &str, url: &str) -> Self {
        Self {
            usn: usn.to_string(),
            range: range.to_string(),
            url: url.to_string(),
            is_reval: is_reval_url(url),
        }
    }
}

/// Revaluation result pages carry `RV` in their path.
pub fn is_reval_url(url: &str) -> bool {
    url.to_ascii_uppercase().contains("RV")
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AlertKind {
    #[default]
    Empty,
    Success,
    Error,
}

/// Outcome banner of the most recent submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertState {
    pub kind: AlertKind,
    pub message: String,
}

impl AlertState {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Error,
            message: message.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.kind == AlertKind::Empty
    }
}

/// How a submit ended. Details for the user are in the form's alert and errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// At least one field failed validation; nothing was sent.
    Invalid,
    /// The service returned a spreadsheet, saved at this path.
    Saved(PathBuf),
    /// The service answered with a JSON acknowledgement.
    Acknowledged,
    /// The request, the service, or saving failed.
    Failed,
}

/// Form state for one scrape request.
#[derive(Debug, Clone)]
pub struct ScraperForm {
    endpoint: String,
    output_filename: String,
    data: FormData,
    errors: FieldErrors,
    alert: AlertState,
}

impl ScraperForm {
    /// Empty form posting to the configured endpoint.
    pub fn new(cfg: &InsightConfig) -> Self {
        Self {
            endpoint: cfg.endpoint.clone(),
            output_filename: cfg.output_filename.clone(),
            data: FormData::default(),
            errors: FieldErrors::default(),
            alert: AlertState::default(),
        }
    }

    pub fn data(&self) -> &FormData {
        &self.data
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn alert(&self) -> &AlertState {
        &self.alert
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Replaces one field's value verbatim; overlong or padded input is left for
    /// validation to reject. A new URL re-derives the revaluation flag.
    pub fn set_field(&mut self, field: Field, value: &str) {
        match field {
            Field::Usn => self.data.usn = value.to_string(),
            Field::Range => self.data.range = value.to_string(),
            Field::Url => {
                self.data.url = value.to_string();
                self.data.is_reval = is_reval_url(value);
            }
        }
    }

    pub fn set_reval(&mut self, is_reval: bool) {
        self.data.is_reval = is_reval;
    }

    /// Validates, posts once, and records the result in the alert.
    ///
    /// On validation failure the transport is never called. A spreadsheet
    /// answer is handed to `sink` exactly once.
    pub fn submit<T, S>(&mut self, transport: &T, sink: &mut S) -> Outcome
    where
        T: Transport + ?Sized,
        S: ResultSink + ?Sized,
    {
        self.alert = AlertState::default();
        self.errors = validate_form(&self.data);
        if !self.errors.is_empty() {
            tracing::debug!(failed = self.errors.len(), "form rejected by validation");
            return Outcome::Invalid;
        }

        match self.send(transport, sink) {
            Ok(Some(path)) => {
                self.alert = AlertState::success(DOWNLOADED_MESSAGE);
                Outcome::Saved(path)
            }
            Ok(None) => Outcome::Acknowledged,
            Err(e) => {
                tracing::error!(error = ?e, "submission failed: {}", e);
                self.alert = AlertState::error(e.to_string());
                Outcome::Failed
            }
        }
    }

    /// Returns the saved path for a spreadsheet, `None` for a JSON acknowledgement
    /// (whose alert is set here).
    fn send<T, S>(&mut self, transport: &T, sink: &mut S) -> Result<Option<PathBuf>, SubmitError>
    where
        T: Transport + ?Sized,
        S: ResultSink + ?Sized,
    {
        let body = serde_json::to_vec(&self.data).map_err(SubmitError::Encode)?;
        if let Ok(usn) = Usn::parse(&self.data.usn) {
            tracing::info!(
                usn = %usn,
                batch = usn.batch_year,
                branch = %usn.branch,
                range = %self.data.range,
                is_reval = self.data.is_reval,
                "submitting scrape request to {}",
                self.endpoint
            );
        }

        let response = transport.post_json(&self.endpoint, &body)?;
        match response::classify(response)? {
            Reply::Spreadsheet(bytes) => {
                let path = sink
                    .deliver(&self.output_filename, &bytes)
                    .map_err(SubmitError::Storage)?;
                Ok(Some(path))
            }
            Reply::Message(message) => {
                let message = message.unwrap_or_else(|| PROCESSED_MESSAGE.to_string());
                tracing::info!("service acknowledged request: {}", message);
                self.alert = AlertState::success(message);
                Ok(None)
            }
        }
    }
}

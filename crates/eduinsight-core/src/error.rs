//! Submission error type.

use crate::transport::TransportError;
use thiserror::Error;

/// Shown when the request never got an HTTP answer.
pub const NETWORK_MESSAGE: &str =
    "Network error: Could not connect to the server. Please try again.";

/// Why a validated form did not end in a saved spreadsheet or acknowledgement.
///
/// The `Display` text is what the user sees in the error alert.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// Connecting, sending or receiving failed; no HTTP status is available.
    #[error("Network error: Could not connect to the server. Please try again.")]
    Network(#[from] TransportError),
    /// The service answered with a non-2xx status; `message` is its own explanation.
    #[error("{message}")]
    Server { status: u32, message: String },
    /// Non-spreadsheet body that is not JSON.
    #[error("Invalid response from server: {0}")]
    InvalidResponse(#[source] serde_json::Error),
    /// The request body could not be serialized.
    #[error("Could not encode request: {0}")]
    Encode(#[source] serde_json::Error),
    /// The spreadsheet arrived but could not be written.
    #[error("Could not save results: {0}")]
    Storage(#[source] std::io::Error),
}

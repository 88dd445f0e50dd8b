//! HTTP transport for the scrape request.
//!
//! The [`Transport`] trait is the seam between the submit flow and the
//! network; [`CurlTransport`] is the libcurl-backed implementation.

mod parse;

use crate::config::InsightConfig;
use crate::response::XLSX_CONTENT_TYPE;
use std::str;
use std::time::Duration;
use thiserror::Error;

/// Status, content type and body of the service's answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u32,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The request did not produce an HTTP response at all.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("curl: {0}")]
    Curl(#[from] curl::Error),
}

/// Sends one JSON POST and returns whatever the server answered, including
/// non-2xx responses. Only failures to get a response are errors.
pub trait Transport {
    fn post_json(&self, url: &str, body: &[u8]) -> Result<HttpResponse, TransportError>;
}

/// libcurl easy-handle transport. Blocking; run it from `spawn_blocking` in
/// async code.
#[derive(Debug, Clone)]
pub struct CurlTransport {
    connect_timeout: Duration,
    /// `None` waits for the service indefinitely.
    timeout: Option<Duration>,
    user_agent: String,
}

impl CurlTransport {
    pub fn new(cfg: &InsightConfig) -> Self {
        Self {
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            timeout: cfg.timeout_secs.map(Duration::from_secs),
            user_agent: cfg.user_agent(),
        }
    }
}

impl Transport for CurlTransport {
    fn post_json(&self, url: &str, body: &[u8]) -> Result<HttpResponse, TransportError> {
        let mut headers: Vec<String> = Vec::new();
        let mut received: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.post(true)?;
        easy.post_fields_copy(body)?;
        easy.follow_location(true)?;
        easy.max_redirections(10)?;
        easy.connect_timeout(self.connect_timeout)?;
        if let Some(timeout) = self.timeout {
            easy.timeout(timeout)?;
        }
        easy.useragent(&self.user_agent)?;

        let mut list = curl::easy::List::new();
        list.append("Content-Type: application/json")?;
        list.append(&format!("Accept: application/json, {}", XLSX_CONTENT_TYPE))?;
        easy.http_headers(list)?;

        {
            let mut transfer = easy.transfer();
            transfer.header_function(|data| {
                if let Ok(s) = str::from_utf8(data) {
                    headers.push(s.trim_end().to_string());
                }
                true
            })?;
            transfer.write_function(|data| {
                received.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let status = easy.response_code()?;
        let content_type = parse::content_type(&headers);
        tracing::debug!(
            status,
            content_type = content_type.as_deref().unwrap_or("-"),
            bytes = received.len(),
            "POST {} answered",
            url
        );

        Ok(HttpResponse {
            status,
            content_type,
            body: received,
        })
    }
}

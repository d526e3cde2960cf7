//! The `Transport` trait — one blocking JSON POST per call.

use crate::error::TransportError;

/// Status and body of an HTTP response, before classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    /// `None` when the server sent no content.
    pub body: Option<String>,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        Self {
            status,
            body: (!body.is_empty()).then_some(body),
        }
    }

    pub fn empty(status: u16) -> Self {
        Self { status, body: None }
    }
}

/// Executes a single HTTP POST carrying a JSON body.
///
/// Implementations must not follow redirects and must not retry: every call
/// maps to exactly one request on the wire.
///
/// # Object Safety
/// The trait is object-safe and can be stored as `Arc<dyn Transport>`.
pub trait Transport: Send + Sync + 'static {
    /// POST `json_body` to `url` with `Content-Type: application/json`.
    fn execute(&self, url: &str, json_body: &str) -> Result<RawResponse, TransportError>;

    /// Short identifier for logs.
    fn name(&self) -> &str {
        "transport"
    }
}

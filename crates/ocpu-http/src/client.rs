//! Blocking HTTP transport backed by `reqwest`.
//!
//! One POST per call. Redirects are never followed, so a `302` reaches the
//! classifier instead of being chased. No retries, no timeout unless one is
//! configured.
//!
//! The body only matters for `200` and `400`. For any other status an
//! unreadable body is dropped and the status is still reported.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use reqwest::redirect::Policy;

use ocpu_core::classify::{BAD_REQUEST, OK};
use ocpu_core::error::TransportError;
use ocpu_core::transport::{RawResponse, Transport};

/// Configuration for [`HttpTransport`].
#[derive(Debug, Clone, Default)]
pub struct HttpClientConfig {
    /// Whole-request timeout. `None` waits for as long as the server takes.
    pub request_timeout: Option<Duration>,
    /// Connection establishment timeout. `None` leaves it unbounded.
    pub connect_timeout: Option<Duration>,
}

/// Failure to set up the underlying HTTP client.
#[derive(Debug, thiserror::Error)]
#[error("failed to build HTTP client: {0}")]
pub struct BuildError(#[from] reqwest::Error);

/// Blocking JSON-over-HTTP transport.
///
/// Must not be used from inside an async context; wrap calls in
/// `tokio::task::spawn_blocking` there.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: Client,
}

impl HttpTransport {
    pub fn new(config: HttpClientConfig) -> Result<Self, BuildError> {
        let http = Client::builder()
            .redirect(Policy::none())
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(concat!("ocpu/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http })
    }

    /// Create with default configuration (no timeouts).
    pub fn with_defaults() -> Result<Self, BuildError> {
        Self::new(HttpClientConfig::default())
    }
}

impl Transport for HttpTransport {
    fn execute(&self, url: &str, json_body: &str) -> Result<RawResponse, TransportError> {
        let request = self
            .http
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(json_body.to_owned())
            .build()
            .map_err(|e| TransportError::Encode(e.without_url().to_string()))?;

        // The URL may carry credentials; keep it out of errors and events.
        let response = self.http.execute(request).map_err(|e| {
            let e = e.without_url();
            tracing::debug!(error = %e, timeout = e.is_timeout(), "HTTP request failed");
            if e.is_builder() {
                TransportError::Encode(e.to_string())
            } else {
                TransportError::Io(e.to_string())
            }
        })?;

        let status = response.status().as_u16();
        let body = match response.text() {
            Ok(body) => body,
            Err(e) if status == OK || status == BAD_REQUEST => {
                return Err(TransportError::ReadBody(e.without_url().to_string()));
            }
            Err(e) => {
                tracing::debug!(status, error = %e.without_url(), "discarding unreadable response body");
                String::new()
            }
        };

        tracing::debug!(status, bytes = body.len(), "HTTP response received");
        Ok(RawResponse::new(status, body))
    }

    fn name(&self) -> &str {
        "reqwest"
    }
}

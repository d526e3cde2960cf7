//! Maps an HTTP status and body to the invocation outcome.
//!
//! The status code is the sole discriminant:
//!
//! | status | outcome |
//! |--------|---------|
//! | 200 | body verbatim, or `ServerUnavailable` when the body is empty |
//! | 302 | `TransportFailure` (redirects are not followed) |
//! | 400 | `RequestMalformed` carrying the server's explanation |
//! | 502, 503 | `ServerUnavailable` |
//! | other | `UnrecognizedResponse` |

use crate::error::RpcError;
use crate::transport::RawResponse;

pub const OK: u16 = 200;
pub const FOUND: u16 = 302;
pub const BAD_REQUEST: u16 = 400;
pub const BAD_GATEWAY: u16 = 502;
pub const SERVICE_UNAVAILABLE: u16 = 503;

pub const NO_CONTENT_MESSAGE: &str = "No content received from the server.";
pub const REDIRECTED_MESSAGE: &str = "Response is redirected.";

/// Classify a raw response. Total over every status code.
pub fn classify(response: RawResponse) -> Result<String, RpcError> {
    let RawResponse { status, body } = response;
    let body = body.filter(|b| !b.is_empty());

    match status {
        OK => body.ok_or_else(|| RpcError::ServerUnavailable(NO_CONTENT_MESSAGE.into())),
        FOUND => Err(RpcError::TransportFailure(REDIRECTED_MESSAGE.into())),
        BAD_REQUEST => {
            let reason = body.unwrap_or_else(|| NO_CONTENT_MESSAGE.to_string());
            Err(RpcError::RequestMalformed(format!("Bad Request: {reason}")))
        }
        BAD_GATEWAY | SERVICE_UNAVAILABLE => Err(RpcError::ServerUnavailable(format!(
            "Server is not responsive ({status})."
        ))),
        other => Err(RpcError::UnrecognizedResponse(format!(
            "Unrecognized response from the server: {other}"
        ))),
    }
}

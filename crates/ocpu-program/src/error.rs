//! The single caller-facing failure of a program.

use ocpu_core::{ErrorKind, RpcError};
use thiserror::Error;

/// A failed computation.
///
/// Every lower-level failure collapses into this type with its message
/// unchanged. The originating [`ErrorKind`] stays available through
/// [`source_kind`](Self::source_kind) for callers that need to tell them apart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ProgramError {
    message: String,
    source_kind: Option<ErrorKind>,
}

impl ProgramError {
    /// A failure raised by the adapter itself rather than the RPC layer.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source_kind: None,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Kind of the RPC failure this error was collapsed from, if any.
    pub fn source_kind(&self) -> Option<ErrorKind> {
        self.source_kind
    }
}

impl From<RpcError> for ProgramError {
    fn from(err: RpcError) -> Self {
        let source_kind = Some(err.kind());
        Self {
            message: err.into_message(),
            source_kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapse_keeps_message_and_kind() {
        let cases = [
            RpcError::RequestMalformed("Bad Request: x".into()),
            RpcError::TransportFailure("Response is redirected.".into()),
            RpcError::ServerUnavailable("Server is not responsive (503).".into()),
            RpcError::UnrecognizedResponse("Unrecognized response from the server: 418".into()),
        ];
        for rpc in cases {
            let kind = rpc.kind();
            let message = rpc.message().to_string();
            let err = ProgramError::from(rpc);
            assert_eq!(err.message(), message);
            assert_eq!(err.to_string(), message);
            assert_eq!(err.source_kind(), Some(kind));
        }
    }
}

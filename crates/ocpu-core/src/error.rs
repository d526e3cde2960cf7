//! Error types for configuration, transport and invocation.

use thiserror::Error;

/// Classification of a failed invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Caller-side defect: the input could not be encoded, or the server
    /// answered `400 Bad Request`.
    RequestMalformed,
    /// I/O failure while talking to the server, or an unexpected redirect.
    TransportFailure,
    /// The server is down (`502`/`503`) or returned an empty success.
    ServerUnavailable,
    /// The server answered with a status code outside the known set.
    UnrecognizedResponse,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RequestMalformed => write!(f, "request malformed"),
            Self::TransportFailure => write!(f, "transport failure"),
            Self::ServerUnavailable => write!(f, "server unavailable"),
            Self::UnrecognizedResponse => write!(f, "unrecognized response"),
        }
    }
}

/// Errors produced by a single RPC invocation.
///
/// The `Display` output is the bare message; the kind is carried by the variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RpcError {
    #[error("{0}")]
    RequestMalformed(String),

    #[error("{0}")]
    TransportFailure(String),

    #[error("{0}")]
    ServerUnavailable(String),

    #[error("{0}")]
    UnrecognizedResponse(String),
}

impl RpcError {
    /// The kind of this failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::RequestMalformed(_) => ErrorKind::RequestMalformed,
            Self::TransportFailure(_) => ErrorKind::TransportFailure,
            Self::ServerUnavailable(_) => ErrorKind::ServerUnavailable,
            Self::UnrecognizedResponse(_) => ErrorKind::UnrecognizedResponse,
        }
    }

    /// The human-readable message, without the kind.
    pub fn message(&self) -> &str {
        match self {
            Self::RequestMalformed(m)
            | Self::TransportFailure(m)
            | Self::ServerUnavailable(m)
            | Self::UnrecognizedResponse(m) => m,
        }
    }

    /// Consume the error and return its message.
    pub fn into_message(self) -> String {
        match self {
            Self::RequestMalformed(m)
            | Self::TransportFailure(m)
            | Self::ServerUnavailable(m)
            | Self::UnrecognizedResponse(m) => m,
        }
    }
}

/// Failures raised by a [`Transport`](crate::transport::Transport) before any
/// status code is available.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The request could not be built from the caller's input.
    #[error("request could not be built: {0}")]
    Encode(String),

    /// Connecting, sending or waiting for the response failed.
    #[error("HTTP I/O error: {0}")]
    Io(String),

    /// The response arrived but its body could not be read.
    #[error("response body could not be read: {0}")]
    ReadBody(String),
}

impl From<TransportError> for RpcError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Encode(_) => {
                Self::RequestMalformed("The encoding of the input is not supported.".into())
            }
            TransportError::Io(_) => {
                Self::TransportFailure("Cannot execute the HTTP request.".into())
            }
            TransportError::ReadBody(_) => Self::TransportFailure(
                "Cannot read the output from the server response.".into(),
            ),
        }
    }
}

/// Rejected configuration. Raised at construction time, never during a call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The base address is not a valid absolute URI.
    #[error("invalid base address {address:?}: {reason}")]
    InvalidBaseAddress { address: String, reason: String },

    /// Only `http` and `https` are supported.
    #[error("unsupported scheme {0:?} (expected http or https)")]
    UnsupportedScheme(String),

    /// A package, function, user or key name cannot be used in a path.
    #[error("invalid {field} name {value:?}")]
    InvalidName { field: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_the_bare_message() {
        let err = RpcError::ServerUnavailable("Server is not responsive (502).".into());
        assert_eq!(err.to_string(), "Server is not responsive (502).");
        assert_eq!(err.kind(), ErrorKind::ServerUnavailable);
    }

    #[test]
    fn transport_errors_map_to_kinds() {
        let encode: RpcError = TransportError::Encode("bad header".into()).into();
        assert_eq!(encode.kind(), ErrorKind::RequestMalformed);

        let io: RpcError = TransportError::Io("connection refused".into()).into();
        assert_eq!(io.kind(), ErrorKind::TransportFailure);
        assert_eq!(io.message(), "Cannot execute the HTTP request.");

        let read: RpcError = TransportError::ReadBody("reset".into()).into();
        assert_eq!(read.kind(), ErrorKind::TransportFailure);
    }
}

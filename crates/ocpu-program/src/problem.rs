//! Computation requests.

use serde::Serialize;

/// A computation request that can be sent to a remote program as JSON.
pub trait Problem {
    fn to_json(&self) -> Result<String, serde_json::Error>;
}

impl Problem for serde_json::Value {
    fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Wraps any `Serialize` type as a [`Problem`].
///
/// Named arguments of the remote function map to the fields of the
/// serialized object.
#[derive(Debug, Clone)]
pub struct Arguments<T>(pub T);

impl<T: Serialize> Problem for Arguments<T> {
    fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.0)
    }
}

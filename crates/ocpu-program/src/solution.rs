//! Results of a successful computation.

use std::collections::HashMap;

use crate::value::Value;

/// A non-fatal diagnostic attached to a solution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramWarning {
    pub message: String,
}

/// Immutable result of one computation.
///
/// Solutions built by [`RpcProgram`](crate::RpcProgram) never carry warnings
/// or attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    value: Value,
    warnings: Vec<ProgramWarning>,
    attributes: HashMap<String, serde_json::Value>,
}

impl Solution {
    pub fn new(value: Value) -> Self {
        Self {
            value,
            warnings: Vec::new(),
            attributes: HashMap::new(),
        }
    }

    /// Always `true`: a `Solution` cannot exist without a value. Failed
    /// computations surface as [`ProgramError`](crate::ProgramError) instead.
    pub fn has_value(&self) -> bool {
        true
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn into_value(self) -> Value {
        self.value
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn warnings(&self) -> &[ProgramWarning] {
        &self.warnings
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    pub fn attribute(&self, name: &str) -> Option<&serde_json::Value> {
        self.attributes.get(name)
    }

    pub fn attributes(&self) -> &HashMap<String, serde_json::Value> {
        &self.attributes
    }

    /// JSON text of the wrapped value.
    pub fn to_json(&self) -> String {
        self.value.to_json()
    }
}

//! Structured values computed by a remote program.

use serde_json::Value as Json;

/// A computed value, parsed from the server's JSON output.
#[derive(Debug, Clone, PartialEq)]
pub struct Value(Json);

impl Value {
    /// Parse JSON text into a value.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text).map(Self)
    }

    /// Serialize back to compact JSON text.
    pub fn to_json(&self) -> String {
        self.0.to_string()
    }

    pub fn as_json(&self) -> &Json {
        &self.0
    }

    pub fn into_json(self) -> Json {
        self.0
    }

    /// Elements as `f64`, when the value is an array of numbers.
    pub fn as_f64_vec(&self) -> Option<Vec<f64>> {
        self.0.as_array()?.iter().map(Json::as_f64).collect()
    }
}

impl From<Json> for Value {
    fn from(json: Json) -> Self {
        Self(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_vector() {
        let v = Value::from_json("[0.12,-0.45,1.02]").unwrap();
        assert_eq!(v.as_f64_vec(), Some(vec![0.12, -0.45, 1.02]));
        assert_eq!(v.to_json(), "[0.12,-0.45,1.02]");
    }

    #[test]
    fn non_numeric_vector() {
        let v = Value::from_json(r#"["a", 1]"#).unwrap();
        assert_eq!(v.as_f64_vec(), None);
        assert!(Value::from_json("{not json").is_err());
    }
}

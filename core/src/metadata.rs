//! Metadata support for LinkML schemas

use serde::{Deserialize, Deserializer, Serialize};

/// An example of how to use an element
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Example {
    /// Example value; numbers and booleans are kept in their textual form
    #[serde(deserialize_with = "deserialize_scalar_text")]
    pub value: String,

    /// Optional description of the example
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Example {
    /// Create an example without a description
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            description: None,
        }
    }
}

/// Text form of a scalar value; `None` for sequences and maps
pub(crate) fn scalar_text(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        serde_json::Value::Bool(b) => Some(b.to_string()),
        serde_json::Value::Null => Some(String::new()),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => None,
    }
}

fn deserialize_scalar_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let value = serde_json::Value::deserialize(deserializer)?;
    scalar_text(&value)
        .ok_or_else(|| D::Error::custom(format!("example value must be a scalar, found {value}")))
}

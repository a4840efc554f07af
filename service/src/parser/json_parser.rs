//! JSON reader for `LinkML` schema documents

use linkml_core::{
    error::{LinkMLError, Result},
    types::SchemaDefinition,
};

use super::SchemaParser;

/// Reads `LinkML` schemas serialized as `JSON`
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonParser;

impl JsonParser {
    /// Create a new `JSON` parser
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl SchemaParser for JsonParser {
    fn parse_str(&self, content: &str) -> Result<SchemaDefinition> {
        serde_json::from_str(content).map_err(|err| {
            let location = format!("line {}, column {}", err.line(), err.column());
            LinkMLError::schema_load_at(format!("JSON parsing error: {err}"), location)
        })
    }
}

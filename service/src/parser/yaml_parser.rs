//! YAML reader for `LinkML` schema documents

use linkml_core::{
    error::{LinkMLError, Result},
    types::SchemaDefinition,
};

use super::SchemaParser;

/// Reads `LinkML` schemas written as `YAML`
#[derive(Debug, Default, Clone, Copy)]
pub struct YamlParser;

impl YamlParser {
    /// Create a new `YAML` parser
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl SchemaParser for YamlParser {
    fn parse_str(&self, content: &str) -> Result<SchemaDefinition> {
        if content.trim().is_empty() {
            return Err(LinkMLError::schema_load("empty YAML schema document"));
        }

        serde_yaml::from_str(content).map_err(|err| {
            let location = err.location().map_or_else(
                || "unknown location".to_string(),
                |at| format!("line {}, column {}", at.line(), at.column()),
            );
            LinkMLError::schema_load_at(format!("YAML parsing error: {err}"), location)
        })
    }
}

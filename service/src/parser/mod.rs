//! Schema parsing module
//!
//! Parses `LinkML` schemas from YAML and JSON documents. Every failure here is
//! a schema-load fault: nothing downstream runs when the document is unreadable.

use linkml_core::{
    error::{LinkMLError, Result},
    types::SchemaDefinition,
};
use std::path::Path;
use tracing::debug;

pub mod json_parser;
pub mod yaml_parser;

pub use json_parser::JsonParser;
pub use yaml_parser::YamlParser;

/// Trait for schema parsers
pub trait SchemaParser: Send + Sync {
    /// Parse schema from string content
    ///
    /// # Errors
    ///
    /// Returns `LinkMLError::SchemaLoad` if the content is not a schema document
    fn parse_str(&self, content: &str) -> Result<SchemaDefinition>;

    /// Parse schema from file
    ///
    /// # Errors
    ///
    /// Returns a `LinkMLError` if:
    /// - File cannot be read
    /// - Parsing fails
    fn parse_file(&self, path: &Path) -> Result<SchemaDefinition> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            LinkMLError::schema_load(format!("cannot read {}: {e}", path.display()))
        })?;

        self.parse_str(&content).map_err(|e| match e {
            LinkMLError::SchemaLoad { message, location } => LinkMLError::SchemaLoad {
                message: format!("{message} in file {}", path.display()),
                location,
            },
            other => other,
        })
    }
}

/// Schema format, detected from the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaFormat {
    /// `YAML` document (`.yaml`, `.yml`)
    Yaml,
    /// `JSON` document (`.json`)
    Json,
}

impl SchemaFormat {
    /// Detect the format from a path's extension
    ///
    /// # Errors
    ///
    /// Returns `LinkMLError::SchemaLoad` for a missing or unsupported extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|s| s.to_str())
            .ok_or_else(|| {
                LinkMLError::schema_load(format!("No file extension found on {}", path.display()))
            })?;

        match extension.to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            other => Err(LinkMLError::schema_load(format!(
                "Unsupported schema format: {other}"
            ))),
        }
    }
}

/// Main parser that delegates to format-specific parsers
#[derive(Default)]
pub struct Parser {
    yaml: YamlParser,
    json: JsonParser,
}

impl Parser {
    /// Create a new parser
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a schema file, detecting format from extension
    ///
    /// Definition names are filled in from their map keys once parsing
    /// succeeds. Imports are not followed; the projector only reads elements
    /// declared in the document itself.
    ///
    /// # Errors
    ///
    /// Returns `LinkMLError::SchemaLoad` if:
    /// - File has no or an unsupported extension
    /// - File cannot be read
    /// - Parsing fails
    pub fn load_file(&self, path: &Path) -> Result<SchemaDefinition> {
        let mut schema = match SchemaFormat::from_path(path)? {
            SchemaFormat::Yaml => self.yaml.parse_file(path)?,
            SchemaFormat::Json => self.json.parse_file(path)?,
        };
        schema.populate_names();

        if !schema.imports.is_empty() {
            debug!(imports = ?schema.imports, "schema imports are not resolved");
        }
        debug!(
            schema = %schema.name,
            classes = schema.classes.len(),
            slots = schema.slots.len(),
            enums = schema.enums.len(),
            "loaded schema from {}",
            path.display()
        );
        Ok(schema)
    }

    /// Parse schema from string with specified format
    ///
    /// # Errors
    ///
    /// Returns `LinkMLError::SchemaLoad` if parsing fails
    pub fn parse_str(&self, content: &str, format: SchemaFormat) -> Result<SchemaDefinition> {
        let mut schema = match format {
            SchemaFormat::Yaml => self.yaml.parse_str(content)?,
            SchemaFormat::Json => self.json.parse_str(content)?,
        };
        schema.populate_names();
        Ok(schema)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_format_detection() -> anyhow::Result<()> {
        assert_eq!(SchemaFormat::from_path(&PathBuf::from("a.yaml"))?, SchemaFormat::Yaml);
        assert_eq!(SchemaFormat::from_path(&PathBuf::from("a.YML"))?, SchemaFormat::Yaml);
        assert_eq!(SchemaFormat::from_path(&PathBuf::from("a.json"))?, SchemaFormat::Json);
        assert!(SchemaFormat::from_path(&PathBuf::from("a.xlsx")).is_err());
        assert!(SchemaFormat::from_path(&PathBuf::from("schema")).is_err());
        Ok(())
    }

    #[test]
    fn test_parse_str_populates_names() -> anyhow::Result<()> {
        let yaml = r"
id: https://example.org/soil
name: soil
classes:
  Sample:
    slots: [site]
slots:
  site:
    range: string
";
        let schema = Parser::new().parse_str(yaml, SchemaFormat::Yaml)?;
        assert_eq!(schema.classes["Sample"].name, "Sample");
        assert_eq!(schema.slots["site"].name, "site");
        Ok(())
    }

    #[test]
    fn test_missing_file_is_schema_load_fault() {
        let result = Parser::new().load_file(&PathBuf::from("/nonexistent/soil.yaml"));
        assert!(matches!(result, Err(LinkMLError::SchemaLoad { .. })));
    }
}

//! Error types for `LinkML` operations
//!
//! Every variant is terminal for a template conversion: the pipeline either
//! produces the whole template or nothing at all.

use thiserror::Error;

/// Errors raised while loading a schema or building a template
#[derive(Error, Debug)]
pub enum LinkMLError {
    /// The schema document could not be read or parsed
    #[error("Failed to load schema: {message}")]
    SchemaLoad {
        /// Error message
        message: String,
        /// Location in the document if available
        location: Option<String>,
    },

    /// The requested class does not exist in the schema
    #[error("No class '{class_name}' in schema '{schema}'")]
    UnknownClass {
        /// Class that was requested
        class_name: String,
        /// Schema name (or path) that was searched
        schema: String,
    },

    /// A slot's range names an enumeration the schema does not define
    #[error("Slot '{slot}' has range '{range}' which is not a defined enumeration")]
    InconsistentEnum {
        /// Slot holding the range
        slot: String,
        /// Enumeration name that failed to resolve
        range: String,
    },

    /// An element referenced from the schema (parent class, slot) is missing
    #[error("Element not found: {0}")]
    ElementNotFound(String),

    /// Invalid or unreadable template configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Reading the schema or writing the template failed
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Encoding or decoding failed outside schema loading
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Result type alias for `LinkML` operations
pub type Result<T> = std::result::Result<T, LinkMLError>;

impl LinkMLError {
    /// Create a new schema load error
    #[must_use]
    pub fn schema_load(message: impl Into<String>) -> Self {
        Self::SchemaLoad {
            message: message.into(),
            location: None,
        }
    }

    /// Create a new schema load error with location
    #[must_use]
    pub fn schema_load_at(message: impl Into<String>, location: impl Into<String>) -> Self {
        Self::SchemaLoad {
            message: message.into(),
            location: Some(location.into()),
        }
    }

    /// Create an unknown class error
    #[must_use]
    pub fn unknown_class(class_name: impl Into<String>, schema: impl Into<String>) -> Self {
        Self::UnknownClass {
            class_name: class_name.into(),
            schema: schema.into(),
        }
    }

    /// Create an inconsistent enumeration error
    #[must_use]
    pub fn inconsistent_enum(slot: impl Into<String>, range: impl Into<String>) -> Self {
        Self::InconsistentEnum {
            slot: slot.into(),
            range: range.into(),
        }
    }

    /// Create a new configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError(message.into())
    }

    /// Create a serialization error
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::SerializationError(message.into())
    }
}

impl From<serde_json::Error> for LinkMLError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

impl From<serde_yaml::Error> for LinkMLError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

impl From<toml::de::Error> for LinkMLError {
    fn from(err: toml::de::Error) -> Self {
        Self::ConfigError(err.to_string())
    }
}

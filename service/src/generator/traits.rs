//! Core generator traits and types

use linkml_core::prelude::*;
use thiserror::Error;

use crate::schema_view::SchemaView;

/// Result type for generator operations
pub type GeneratorResult<T> = std::result::Result<T, GeneratorError>;

/// Errors that can occur while generating output
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// Output generation error
    #[error("Generation failed: {0}")]
    Generation(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// `LinkML` core error
    #[error(transparent)]
    LinkML(#[from] LinkMLError),
}

impl From<csv::Error> for GeneratorError {
    fn from(err: csv::Error) -> Self {
        GeneratorError::Generation(err.to_string())
    }
}

impl From<GeneratorError> for LinkMLError {
    fn from(err: GeneratorError) -> Self {
        match err {
            GeneratorError::LinkML(inner) => inner,
            GeneratorError::Io(inner) => LinkMLError::IoError(inner),
            GeneratorError::Configuration(message) => LinkMLError::config(message),
            GeneratorError::Generation(message) => LinkMLError::serialization(message),
        }
    }
}

/// Core trait for synchronous generators projecting one class of a schema
pub trait Generator: Send + Sync {
    /// Generate output for a class of the schema
    ///
    /// # Errors
    /// Returns an error if the class cannot be projected or serialization fails
    fn generate(&self, view: &SchemaView, class_name: &str) -> GeneratorResult<String>;
}

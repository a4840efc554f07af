//! Configuration for the DataHarmonizer template projector
//!
//! Settings are read from a YAML or TOML file and then overridden by command
//! line flags. Every struct uses `#[serde(default)]`, so a configuration file
//! only needs to name the settings it changes.

use linkml_core::{LinkMLError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::template::CategorySource;

/// Complete configuration for a template conversion
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Section derivation and ordering
    pub sections: SectionsConfig,

    /// Formatting of multi-valued text fields
    pub formatting: FormattingConfig,

    /// Output file layout
    pub output: OutputConfig,
}

/// Where a slot's section label comes from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CategorySourceKind {
    /// A slot annotation (see `SectionsConfig::annotation_key`)
    #[default]
    Annotation,
    /// The slot's `is_a` parent
    Inheritance,
}

/// Section derivation and ordering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionsConfig {
    /// Strategy used to derive section labels
    pub category_source: CategorySourceKind,

    /// Annotation key read by the annotation strategy
    pub annotation_key: String,

    /// Label assigned to slots without a category
    pub default_label: String,

    /// Preferred section order; sections not listed follow alphabetically
    pub preferred_order: Vec<String>,
}

impl Default for SectionsConfig {
    fn default() -> Self {
        Self {
            category_source: CategorySourceKind::Annotation,
            annotation_key: "Category".to_string(),
            default_label: "default".to_string(),
            preferred_order: Vec::new(),
        }
    }
}

impl SectionsConfig {
    /// The configured category strategy
    #[must_use]
    pub fn category_source(&self) -> CategorySource {
        match self.category_source {
            CategorySourceKind::Annotation => CategorySource::Annotation {
                key: self.annotation_key.clone(),
            },
            CategorySourceKind::Inheritance => CategorySource::Inheritance,
        }
    }
}

/// Formatting of multi-valued text fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormattingConfig {
    /// Delimiter used to join comments and example values
    pub join_delimiter: char,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            join_delimiter: '|',
        }
    }
}

/// Output file layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Field delimiter of the output file
    pub delimiter: char,

    /// Whether the column header line is written
    pub include_header: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            delimiter: '\t',
            include_header: true,
        }
    }
}

impl OutputConfig {
    /// The delimiter as the single byte the CSV writer expects
    ///
    /// # Errors
    ///
    /// Returns `LinkMLError::ConfigError` for a non-ASCII delimiter
    pub fn delimiter_byte(&self) -> Result<u8> {
        u8::try_from(self.delimiter)
            .ok()
            .filter(u8::is_ascii)
            .ok_or_else(|| {
                LinkMLError::config(format!(
                    "output delimiter {:?} must be a single ASCII character",
                    self.delimiter
                ))
            })
    }
}

impl TemplateConfig {
    /// Load configuration from a `.yaml`, `.yml` or `.toml` file
    ///
    /// # Errors
    ///
    /// Returns `LinkMLError::IoError` if the file cannot be read and
    /// `LinkMLError::ConfigError` if it cannot be parsed or fails validation
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let extension = path
            .extension()
            .and_then(|s| s.to_str())
            .map(str::to_ascii_lowercase);

        let config: Self = match extension.as_deref() {
            Some("yaml" | "yml") => serde_yaml::from_str(&contents).map_err(|e| {
                LinkMLError::config(format!("Failed to parse YAML config: {e}"))
            })?,
            Some("toml") => toml::from_str(&contents)?,
            _ => {
                return Err(LinkMLError::config(format!(
                    "Unsupported config format: {}",
                    path.display()
                )));
            }
        };

        config.validate()?;
        debug!(?config, "loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Check the configuration for values that would produce a broken template
    ///
    /// # Errors
    ///
    /// Returns `LinkMLError::ConfigError` describing the first invalid value
    pub fn validate(&self) -> Result<()> {
        if self.sections.default_label.trim().is_empty() {
            return Err(LinkMLError::config("default section label must not be empty"));
        }
        if self.sections.category_source == CategorySourceKind::Annotation
            && self.sections.annotation_key.trim().is_empty()
        {
            return Err(LinkMLError::config("annotation key must not be empty"));
        }
        if self.formatting.join_delimiter == self.output.delimiter {
            return Err(LinkMLError::config(format!(
                "join delimiter {:?} collides with the output delimiter",
                self.formatting.join_delimiter
            )));
        }
        self.output.delimiter_byte()?;
        Ok(())
    }
}

//! CLI type definitions

use clap::Parser;
use linkml_core::error::Result;
use std::path::PathBuf;

use crate::config::{CategorySourceKind, TemplateConfig};

/// Generate a DataHarmonizer template from a `LinkML` schema class
#[derive(Parser, Debug)]
#[command(
    name = "linkml2dh",
    version,
    about = "Generate a DataHarmonizer template from a LinkML schema class"
)]
pub struct Linkml2DhCli {
    /// `LinkML` schema file (YAML or JSON)
    #[arg(long, value_name = "PATH")]
    pub linkml: PathBuf,

    /// Class to project into the template
    #[arg(long, value_name = "NAME", required_unless_present = "list_classes")]
    pub classname: Option<String>,

    /// Output TSV file
    #[arg(long, value_name = "PATH", required_unless_present = "list_classes")]
    pub dh: Option<PathBuf>,

    /// Preferred section order (repeat the flag or separate with commas)
    #[arg(long = "section", value_name = "LABEL", value_delimiter = ',')]
    pub sections: Vec<String>,

    /// Where slot sections are read from
    #[arg(long, value_enum)]
    pub category_source: Option<CategorySourceKind>,

    /// Annotation key holding the section label
    #[arg(long, value_name = "KEY")]
    pub annotation_key: Option<String>,

    /// Section label for slots without a category
    #[arg(long, value_name = "LABEL")]
    pub default_section: Option<String>,

    /// Configuration file (YAML or TOML)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode - only errors are reported
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Print the schema's class names and exit without writing a template
    #[arg(long)]
    pub list_classes: bool,
}

impl Linkml2DhCli {
    /// Effective configuration: the config file (or defaults) overridden by flags
    ///
    /// # Errors
    ///
    /// Returns `LinkMLError::ConfigError` if the file cannot be loaded or the
    /// combined settings are invalid.
    pub fn template_config(&self) -> Result<TemplateConfig> {
        let mut config = match &self.config {
            Some(path) => TemplateConfig::from_file(path)?,
            None => TemplateConfig::default(),
        };

        let sections: Vec<String> = self
            .sections
            .iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        if !sections.is_empty() {
            config.sections.preferred_order = sections;
        }
        if let Some(kind) = self.category_source {
            config.sections.category_source = kind;
        }
        if let Some(key) = &self.annotation_key {
            config.sections.annotation_key.clone_from(key);
        }
        if let Some(label) = &self.default_section {
            config.sections.default_label.clone_from(label);
        }

        config.validate()?;
        Ok(config)
    }
}

//! # LinkML DataHarmonizer templater
//!
//! Projects one class of a `LinkML` schema into a DataHarmonizer template: a
//! tab-separated table of section headers, one row per slot and one row per
//! permissible value of every enum-typed slot.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use linkml_service::config::TemplateConfig;
//! use linkml_service::generator::DataHarmonizerGenerator;
//! use linkml_service::schema_view::SchemaView;
//! use std::path::Path;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let view = SchemaView::load_from_file("soil.yaml")?;
//!
//!     let mut config = TemplateConfig::default();
//!     config.sections.preferred_order = vec!["location".to_string()];
//!
//!     let generator = DataHarmonizerGenerator::with_config(config);
//!     let template = generator.write_file(&view, "Sample", Path::new("sample.tsv"))?;
//!     println!("{} rows", template.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! 1. [`parser`] reads the YAML or JSON schema document.
//! 2. [`schema_view`] resolves the class's induced slots.
//! 3. [`template`] resolves sections, projects slot rows and expands enums.
//! 4. [`generator`] serializes the rows and writes the file atomically.
//!
//! Every stage either succeeds completely or returns an error; no output file
//! is written for a failed conversion.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)] // subjective determination
#![allow(clippy::doc_markdown)] // LinkML, DataHarmonizer, etc. are proper nouns

/// Schema parsing from YAML and JSON
pub mod parser;

/// Schema introspection and induced slots
pub mod schema_view;

/// Template projection: sections, rows and enum expansion
pub mod template;

/// TSV generation
pub mod generator;

/// Conversion settings
pub mod config;

/// Command-line interface
pub mod cli;

/// Prelude for convenient imports
pub mod prelude;

pub use config::TemplateConfig;
pub use generator::{DataHarmonizerGenerator, Generator, GeneratorError, GeneratorResult};
pub use schema_view::SchemaView;
pub use template::{Template, build_template};

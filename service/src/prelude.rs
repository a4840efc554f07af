//! Prelude module for the template projector
//!
//! This module re-exports commonly used types and functions for convenient import.

// Re-export core types and traits
pub use linkml_core::prelude::*;

// Re-export parser utilities
pub use crate::parser::{JsonParser, Parser, SchemaFormat, SchemaParser, YamlParser};

// Re-export projection types
pub use crate::config::{CategorySourceKind, TemplateConfig};
pub use crate::generator::{DataHarmonizerGenerator, Generator};
pub use crate::schema_view::SchemaView;
pub use crate::template::{
    CategorySource, Datatype, EnumCatalog, Requirement, SectionResolver, Template, TemplateRow,
    build_template,
};

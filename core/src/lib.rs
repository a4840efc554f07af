//! # `LinkML` Core
//!
//! Schema types and error handling shared by the DataHarmonizer template
//! projector.
//!
//! The types here model the subset of the `LinkML` metamodel that the
//! projector reads: classes with their slots, attributes and `slot_usage`,
//! slot metadata (title, range, requirement flags, comments, examples),
//! enumerations with permissible values, and free-form annotations.

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Core error types for `LinkML` operations
pub mod error;

/// Type definitions for `LinkML` schemas
pub mod types;

/// Annotation support for schema elements
pub mod annotations;

/// Metadata support for schema elements
pub mod metadata;

pub use error::{LinkMLError, Result};
pub use types::{ClassDefinition, EnumDefinition, PermissibleValue, SchemaDefinition, SlotDefinition};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::annotations::{Annotatable, AnnotationValue, Annotations};
    pub use crate::error::{LinkMLError, Result};
    pub use crate::metadata::Example;
    pub use crate::types::*;
}

//! DataHarmonizer template projection
//!
//! A template is built in four steps: the class's induced slots are grouped
//! into sections ([`sections`]), each slot becomes one row ([`projector`]),
//! enum-typed slots contribute one row per permissible value ([`enums`]), and
//! the three row blocks are concatenated ([`assembler`]).

pub mod assembler;
pub mod enums;
pub mod projector;
pub mod row;
pub mod sections;

pub use assembler::{Template, build_template, build_template_with_catalog};
pub use enums::EnumCatalog;
pub use projector::{RowProjector, infer_datatype, join_text, requirement_of};
pub use row::{COLUMNS, Datatype, Requirement, RowKind, TemplateRow};
pub use sections::{CategorySource, SectionPlan, SectionResolver};

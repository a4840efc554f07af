//! SchemaView - schema introspection for template projection
//!
//! Answers the three questions the projector asks of a schema: which classes
//! exist, which enumerations (with their permissible values) exist, and what
//! the induced slot list of a class is once inheritance, mixins, attributes
//! and `slot_usage` are resolved.

pub mod navigation;
pub mod view;

pub use navigation::{SlotResolution, class_ancestors};
pub use view::SchemaView;

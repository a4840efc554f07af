//! Annotation support for LinkML schemas
//!
//! Annotations are arbitrary key-value pairs attached to schema elements.
//! DataHarmonizer-oriented schemas use them to carry section assignments,
//! e.g. `annotations: {Category: location}`.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// An annotation value as it appears in the schema document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum AnnotationValue {
    /// Bare label, the usual form for `Category`
    String(String),
    /// `true` / `false`
    Bool(bool),
    /// Integer or float
    Number(serde_json::Number),
    /// Sequence; has no single textual value
    Array(Vec<AnnotationValue>),
    /// Object/map of values, including the `{tag, value}` form
    Object(IndexMap<String, AnnotationValue>),
    /// Explicit `null` or an empty value
    Null,
}

/// Annotations keyed by tag, in document order
pub type Annotations = IndexMap<String, AnnotationValue>;

impl AnnotationValue {
    /// Render a scalar annotation as text
    ///
    /// The `{tag: .., value: ..}` object form yields its `value`. Arrays,
    /// other objects and nulls have no single textual value.
    #[must_use]
    pub fn as_text(&self) -> Option<String> {
        match self {
            Self::String(s) => Some(s.clone()),
            Self::Bool(b) => Some(b.to_string()),
            Self::Number(n) => Some(n.to_string()),
            Self::Object(map) => map.get("value").and_then(Self::as_text),
            Self::Array(_) | Self::Null => None,
        }
    }
}

/// Schema elements that carry an annotation map
pub trait Annotatable {
    /// Annotation map, if the element declared one
    fn annotations(&self) -> Option<&Annotations>;

    /// Look up one annotation by tag
    fn get_annotation(&self, key: &str) -> Option<&AnnotationValue> {
        self.annotations()?.get(key)
    }
}

impl From<String> for AnnotationValue {
    fn from(s: String) -> Self {
        AnnotationValue::String(s)
    }
}

impl From<&str> for AnnotationValue {
    fn from(s: &str) -> Self {
        AnnotationValue::String(s.to_string())
    }
}

impl From<bool> for AnnotationValue {
    fn from(b: bool) -> Self {
        AnnotationValue::Bool(b)
    }
}

impl From<i32> for AnnotationValue {
    fn from(n: i32) -> Self {
        AnnotationValue::Number(n.into())
    }
}

//! Main `SchemaView` API for schema introspection

use linkml_core::{
    error::{LinkMLError, Result},
    types::{ClassDefinition, EnumDefinition, SchemaDefinition, SlotDefinition},
};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

use super::navigation::{SlotResolution, class_ancestors};
use crate::parser::Parser;

/// High-level `API` for `LinkML` schema introspection
///
/// Wraps a parsed schema and resolves inheritance, mixins, attributes and
/// `slot_usage` on demand. Only the loaded document is consulted: `imports`
/// are not followed.
#[derive(Clone, Debug)]
pub struct SchemaView {
    schema: Arc<SchemaDefinition>,
}

impl SchemaView {
    /// Create a new `SchemaView` from a schema definition
    #[must_use]
    pub fn new(schema: SchemaDefinition) -> Self {
        Self {
            schema: Arc::new(schema),
        }
    }

    /// Load a schema from a YAML or JSON file
    ///
    /// # Errors
    ///
    /// Returns `LinkMLError::SchemaLoad` if the file cannot be read or parsed.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let schema = Parser::new().load_file(path.as_ref())?;
        Ok(Self::new(schema))
    }

    /// The underlying schema
    #[must_use]
    pub fn schema(&self) -> &SchemaDefinition {
        &self.schema
    }

    /// Schema name, falling back to its id when unnamed
    #[must_use]
    pub fn schema_name(&self) -> &str {
        if self.schema.name.is_empty() {
            &self.schema.id
        } else {
            &self.schema.name
        }
    }

    // === Class Operations ===

    /// All class names in declaration order
    #[must_use]
    pub fn all_class_names(&self) -> Vec<String> {
        self.schema.classes.keys().cloned().collect()
    }

    /// Get a class definition by name
    #[must_use]
    pub fn get_class(&self, name: &str) -> Option<&ClassDefinition> {
        self.schema.classes.get(name)
    }

    /// Get a class definition, failing if the schema does not define it
    ///
    /// # Errors
    ///
    /// Returns `LinkMLError::UnknownClass` naming the class and the schema.
    pub fn require_class(&self, name: &str) -> Result<&ClassDefinition> {
        self.get_class(name)
            .ok_or_else(|| LinkMLError::unknown_class(name, self.schema_name()))
    }

    /// Reflexive ancestors of a class (`is_a` and mixins)
    ///
    /// # Errors
    ///
    /// Returns an error if the class or one of its parents is undefined.
    pub fn class_ancestors(&self, name: &str) -> Result<Vec<String>> {
        self.require_class(name)?;
        class_ancestors(&self.schema, name)
    }

    /// Names of the slots applicable to a class, own slots first
    ///
    /// # Errors
    ///
    /// Returns an error if the class or one of its parents is undefined.
    pub fn class_slot_names(&self, class_name: &str) -> Result<Vec<String>> {
        self.require_class(class_name)?;
        SlotResolution::new(&self.schema).class_slot_names(class_name)
    }

    // === Slot Operations ===

    /// Get a slot as it applies to a given class
    ///
    /// # Errors
    ///
    /// Returns an error if the class is unknown or the slot is undefined.
    pub fn induced_slot(&self, slot_name: &str, class_name: &str) -> Result<SlotDefinition> {
        self.require_class(class_name)?;
        SlotResolution::new(&self.schema).resolve_slot(slot_name, class_name)
    }

    /// All induced slots of a class, in slot order
    ///
    /// # Errors
    ///
    /// Returns an error if the class is unknown or any slot fails to resolve.
    pub fn class_induced_slots(&self, class_name: &str) -> Result<Vec<SlotDefinition>> {
        let resolution = SlotResolution::new(&self.schema);
        let slots = self
            .class_slot_names(class_name)?
            .iter()
            .map(|slot_name| resolution.resolve_slot(slot_name, class_name))
            .collect::<Result<Vec<_>>>()?;
        debug!(class = class_name, slots = slots.len(), "Induced class slots");
        Ok(slots)
    }

    /// URI of a slot: its `slot_uri`, else a CURIE under the default prefix
    #[must_use]
    pub fn slot_uri(&self, slot: &SlotDefinition) -> String {
        if let Some(uri) = slot.slot_uri.as_deref().filter(|u| !u.is_empty()) {
            return uri.to_string();
        }
        match self.schema.default_prefix.as_deref() {
            Some(prefix) if !prefix.is_empty() => format!("{prefix}:{}", slot.name),
            _ => String::new(),
        }
    }

    // === Enum Operations ===

    /// All enumerations in declaration order
    pub fn all_enums(&self) -> impl Iterator<Item = &EnumDefinition> {
        self.schema.enums.values()
    }

    /// Get an enumeration by name
    #[must_use]
    pub fn get_enum(&self, name: &str) -> Option<&EnumDefinition> {
        self.schema.enums.get(name)
    }
}

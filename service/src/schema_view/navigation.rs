//! Schema navigation utilities for traversing `LinkML` schemas

use linkml_core::{
    error::{LinkMLError, Result},
    types::{SchemaDefinition, SlotDefinition},
};

/// Reflexive ancestor closure of a class
///
/// The class itself comes first, followed by parents (`is_a`, then mixins)
/// in discovery order. Each name appears once, so inheritance loops
/// terminate.
///
/// # Errors
///
/// Returns `LinkMLError::ElementNotFound` if the class or any referenced
/// parent is not defined.
pub fn class_ancestors(schema: &SchemaDefinition, class_name: &str) -> Result<Vec<String>> {
    let mut ancestors = vec![class_name.to_string()];
    let mut pending = vec![class_name.to_string()];

    while let Some(current) = pending.pop() {
        let class_def = schema
            .classes
            .get(&current)
            .ok_or_else(|| LinkMLError::ElementNotFound(format!("Class '{current}'")))?;

        let parents = class_def.is_a.iter().chain(class_def.mixins.iter());
        for parent in parents {
            if !ancestors.contains(parent) {
                ancestors.push(parent.clone());
                pending.push(parent.clone());
            }
        }
    }

    Ok(ancestors)
}

/// Reflexive ancestor closure of a slot over `is_a` and mixins
fn slot_ancestors(schema: &SchemaDefinition, slot_name: &str) -> Vec<String> {
    let mut ancestors = vec![slot_name.to_string()];
    let mut pending = vec![slot_name.to_string()];

    while let Some(current) = pending.pop() {
        let Some(slot_def) = schema.slots.get(&current) else {
            continue;
        };
        for parent in slot_def.is_a.iter().chain(slot_def.mixins.iter()) {
            if !ancestors.contains(parent) {
                ancestors.push(parent.clone());
                pending.push(parent.clone());
            }
        }
    }

    ancestors
}

/// Resolves slots in the context of a class
pub struct SlotResolution<'a> {
    schema: &'a SchemaDefinition,
}

impl<'a> SlotResolution<'a> {
    /// Create a new slot resolution helper
    #[must_use]
    pub fn new(schema: &'a SchemaDefinition) -> Self {
        Self { schema }
    }

    /// Slot names applicable to a class, own slots first, without duplicates
    ///
    /// # Errors
    ///
    /// Returns `LinkMLError::ElementNotFound` if the class or an ancestor is
    /// missing.
    pub fn class_slot_names(&self, class_name: &str) -> Result<Vec<String>> {
        let mut names: Vec<String> = Vec::new();
        for ancestor in class_ancestors(self.schema, class_name)? {
            let Some(class_def) = self.schema.classes.get(&ancestor) else {
                continue;
            };
            let declared = class_def.slots.iter().chain(class_def.attributes.keys());
            for slot_name in declared {
                if !names.contains(slot_name) {
                    names.push(slot_name.clone());
                }
            }
        }
        Ok(names)
    }

    /// Resolve a slot in the context of a specific class
    ///
    /// Resolution order: the nearest attribute definition (or the schema-level
    /// slot), inheritable fields from parent slots, `slot_usage` from the most
    /// general ancestor down to the class itself, then the schema's
    /// `default_range`.
    ///
    /// # Errors
    ///
    /// Returns `LinkMLError::ElementNotFound` if the slot is defined neither as
    /// an attribute nor at schema level.
    pub fn resolve_slot(&self, slot_name: &str, class_name: &str) -> Result<SlotDefinition> {
        let ancestors = class_ancestors(self.schema, class_name)?;

        let attribute = ancestors.iter().find_map(|ancestor| {
            self.schema
                .classes
                .get(ancestor)
                .and_then(|c| c.attributes.get(slot_name))
        });

        let mut resolved = attribute
            .or_else(|| self.schema.slots.get(slot_name))
            .cloned()
            .ok_or_else(|| {
                LinkMLError::ElementNotFound(format!(
                    "Slot '{slot_name}' used by class '{class_name}'"
                ))
            })?;
        resolved.name = slot_name.to_string();

        for parent_name in slot_ancestors(self.schema, slot_name).iter().skip(1) {
            if let Some(parent) = self.schema.slots.get(parent_name) {
                resolved.inherit_from(parent);
            }
        }

        for ancestor in ancestors.iter().rev() {
            if let Some(usage) = self
                .schema
                .classes
                .get(ancestor)
                .and_then(|c| c.slot_usage.get(slot_name))
            {
                resolved.apply_usage(usage);
            }
        }

        if resolved.range.is_none() {
            resolved.range.clone_from(&self.schema.default_range);
        }

        Ok(resolved)
    }
}

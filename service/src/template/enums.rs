//! Enumeration catalog and expansion of enum-typed slots into value rows

use indexmap::IndexMap;
use linkml_core::{
    error::{LinkMLError, Result},
    types::SlotDefinition,
};

use super::row::TemplateRow;
use crate::schema_view::SchemaView;

/// Enumeration names mapped to their sorted permissible values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnumCatalog {
    values: IndexMap<String, Vec<String>>,
}

impl EnumCatalog {
    /// Build the catalog from every enumeration in the schema
    #[must_use]
    pub fn from_view(view: &SchemaView) -> Self {
        view.all_enums()
            .map(|enum_def| (enum_def.name.clone(), enum_def.sorted_values()))
            .collect()
    }

    /// Whether an enumeration with this name exists
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Sorted permissible values of an enumeration
    #[must_use]
    pub fn values(&self, name: &str) -> Option<&[String]> {
        self.values.get(name).map(Vec::as_slice)
    }

    /// Number of enumerations
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the catalog holds no enumerations
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// One row per permissible value of the slot's range, parented to the slot
    ///
    /// # Errors
    ///
    /// Returns `LinkMLError::InconsistentEnum` if the slot has no range or its
    /// range is not in the catalog.
    pub fn expand(&self, slot: &SlotDefinition) -> Result<Vec<TemplateRow>> {
        let range = slot.range.as_deref().unwrap_or_default();
        let values = self
            .values(range)
            .ok_or_else(|| LinkMLError::inconsistent_enum(&slot.name, range))?;

        Ok(values
            .iter()
            .map(|value| TemplateRow::enum_value(slot.label(), value.clone()))
            .collect())
    }
}

impl FromIterator<(String, Vec<String>)> for EnumCatalog {
    fn from_iter<I: IntoIterator<Item = (String, Vec<String>)>>(iter: I) -> Self {
        let values = iter
            .into_iter()
            .map(|(name, mut values)| {
                values.sort();
                values.dedup();
                (name, values)
            })
            .collect();
        Self { values }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn catalog() -> EnumCatalog {
        [(
            "Letters".to_string(),
            vec!["b".to_string(), "a".to_string(), "c".to_string()],
        )]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_expand_sorts_and_parents_to_label() -> anyhow::Result<()> {
        let slot = SlotDefinition {
            title: Some("letter choice".to_string()),
            range: Some("Letters".to_string()),
            ..SlotDefinition::new("letter")
        };
        let rows = catalog().expand(&slot)?;
        let labels: Vec<&str> = rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["a", "b", "c"]);
        assert!(rows.iter().all(|r| r.parent_class == "letter choice"));
        Ok(())
    }

    #[test]
    fn test_missing_enum_is_inconsistent() {
        let slot = SlotDefinition {
            range: Some("DepthBin".to_string()),
            ..SlotDefinition::new("depth")
        };
        let err = catalog().expand(&slot).unwrap_err();
        assert!(matches!(
            err,
            LinkMLError::InconsistentEnum { ref slot, ref range } if slot == "depth" && range == "DepthBin"
        ));
    }

    #[test]
    fn test_empty_enum_expands_to_nothing() -> anyhow::Result<()> {
        let catalog: EnumCatalog = [("Empty".to_string(), Vec::new())].into_iter().collect();
        let slot = SlotDefinition {
            range: Some("Empty".to_string()),
            ..SlotDefinition::new("nothing")
        };
        assert!(catalog.expand(&slot)?.is_empty());
        assert_eq!(catalog.len(), 1);
        Ok(())
    }
}

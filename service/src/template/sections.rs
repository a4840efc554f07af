//! Section resolution
//!
//! Groups slots under section labels and decides the order of the section
//! header rows. The caller's preferred order wins; sections found in the
//! schema but not named by the caller follow alphabetically. Preferred
//! sections that no slot uses are reported and dropped.

use linkml_core::types::{SlotDefinition, annotation_text};
use std::collections::BTreeSet;
use tracing::{debug, info, warn};

use crate::config::SectionsConfig;

/// Where a slot's section label is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategorySource {
    /// A slot annotation, e.g. `annotations: {Category: location}`
    Annotation {
        /// Annotation key
        key: String,
    },
    /// The slot's `is_a` parent
    Inheritance,
}

impl Default for CategorySource {
    fn default() -> Self {
        Self::Annotation {
            key: "Category".to_string(),
        }
    }
}

impl CategorySource {
    /// The category a slot asserts, if any (blank values count as none)
    #[must_use]
    pub fn category_of(&self, slot: &SlotDefinition) -> Option<String> {
        let category = match self {
            Self::Annotation { key } => annotation_text(slot, key),
            Self::Inheritance => slot.is_a.clone(),
        };
        category.filter(|c| !c.trim().is_empty())
    }
}

/// Outcome of section resolution
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionPlan {
    /// Final header order; every entry becomes exactly one header row
    pub order: Vec<String>,
    /// Preferred sections no slot belongs to (dropped from `order`)
    pub caller_only: Vec<String>,
    /// Sections found in the schema but absent from the preferred order
    pub schema_only: Vec<String>,
    /// Section label of each input slot, in input order
    pub slot_sections: Vec<String>,
}

impl SectionPlan {
    /// Whether a label is one of the resolved sections
    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.order.iter().any(|s| s == label)
    }
}

/// Resolves section labels for slots and orders the section headers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionResolver {
    source: CategorySource,
    default_label: String,
}

impl Default for SectionResolver {
    fn default() -> Self {
        Self::new(CategorySource::default(), "default")
    }
}

impl SectionResolver {
    /// Create a resolver with an explicit strategy and default label
    #[must_use]
    pub fn new(source: CategorySource, default_label: impl Into<String>) -> Self {
        Self {
            source,
            default_label: default_label.into(),
        }
    }

    /// Create a resolver from the sections configuration
    #[must_use]
    pub fn from_config(config: &SectionsConfig) -> Self {
        Self::new(config.category_source(), config.default_label.clone())
    }

    /// Label assigned to slots without a category
    #[must_use]
    pub fn default_label(&self) -> &str {
        &self.default_label
    }

    /// Section label of a single slot
    #[must_use]
    pub fn section_of(&self, slot: &SlotDefinition) -> String {
        self.source
            .category_of(slot)
            .unwrap_or_else(|| self.default_label.clone())
    }

    /// Order the sections used by `slots` against a preferred order
    ///
    /// An empty `preferred_order` means no preference.
    #[must_use]
    pub fn resolve_sections(
        &self,
        slots: &[SlotDefinition],
        preferred_order: &[String],
    ) -> SectionPlan {
        let slot_sections: Vec<String> = slots.iter().map(|s| self.section_of(s)).collect();
        let discovered: BTreeSet<String> = slot_sections.iter().cloned().collect();

        let mut order: Vec<String> = Vec::with_capacity(discovered.len());
        let mut caller_only: Vec<String> = Vec::new();
        for label in preferred_order {
            if order.contains(label) || caller_only.contains(label) {
                continue;
            }
            if discovered.contains(label) {
                order.push(label.clone());
            } else {
                caller_only.push(label.clone());
            }
        }

        let schema_only: Vec<String> = discovered
            .into_iter()
            .filter(|label| !preferred_order.contains(label))
            .collect();
        order.extend(schema_only.iter().cloned());

        if !caller_only.is_empty() {
            warn!(
                sections = ?caller_only,
                "preferred sections not used by any slot; dropping them"
            );
        }
        debug!(sections = ?schema_only, "sections found only in the schema");
        info!(sections = ?order, "resolved section order");

        SectionPlan {
            order,
            caller_only,
            schema_only,
            slot_sections,
        }
    }
}

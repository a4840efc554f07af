//! Row projection: one template row per induced slot

use linkml_core::types::SlotDefinition;
use serde_json::Value;

use super::enums::EnumCatalog;
use super::row::{Datatype, Requirement, TemplateRow};
use crate::schema_view::SchemaView;

/// Ranges rendered as decimal columns
const DECIMAL_RANGES: [&str; 3] = ["double", "float", "decimal"];

/// Infer the datatype of a slot; the first matching rule wins
///
/// Ranges that are neither a known primitive nor a catalogued enumeration
/// fall through to `Token`.
#[must_use]
pub fn infer_datatype(slot: &SlotDefinition, catalog: &EnumCatalog) -> Datatype {
    let range = slot.range.as_deref().unwrap_or_default();

    if slot.identifier == Some(true) {
        Datatype::UniqueToken
    } else if range == "date" {
        Datatype::Date
    } else if DECIMAL_RANGES.contains(&range) {
        Datatype::Decimal
    } else if catalog.contains(range) {
        Datatype::Select
    } else {
        Datatype::Token
    }
}

/// Requirement level; `required` is checked before `recommended`
#[must_use]
pub fn requirement_of(slot: &SlotDefinition) -> Option<Requirement> {
    if slot.required == Some(true) {
        Some(Requirement::Required)
    } else if slot.recommended == Some(true) {
        Some(Requirement::Recommended)
    } else {
        None
    }
}

/// Join text values in source order; an empty list gives an empty string
#[must_use]
pub fn join_text<'s>(values: impl IntoIterator<Item = &'s str>, delimiter: char) -> String {
    values
        .into_iter()
        .collect::<Vec<_>>()
        .join(&delimiter.to_string())
}

fn bound_text(bound: Option<&Value>) -> String {
    match bound {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Projects induced slots of one class into template rows
#[derive(Debug, Clone, Copy)]
pub struct RowProjector<'a> {
    view: &'a SchemaView,
    catalog: &'a EnumCatalog,
    join_delimiter: char,
}

impl<'a> RowProjector<'a> {
    /// Create a projector
    #[must_use]
    pub fn new(
        view: &'a SchemaView,
        catalog: &'a EnumCatalog,
        join_delimiter: char,
    ) -> Self {
        Self {
            view,
            catalog,
            join_delimiter,
        }
    }

    /// Project a slot into its row under an already resolved section
    #[must_use]
    pub fn project(&self, slot: &SlotDefinition, section: &str) -> TemplateRow {
        TemplateRow {
            ontology_id: self.view.slot_uri(slot),
            parent_class: section.to_string(),
            label: slot.label().to_string(),
            datatype: Some(infer_datatype(slot, self.catalog)),
            requirement: requirement_of(slot),
            min_value: bound_text(slot.minimum_value.as_ref()),
            max_value: bound_text(slot.maximum_value.as_ref()),
            pattern: slot.pattern.clone().unwrap_or_default(),
            description: slot.description.clone().unwrap_or_default(),
            guidance: join_text(slot.comments.iter().map(String::as_str), self.join_delimiter),
            examples: join_text(
                slot.examples.iter().map(|e| e.value.as_str()),
                self.join_delimiter,
            ),
            ..TemplateRow::slot()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linkml_core::metadata::Example;
    use linkml_core::types::SchemaDefinition;
    use pretty_assertions::assert_eq;

    fn catalog() -> EnumCatalog {
        [("DepthBin".to_string(), vec!["deep".to_string()])]
            .into_iter()
            .collect()
    }

    fn slot_with_range(range: &str) -> SlotDefinition {
        SlotDefinition {
            range: Some(range.to_string()),
            ..SlotDefinition::new("value")
        }
    }

    #[test]
    fn test_rule_chain() {
        let catalog = catalog();
        assert_eq!(infer_datatype(&slot_with_range("date"), &catalog), Datatype::Date);
        assert_eq!(infer_datatype(&slot_with_range("double"), &catalog), Datatype::Decimal);
        assert_eq!(infer_datatype(&slot_with_range("float"), &catalog), Datatype::Decimal);
        assert_eq!(infer_datatype(&slot_with_range("DepthBin"), &catalog), Datatype::Select);
        assert_eq!(infer_datatype(&slot_with_range("string"), &catalog), Datatype::Token);
        assert_eq!(infer_datatype(&slot_with_range("Weird"), &catalog), Datatype::Token);
        assert_eq!(infer_datatype(&SlotDefinition::new("bare"), &catalog), Datatype::Token);
    }

    #[test]
    fn test_identifier_beats_enum() {
        let slot = SlotDefinition {
            identifier: Some(true),
            ..slot_with_range("DepthBin")
        };
        assert_eq!(infer_datatype(&slot, &catalog()), Datatype::UniqueToken);
    }

    #[test]
    fn test_required_beats_recommended() {
        let mut slot = SlotDefinition::new("site");
        assert_eq!(requirement_of(&slot), None);
        slot.recommended = Some(true);
        assert_eq!(requirement_of(&slot), Some(Requirement::Recommended));
        slot.required = Some(true);
        assert_eq!(requirement_of(&slot), Some(Requirement::Required));
        slot.required = Some(false);
        assert_eq!(requirement_of(&slot), Some(Requirement::Recommended));
    }

    #[test]
    fn test_join_text() {
        assert_eq!(join_text(Vec::<&str>::new(), '|'), "");
        assert_eq!(join_text(["one"], '|'), "one");
        assert_eq!(join_text(["one", "two", "three"], '|'), "one|two|three");
    }

    #[test]
    fn test_project_fills_row() {
        let mut schema = SchemaDefinition::new("soil");
        schema.default_prefix = Some("soil".to_string());
        let view = SchemaView::new(schema);
        let catalog = catalog();
        let projector = RowProjector::new(&view, &catalog, '|');

        let slot = SlotDefinition {
            title: Some("sample depth".to_string()),
            description: Some("Depth of the sample".to_string()),
            range: Some("double".to_string()),
            recommended: Some(true),
            minimum_value: Some(serde_json::json!(0)),
            maximum_value: Some(serde_json::json!(12.5)),
            comments: vec!["in metres".to_string(), "from surface".to_string()],
            examples: vec![Example::new("0.3")],
            ..SlotDefinition::new("depth")
        };
        let row = projector.project(&slot, "measurement");

        assert_eq!(
            row.cells(),
            [
                "soil:depth",
                "measurement",
                "sample depth",
                "xs:decimal",
                "",
                "",
                "recommended",
                "0",
                "12.5",
                "",
                "",
                "Depth of the sample",
                "in metres|from surface",
                "0.3",
            ]
        );
    }

    #[test]
    fn test_project_missing_optionals_render_empty() {
        let view = SchemaView::new(SchemaDefinition::new("soil"));
        let catalog = EnumCatalog::default();
        let row = RowProjector::new(&view, &catalog, '|')
            .project(&SlotDefinition::new("site"), "default");

        assert_eq!(row.label, "site");
        assert_eq!(row.guidance, "");
        assert_eq!(row.examples, "");
        assert_eq!(row.requirement, None);
        assert!(!row.cells().contains(&"None"));
    }
}

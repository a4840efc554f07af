//! Template assembly
//!
//! Runs the pipeline for one class: induced slots, section plan, slot rows,
//! enum rows. Each stage returns its rows as values; nothing is accumulated
//! across calls.

use linkml_core::error::Result;
use tracing::info;

use super::enums::EnumCatalog;
use super::projector::RowProjector;
use super::row::{COLUMNS, Datatype, TemplateRow};
use super::sections::{SectionPlan, SectionResolver};
use crate::config::TemplateConfig;
use crate::schema_view::SchemaView;

/// A fully assembled DataHarmonizer template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    /// Class the template was projected from
    pub class_name: String,
    /// Section resolution outcome, including its diagnostics
    pub sections: SectionPlan,
    /// Section header rows, in resolved order
    pub section_rows: Vec<TemplateRow>,
    /// One row per induced slot, in slot order
    pub slot_rows: Vec<TemplateRow>,
    /// Permissible value rows, grouped by slot
    pub enum_rows: Vec<TemplateRow>,
}

impl Template {
    /// Column header
    #[must_use]
    pub fn headers(&self) -> &'static [&'static str] {
        &COLUMNS
    }

    /// All rows in output order: headers, slots, enum values
    pub fn rows(&self) -> impl Iterator<Item = &TemplateRow> {
        self.section_rows
            .iter()
            .chain(&self.slot_rows)
            .chain(&self.enum_rows)
    }

    /// Total number of rows, excluding the column header
    #[must_use]
    pub fn len(&self) -> usize {
        self.section_rows.len() + self.slot_rows.len() + self.enum_rows.len()
    }

    /// Whether the template has no rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Build the template for a class
///
/// # Errors
///
/// Returns `LinkMLError::UnknownClass` if the class is not in the schema,
/// `LinkMLError::ElementNotFound` if a slot or parent class is undefined,
/// and `LinkMLError::InconsistentEnum` if a select slot's enumeration is
/// missing from the catalog.
pub fn build_template(
    view: &SchemaView,
    class_name: &str,
    config: &TemplateConfig,
) -> Result<Template> {
    let catalog = EnumCatalog::from_view(view);
    build_template_with_catalog(view, class_name, config, &catalog)
}

/// Build the template for a class against an explicit enumeration catalog
///
/// # Errors
///
/// See [`build_template`].
pub fn build_template_with_catalog(
    view: &SchemaView,
    class_name: &str,
    config: &TemplateConfig,
    catalog: &EnumCatalog,
) -> Result<Template> {
    view.require_class(class_name)?;
    let slots = view.class_induced_slots(class_name)?;

    let resolver = SectionResolver::from_config(&config.sections);
    let sections = resolver.resolve_sections(&slots, &config.sections.preferred_order);
    let section_rows: Vec<TemplateRow> = sections.order.iter().map(TemplateRow::section).collect();

    let projector = RowProjector::new(view, catalog, config.formatting.join_delimiter);
    let slot_rows: Vec<TemplateRow> = slots
        .iter()
        .zip(&sections.slot_sections)
        .map(|(slot, section)| projector.project(slot, section))
        .collect();

    let enum_rows = slots
        .iter()
        .zip(&slot_rows)
        .filter(|(_, row)| row.datatype == Some(Datatype::Select))
        .map(|(slot, _)| catalog.expand(slot))
        .collect::<Result<Vec<_>>>()?
        .into_iter()
        .flatten()
        .collect::<Vec<_>>();

    info!(
        class = class_name,
        sections = sections.order.len(),
        slots = slot_rows.len(),
        enum_values = enum_rows.len(),
        "assembled template"
    );

    Ok(Template {
        class_name: class_name.to_string(),
        sections,
        section_rows,
        slot_rows,
        enum_rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{Parser, SchemaFormat};
    use linkml_core::LinkMLError;
    use pretty_assertions::assert_eq;

    const SCHEMA: &str = r"
id: https://example.org/soil
name: soil
classes:
  Sample:
    slots: [site, depth]
slots:
  site:
    required: true
    range: string
    annotations:
      Category: location
  depth:
    range: DepthBin
enums:
  DepthBin:
    permissible_values:
      shallow:
      deep:
";

    fn view() -> anyhow::Result<SchemaView> {
        Ok(SchemaView::new(Parser::new().parse_str(SCHEMA, SchemaFormat::Yaml)?))
    }

    #[test]
    fn test_rows_in_output_order() -> anyhow::Result<()> {
        let template = build_template(&view()?, "Sample", &TemplateConfig::default())?;
        let labels: Vec<&str> = template.rows().map(|r| r.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["default", "location", "site", "depth", "deep", "shallow"]
        );
        assert_eq!(template.len(), 6);
        Ok(())
    }

    #[test]
    fn test_select_follows_catalog() -> anyhow::Result<()> {
        let view = view()?;
        let config = TemplateConfig::default();
        let catalog: EnumCatalog = [("Other".to_string(), Vec::new())].into_iter().collect();

        let template = build_template_with_catalog(&view, "Sample", &config, &catalog)?;
        assert!(template.enum_rows.is_empty());
        assert_eq!(template.slot_rows[1].datatype, Some(Datatype::Token));
        Ok(())
    }

    #[test]
    fn test_slot_rows_take_resolved_sections() -> anyhow::Result<()> {
        let template = build_template(&view()?, "Sample", &TemplateConfig::default())?;
        let parents: Vec<&str> = template
            .slot_rows
            .iter()
            .map(|r| r.parent_class.as_str())
            .collect();
        assert_eq!(parents, template.sections.slot_sections);
        assert_eq!(parents, vec!["location", "default"]);
        Ok(())
    }

    #[test]
    fn test_numeric_list_enum_expands() -> anyhow::Result<()> {
        let schema = r"
id: https://example.org/soil
name: soil
classes:
  Sample:
    slots: [replicate]
slots:
  replicate:
    range: Replicate
enums:
  Replicate:
    permissible_values: [3, 1, 2]
";
        let view = SchemaView::new(Parser::new().parse_str(schema, SchemaFormat::Yaml)?);
        let template = build_template(&view, "Sample", &TemplateConfig::default())?;
        let values: Vec<&str> = template.enum_rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(values, vec!["1", "2", "3"]);
        assert_eq!(template.slot_rows[0].datatype, Some(Datatype::Select));
        Ok(())
    }

    #[test]
    fn test_unknown_class() -> anyhow::Result<()> {
        let result = build_template(&view()?, "Core", &TemplateConfig::default());
        assert!(matches!(result, Err(LinkMLError::UnknownClass { .. })));
        Ok(())
    }
}

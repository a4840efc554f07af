//! End-to-end tests for DataHarmonizer template projection
//!
//! These tests load the soil sampling fixture and check the assembled rows:
//! section headers first, then one row per induced slot, then enum values.

use linkml_core::prelude::*;
use linkml_service::config::{CategorySourceKind, TemplateConfig};
use linkml_service::generator::{DataHarmonizerGenerator, Generator};
use linkml_service::parser::{Parser, SchemaFormat};
use linkml_service::schema_view::SchemaView;
use linkml_service::template::{
    Datatype, EnumCatalog, Requirement, RowKind, Template, build_template,
};
use pretty_assertions::assert_eq;
use std::path::PathBuf;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/soil.yaml")
}

fn soil_view() -> Result<SchemaView> {
    SchemaView::load_from_file(fixture_path())
}

fn config_with_order(order: &[&str]) -> TemplateConfig {
    let mut config = TemplateConfig::default();
    config.sections.preferred_order = order.iter().map(ToString::to_string).collect();
    config
}

fn labels(template: &Template) -> Vec<&str> {
    template.rows().map(|r| r.label.as_str()).collect()
}

#[test]
fn test_sample_template_layout() -> anyhow::Result<()> {
    let view = soil_view()?;
    let template = build_template(&view, "Sample", &config_with_order(&["location"]))?;

    assert_eq!(
        labels(&template),
        vec![
            "location",
            "default",
            "identifiers",
            "sampling",
            "depth",
            "collection_date",
            "moisture",
            "sample_id",
            "collection site",
            "Mid",
            "deep",
            "shallow",
        ]
    );
    assert_eq!(template.sections.schema_only, vec!["default", "identifiers", "sampling"]);
    assert!(template.sections.caller_only.is_empty());
    Ok(())
}

#[test]
fn test_slot_rows_carry_projection() -> anyhow::Result<()> {
    let view = soil_view()?;
    let template = build_template(&view, "Sample", &TemplateConfig::default())?;
    let row = |label: &str| {
        template
            .slot_rows
            .iter()
            .find(|r| r.label == label)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("no row labelled {label}"))
    };

    let site = row("collection site")?;
    assert_eq!(site.ontology_id, "GAZ:00000448");
    assert_eq!(site.parent_class, "location");
    assert_eq!(site.datatype, Some(Datatype::Token));
    assert_eq!(site.requirement, Some(Requirement::Required));
    assert_eq!(site.description, "Where the sample was collected");
    assert_eq!(site.guidance, "Use the GAZ place name|Include the country");
    assert_eq!(site.examples, "Canada:Ontario");

    let depth = row("depth")?;
    assert_eq!(depth.ontology_id, "soil:depth");
    assert_eq!(depth.parent_class, "default");
    assert_eq!(depth.datatype, Some(Datatype::Select));
    assert_eq!(depth.requirement, Some(Requirement::Recommended));

    let date = row("collection_date")?;
    assert_eq!(date.datatype, Some(Datatype::Date));
    assert_eq!(date.pattern, r"^\d{4}-\d{2}-\d{2}$");
    assert_eq!(date.parent_class, "sampling");

    let moisture = row("moisture")?;
    assert_eq!(moisture.datatype, Some(Datatype::Decimal));
    assert_eq!(moisture.max_value, "100");
    assert_eq!(moisture.min_value, "");
    assert_eq!(moisture.examples, "12.5|30");
    assert_eq!(moisture.guidance, "");

    // identifier wins over the enum range
    let id = row("sample_id")?;
    assert_eq!(id.datatype, Some(Datatype::UniqueToken));
    Ok(())
}

#[test]
fn test_enum_rows_follow_slot_rows() -> anyhow::Result<()> {
    let view = soil_view()?;
    let template = build_template(&view, "Sample", &TemplateConfig::default())?;

    let kinds: Vec<RowKind> = template.rows().map(|r| r.kind).collect();
    let first_enum = kinds.iter().position(|k| *k == RowKind::EnumValue);
    let last_slot = kinds.iter().rposition(|k| *k == RowKind::Slot);
    assert!(first_enum > last_slot);

    let enum_rows: Vec<(&str, &str)> = template
        .enum_rows
        .iter()
        .map(|r| (r.parent_class.as_str(), r.label.as_str()))
        .collect();
    assert_eq!(
        enum_rows,
        vec![("depth", "Mid"), ("depth", "deep"), ("depth", "shallow")]
    );
    Ok(())
}

#[test]
fn test_every_parent_has_an_earlier_header() -> anyhow::Result<()> {
    let view = soil_view()?;
    let template = build_template(&view, "Core", &config_with_order(&["sampling"]))?;

    let mut seen: Vec<&str> = Vec::new();
    for row in template.rows() {
        match row.kind {
            RowKind::Section => seen.push(&row.label),
            RowKind::Slot => assert!(seen.contains(&row.parent_class.as_str())),
            RowKind::EnumValue => {}
        }
    }
    assert_eq!(seen.first().copied(), Some("sampling"));
    assert_eq!(seen.iter().filter(|s| **s == "default").count(), 1);
    Ok(())
}

#[test]
fn test_attributes_and_inherited_usage() -> anyhow::Result<()> {
    let view = soil_view()?;
    let template = build_template(&view, "Core", &TemplateConfig::default())?;

    let first = &template.slot_rows[0];
    assert_eq!(first.label, "core length");
    assert_eq!(first.datatype, Some(Datatype::Decimal));
    assert_eq!(first.min_value, "0");
    assert_eq!(first.parent_class, "sampling");

    let site = template
        .slot_rows
        .iter()
        .find(|r| r.label == "collection site")
        .ok_or_else(|| anyhow::anyhow!("site row missing"))?;
    assert_eq!(site.requirement, Some(Requirement::Required));
    Ok(())
}

#[test]
fn test_stale_preferred_sections_are_dropped() -> anyhow::Result<()> {
    let view = soil_view()?;
    let template = build_template(
        &view,
        "Sample",
        &config_with_order(&["sequencing", "sampling", "location"]),
    )?;

    assert_eq!(template.sections.caller_only, vec!["sequencing"]);
    assert_eq!(
        template.sections.order,
        vec!["sampling", "location", "default", "identifiers"]
    );
    assert!(!labels(&template).contains(&"sequencing"));
    Ok(())
}

#[test]
fn test_inheritance_category_source() -> anyhow::Result<()> {
    let yaml = r"
id: https://example.org/soil
name: soil
classes:
  Sample:
    slots: [depth, site]
slots:
  measurement:
    range: double
  depth:
    is_a: measurement
  site:
    range: string
";
    let view = SchemaView::new(Parser::new().parse_str(yaml, SchemaFormat::Yaml)?);
    let mut config = TemplateConfig::default();
    config.sections.category_source = CategorySourceKind::Inheritance;
    config.sections.default_label = "other".to_string();

    let template = build_template(&view, "Sample", &config)?;
    assert_eq!(template.sections.order, vec!["measurement", "other"]);
    assert_eq!(template.slot_rows[0].parent_class, "measurement");
    assert_eq!(template.slot_rows[0].datatype, Some(Datatype::Decimal));
    assert_eq!(template.slot_rows[1].parent_class, "other");
    Ok(())
}

#[test]
fn test_unknown_class_fails() -> anyhow::Result<()> {
    let view = soil_view()?;
    let err = build_template(&view, "Plot", &TemplateConfig::default()).unwrap_err();
    assert!(matches!(err, LinkMLError::UnknownClass { .. }));
    assert_eq!(err.to_string(), "No class 'Plot' in schema 'soil'");
    Ok(())
}

#[test]
fn test_missing_enum_is_inconsistent() {
    let catalog = EnumCatalog::default();
    let slot = SlotDefinition {
        range: Some("DepthBin".to_string()),
        ..SlotDefinition::new("depth")
    };
    assert!(matches!(
        catalog.expand(&slot),
        Err(LinkMLError::InconsistentEnum { .. })
    ));
}

#[test]
fn test_undefined_slot_fails() -> anyhow::Result<()> {
    let yaml = r"
id: https://example.org/soil
name: soil
classes:
  Sample:
    slots: [ghost]
";
    let view = SchemaView::new(Parser::new().parse_str(yaml, SchemaFormat::Yaml)?);
    let result = build_template(&view, "Sample", &TemplateConfig::default());
    assert!(matches!(result, Err(LinkMLError::ElementNotFound(_))));
    Ok(())
}

#[test]
fn test_generation_is_repeatable() -> anyhow::Result<()> {
    let view = soil_view()?;
    let generator = DataHarmonizerGenerator::with_config(config_with_order(&["location"]));
    let first = generator.generate(&view, "Sample")?;
    let second = generator.generate(&view, "Sample")?;
    assert_eq!(first, second);
    assert!(!first.contains("None"));
    Ok(())
}

#[test]
fn test_malformed_schema_is_load_fault() {
    let result = Parser::new().parse_str("classes: [not, a, map]", SchemaFormat::Yaml);
    assert!(matches!(result, Err(LinkMLError::SchemaLoad { .. })));
}

//! Core type definitions for LinkML schemas

use crate::annotations::{Annotatable, AnnotationValue, Annotations};
use crate::metadata::{Example, scalar_text};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A parsed `LinkML` schema document
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SchemaDefinition {
    /// Schema URI (`id`)
    #[serde(default)]
    pub id: String,

    /// Short schema name, used in error messages
    #[serde(default)]
    pub name: String,

    /// Display title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Free-text description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Prefix used to build slot CURIEs when `slot_uri` is absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_prefix: Option<String>,

    /// Imported schemas (recorded, not followed)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub imports: Vec<String>,

    /// Classes keyed by name, in document order
    #[serde(
        default,
        skip_serializing_if = "IndexMap::is_empty",
        deserialize_with = "deserialize_definitions"
    )]
    pub classes: IndexMap<String, ClassDefinition>,

    /// Schema-level slots keyed by name
    #[serde(
        default,
        skip_serializing_if = "IndexMap::is_empty",
        deserialize_with = "deserialize_definitions"
    )]
    pub slots: IndexMap<String, SlotDefinition>,

    /// Enumerations keyed by name
    #[serde(
        default,
        skip_serializing_if = "IndexMap::is_empty",
        deserialize_with = "deserialize_definitions"
    )]
    pub enums: IndexMap<String, EnumDefinition>,

    /// Range given to slots that declare none
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_range: Option<String>,

    /// Schema-level annotations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<Annotations>,
}

/// A class: the unit a template is projected from
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ClassDefinition {
    /// Class name
    #[serde(default)]
    pub name: String,

    /// Free-text description, copied into the template
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Abstract classes can still be projected
    #[serde(rename = "abstract", skip_serializing_if = "Option::is_none")]
    pub abstract_: Option<bool>,

    /// Marks a mixin class
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mixin: Option<bool>,

    /// Parent class
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_a: Option<String>,

    /// Mixed-in classes, after the parent in ancestor order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mixins: Vec<String>,

    /// Names of schema-level slots this class uses
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub slots: Vec<String>,

    /// Per-class refinements of inherited or used slots
    #[serde(
        default,
        skip_serializing_if = "IndexMap::is_empty",
        deserialize_with = "deserialize_definitions"
    )]
    pub slot_usage: IndexMap<String, SlotDefinition>,

    /// Slots defined inline on the class
    #[serde(
        default,
        skip_serializing_if = "IndexMap::is_empty",
        deserialize_with = "deserialize_definitions"
    )]
    pub attributes: IndexMap<String, SlotDefinition>,

    /// Class annotations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<Annotations>,
}

/// A slot: one column of the template
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SlotDefinition {
    /// Slot name
    #[serde(default)]
    pub name: String,

    /// Human-readable display title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Free-text description, copied into the template
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Value range: a primitive type, class or enumeration name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<String>,

    /// Value must be supplied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,

    /// Value should be supplied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommended: Option<bool>,

    /// Accepts several values
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multivalued: Option<bool>,

    /// Identifies the instance; unique within a data set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<bool>,

    /// Regular expression values must match
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    /// Lower bound, as written in the schema
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_value: Option<Value>,

    /// Upper bound, as written in the schema
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_value: Option<Value>,

    /// Ontology term for the slot
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slot_uri: Option<String>,

    /// Parent slot (`is_a`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_a: Option<String>,

    /// Mixins
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mixins: Vec<String>,

    /// Slot annotations, e.g. the section category
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<Annotations>,

    /// Example values
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<Example>,

    /// Guidance comments, in source order
    #[serde(
        default,
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "deserialize_one_or_many"
    )]
    pub comments: Vec<String>,
}

/// An enumeration: a closed set of permissible values
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EnumDefinition {
    /// Enumeration name
    #[serde(default)]
    pub name: String,

    /// Free-text description, copied into the template
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Permissible values in source order
    #[serde(
        default,
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "deserialize_permissible_values"
    )]
    pub permissible_values: Vec<PermissibleValue>,

    /// Enumeration annotations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<Annotations>,
}

/// Permissible value metadata, as written in the map form
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PermissibleValueMetadata {
    /// Explicit text, overriding the map key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// What the value means
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Ontology term for the value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meaning: Option<String>,
}

/// One permissible value of an enumeration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum PermissibleValue {
    /// Bare label
    Simple(String),
    /// Label with description or meaning
    Complex {
        /// Value text
        text: String,
        /// What the value means
        #[serde(skip_serializing_if = "Option::is_none")]
        description: Option<String>,
        /// Ontology term for the value
        #[serde(skip_serializing_if = "Option::is_none")]
        meaning: Option<String>,
    },
}

impl PermissibleValue {
    /// The value label as it appears in data
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Simple(text) | Self::Complex { text, .. } => text,
        }
    }
}

impl SchemaDefinition {
    /// Create an empty schema with the given name
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: format!("https://example.org/{name}"),
            name,
            ..Default::default()
        }
    }

    /// Fill `name` fields from their map keys
    ///
    /// `LinkML` documents key classes, slots and enums by name and usually
    /// omit the `name` field inside each definition.
    pub fn populate_names(&mut self) {
        for (class_name, class_def) in &mut self.classes {
            if class_def.name.is_empty() {
                class_def.name.clone_from(class_name);
            }
            for (attr_name, attr_def) in &mut class_def.attributes {
                if attr_def.name.is_empty() {
                    attr_def.name.clone_from(attr_name);
                }
            }
            for (slot_name, slot_def) in &mut class_def.slot_usage {
                if slot_def.name.is_empty() {
                    slot_def.name.clone_from(slot_name);
                }
            }
        }

        for (slot_name, slot_def) in &mut self.slots {
            if slot_def.name.is_empty() {
                slot_def.name.clone_from(slot_name);
            }
        }

        for (enum_name, enum_def) in &mut self.enums {
            if enum_def.name.is_empty() {
                enum_def.name.clone_from(enum_name);
            }
        }
    }
}

impl Annotatable for SchemaDefinition {
    fn annotations(&self) -> Option<&Annotations> {
        self.annotations.as_ref()
    }
}

impl ClassDefinition {
    /// Create an empty class with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

impl Annotatable for ClassDefinition {
    fn annotations(&self) -> Option<&Annotations> {
        self.annotations.as_ref()
    }
}

impl SlotDefinition {
    /// Create a slot with only its name set
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Display label: the title when set, otherwise the name
    #[must_use]
    pub fn label(&self) -> &str {
        match self.title.as_deref() {
            Some(title) if !title.is_empty() => title,
            _ => &self.name,
        }
    }

    /// Overlay the fields set in a `slot_usage` (or more specific) definition
    pub fn apply_usage(&mut self, usage: &SlotDefinition) {
        overlay(&mut self.title, &usage.title);
        overlay(&mut self.description, &usage.description);
        overlay(&mut self.range, &usage.range);
        overlay(&mut self.required, &usage.required);
        overlay(&mut self.recommended, &usage.recommended);
        overlay(&mut self.multivalued, &usage.multivalued);
        overlay(&mut self.identifier, &usage.identifier);
        overlay(&mut self.pattern, &usage.pattern);
        overlay(&mut self.minimum_value, &usage.minimum_value);
        overlay(&mut self.maximum_value, &usage.maximum_value);
        overlay(&mut self.slot_uri, &usage.slot_uri);

        if !usage.examples.is_empty() {
            self.examples.clone_from(&usage.examples);
        }
        if !usage.comments.is_empty() {
            self.comments.clone_from(&usage.comments);
        }
        if let Some(usage_annotations) = &usage.annotations {
            let merged = self.annotations.get_or_insert_with(Annotations::new);
            for (key, value) in usage_annotations {
                merged.insert(key.clone(), value.clone());
            }
        }
    }

    /// Fill fields left unset from a parent slot (`is_a` or mixin)
    ///
    /// Only the metaslots `LinkML` treats as inheritable are copied; titles,
    /// descriptions, comments and examples stay local to each slot.
    pub fn inherit_from(&mut self, parent: &SlotDefinition) {
        fill(&mut self.range, &parent.range);
        fill(&mut self.required, &parent.required);
        fill(&mut self.recommended, &parent.recommended);
        fill(&mut self.multivalued, &parent.multivalued);
        fill(&mut self.identifier, &parent.identifier);
        fill(&mut self.pattern, &parent.pattern);
        fill(&mut self.minimum_value, &parent.minimum_value);
        fill(&mut self.maximum_value, &parent.maximum_value);
    }
}

impl Annotatable for SlotDefinition {
    fn annotations(&self) -> Option<&Annotations> {
        self.annotations.as_ref()
    }
}

impl EnumDefinition {
    /// Permissible value labels in ordinal (case-sensitive) order
    #[must_use]
    pub fn sorted_values(&self) -> Vec<String> {
        let mut values: Vec<String> = self
            .permissible_values
            .iter()
            .map(|pv| pv.text().to_string())
            .collect();
        values.sort();
        values.dedup();
        values
    }
}

impl Annotatable for EnumDefinition {
    fn annotations(&self) -> Option<&Annotations> {
        self.annotations.as_ref()
    }
}

fn overlay<T: Clone>(target: &mut Option<T>, usage: &Option<T>) {
    if usage.is_some() {
        target.clone_from(usage);
    }
}

fn fill<T: Clone>(target: &mut Option<T>, parent: &Option<T>) {
    if target.is_none() {
        target.clone_from(parent);
    }
}

/// Deserialize a definition map whose entries (or the map itself) may be null
fn deserialize_definitions<'de, D, T>(
    deserializer: D,
) -> std::result::Result<IndexMap<String, T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let raw = Option::<IndexMap<String, Option<T>>>::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(|(name, definition)| (name, definition.unwrap_or_default()))
        .collect())
}

/// Accept either a single scalar or a list of scalars, kept as text
fn deserialize_one_or_many<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let not_scalar = |value: &Value| D::Error::custom(format!("expected text, found {value}"));
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(values)) => values
            .iter()
            .map(|value| scalar_text(value).ok_or_else(|| not_scalar(value)))
            .collect(),
        Some(value) => scalar_text(&value).map(|text| vec![text]).ok_or_else(|| not_scalar(&value)),
    }
}

/// Accept `permissible_values` as a list of labels or a map keyed by label
fn deserialize_permissible_values<'de, D>(
    deserializer: D,
) -> std::result::Result<Vec<PermissibleValue>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};

    struct PermissibleValuesVisitor;

    impl<'de> Visitor<'de> for PermissibleValuesVisitor {
        type Value = Vec<PermissibleValue>;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("a sequence or map of permissible values")
        }

        // ["value1", 2, {text: "value3"}]
        fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Vec<PermissibleValue>, A::Error>
        where
            A: de::SeqAccess<'de>,
        {
            let mut values = Vec::new();
            while let Some(value) = seq.next_element::<Value>()? {
                if value.is_null() {
                    continue;
                }
                let pv = match scalar_text(&value) {
                    Some(text) => PermissibleValue::Simple(text),
                    None => PermissibleValue::deserialize(value)
                        .map_err(<A::Error as de::Error>::custom)?,
                };
                values.push(pv);
            }
            Ok(values)
        }

        // { "value1": null, "value2": { "description": "..." } }
        fn visit_map<M>(self, mut map: M) -> std::result::Result<Vec<PermissibleValue>, M::Error>
        where
            M: de::MapAccess<'de>,
        {
            let mut values = Vec::new();
            while let Some((key, value)) =
                map.next_entry::<String, Option<PermissibleValueMetadata>>()?
            {
                let pv = match value {
                    Some(metadata) => PermissibleValue::Complex {
                        text: metadata.text.unwrap_or(key),
                        description: metadata.description,
                        meaning: metadata.meaning,
                    },
                    None => PermissibleValue::Simple(key),
                };
                values.push(pv);
            }
            Ok(values)
        }

        fn visit_unit<E>(self) -> std::result::Result<Vec<PermissibleValue>, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(PermissibleValuesVisitor)
}

/// Look up an annotation and render it as text
///
/// Accepts both the bare form (`Category: location`) and the tagged form
/// (`Category: {tag: Category, value: location}`).
#[must_use]
pub fn annotation_text(element: &impl Annotatable, key: &str) -> Option<String> {
    element.get_annotation(key).and_then(AnnotationValue::as_text)
}

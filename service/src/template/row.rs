//! Template rows and the closed sets of codes they carry

use std::fmt;

/// Column header of a DataHarmonizer template, in output order
pub const COLUMNS: [&str; 14] = [
    "Ontology ID",
    "parent class",
    "label",
    "datatype",
    "source",
    "data status",
    "requirement",
    "min value",
    "max value",
    "capitalize",
    "pattern",
    "description",
    "guidance",
    "examples",
];

/// Datatype assigned to a slot column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Datatype {
    /// Free text
    Token,
    /// Identifier, unique within a data set
    UniqueToken,
    /// Calendar date
    Date,
    /// Floating-point number
    Decimal,
    /// Single choice from an enumeration
    Select,
}

impl Datatype {
    /// Every datatype, in rule-chain precedence order
    pub const ALL: [Self; 5] = [
        Self::UniqueToken,
        Self::Date,
        Self::Decimal,
        Self::Select,
        Self::Token,
    ];

    /// Code understood by DataHarmonizer
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Token => "xs:token",
            Self::UniqueToken => "xs:unique",
            Self::Date => "xs:date",
            Self::Decimal => "xs:decimal",
            Self::Select => "select",
        }
    }
}

impl fmt::Display for Datatype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Requirement level of a slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Requirement {
    /// Value must be provided
    Required,
    /// Value should be provided
    Recommended,
}

impl Requirement {
    /// Code understood by DataHarmonizer
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Recommended => "recommended",
        }
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// What a row stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowKind {
    /// Section header
    Section,
    /// Slot column
    Slot,
    /// Permissible value of an enum-typed slot
    EnumValue,
}

/// One line of a DataHarmonizer template
///
/// Unset fields render as empty cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateRow {
    /// Row kind; not written to the output
    pub kind: RowKind,
    /// Ontology identifier (slot URI)
    pub ontology_id: String,
    /// Section label, or the owning slot label for enum values
    pub parent_class: String,
    /// Display label
    pub label: String,
    /// Datatype code
    pub datatype: Option<Datatype>,
    /// Source column (unused by the projector)
    pub source: String,
    /// Data status column (unused by the projector)
    pub data_status: String,
    /// Requirement level
    pub requirement: Option<Requirement>,
    /// Minimum value
    pub min_value: String,
    /// Maximum value
    pub max_value: String,
    /// Capitalization flag (unused by the projector)
    pub capitalize: String,
    /// Validation pattern
    pub pattern: String,
    /// Description
    pub description: String,
    /// Comments joined into a single cell
    pub guidance: String,
    /// Example values joined into a single cell
    pub examples: String,
}

impl TemplateRow {
    fn empty(kind: RowKind) -> Self {
        Self {
            kind,
            ontology_id: String::new(),
            parent_class: String::new(),
            label: String::new(),
            datatype: None,
            source: String::new(),
            data_status: String::new(),
            requirement: None,
            min_value: String::new(),
            max_value: String::new(),
            capitalize: String::new(),
            pattern: String::new(),
            description: String::new(),
            guidance: String::new(),
            examples: String::new(),
        }
    }

    /// Section header row: label only
    #[must_use]
    pub fn section(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::empty(RowKind::Section)
        }
    }

    /// Blank slot row, filled in by the projector
    #[must_use]
    pub fn slot() -> Self {
        Self::empty(RowKind::Slot)
    }

    /// Permissible value row parented to its slot's label
    #[must_use]
    pub fn enum_value(slot_label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            parent_class: slot_label.into(),
            label: value.into(),
            ..Self::empty(RowKind::EnumValue)
        }
    }

    /// Cells in column order
    #[must_use]
    pub fn cells(&self) -> [&str; 14] {
        [
            self.ontology_id.as_str(),
            self.parent_class.as_str(),
            self.label.as_str(),
            self.datatype.map_or("", Datatype::code),
            self.source.as_str(),
            self.data_status.as_str(),
            self.requirement.map_or("", Requirement::code),
            self.min_value.as_str(),
            self.max_value.as_str(),
            self.capitalize.as_str(),
            self.pattern.as_str(),
            self.description.as_str(),
            self.guidance.as_str(),
            self.examples.as_str(),
        ]
    }
}

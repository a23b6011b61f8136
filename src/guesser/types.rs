//! Core vocabulary of the guesser: type tags, view contexts and props

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Semantic type inferred for a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TypeTag {
    /// The record identifier
    Id,
    /// True/false values
    Boolean,
    /// Numeric values
    Number,
    /// ISO-8601 dates and date-times
    Date,
    /// Email addresses
    Email,
    /// Absolute URLs
    Url,
    /// Strings carrying markup
    RichText,
    /// Foreign key to another resource
    Reference,
    /// List of foreign keys to another resource
    ReferenceArray,
    /// Embedded list of values or objects
    Array,
    /// Anything else
    String,
}

impl TypeTag {
    /// Number of tags
    pub const COUNT: usize = 11;

    /// Every tag, in declaration order
    pub const ALL: [TypeTag; TypeTag::COUNT] = [
        TypeTag::Id,
        TypeTag::Boolean,
        TypeTag::Number,
        TypeTag::Date,
        TypeTag::Email,
        TypeTag::Url,
        TypeTag::RichText,
        TypeTag::Reference,
        TypeTag::ReferenceArray,
        TypeTag::Array,
        TypeTag::String,
    ];

    /// Get the tag name as used in serialized output
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeTag::Id => "id",
            TypeTag::Boolean => "boolean",
            TypeTag::Number => "number",
            TypeTag::Date => "date",
            TypeTag::Email => "email",
            TypeTag::Url => "url",
            TypeTag::RichText => "richText",
            TypeTag::Reference => "reference",
            TypeTag::ReferenceArray => "referenceArray",
            TypeTag::Array => "array",
            TypeTag::String => "string",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Presentation context a view is guessed for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewContext {
    /// Table of records
    List,
    /// Read-only page for one record
    Show,
    /// Form for one record
    Edit,
}

impl ViewContext {
    /// Every context
    pub const ALL: [ViewContext; 3] = [ViewContext::List, ViewContext::Show, ViewContext::Edit];

    /// Name of the view component wrapping the guessed layout
    pub fn view_name(&self) -> &'static str {
        match self {
            ViewContext::List => "List",
            ViewContext::Show => "Show",
            ViewContext::Edit => "Edit",
        }
    }
}

impl fmt::Display for ViewContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewContext::List => write!(f, "list"),
            ViewContext::Show => write!(f, "show"),
            ViewContext::Edit => write!(f, "edit"),
        }
    }
}

impl FromStr for ViewContext {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "list" => Ok(ViewContext::List),
            "show" => Ok(ViewContext::Show),
            "edit" => Ok(ViewContext::Edit),
            other => Err(format!("Unknown view context: {}", other)),
        }
    }
}

/// Construction arguments of an inferred element
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Props {
    /// Path of the field in the record (dotted for nested objects)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Target resource of a reference field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

impl Props {
    /// Props for a plain field
    pub fn source(source: impl Into<String>) -> Self {
        Self {
            source: Some(source.into()),
            reference: None,
        }
    }

    /// Props for a reference field
    pub fn reference(source: impl Into<String>, reference: impl Into<String>) -> Self {
        Self {
            source: Some(source.into()),
            reference: Some(reference.into()),
        }
    }

    /// Props with nothing set
    pub fn none() -> Self {
        Self::default()
    }
}

/// Flat description of one guessed field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSummary {
    /// Source path, empty for the items of a scalar array
    pub source: String,
    /// Inferred tag
    pub tag: TypeTag,
    /// Target resource for reference fields
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

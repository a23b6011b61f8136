//! Output formatting for CLI

use crate::guesser::{FieldSummary, InferredElement, Suggestion, ViewContext};

/// Output format of the guess command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Ready-to-paste component code
    Code,
    /// Live element tree as JSON
    Json,
    /// Live element tree as YAML
    Yaml,
    /// One line per guessed field
    Fields,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "code" => Ok(OutputFormat::Code),
            "json" => Ok(OutputFormat::Json),
            "yaml" => Ok(OutputFormat::Yaml),
            "fields" => Ok(OutputFormat::Fields),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}

/// Format the guessed fields as an aligned table
pub fn format_fields_table(fields: &[FieldSummary]) -> String {
    if fields.is_empty() {
        return "No fields guessed\n".to_string();
    }

    let width = fields
        .iter()
        .map(|field| display_source(field).len())
        .max()
        .unwrap_or(0)
        .max("Source".len());

    let mut output = format!("{:<width$}  {:<14}  Reference\n", "Source", "Type", width = width);
    for field in fields {
        output.push_str(&format!(
            "{:<width$}  {:<14}  {}\n",
            display_source(field),
            field.tag.as_str(),
            field.reference.as_deref().unwrap_or("-"),
            width = width
        ));
    }
    output
}

/// Format a guessed tree as ready-to-paste component code
pub fn format_code(
    resource: &str,
    context: ViewContext,
    tree: &InferredElement,
    package: &str,
) -> String {
    if tree.is_empty() {
        return format!("No fields guessed for '{}'\n", resource);
    }
    format!("{}\n", Suggestion::new(resource, context, tree, package))
}

fn display_source(field: &FieldSummary) -> &str {
    if field.source.is_empty() {
        "(item)"
    } else {
        &field.source
    }
}

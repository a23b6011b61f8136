//! Developer-facing code suggestions for guessed views

use std::collections::BTreeSet;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::element::InferredElement;
use super::inflect::{capitalize, singularize};
use super::registry::INDENT;
use super::types::ViewContext;

static OPENING_TAG_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"<([^/\s>]+)").unwrap());

/// Ready-to-paste component definition for a guessed view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    /// Resource the view was guessed for
    pub resource: String,
    /// Context of the view
    pub context: ViewContext,
    /// Components to import, sorted and deduplicated
    pub components: Vec<String>,
    /// Full suggestion text
    pub code: String,
}

impl Suggestion {
    /// Build the suggestion for a guessed tree
    pub fn new(resource: &str, context: ViewContext, tree: &InferredElement, package: &str) -> Self {
        let view = context.view_name();
        let representation = tree.represent(2 * INDENT);
        let components = referenced_components(&representation, context);

        let code = format!(
            "Guessed {view}:\n\n\
             import {{ {imports} }} from '{package}';\n\n\
             export const {name} = () => (\n\
             {pad}<{view}>\n\
             {representation}\n\
             {pad}</{view}>\n\
             );",
            view = view,
            imports = components.join(", "),
            package = package,
            name = component_name(resource, context),
            pad = " ".repeat(INDENT),
            representation = representation,
        );

        Self {
            resource: resource.to_string(),
            context,
            components,
            code,
        }
    }
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

/// Components named by opening tags in a representation, plus the view
///
/// `span` is plain markup, not a component, and is left out.
pub fn referenced_components(representation: &str, context: ViewContext) -> Vec<String> {
    let mut components: BTreeSet<&str> = OPENING_TAG_REGEX
        .captures_iter(representation)
        .filter_map(|captures| captures.get(1))
        .map(|m| m.as_str())
        .filter(|name| *name != "span")
        .collect();
    components.insert(context.view_name());
    components.into_iter().map(str::to_string).collect()
}

/// Name of the generated component: `posts` in a list view is `PostList`
pub fn component_name(resource: &str, context: ViewContext) -> String {
    let base: String = capitalize(&singularize(resource))
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_')
        .collect();
    format!("{}{}", base, context.view_name())
}

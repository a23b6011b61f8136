//! Inferred element trees and their live form

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::registry::{EntryKind, Registry, RegistryEntry, indent_lines};
use super::types::{FieldSummary, Props};

/// Mountable description of a UI component tree
///
/// This is what a front end receives in place of hand-written markup.
/// Boolean attributes carry the value `"true"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiElement {
    /// Component name, e.g. `TextField`
    pub component: String,
    /// Component props
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub props: BTreeMap<String, String>,
    /// Nested components
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<UiElement>,
}

impl UiElement {
    /// Create an element without children
    pub fn new<'a>(component: &str, props: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let props = props
            .into_iter()
            .map(|(name, value)| {
                let value = if value.is_empty() { "true" } else { value };
                (name.to_string(), value.to_string())
            })
            .collect();

        Self {
            component: component.to_string(),
            props,
            children: Vec::new(),
        }
    }

    /// Replace the children of this element
    pub fn with_children(mut self, children: Vec<UiElement>) -> Self {
        self.children = children;
        self
    }

    /// Whether the element has no children
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// One guessed UI node: a registry entry, its props and guessed children
///
/// Immutable once built. Children are built before their parent, so a tree
/// is always complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InferredElement {
    entry: RegistryEntry,
    props: Props,
    children: Vec<InferredElement>,
}

impl InferredElement {
    /// Create an element from its entry, props and children
    pub fn new(entry: RegistryEntry, props: Props, children: Vec<InferredElement>) -> Self {
        Self {
            entry,
            props,
            children,
        }
    }

    /// Container of a registry holding no fields
    pub fn empty(registry: &Registry) -> Self {
        Self::new(*registry.container(), Props::none(), Vec::new())
    }

    pub fn entry(&self) -> &RegistryEntry {
        &self.entry
    }

    pub fn props(&self) -> &Props {
        &self.props
    }

    pub fn children(&self) -> &[InferredElement] {
        &self.children
    }

    /// Whether the element has no children
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Build the live element tree
    pub fn materialize(&self) -> UiElement {
        let children = self.children.iter().map(InferredElement::materialize).collect();
        self.entry.materialize(&self.props, children)
    }

    /// Write the tree as JSX text, every line prefixed by `indent` spaces
    ///
    /// Output is stable: the same tree always yields the same text.
    pub fn represent(&self, indent: usize) -> String {
        let children: Vec<String> = self.children.iter().map(|child| child.represent(0)).collect();
        indent_lines(&self.entry.represent(&self.props, &children), indent)
    }

    /// Guessed fields in depth-first order
    pub fn field_summary(&self) -> Vec<FieldSummary> {
        let mut fields = Vec::new();
        self.collect_fields(&mut fields);
        fields
    }

    fn collect_fields(&self, fields: &mut Vec<FieldSummary>) {
        if let EntryKind::Field(tag) = self.entry.kind {
            fields.push(FieldSummary {
                source: self.props.source.clone().unwrap_or_default(),
                tag,
                reference: self.props.reference.clone(),
            });
        }
        for child in &self.children {
            child.collect_fields(fields);
        }
    }
}

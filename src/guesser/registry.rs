//! Field type registries for the list, show and edit contexts
//!
//! A registry maps every `TypeTag` to the component used to display or edit
//! fields of that type. Registries are built with an exhaustive `match`, so
//! a new tag cannot be added without giving it an entry in each context.

use super::element::UiElement;
use super::types::{Props, TypeTag, ViewContext};

use EntryKind::{Container, Field, ReferenceArrayChild, ReferenceChild};

/// Indentation added per nesting level in representations
pub const INDENT: usize = 4;

/// Fixed JSX attributes of an entry; an empty value is a boolean attribute
pub type Attributes = &'static [(&'static str, &'static str)];

/// What a registry entry is used for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Layout holding all guessed fields of a view
    Container,
    /// Component for fields of one type
    Field(TypeTag),
    /// Child displayed inside a reference field
    ReferenceChild,
    /// Child displayed inside a reference array field
    ReferenceArrayChild,
}

/// How an entry places its children
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Self-closing component; children are ignored
    Leaf,
    /// Children nested directly inside the component
    Parent,
    /// Children nested inside one intermediate component
    Wrapped(&'static str),
}

/// Component choice for one entry of a registry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryEntry {
    pub kind: EntryKind,
    pub component: &'static str,
    pub layout: Layout,
    pub attributes: Attributes,
}

impl RegistryEntry {
    const fn leaf(kind: EntryKind, component: &'static str) -> Self {
        Self {
            kind,
            component,
            layout: Layout::Leaf,
            attributes: &[],
        }
    }

    const fn parent(kind: EntryKind, component: &'static str) -> Self {
        Self {
            kind,
            component,
            layout: Layout::Parent,
            attributes: &[],
        }
    }

    const fn wrapped(kind: EntryKind, component: &'static str, wrapper: &'static str) -> Self {
        Self {
            kind,
            component,
            layout: Layout::Wrapped(wrapper),
            attributes: &[],
        }
    }

    const fn with(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Attributes in output order: source, reference, then fixed ones
    fn attribute_list<'a>(&'a self, props: &'a Props) -> Vec<(&'a str, &'a str)> {
        let mut list = Vec::with_capacity(2 + self.attributes.len());
        if let Some(source) = props.source.as_deref() {
            list.push(("source", source));
        }
        if let Some(reference) = props.reference.as_deref() {
            list.push(("reference", reference));
        }
        list.extend(self.attributes.iter().copied());
        list
    }

    /// Build the live element for this entry from already built children
    pub fn materialize(&self, props: &Props, children: Vec<UiElement>) -> UiElement {
        let element = UiElement::new(self.component, self.attribute_list(props));
        match self.layout {
            Layout::Leaf => element,
            Layout::Parent => element.with_children(children),
            Layout::Wrapped(wrapper) => {
                element.with_children(vec![UiElement::new(wrapper, []).with_children(children)])
            }
        }
    }

    /// Write the JSX text for this entry from already represented children
    pub fn represent(&self, props: &Props, children: &[String]) -> String {
        let attributes = self.attribute_list(props);
        match self.layout {
            Layout::Leaf => self_closing(self.component, &attributes),
            Layout::Parent => nest(self.component, &attributes, children),
            Layout::Wrapped(wrapper) => {
                let inner = nest(wrapper, &[], children);
                nest(self.component, &attributes, &[inner])
            }
        }
    }
}

fn format_attributes(attributes: &[(&str, &str)]) -> String {
    attributes
        .iter()
        .map(|(name, value)| {
            if value.is_empty() {
                format!(" {}", name)
            } else {
                format!(" {}=\"{}\"", name, value.replace('"', "&quot;"))
            }
        })
        .collect()
}

fn self_closing(component: &str, attributes: &[(&str, &str)]) -> String {
    format!("<{}{} />", component, format_attributes(attributes))
}

fn nest(component: &str, attributes: &[(&str, &str)], children: &[String]) -> String {
    if children.is_empty() {
        return self_closing(component, attributes);
    }

    let mut out = format!("<{}{}>\n", component, format_attributes(attributes));
    for child in children {
        out.push_str(&indent_lines(child, INDENT));
        out.push('\n');
    }
    out.push_str(&format!("</{}>", component));
    out
}

/// Prefix every non-empty line of `text` with `indent` spaces
pub fn indent_lines(text: &str, indent: usize) -> String {
    let pad = " ".repeat(indent);
    text.lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{}{}", pad, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Component choices for one view context
#[derive(Debug, Clone)]
pub struct Registry {
    container: RegistryEntry,
    fields: [RegistryEntry; TypeTag::COUNT],
    reference_child: RegistryEntry,
    reference_array_child: RegistryEntry,
}

impl Registry {
    /// Build the registry of a context
    pub fn new(context: ViewContext) -> Self {
        let entry: fn(EntryKind) -> RegistryEntry = match context {
            ViewContext::List => list_entry,
            ViewContext::Show => show_entry,
            ViewContext::Edit => edit_entry,
        };

        Self {
            container: entry(EntryKind::Container),
            fields: TypeTag::ALL.map(|tag| entry(EntryKind::Field(tag))),
            reference_child: entry(EntryKind::ReferenceChild),
            reference_array_child: entry(EntryKind::ReferenceArrayChild),
        }
    }

    /// Entry used for fields of the given type
    pub fn resolve(&self, tag: TypeTag) -> &RegistryEntry {
        // ALL lists the variants in declaration order
        &self.fields[tag as usize]
    }

    /// Layout holding the guessed fields
    pub fn container(&self) -> &RegistryEntry {
        &self.container
    }

    /// Child of reference fields
    pub fn reference_child(&self) -> &RegistryEntry {
        &self.reference_child
    }

    /// Child of reference array fields
    pub fn reference_array_child(&self) -> &RegistryEntry {
        &self.reference_array_child
    }
}

fn list_entry(kind: EntryKind) -> RegistryEntry {
    match kind {
        Container => RegistryEntry::parent(kind, "Datagrid").with(&[("rowClick", "edit")]),
        Field(tag) => match tag {
            TypeTag::Id | TypeTag::String => RegistryEntry::leaf(kind, "TextField"),
            TypeTag::Boolean => RegistryEntry::leaf(kind, "BooleanField"),
            TypeTag::Number => RegistryEntry::leaf(kind, "NumberField"),
            TypeTag::Date => RegistryEntry::leaf(kind, "DateField"),
            TypeTag::Email => RegistryEntry::leaf(kind, "EmailField"),
            TypeTag::Url => RegistryEntry::leaf(kind, "UrlField"),
            // Rich text is shown as plain text in a table cell
            TypeTag::RichText => RegistryEntry::leaf(kind, "TextField"),
            TypeTag::Reference => RegistryEntry::parent(kind, "ReferenceField"),
            TypeTag::ReferenceArray => {
                RegistryEntry::wrapped(kind, "ReferenceArrayField", "SingleFieldList")
            }
            TypeTag::Array => RegistryEntry::wrapped(kind, "ArrayField", "Datagrid"),
        },
        ReferenceChild => RegistryEntry::leaf(kind, "TextField").with(&[("source", "id")]),
        ReferenceArrayChild => RegistryEntry::leaf(kind, "ChipField").with(&[("source", "id")]),
    }
}

fn show_entry(kind: EntryKind) -> RegistryEntry {
    match kind {
        Container => RegistryEntry::parent(kind, "SimpleShowLayout"),
        Field(tag) => match tag {
            TypeTag::Id | TypeTag::String => RegistryEntry::leaf(kind, "TextField"),
            TypeTag::Boolean => RegistryEntry::leaf(kind, "BooleanField"),
            TypeTag::Number => RegistryEntry::leaf(kind, "NumberField"),
            TypeTag::Date => RegistryEntry::leaf(kind, "DateField"),
            TypeTag::Email => RegistryEntry::leaf(kind, "EmailField"),
            TypeTag::Url => RegistryEntry::leaf(kind, "UrlField"),
            TypeTag::RichText => RegistryEntry::leaf(kind, "RichTextField"),
            TypeTag::Reference => RegistryEntry::parent(kind, "ReferenceField"),
            TypeTag::ReferenceArray => RegistryEntry::parent(kind, "ReferenceArrayField"),
            TypeTag::Array => RegistryEntry::wrapped(kind, "ArrayField", "Datagrid"),
        },
        ReferenceChild | ReferenceArrayChild => {
            RegistryEntry::leaf(kind, "TextField").with(&[("source", "id")])
        }
    }
}

fn edit_entry(kind: EntryKind) -> RegistryEntry {
    match kind {
        Container => RegistryEntry::parent(kind, "SimpleForm"),
        Field(tag) => match tag {
            TypeTag::Id => RegistryEntry::leaf(kind, "TextInput").with(&[("disabled", "")]),
            TypeTag::String | TypeTag::Email | TypeTag::Url => {
                RegistryEntry::leaf(kind, "TextInput")
            }
            TypeTag::Boolean => RegistryEntry::leaf(kind, "BooleanInput"),
            TypeTag::Number => RegistryEntry::leaf(kind, "NumberInput"),
            TypeTag::Date => RegistryEntry::leaf(kind, "DateInput"),
            TypeTag::RichText => {
                RegistryEntry::leaf(kind, "TextInput").with(&[("multiline", "")])
            }
            TypeTag::Reference => RegistryEntry::parent(kind, "ReferenceInput"),
            TypeTag::ReferenceArray => RegistryEntry::parent(kind, "ReferenceArrayInput"),
            TypeTag::Array => RegistryEntry::wrapped(kind, "ArrayInput", "SimpleFormIterator"),
        },
        ReferenceChild => RegistryEntry::leaf(kind, "SelectInput").with(&[("optionText", "id")]),
        ReferenceArrayChild => {
            RegistryEntry::leaf(kind, "SelectArrayInput").with(&[("optionText", "id")])
        }
    }
}

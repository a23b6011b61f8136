//! Element inference: from sampled records to inferred elements

use serde_json::Value;
use tracing::debug;

use super::classify::{classify, reference_target};
use super::config::GuesserConfig;
use super::element::InferredElement;
use super::patterns::is_scalar;
use super::registry::Registry;
use super::sampler::{FieldDescriptor, flatten_arrays, sample_fields};
use super::types::{Props, TypeTag};

/// Builds inferred elements for the records of one resource
///
/// Elements are resolved against a single registry, so the same inferrer
/// always produces components of one view context.
pub struct ElementInferrer<'a> {
    registry: &'a Registry,
    config: &'a GuesserConfig,
}

impl<'a> ElementInferrer<'a> {
    /// Create an inferrer for a registry
    pub fn new(registry: &'a Registry, config: &'a GuesserConfig) -> Self {
        Self { registry, config }
    }

    /// Build one element per guessed field, in field order
    ///
    /// Nested objects contribute one element per nested field, with a
    /// dotted source.
    pub fn infer(&self, records: &[Value]) -> Vec<InferredElement> {
        self.infer_fields(self.sample(records), "", 0, false)
    }

    /// Records actually inspected: the first `sample_size`, or all when 0
    pub fn sample<'r>(&self, records: &'r [Value]) -> &'r [Value] {
        match self.config.sample_size {
            0 => records,
            n => &records[..n.min(records.len())],
        }
    }

    /// Build the view container holding every guessed field
    pub fn infer_tree(&self, records: &[Value]) -> InferredElement {
        InferredElement::new(
            *self.registry.container(),
            Props::none(),
            self.infer(records),
        )
    }

    fn infer_fields<'v>(
        &self,
        records: impl IntoIterator<Item = &'v Value>,
        prefix: &str,
        depth: usize,
        in_array: bool,
    ) -> Vec<InferredElement> {
        sample_fields(records)
            .iter()
            .flat_map(|field| self.infer_field(field, prefix, depth, in_array))
            .collect()
    }

    fn infer_field(
        &self,
        field: &FieldDescriptor,
        prefix: &str,
        depth: usize,
        in_array: bool,
    ) -> Vec<InferredElement> {
        let source = format!("{}{}", prefix, field.name);

        if field.name != "id" && field.values.iter().all(Value::is_object) {
            if depth < self.config.max_depth {
                let prefix = format!("{}.", source);
                let nested = self.infer_fields(&field.values, &prefix, depth + 1, in_array);
                if !nested.is_empty() {
                    return nested;
                }
                debug!("Field '{}' only holds empty objects", source);
            } else {
                debug!("Field '{}' nests deeper than {} levels", source, self.config.max_depth);
            }
            return vec![self.leaf(TypeTag::String, Props::source(source))];
        }

        let mut tag = classify(&field.name, &field.values);
        // Arrays are flattened one level only
        if in_array && tag == TypeTag::Array {
            tag = TypeTag::String;
        }
        debug!("Guessed field '{}' as {}", source, tag);

        let element = match tag {
            TypeTag::Reference | TypeTag::ReferenceArray => {
                match reference_target(&field.name, tag) {
                    Some(reference) => self.reference(tag, Props::reference(source, reference)),
                    None => self.leaf(TypeTag::String, Props::source(source)),
                }
            }
            TypeTag::Array => InferredElement::new(
                *self.registry.resolve(TypeTag::Array),
                Props::source(source),
                self.infer_array_items(&field.values, depth),
            ),
            _ => self.leaf(tag, Props::source(source)),
        };

        vec![element]
    }

    /// Children of an array field
    ///
    /// Arrays of objects get one child per item field, with sources relative
    /// to the item. Arrays of scalars get a single source-less child typed
    /// from the item values.
    fn infer_array_items(&self, values: &[Value], depth: usize) -> Vec<InferredElement> {
        let items = flatten_arrays(values);

        if !items.is_empty() && items.iter().all(Value::is_object) {
            return self.infer_fields(&items, "", depth + 1, true);
        }

        let scalars: Vec<Value> = items.into_iter().filter(is_scalar).collect();
        let tag = match classify("", &scalars) {
            TypeTag::Array => TypeTag::String,
            tag => tag,
        };
        vec![self.leaf(tag, Props::none())]
    }

    fn leaf(&self, tag: TypeTag, props: Props) -> InferredElement {
        InferredElement::new(*self.registry.resolve(tag), props, Vec::new())
    }

    fn reference(&self, tag: TypeTag, props: Props) -> InferredElement {
        let child = match tag {
            TypeTag::ReferenceArray => self.registry.reference_array_child(),
            _ => self.registry.reference_child(),
        };
        InferredElement::new(
            *self.registry.resolve(tag),
            props,
            vec![InferredElement::new(*child, Props::none(), Vec::new())],
        )
    }
}

//! Type classification of sampled fields
//!
//! Rules are evaluated in a fixed priority order and the first match wins.
//! Name-based rules come before value-based ones because foreign keys are
//! usually stored as plain numbers or strings. Value-based rules run from
//! the most specific (boolean, number) to the catch-all (string).

use serde_json::Value;

use super::inflect::pluralize;
use super::patterns::{contains_markup, is_date_string, is_email, is_scalar, is_url};
use super::types::TypeTag;

/// Infer the semantic type of a field from its name and non-null values
///
/// Never fails: a field no rule recognizes is a `string`.
pub fn classify(field_name: &str, values: &[Value]) -> TypeTag {
    if field_name == "id" {
        return TypeTag::Id;
    }

    if reference_stem(field_name).is_some() && all(values, is_scalar) {
        return TypeTag::Reference;
    }

    if reference_array_stem(field_name).is_some() && all(values, is_scalar_array) {
        return TypeTag::ReferenceArray;
    }

    if all(values, Value::is_array) {
        return TypeTag::Array;
    }

    if all(values, Value::is_boolean) {
        return TypeTag::Boolean;
    }

    if all(values, Value::is_number) {
        return TypeTag::Number;
    }

    if all_strings(values, is_date_string) {
        return TypeTag::Date;
    }

    if all_strings(values, is_email) {
        return TypeTag::Email;
    }

    if all_strings(values, is_url) {
        return TypeTag::Url;
    }

    if field_name.to_lowercase().contains("html")
        || (all(values, Value::is_string)
            && values.iter().filter_map(Value::as_str).any(contains_markup))
    {
        return TypeTag::RichText;
    }

    TypeTag::String
}

/// Derive the target resource of a reference field
///
/// `author_id` and `authorId` point at `authors`, `tag_ids` at `tags`.
/// Returns `None` for tags that are not references.
pub fn reference_target(field_name: &str, tag: TypeTag) -> Option<String> {
    let stem = match tag {
        TypeTag::Reference => reference_stem(field_name)?,
        TypeTag::ReferenceArray => reference_array_stem(field_name)?,
        _ => return None,
    };
    Some(pluralize(stem))
}

fn reference_stem(field_name: &str) -> Option<&str> {
    field_name
        .strip_suffix("_id")
        .or_else(|| field_name.strip_suffix("Id"))
        .filter(|stem| !stem.is_empty())
}

fn reference_array_stem(field_name: &str) -> Option<&str> {
    field_name
        .strip_suffix("_ids")
        .or_else(|| field_name.strip_suffix("Ids"))
        .filter(|stem| !stem.is_empty())
}

fn is_scalar_array(value: &Value) -> bool {
    value
        .as_array()
        .is_some_and(|items| items.iter().all(is_scalar))
}

/// Like `Iterator::all`, but false for an empty sample
fn all(values: &[Value], predicate: impl Fn(&Value) -> bool) -> bool {
    !values.is_empty() && values.iter().all(predicate)
}

fn all_strings(values: &[Value], predicate: impl Fn(&str) -> bool) -> bool {
    all(values, |v| v.as_str().is_some_and(&predicate))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_id_wins_regardless_of_values() {
        assert_eq!(classify("id", &[json!(1)]), TypeTag::Id);
        assert_eq!(classify("id", &[json!("abc")]), TypeTag::Id);
        assert_eq!(classify("id", &[json!({"a": 1})]), TypeTag::Id);
        assert_eq!(classify("id", &[json!(true)]), TypeTag::Id);
    }

    #[test]
    fn test_reference_by_suffix() {
        assert_eq!(classify("author_id", &[json!(5)]), TypeTag::Reference);
        assert_eq!(classify("authorId", &[json!("u-5")]), TypeTag::Reference);
        assert_eq!(
            reference_target("author_id", TypeTag::Reference).as_deref(),
            Some("authors")
        );
        assert_eq!(
            reference_target("categoryId", TypeTag::Reference).as_deref(),
            Some("categories")
        );
    }

    #[test]
    fn test_reference_requires_scalars() {
        assert_eq!(
            classify("author_id", &[json!({"id": 5})]),
            TypeTag::String
        );
        assert_eq!(classify("author_id", &[json!([5])]), TypeTag::Array);
    }

    #[test]
    fn test_suffix_without_stem_is_not_reference() {
        assert_eq!(classify("Id", &[json!(5)]), TypeTag::Number);
        assert_eq!(classify("_id", &[json!(5)]), TypeTag::Number);
        assert_eq!(reference_target("_id", TypeTag::Reference), None);
    }

    #[test]
    fn test_reference_array() {
        assert_eq!(
            classify("tag_ids", &[json!([1, 2]), json!([3])]),
            TypeTag::ReferenceArray
        );
        assert_eq!(classify("tagIds", &[json!(["a"])]), TypeTag::ReferenceArray);
        assert_eq!(
            reference_target("tag_ids", TypeTag::ReferenceArray).as_deref(),
            Some("tags")
        );
        assert_eq!(reference_target("title", TypeTag::String), None);
    }

    #[test]
    fn test_plural_name_scalar_array_is_array() {
        assert_eq!(classify("tags", &[json!(["a", "b"])]), TypeTag::Array);
    }

    #[test]
    fn test_array_of_objects() {
        assert_eq!(
            classify("backlinks", &[json!([{"url": "https://a.com"}])]),
            TypeTag::Array
        );
    }

    #[test]
    fn test_boolean_only_when_all_boolean() {
        assert_eq!(classify("published", &[json!(true), json!(false)]), TypeTag::Boolean);
        assert_ne!(classify("published", &[json!(true), json!(0)]), TypeTag::Boolean);
        assert_ne!(classify("published", &[json!(true), json!("no")]), TypeTag::Boolean);
    }

    #[test]
    fn test_number() {
        assert_eq!(classify("views", &[json!(12), json!(3.5)]), TypeTag::Number);
    }

    #[test]
    fn test_date() {
        assert_eq!(
            classify("published_at", &[json!("2024-01-15"), json!("2024-02-01T10:00:00Z")]),
            TypeTag::Date
        );
        assert_eq!(
            classify("published_at", &[json!("2024-01-15"), json!("soon")]),
            TypeTag::String
        );
    }

    #[test]
    fn test_email_and_url() {
        assert_eq!(classify("contact", &[json!("a@example.com")]), TypeTag::Email);
        assert_eq!(classify("homepage", &[json!("https://example.com")]), TypeTag::Url);
    }

    #[test]
    fn test_rich_text() {
        assert_eq!(classify("body", &[json!("<p>Hello</p>")]), TypeTag::RichText);
        assert_eq!(classify("bodyHtml", &[json!("Hello")]), TypeTag::RichText);
        assert_eq!(classify("body", &[json!("Hello")]), TypeTag::String);
    }

    #[test]
    fn test_fallback_to_string() {
        assert_eq!(classify("title", &[json!("A"), json!(1)]), TypeTag::String);
        assert_eq!(classify("anything", &[]), TypeTag::String);
    }
}

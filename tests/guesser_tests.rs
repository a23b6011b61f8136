//! Guesser tests

use std::sync::Arc;

use admin_guesser::guesser::{
    FieldSummary, Guesser, GuesserConfig, GuesserError, Suggestion, TypeTag, ViewContext,
    classify, records_from_json, reference_target,
};
use serde_json::{Value, json};

fn guesser() -> Guesser<Vec<Suggestion>> {
    let config = GuesserConfig::builder().emit_suggestions(true).build();
    Guesser::with_sink(config, Vec::new())
}

fn tags(fields: &[FieldSummary]) -> Vec<(&str, TypeTag)> {
    fields
        .iter()
        .map(|field| (field.source.as_str(), field.tag))
        .collect()
}

mod classification_tests {
    use super::*;

    #[test]
    fn test_id_wins_over_value_type() {
        for value in [json!(1), json!("abc"), json!(true), json!("2024-01-15"), json!([1, 2])] {
            assert_eq!(classify("id", &[value]), TypeTag::Id);
        }
    }

    #[test]
    fn test_id_suffix_with_scalars_is_reference() {
        for values in [
            vec![json!(5)],
            vec![json!("a7f3")],
            vec![json!(1), json!("2")],
            vec![json!("2024-01-15")],
            vec![json!("someone@example.com")],
        ] {
            assert_eq!(classify("author_id", &values), TypeTag::Reference);
        }
        assert_eq!(classify("authorId", &[json!(5)]), TypeTag::Reference);
    }

    #[test]
    fn test_boolean_requires_every_value() {
        assert_eq!(classify("published", &[json!(true), json!(false)]), TypeTag::Boolean);
        assert_ne!(classify("published", &[json!(true), json!("no")]), TypeTag::Boolean);
        assert_ne!(classify("published", &[json!(true), json!(0)]), TypeTag::Boolean);
    }

    #[test]
    fn test_value_formats() {
        assert_eq!(classify("views", &[json!(1), json!(2.5)]), TypeTag::Number);
        assert_eq!(classify("published_at", &[json!("2024-01-15T10:30:00Z")]), TypeTag::Date);
        assert_eq!(classify("contact", &[json!("ann@example.com")]), TypeTag::Email);
        assert_eq!(classify("website", &[json!("https://example.com")]), TypeTag::Url);
        assert_eq!(classify("body", &[json!("<p>Hello</p>")]), TypeTag::RichText);
        assert_eq!(classify("body_html", &[json!("plain")]), TypeTag::RichText);
        assert_eq!(classify("title", &[json!("Hello")]), TypeTag::String);
    }

    #[test]
    fn test_reference_arrays() {
        assert_eq!(classify("tag_ids", &[json!([1, 2])]), TypeTag::ReferenceArray);
        assert_eq!(classify("tagIds", &[json!(["a"])]), TypeTag::ReferenceArray);
        assert_eq!(classify("tags", &[json!(["a", "b"])]), TypeTag::Array);
        assert_eq!(
            reference_target("tag_ids", TypeTag::ReferenceArray).as_deref(),
            Some("tags")
        );
    }

    #[test]
    fn test_mixed_values_fall_back_to_string() {
        assert_eq!(classify("misc", &[json!(1), json!("one")]), TypeTag::String);
        assert_eq!(classify("empty", &[]), TypeTag::String);
    }
}

mod scenario_tests {
    use super::*;

    #[test]
    fn test_list_of_posts() {
        let records = vec![
            json!({"id": 1, "title": "A", "published": true}),
            json!({"id": 2, "title": "B", "published": false}),
        ];
        let mut guesser = guesser();
        let tree = guesser.guess("posts", ViewContext::List, &records);

        assert_eq!(
            tags(&tree.field_summary()),
            vec![
                ("id", TypeTag::Id),
                ("title", TypeTag::String),
                ("published", TypeTag::Boolean),
            ]
        );

        let element = tree.materialize();
        assert_eq!(element.component, "Datagrid");
        let cells: Vec<&str> = element.children.iter().map(|c| c.component.as_str()).collect();
        assert_eq!(cells, vec!["TextField", "TextField", "BooleanField"]);
    }

    #[test]
    fn test_reference_target() {
        let mut guesser = guesser();
        let tree = guesser.guess("posts", ViewContext::Show, &[json!({"id": 1, "author_id": 5})]);

        let fields = tree.field_summary();
        assert_eq!(fields[1].source, "author_id");
        assert_eq!(fields[1].tag, TypeTag::Reference);
        assert_eq!(fields[1].reference.as_deref(), Some("authors"));
    }

    #[test]
    fn test_scalar_tags_are_array_of_strings() {
        let mut guesser = guesser();
        let tree = guesser.guess("posts", ViewContext::List, &[json!({"id": 1, "tags": ["a", "b"]})]);

        assert_eq!(
            tags(&tree.field_summary()),
            vec![("id", TypeTag::Id), ("tags", TypeTag::Array), ("", TypeTag::String)]
        );
    }

    #[test]
    fn test_empty_sample_in_every_context() {
        for context in ViewContext::ALL {
            let mut guesser = guesser();
            let tree = guesser.guess("posts", context, &[]);

            let element = tree.materialize();
            assert!(element.children.is_empty());

            let text = tree.represent(0);
            assert!(!text.is_empty());
            assert!(text.starts_with('<') && text.ends_with("/>"));
        }
    }

    #[test]
    fn test_edit_view_representation() {
        let records = vec![json!({
            "id": 7,
            "title": "Hello",
            "body": "<p>Hi</p>",
            "author_id": 3,
            "tag_ids": [1, 2]
        })];
        let mut guesser = guesser();
        let tree = guesser.guess("posts", ViewContext::Edit, &records);

        let expected = "\
<SimpleForm>
    <TextInput source=\"id\" disabled />
    <TextInput source=\"title\" />
    <TextInput source=\"body\" multiline />
    <ReferenceInput source=\"author_id\" reference=\"authors\">
        <SelectInput optionText=\"id\" />
    </ReferenceInput>
    <ReferenceArrayInput source=\"tag_ids\" reference=\"tags\">
        <SelectArrayInput optionText=\"id\" />
    </ReferenceArrayInput>
</SimpleForm>";
        assert_eq!(tree.represent(0), expected);
    }

    #[test]
    fn test_show_reference_array_representation() {
        let mut guesser = guesser();
        let tree = guesser.guess("posts", ViewContext::Show, &[json!({"id": 1, "tag_ids": [1, 2]})]);

        let expected = "\
<SimpleShowLayout>
    <TextField source=\"id\" />
    <ReferenceArrayField source=\"tag_ids\" reference=\"tags\">
        <TextField source=\"id\" />
    </ReferenceArrayField>
</SimpleShowLayout>";
        assert_eq!(tree.represent(0), expected);
    }

    #[test]
    fn test_empty_object_field_is_kept() {
        let mut guesser = guesser();
        let tree = guesser.guess("posts", ViewContext::List, &[json!({"id": 1, "meta": {}})]);

        assert_eq!(
            tags(&tree.field_summary()),
            vec![("id", TypeTag::Id), ("meta", TypeTag::String)]
        );
        assert_eq!(
            tree.represent(0),
            "<Datagrid rowClick=\"edit\">\n    <TextField source=\"id\" />\n    <TextField source=\"meta\" />\n</Datagrid>"
        );
    }

    #[test]
    fn test_show_array_of_objects() {
        let records = vec![json!({
            "id": 1,
            "backlinks": [{"date": "2024-01-15", "url": "https://example.com/a"}]
        })];
        let mut guesser = guesser();
        let tree = guesser.guess("posts", ViewContext::Show, &records);

        let expected = "\
<SimpleShowLayout>
    <TextField source=\"id\" />
    <ArrayField source=\"backlinks\">
        <Datagrid>
            <DateField source=\"date\" />
            <UrlField source=\"url\" />
        </Datagrid>
    </ArrayField>
</SimpleShowLayout>";
        assert_eq!(tree.represent(0), expected);
    }
}

mod memoization_tests {
    use super::*;

    #[test]
    fn test_guess_is_idempotent_per_resource() {
        let mut guesser = guesser();
        let first = guesser.guess("posts", ViewContext::List, &[json!({"id": 1})]);
        let second = guesser.guess("posts", ViewContext::List, &[json!({"name": "other"})]);

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(guesser.sink().len(), 1);
    }

    #[test]
    fn test_resource_change_recomputes() {
        let mut guesser = guesser();
        let posts = guesser.guess("posts", ViewContext::List, &[json!({"id": 1})]);
        let users = guesser.guess("users", ViewContext::List, &[json!({"id": 1, "email": "a@b.co"})]);
        let posts_again = guesser.guess("posts", ViewContext::List, &[json!({"id": 1})]);

        assert!(!Arc::ptr_eq(&posts, &users));
        assert!(!Arc::ptr_eq(&posts, &posts_again));
        assert_eq!(guesser.sink().len(), 3);
    }

    #[test]
    fn test_represent_is_deterministic() {
        let records = vec![json!({"id": 1, "author": {"name": "Ann", "company_id": 2}})];
        let mut guesser = guesser();
        let tree = guesser.guess("posts", ViewContext::Show, &records);
        assert_eq!(tree.represent(8), tree.represent(8));

        let mut other = super::guesser();
        let again = other.guess("posts", ViewContext::Show, &records);
        assert_eq!(tree.represent(0), again.represent(0));
    }
}

mod suggestion_tests {
    use super::*;

    #[test]
    fn test_suggestion_for_first_guess() {
        let mut guesser = guesser();
        guesser.guess("categories", ViewContext::Show, &[json!({"id": 1, "name": "News"})]);

        let suggestion = &guesser.sink()[0];
        assert_eq!(suggestion.resource, "categories");
        assert_eq!(suggestion.context, ViewContext::Show);
        assert_eq!(suggestion.components, vec!["Show", "SimpleShowLayout", "TextField"]);
        assert!(suggestion.code.starts_with("Guessed Show:\n\n"));
        assert!(suggestion.code.contains(
            "import { Show, SimpleShowLayout, TextField } from '@specfocus/view-focus.mui-demo';"
        ));
        assert!(suggestion.code.contains("export const CategoryShow = () => ("));
        assert!(suggestion.code.ends_with("    </Show>\n);"));
    }

    #[test]
    fn test_no_suggestion_for_empty_sample() {
        let mut guesser = guesser();
        guesser.guess("posts", ViewContext::List, &[]);
        assert!(guesser.sink().is_empty());
    }
}

mod records_tests {
    use super::*;

    #[test]
    fn test_guess_from_list_envelope() {
        let records = records_from_json(
            r#"{"data": [{"id": 1, "email": "ann@example.com"}], "total": 1}"#,
        )
        .unwrap();
        let mut guesser = guesser();
        let tree = guesser.guess("users", ViewContext::List, &records);

        assert_eq!(
            tags(&tree.field_summary()),
            vec![("id", TypeTag::Id), ("email", TypeTag::Email)]
        );
    }

    #[test]
    fn test_non_object_records_are_ignored() {
        let records: Vec<Value> = vec![json!(1), json!("x"), json!({"id": 1})];
        let mut guesser = guesser();
        let tree = guesser.guess("posts", ViewContext::List, &records);
        assert_eq!(tags(&tree.field_summary()), vec![("id", TypeTag::Id)]);
    }

    #[test]
    fn test_rejects_scalar_document() {
        assert!(matches!(
            records_from_json("true"),
            Err(GuesserError::InvalidStructure(_))
        ));
    }

    #[test]
    fn test_materialized_tree_serializes() {
        let mut guesser = guesser();
        let tree = guesser.guess("posts", ViewContext::Edit, &[json!({"id": 1, "published": true})]);

        let json = serde_json::to_value(tree.materialize()).unwrap();
        assert_eq!(
            json,
            json!({
                "component": "SimpleForm",
                "children": [
                    {"component": "TextInput", "props": {"disabled": "true", "source": "id"}},
                    {"component": "BooleanInput", "props": {"source": "published"}}
                ]
            })
        );
    }
}

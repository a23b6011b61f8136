//! Record sampling: field union and observed values

use indexmap::IndexMap;
use serde_json::Value;
use tracing::debug;

/// Observed non-null values of one field across a sample
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    /// Field name (key in the record)
    pub name: String,
    /// Observed values, nulls excluded, in record order
    pub values: Vec<Value>,
}

/// Collect the fields of a sample of records
///
/// Fields are returned in the order they first appear across the sample.
/// Null observations are dropped, and a field that is null or absent in
/// every record yields no descriptor. Records that are not JSON objects
/// contribute nothing.
pub fn sample_fields<'a, I>(records: I) -> Vec<FieldDescriptor>
where
    I: IntoIterator<Item = &'a Value>,
{
    let mut fields: IndexMap<&'a str, Vec<Value>> = IndexMap::new();

    for record in records {
        let Some(object) = record.as_object() else {
            debug!("Skipping non-object record in sample");
            continue;
        };

        for (key, value) in object {
            let values = fields.entry(key.as_str()).or_default();
            if !value.is_null() {
                values.push(value.clone());
            }
        }
    }

    fields
        .into_iter()
        .filter(|(_, values)| !values.is_empty())
        .map(|(name, values)| FieldDescriptor {
            name: name.to_string(),
            values,
        })
        .collect()
}

/// Flatten array values one level, dropping null items
pub fn flatten_arrays(values: &[Value]) -> Vec<Value> {
    values
        .iter()
        .filter_map(Value::as_array)
        .flatten()
        .filter(|item| !item.is_null())
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_union_in_first_appearance_order() {
        let records = vec![
            json!({"id": 1, "title": "A"}),
            json!({"id": 2, "body": "text", "title": "B"}),
        ];

        let fields = sample_fields(&records);
        let names: Vec<&str> = fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["id", "title", "body"]);
        assert_eq!(fields[1].values, vec![json!("A"), json!("B")]);
        assert_eq!(fields[2].values, vec![json!("text")]);
    }

    #[test]
    fn test_nulls_are_excluded() {
        let records = vec![
            json!({"id": 1, "nickname": null, "deleted_at": null}),
            json!({"id": 2, "nickname": "Bobby"}),
        ];

        let fields = sample_fields(&records);
        let names: Vec<&str> = fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["id", "nickname"]);
        assert_eq!(fields[1].values, vec![json!("Bobby")]);
    }

    #[test]
    fn test_non_object_records_skipped() {
        let records = vec![json!(42), json!("text"), json!({"id": 1})];

        let fields = sample_fields(&records);
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].name, "id");
    }

    #[test]
    fn test_empty_sample() {
        let records: Vec<Value> = Vec::new();
        assert!(sample_fields(&records).is_empty());
    }

    #[test]
    fn test_flatten_arrays() {
        let values = vec![json!(["a", "b"]), json!(["c", null]), json!("not an array")];
        assert_eq!(
            flatten_arrays(&values),
            vec![json!("a"), json!("b"), json!("c")]
        );
    }
}

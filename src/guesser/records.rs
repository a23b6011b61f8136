//! Loading sample records from JSON text

use serde_json::Value;

use super::error::GuesserError;

/// Parse sample records from JSON text
///
/// Accepts a JSON array of records, a `{"data": [...]}` list envelope as
/// returned by data providers, or a single record object.
pub fn records_from_json(json: &str) -> Result<Vec<Value>, GuesserError> {
    let value: Value = serde_json::from_str(json)?;
    records_from_value(value)
}

/// Extract sample records from an already parsed JSON value
pub fn records_from_value(value: Value) -> Result<Vec<Value>, GuesserError> {
    match value {
        Value::Array(records) => Ok(records),
        Value::Object(mut object) => match object.remove("data") {
            Some(Value::Array(records)) => Ok(records),
            Some(Value::Object(record)) => Ok(vec![Value::Object(record)]),
            Some(data) => {
                object.insert("data".to_string(), data);
                Ok(vec![Value::Object(object)])
            }
            None => Ok(vec![Value::Object(object)]),
        },
        other => Err(GuesserError::InvalidStructure(
            value_type_name(&other).to_string(),
        )),
    }
}

fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

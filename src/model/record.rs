//! Record model - schemaless admin rows backed by JSON values
//!
//! Every dataset row is a JSON object plus a stable string id. Columns
//! address fields by dot-path ("student.email"); a path that runs into a
//! missing or null segment resolves to absent rather than an error.

use serde_json::Value;

/// One row of domain data (user, course, enrollment, ticket, ...)
#[derive(Debug, Clone)]
pub struct Record {
    /// Stable identifier, extracted from the dataset's id field
    pub id: String,
    /// The full row as parsed JSON
    pub value: Value,
}

impl Record {
    pub fn new(id: impl Into<String>, value: Value) -> Self {
        Self {
            id: id.into(),
            value,
        }
    }

    /// Resolve a dot-path against this record's fields
    pub fn field(&self, path: &str) -> Option<&Value> {
        resolve_path(&self.value, path)
    }
}

/// Walk a dot-path through nested JSON objects
///
/// Returns `None` if any intermediate segment is missing, not an object,
/// or if the final value is null.
pub fn resolve_path<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = value;
    for segment in path.split('.') {
        match current {
            Value::Object(map) => current = map.get(segment)?,
            _ => return None,
        }
    }
    if current.is_null() {
        None
    } else {
        Some(current)
    }
}

/// Coerce a JSON value to its plain display string
///
/// Strings lose their quotes; everything else uses the JSON rendering.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Flatten a record's fields into (path, display string) pairs
///
/// Nested objects contribute their leaves under dotted paths. Used by the
/// record detail view.
pub fn flatten_fields(value: &Value) -> Vec<(String, String)> {
    let mut out = Vec::new();
    flatten_into(value, String::new(), &mut out);
    out
}

fn flatten_into(value: &Value, prefix: String, out: &mut Vec<(String, String)>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten_into(child, path, out);
            }
        }
        other => out.push((prefix, display_value(other))),
    }
}

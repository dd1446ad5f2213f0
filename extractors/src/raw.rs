//! Optional lookups over loosely-typed API responses.
//!
//! Every accessor answers with an `Option` or an explicit default (empty slice,
//! empty string, zero). Nothing here panics or errors on a missing or oddly
//! typed key, so extractors only ever decide between "use it" and "skip it".

use serde_json::Value;
use socmed_types::ExtractionError;

static NULL: Value = Value::Null;

pub trait RawExt {
    /// Follow a chain of object keys
    fn at(&self, path: &[&str]) -> Option<&Value>;

    /// Child value, or `null` when absent. Lookups on the result keep working.
    fn field(&self, key: &str) -> &Value;

    /// Array at `path`, or an empty slice when absent or not an array
    fn items_at(&self, path: &[&str]) -> &[Value];

    fn str_field(&self, key: &str) -> Option<&str>;

    /// String field, empty when absent or not a string
    fn text(&self, key: &str) -> String;

    /// Identifier field: strings as-is, numbers rendered, anything else empty
    fn id_text(&self, key: &str) -> String;

    /// Non-negative counter. Accepts integers, floats and numeric strings; 0 otherwise.
    fn count(&self, key: &str) -> u64;

    fn float(&self, key: &str) -> Option<f64>;

    fn flag(&self, key: &str, default: bool) -> bool;

    /// Field is present and truthy (non-null, non-zero, non-empty)
    fn truthy(&self, key: &str) -> bool;

    /// Field is a non-empty JSON object
    fn object_field(&self, key: &str) -> Option<&Value>;

    fn is_truthy(&self) -> bool;
}

impl RawExt for Value {
    fn at(&self, path: &[&str]) -> Option<&Value> {
        path.iter().try_fold(self, |node, key| node.get(*key))
    }

    fn field(&self, key: &str) -> &Value {
        self.get(key).unwrap_or(&NULL)
    }

    fn items_at(&self, path: &[&str]) -> &[Value] {
        self.at(path)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    fn text(&self, key: &str) -> String {
        self.str_field(key).unwrap_or_default().to_string()
    }

    fn id_text(&self, key: &str) -> String {
        match self.get(key) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => String::new(),
        }
    }

    fn count(&self, key: &str) -> u64 {
        self.get(key).map(as_count).unwrap_or(0)
    }

    fn float(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(Value::as_f64)
    }

    fn flag(&self, key: &str, default: bool) -> bool {
        self.get(key).and_then(Value::as_bool).unwrap_or(default)
    }

    fn truthy(&self, key: &str) -> bool {
        self.get(key).map(RawExt::is_truthy).unwrap_or(false)
    }

    fn object_field(&self, key: &str) -> Option<&Value> {
        self.get(key)
            .filter(|v| v.as_object().is_some_and(|map| !map.is_empty()))
    }

    fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
            Value::String(s) => !s.is_empty(),
            Value::Array(items) => !items.is_empty(),
            Value::Object(map) => !map.is_empty(),
        }
    }
}

/// Interpret a counter value; negative or unparsable values count as 0
pub fn as_count(value: &Value) -> u64 {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f > 0.0).map(|f| f as u64))
            .unwrap_or(0),
        Value::String(s) => s.trim().replace(',', "").parse().unwrap_or(0),
        _ => 0,
    }
}

/// Primary text of an item. Absent or null is an empty body; any other
/// non-string type makes the item unusable.
pub fn body_text(item: &Value, key: &str) -> Result<String, ExtractionError> {
    match item.get(key) {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(ExtractionError::ParseError(format!(
            "field '{}' should be text, found {}",
            key,
            type_name(other)
        ))),
    }
}

/// Items must be JSON objects before any field mapping happens
pub fn require_object(item: &Value) -> Result<(), ExtractionError> {
    if item.is_object() {
        Ok(())
    } else {
        Err(ExtractionError::InvalidInput(format!(
            "expected an object item, found {}",
            type_name(item)
        )))
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

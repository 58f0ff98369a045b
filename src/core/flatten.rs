//! Dotted-key flattening of JSON values

use serde_json::{Map, Value};

/// Flatten nested objects and arrays into a single-level object
///
/// Object keys are joined with `.`; array elements use their index as the
/// key segment. Empty objects and empty arrays stay as leaf values. A
/// scalar root is returned unchanged.
///
/// ```
/// use rust_flat_logger::core::flatten::flatten;
/// use serde_json::json;
///
/// let flat = flatten(&json!({"a": {"b": 1, "c": [true, {"d": null}]}}));
/// assert_eq!(flat, json!({"a.b": 1, "a.c.0": true, "a.c.1.d": null}));
/// ```
pub fn flatten(value: &Value) -> Value {
    match value {
        Value::Object(_) | Value::Array(_) => {
            let mut out = Map::new();
            flatten_children(None, value, &mut out);
            Value::Object(out)
        }
        scalar => scalar.clone(),
    }
}

fn flatten_children(prefix: Option<&str>, value: &Value, out: &mut Map<String, Value>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                flatten_into(join(prefix, key), child, out);
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                flatten_into(join(prefix, &index.to_string()), child, out);
            }
        }
        _ => {}
    }
}

fn flatten_into(path: String, value: &Value, out: &mut Map<String, Value>) {
    if is_branch(value) {
        flatten_children(Some(&path), value, out);
    } else {
        out.insert(path, value.clone());
    }
}

fn is_branch(value: &Value) -> bool {
    match value {
        Value::Object(map) => !map.is_empty(),
        Value::Array(items) => !items.is_empty(),
        _ => false,
    }
}

fn join(prefix: Option<&str>, key: &str) -> String {
    match prefix {
        Some(prefix) => format!("{}.{}", prefix, key),
        None => key.to_string(),
    }
}

//! Record construction

use super::metadata::Metadata;
use super::options::LoggerOptions;
use super::severity::Severity;
use serde_json::{Map, Value};

/// Build a record from metadata, identity fields and payload
///
/// Shape: `{ ...metadata, name, level, type, [type]: payload }` where
/// `type` is `name.namespace`. Identity fields overwrite metadata keys of the
/// same name in place. The payload never reaches the top level and is always
/// an object: it is spread the way `{ ...data }` would spread it.
pub fn construct(
    options: &LoggerOptions,
    metadata: &Metadata,
    level: Severity,
    data: Value,
) -> Value {
    let type_name = options.type_name();

    let mut record = Map::with_capacity(metadata.len() + 4);
    for (key, value) in metadata {
        record.insert(key.clone(), value.clone());
    }
    record.insert("name".to_string(), Value::String(options.name.clone()));
    record.insert("level".to_string(), Value::from(level.as_u8()));
    record.insert("type".to_string(), Value::String(type_name.clone()));
    record.insert(type_name, payload(data));

    Value::Object(record)
}

// objects are copied; arrays and strings spread by index; scalars spread to nothing
fn payload(data: Value) -> Value {
    let spread: Map<String, Value> = match data {
        Value::Object(map) => map,
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(i, v)| (i.to_string(), v))
            .collect(),
        Value::String(s) => s
            .chars()
            .enumerate()
            .map(|(i, c)| (i.to_string(), Value::String(c.to_string())))
            .collect(),
        Value::Null | Value::Bool(_) | Value::Number(_) => Map::new(),
    };
    Value::Object(spread)
}

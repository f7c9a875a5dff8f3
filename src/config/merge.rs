//! Configuration overlay logic
//!
//! A file layer is applied by overlaying its document onto the serialized
//! current configuration:
//! - Objects: merge by key (recursive)
//! - Arrays and scalars: override (overlay wins)
//! - Null: ignored (base value kept, or no entry when there is no base)

use serde_json::Value;

/// Overlay `overlay` onto `base`, keeping every base value the overlay does
/// not mention.
pub fn overlay(base: Value, overlay_value: Value) -> Value {
    match (base, overlay_value) {
        (Value::Object(mut base_map), Value::Object(overlay_map)) => {
            for (key, value) in overlay_map {
                let merged = match base_map.remove(&key) {
                    Some(base_value) => Some(overlay(base_value, value)),
                    None => strip_nulls(value),
                };
                if let Some(merged) = merged {
                    base_map.insert(key, merged);
                }
            }
            Value::Object(base_map)
        }

        (base, Value::Null) => base,

        (_, overlay_value) => overlay_value,
    }
}

/// Drop nulls from a value that has nothing underneath it to keep.
fn strip_nulls(value: Value) -> Option<Value> {
    match value {
        Value::Null => None,
        Value::Object(map) => Some(Value::Object(
            map.into_iter()
                .filter_map(|(k, v)| strip_nulls(v).map(|v| (k, v)))
                .collect(),
        )),
        other => Some(other),
    }
}

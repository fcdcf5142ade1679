use serde_json::{Map, Value};

/// Merge `src` into `dst` in place and return `dst`.
///
/// Objects present on both sides are merged key by key; any other value in
/// `src` replaces what `dst` holds at that key.
pub fn merge_objects(
    dst: &mut Map<String, Value>,
    src: Map<String, Value>,
) -> &mut Map<String, Value> {
    for (key, value) in src {
        match dst.get_mut(&key) {
            Some(Value::Object(existing)) if value.is_object() => {
                if let Value::Object(incoming) = value {
                    merge_objects(existing, incoming);
                }
            }
            _ => {
                dst.insert(key, value);
            }
        }
    }
    dst
}

/// [`merge_objects`] lifted to arbitrary values: two objects are merged,
/// anything else is replaced by `src`.
pub fn deep_merge(dst: &mut Value, src: Value) -> &mut Value {
    match src {
        Value::Object(incoming) => {
            if let Value::Object(existing) = &mut *dst {
                merge_objects(existing, incoming);
            } else {
                *dst = Value::Object(incoming);
            }
        }
        other => *dst = other,
    }
    dst
}

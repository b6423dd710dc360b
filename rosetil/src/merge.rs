//! Deep merging of JSON-like values.

use serde_json::Value;

/// Deeply merge a sequence of values, later values taking precedence.
///
/// - A "falsy" accumulator (`null`, `false`, `0`, `""`) is replaced outright.
/// - Two objects merge key by key, recursively.
/// - Two arrays concatenate. Repeated scalars keep only their first
///   occurrence; nested arrays and objects are always kept.
/// - Anything else is replaced by the later value.
///
/// Returns `None` when there is nothing to merge.
///
/// ```rust
/// use rosetil::merge;
/// use serde_json::json;
///
/// let merged = merge([json!({"a": {"b": 1}}), json!({"a": {"c": 2}})]);
/// assert_eq!(merged, Some(json!({"a": {"b": 1, "c": 2}})));
/// ```
pub fn merge(sources: impl IntoIterator<Item = Value>) -> Option<Value> {
    let mut sources = sources.into_iter();
    let mut merged = sources.next()?;
    for source in sources {
        merge_into(&mut merged, source);
    }
    Some(merged)
}

/// Deeply merge `source` into `target` in place.
pub fn merge_into(target: &mut Value, source: Value) {
    if is_falsy(target) {
        *target = source;
        return;
    }

    match (target, source) {
        (Value::Object(target), Value::Object(source)) => {
            for (key, value) in source {
                match target.get_mut(&key) {
                    Some(existing) => merge_into(existing, value),
                    None => {
                        target.insert(key, value);
                    }
                }
            }
        }
        (Value::Array(target), Value::Array(source)) => {
            let combined = std::mem::take(target);
            for value in combined.into_iter().chain(source) {
                let nested = matches!(value, Value::Array(_) | Value::Object(_));
                if nested || !target.contains(&value) {
                    target.push(value);
                }
            }
        }
        (target, source) => *target = source,
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

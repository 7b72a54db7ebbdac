//! Merging JSON objects with heterogeneous values.
//!
//! Objects are represented as `serde_json::Value`. Values under a key may
//! differ in type between inputs; the later one replaces the earlier one,
//! nested objects included.

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{MergeError, MergeResult};
use crate::mapping::Mapping;

/// Merge JSON objects left to right, later objects winning.
///
/// Every input must be a JSON object. Fails with [`MergeError::NoMappings`]
/// on an empty slice and [`MergeError::NotAnObject`] on the first non-object
/// input; nothing is returned in either case.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use collkit_merge::merge_objects;
///
/// let merged = merge_objects(&[json!({"a": 1, "b": 2}), json!({"b": "three"})]).unwrap();
/// assert_eq!(merged, json!({"a": 1, "b": "three"}));
///
/// assert!(merge_objects(&[json!({"a": 1}), json!([1, 2])]).is_err());
/// ```
pub fn merge_objects(values: &[Value]) -> MergeResult<Value> {
    if values.is_empty() {
        return Err(MergeError::NoMappings);
    }

    let mut merged = Map::empty();
    for (index, value) in values.iter().enumerate() {
        let object = value.as_object().ok_or_else(|| {
            debug!(index, kind = kind_name(value), "rejected non-object merge input");
            MergeError::NotAnObject {
                index,
                kind: kind_name(value),
            }
        })?;
        merged.overwrite(object);
    }

    Ok(Value::Object(merged))
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

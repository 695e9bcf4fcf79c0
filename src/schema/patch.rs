//! In-place JSON merge patching (RFC 7386) for the `schema` and
//! `validators` columns.
//!
//! Object members named by the patch are replaced, `null` members delete
//! the key, nested objects merge recursively and everything the patch does
//! not mention is left alone. Arrays are replaced wholesale.

use serde_json::{Map, Value};

use super::types::SchemaError;

/// Rejects patches that would replace the whole document.
pub fn check_patch(patch: &Value) -> Result<(), SchemaError> {
    if patch.is_object() {
        Ok(())
    } else {
        Err(SchemaError::InvalidPatch(format!(
            "patch must be a JSON object, got {}",
            json_type_name(patch)
        )))
    }
}

/// Merges `patch` into `target`. A `null` or non-object target is treated
/// as an empty object.
pub fn merge_patch(target: &mut Value, patch: &Value) -> Result<(), SchemaError> {
    check_patch(patch)?;
    if !target.is_object() {
        *target = Value::Object(Map::new());
    }
    json_patch::merge(target, patch);
    Ok(())
}

pub(crate) const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

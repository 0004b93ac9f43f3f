//! Flat field-mapping -> typed field set.
//!
//! A body must carry exactly the entity's field names: a missing key and an
//! extra key are both rejected before serde ever sees the value, so the typed
//! structs never rely on `Option` defaults to paper over an absent field.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::errors::ServiceError;

fn kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn into_object(body: Value) -> Result<Map<String, Value>, ServiceError> {
    match body {
        Value::Object(map) => Ok(map),
        other => Err(ServiceError::Validation(format!("expected a JSON object, got {}", kind(&other)))),
    }
}

/// Check that `map` has every name in `names` and nothing else.
pub fn check_field_set(map: &Map<String, Value>, names: &[&str]) -> Result<(), ServiceError> {
    if let Some(missing) = names.iter().find(|n| !map.contains_key(**n)) {
        return Err(ServiceError::MissingField((*missing).to_string()));
    }
    if let Some(extra) = map.keys().find(|k| !names.contains(&k.as_str())) {
        return Err(ServiceError::UnknownField(extra.clone()));
    }
    Ok(())
}

/// Parse a request body into the typed field set `T`.
pub fn parse_fields<T: DeserializeOwned>(body: Value, names: &[&str]) -> Result<T, ServiceError> {
    let map = into_object(body)?;
    check_field_set(&map, names)?;
    serde_json::from_value(Value::Object(map)).map_err(|e| ServiceError::Validation(e.to_string()))
}

/// Parse a seed row: like [`parse_fields`], but an `id` key is allowed and
/// returned separately.
pub fn parse_seed_row<T: DeserializeOwned>(row: Value, names: &[&str]) -> Result<(Option<i32>, T), ServiceError> {
    let mut map = into_object(row)?;
    let id = match map.remove("id") {
        None | Some(Value::Null) => None,
        Some(v) => Some(serde_json::from_value::<i32>(v).map_err(|e| ServiceError::Validation(format!("id: {}", e)))?),
    };
    check_field_set(&map, names)?;
    let fields = serde_json::from_value(Value::Object(map)).map_err(|e| ServiceError::Validation(e.to_string()))?;
    Ok((id, fields))
}

//! Shared helpers for WASM API operations
//!
//! Conversions between `JsValue` and the crate's types. Every failure is
//! logged before it crosses the boundary as a JS string.

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::error::SpellingError;
use crate::models::{FormulaInput, NoteName};

/// Deserialize a value from JavaScript with automatic error handling
pub fn deserialize<T: DeserializeOwned>(value: JsValue, error_context: &str) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log::error!("{}", msg);
        JsValue::from_str(&msg)
    })
}

/// Serialize a value to JavaScript with automatic error handling
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log::error!("{}", msg);
        JsValue::from_str(&msg)
    })
}

/// Deserialize an optional argument; `undefined` and `null` give the default
pub fn deserialize_or_default<T: DeserializeOwned + Default>(
    value: JsValue,
    error_context: &str,
) -> Result<T, JsValue> {
    if value.is_undefined() || value.is_null() {
        Ok(T::default())
    } else {
        deserialize(value, error_context)
    }
}

/// A formula given as `"0,2,4"` or `[0, 2, 4]`
pub fn formula_arg(value: JsValue) -> Result<FormulaInput, JsValue> {
    if !value.is_string() && !js_sys::Array::is_array(&value) {
        let msg = "Invalid formula: expected a comma-separated string or an array of numbers";
        log::error!("{}", msg);
        return Err(JsValue::from_str(msg));
    }
    deserialize(value, "Invalid formula")
}

/// Convert a spelling error to a JsValue
pub fn spelling_error(context: &str, err: SpellingError) -> JsValue {
    let msg = format!("{}: {}", context, err);
    log::error!("{}", msg);
    JsValue::from_str(&msg)
}

/// Serialize a builder result as an array of note-name strings
pub fn notes_result(
    result: crate::error::Result<Vec<NoteName>>,
    context: &str,
) -> Result<JsValue, JsValue> {
    let notes = result.map_err(|err| spelling_error(context, err))?;
    serialize(&notes, context)
}

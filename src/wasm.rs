use wasm_bindgen::prelude::*;

use crate::codes::LibrtasError;
use crate::describe;
use crate::firmware::CallStatus;
use crate::types;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = JSON)]
    fn parse(s: &str) -> JsValue;
}

fn to_js(value: &serde_json::Value) -> JsValue {
    match serde_json::to_string(value) {
        Ok(json_str) => parse(&json_str),
        Err(_) => JsValue::NULL,
    }
}

fn call_status_kind(status: CallStatus) -> &'static str {
    match status {
        CallStatus::Success => "Success",
        CallStatus::HardwareError => "HardwareError",
        CallStatus::Busy => "Busy",
        CallStatus::ParameterError => "ParameterError",
        CallStatus::ExtendedDelay { .. } => "ExtendedDelay",
        CallStatus::Librtas(_) => "Librtas",
        CallStatus::Other(_) => "Other",
    }
}

/// Returns `[{code, name, message}, ...]` for every librtas status.
#[wasm_bindgen]
pub fn get_all_codes() -> JsValue {
    serde_wasm_bindgen::to_value(&types::catalog()).unwrap_or(JsValue::NULL)
}

/// Message for a librtas return code, with the numeric fallback for unknown codes.
#[wasm_bindgen]
pub fn describe_code(code: i32) -> String {
    describe::describe(code).into_owned()
}

#[wasm_bindgen]
pub fn wasm_is_librtas_error(code: i32) -> bool {
    describe::is_librtas_error(code)
}

/// Look up the numeric value of a `librtas.h` name such as `"RTAS_PERM"`.
#[wasm_bindgen]
pub fn code_for_name(name: &str) -> Option<i32> {
    LibrtasError::from_name(name).ok().map(LibrtasError::code)
}

/// Classify the raw return of an RTAS call.
#[wasm_bindgen]
pub fn classify_call_status(rc: i32) -> JsValue {
    let status = CallStatus::classify(rc);
    let mut obj = serde_json::json!({
        "kind": call_status_kind(status),
        "code": status.code(),
        "message": status.to_string(),
        "retryable": status.is_retryable(),
    });
    if let CallStatus::ExtendedDelay { millis } = status {
        obj["delayMs"] = serde_json::json!(millis);
    }
    if let Some(err) = status.librtas_error() {
        obj["name"] = serde_json::json!(err.name());
    }
    to_js(&obj)
}

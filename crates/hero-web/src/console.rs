//! Browser console output

use wasm_bindgen::JsValue;
use web_sys::console;

pub fn log(message: &str) {
    console::log_1(&JsValue::from_str(message));
}

pub fn warn(message: &str) {
    console::warn_1(&JsValue::from_str(message));
}

pub fn error(message: &str) {
    console::error_1(&JsValue::from_str(message));
}

use js_sys::Date;
use wasm_bindgen::JsValue;

/// Local wall-clock label `HH:MM:SS` for a millisecond timestamp.
pub fn clock_label(timestamp_ms: f64) -> String {
    let date = Date::new(&JsValue::from_f64(timestamp_ms));
    format!("{:02}:{:02}:{:02}", date.get_hours(), date.get_minutes(), date.get_seconds())
}

/// Label for the "last update" header field
pub fn now_label() -> String {
    clock_label(Date::now())
}

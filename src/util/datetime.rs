//! Timestamp display formatting.
//!
//! The gateway sends ISO-8601 strings; in the browser they are shown
//! in the operator's locale via `js_sys::Date`. Outside a browser
//! (native tests) the raw string is returned unchanged.

#[cfg(test)]
#[path = "datetime_test.rs"]
mod datetime_test;

/// Format a gateway timestamp for table display.
pub fn format_timestamp(iso: &str) -> String {
    if iso.is_empty() {
        return String::new();
    }
    #[cfg(target_arch = "wasm32")]
    {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(iso));
        if date.get_time().is_nan() {
            return iso.to_owned();
        }
        String::from(date.to_locale_string("default", &wasm_bindgen::JsValue::UNDEFINED))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        iso.to_owned()
    }
}

//! Browser console reporting.
//!
//! Failed edits are recovered locally (the grid is left untouched) and the
//! error is returned to the page. They are also logged as console warnings
//! so they show up in devtools even when the page swallows them.

use std::fmt::Display;

use wasm_bindgen::JsValue;

/// Log a recovered failure as a console warning.
pub(crate) fn warn(context: &str, err: &dyn Display) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&JsValue::from_str(&format!("[polaroid] {}: {}", context, err)));

    // Native test builds have no console to call into
    #[cfg(not(target_arch = "wasm32"))]
    let _ = (context, err);
}

/// Log `err` and convert it into the `JsValue` thrown back to the page.
pub(crate) fn js_error<E: Display>(context: &str, err: E) -> JsValue {
    warn(context, &err);
    JsValue::from_str(&err.to_string())
}

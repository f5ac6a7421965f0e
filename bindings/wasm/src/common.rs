use anyhow::{anyhow, Result};
use serde::Serialize;
use wasm_bindgen::JsValue;

pub(crate) fn js_err(e: impl ToString) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Serialize into a plain JS value (objects, arrays, strings).
pub(crate) fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| e.into())
}

pub(crate) fn parse_layer(layer: &str) -> Result<vernamap_core::LayerKind> {
    vernamap_core::LayerKind::from_str(layer).ok_or_else(|| {
        anyhow!("Unknown layer {:?}. Expected one of: points, lines, districts", layer)
    })
}

pub(crate) fn warn(message: &str) {
    web_sys::console::warn_1(&JsValue::from_str(message));
}

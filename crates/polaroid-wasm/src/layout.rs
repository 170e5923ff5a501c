//! Display geometry for the grid and the crop dialog.

use polaroid_core::layout::{self, DisplayParams, POLAROID_ASPECT};
use wasm_bindgen::prelude::*;

/// Frame size and fit used by every grid slot, as
/// `{ width, height, aspectRatio: { width, height }, fit }`.
#[wasm_bindgen]
pub fn display_params() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&DisplayParams::default())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Width divided by height of a polaroid print.
#[wasm_bindgen]
pub fn polaroid_aspect() -> f64 {
    POLAROID_ASPECT.value()
}

/// Starting crop selection for an image: the largest centered rectangle at
/// the polaroid aspect, as `{ x, y, width, height }`.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const [w, h] = probe_dimensions(bytes);
/// cropper.setSelection(initial_crop_region(w, h));
/// ```
#[wasm_bindgen]
pub fn initial_crop_region(width: u32, height: u32) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&layout::initial_crop_region(width, height))
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polaroid_aspect() {
        assert!((polaroid_aspect() - 8.8 / 10.7).abs() < 1e-12);
    }
}

//! WASM bindings for the crop transform.
//!
//! The grid's `finish_crop` covers the usual flow. These functions are for
//! callers that want the cropped image without touching a slot, e.g. to show
//! a preview in the crop dialog before the user confirms.

use crate::console::js_error;
use crate::types::{crop_options_from_js, region_from_js, JsDecodedImage};
use polaroid_core::transform::{self, CropError, Region};
use wasm_bindgen::prelude::*;

/// Crop a decoded image to a pixel region.
///
/// The region is clamped to the image. Pixels are copied as-is, so the result
/// is exactly the selected width and height when the selection lies inside
/// the image.
///
/// # Errors
///
/// Returns an error if the region does not overlap the image.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const preview = crop_image(image, area.x, area.y, area.width, area.height);
/// ```
#[wasm_bindgen]
pub fn crop_image(
    image: &JsDecodedImage,
    x: i32,
    y: i32,
    width: u32,
    height: u32,
) -> Result<JsDecodedImage, JsValue> {
    try_crop_image(image, region_from_js(x, y, width, height)).map_err(|e| js_error("crop", e))
}

/// Crop a decoded image using normalized coordinates in `[0, 1]`.
///
/// Useful when the crop widget reports percentages of the displayed image.
#[wasm_bindgen]
pub fn crop_image_normalized(
    image: &JsDecodedImage,
    left: f64,
    top: f64,
    width: f64,
    height: f64,
) -> Result<JsDecodedImage, JsValue> {
    let region = Region::from_normalized(left, top, width, height, image.width(), image.height());
    try_crop_image(image, region).map_err(|e| js_error("crop", e))
}

/// Decode `bytes`, crop to the region and return the result as a `data:` URL.
///
/// `options` is optional:
///
/// ```typescript
/// crop_image_to_data_url(bytes, 0, 0, 880, 1070);
/// crop_image_to_data_url(bytes, 0, 0, 880, 1070, { format: { type: 'jpeg', quality: 92 } });
/// ```
#[wasm_bindgen]
pub fn crop_image_to_data_url(
    bytes: &[u8],
    x: i32,
    y: i32,
    width: u32,
    height: u32,
    options: JsValue,
) -> Result<String, JsValue> {
    let options = crop_options_from_js(options)?;
    transform::crop_to_data_url(bytes, region_from_js(x, y, width, height), &options)
        .map_err(|e| js_error("crop", e))
}

pub(crate) fn try_crop_image(
    image: &JsDecodedImage,
    region: Region,
) -> Result<JsDecodedImage, CropError> {
    transform::crop_region(&image.to_decoded(), region).map(JsDecodedImage::from_decoded)
}

//! Image decoding WASM bindings.
//!
//! This module exposes the polaroid-core decoder to JavaScript so the page can
//! read uploads, check their size before cropping, and build grid thumbnails.
//!
//! # Functions
//!
//! - [`decode_image`] - Decode a JPEG, PNG, GIF, WebP or BMP upload
//! - [`probe_dimensions`] - Read the displayed width and height without decoding pixels
//! - [`resize`] - Resize an image to exact dimensions
//! - [`resize_to_cover`] - Fill a box, cropping the overflow around the center
//! - [`generate_thumbnail`] - Build the thumbnail shown in a grid frame
//!
//! # Example
//!
//! ```typescript
//! import { decode_image, generate_thumbnail } from '@polaroid/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const image = decode_image(bytes);
//! const thumb = generate_thumbnail(image);
//! ctx.putImageData(new ImageData(new Uint8ClampedArray(thumb.rgba()), thumb.width), 0, 0);
//! ```

use crate::types::{filter_from_u8, JsDecodedImage};
use polaroid_core::decode;
use polaroid_core::layout::DisplayParams;
use wasm_bindgen::prelude::*;

/// Decode an uploaded image from bytes.
///
/// The format is detected from the content. EXIF orientation is applied and
/// transparent pixels are flattened onto white.
///
/// # Errors
///
/// Returns an error if the bytes are not a supported image, the file is
/// corrupted, or the image exceeds the decoder's size limits.
///
/// # Example
///
/// ```typescript
/// const image = decode_image(new Uint8Array(await file.arrayBuffer()));
/// console.log(`Decoded ${image.width}x${image.height} image`);
/// ```
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsDecodedImage, JsValue> {
    decode::decode_image(bytes)
        .map(JsDecodedImage::from_decoded)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Read an image's width and height as displayed (after EXIF rotation).
///
/// Only the header is parsed, so this is cheap enough to call on every upload
/// before opening the crop dialog.
///
/// # Returns
///
/// A `Uint32Array` of `[width, height]`.
#[wasm_bindgen]
pub fn probe_dimensions(bytes: &[u8]) -> Result<Vec<u32>, JsValue> {
    decode::probe_dimensions(bytes)
        .map(|(width, height)| vec![width, height])
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Resize an image to exact dimensions.
///
/// # Arguments
///
/// * `filter` - 0 = Nearest, 1 = Bilinear, 2 = Lanczos3
#[wasm_bindgen]
pub fn resize(
    image: &JsDecodedImage,
    width: u32,
    height: u32,
    filter: u8,
) -> Result<JsDecodedImage, JsValue> {
    let decoded = image.to_decoded();
    let filter_type = filter_from_u8(filter);

    decode::resize(&decoded, width, height, filter_type)
        .map(JsDecodedImage::from_decoded)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Scale an image to fill a `width` x `height` box, cropping the overflow
/// around the center. This matches CSS `object-fit: cover`.
#[wasm_bindgen]
pub fn resize_to_cover(
    image: &JsDecodedImage,
    width: u32,
    height: u32,
    filter: u8,
) -> Result<JsDecodedImage, JsValue> {
    let decoded = image.to_decoded();
    let filter_type = filter_from_u8(filter);

    decode::resize_to_cover(&decoded, width, height, filter_type)
        .map(JsDecodedImage::from_decoded)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Generate the thumbnail shown in a grid frame (300 px wide, polaroid aspect).
#[wasm_bindgen]
pub fn generate_thumbnail(image: &JsDecodedImage) -> Result<JsDecodedImage, JsValue> {
    let decoded = image.to_decoded();

    decode::generate_thumbnail(&decoded, &DisplayParams::default())
        .map(JsDecodedImage::from_decoded)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

//! Image encoding WASM bindings.
//!
//! This module exposes the polaroid-core encoders so pixels produced on the
//! page (for example by a canvas crop) can be turned back into an image
//! reference for a slot.
//!
//! # Functions
//!
//! - [`encode_png`] - Encode RGB pixel data to PNG bytes
//! - [`encode_jpeg`] - Encode RGB pixel data to JPEG bytes
//! - [`encode_image_to_data_url`] - Encode a JsDecodedImage straight to a `data:` URL
//! - [`to_data_url`] - Wrap already-encoded bytes as a `data:` URL
//!
//! # Example
//!
//! ```typescript
//! import { encode_image_to_data_url } from '@polaroid/wasm';
//!
//! const url = encode_image_to_data_url(image); // PNG by default
//! grid.commit_crop(ticket, url);
//! ```

use crate::types::JsDecodedImage;
use polaroid_core::encode::{self, OutputFormat};
use wasm_bindgen::prelude::*;

/// Encode RGB pixel data to PNG bytes.
///
/// # Errors
///
/// Returns an error if:
/// - The pixel data length doesn't match width * height * 3
/// - Width or height is zero
#[wasm_bindgen]
pub fn encode_png(pixels: &[u8], width: u32, height: u32) -> Result<Vec<u8>, JsValue> {
    encode::encode_png(pixels, width, height).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Encode RGB pixel data to JPEG bytes.
///
/// # Arguments
///
/// * `pixels` - RGB pixel data as a `Uint8Array` (3 bytes per pixel, row-major order)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `quality` - JPEG quality (1-100, recommended: 92 for print)
///
/// # Example
///
/// ```typescript
/// const pixels = new Uint8Array(100 * 100 * 3).fill(128);
/// const jpeg = encode_jpeg(pixels, 100, 100, 92);
/// ```
#[wasm_bindgen]
pub fn encode_jpeg(pixels: &[u8], width: u32, height: u32, quality: u8) -> Result<Vec<u8>, JsValue> {
    encode::encode_jpeg(pixels, width, height, quality)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Encode a JsDecodedImage and return it as a `data:` URL.
///
/// Pass a `quality` to get JPEG output; leave it out for PNG.
#[wasm_bindgen]
pub fn encode_image_to_data_url(
    image: &JsDecodedImage,
    quality: Option<u8>,
) -> Result<String, JsValue> {
    let format = match quality {
        Some(quality) => OutputFormat::Jpeg { quality },
        None => OutputFormat::Png,
    };

    encode::encode_image(&image.to_decoded(), format)
        .map(|bytes| encode::to_data_url(&bytes, format.mime_type()))
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Wrap encoded image bytes as a base64 `data:` URL.
#[wasm_bindgen]
pub fn to_data_url(bytes: &[u8], mime_type: &str) -> String {
    encode::to_data_url(bytes, mime_type)
}


/// WASM-specific tests that require JsValue.
///
/// These tests use functions that return `Result<T, JsValue>` and can only
/// run on wasm32 targets. Use `wasm-pack test` to run these.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_encode_png_basic() {
        let pixels = vec![128u8; 20 * 20 * 3];
        let png = encode_png(&pixels, 20, 20).unwrap();
        assert_eq!(&png[0..8], b"\x89PNG\r\n\x1a\n");
    }

    #[wasm_bindgen_test]
    fn test_encode_jpeg_invalid_dimensions() {
        let pixels = vec![128u8; 100];
        assert!(encode_jpeg(&pixels, 0, 100, 90).is_err());
    }

    #[wasm_bindgen_test]
    fn test_encode_png_invalid_pixel_data() {
        let pixels = vec![128u8; 50 * 50 * 3];
        assert!(encode_png(&pixels, 100, 100).is_err());
    }
}

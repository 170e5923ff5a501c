//! PNG encoding, the default output for cropped photos.

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

use super::types::{validate_rgb, EncodeError};

/// Encode RGB pixel data to PNG bytes.
///
/// Lossless, so repeated crops of the same slot never accumulate artifacts.
pub fn encode_png(pixels: &[u8], width: u32, height: u32) -> Result<Vec<u8>, EncodeError> {
    validate_rgb(pixels, width, height)?;

    let mut buffer = Vec::new();
    PngEncoder::new(&mut buffer)
        .write_image(pixels, width, height, ExtendedColorType::Rgb8)
        .map_err(|e| EncodeError::EncodingFailed {
            format: "PNG",
            message: e.to_string(),
        })?;

    Ok(buffer)
}

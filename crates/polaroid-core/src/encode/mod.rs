//! Image encoding for cropped photos.
//!
//! This module provides functionality for:
//! - Encoding RGB pixels to PNG (lossless, the default crop output) or JPEG
//! - Wrapping encoded bytes as `data:` URLs usable as standalone image references
//!
//! # Examples
//!
//! ```ignore
//! use polaroid_core::encode::{encode_image, to_data_url, OutputFormat};
//!
//! let bytes = encode_image(&image, OutputFormat::Png).unwrap();
//! let url = to_data_url(&bytes, OutputFormat::Png.mime_type());
//! ```

mod data_url;
mod jpeg;
mod png;
mod types;

pub use data_url::{parse_data_url, to_data_url};
pub use jpeg::encode_jpeg;
pub use png::encode_png;
pub use types::{EncodeError, OutputFormat};

use crate::decode::DecodedImage;

/// Encode a decoded image in the requested format.
pub fn encode_image(image: &DecodedImage, format: OutputFormat) -> Result<Vec<u8>, EncodeError> {
    match format {
        OutputFormat::Png => encode_png(&image.pixels, image.width, image.height),
        OutputFormat::Jpeg { quality } => {
            encode_jpeg(&image.pixels, image.width, image.height, quality)
        }
    }
}

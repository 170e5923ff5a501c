//! Pixel-region cropping.
//!
//! The crop widget reports the selection as a pixel rectangle over the
//! displayed (EXIF-oriented) image. The rectangle is copied out with no
//! scaling and re-encoded as a new standalone image.
//!
//! # Out-of-bounds Regions
//!
//! Regions are clamped to the source bounds. A region that only partially
//! overlaps the image yields the overlapping part. A region with no overlap
//! (or zero width/height) is rejected with [`CropError::EmptyRegion`].
//!
//! # Example
//!
//! ```ignore
//! let region = Region::new(10, 10, 100, 121);
//! let cropped = crop_region(&image, region)?;
//! assert_eq!(cropped.dimensions(), (100, 121));
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::decode::{decode_image_with_limits, DecodeError, DecodeLimits, DecodedImage};
use crate::encode::{encode_image, to_data_url, EncodeError, OutputFormat};

/// Errors from the crop pipeline.
#[derive(Debug, Error)]
pub enum CropError {
    /// The source image could not be decoded.
    #[error("Failed to decode source image: {0}")]
    Decode(DecodeError),

    /// Decoder limits or buffer allocation failed.
    #[error("Not enough resources to crop: {0}")]
    Resource(String),

    /// The region does not overlap the image.
    #[error("Crop region {region} does not overlap the {width}x{height} image")]
    EmptyRegion {
        region: Region,
        width: u32,
        height: u32,
    },

    /// The cropped pixels could not be re-encoded.
    #[error("Failed to encode cropped image: {0}")]
    Encode(#[from] EncodeError),
}

impl From<DecodeError> for CropError {
    fn from(err: DecodeError) -> Self {
        if err.is_resource() {
            CropError::Resource(err.to_string())
        } else {
            CropError::Decode(err)
        }
    }
}

/// A pixel rectangle over the source image.
///
/// Offsets may be negative when the selection starts outside the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Region {
    pub x: i64,
    pub y: i64,
    pub width: u32,
    pub height: u32,
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}+{}+{}", self.width, self.height, self.x, self.y)
    }
}

impl Region {
    pub fn new(x: i64, y: i64, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build a region from normalized coordinates (0.0 to 1.0) relative to a
    /// `src_width` x `src_height` image.
    ///
    /// Crop widgets often report the selection as percentages of the image;
    /// this converts those to pixels, rounding to the nearest pixel.
    pub fn from_normalized(
        left: f64,
        top: f64,
        width: f64,
        height: f64,
        src_width: u32,
        src_height: u32,
    ) -> Self {
        let w = src_width as f64;
        let h = src_height as f64;
        Self {
            x: (left * w).round() as i64,
            y: (top * h).round() as i64,
            width: (width.max(0.0) * w).round() as u32,
            height: (height.max(0.0) * h).round() as u32,
        }
    }

    /// True when the region lies entirely inside a `width` x `height` image.
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x.saturating_add(self.width as i64) <= width as i64
            && self.y.saturating_add(self.height as i64) <= height as i64
    }

    /// Intersect with the `width` x `height` image bounds.
    ///
    /// Returns `None` when the intersection is empty.
    pub fn clamp_to(&self, width: u32, height: u32) -> Option<Region> {
        let left = self.x.max(0);
        let top = self.y.max(0);
        let right = self.x.saturating_add(self.width as i64).min(width as i64);
        let bottom = self.y.saturating_add(self.height as i64).min(height as i64);

        if right <= left || bottom <= top {
            return None;
        }

        Some(Region {
            x: left,
            y: top,
            width: (right - left) as u32,
            height: (bottom - top) as u32,
        })
    }
}

/// Options for the full decode-crop-encode pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CropOptions {
    /// Encoding of the cropped image.
    pub format: OutputFormat,
    /// Limits applied while decoding the source.
    pub limits: DecodeLimits,
}

/// Copy `region` out of `image`, clamped to the image bounds.
///
/// When the region lies entirely inside the image, the output is exactly
/// `region.width` x `region.height`.
pub fn crop_region(image: &DecodedImage, region: Region) -> Result<DecodedImage, CropError> {
    let bounds = region
        .clamp_to(image.width, image.height)
        .ok_or(CropError::EmptyRegion {
            region,
            width: image.width,
            height: image.height,
        })?;

    // Clamped regions are non-negative and inside the image
    let left = bounds.x as usize;
    let top = bounds.y as usize;
    let out_width = bounds.width as usize;
    let out_height = bounds.height as usize;
    let src_stride = image.width as usize * 3;
    let row_bytes = out_width * 3;

    let mut output = Vec::new();
    output
        .try_reserve_exact(row_bytes * out_height)
        .map_err(|e| CropError::Resource(e.to_string()))?;

    for y in top..top + out_height {
        let start = y * src_stride + left * 3;
        let row = image
            .pixels
            .get(start..start + row_bytes)
            .ok_or_else(|| CropError::Resource("pixel buffer shorter than image".into()))?;
        output.extend_from_slice(row);
    }

    Ok(DecodedImage {
        width: bounds.width,
        height: bounds.height,
        pixels: output,
    })
}

/// Decode an encoded image, crop it and re-encode the result.
pub fn crop_encoded(
    bytes: &[u8],
    region: Region,
    options: &CropOptions,
) -> Result<Vec<u8>, CropError> {
    let source = decode_image_with_limits(bytes, options.limits)?;
    let cropped = crop_region(&source, region)?;
    Ok(encode_image(&cropped, options.format)?)
}

/// Crop an encoded image and return the result as a `data:` URL.
///
/// This is the crop transform as the page uses it: the returned string is a
/// standalone image reference that can go straight back into a slot.
pub fn crop_to_data_url(
    bytes: &[u8],
    region: Region,
    options: &CropOptions,
) -> Result<String, CropError> {
    let encoded = crop_encoded(bytes, region, options)?;
    Ok(to_data_url(&encoded, options.format.mime_type()))
}


// ============================================================================
// Property-Based Tests
// ============================================================================

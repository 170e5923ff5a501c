//! Image resizing for grid thumbnails.
//!
//! All functions return new `DecodedImage` instances without modifying the input.

use super::{DecodeError, DecodedImage, FilterType};
use crate::layout::{cover_rect, AspectRatio, DisplayParams};
use crate::transform::crop_region;

/// Resize an image to exact dimensions.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if a target dimension is zero or the
/// pixel buffer does not match the image dimensions.
pub fn resize(
    image: &DecodedImage,
    width: u32,
    height: u32,
    filter: FilterType,
) -> Result<DecodedImage, DecodeError> {
    if width == 0 || height == 0 {
        return Err(DecodeError::InvalidFormat);
    }

    // Fast path: if dimensions match, just clone
    if image.width == width && image.height == height {
        return Ok(image.clone());
    }

    let rgb_image = image.to_rgb_image().ok_or(DecodeError::InvalidFormat)?;
    let resized = image::imageops::resize(&rgb_image, width, height, filter.to_image_filter());

    Ok(DecodedImage::from_rgb_image(resized))
}

/// Scale an image to fill a `width` x `height` box, cropping the overflow
/// around the center (CSS `object-fit: cover`).
pub fn resize_to_cover(
    image: &DecodedImage,
    width: u32,
    height: u32,
    filter: FilterType,
) -> Result<DecodedImage, DecodeError> {
    if width == 0 || height == 0 || image.is_empty() {
        return Err(DecodeError::InvalidFormat);
    }

    let visible = cover_rect(
        image.width,
        image.height,
        AspectRatio::new(width as f64, height as f64),
    );
    let cropped = crop_region(image, visible).map_err(|_| DecodeError::InvalidFormat)?;

    resize(&cropped, width, height, filter)
}

/// Generate the thumbnail shown in a grid frame.
///
/// The frame is `params.width` wide with its height set by the frame aspect
/// ratio, matching how the page sizes the rendered box.
pub fn generate_thumbnail(
    image: &DecodedImage,
    params: &DisplayParams,
) -> Result<DecodedImage, DecodeError> {
    let (width, height) = thumbnail_dimensions(params);
    resize_to_cover(image, width, height, FilterType::Bilinear)
}

fn thumbnail_dimensions(params: &DisplayParams) -> (u32, u32) {
    let height = (params.width as f64 / params.aspect_ratio.value()).round() as u32;
    (params.width, height.max(1))
}

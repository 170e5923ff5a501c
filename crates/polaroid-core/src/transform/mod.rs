//! The crop transform.
//!
//! Cropping works in source pixels with the origin at the top-left corner of
//! the EXIF-oriented image. Regions hanging off the image are clamped.

mod crop;

pub use crop::{crop_encoded, crop_region, crop_to_data_url, CropError, CropOptions, Region};

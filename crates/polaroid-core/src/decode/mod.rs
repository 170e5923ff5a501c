//! Image decoding for uploaded photos.
//!
//! This module provides functionality for:
//! - Decoding any uploaded image format the page accepts (JPEG, PNG, GIF, WebP, BMP)
//! - Applying EXIF orientation so pixel coordinates match what the browser shows
//! - Enforcing decoder limits so oversized uploads fail cleanly
//! - Resizing for grid thumbnails
//!
//! # Architecture
//!
//! Decoding is called from the WASM bindings on the page's main thread.
//! All operations are synchronous and single-threaded within WASM.
//!
//! # Examples
//!
//! ```ignore
//! use polaroid_core::decode::decode_image;
//!
//! let bytes = std::fs::read("photo.jpg").unwrap();
//! let image = decode_image(&bytes).unwrap();
//! println!("Decoded {}x{} image", image.width, image.height);
//! ```

mod orientation;
mod reader;
mod resize;
mod types;

pub use orientation::{get_orientation, Orientation};
pub use reader::{decode_image, decode_image_with_limits, probe_dimensions};
pub use resize::{generate_thumbnail, resize, resize_to_cover};
pub use types::{DecodeError, DecodeLimits, DecodedImage, FilterType};

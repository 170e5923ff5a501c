//! Polaroid WASM - WebAssembly bindings for the polaroid photo grid
//!
//! This crate exposes polaroid-core to the browser page that lays out photos
//! for polaroid printing.
//!
//! # Module Structure
//!
//! - `grid` - The photo grid: slots, uploads, deletes and crop workflows
//! - `transform` - Standalone crop functions for previews
//! - `decode` / `encode` - Image codecs and thumbnails
//! - `layout` - Frame geometry and the initial crop selection
//! - `icons` - Inline SVG icons
//! - `types` - WASM-compatible wrapper types for image data
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsPhotoGrid } from '@polaroid/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const grid = new JsPhotoGrid();
//! grid.insert_many([...input.files].map((f) => URL.createObjectURL(f)));
//! render(grid.print_layout());
//! ```

use wasm_bindgen::prelude::*;

mod console;
mod decode;
mod encode;
mod grid;
mod icons;
mod layout;
mod transform;
mod types;

// Re-export public types
pub use decode::{decode_image, generate_thumbnail, probe_dimensions, resize, resize_to_cover};
pub use encode::{encode_image_to_data_url, encode_jpeg, encode_png, to_data_url};
pub use grid::{JsCropTicket, JsPhotoGrid};
pub use icons::{icon_names, render_icon};
pub use layout::{display_params, initial_crop_region, polaroid_aspect};
pub use transform::{crop_image, crop_image_normalized, crop_image_to_data_url};
pub use types::JsDecodedImage;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // Future: Set up panic hook for better error messages in browser console
    // when console_error_panic_hook feature is added
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Number of photos per printed page.
#[wasm_bindgen]
pub fn page_size() -> usize {
    polaroid_core::PAGE_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }

    #[test]
    fn test_page_size() {
        assert_eq!(page_size(), 8);
    }
}

//! Polaroid Core - photo grid logic
//!
//! This crate provides the logic behind the polaroid printing page: the
//! photo slot store, the crop transform, and the print layout that splits
//! the grid into pages of eight.
//!
//! # Module Structure
//!
//! - `slots` - Page-padded store of optional image references
//! - `session` - Single-writer edit session with serialized crop workflows
//! - `transform` - Pixel-region crop and the decode-crop-encode pipeline
//! - `decode` / `encode` - Image codecs behind the crop transform
//! - `layout` - Pagination, print layout and display geometry
//! - `icons` - Inline SVG icons for the toolbar and slot controls

pub mod decode;
pub mod encode;
pub mod icons;
pub mod layout;
pub mod session;
pub mod slots;
pub mod transform;

pub use icons::Icon;
pub use layout::{print_layout, DisplayParams, PrintItem, POLAROID_ASPECT};
pub use session::{CropTicket, EditError, PhotoBook};
pub use slots::{PhotoSlots, SlotError, PAGE_SIZE};
pub use transform::{crop_region, crop_to_data_url, CropError, CropOptions, Region};

#[cfg(test)]
mod tests {
    use super::*;

    /// The full edit flow the page drives, with real image bytes.
    #[test]
    fn test_upload_crop_print_flow() {
        let pixels: Vec<u8> = (0..40 * 30 * 3).map(|i| (i % 251) as u8).collect();
        let png = encode::encode_png(&pixels, 40, 30).unwrap();
        let source = encode::to_data_url(&png, "image/png");

        let mut book = PhotoBook::new();
        book.insert_many(vec![source; 9]);
        assert_eq!(book.slots().len(), 16);

        let ticket = book.begin_crop(8).unwrap();
        book.finish_crop(ticket, |reference| {
            let (_, bytes) = encode::parse_data_url(reference)
                .ok_or(CropError::Decode(decode::DecodeError::InvalidFormat))?;
            crop_to_data_url(&bytes, Region::new(5, 5, 10, 12), &CropOptions::default())
        })
        .unwrap();

        let cropped = book.slots().get(8).unwrap();
        let (_, bytes) = encode::parse_data_url(cropped).unwrap();
        assert_eq!(decode::probe_dimensions(&bytes).unwrap(), (10, 12));

        let items = print_layout(book.slots());
        let breaks = items
            .iter()
            .filter(|item| matches!(item, PrintItem::PageBreak))
            .count();
        assert_eq!(breaks, 1);
    }

    #[test]
    fn test_page_size_is_eight() {
        assert_eq!(PAGE_SIZE, 8);
        assert_eq!(DisplayParams::default().width, 300);
    }
}

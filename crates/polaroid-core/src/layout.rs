//! Grid layout: pagination, print layout and display geometry.
//!
//! Everything here is a pure projection over the slot store, recomputed on
//! every read. Nothing is stored.
//!
//! # Pages
//!
//! Slots are grouped into consecutive chunks of [`PAGE_SIZE`]. Chunk `k`
//! (0-indexed) is labelled "Page k+1". The print layout is the same grid with
//! a label per page and a page break between pages.
//!
//! # Display Geometry
//!
//! Each photo is shown in a 300x400 box at the polaroid aspect ratio
//! (8.8:10.7) with cover fit: the image is scaled to fill the box and the
//! overflow is cropped around the center.

use serde::{Deserialize, Serialize};

use crate::slots::{PhotoSlots, PAGE_SIZE};
use crate::transform::Region;

/// Width:height ratio of a photo frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AspectRatio {
    pub width: f64,
    pub height: f64,
}

/// The polaroid print area, 8.8cm x 10.7cm.
pub const POLAROID_ASPECT: AspectRatio = AspectRatio {
    width: 8.8,
    height: 10.7,
};

impl AspectRatio {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Width divided by height. Degenerate ratios fall back to square.
    pub fn value(self) -> f64 {
        if self.width > 0.0 && self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }
}

/// How an image fills its display box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectFit {
    /// Scale to fill the box, cropping overflow.
    #[default]
    Cover,
    /// Scale to fit inside the box, letterboxing.
    Contain,
}

/// Parameters handed to the image display collaborator for each photo.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayParams {
    pub width: u32,
    pub height: u32,
    pub aspect_ratio: AspectRatio,
    pub fit: ObjectFit,
}

impl Default for DisplayParams {
    fn default() -> Self {
        Self {
            width: 300,
            height: 400,
            aspect_ratio: POLAROID_ASPECT,
            fit: ObjectFit::Cover,
        }
    }
}

/// One page of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a, R> {
    /// 1-based page number, as printed.
    pub number: usize,
    /// Slot index of the first entry on this page.
    pub start: usize,
    pub slots: &'a [Option<R>],
}

impl<R> Page<'_, R> {
    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }
}

/// Entry in the flattened print layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PrintItem<R> {
    /// "Page N" label at the top of each page.
    PageLabel { number: usize },
    /// A slot with an image.
    Photo { index: usize, reference: R },
    /// An empty slot, printed as a blank frame.
    Placeholder { index: usize },
    /// Forced break between two pages.
    PageBreak,
}

/// Number of pages needed for `len` slots.
pub fn page_count(len: usize) -> usize {
    len.div_ceil(PAGE_SIZE)
}

/// Page that slot `index` is printed on (1-based).
pub fn page_of(index: usize) -> usize {
    index / PAGE_SIZE + 1
}

/// Group the slots into pages of eight.
pub fn pages<R>(slots: &PhotoSlots<R>) -> impl Iterator<Item = Page<'_, R>> {
    slots
        .as_slice()
        .chunks(PAGE_SIZE)
        .enumerate()
        .map(|(k, chunk)| Page {
            number: k + 1,
            start: k * PAGE_SIZE,
            slots: chunk,
        })
}

/// Flatten the grid into print order: label, eight frames, break, label...
///
/// No break follows the last page.
pub fn print_layout<R: Clone>(slots: &PhotoSlots<R>) -> Vec<PrintItem<R>> {
    let total = page_count(slots.len());
    let mut items = Vec::with_capacity(slots.len() + total * 2);

    for page in pages(slots) {
        items.push(PrintItem::PageLabel {
            number: page.number,
        });
        for (offset, slot) in page.slots.iter().enumerate() {
            let index = page.start + offset;
            items.push(match slot {
                Some(reference) => PrintItem::Photo {
                    index,
                    reference: reference.clone(),
                },
                None => PrintItem::Placeholder { index },
            });
        }
        if page.number < total {
            items.push(PrintItem::PageBreak);
        }
    }

    items
}

/// Largest rectangle of the given aspect, centered in a `src_width` x
/// `src_height` image.
///
/// This is the part of the source that stays visible under cover fit, and the
/// starting selection of the crop widget.
pub fn cover_rect(src_width: u32, src_height: u32, aspect: AspectRatio) -> Region {
    if src_width == 0 || src_height == 0 {
        return Region::new(0, 0, 0, 0);
    }

    let target = aspect.value();
    let src_ratio = src_width as f64 / src_height as f64;

    let (width, height) = if src_ratio > target {
        // Source is wider: keep full height, trim the sides
        let w = (src_height as f64 * target).round() as u32;
        (w.clamp(1, src_width), src_height)
    } else {
        // Source is taller: keep full width, trim top and bottom
        let h = (src_width as f64 / target).round() as u32;
        (src_width, h.clamp(1, src_height))
    };

    let x = (src_width - width) / 2;
    let y = (src_height - height) / 2;
    Region::new(x as i64, y as i64, width, height)
}

/// Starting selection for the crop widget at the polaroid aspect.
pub fn initial_crop_region(src_width: u32, src_height: u32) -> Region {
    cover_rect(src_width, src_height, POLAROID_ASPECT)
}

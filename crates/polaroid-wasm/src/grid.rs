//! Photo grid WASM bindings.
//!
//! [`JsPhotoGrid`] is the page's single photo book. Slot references are
//! strings: object URLs for fresh uploads, data URLs for cropped photos.
//!
//! Methods that drop a reference (`replace_at`, `delete_at`, crop commits)
//! return it so the page can `URL.revokeObjectURL` it.
//!
//! # Example
//!
//! ```typescript
//! const grid = new JsPhotoGrid();
//! grid.insert_many(files.map((f) => URL.createObjectURL(f)));
//!
//! // Crop slot 2. The slot stays locked until the ticket is settled.
//! const ticket = grid.begin_crop(2);
//! let bytes;
//! try {
//!   bytes = ticket.inline_bytes()
//!     ?? new Uint8Array(await (await fetch(ticket.source)).arrayBuffer());
//! } catch (e) {
//!   grid.cancel_crop(ticket);
//!   throw e;
//! }
//! try {
//!   // Consumes the ticket, on failure too
//!   grid.finish_crop(ticket, bytes, area.x, area.y, area.width, area.height);
//! } catch (e) {
//!   toast(`Crop failed: ${e}`);
//! }
//! ```

use polaroid_core::encode::parse_data_url;
use polaroid_core::layout::{page_count, pages, print_layout};
use polaroid_core::session::{CropTicket, EditError, PhotoBook};
use polaroid_core::transform::{crop_to_data_url, CropOptions, Region};
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::console::js_error;
use crate::types::{crop_options_from_js, region_from_js};

/// Summary of one printed page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct PageSummary {
    number: usize,
    start: usize,
    occupied: usize,
}

/// An in-flight crop on one slot. Pass it back to `finish_crop`,
/// `commit_crop` or `cancel_crop`.
#[wasm_bindgen]
pub struct JsCropTicket {
    inner: CropTicket<String>,
}

#[wasm_bindgen]
impl JsCropTicket {
    /// Slot being cropped.
    #[wasm_bindgen(getter)]
    pub fn index(&self) -> usize {
        self.inner.index()
    }

    /// Image reference to load for the crop.
    #[wasm_bindgen(getter)]
    pub fn source(&self) -> String {
        self.inner.source().clone()
    }

    /// Bytes of the source when it is a data URL, so no fetch is needed.
    pub fn inline_bytes(&self) -> Option<Vec<u8>> {
        parse_data_url(self.inner.source()).map(|(_, bytes)| bytes)
    }
}

/// The photo grid: a page-padded list of slots plus crop bookkeeping.
#[wasm_bindgen]
pub struct JsPhotoGrid {
    book: PhotoBook<String>,
}

#[wasm_bindgen]
impl JsPhotoGrid {
    /// Create a grid with one empty page.
    #[wasm_bindgen(constructor)]
    pub fn new() -> JsPhotoGrid {
        JsPhotoGrid {
            book: PhotoBook::new(),
        }
    }

    /// Total number of slots (always a multiple of 8).
    #[wasm_bindgen(getter)]
    pub fn length(&self) -> usize {
        self.book.slots().len()
    }

    #[wasm_bindgen(getter)]
    pub fn occupied_count(&self) -> usize {
        self.book.slots().occupied_count()
    }

    #[wasm_bindgen(getter)]
    pub fn page_count(&self) -> usize {
        page_count(self.book.slots().len())
    }

    /// Reference in slot `index`, or `undefined` when empty.
    pub fn get(&self, index: usize) -> Option<String> {
        self.book.slots().get(index).cloned()
    }

    /// All slots as an array of `string | null`.
    pub fn slots(&self) -> js_sys::Array {
        self.book
            .slots()
            .iter()
            .map(|slot| match slot {
                Some(url) => JsValue::from_str(url),
                None => JsValue::NULL,
            })
            .collect()
    }

    /// Add uploads, filling the first empty slots and growing by whole
    /// pages when full. Returns the slot index of each upload.
    pub fn insert_many(&mut self, urls: Vec<String>) -> Vec<u32> {
        self.book
            .insert_many(urls)
            .into_iter()
            .map(|index| index as u32)
            .collect()
    }

    /// Replace slot `index`, returning the old reference if there was one.
    pub fn replace_at(&mut self, index: usize, url: String) -> Result<Option<String>, JsValue> {
        self.try_replace_at(index, url)
            .map_err(|e| js_error("replace", e))
    }

    /// Empty slot `index`, returning the removed reference.
    pub fn delete_at(&mut self, index: usize) -> Result<Option<String>, JsValue> {
        self.try_delete_at(index).map_err(|e| js_error("delete", e))
    }

    /// Start a crop on slot `index`. Disable the slot's edit control until the
    /// ticket is settled.
    ///
    /// Every ticket must be passed to exactly one of `finish_crop`,
    /// `commit_crop` or `cancel_crop`. A dropped ticket leaves the slot
    /// locked for the rest of the session, so cancel it on every path that
    /// abandons the crop (a failed fetch, a closed dialog).
    pub fn begin_crop(&mut self, index: usize) -> Result<JsCropTicket, JsValue> {
        self.try_begin_crop(index)
            .map_err(|e| js_error("begin crop", e))
    }

    /// True while a crop is pending on slot `index`.
    pub fn is_crop_pending(&self, index: usize) -> bool {
        self.book.is_crop_pending(index)
    }

    /// Crop the ticket's source bytes to the selected region and store the
    /// result (a data URL) in the slot. Returns the new reference.
    ///
    /// `options` may be omitted; see `CropOptions` for its shape.
    #[allow(clippy::too_many_arguments)]
    pub fn finish_crop(
        &mut self,
        ticket: JsCropTicket,
        bytes: &[u8],
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        options: JsValue,
    ) -> Result<String, JsValue> {
        let options = match crop_options_from_js(options) {
            Ok(options) => options,
            Err(e) => {
                self.book.cancel_crop(ticket.inner);
                return Err(e);
            }
        };
        let region = region_from_js(x, y, width, height);

        self.try_finish_crop(ticket, bytes, region, &options)
            .map_err(|e| js_error("crop", e))
    }

    /// Store a crop produced by the page itself (e.g. on a canvas).
    /// Returns the replaced reference.
    pub fn commit_crop(&mut self, ticket: JsCropTicket, url: String) -> Result<String, JsValue> {
        self.book
            .commit_crop(ticket.inner, url)
            .map_err(|e| js_error("commit crop", e))
    }

    /// Abandon a crop, leaving the slot as it was.
    pub fn cancel_crop(&mut self, ticket: JsCropTicket) {
        self.book.cancel_crop(ticket.inner);
    }

    /// Pages as `{ number, start, occupied }` objects.
    pub fn pages(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.page_summaries())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Print order: `pageLabel`, `photo`, `placeholder` and `pageBreak`
    /// items, tagged by their `kind` field.
    pub fn print_layout(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&print_layout(self.book.slots()))
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl Default for JsPhotoGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl JsPhotoGrid {
    pub(crate) fn try_replace_at(
        &mut self,
        index: usize,
        url: String,
    ) -> Result<Option<String>, EditError> {
        self.book.replace_at(index, url)
    }

    pub(crate) fn try_delete_at(&mut self, index: usize) -> Result<Option<String>, EditError> {
        self.book.delete_at(index)
    }

    pub(crate) fn try_finish_crop(
        &mut self,
        ticket: JsCropTicket,
        bytes: &[u8],
        region: Region,
        options: &CropOptions,
    ) -> Result<String, EditError> {
        let index = ticket.index();
        self.book
            .finish_crop(ticket.inner, |_| crop_to_data_url(bytes, region, options))?;

        self.book
            .slots()
            .require_image(index)
            .cloned()
            .map_err(EditError::from)
    }

    pub(crate) fn try_begin_crop(&mut self, index: usize) -> Result<JsCropTicket, EditError> {
        self.book
            .begin_crop(index)
            .map(|inner| JsCropTicket { inner })
    }

    fn page_summaries(&self) -> Vec<PageSummary> {
        pages(self.book.slots())
            .map(|page| PageSummary {
                number: page.number,
                start: page.start,
                occupied: page.occupied_count(),
            })
            .collect()
    }
}

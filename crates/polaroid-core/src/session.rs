//! Photo book edit session.
//!
//! [`PhotoBook`] owns the slot store for the lifetime of the page and is the
//! only writer. Event handlers borrow it mutably, one event at a time.
//!
//! # Crop Workflow
//!
//! Cropping spans an asynchronous gap: the page has to load the slot's image
//! bytes and wait for the user to confirm a selection. The book hands out a
//! [`CropTicket`] when the workflow starts and checks it when the result
//! comes back:
//!
//! 1. `begin_crop(index)` - fails if the slot is empty or already cropping
//! 2. the page loads `ticket.source()` and runs the crop transform
//! 3. `commit_crop(ticket, cropped)` or `cancel_crop(ticket)`
//!
//! If the slot was replaced or deleted while the crop was pending, the commit
//! is rejected as stale and the newer content stays. Every ticket carries an
//! id unique to the process, so a ticket only settles the crop it was issued
//! for.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use thiserror::Error;

use crate::slots::{PhotoSlots, SlotError};
use crate::transform::CropError;

/// Errors from edit-session operations.
#[derive(Debug, Error)]
pub enum EditError {
    #[error(transparent)]
    Slot(#[from] SlotError),

    /// A crop for this slot is already in flight.
    #[error("A crop is already in progress for slot {index}")]
    CropPending { index: usize },

    /// The slot changed while the crop was in flight.
    #[error("Slot {index} changed while it was being cropped")]
    StaleCrop { index: usize },

    /// The ticket was not issued by this book or was already settled.
    #[error("Unknown crop ticket for slot {index}")]
    UnknownTicket { index: usize },

    #[error(transparent)]
    Crop(#[from] CropError),
}

/// Proof that a crop workflow was started on a slot.
///
/// Not `Clone`: a ticket is settled exactly once, by commit or cancel.
#[derive(Debug, PartialEq, Eq)]
pub struct CropTicket<R> {
    id: u64,
    index: usize,
    revision: u64,
    source: R,
}

impl<R> CropTicket<R> {
    /// Slot being cropped.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Image reference the crop was started from.
    pub fn source(&self) -> &R {
        &self.source
    }
}

/// The page's photo grid plus in-flight crop bookkeeping.
#[derive(Debug, Clone)]
pub struct PhotoBook<R> {
    slots: PhotoSlots<R>,
    /// Per-slot counter bumped on every change, parallel to `slots`.
    revisions: Vec<u64>,
    /// Slot index to the id of its outstanding ticket.
    pending: HashMap<usize, u64>,
}

static NEXT_TICKET_ID: AtomicU64 = AtomicU64::new(1);

fn next_ticket_id() -> u64 {
    NEXT_TICKET_ID.fetch_add(1, Ordering::Relaxed)
}

impl<R> Default for PhotoBook<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> PhotoBook<R> {
    pub fn new() -> Self {
        let slots = PhotoSlots::new();
        let revisions = vec![0; slots.len()];
        Self {
            slots,
            revisions,
            pending: HashMap::new(),
        }
    }

    pub fn slots(&self) -> &PhotoSlots<R> {
        &self.slots
    }

    /// Add uploaded images, filling gaps first. Returns where each landed.
    pub fn insert_many<I>(&mut self, items: I) -> Vec<usize>
    where
        I: IntoIterator<Item = R>,
    {
        let placed = self.slots.insert_many(items);
        self.revisions.resize(self.slots.len(), 0);
        for &index in &placed {
            self.touch(index);
        }
        placed
    }

    /// Swap in a new upload for slot `index`.
    pub fn replace_at(&mut self, index: usize, item: R) -> Result<Option<R>, EditError> {
        let previous = self.slots.replace_at(index, item)?;
        self.touch(index);
        Ok(previous)
    }

    /// Clear slot `index`.
    pub fn delete_at(&mut self, index: usize) -> Result<Option<R>, EditError> {
        let removed = self.slots.delete_at(index)?;
        self.touch(index);
        Ok(removed)
    }

    /// True while a crop ticket for `index` is outstanding.
    pub fn is_crop_pending(&self, index: usize) -> bool {
        self.pending.contains_key(&index)
    }

    /// Release a crop without changing the slot.
    ///
    /// Tickets this book did not issue, or that were already settled, are
    /// ignored.
    pub fn cancel_crop(&mut self, ticket: CropTicket<R>) {
        self.settle(&ticket);
    }

    /// Drop the pending entry if it belongs to `ticket`.
    fn settle(&mut self, ticket: &CropTicket<R>) -> bool {
        if self.pending.get(&ticket.index) == Some(&ticket.id) {
            self.pending.remove(&ticket.index);
            true
        } else {
            false
        }
    }

    fn touch(&mut self, index: usize) {
        if let Some(rev) = self.revisions.get_mut(index) {
            *rev += 1;
        }
    }

    fn revision(&self, index: usize) -> u64 {
        self.revisions.get(index).copied().unwrap_or_default()
    }
}

impl<R: Clone> PhotoBook<R> {
    /// Start cropping slot `index`.
    pub fn begin_crop(&mut self, index: usize) -> Result<CropTicket<R>, EditError> {
        let source = self.slots.require_image(index)?.clone();
        if self.pending.contains_key(&index) {
            return Err(EditError::CropPending { index });
        }

        let id = next_ticket_id();
        self.pending.insert(index, id);
        Ok(CropTicket {
            id,
            index,
            revision: self.revision(index),
            source,
        })
    }

    /// Write a finished crop back into its slot.
    ///
    /// The ticket is consumed either way. On `StaleCrop` the slot keeps the
    /// content that replaced it during the crop.
    pub fn commit_crop(&mut self, ticket: CropTicket<R>, cropped: R) -> Result<R, EditError> {
        let index = ticket.index;
        if !self.settle(&ticket) {
            return Err(EditError::UnknownTicket { index });
        }
        if self.revision(index) != ticket.revision {
            return Err(EditError::StaleCrop { index });
        }

        let previous = self.slots.crop_commit(index, cropped)?;
        self.touch(index);
        Ok(previous)
    }

    /// Run `crop` on the ticket's source and commit its output.
    ///
    /// A failed crop cancels the ticket and leaves the slot unchanged.
    pub fn finish_crop<F>(&mut self, ticket: CropTicket<R>, crop: F) -> Result<R, EditError>
    where
        F: FnOnce(&R) -> Result<R, CropError>,
    {
        match crop(ticket.source()) {
            Ok(cropped) => self.commit_crop(ticket, cropped),
            Err(err) => {
                self.cancel_crop(ticket);
                Err(err.into())
            }
        }
    }
}

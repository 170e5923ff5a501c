//! Photo slot store.
//!
//! The grid is an ordered sequence of slots, each holding an image reference
//! or nothing. The sequence length is always a multiple of [`PAGE_SIZE`] so
//! that every printed page has exactly eight positions.
//!
//! # Invariants
//!
//! - `len()` is a non-negative multiple of [`PAGE_SIZE`] after every operation
//! - Only the operation's target index changes; order is otherwise stable
//! - Failed operations leave the store untouched
//!
//! The store is generic over the reference type. The WASM bindings use
//! `String` (object URLs and data URLs); tests use plain integers.

use thiserror::Error;

/// Number of slots per printed page.
pub const PAGE_SIZE: usize = 8;

/// Errors for index-addressed slot operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlotError {
    /// The index is past the end of the sequence.
    #[error("Invalid slot index {index} (grid has {len} slots)")]
    InvalidIndex { index: usize, len: usize },

    /// The slot exists but holds no image.
    #[error("Slot {index} is empty")]
    EmptySlot { index: usize },
}

/// Ordered, page-padded sequence of optional image references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoSlots<R> {
    slots: Vec<Option<R>>,
}

impl<R> Default for PhotoSlots<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> PhotoSlots<R> {
    /// Create a store with one empty page.
    pub fn new() -> Self {
        let mut slots = Vec::with_capacity(PAGE_SIZE);
        slots.resize_with(PAGE_SIZE, || None);
        Self { slots }
    }

    /// Total number of slots, empty ones included.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True when no slot holds an image.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Number of slots holding an image.
    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Lowest index with no image, if any.
    pub fn first_empty(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    /// Image at `index`, or `None` when the slot is empty or out of range.
    pub fn get(&self, index: usize) -> Option<&R> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<&R>> {
        self.slots.iter().map(Option::as_ref)
    }

    pub fn as_slice(&self) -> &[Option<R>] {
        &self.slots
    }

    /// Place each item into the lowest empty slot, appending when full.
    ///
    /// Appends immediately pad the sequence to the next page boundary, so the
    /// page invariant holds between items as well as after the call.
    ///
    /// Returns the index each item landed at, in input order.
    pub fn insert_many<I>(&mut self, items: I) -> Vec<usize>
    where
        I: IntoIterator<Item = R>,
    {
        let mut placed = Vec::new();
        for item in items {
            let index = match self.first_empty() {
                Some(index) => {
                    self.slots[index] = Some(item);
                    index
                }
                None => {
                    let index = self.slots.len();
                    self.slots.push(Some(item));
                    self.pad_to_page();
                    index
                }
            };
            placed.push(index);
        }
        placed
    }

    /// Overwrite slot `index`, returning whatever it held before.
    pub fn replace_at(&mut self, index: usize, item: R) -> Result<Option<R>, SlotError> {
        let slot = self.slot_mut(index)?;
        Ok(slot.replace(item))
    }

    /// Empty slot `index`. The sequence keeps its length.
    pub fn delete_at(&mut self, index: usize) -> Result<Option<R>, SlotError> {
        let slot = self.slot_mut(index)?;
        Ok(slot.take())
    }

    /// Swap the image at `index` for its cropped version.
    ///
    /// Unlike [`replace_at`](Self::replace_at), the slot must already hold an
    /// image.
    pub fn crop_commit(&mut self, index: usize, cropped: R) -> Result<R, SlotError> {
        match self.slot_mut(index)? {
            Some(current) => Ok(std::mem::replace(current, cropped)),
            None => Err(SlotError::EmptySlot { index }),
        }
    }

    /// Check that `index` addresses an occupied slot.
    pub fn require_image(&self, index: usize) -> Result<&R, SlotError> {
        match self.slots.get(index) {
            None => Err(SlotError::InvalidIndex {
                index,
                len: self.slots.len(),
            }),
            Some(None) => Err(SlotError::EmptySlot { index }),
            Some(Some(item)) => Ok(item),
        }
    }

    fn slot_mut(&mut self, index: usize) -> Result<&mut Option<R>, SlotError> {
        let len = self.slots.len();
        self.slots
            .get_mut(index)
            .ok_or(SlotError::InvalidIndex { index, len })
    }

    fn pad_to_page(&mut self) {
        let target = padded_len(self.slots.len());
        self.slots.resize_with(target, || None);
    }
}

impl<R> FromIterator<R> for PhotoSlots<R> {
    fn from_iter<T: IntoIterator<Item = R>>(iter: T) -> Self {
        let mut slots = Self::new();
        slots.insert_many(iter);
        slots
    }
}

/// Smallest multiple of [`PAGE_SIZE`] that holds `len` slots (at least one page).
pub fn padded_len(len: usize) -> usize {
    len.div_ceil(PAGE_SIZE).max(1) * PAGE_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_page() -> PhotoSlots<u32> {
        (0..8).collect()
    }

    #[test]
    fn test_new_store_is_one_empty_page() {
        let slots: PhotoSlots<u32> = PhotoSlots::new();
        assert_eq!(slots.len(), 8);
        assert!(slots.is_empty());
        assert_eq!(slots.occupied_count(), 0);
        assert_eq!(slots.first_empty(), Some(0));
    }

    #[test]
    fn test_insert_fills_from_front() {
        let mut slots = PhotoSlots::new();
        let placed = slots.insert_many([10, 11, 12]);

        assert_eq!(placed, vec![0, 1, 2]);
        assert_eq!(slots.len(), 8);
        assert_eq!(slots.get(0), Some(&10));
        assert_eq!(slots.get(2), Some(&12));
        for i in 3..8 {
            assert_eq!(slots.get(i), None);
        }
    }

    #[test]
    fn test_insert_overflow_appends_and_pads() {
        let mut slots = PhotoSlots::new();
        slots.insert_many([0, 1, 2]);
        let placed = slots.insert_many([3, 4, 5, 6, 7, 8]);

        assert_eq!(placed, vec![3, 4, 5, 6, 7, 8]);
        assert_eq!(slots.len(), 16);
        assert_eq!(slots.occupied_count(), 9);
        assert_eq!(slots.get(8), Some(&8));
        assert_eq!(slots.first_empty(), Some(9));
    }

    #[test]
    fn test_insert_reuses_deleted_slot_before_appending() {
        let mut slots = full_page();
        slots.delete_at(5).unwrap();

        let placed = slots.insert_many([100, 101]);
        assert_eq!(placed, vec![5, 8]);
        assert_eq!(slots.get(5), Some(&100));
        assert_eq!(slots.len(), 16);
    }

    #[test]
    fn test_insert_empty_is_noop() {
        let mut slots = full_page();
        let before = slots.clone();
        let placed = slots.insert_many(Vec::new());
        assert!(placed.is_empty());
        assert_eq!(slots, before);
    }

    #[test]
    fn test_insert_many_pages_at_once() {
        let mut slots = PhotoSlots::new();
        let placed = slots.insert_many(0..20);
        assert_eq!(placed, (0..20).collect::<Vec<_>>());
        assert_eq!(slots.len(), 24);
        assert_eq!(slots.first_empty(), Some(20));
    }

    #[test]
    fn test_delete_keeps_length() {
        let mut slots = full_page();
        let removed = slots.delete_at(2).unwrap();

        assert_eq!(removed, Some(2));
        assert_eq!(slots.len(), 8);
        assert_eq!(slots.get(2), None);
        assert_eq!(slots.get(1), Some(&1));
        assert_eq!(slots.get(3), Some(&3));
    }

    #[test]
    fn test_delete_empty_slot_returns_none() {
        let mut slots: PhotoSlots<u32> = PhotoSlots::new();
        assert_eq!(slots.delete_at(4), Ok(None));
    }

    #[test]
    fn test_delete_out_of_range() {
        let mut slots = full_page();
        assert_eq!(
            slots.delete_at(8),
            Err(SlotError::InvalidIndex { index: 8, len: 8 })
        );
        assert_eq!(slots, full_page());
    }

    #[test]
    fn test_replace_changes_only_target() {
        let mut slots = full_page();
        let previous = slots.replace_at(3, 42).unwrap();

        assert_eq!(previous, Some(3));
        for i in 0..8 {
            let expected = if i == 3 { 42 } else { i as u32 };
            assert_eq!(slots.get(i), Some(&expected));
        }
    }

    #[test]
    fn test_replace_empty_slot_allowed() {
        let mut slots = PhotoSlots::new();
        assert_eq!(slots.replace_at(6, 1), Ok(None));
        assert_eq!(slots.get(6), Some(&1));
    }

    #[test]
    fn test_replace_out_of_range() {
        let mut slots: PhotoSlots<u32> = PhotoSlots::new();
        assert!(matches!(
            slots.replace_at(99, 1),
            Err(SlotError::InvalidIndex { index: 99, len: 8 })
        ));
    }

    #[test]
    fn test_crop_commit_replaces_image() {
        let mut slots = full_page();
        assert_eq!(slots.crop_commit(4, 400), Ok(4));
        assert_eq!(slots.get(4), Some(&400));
    }

    #[test]
    fn test_crop_commit_twice_same_result() {
        let mut slots = full_page();
        slots.crop_commit(1, 77).unwrap();
        let first = slots.clone();
        slots.crop_commit(1, 77).unwrap();
        assert_eq!(slots, first);
    }

    #[test]
    fn test_crop_commit_on_empty_slot_fails() {
        let mut slots: PhotoSlots<u32> = PhotoSlots::new();
        assert_eq!(
            slots.crop_commit(0, 5),
            Err(SlotError::EmptySlot { index: 0 })
        );
        assert_eq!(slots.get(0), None);
    }

    #[test]
    fn test_crop_commit_out_of_range() {
        let mut slots = full_page();
        assert!(matches!(
            slots.crop_commit(8, 5),
            Err(SlotError::InvalidIndex { .. })
        ));
    }

    #[test]
    fn test_require_image() {
        let mut slots = PhotoSlots::new();
        slots.insert_many([9]);
        assert_eq!(slots.require_image(0), Ok(&9));
        assert_eq!(slots.require_image(1), Err(SlotError::EmptySlot { index: 1 }));
        assert!(matches!(
            slots.require_image(8),
            Err(SlotError::InvalidIndex { .. })
        ));
    }

    #[test]
    fn test_padded_len() {
        assert_eq!(padded_len(0), 8);
        assert_eq!(padded_len(1), 8);
        assert_eq!(padded_len(8), 8);
        assert_eq!(padded_len(9), 16);
        assert_eq!(padded_len(17), 24);
    }

    #[test]
    fn test_slot_error_display() {
        let err = SlotError::InvalidIndex { index: 9, len: 8 };
        assert_eq!(err.to_string(), "Invalid slot index 9 (grid has 8 slots)");

        let err = SlotError::EmptySlot { index: 2 };
        assert_eq!(err.to_string(), "Slot 2 is empty");
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

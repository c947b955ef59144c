//! Conversion between logical indices and physical positions.
//!
//! A *logical index* addresses the caller's data (`0..item_count`). A
//! *physical position* is what the recycling host sees. When a header is
//! injected it occupies physical position 0 and every item shifts down by
//! one; otherwise the two spaces are identical.

use crate::error::{AdapterError, AdapterResult};

/// What a physical position resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotPosition {
    /// The injected header slot.
    Header,
    /// A data item at the given logical index.
    Item(usize),
}

impl SlotPosition {
    /// The logical index, if this is an item.
    #[inline]
    pub fn logical(self) -> Option<usize> {
        match self {
            SlotPosition::Header => None,
            SlotPosition::Item(index) => Some(index),
        }
    }

    /// Returns true for the header slot.
    #[inline]
    pub fn is_header(self) -> bool {
        matches!(self, SlotPosition::Header)
    }
}

/// Pure mapping between logical and physical index spaces.
///
/// The only state is whether a header is currently injected, so a mapper is
/// `Copy` and every method is a pure function of its arguments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PositionMapper {
    has_header: bool,
}

impl PositionMapper {
    /// Creates a mapper with or without an injected header.
    pub const fn new(has_header: bool) -> Self {
        Self { has_header }
    }

    /// Whether a header occupies physical position 0.
    #[inline]
    pub const fn has_header(&self) -> bool {
        self.has_header
    }

    /// The number of physical positions occupied by the header (0 or 1).
    #[inline]
    pub const fn header_offset(&self) -> usize {
        if self.has_header { 1 } else { 0 }
    }

    /// Physical count for a given logical count.
    #[inline]
    pub const fn physical_count(&self, logical_count: usize) -> usize {
        logical_count + self.header_offset()
    }

    /// Resolves a physical position.
    ///
    /// # Errors
    ///
    /// [`AdapterError::PositionOutOfRange`] if `physical` is not below the
    /// physical count.
    pub fn to_logical(&self, physical: usize, logical_count: usize) -> AdapterResult<SlotPosition> {
        let count = self.physical_count(logical_count);
        if physical >= count {
            return Err(AdapterError::PositionOutOfRange {
                position: physical,
                count,
            });
        }

        if self.has_header {
            if physical == 0 {
                Ok(SlotPosition::Header)
            } else {
                Ok(SlotPosition::Item(physical - 1))
            }
        } else {
            Ok(SlotPosition::Item(physical))
        }
    }

    /// Converts a logical index into its physical position.
    ///
    /// # Errors
    ///
    /// [`AdapterError::IndexOutOfRange`] if `logical` is not below
    /// `logical_count`.
    pub fn to_physical(&self, logical: usize, logical_count: usize) -> AdapterResult<usize> {
        if logical >= logical_count {
            return Err(AdapterError::IndexOutOfRange {
                index: logical,
                count: logical_count,
            });
        }
        Ok(logical + self.header_offset())
    }

    /// Inverse of [`to_logical`](Self::to_logical) for an already resolved slot.
    #[inline]
    pub const fn physical_of(&self, slot: SlotPosition) -> usize {
        match slot {
            SlotPosition::Header => 0,
            SlotPosition::Item(index) => index + self.header_offset(),
        }
    }
}

//! Identity-based selection tracking.
//!
//! [`SelectionStore`] remembers which items are checked by their
//! [`StableId`], never by position. Inserting, removing, or reordering data
//! leaves the checked set alone: an item that reappears under the same id
//! is still checked.
//!
//! The store has no notification channel of its own. The adapter engine
//! requests the visual refresh after a mutation.

use std::collections::HashSet;
use std::fmt;

use lattice_lists_core::logging::targets;

/// Long-lived identity of a logical item.
///
/// Data providers that can reorder or remove items should report a real
/// identity from their own data. The default is the logical index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StableId(pub i64);

impl StableId {
    /// Id reported for the injected header slot.
    pub const HEADER: StableId = StableId(i32::MIN as i64);

    /// Default id for an item: its logical index.
    #[inline]
    pub const fn from_index(logical: usize) -> Self {
        StableId(logical as i64)
    }

    /// The raw id value.
    #[inline]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for StableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<i64> for StableId {
    fn from(value: i64) -> Self {
        StableId(value)
    }
}

/// The set of checked items, keyed by [`StableId`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionStore {
    checked: HashSet<StableId>,
}

impl SelectionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether `id` is checked.
    ///
    /// Returns true if membership actually changed. Checking an already
    /// checked id, or unchecking an unchecked one, is a no-op.
    pub fn set_checked(&mut self, id: StableId, checked: bool) -> bool {
        let changed = if checked {
            self.checked.insert(id)
        } else {
            self.checked.remove(&id)
        };
        if changed {
            tracing::trace!(
                target: targets::SELECTION,
                %id,
                checked,
                size = self.checked.len(),
                "selection changed"
            );
        }
        changed
    }

    /// Flip membership of `id` and return the new state.
    pub fn toggle(&mut self, id: StableId) -> bool {
        let checked = !self.is_checked(id);
        self.set_checked(id, checked);
        checked
    }

    /// Whether `id` is checked.
    #[inline]
    pub fn is_checked(&self, id: StableId) -> bool {
        self.checked.contains(&id)
    }

    /// Uncheck everything. Returns the number of ids removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.checked.len();
        self.checked.clear();
        if removed > 0 {
            tracing::trace!(target: targets::SELECTION, removed, "selection cleared");
        }
        removed
    }

    /// Number of checked ids.
    #[inline]
    pub fn len(&self) -> usize {
        self.checked.len()
    }

    /// Returns true if nothing is checked.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.checked.is_empty()
    }

    /// A copy of the checked set.
    pub fn snapshot(&self) -> HashSet<StableId> {
        self.checked.clone()
    }

    /// Iterate over checked ids in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = StableId> + '_ {
        self.checked.iter().copied()
    }
}

static_assertions::assert_impl_all!(StableId: Send, Sync, Copy);
static_assertions::assert_impl_all!(SelectionStore: Send, Sync);

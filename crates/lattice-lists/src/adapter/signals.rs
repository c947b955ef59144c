//! Signals emitted by an adapter engine.

use lattice_lists_core::Signal;

use super::selection::StableId;

/// Every notification an [`AdapterEngine`](super::AdapterEngine) sends.
///
/// Refresh signals carry physical positions and are meant for the recycling
/// host. Click and checking signals carry logical indices or stable ids and
/// are meant for the application.
pub struct AdapterSignals {
    // -------------------------------------------------------------------------
    // Refresh requests (engine -> host)
    // -------------------------------------------------------------------------
    /// Every slot must be re-classified and re-bound.
    pub full_refresh: Signal<()>,

    /// One slot must be re-bound.
    /// Args: physical position
    pub item_refresh: Signal<usize>,

    /// The header slot must be re-bound with new content.
    pub header_refresh: Signal<()>,

    /// Slots were inserted.
    /// Args: (first physical position, count)
    pub range_inserted: Signal<(usize, usize)>,

    /// Slots were removed.
    /// Args: (first physical position, count)
    pub range_removed: Signal<(usize, usize)>,

    /// The provider went from empty to non-empty or back.
    /// Args: whether it is now empty
    pub empty_state_changed: Signal<bool>,

    // -------------------------------------------------------------------------
    // Click delegates
    // -------------------------------------------------------------------------
    /// A row was clicked outside checking mode.
    /// Args: logical index
    pub clicked: Signal<usize>,

    /// A row was long-clicked outside checking mode.
    /// Args: logical index
    pub long_clicked: Signal<usize>,

    /// A row's avatar was clicked while no session was active.
    /// Args: logical index
    pub avatar_clicked: Signal<usize>,

    /// A row's trailing button was clicked.
    /// Args: logical index
    pub button_clicked: Signal<usize>,

    // -------------------------------------------------------------------------
    // Checking
    // -------------------------------------------------------------------------
    /// An item's checkbox changed outside a click-suppressing session.
    pub checked_changed: Signal<(StableId, bool)>,

    /// A checking session started.
    /// Args: initial title
    pub session_started: Signal<String>,

    /// The session title changed after a selection change.
    pub session_title_changed: Signal<String>,

    /// The session ended, explicitly or because the selection became empty.
    pub session_finished: Signal<()>,

    /// An item was checked or unchecked inside a session.
    pub item_checked: Signal<(StableId, bool)>,
}

impl AdapterSignals {
    /// Create a signal set with nothing connected.
    pub fn new() -> Self {
        Self {
            full_refresh: Signal::new(),
            item_refresh: Signal::new(),
            header_refresh: Signal::new(),
            range_inserted: Signal::new(),
            range_removed: Signal::new(),
            empty_state_changed: Signal::new(),
            clicked: Signal::new(),
            long_clicked: Signal::new(),
            avatar_clicked: Signal::new(),
            button_clicked: Signal::new(),
            checked_changed: Signal::new(),
            session_started: Signal::new(),
            session_title_changed: Signal::new(),
            session_finished: Signal::new(),
            item_checked: Signal::new(),
        }
    }
}

impl Default for AdapterSignals {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for AdapterSignals {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdapterSignals").finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(AdapterSignals: Send, Sync);

//! The checking (multi-select) session state machine.
//!
//! ```text
//!            enter()                 toggle() leaves store empty
//! Inactive ----------> Active ------------------------------------> Inactive
//!                        |  exit()                                    ^
//!                        +--------------------------------------------+
//! ```
//!
//! The session does not own the [`SelectionStore`]; the engine passes it in
//! on every transition so the same store also serves programmatic checks
//! made outside a session. Each transition updates the session state before
//! returning, so anything the caller does afterwards (refresh requests,
//! signals) observes the post-transition value.

use lattice_lists_core::logging::targets;

use super::selection::{SelectionStore, StableId};
use crate::error::{AdapterError, AdapterResult};

/// Lifecycle state of a checking session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// No session. Clicks go to the caller's delegates.
    #[default]
    Inactive,
    /// A session is running and checkboxes are shown.
    Active,
}

/// Title shown while a session is active.
pub fn title_for(count: usize) -> String {
    format!("{count} item(s) selected")
}

/// What happened to the session after a membership change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// The session is still active; the title reflects the new count.
    Continued { title: String },
    /// The selection became empty and the session ended.
    Finished,
}

/// Result of applying a membership change inside an active session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionStep {
    /// The item whose membership was set.
    pub id: StableId,
    /// Its membership after the change.
    pub checked: bool,
    /// Whether membership actually changed.
    pub changed: bool,
    /// Whether the session continues.
    pub outcome: StepOutcome,
}

/// State of the multi-select interaction for one engine.
#[derive(Debug, Clone, Default)]
pub struct CheckingSession {
    state: SessionState,
    checkboxes_visible: bool,
}

impl CheckingSession {
    /// Create an inactive session with hidden checkboxes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    #[inline]
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Returns true while a session is running.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.state == SessionState::Active
    }

    /// Whether checkboxes are currently shown, by a session or manually.
    #[inline]
    pub fn checkboxes_visible(&self) -> bool {
        self.checkboxes_visible
    }

    /// Show or hide checkboxes without starting a session.
    ///
    /// Returns true if visibility changed.
    pub fn set_checkboxes_visible(&mut self, visible: bool) -> bool {
        let changed = self.checkboxes_visible != visible;
        self.checkboxes_visible = visible;
        changed
    }

    /// Start a session and return its initial title.
    ///
    /// The initial count comes from `store`, so selections made before entry
    /// are kept.
    ///
    /// # Errors
    ///
    /// [`AdapterError::AlreadyActive`] if checkboxes are already visible.
    pub fn enter(&mut self, store: &SelectionStore) -> AdapterResult<String> {
        if self.checkboxes_visible {
            tracing::warn!(
                target: targets::SESSION,
                state = ?self.state,
                "enter rejected: checkboxes already visible"
            );
            return Err(AdapterError::AlreadyActive);
        }

        self.state = SessionState::Active;
        self.checkboxes_visible = true;

        let title = title_for(store.len());
        tracing::debug!(target: targets::SESSION, count = store.len(), "checking session entered");
        Ok(title)
    }

    /// Flip membership of `id`.
    ///
    /// Returns `None` if no session is active. Ends the session when the
    /// store becomes empty.
    pub fn toggle(&mut self, store: &mut SelectionStore, id: StableId) -> Option<SessionStep> {
        let checked = !store.is_checked(id);
        self.set(store, id, checked)
    }

    /// Set membership of `id` explicitly.
    ///
    /// Returns `None` if no session is active. A call that does not change
    /// membership never ends the session.
    pub fn set(
        &mut self,
        store: &mut SelectionStore,
        id: StableId,
        checked: bool,
    ) -> Option<SessionStep> {
        if !self.is_active() {
            return None;
        }

        let changed = store.set_checked(id, checked);
        let outcome = if changed && store.is_empty() {
            self.finish(store);
            StepOutcome::Finished
        } else {
            StepOutcome::Continued {
                title: title_for(store.len()),
            }
        };

        tracing::trace!(target: targets::SESSION, %id, checked, changed, ?outcome, "session step");
        Some(SessionStep {
            id,
            checked,
            changed,
            outcome,
        })
    }

    /// End the session, clearing the store and hiding checkboxes.
    ///
    /// Returns true if a session was active.
    pub fn exit(&mut self, store: &mut SelectionStore) -> bool {
        if !self.is_active() {
            return false;
        }
        self.finish(store);
        true
    }

    fn finish(&mut self, store: &mut SelectionStore) {
        self.state = SessionState::Inactive;
        self.checkboxes_visible = false;
        let cleared = store.clear();
        tracing::debug!(target: targets::SESSION, cleared, "checking session finished");
    }
}

//! Dispatch-thread verification for adapters.
//!
//! An adapter is driven from one serialized dispatch context, normally the
//! host's UI thread. It does no locking beyond that assumption, so
//! [`DispatchAffinity`] records the dispatch thread and lets the adapter
//! check that each call arrives on it.
//!
//! Adapters use [`DispatchAffinity::debug_check`] on their entry points,
//! which compiles to nothing in release builds. Hosts that want the check
//! everywhere call [`DispatchAffinity::check`].
//!
//! # Example
//!
//! ```
//! use lattice_lists_core::DispatchAffinity;
//!
//! let affinity = DispatchAffinity::current();
//! assert!(affinity.is_dispatch_thread());
//!
//! let moved = std::thread::spawn(move || affinity.is_dispatch_thread())
//!     .join()
//!     .unwrap();
//! assert!(!moved);
//! ```

use std::thread::{self, ThreadId};

/// The dispatch thread an adapter is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchAffinity {
    dispatch_thread: ThreadId,
}

impl Default for DispatchAffinity {
    fn default() -> Self {
        Self::current()
    }
}

impl DispatchAffinity {
    /// Bind to the calling thread.
    #[inline]
    pub fn current() -> Self {
        Self {
            dispatch_thread: thread::current().id(),
        }
    }

    #[inline]
    pub fn dispatch_thread(&self) -> ThreadId {
        self.dispatch_thread
    }

    /// Returns true if the calling thread is the dispatch thread.
    #[inline]
    pub fn is_dispatch_thread(&self) -> bool {
        thread::current().id() == self.dispatch_thread
    }

    /// Move the binding to the calling thread.
    ///
    /// For hosts that build an adapter on a loader thread and then hand it
    /// to the UI thread.
    pub fn rebind(&mut self) {
        self.dispatch_thread = thread::current().id();
    }

    /// Panic unless called on the dispatch thread. Active in every build.
    ///
    /// # Panics
    ///
    /// Panics when called from any other thread.
    #[inline]
    pub fn check(&self) {
        if !self.is_dispatch_thread() {
            self.violation();
        }
    }

    /// [`check`](Self::check) in debug builds; a no-op in release builds.
    #[inline]
    pub fn debug_check(&self) {
        #[cfg(debug_assertions)]
        self.check();
    }

    #[cold]
    #[inline(never)]
    fn violation(&self) -> ! {
        let caller = thread::current();
        panic!(
            "adapter called off its dispatch thread: bound to {:?}, called from {:?} ({}); \
             marshal the call onto the dispatch thread or rebind() after handing the adapter over",
            self.dispatch_thread,
            caller.id(),
            caller.name().unwrap_or("<unnamed>"),
        )
    }
}

//! Logging facilities for Lattice Lists.
//!
//! Lattice Lists uses the `tracing` crate for instrumentation and never
//! installs a subscriber itself. To see logs, install one in your
//! application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("lattice_lists=debug")
//!         .init();
//!
//!     // Your application code...
//! }
//! ```
//!
//! Structural changes (header set, checking session entered or exited,
//! data-set changes) are logged at `debug`. Per-bind and per-click decisions
//! are logged at `trace`. Contract violations such as out-of-range positions
//! are logged at `warn` right before the error is returned.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Adapter engine target (classification, binding, clicks).
    pub const ENGINE: &str = "lattice_lists::engine";
    /// Checking session target (enter, toggle, exit).
    pub const SESSION: &str = "lattice_lists::session";
    /// Selection store target.
    pub const SELECTION: &str = "lattice_lists::selection";
    /// Configuration loading target.
    pub const CONFIG: &str = "lattice_lists::config";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "lattice_lists_core::signal";
    /// Performance span target.
    pub const PERF: &str = "lattice_lists::perf";
}

/// A guard that keeps a tracing span entered until dropped.
///
/// Useful for timing a bind pass over every visible slot.
///
/// ```
/// use lattice_lists_core::PerfSpan;
///
/// {
///     let _span = PerfSpan::new("bind_pass");
///     // ... bind visible slots ...
/// }
/// ```
#[derive(Debug)]
pub struct PerfSpan {
    _span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    ///
    /// The span will be active until the guard is dropped.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: "lattice_lists::perf", "perf", operation = name);
        Self {
            _span: span.entered(),
        }
    }
}

//! Core systems for Lattice Lists.
//!
//! This crate provides the plumbing shared by the list adapters:
//!
//! - **Signal/Slot System**: Type-safe notifications from an adapter to its host
//! - **Dispatch Affinity**: Checks that adapter calls stay on one serialized thread
//! - **Colors**: The value type used for divider and accent colors
//! - **Logging**: Tracing targets and a timing span guard
//!
//! # Signal/Slot Example
//!
//! ```
//! use lattice_lists_core::Signal;
//!
//! // A signal carrying the physical position that needs a redraw
//! let item_refresh = Signal::<usize>::new();
//!
//! let conn_id = item_refresh.connect(|position| {
//!     println!("redraw slot {}", position);
//! });
//!
//! item_refresh.emit(3);
//! item_refresh.disconnect(conn_id);
//! ```
//!
//! # Affinity Example
//!
//! ```
//! use lattice_lists_core::DispatchAffinity;
//!
//! let affinity = DispatchAffinity::current();
//! affinity.debug_check();
//! ```

pub mod affinity;
mod color;
pub mod logging;
pub mod signal;

pub use affinity::DispatchAffinity;
pub use color::{Color, ParseColorError};
pub use logging::PerfSpan;
pub use signal::{ConnectionId, Signal};

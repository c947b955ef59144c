//! The list/grid adapter.
//!
//! # Core Types
//!
//! - [`AdapterEngine`]: classifies, binds and handles gestures for one list or grid
//! - [`DataProvider`]: the caller's items, seen through a narrow capability trait
//! - [`SlotKind`] / [`ItemTypeRegistry`]: the closed set of slot kinds and their controls
//! - [`PositionMapper`]: logical index <-> physical position, accounting for the header
//! - [`DividerPolicy`]: which rows draw a divider
//! - [`SelectionStore`] / [`CheckingSession`]: identity-based multi-select
//! - [`GridLayout`]: span sizes and spacing when the adapter drives a grid
//!
//! # Data Flow
//!
//! ```text
//!  host ──classify(P)──> engine ──to_logical──> PositionMapper
//!                          │
//!                          ├──slot_kind_at(L)──> DataProvider
//!                          ├──should_draw(P)───> DividerPolicy
//!                          └──is_checked(id)───> SelectionStore
//!
//!  engine ──full_refresh / item_refresh / header_refresh──> host
//! ```

mod checking;
mod divider;
mod engine;
mod grid;
mod position;
mod provider;
mod selection;
mod signals;
mod slot_kind;

#[cfg(test)]
mod tests;

pub use checking::{CheckingSession, SessionState, SessionStep, StepOutcome, title_for};
pub use divider::{DIVIDER_INSET_DP, DividerBinding, DividerPolicy, DividerStyle};
pub use engine::{AdapterEngine, BindInstructions, CheckboxBinding, ClickOutcome};
pub use grid::{DetailsType, GridItemSpecs, GridLayout, GridSpacing, Insets};
pub use position::{PositionMapper, SlotPosition};
pub use provider::{DataProvider, HeaderHandle, SlotControls};
pub use selection::{SelectionStore, StableId};
pub use signals::AdapterSignals;
pub use slot_kind::{DividerRole, ItemTypeRegistry, KindTraits, Region, ResourceHandle, SlotKind};

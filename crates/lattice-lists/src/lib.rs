//! Lattice Lists - a recyclable list and grid adapter engine.
//!
//! The engine decides, for every physical position a recycling host asks
//! about, what kind of slot goes there, which logical item it shows, whether
//! a divider is drawn beneath it, and how a persistent multi-select
//! ("checking") mode overlays ordinary click handling. Drawing is left to the
//! host; item data is left to the caller's [`DataProvider`].
//!
//! # Example
//!
//! ```
//! use lattice_lists::{
//!     AdapterConfig, AdapterEngine, DataProvider, DividerStyle, SlotControls, SlotKind,
//! };
//!
//! struct Inbox {
//!     subjects: Vec<String>,
//! }
//!
//! impl DataProvider for Inbox {
//!     type Slot = Vec<String>;
//!
//!     fn item_count(&self) -> usize {
//!         self.subjects.len()
//!     }
//!
//!     fn slot_kind_at(&self, _logical: usize) -> SlotKind {
//!         SlotKind::TwoTextsAvatar
//!     }
//!
//!     fn bind_content(&self, logical: usize, _controls: &SlotControls, slot: &mut Vec<String>) {
//!         *slot = vec![self.subjects[logical].clone(), String::from("preview")];
//!     }
//! }
//!
//! let inbox = Inbox { subjects: vec!["Hello".into(), "Invoice".into()] };
//! let mut engine = AdapterEngine::new(inbox)
//!     .with_config(AdapterConfig::new().with_divider_style(DividerStyle::AllItems));
//!
//! engine.signals().session_title_changed.connect(|title| println!("{title}"));
//!
//! engine.enter().unwrap();
//! engine.handle_click(0).unwrap();
//! assert!(engine.is_checked(0).unwrap());
//! ```

pub mod adapter;
pub mod config;
pub mod error;

pub use adapter::{
    AdapterEngine, AdapterSignals, BindInstructions, CheckboxBinding, CheckingSession,
    ClickOutcome, DataProvider, DetailsType, DividerBinding, DividerPolicy, DividerStyle,
    GridItemSpecs, GridLayout, GridSpacing, HeaderHandle, Insets, ItemTypeRegistry,
    PositionMapper, Region, SelectionStore, SessionState, SlotControls, SlotKind, SlotPosition,
    StableId,
};
pub use config::{AdapterConfig, SubHeaderStyle};
pub use error::{AdapterError, AdapterResult, ConfigError, ConfigResult};

pub use lattice_lists_core::{Color, ConnectionId, DispatchAffinity, Signal};

//! Divider placement.
//!
//! Whether a row draws a separator beneath it depends on the adapter's
//! [`DividerStyle`], the row's physical position, and the kinds of the row
//! and of the row that follows it. Everything is computed on physical
//! positions and recomputed on every bind; nothing is cached across
//! structural changes.

use lattice_lists_core::Color;
use serde::{Deserialize, Serialize};

use super::slot_kind::{DividerRole, SlotKind};

/// Leading inset applied to dividers when the adapter uses inset dividers,
/// in density-independent pixels. Aligns the divider with the text keyline
/// of rows that have a leading image.
pub const DIVIDER_INSET_DP: f32 = 72.0;

/// Which rows draw a divider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DividerStyle {
    /// No row draws a divider.
    #[default]
    None,
    /// Every divider-bearing row except the last one.
    AllItems,
    /// Only rows immediately followed by a sub-header.
    JustSubHeaderPredecessors,
}

/// Divider instructions for one bound slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DividerBinding {
    /// Whether the divider is drawn.
    pub visible: bool,
    /// Color to paint; transparent when not visible.
    pub color: Color,
    /// Leading inset in dp (0 or [`DIVIDER_INSET_DP`]).
    pub leading_inset: f32,
}

impl DividerBinding {
    /// A divider that is not drawn.
    pub const HIDDEN: Self = Self {
        visible: false,
        color: Color::TRANSPARENT,
        leading_inset: 0.0,
    };
}

/// Stateless divider decision logic.
#[derive(Debug, Clone, Copy, Default)]
pub struct DividerPolicy;

impl DividerPolicy {
    /// Decide whether the row at `physical` draws a divider.
    ///
    /// `kind_at` classifies any physical position below `total`. It is only
    /// consulted for `physical` and `physical + 1`.
    pub fn should_draw<F>(physical: usize, style: DividerStyle, kind_at: F, total: usize) -> bool
    where
        F: Fn(usize) -> SlotKind,
    {
        if style == DividerStyle::None || physical >= total {
            return false;
        }

        let kind = kind_at(physical);
        if kind == SlotKind::Header || kind.traits().divider_role == DividerRole::Excluded {
            return false;
        }

        let is_last = physical + 1 == total;

        match style {
            DividerStyle::None => false,
            DividerStyle::AllItems => {
                !is_last && kind.traits().divider_role == DividerRole::Bearing
            }
            DividerStyle::JustSubHeaderPredecessors => {
                !is_last && kind_at(physical + 1) == SlotKind::SubHeader
            }
        }
    }

    /// Produce the full divider instructions for a row.
    pub fn binding<F>(
        physical: usize,
        style: DividerStyle,
        color: Color,
        inset: bool,
        kind_at: F,
        total: usize,
    ) -> DividerBinding
    where
        F: Fn(usize) -> SlotKind,
    {
        if !Self::should_draw(physical, style, kind_at, total) {
            return DividerBinding::HIDDEN;
        }
        DividerBinding {
            visible: true,
            color,
            leading_inset: if inset { DIVIDER_INSET_DP } else { 0.0 },
        }
    }
}

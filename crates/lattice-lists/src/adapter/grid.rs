//! Grid layout collaborator.
//!
//! A grid adapter is the same engine with a [`GridLayout`] attached. The
//! layout answers the questions a grid host asks in addition to the list
//! ones: how many columns a slot spans and how much spacing surrounds it.
//! Grid cells never draw dividers and sub-headers are never accented.

use super::provider::SlotControls;
use super::slot_kind::SlotKind;

/// Spacing between grid cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GridSpacing {
    /// 1 dp on every side.
    #[default]
    Small,
    /// 4 dp on every side.
    Large,
}

impl GridSpacing {
    /// Spacing in density-independent pixels.
    pub const fn dp(self) -> f32 {
        match self {
            GridSpacing::Small => 1.0,
            GridSpacing::Large => 4.0,
        }
    }
}

/// How much text a grid cell shows next to its image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailsType {
    /// Image only.
    #[default]
    None,
    /// One line of text and a button.
    SingleLine,
    /// Two lines of text and a button.
    TwoLines,
}

impl DetailsType {
    /// Number of text lines in the details area.
    pub const fn text_fields(self) -> u8 {
        match self {
            DetailsType::None => 0,
            DetailsType::SingleLine => 1,
            DetailsType::TwoLines => 2,
        }
    }
}

/// Presentation hints for grid cells. Passed through to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridItemSpecs {
    /// Details are placed above the image instead of below it.
    pub details_on_top: bool,
    /// Details float over the image instead of sitting beside it.
    pub details_float: bool,
    /// Details use a dark background regardless of theme.
    pub force_dark: bool,
    /// The image is forced to a square aspect ratio.
    pub square_image: bool,
}

impl Default for GridItemSpecs {
    fn default() -> Self {
        Self {
            details_on_top: false,
            details_float: false,
            force_dark: false,
            square_image: true,
        }
    }
}

/// Edge offsets around a slot, in dp.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Insets {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Insets {
    /// No offsets.
    pub const ZERO: Self = Self::uniform(0.0);

    /// The same offset on every side.
    pub const fn uniform(value: f32) -> Self {
        Self {
            left: value,
            top: value,
            right: value,
            bottom: value,
        }
    }
}

/// Column and spacing configuration for a grid adapter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    columns: usize,
    spacing: GridSpacing,
    details: DetailsType,
    specs: GridItemSpecs,
}

impl GridLayout {
    /// Create a layout with `columns` columns. Zero is treated as one.
    pub fn new(columns: usize) -> Self {
        Self {
            columns: columns.max(1),
            spacing: GridSpacing::default(),
            details: DetailsType::default(),
            specs: GridItemSpecs::default(),
        }
    }

    /// Set the cell spacing.
    pub fn with_spacing(mut self, spacing: GridSpacing) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set the details shown in each cell.
    pub fn with_details(mut self, details: DetailsType) -> Self {
        self.details = details;
        self
    }

    /// Set the cell presentation hints.
    pub fn with_specs(mut self, specs: GridItemSpecs) -> Self {
        self.specs = specs;
        self
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn spacing(&self) -> GridSpacing {
        self.spacing
    }

    pub fn details(&self) -> DetailsType {
        self.details
    }

    pub fn specs(&self) -> GridItemSpecs {
        self.specs
    }

    /// Columns spanned by a slot of `kind`.
    ///
    /// Grid cells take one column; everything else takes the full row.
    pub fn span_size(&self, kind: SlotKind) -> usize {
        if kind == SlotKind::GridItem {
            1
        } else {
            self.columns
        }
    }

    /// Spacing around a slot of `kind`. Sub-headers get none.
    pub fn item_offsets(&self, kind: SlotKind) -> Insets {
        if kind.is_sub_header() {
            Insets::ZERO
        } else {
            Insets::uniform(self.spacing.dp())
        }
    }

    /// Controls for a slot of `kind`, with grid cells shaped by the details type.
    pub fn controls_for(&self, kind: SlotKind) -> SlotControls {
        let mut controls = SlotControls::for_kind(kind);
        if kind == SlotKind::GridItem {
            controls.text_fields = self.details.text_fields();
            controls.has_button = self.details != DetailsType::None;
        }
        controls
    }
}

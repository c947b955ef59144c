//! Slot kinds and the item type registry.
//!
//! A [`SlotKind`] says what a slot at some position contains: how many text
//! lines, whether it has a leading image (avatar or icon), a trailing button,
//! or whether it is a sub-header or the injected header. Data providers
//! report one kind per logical item; the engine reports [`SlotKind::Header`]
//! for the header slot.
//!
//! [`ItemTypeRegistry`] is the constant table describing each kind: which
//! controls it has, which region a checkbox replaces in checking mode, and
//! what role it plays in divider placement. Hosts use
//! [`SlotKind::resource_handle`] to key their view recycling pools.

/// The closed set of slot kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotKind {
    /// One line of text.
    SingleText,
    /// Two lines of text.
    TwoTexts,
    /// One line of text with a leading icon.
    OneTextIcon,
    /// Two lines of text with a leading icon.
    TwoTextsIcon,
    /// One line of text with a leading avatar.
    OneTextAvatar,
    /// Two lines of text with a leading avatar.
    TwoTextsAvatar,
    /// One line of text with a leading avatar and a trailing button.
    OneTextAvatarButton,
    /// Two lines of text with a leading avatar and a trailing button.
    TwoTextsAvatarButton,
    /// A grid cell (image plus optional details).
    GridItem,
    /// A section title spanning the whole row.
    SubHeader,
    /// The injected header slot. Never reported by a data provider.
    Header,
}

impl SlotKind {
    /// Every kind, in registry order.
    pub const ALL: [SlotKind; 11] = [
        SlotKind::SingleText,
        SlotKind::TwoTexts,
        SlotKind::OneTextIcon,
        SlotKind::TwoTextsIcon,
        SlotKind::OneTextAvatar,
        SlotKind::TwoTextsAvatar,
        SlotKind::OneTextAvatarButton,
        SlotKind::TwoTextsAvatarButton,
        SlotKind::GridItem,
        SlotKind::SubHeader,
        SlotKind::Header,
    ];

    /// The registry entry for this kind.
    #[inline]
    pub fn traits(self) -> &'static KindTraits {
        ItemTypeRegistry::lookup(self)
    }

    /// The opaque handle hosts use to pick a recycling pool for this kind.
    #[inline]
    pub fn resource_handle(self) -> ResourceHandle {
        self.traits().resource
    }

    /// Region a checkbox is layered beneath, if this kind can show one.
    #[inline]
    pub fn checkbox_region(self) -> Option<Region> {
        self.traits().checkbox_region
    }

    /// Returns true if the kind can show a checkbox in checking mode.
    #[inline]
    pub fn is_checkable(self) -> bool {
        self.checkbox_region().is_some()
    }

    /// Returns true if the slot binds the single-text sub-header layout.
    #[inline]
    pub fn is_sub_header(self) -> bool {
        self.traits().sub_header_layout
    }
}

/// An optional region of a slot that a checkbox can replace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// The leading image: an avatar or an icon.
    Image,
    /// The trailing image button.
    Button,
}

/// How a kind participates in divider placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DividerRole {
    /// Rows of this kind may draw a divider beneath them.
    Bearing,
    /// Rows of this kind never draw a divider but cause the row above them
    /// to draw one under the sub-header-predecessor style.
    Anchor,
    /// Rows of this kind never draw a divider.
    Excluded,
}

/// Opaque per-kind handle used to select a recycling pool.
///
/// Distinct kinds always have distinct handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceHandle(u32);

impl ResourceHandle {
    /// The raw handle value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// Registry entry describing one slot kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindTraits {
    /// The kind this entry describes.
    pub kind: SlotKind,
    /// Recycling pool handle.
    pub resource: ResourceHandle,
    /// The slot is a single sub-header text instead of the full content layout.
    pub sub_header_layout: bool,
    /// Number of text lines in the content layout.
    pub text_fields: u8,
    /// A leading image (avatar or icon) is present.
    pub has_image: bool,
    /// A trailing button is present.
    pub has_button: bool,
    /// Region a checkbox is layered beneath in checking mode.
    pub checkbox_region: Option<Region>,
    /// Role in divider placement.
    pub divider_role: DividerRole,
}

const fn entry(
    kind: SlotKind,
    resource: u32,
    text_fields: u8,
    has_image: bool,
    has_button: bool,
    checkbox_region: Option<Region>,
    divider_role: DividerRole,
) -> KindTraits {
    KindTraits {
        kind,
        resource: ResourceHandle(resource),
        sub_header_layout: matches!(kind, SlotKind::SubHeader),
        text_fields,
        has_image,
        has_button,
        checkbox_region,
        divider_role,
    }
}

/// Constant table of [`KindTraits`], keyed by [`SlotKind`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ItemTypeRegistry;

impl ItemTypeRegistry {
    const ENTRIES: [KindTraits; 11] = [
        entry(SlotKind::SingleText, 0x100, 1, false, false, None, DividerRole::Bearing),
        entry(SlotKind::TwoTexts, 0x101, 2, false, false, None, DividerRole::Bearing),
        entry(
            SlotKind::OneTextIcon,
            0x102,
            1,
            true,
            false,
            Some(Region::Image),
            DividerRole::Bearing,
        ),
        entry(
            SlotKind::TwoTextsIcon,
            0x103,
            2,
            true,
            false,
            Some(Region::Image),
            DividerRole::Bearing,
        ),
        entry(
            SlotKind::OneTextAvatar,
            0x104,
            1,
            true,
            false,
            Some(Region::Image),
            DividerRole::Bearing,
        ),
        entry(
            SlotKind::TwoTextsAvatar,
            0x105,
            2,
            true,
            false,
            Some(Region::Image),
            DividerRole::Bearing,
        ),
        entry(
            SlotKind::OneTextAvatarButton,
            0x106,
            1,
            true,
            true,
            Some(Region::Button),
            DividerRole::Bearing,
        ),
        entry(
            SlotKind::TwoTextsAvatarButton,
            0x107,
            2,
            true,
            true,
            Some(Region::Button),
            DividerRole::Bearing,
        ),
        entry(SlotKind::GridItem, 0x200, 0, true, false, None, DividerRole::Excluded),
        entry(SlotKind::SubHeader, 0x001, 1, false, false, None, DividerRole::Anchor),
        entry(SlotKind::Header, 0x000, 0, false, false, None, DividerRole::Excluded),
    ];

    /// Look up the entry for a kind.
    pub fn lookup(kind: SlotKind) -> &'static KindTraits {
        // ENTRIES is laid out in the same order as SlotKind::ALL.
        &Self::ENTRIES[kind as usize]
    }

    /// Reverse lookup from a recycling pool handle.
    pub fn by_resource(handle: ResourceHandle) -> Option<SlotKind> {
        Self::ENTRIES
            .iter()
            .find(|entry| entry.resource == handle)
            .map(|entry| entry.kind)
    }

    /// Iterate over every entry.
    pub fn entries() -> impl Iterator<Item = &'static KindTraits> {
        Self::ENTRIES.iter()
    }
}

//! The data provider capability and the values exchanged with it.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use super::selection::StableId;
use super::slot_kind::SlotKind;

/// Caller-supplied access to the items an adapter displays.
///
/// The engine never owns or inspects item data. It asks the provider how
/// many items there are, what kind each one is, and delegates the actual
/// content binding back to it.
///
/// # Example
///
/// ```
/// use lattice_lists::{DataProvider, SlotControls, SlotKind};
///
/// struct Contacts {
///     names: Vec<String>,
/// }
///
/// impl DataProvider for Contacts {
///     type Slot = Vec<String>;
///
///     fn item_count(&self) -> usize {
///         self.names.len()
///     }
///
///     fn slot_kind_at(&self, _logical: usize) -> SlotKind {
///         SlotKind::OneTextAvatar
///     }
///
///     fn bind_content(&self, logical: usize, _controls: &SlotControls, slot: &mut Vec<String>) {
///         slot.clear();
///         slot.push(self.names[logical].clone());
///     }
/// }
/// ```
pub trait DataProvider {
    /// The host's representation of a recycled slot, handed through to
    /// [`bind_content`](Self::bind_content) untouched.
    type Slot: ?Sized;

    /// Number of logical items. Never includes the header.
    fn item_count(&self) -> usize;

    /// Kind of the item at `logical`.
    ///
    /// Must not return [`SlotKind::Header`]; that kind is reserved for the
    /// injected header slot.
    fn slot_kind_at(&self, logical: usize) -> SlotKind;

    /// Text of the sub-header at `logical`.
    ///
    /// Only called for items classified as [`SlotKind::SubHeader`].
    fn sub_header_text_at(&self, logical: usize) -> String {
        let _ = logical;
        String::new()
    }

    /// Stable identity of the item at `logical`.
    ///
    /// Providers whose items can move must override this so checked state
    /// follows the item instead of the position.
    fn stable_id_at(&self, logical: usize) -> StableId {
        StableId::from_index(logical)
    }

    /// Whether the item at `logical` shows a checkbox in checking mode.
    ///
    /// Only consulted for kinds that have a checkbox region.
    fn show_checkbox_on_item(&self, logical: usize) -> bool {
        let _ = logical;
        true
    }

    /// Bind domain content (texts, image, button) into `slot`.
    ///
    /// `controls` says which controls the slot has.
    fn bind_content(&self, logical: usize, controls: &SlotControls, slot: &mut Self::Slot);
}

/// The controls present in a content slot, as reported to the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotControls {
    /// Kind being bound.
    pub kind: SlotKind,
    /// Number of text lines.
    pub text_fields: u8,
    /// A leading image (avatar, icon, or grid image) is present.
    pub has_image: bool,
    /// A trailing button is present.
    pub has_button: bool,
}

impl SlotControls {
    /// Controls as declared by the registry.
    pub fn for_kind(kind: SlotKind) -> Self {
        let traits = kind.traits();
        Self {
            kind,
            text_fields: traits.text_fields,
            has_image: traits.has_image,
            has_button: traits.has_button,
        }
    }
}

/// Opaque handle to the header content.
///
/// The engine only tracks whether a header is present and hands this handle
/// back to the host when the header slot is bound. Cloning is cheap.
#[derive(Clone)]
pub struct HeaderHandle(Arc<dyn Any + Send + Sync>);

impl HeaderHandle {
    /// Wrap arbitrary header content.
    pub fn new<T: Any + Send + Sync>(content: T) -> Self {
        Self(Arc::new(content))
    }

    /// Borrow the content as `T`, if that is its type.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }

    /// Returns true if both handles refer to the same content.
    pub fn ptr_eq(&self, other: &HeaderHandle) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for HeaderHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("HeaderHandle").finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(HeaderHandle: Send, Sync, Clone);
static_assertions::assert_impl_all!(SlotControls: Send, Sync, Copy);

//! The adapter engine.
//!
//! [`AdapterEngine`] sits between a recycling host and a [`DataProvider`].
//! The host asks it what kind of slot lives at a physical position, asks it
//! to bind a slot, and forwards user gestures to it. The engine answers with
//! [`BindInstructions`] and [`ClickOutcome`] values and requests refreshes
//! through [`AdapterSignals`].
//!
//! All calls must come from one serialized dispatch thread. Debug builds
//! assert this on every call.

use lattice_lists_core::logging::targets;
use lattice_lists_core::{Color, DispatchAffinity, PerfSpan};

use super::checking::{CheckingSession, SessionState, StepOutcome, title_for};
use super::divider::{DividerBinding, DividerPolicy, DividerStyle};
use super::grid::{GridLayout, Insets};
use super::position::{PositionMapper, SlotPosition};
use super::provider::{DataProvider, HeaderHandle, SlotControls};
use super::selection::{SelectionStore, StableId};
use super::signals::AdapterSignals;
use super::slot_kind::{Region, SlotKind};
use crate::config::{AdapterConfig, SubHeaderStyle};
use crate::error::{AdapterError, AdapterResult};

/// Checkbox state for a bound content slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckboxBinding {
    /// Region the checkbox is layered beneath, if the slot has one.
    pub region: Option<Region>,
    /// The checkbox is shown and `region` is hidden.
    pub visible: bool,
    /// Checked state to display.
    pub checked: bool,
}

impl CheckboxBinding {
    /// No checkbox is shown.
    pub const HIDDEN: Self = Self {
        region: None,
        visible: false,
        checked: false,
    };

    /// Whether the region beneath the checkbox should be hidden.
    #[inline]
    pub fn hides_region(&self) -> bool {
        self.visible && self.region.is_some()
    }
}

/// What the host should do with a slot it just bound.
#[derive(Debug, Clone)]
pub enum BindInstructions {
    /// Attach the header content.
    Header(HeaderHandle),
    /// Show a sub-header row.
    SubHeader {
        text: String,
        style: SubHeaderStyle,
        divider: DividerBinding,
    },
    /// A content row; the provider has already bound its content.
    Item {
        kind: SlotKind,
        controls: SlotControls,
        divider: DividerBinding,
        checkbox: CheckboxBinding,
    },
}

/// What a gesture resulted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Forwarded to a click delegate with this logical index.
    Delegated(usize),
    /// The item's checked state was set.
    Toggled { id: StableId, checked: bool },
    /// Nothing happened.
    Ignored,
}

/// Orchestrates slot classification, binding, dividers and checking for one
/// list or grid.
///
/// # Example
///
/// ```
/// use lattice_lists::{AdapterEngine, DataProvider, SlotControls, SlotKind};
///
/// struct Rows(Vec<&'static str>);
///
/// impl DataProvider for Rows {
///     type Slot = String;
///
///     fn item_count(&self) -> usize {
///         self.0.len()
///     }
///
///     fn slot_kind_at(&self, _logical: usize) -> SlotKind {
///         SlotKind::SingleText
///     }
///
///     fn bind_content(&self, logical: usize, _controls: &SlotControls, slot: &mut String) {
///         *slot = self.0[logical].to_string();
///     }
/// }
///
/// let engine = AdapterEngine::new(Rows(vec!["one", "two"]));
/// let mut slot = String::new();
/// engine.bind(1, &mut slot).unwrap();
/// assert_eq!(slot, "two");
/// ```
pub struct AdapterEngine<P: DataProvider> {
    provider: P,
    header: Option<HeaderHandle>,
    config: AdapterConfig,
    grid: Option<GridLayout>,
    selection: SelectionStore,
    session: CheckingSession,
    was_empty: bool,
    affinity: DispatchAffinity,
    signals: AdapterSignals,
}

impl<P: DataProvider> AdapterEngine<P> {
    /// Create an engine over `provider` with the default configuration.
    pub fn new(provider: P) -> Self {
        let was_empty = provider.item_count() == 0;
        Self {
            provider,
            header: None,
            config: AdapterConfig::default(),
            grid: None,
            selection: SelectionStore::new(),
            session: CheckingSession::new(),
            was_empty,
            affinity: DispatchAffinity::current(),
            signals: AdapterSignals::new(),
        }
    }

    /// Use `config` instead of the default configuration.
    pub fn with_config(mut self, config: AdapterConfig) -> Self {
        self.config = config;
        self
    }

    /// Lay slots out as a grid.
    pub fn with_grid(mut self, grid: GridLayout) -> Self {
        self.grid = Some(grid);
        self
    }

    /// Start with a header injected at physical position 0.
    pub fn with_header(mut self, header: HeaderHandle) -> Self {
        self.header = Some(header);
        self
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Mutable access to the provider.
    ///
    /// Call one of the `notify_*` methods after changing its items.
    pub fn provider_mut(&mut self) -> &mut P {
        self.affinity.debug_check();
        &mut self.provider
    }

    pub fn signals(&self) -> &AdapterSignals {
        &self.signals
    }

    pub fn config(&self) -> &AdapterConfig {
        &self.config
    }

    pub fn grid(&self) -> Option<&GridLayout> {
        self.grid.as_ref()
    }

    pub fn header(&self) -> Option<&HeaderHandle> {
        self.header.as_ref()
    }

    pub fn has_header(&self) -> bool {
        self.header.is_some()
    }

    /// The mapper for the current header presence.
    pub fn position_mapper(&self) -> PositionMapper {
        PositionMapper::new(self.header.is_some())
    }

    /// Number of physical positions, including the header.
    pub fn physical_count(&self) -> usize {
        self.position_mapper().physical_count(self.provider.item_count())
    }

    pub fn selection(&self) -> &SelectionStore {
        &self.selection
    }

    pub fn session_state(&self) -> SessionState {
        self.session.state()
    }

    /// Returns true while a checking session is running.
    pub fn is_checking(&self) -> bool {
        self.session.is_active()
    }

    pub fn checkboxes_visible(&self) -> bool {
        self.session.checkboxes_visible()
    }

    /// The current session title, if a session is running.
    pub fn session_title(&self) -> Option<String> {
        self.session
            .is_active()
            .then(|| title_for(self.selection.len()))
    }

    /// Bind the engine to the calling thread.
    ///
    /// For hosts that construct the engine on one thread and dispatch on
    /// another.
    pub fn rebind_thread(&mut self) {
        self.affinity.rebind();
    }

    // -------------------------------------------------------------------------
    // Configuration
    // -------------------------------------------------------------------------

    /// Replace the whole configuration and request a full refresh.
    pub fn set_config(&mut self, config: AdapterConfig) {
        self.affinity.debug_check();
        tracing::debug!(target: targets::ENGINE, ?config, "config replaced");
        self.config = config;
        self.signals.full_refresh.emit(());
    }

    /// Takes effect on the next bind pass.
    pub fn set_divider_style(&mut self, style: DividerStyle) {
        self.affinity.debug_check();
        self.config.divider_style = style;
    }

    /// Takes effect on the next bind pass.
    pub fn set_divider_color(&mut self, color: Color) {
        self.affinity.debug_check();
        self.config.divider_color = color;
    }

    /// Takes effect on the next bind pass.
    pub fn set_divider_inset(&mut self, inset: bool) {
        self.affinity.debug_check();
        self.config.divider_inset = inset;
    }

    pub fn set_suppress_clicks_while_checking(&mut self, suppress: bool) {
        self.affinity.debug_check();
        self.config.suppress_clicks_while_checking = suppress;
    }

    /// Takes effect on the next bind pass.
    pub fn set_sub_header_style(&mut self, style: SubHeaderStyle) {
        self.affinity.debug_check();
        self.config.sub_header = style;
    }

    /// Inject, replace, or remove the header.
    ///
    /// Adding or removing a header changes the physical count by one, so a
    /// full refresh is requested. Replacing one header with another only
    /// requests a header refresh.
    pub fn set_header(&mut self, header: Option<HeaderHandle>) {
        self.affinity.debug_check();
        let had_header = self.header.is_some();
        let has_header = header.is_some();
        self.header = header;

        if had_header == has_header {
            if has_header {
                tracing::debug!(target: targets::ENGINE, "header replaced");
                self.signals.header_refresh.emit(());
            }
            return;
        }

        tracing::debug!(
            target: targets::ENGINE,
            has_header,
            physical_count = self.physical_count(),
            "header presence changed"
        );
        self.signals.full_refresh.emit(());
    }

    // -------------------------------------------------------------------------
    // Classification and binding
    // -------------------------------------------------------------------------

    /// Resolve a physical position, logging contract violations.
    pub fn resolve(&self, physical: usize) -> AdapterResult<SlotPosition> {
        self.position_mapper()
            .to_logical(physical, self.provider.item_count())
            .inspect_err(|err| {
                tracing::warn!(target: targets::ENGINE, physical, %err, "position out of range");
            })
    }

    /// Kind of the slot at `physical`.
    ///
    /// # Errors
    ///
    /// [`AdapterError::PositionOutOfRange`] if `physical` is not below
    /// [`physical_count`](Self::physical_count).
    pub fn classify(&self, physical: usize) -> AdapterResult<SlotKind> {
        Ok(match self.resolve(physical)? {
            SlotPosition::Header => SlotKind::Header,
            SlotPosition::Item(logical) => self.provider.slot_kind_at(logical),
        })
    }

    /// Stable id of the slot at `physical`; [`StableId::HEADER`] for the header.
    pub fn item_id(&self, physical: usize) -> AdapterResult<StableId> {
        Ok(match self.resolve(physical)? {
            SlotPosition::Header => StableId::HEADER,
            SlotPosition::Item(logical) => self.provider.stable_id_at(logical),
        })
    }

    /// Whether the row at `physical` draws a divider under the current style.
    pub fn should_draw_divider(&self, physical: usize) -> AdapterResult<bool> {
        self.resolve(physical)?;
        Ok(self.divider_for(physical).visible)
    }

    /// Bind the slot at `physical`.
    ///
    /// Content rows are handed to [`DataProvider::bind_content`] before the
    /// instructions are returned. Header and sub-header rows never reach the
    /// provider's bind callback.
    #[tracing::instrument(skip(self, slot), target = "lattice_lists::engine", level = "trace")]
    pub fn bind(&self, physical: usize, slot: &mut P::Slot) -> AdapterResult<BindInstructions> {
        self.affinity.debug_check();

        let logical = match self.resolve(physical)? {
            SlotPosition::Item(logical) => logical,
            SlotPosition::Header => {
                let Some(header) = &self.header else {
                    return Err(AdapterError::PositionOutOfRange {
                        position: physical,
                        count: self.physical_count(),
                    });
                };
                return Ok(BindInstructions::Header(header.clone()));
            }
        };

        let kind = self.provider.slot_kind_at(logical);
        let divider = self.divider_for(physical);

        if kind.is_sub_header() {
            let mut style = self.config.sub_header;
            if self.grid.is_some() {
                style.accent_text = false;
            }
            return Ok(BindInstructions::SubHeader {
                text: self.provider.sub_header_text_at(logical),
                style,
                divider,
            });
        }

        let controls = match &self.grid {
            Some(grid) => grid.controls_for(kind),
            None => SlotControls::for_kind(kind),
        };
        self.provider.bind_content(logical, &controls, slot);

        let checkbox = self.checkbox_for(logical, kind);
        tracing::trace!(
            target: targets::ENGINE,
            logical,
            ?kind,
            divider = divider.visible,
            checkbox = checkbox.visible,
            "bound"
        );

        Ok(BindInstructions::Item {
            kind,
            controls,
            divider,
            checkbox,
        })
    }

    /// Bind several slots in one pass, such as every visible slot after a
    /// full refresh. Stops at the first error.
    pub fn bind_visible<'s, I>(&self, slots: I) -> AdapterResult<Vec<BindInstructions>>
    where
        I: IntoIterator<Item = (usize, &'s mut P::Slot)>,
        P::Slot: 's,
    {
        let _span = PerfSpan::new("bind_visible");
        slots
            .into_iter()
            .map(|(physical, slot)| self.bind(physical, slot))
            .collect()
    }

    fn divider_for(&self, physical: usize) -> DividerBinding {
        if self.grid.is_some() {
            return DividerBinding::HIDDEN;
        }
        DividerPolicy::binding(
            physical,
            self.config.divider_style,
            self.config.divider_color,
            self.config.divider_inset,
            |p| self.classify(p).unwrap_or(SlotKind::Header),
            self.physical_count(),
        )
    }

    fn checkbox_region(&self, logical: usize, kind: SlotKind) -> Option<Region> {
        kind.checkbox_region()
            .filter(|_| self.provider.show_checkbox_on_item(logical))
    }

    fn checkbox_for(&self, logical: usize, kind: SlotKind) -> CheckboxBinding {
        let Some(region) = self.checkbox_region(logical, kind) else {
            return CheckboxBinding::HIDDEN;
        };
        let visible = self.session.checkboxes_visible();
        CheckboxBinding {
            region: Some(region),
            visible,
            checked: visible && self.selection.is_checked(self.provider.stable_id_at(logical)),
        }
    }

    // -------------------------------------------------------------------------
    // Grid
    // -------------------------------------------------------------------------

    /// Columns spanned by the slot at `physical`. Always 1 for lists.
    pub fn span_size(&self, physical: usize) -> AdapterResult<usize> {
        let kind = self.classify(physical)?;
        Ok(self.grid.map_or(1, |grid| grid.span_size(kind)))
    }

    /// Spacing around the slot at `physical`. Always zero for lists.
    pub fn item_offsets(&self, physical: usize) -> AdapterResult<Insets> {
        let kind = self.classify(physical)?;
        Ok(self.grid.map_or(Insets::ZERO, |grid| grid.item_offsets(kind)))
    }

    // -------------------------------------------------------------------------
    // Gestures
    // -------------------------------------------------------------------------

    /// Handle a click on the row at `physical`.
    pub fn handle_click(&mut self, physical: usize) -> AdapterResult<ClickOutcome> {
        self.handle_row_gesture(physical, false)
    }

    /// Handle a long click on the row at `physical`.
    pub fn handle_long_click(&mut self, physical: usize) -> AdapterResult<ClickOutcome> {
        self.handle_row_gesture(physical, true)
    }

    fn handle_row_gesture(&mut self, physical: usize, long: bool) -> AdapterResult<ClickOutcome> {
        self.affinity.debug_check();

        let SlotPosition::Item(logical) = self.resolve(physical)? else {
            tracing::trace!(target: targets::ENGINE, long, "gesture on header ignored");
            return Ok(ClickOutcome::Ignored);
        };

        if self.session.checkboxes_visible() && self.config.suppress_clicks_while_checking {
            let kind = self.provider.slot_kind_at(logical);
            if self.checkbox_region(logical, kind).is_none() {
                tracing::trace!(
                    target: targets::ENGINE,
                    logical,
                    ?kind,
                    "gesture on non-checkable row ignored"
                );
                return Ok(ClickOutcome::Ignored);
            }
            let id = self.provider.stable_id_at(logical);
            let checked = !self.selection.is_checked(id);
            return Ok(self.apply_check(physical, id, checked));
        }

        tracing::trace!(target: targets::ENGINE, logical, long, "gesture delegated");
        if long {
            self.signals.long_clicked.emit(logical);
        } else {
            self.signals.clicked.emit(logical);
        }
        Ok(ClickOutcome::Delegated(logical))
    }

    /// Handle a click on the avatar of the row at `physical`.
    ///
    /// Ignored while a checking session is active.
    pub fn handle_avatar_click(&mut self, physical: usize) -> AdapterResult<ClickOutcome> {
        self.affinity.debug_check();

        let SlotPosition::Item(logical) = self.resolve(physical)? else {
            return Ok(ClickOutcome::Ignored);
        };
        if self.session.is_active() {
            tracing::trace!(
                target: targets::ENGINE,
                logical,
                "avatar click ignored while checking"
            );
            return Ok(ClickOutcome::Ignored);
        }
        self.signals.avatar_clicked.emit(logical);
        Ok(ClickOutcome::Delegated(logical))
    }

    /// Handle a click on the trailing button of the row at `physical`.
    pub fn handle_button_click(&mut self, physical: usize) -> AdapterResult<ClickOutcome> {
        self.affinity.debug_check();

        let SlotPosition::Item(logical) = self.resolve(physical)? else {
            return Ok(ClickOutcome::Ignored);
        };
        self.signals.button_clicked.emit(logical);
        Ok(ClickOutcome::Delegated(logical))
    }

    /// The host's checkbox widget at `physical` changed to `checked`.
    ///
    /// Ignored on slots that cannot show a checkbox.
    pub fn handle_checkbox_toggled(
        &mut self,
        physical: usize,
        checked: bool,
    ) -> AdapterResult<ClickOutcome> {
        self.affinity.debug_check();

        let SlotPosition::Item(logical) = self.resolve(physical)? else {
            return Ok(ClickOutcome::Ignored);
        };
        let kind = self.provider.slot_kind_at(logical);
        if self.checkbox_region(logical, kind).is_none() {
            tracing::trace!(
                target: targets::ENGINE,
                logical,
                ?kind,
                "checkbox change on non-checkable row ignored"
            );
            return Ok(ClickOutcome::Ignored);
        }
        let id = self.provider.stable_id_at(logical);
        Ok(self.apply_check(physical, id, checked))
    }

    // -------------------------------------------------------------------------
    // Checking
    // -------------------------------------------------------------------------

    /// Start a checking session.
    ///
    /// Shows checkboxes on every eligible slot (full refresh) and emits
    /// `session_started` with the initial title, which is also returned.
    ///
    /// # Errors
    ///
    /// [`AdapterError::AlreadyActive`] if checkboxes are already visible.
    pub fn enter(&mut self) -> AdapterResult<String> {
        self.affinity.debug_check();

        let title = self.session.enter(&self.selection)?;
        self.signals.full_refresh.emit(());
        self.signals.session_started.emit(title.clone());
        Ok(title)
    }

    /// End the checking session, clearing the selection.
    ///
    /// Returns false if no session was active.
    pub fn exit(&mut self) -> bool {
        self.affinity.debug_check();

        if !self.session.exit(&mut self.selection) {
            return false;
        }
        self.signals.full_refresh.emit(());
        self.signals.session_finished.emit(());
        true
    }

    /// Flip the checked state of the item at `logical` inside a session.
    ///
    /// Returns [`ClickOutcome::Ignored`] when no session is active or the
    /// item has no checkbox.
    ///
    /// # Errors
    ///
    /// [`AdapterError::IndexOutOfRange`] if `logical` is not below the item count.
    pub fn toggle(&mut self, logical: usize) -> AdapterResult<ClickOutcome> {
        self.affinity.debug_check();

        let physical = self.to_physical(logical)?;
        if !self.session.is_active() {
            return Ok(ClickOutcome::Ignored);
        }
        let kind = self.provider.slot_kind_at(logical);
        if self.checkbox_region(logical, kind).is_none() {
            return Ok(ClickOutcome::Ignored);
        }

        let id = self.provider.stable_id_at(logical);
        let checked = !self.selection.is_checked(id);
        Ok(self.apply_check(physical, id, checked))
    }

    /// Programmatically check or uncheck the item at `logical`.
    ///
    /// Works with or without a session and never ends one, even if the
    /// selection becomes empty.
    pub fn set_checked(&mut self, logical: usize, checked: bool) -> AdapterResult<()> {
        self.affinity.debug_check();

        let physical = self.to_physical(logical)?;
        let id = self.provider.stable_id_at(logical);
        if self.selection.set_checked(id, checked) {
            self.signals.item_refresh.emit(physical);
            if self.session.is_active() {
                self.signals
                    .session_title_changed
                    .emit(title_for(self.selection.len()));
            }
        }
        Ok(())
    }

    /// Whether the item at `logical` is checked.
    pub fn is_checked(&self, logical: usize) -> AdapterResult<bool> {
        self.to_physical(logical)?;
        Ok(self.selection.is_checked(self.provider.stable_id_at(logical)))
    }

    /// Show or hide checkboxes without a session.
    ///
    /// Hiding checkboxes while a session is active ends the session.
    pub fn set_checkboxes_visible(&mut self, visible: bool) {
        self.affinity.debug_check();

        if !visible && self.session.is_active() {
            self.exit();
            return;
        }
        if self.session.set_checkboxes_visible(visible) {
            tracing::debug!(target: targets::SESSION, visible, "checkbox visibility changed");
            self.signals.full_refresh.emit(());
        }
    }

    /// Set membership and run the side effects of a checkbox change.
    ///
    /// A change that leaves membership as it was emits nothing.
    fn apply_check(&mut self, physical: usize, id: StableId, checked: bool) -> ClickOutcome {
        let suppressed = self.session.is_active() && self.config.suppress_clicks_while_checking;

        match self.session.set(&mut self.selection, id, checked) {
            Some(step) if !step.changed => {
                tracing::trace!(target: targets::SESSION, %id, checked, "membership unchanged");
                return ClickOutcome::Toggled { id, checked };
            }
            Some(step) => {
                self.signals.item_refresh.emit(physical);
                match step.outcome {
                    StepOutcome::Finished => {
                        self.signals.full_refresh.emit(());
                        self.signals.session_finished.emit(());
                    }
                    StepOutcome::Continued { title } => {
                        self.signals.session_title_changed.emit(title);
                    }
                }
                self.signals.item_checked.emit((id, checked));
            }
            None => {
                if !self.selection.set_checked(id, checked) {
                    return ClickOutcome::Toggled { id, checked };
                }
                self.signals.item_refresh.emit(physical);
            }
        }

        if !suppressed {
            self.signals.checked_changed.emit((id, checked));
        }
        ClickOutcome::Toggled { id, checked }
    }

    // -------------------------------------------------------------------------
    // Data-set changes
    // -------------------------------------------------------------------------

    /// Everything may have changed.
    pub fn notify_data_set_changed(&mut self) {
        self.affinity.debug_check();
        tracing::debug!(
            target: targets::ENGINE,
            item_count = self.provider.item_count(),
            "data set changed"
        );
        self.signals.full_refresh.emit(());
        self.update_empty_state();
    }

    /// `count` items were inserted at `logical_start`. Call after the
    /// provider already reports them.
    pub fn notify_items_inserted(
        &mut self,
        logical_start: usize,
        count: usize,
    ) -> AdapterResult<()> {
        self.affinity.debug_check();

        let item_count = self.provider.item_count();
        if logical_start.checked_add(count).is_none_or(|end| end > item_count) {
            return Err(self.range_error(logical_start.saturating_add(count), item_count));
        }
        let physical = logical_start + self.position_mapper().header_offset();
        tracing::debug!(target: targets::ENGINE, logical_start, count, "items inserted");
        self.signals.range_inserted.emit((physical, count));
        self.update_empty_state();
        Ok(())
    }

    /// `count` items were removed starting at `logical_start`. Call after
    /// the provider no longer reports them.
    ///
    /// Checked ids of removed items are kept; selection is identity based.
    pub fn notify_items_removed(
        &mut self,
        logical_start: usize,
        count: usize,
    ) -> AdapterResult<()> {
        self.affinity.debug_check();

        let item_count = self.provider.item_count();
        if logical_start > item_count {
            return Err(self.range_error(logical_start, item_count));
        }
        let physical = logical_start + self.position_mapper().header_offset();
        tracing::debug!(target: targets::ENGINE, logical_start, count, "items removed");
        self.signals.range_removed.emit((physical, count));
        self.update_empty_state();
        Ok(())
    }

    /// The content of the item at `logical` changed.
    pub fn notify_item_changed(&mut self, logical: usize) -> AdapterResult<()> {
        self.affinity.debug_check();

        let physical = self.to_physical(logical)?;
        self.signals.item_refresh.emit(physical);
        Ok(())
    }

    fn update_empty_state(&mut self) {
        let empty = self.provider.item_count() == 0;
        if empty != self.was_empty {
            self.was_empty = empty;
            tracing::debug!(target: targets::ENGINE, empty, "empty state changed");
            self.signals.empty_state_changed.emit(empty);
        }
    }

    fn to_physical(&self, logical: usize) -> AdapterResult<usize> {
        self.position_mapper()
            .to_physical(logical, self.provider.item_count())
            .inspect_err(|err| {
                tracing::warn!(target: targets::ENGINE, logical, %err, "index out of range");
            })
    }

    fn range_error(&self, index: usize, count: usize) -> AdapterError {
        let err = AdapterError::IndexOutOfRange { index, count };
        tracing::warn!(target: targets::ENGINE, %err, "notified range exceeds item count");
        err
    }
}

impl<P: DataProvider + std::fmt::Debug> std::fmt::Debug for AdapterEngine<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdapterEngine")
            .field("provider", &self.provider)
            .field("has_header", &self.header.is_some())
            .field("config", &self.config)
            .field("grid", &self.grid)
            .field("selection", &self.selection.len())
            .field("session", &self.session.state())
            .finish()
    }
}

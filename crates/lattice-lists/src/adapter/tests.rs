//! End-to-end adapter scenarios driven through an in-memory provider.

use std::collections::HashSet;
use std::sync::Arc;

use parking_lot::Mutex;
use proptest::prelude::*;

use super::*;
use crate::config::{AdapterConfig, SubHeaderStyle};
use crate::error::AdapterError;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[derive(Debug, Clone)]
struct Row {
    id: i64,
    kind: SlotKind,
    text: &'static str,
}

fn row(id: i64, kind: SlotKind, text: &'static str) -> Row {
    Row { id, kind, text }
}

#[derive(Debug, Default)]
struct Rows {
    rows: Vec<Row>,
    no_checkbox: HashSet<i64>,
}

impl Rows {
    fn new(rows: Vec<Row>) -> Self {
        Self {
            rows,
            no_checkbox: HashSet::new(),
        }
    }
}

impl DataProvider for Rows {
    type Slot = Vec<String>;

    fn item_count(&self) -> usize {
        self.rows.len()
    }

    fn slot_kind_at(&self, logical: usize) -> SlotKind {
        self.rows[logical].kind
    }

    fn sub_header_text_at(&self, logical: usize) -> String {
        self.rows[logical].text.to_string()
    }

    fn stable_id_at(&self, logical: usize) -> StableId {
        StableId(self.rows[logical].id)
    }

    fn show_checkbox_on_item(&self, logical: usize) -> bool {
        !self.no_checkbox.contains(&self.rows[logical].id)
    }

    fn bind_content(&self, logical: usize, controls: &SlotControls, slot: &mut Vec<String>) {
        slot.clear();
        for _ in 0..controls.text_fields {
            slot.push(self.rows[logical].text.to_string());
        }
    }
}

/// Five avatar rows with ids 10..=14.
fn avatar_rows() -> Rows {
    Rows::new(
        (0..5)
            .map(|i| row(10 + i, SlotKind::OneTextAvatar, "contact"))
            .collect(),
    )
}

#[derive(Debug, Clone, PartialEq)]
enum Event {
    Full,
    Item(usize),
    Header,
    Inserted(usize, usize),
    Removed(usize, usize),
    Empty(bool),
    Clicked(usize),
    LongClicked(usize),
    Avatar(usize),
    Button(usize),
    CheckedChanged(StableId, bool),
    Started(String),
    Title(String),
    Finished,
    ItemChecked(StableId, bool),
}

type Log = Arc<Mutex<Vec<Event>>>;

fn record<P: DataProvider>(engine: &AdapterEngine<P>) -> Log {
    let log: Log = Arc::new(Mutex::new(Vec::new()));
    let signals = engine.signals();

    macro_rules! on {
        ($signal:ident, $pattern:pat_param => $event:expr) => {{
            let log = log.clone();
            signals.$signal.connect(move |$pattern| log.lock().push($event));
        }};
    }

    on!(full_refresh, _ => Event::Full);
    on!(item_refresh, &p => Event::Item(p));
    on!(header_refresh, _ => Event::Header);
    on!(range_inserted, &(start, count) => Event::Inserted(start, count));
    on!(range_removed, &(start, count) => Event::Removed(start, count));
    on!(empty_state_changed, &empty => Event::Empty(empty));
    on!(clicked, &l => Event::Clicked(l));
    on!(long_clicked, &l => Event::LongClicked(l));
    on!(avatar_clicked, &l => Event::Avatar(l));
    on!(button_clicked, &l => Event::Button(l));
    on!(checked_changed, &(id, checked) => Event::CheckedChanged(id, checked));
    on!(session_started, title => Event::Started(title.clone()));
    on!(session_title_changed, title => Event::Title(title.clone()));
    on!(session_finished, _ => Event::Finished);
    on!(item_checked, &(id, checked) => Event::ItemChecked(id, checked));

    log
}

fn take(log: &Log) -> Vec<Event> {
    std::mem::take(&mut *log.lock())
}

// -------------------------------------------------------------------------
// Classification and dividers
// -------------------------------------------------------------------------

#[test]
fn test_sub_header_predecessor_dividers() {
    init_tracing();
    let rows = Rows::new(vec![
        row(0, SlotKind::SingleText, "a"),
        row(1, SlotKind::SingleText, "b"),
        row(2, SlotKind::SubHeader, "Section"),
        row(3, SlotKind::SingleText, "c"),
        row(4, SlotKind::SingleText, "d"),
    ]);
    let config = AdapterConfig::new().with_divider_style(DividerStyle::JustSubHeaderPredecessors);
    let engine = AdapterEngine::new(rows).with_config(config);

    assert!(engine.should_draw_divider(1).unwrap());
    for physical in [0, 2, 3, 4] {
        assert!(!engine.should_draw_divider(physical).unwrap(), "position {physical}");
    }
    assert_eq!(engine.classify(2), Ok(SlotKind::SubHeader));
}

#[test]
fn test_removing_header_drops_count() {
    init_tracing();
    let rows = Rows::new(vec![
        row(0, SlotKind::SingleText, "a"),
        row(1, SlotKind::SingleText, "b"),
        row(2, SlotKind::TwoTexts, "c"),
        row(3, SlotKind::OneTextAvatar, "d"),
        row(4, SlotKind::SingleText, "e"),
    ]);
    let mut engine = AdapterEngine::new(rows).with_header(HeaderHandle::new("banner"));
    let log = record(&engine);

    assert_eq!(engine.physical_count(), 6);
    assert_eq!(engine.classify(0), Ok(SlotKind::Header));
    assert_eq!(engine.classify(3), Ok(SlotKind::TwoTexts));
    let mut slot = Vec::new();
    engine.bind(3, &mut slot).unwrap();

    engine.set_header(None);
    assert_eq!(take(&log), vec![Event::Full]);
    assert_eq!(engine.physical_count(), 5);
    assert_eq!(engine.classify(3), Ok(SlotKind::OneTextAvatar));
    assert_eq!(engine.item_id(3), Ok(StableId(3)));
    assert_eq!(
        engine.classify(5),
        Err(AdapterError::PositionOutOfRange {
            position: 5,
            count: 5
        })
    );
}

#[test]
fn test_replacing_header_requests_header_refresh() {
    let mut engine = AdapterEngine::new(avatar_rows()).with_header(HeaderHandle::new(1u32));
    let log = record(&engine);

    engine.set_header(Some(HeaderHandle::new(2u32)));
    assert_eq!(take(&log), vec![Event::Header]);
    assert_eq!(engine.physical_count(), 6);

    // Setting no header when there is none changes nothing.
    let mut plain = AdapterEngine::new(avatar_rows());
    let log = record(&plain);
    plain.set_header(None);
    assert!(take(&log).is_empty());
}

#[test]
fn test_header_slot_id_and_bind() {
    let engine =
        AdapterEngine::new(avatar_rows()).with_header(HeaderHandle::new(String::from("banner")));
    assert_eq!(engine.item_id(0), Ok(StableId::HEADER));
    assert_eq!(engine.item_id(1), Ok(StableId(10)));

    let mut slot = vec![String::from("untouched")];
    match engine.bind(0, &mut slot).unwrap() {
        BindInstructions::Header(handle) => {
            assert_eq!(handle.downcast_ref::<String>().map(String::as_str), Some("banner"));
        }
        other => panic!("expected header, got {other:?}"),
    }
    assert_eq!(slot, vec![String::from("untouched")]);
}

// -------------------------------------------------------------------------
// Binding
// -------------------------------------------------------------------------

#[test]
fn test_bind_sub_header_and_content() {
    let rows = Rows::new(vec![
        row(0, SlotKind::TwoTexts, "mail"),
        row(1, SlotKind::SubHeader, "Yesterday"),
        row(2, SlotKind::SingleText, "old"),
    ]);
    let style = SubHeaderStyle {
        accent_text: true,
        shifted: true,
    };
    let engine = AdapterEngine::new(rows).with_config(
        AdapterConfig::new()
            .with_divider_style(DividerStyle::JustSubHeaderPredecessors)
            .with_divider_inset(true)
            .with_sub_header(style),
    );

    let mut slot = Vec::new();
    match engine.bind(0, &mut slot).unwrap() {
        BindInstructions::Item {
            kind,
            controls,
            divider,
            checkbox,
        } => {
            assert_eq!(kind, SlotKind::TwoTexts);
            assert_eq!(controls.text_fields, 2);
            assert!(divider.visible);
            assert_eq!(divider.leading_inset, DIVIDER_INSET_DP);
            assert_eq!(checkbox, CheckboxBinding::HIDDEN);
        }
        other => panic!("expected item, got {other:?}"),
    }
    assert_eq!(slot, vec!["mail".to_string(), "mail".to_string()]);

    match engine.bind(1, &mut slot).unwrap() {
        BindInstructions::SubHeader { text, style: bound, .. } => {
            assert_eq!(text, "Yesterday");
            assert_eq!(bound, style);
        }
        other => panic!("expected sub-header, got {other:?}"),
    }

    assert!(matches!(
        engine.bind(3, &mut slot),
        Err(AdapterError::PositionOutOfRange { position: 3, count: 3 })
    ));
}

#[test]
fn test_checkbox_binding_follows_session() {
    let mut rows = Rows::new(vec![
        row(1, SlotKind::OneTextAvatar, "a"),
        row(2, SlotKind::TwoTextsAvatarButton, "b"),
        row(3, SlotKind::SingleText, "c"),
        row(4, SlotKind::TwoTextsIcon, "d"),
    ]);
    rows.no_checkbox.insert(4);
    let mut engine = AdapterEngine::new(rows);
    let mut slot = Vec::new();

    let checkbox = |engine: &AdapterEngine<Rows>, physical: usize, slot: &mut Vec<String>| {
        match engine.bind(physical, slot).unwrap() {
            BindInstructions::Item { checkbox, .. } => checkbox,
            other => panic!("expected item, got {other:?}"),
        }
    };

    let before = checkbox(&engine, 0, &mut slot);
    assert_eq!(before.region, Some(Region::Image));
    assert!(!before.visible);
    assert!(!before.hides_region());

    engine.enter().unwrap();
    engine.toggle(1).unwrap();

    let avatar = checkbox(&engine, 0, &mut slot);
    assert!(avatar.visible && avatar.hides_region());
    assert!(!avatar.checked);

    let button = checkbox(&engine, 1, &mut slot);
    assert_eq!(button.region, Some(Region::Button));
    assert!(button.visible);
    assert!(button.checked);

    assert_eq!(checkbox(&engine, 2, &mut slot), CheckboxBinding::HIDDEN);
    assert_eq!(checkbox(&engine, 3, &mut slot), CheckboxBinding::HIDDEN);
}

#[test]
fn test_bind_visible_pass() {
    let engine = AdapterEngine::new(avatar_rows()).with_header(HeaderHandle::new(()));
    let mut slots = vec![Vec::new(); 3];

    let instructions = engine
        .bind_visible(slots.iter_mut().enumerate())
        .unwrap();
    assert_eq!(instructions.len(), 3);
    assert!(matches!(instructions[0], BindInstructions::Header(_)));
    assert_eq!(slots[1], vec!["contact".to_string()]);

    let mut slot = Vec::new();
    assert!(engine.bind_visible([(9, &mut slot)]).is_err());
}

// -------------------------------------------------------------------------
// Clicks
// -------------------------------------------------------------------------

#[test]
fn test_click_delegation_translates_positions() {
    init_tracing();
    let mut engine = AdapterEngine::new(avatar_rows()).with_header(HeaderHandle::new(()));
    let log = record(&engine);

    assert_eq!(engine.handle_click(0), Ok(ClickOutcome::Ignored));
    assert_eq!(engine.handle_click(3), Ok(ClickOutcome::Delegated(2)));
    assert_eq!(engine.handle_long_click(1), Ok(ClickOutcome::Delegated(0)));
    assert_eq!(take(&log), vec![Event::Clicked(2), Event::LongClicked(0)]);

    assert!(engine.handle_click(6).is_err());
    assert!(take(&log).is_empty());
}

#[test]
fn test_clicks_toggle_while_checking() {
    let mut engine = AdapterEngine::new(avatar_rows());
    engine.enter().unwrap();
    let log = record(&engine);

    assert_eq!(
        engine.handle_long_click(2),
        Ok(ClickOutcome::Toggled {
            id: StableId(12),
            checked: true
        })
    );
    assert_eq!(
        take(&log),
        vec![
            Event::Item(2),
            Event::Title("1 item(s) selected".to_string()),
            Event::ItemChecked(StableId(12), true),
        ]
    );
}

#[test]
fn test_clicks_delegate_when_suppression_disabled() {
    let config = AdapterConfig::new().with_suppress_clicks_while_checking(false);
    let mut engine = AdapterEngine::new(avatar_rows()).with_config(config);
    engine.enter().unwrap();
    let log = record(&engine);

    assert_eq!(engine.handle_click(1), Ok(ClickOutcome::Delegated(1)));
    assert_eq!(take(&log), vec![Event::Clicked(1)]);

    // The checkbox widget still works, and the listener hears about it.
    engine.handle_checkbox_toggled(1, true).unwrap();
    let events = take(&log);
    assert!(events.contains(&Event::ItemChecked(StableId(11), true)));
    assert!(events.contains(&Event::CheckedChanged(StableId(11), true)));
}

#[test]
fn test_click_on_non_checkable_row_is_ignored_while_checking() {
    let rows = Rows::new(vec![
        row(0, SlotKind::OneTextAvatar, "a"),
        row(1, SlotKind::SingleText, "b"),
        row(2, SlotKind::SubHeader, "c"),
    ]);
    let mut engine = AdapterEngine::new(rows);
    engine.enter().unwrap();

    assert_eq!(engine.handle_click(1), Ok(ClickOutcome::Ignored));
    assert_eq!(engine.handle_click(2), Ok(ClickOutcome::Ignored));
    assert_eq!(engine.toggle(1), Ok(ClickOutcome::Ignored));
    assert!(engine.is_checking());
    assert!(engine.selection().is_empty());
}

#[test]
fn test_avatar_and_button_clicks() {
    let mut engine = AdapterEngine::new(avatar_rows()).with_header(HeaderHandle::new(()));
    let log = record(&engine);

    assert_eq!(engine.handle_avatar_click(1), Ok(ClickOutcome::Delegated(0)));
    assert_eq!(engine.handle_button_click(2), Ok(ClickOutcome::Delegated(1)));
    assert_eq!(engine.handle_avatar_click(0), Ok(ClickOutcome::Ignored));

    engine.enter().unwrap();
    take(&log);

    assert_eq!(engine.handle_avatar_click(1), Ok(ClickOutcome::Ignored));
    assert_eq!(engine.handle_button_click(1), Ok(ClickOutcome::Delegated(0)));
    assert_eq!(take(&log), vec![Event::Button(0)]);
}

// -------------------------------------------------------------------------
// Checking sessions
// -------------------------------------------------------------------------

#[test]
fn test_enter_twice_fails() {
    let mut engine = AdapterEngine::new(avatar_rows());
    let log = record(&engine);

    assert_eq!(engine.enter(), Ok("0 item(s) selected".to_string()));
    assert_eq!(
        take(&log),
        vec![Event::Full, Event::Started("0 item(s) selected".to_string())]
    );
    assert_eq!(engine.enter(), Err(AdapterError::AlreadyActive));
    assert!(take(&log).is_empty());
}

#[test]
fn test_auto_exit_when_last_item_unchecked() {
    init_tracing();
    let mut engine = AdapterEngine::new(avatar_rows());
    let log = record(&engine);

    engine.enter().unwrap();
    engine.toggle(0).unwrap();
    assert_eq!(engine.session_title(), Some("1 item(s) selected".to_string()));
    take(&log);

    assert_eq!(
        engine.toggle(0),
        Ok(ClickOutcome::Toggled {
            id: StableId(10),
            checked: false
        })
    );
    assert_eq!(
        take(&log),
        vec![
            Event::Item(0),
            Event::Full,
            Event::Finished,
            Event::ItemChecked(StableId(10), false),
        ]
    );
    assert_eq!(engine.session_state(), SessionState::Inactive);
    assert!(!engine.checkboxes_visible());
    assert_eq!(engine.session_title(), None);

    assert!(engine.enter().is_ok());
}

#[test]
fn test_enter_refreshes_before_announcing() {
    let mut engine = AdapterEngine::new(avatar_rows());
    let observed = Arc::new(Mutex::new(Vec::new()));

    let seen = observed.clone();
    engine.signals().session_started.connect(move |_| seen.lock().push("started"));
    let seen = observed.clone();
    engine.signals().full_refresh.connect(move |_| seen.lock().push("refresh"));

    engine.enter().unwrap();
    assert!(engine.is_checking());
    assert_eq!(*observed.lock(), vec!["refresh", "started"]);
}

#[test]
fn test_explicit_exit_clears_selection() {
    let mut engine = AdapterEngine::new(avatar_rows());
    engine.enter().unwrap();
    engine.toggle(1).unwrap();
    engine.toggle(3).unwrap();
    assert_eq!(engine.session_title(), Some("2 item(s) selected".to_string()));

    let log = record(&engine);
    assert!(engine.exit());
    assert_eq!(take(&log), vec![Event::Full, Event::Finished]);
    assert!(engine.selection().is_empty());
    assert!(!engine.exit());
}

#[test]
fn test_toggle_without_session_is_ignored() {
    let mut engine = AdapterEngine::new(avatar_rows());
    assert_eq!(engine.toggle(0), Ok(ClickOutcome::Ignored));
    assert_eq!(
        engine.toggle(5),
        Err(AdapterError::IndexOutOfRange { index: 5, count: 5 })
    );
}

#[test]
fn test_preseeded_selection_and_programmatic_uncheck() {
    let mut engine = AdapterEngine::new(avatar_rows());
    engine.set_checked(0, true).unwrap();
    engine.set_checked(4, true).unwrap();
    assert_eq!(engine.enter(), Ok("2 item(s) selected".to_string()));

    let log = record(&engine);
    engine.set_checked(0, false).unwrap();
    engine.set_checked(4, false).unwrap();
    assert_eq!(
        take(&log),
        vec![
            Event::Item(0),
            Event::Title("1 item(s) selected".to_string()),
            Event::Item(4),
            Event::Title("0 item(s) selected".to_string()),
        ]
    );
    // Programmatic changes never end the session.
    assert!(engine.is_checking());
}

#[test]
fn test_selection_survives_removal_of_other_item() {
    init_tracing();
    let mut engine = AdapterEngine::new(avatar_rows());
    engine.enter().unwrap();
    engine.toggle(3).unwrap();
    assert!(engine.is_checked(3).unwrap());

    let log = record(&engine);
    engine.provider_mut().rows.remove(1);
    engine.notify_items_removed(1, 1).unwrap();
    assert_eq!(take(&log), vec![Event::Removed(1, 1)]);

    // Item 13 moved from logical 3 to logical 2 and is still checked.
    assert_eq!(engine.provider().stable_id_at(2), StableId(13));
    assert!(engine.is_checked(2).unwrap());
    let mut slot = Vec::new();
    match engine.bind(2, &mut slot).unwrap() {
        BindInstructions::Item { checkbox, .. } => assert!(checkbox.checked),
        other => panic!("expected item, got {other:?}"),
    }
    assert!(!engine.is_checked(3).unwrap());
}

#[test]
fn test_checkbox_widget_outside_session() {
    let mut engine = AdapterEngine::new(avatar_rows());
    let log = record(&engine);

    assert_eq!(
        engine.handle_checkbox_toggled(0, true),
        Ok(ClickOutcome::Toggled {
            id: StableId(10),
            checked: true
        })
    );
    assert_eq!(
        take(&log),
        vec![Event::Item(0), Event::CheckedChanged(StableId(10), true)]
    );
    assert!(engine.is_checked(0).unwrap());
    assert!(!engine.is_checking());
}

#[test]
fn test_checkbox_widget_inside_suppressing_session() {
    let mut engine = AdapterEngine::new(avatar_rows());
    engine.enter().unwrap();
    let log = record(&engine);

    engine.handle_checkbox_toggled(2, true).unwrap();
    let events = take(&log);
    assert!(events.contains(&Event::ItemChecked(StableId(12), true)));
    assert!(!events.iter().any(|e| matches!(e, Event::CheckedChanged(..))));
}

#[test]
fn test_checkbox_widget_ignored_on_non_checkable_rows() {
    init_tracing();
    let mut rows = Rows::new(vec![
        row(0, SlotKind::OneTextAvatar, "a"),
        row(1, SlotKind::SubHeader, "Section"),
        row(2, SlotKind::SingleText, "b"),
        row(3, SlotKind::OneTextAvatar, "c"),
    ]);
    rows.no_checkbox.insert(3);
    let mut engine = AdapterEngine::new(rows);
    engine.enter().unwrap();
    engine.toggle(0).unwrap();
    let log = record(&engine);

    for physical in [1, 2, 3] {
        assert_eq!(
            engine.handle_checkbox_toggled(physical, true),
            Ok(ClickOutcome::Ignored),
            "position {physical}"
        );
    }
    assert!(take(&log).is_empty());
    assert_eq!(engine.selection().len(), 1);
    assert_eq!(engine.session_title(), Some("1 item(s) selected".to_string()));

    // Unchecking the only checkable row still ends the session.
    engine.handle_checkbox_toggled(0, false).unwrap();
    assert!(!engine.is_checking());
    assert!(engine.selection().is_empty());
}

#[test]
fn test_checkbox_widget_repeating_state_emits_nothing() {
    let mut engine = AdapterEngine::new(avatar_rows());
    engine.enter().unwrap();
    engine.handle_checkbox_toggled(1, true).unwrap();
    let log = record(&engine);

    assert_eq!(
        engine.handle_checkbox_toggled(1, true),
        Ok(ClickOutcome::Toggled {
            id: StableId(11),
            checked: true
        })
    );
    assert!(take(&log).is_empty());
    assert_eq!(engine.session_title(), Some("1 item(s) selected".to_string()));

    // Same outside a session.
    engine.exit();
    engine.set_checkboxes_visible(true);
    engine.handle_checkbox_toggled(2, true).unwrap();
    take(&log);
    engine.handle_checkbox_toggled(2, true).unwrap();
    assert!(take(&log).is_empty());
}

#[test]
fn test_insert_notification_rejects_overflowing_range() {
    let mut engine = AdapterEngine::new(avatar_rows());
    let log = record(&engine);

    assert_eq!(
        engine.notify_items_inserted(1, usize::MAX),
        Err(AdapterError::IndexOutOfRange {
            index: usize::MAX,
            count: 5
        })
    );
    assert!(take(&log).is_empty());
}

#[test]
fn test_manual_checkboxes_block_enter() {
    let mut engine = AdapterEngine::new(avatar_rows());
    let log = record(&engine);

    engine.set_checkboxes_visible(true);
    assert_eq!(take(&log), vec![Event::Full]);
    assert_eq!(engine.enter(), Err(AdapterError::AlreadyActive));

    // Clicks toggle without a session and report through the listener.
    assert_eq!(
        engine.handle_click(1),
        Ok(ClickOutcome::Toggled {
            id: StableId(11),
            checked: true
        })
    );
    assert_eq!(
        take(&log),
        vec![Event::Item(1), Event::CheckedChanged(StableId(11), true)]
    );

    engine.set_checkboxes_visible(false);
    assert!(engine.enter().is_ok());
}

#[test]
fn test_hiding_checkboxes_ends_session() {
    let mut engine = AdapterEngine::new(avatar_rows());
    engine.enter().unwrap();
    engine.toggle(0).unwrap();
    let log = record(&engine);

    engine.set_checkboxes_visible(false);
    assert_eq!(take(&log), vec![Event::Full, Event::Finished]);
    assert!(!engine.is_checking());
    assert!(engine.selection().is_empty());
}

// -------------------------------------------------------------------------
// Data-set changes
// -------------------------------------------------------------------------

#[test]
fn test_empty_state_transitions() {
    let mut engine = AdapterEngine::new(Rows::default()).with_header(HeaderHandle::new(()));
    let log = record(&engine);

    engine
        .provider_mut()
        .rows
        .push(row(1, SlotKind::SingleText, "first"));
    engine.notify_items_inserted(0, 1).unwrap();
    assert_eq!(take(&log), vec![Event::Inserted(1, 1), Event::Empty(false)]);

    engine
        .provider_mut()
        .rows
        .push(row(2, SlotKind::SingleText, "second"));
    engine.notify_items_inserted(1, 1).unwrap();
    assert_eq!(take(&log), vec![Event::Inserted(2, 1)]);

    engine.provider_mut().rows.clear();
    engine.notify_data_set_changed();
    assert_eq!(take(&log), vec![Event::Full, Event::Empty(true)]);
    assert_eq!(engine.physical_count(), 1);
}

#[test]
fn test_notify_ranges_are_checked() {
    let mut engine = AdapterEngine::new(avatar_rows()).with_header(HeaderHandle::new(()));
    let log = record(&engine);

    assert!(engine.notify_items_inserted(4, 2).is_err());
    assert!(engine.notify_items_removed(6, 1).is_err());
    assert!(engine.notify_item_changed(5).is_err());
    assert!(take(&log).is_empty());

    engine.notify_item_changed(4).unwrap();
    assert_eq!(take(&log), vec![Event::Item(5)]);
}

#[test]
fn test_set_config_requests_full_refresh() {
    let mut engine = AdapterEngine::new(avatar_rows());
    let log = record(&engine);

    engine.set_config(
        AdapterConfig::new()
            .with_divider_style(DividerStyle::AllItems)
            .with_divider_color(lattice_lists_core::Color::MATERIAL_DARK_DIVIDER),
    );
    assert_eq!(take(&log), vec![Event::Full]);
    assert!(engine.should_draw_divider(0).unwrap());
    assert!(!engine.should_draw_divider(4).unwrap());

    engine.set_divider_style(DividerStyle::None);
    assert!(!engine.should_draw_divider(0).unwrap());
    assert!(take(&log).is_empty());
}

// -------------------------------------------------------------------------
// Grid
// -------------------------------------------------------------------------

#[test]
fn test_grid_layout_queries() {
    let rows = Rows::new(vec![
        row(0, SlotKind::SubHeader, "Album"),
        row(1, SlotKind::GridItem, "photo"),
        row(2, SlotKind::GridItem, "photo"),
    ]);
    let grid = GridLayout::new(3)
        .with_spacing(GridSpacing::Large)
        .with_details(DetailsType::SingleLine);
    let engine = AdapterEngine::new(rows)
        .with_grid(grid)
        .with_config(
            AdapterConfig::new()
                .with_divider_style(DividerStyle::AllItems)
                .with_sub_header(SubHeaderStyle {
                    accent_text: true,
                    shifted: false,
                }),
        );

    assert_eq!(engine.span_size(0), Ok(3));
    assert_eq!(engine.span_size(1), Ok(1));
    assert_eq!(engine.item_offsets(0), Ok(Insets::ZERO));
    assert_eq!(engine.item_offsets(2), Ok(Insets::uniform(4.0)));
    assert!(engine.span_size(3).is_err());

    let mut slot = Vec::new();
    match engine.bind(0, &mut slot).unwrap() {
        BindInstructions::SubHeader { style, divider, .. } => {
            assert!(!style.accent_text);
            assert!(!divider.visible);
        }
        other => panic!("expected sub-header, got {other:?}"),
    }
    match engine.bind(1, &mut slot).unwrap() {
        BindInstructions::Item { controls, divider, .. } => {
            assert_eq!(controls.text_fields, 1);
            assert!(controls.has_button);
            assert!(!divider.visible);
        }
        other => panic!("expected item, got {other:?}"),
    }
    assert_eq!(slot, vec!["photo".to_string()]);
}

#[test]
fn test_list_span_and_offsets_defaults() {
    let engine = AdapterEngine::new(avatar_rows());
    assert_eq!(engine.span_size(0), Ok(1));
    assert_eq!(engine.item_offsets(0), Ok(Insets::ZERO));
}

// -------------------------------------------------------------------------
// Properties
// -------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_session_active_iff_selection_non_empty(
        clicks in prop::collection::vec(0usize..5, 1..40),
    ) {
        let mut engine = AdapterEngine::new(avatar_rows());
        engine.enter().unwrap();

        for physical in clicks {
            if !engine.is_checking() {
                prop_assert!(engine.selection().is_empty());
                engine.enter().unwrap();
            }
            let outcome = engine.handle_click(physical).unwrap();
            let toggled = matches!(outcome, ClickOutcome::Toggled { .. });
            prop_assert!(toggled, "outcome {:?}", outcome);
            prop_assert_eq!(engine.is_checking(), !engine.selection().is_empty());
        }
    }

    #[test]
    fn prop_header_toggle_keeps_logical_kinds(has_header in any::<bool>(), count in 0usize..20) {
        let rows = Rows::new(
            (0..count)
                .map(|i| {
                    let kind = if i % 3 == 0 { SlotKind::SubHeader } else { SlotKind::TwoTexts };
                    row(i as i64, kind, "x")
                })
                .collect(),
        );
        let mut engine = AdapterEngine::new(rows);
        engine.set_header(has_header.then(|| HeaderHandle::new(())));

        let offset = usize::from(has_header);
        prop_assert_eq!(engine.physical_count(), count + offset);
        for logical in 0..count {
            let expected = engine.provider().slot_kind_at(logical);
            prop_assert_eq!(engine.classify(logical + offset).unwrap(), expected);
        }
    }
}

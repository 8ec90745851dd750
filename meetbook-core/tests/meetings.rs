mod common;

use common::{logic, run_all, ALICE, BENSON};
use meetbook_core::{Event, LogicManager, MeetbookError, ViewState};

fn event<'a>(logic: &'a LogicManager, name: &str) -> &'a Event {
    logic
        .model()
        .address_book()
        .events()
        .iter()
        .find(|e| e.name.as_str() == name)
        .unwrap_or_else(|| panic!("no event named {name}"))
}

fn slot(event: &Event) -> (String, String) {
    (event.start.to_string(), event.end.to_string())
}

#[test]
fn meeting_is_pushed_past_participant_events() {
    let (mut logic, _dir) = logic();
    run_all(
        &mut logic,
        &[ALICE, BENSON, "meet 1 name:Standup venue:COM1 start:2026-10-20 09:00"],
    );
    assert_eq!(logic.view(), ViewState::Events);

    logic.execute("switch").unwrap();
    let result = logic
        .execute("meet 1 2 name:Sync venue:COM2 start:2026-10-20 09:30 end:2026-10-20 09:45")
        .unwrap();
    assert!(result.feedback.starts_with("New meeting event successfully created Sync"));
    assert!(result.switch_view);

    assert_eq!(
        slot(event(&logic, "Standup")),
        ("2026-10-20 09:00:00".into(), "2026-10-20 11:00:00".into())
    );
    // 09:30 clashes with the standup, so it moves to the later of the two
    // ends: 11:30, then runs the fixed two hours
    assert_eq!(
        slot(event(&logic, "Sync")),
        ("2026-10-20 11:30:00".into(), "2026-10-20 13:30:00".into())
    );
    assert_eq!(logic.model().selected_event().map(|e| e.name.as_str()), Some("Sync"));
}

#[test]
fn chained_clashes_resolve_to_a_free_slot() {
    let (mut logic, _dir) = logic();
    run_all(
        &mut logic,
        &[
            ALICE,
            BENSON,
            "meet 1 name:Standup venue:COM1 start:2026-10-20 09:00",
            "switch",
            "meet 2 name:Review venue:COM1 start:2026-10-20 12:00",
            "switch",
            "meet 1 2 name:Sync venue:COM2 start:2026-10-20 10:00",
        ],
    );

    let sync = event(&logic, "Sync");
    let others: Vec<&Event> = logic
        .model()
        .address_book()
        .events()
        .iter()
        .filter(|e| e.id != sync.id)
        .collect();
    assert!(others.iter().all(|e| !e.overlaps(sync)));
    assert_eq!(sync.start.to_string(), "2026-10-20 14:00:00");
}

#[test]
fn past_start_is_moved_to_now() {
    let (mut logic, _dir) = logic();
    run_all(&mut logic, &[ALICE, "meet 1 name:Catch up venue:Cafe start:2020-01-01 10:00"]);

    assert_eq!(
        slot(event(&logic, "Catch up")),
        ("2026-10-20 08:00:00".into(), "2026-10-20 10:00:00".into())
    );
}

#[test]
fn meeting_with_unknown_index_changes_nothing() {
    let (mut logic, _dir) = logic();
    run_all(&mut logic, &[ALICE]);

    let err = logic
        .execute("meet 1 5 name:Sync venue:COM1 start:2026-10-20 10:00")
        .unwrap_err();
    assert!(matches!(err, MeetbookError::InvalidIndex(_)));
    assert!(logic.model().address_book().events().is_empty());
}

#[test]
fn events_filter_and_select() {
    let (mut logic, _dir) = logic();
    run_all(
        &mut logic,
        &[
            ALICE,
            BENSON,
            "meet 1 name:Standup venue:COM1 start:2026-10-20 09:00",
            "switch",
            "meet 2 name:Dinner venue:Home start:2026-10-20 19:00",
        ],
    );

    let result = logic.execute("events block:evening").unwrap();
    assert_eq!(result.feedback, "1 events listed!");
    // the latest meeting is still visible, so it stays selected
    assert_eq!(logic.model().selected_event().map(|e| e.name.as_str()), Some("Dinner"));

    logic.execute("events block:!evening").unwrap();
    assert!(logic.model().selected_event().is_none());
    logic.execute("select 1").unwrap();
    assert_eq!(logic.model().selected_event().map(|e| e.name.as_str()), Some("Standup"));
    assert!(matches!(logic.execute("select 2"), Err(MeetbookError::InvalidIndex(_))));
}

#[test]
fn reminders_list_events_in_window() {
    let (mut logic, _dir) = logic();
    run_all(
        &mut logic,
        &[
            ALICE,
            "meet 1 name:Standup venue:COM1 start:2026-10-20 09:00",
            "switch",
            "meet 1 name:Offsite venue:Sentosa start:2026-10-25 09:00",
        ],
    );

    let result = logic.execute("reminders").unwrap();
    assert_eq!(result.feedback, "1 upcoming events:\nStandup at COM1 starts in 1 hour");
    assert_eq!(logic.reminders().len(), 1);

    let result = logic.execute("reminders 1 week").unwrap();
    assert!(result.feedback.contains("Offsite at Sentosa starts in 5 day"));
}

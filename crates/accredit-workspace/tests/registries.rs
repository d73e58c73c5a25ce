use accredit_core::models::event::{EventStatus, NewEvent};
use accredit_core::models::room::{NewRoom, ProgressStatus};
use accredit_core::models::user::{NewUser, Role};
use accredit_workspace::error::WorkspaceError;
use accredit_workspace::events::{EventRegistry, EventTab};
use accredit_workspace::rooms::RoomRegistry;
use accredit_workspace::seed;
use accredit_workspace::users::UserDirectory;
use jiff::civil::date;

#[test]
fn new_event_starts_as_draft() {
    let mut events = EventRegistry::new(seed::events());
    let created = events
        .create(NewEvent {
            name: Some("Q4 2023 Assessment".to_string()),
            description: None,
            start_date: Some(date(2023, 10, 1)),
            end_date: Some(date(2023, 12, 31)),
        })
        .unwrap();
    assert_eq!(created.id, "5");
    assert_eq!(created.status, EventStatus::Draft);
    assert_eq!(created.description, "");
}

#[test]
fn event_requires_name_and_dates() {
    let mut events = EventRegistry::new(Vec::new());
    let err = events
        .create(NewEvent {
            name: Some("  ".to_string()),
            start_date: Some(date(2023, 10, 1)),
            ..Default::default()
        })
        .unwrap_err();
    match err {
        WorkspaceError::Validation { entity, missing } => {
            assert_eq!(entity, "event");
            assert_eq!(missing, vec!["name", "end_date"]);
        }
        other => panic!("expected validation error, got {other:?}"),
    }
    assert!(events.list().is_empty());
}

#[test]
fn event_end_before_start_is_rejected() {
    let mut events = EventRegistry::new(Vec::new());
    let err = events
        .create(NewEvent {
            name: Some("Backwards".to_string()),
            description: None,
            start_date: Some(date(2023, 10, 1)),
            end_date: Some(date(2023, 9, 1)),
        })
        .unwrap_err();
    assert!(matches!(err, WorkspaceError::InvalidDates { .. }));
}

#[test]
fn event_tabs_partition_the_list() {
    let mut events = EventRegistry::new(seed::events());
    let today = date(2023, 6, 10);

    let names = |tab| -> Vec<String> {
        events
            .by_tab(tab, today)
            .into_iter()
            .map(|e| e.name.clone())
            .collect()
    };
    assert_eq!(names(EventTab::Active), vec!["Q2 2023 Assessment", "Emergency Department Audit"]);
    assert_eq!(names(EventTab::Upcoming), vec!["Q3 2023 Assessment"]);
    assert_eq!(names(EventTab::Completed), vec!["Q1 2023 Assessment"]);

    events.archive("1").unwrap();
    assert_eq!(events.by_tab(EventTab::Completed, today).len(), 2);
    assert!(matches!(
        events.set_status("9", EventStatus::Active),
        Err(WorkspaceError::NotFound { kind: "event", .. })
    ));
}

#[test]
fn rooms_group_by_unit_and_filter_pending() {
    let mut rooms = RoomRegistry::new(seed::rooms());
    let by_unit = rooms.by_unit();
    assert_eq!(by_unit.len(), 3);
    assert_eq!(by_unit.get("Emergency Department").unwrap().len(), 2);

    let pending_self: Vec<&str> = rooms
        .pending_self_assessment()
        .into_iter()
        .map(|r| r.id.as_str())
        .collect();
    assert_eq!(pending_self, vec!["3", "5", "6"]);

    let pending_eval: Vec<&str> = rooms
        .pending_evaluation()
        .into_iter()
        .map(|r| r.id.as_str())
        .collect();
    assert_eq!(pending_eval, vec!["1", "4"]);

    rooms
        .set_progress("4", ProgressStatus::Completed, ProgressStatus::Completed)
        .unwrap();
    assert_eq!(rooms.pending_evaluation().len(), 1);
}

#[test]
fn new_room_requires_both_names() {
    let mut rooms = RoomRegistry::new(seed::rooms());
    let err = rooms
        .create(NewRoom {
            unit_name: Some("Inpatient Department".to_string()),
            room_name: None,
        })
        .unwrap_err();
    assert!(matches!(err, WorkspaceError::Validation { entity: "room", .. }));

    let room = rooms
        .create(NewRoom {
            unit_name: Some("Inpatient Department".to_string()),
            room_name: Some("Pediatric Ward".to_string()),
        })
        .unwrap();
    assert_eq!(room.id, "7");
    assert_eq!(room.self_assessment_status, ProgressStatus::NotStarted);
    assert_eq!(room.assigned_evaluators, 0);
    assert_eq!(rooms.by_unit().get("Inpatient Department").unwrap().len(), 3);
}

#[test]
fn users_filter_by_role_and_delete() {
    let mut users = UserDirectory::new(seed::users());
    assert_eq!(users.by_role(None).len(), 5);
    assert_eq!(users.by_role(Some(Role::Evaluator)).len(), 2);
    assert_eq!(users.by_role(Some(Role::Admin)).len(), 1);

    let removed = users.delete("3").unwrap();
    assert_eq!(removed.username, "jane.smith");
    assert!(users.get("3").is_none());
    assert!(matches!(users.delete("3"), Err(WorkspaceError::NotFound { .. })));
}

#[test]
fn new_user_ids_never_collide_after_delete() {
    let mut users = UserDirectory::new(seed::users());
    users.delete("2").unwrap();
    let created = users
        .create(NewUser {
            username: Some("emily.davis".to_string()),
            full_name: Some("Emily Davis".to_string()),
            email: Some("emily.davis@example.com".to_string()),
            role: Some(Role::Evaluator),
        })
        .unwrap();
    assert_eq!(created.id, "6");
    assert_eq!(created.assigned_rooms, Some(0));
}

#[test]
fn new_user_validation() {
    let mut users = UserDirectory::new(seed::users());

    let err = users
        .create(NewUser {
            username: Some("someone".to_string()),
            ..Default::default()
        })
        .unwrap_err();
    match err {
        WorkspaceError::Validation { missing, .. } => {
            assert_eq!(missing, vec!["full_name", "email", "role"]);
        }
        other => panic!("expected validation error, got {other:?}"),
    }

    let err = users
        .create(NewUser {
            username: Some("admin".to_string()),
            full_name: Some("Second Admin".to_string()),
            email: Some("admin2@example.com".to_string()),
            role: Some(Role::Admin),
        })
        .unwrap_err();
    assert!(matches!(err, WorkspaceError::UsernameTaken(ref name) if name == "admin"));
}

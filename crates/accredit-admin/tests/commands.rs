use accredit_admin::commands::{Command, execute};
use accredit_admin::config::{AdminConfig, Profile, load_config_from};
use accredit_admin::navigation::View;
use accredit_admin::state::AdminState;
use accredit_core::models::evidence::Evidence;
use accredit_core::models::score::Score;
use accredit_core::models::user::Role;
use accredit_workspace::Workspace;
use jiff::civil::date;

fn state() -> AdminState {
    let config = AdminConfig::new(Profile::default(), jiff::Timestamp::UNIX_EPOCH);
    AdminState::new(Workspace::seeded().unwrap(), config, date(2023, 6, 10))
}

fn run(state: &mut AdminState, line: &str) -> Result<String, String> {
    let command: Command = line.parse()?;
    execute(state, command)
}

#[test]
fn parses_arguments() {
    assert_eq!("score 5".parse::<Command>().unwrap(), Command::Score(Score::Partial));
    assert!("score 7".parse::<Command>().is_err());
    assert!("score".parse::<Command>().is_err());
    assert_eq!(
        "evidence link https://example.com/doc".parse::<Command>().unwrap(),
        Command::Evidence(Evidence::link("https://example.com/doc").unwrap())
    );
    assert!("evidence photo x.jpg".parse::<Command>().is_err());
    assert_eq!("view /nowhere".parse::<Command>().unwrap(), Command::View(View::Dashboard));
    assert_eq!("role evaluator".parse::<Command>().unwrap(), Command::Role(Role::Evaluator));
    assert!("frobnicate".parse::<Command>().is_err());
}

#[test]
fn edit_and_save_updates_progress() {
    let mut state = state();
    run(&mut state, "view self-assessment").unwrap();
    assert!(run(&mut state, "progress").unwrap().contains("2 of 5 items completed (40%)"));

    run(&mut state, "open 3").unwrap();
    run(&mut state, "score 10").unwrap();
    run(&mut state, "evidence file hand_hygiene.pdf").unwrap();
    let saved = run(&mut state, "save").unwrap();
    assert!(saved.contains("3 of 5 items completed (60%)"), "{saved}");

    let item = state.workspace.self_assessment.store().get("3").unwrap();
    assert_eq!(item.self_assessment_score, Some(Score::Met));
    assert_eq!(
        item.self_assessment_evidence,
        Some(Evidence::file("hand_hygiene.pdf").unwrap())
    );
}

#[test]
fn cancel_discards_draft() {
    let mut state = state();
    run(&mut state, "view self-assessment").unwrap();
    run(&mut state, "open 3").unwrap();
    run(&mut state, "score 10").unwrap();
    run(&mut state, "cancel").unwrap();

    let item = state.workspace.self_assessment.store().get("3").unwrap();
    assert_eq!(item.self_assessment_score, None);
    assert!(run(&mut state, "progress").unwrap().contains("(40%)"));
    assert_eq!(run(&mut state, "cancel").unwrap(), "Nothing to cancel");
}

#[test]
fn evidence_must_match_item_type() {
    let mut state = state();
    run(&mut state, "view self-assessment").unwrap();
    run(&mut state, "open 4").unwrap();
    assert!(run(&mut state, "evidence file isolation.pdf").is_err());
    run(&mut state, "evidence link https://example.com/isolation").unwrap();
}

#[test]
fn evaluation_view_keeps_self_assessment_read_only() {
    let mut state = state();
    run(&mut state, "view evaluation").unwrap();
    run(&mut state, "open 3").unwrap();
    assert!(run(&mut state, "evidence file other.pdf").is_err());
    run(&mut state, "score 5").unwrap();
    run(&mut state, "notes Stations present, training records incomplete.").unwrap();
    run(&mut state, "save").unwrap();

    let evaluated = state.workspace.evaluation.store().get("3").unwrap();
    assert_eq!(evaluated.evaluation_score, Some(Score::Partial));
    assert_eq!(evaluated.self_assessment_score, Some(Score::Met));
    // The self-assessment view has its own copy of the checklist.
    let own = state.workspace.self_assessment.store().get("3").unwrap();
    assert_eq!(own.evaluation_score, None);
}

#[test]
fn item_commands_need_an_assessment_view() {
    let mut state = state();
    assert!(run(&mut state, "items").is_err());
    assert!(run(&mut state, "open 1").is_err());
}

#[test]
fn assignment_needs_all_three_fields() {
    let mut state = state();
    let err = run(&mut state, "assign 5 2").unwrap_err();
    assert!(err.contains("evaluator"), "{err}");

    let out = run(&mut state, "assign 5 2 3").unwrap();
    assert!(out.contains("Michael Brown"), "{out}");
    assert_eq!(run(&mut state, "lookup 5 2").unwrap(), "Michael Brown");
    assert_eq!(run(&mut state, "lookup 6 2").unwrap(), "Not Assigned");
    assert!(run(&mut state, "assign 5 2 1").is_err());
    assert_eq!(state.workspace.rooms.get("5").unwrap().assigned_evaluators, 1);
    assert_eq!(state.current_view(), View::Assignment);
}

#[test]
fn room_representative_cannot_leave_their_views() {
    let mut state = state();
    run(&mut state, "view users").unwrap();
    run(&mut state, "role room_representative").unwrap();
    assert_eq!(state.current_view(), View::Dashboard);

    assert!(run(&mut state, "users").is_err());
    assert!(run(&mut state, "view rooms").is_err());
    assert!(run(&mut state, "matrix").is_err());
    run(&mut state, "view self-assessment").unwrap();
    run(&mut state, "open 3").unwrap();
}

#[test]
fn evaluator_can_browse_rooms() {
    let mut state = state();
    run(&mut state, "role evaluator").unwrap();
    let rooms = run(&mut state, "rooms").unwrap();
    assert!(rooms.contains("## Emergency Department"), "{rooms}");
    assert!(run(&mut state, "view self-assessment").is_err());
}

#[test]
fn events_filter_by_tab() {
    let mut state = state();
    let upcoming = run(&mut state, "events upcoming").unwrap();
    assert!(upcoming.contains("Q3 2023 Assessment"));
    assert!(!upcoming.contains("Q2 2023 Assessment"));

    let completed = run(&mut state, "events completed").unwrap();
    assert!(completed.contains("Q1 2023 Assessment"));

    run(&mut state, "archive 2").unwrap();
    let active = run(&mut state, "events active").unwrap();
    assert!(!active.contains("Emergency Department Audit"));
}

#[test]
fn new_event_checks_dates() {
    let mut state = state();
    assert!(run(&mut state, "new-event Audit | 2023-07-01 | 2023-06-01").is_err());
    let err = run(&mut state, "new-event Audit | 2023-07-01 |").unwrap_err();
    assert!(err.contains("end_date"), "{err}");

    let out = run(&mut state, "new-event Q4 2023 Assessment | 2023-10-01 | 2023-12-31").unwrap();
    assert!(out.contains("#5"), "{out}");
    assert!(out.contains("draft"), "{out}");
}

#[test]
fn new_user_reports_missing_fields() {
    let mut state = state();
    let err = run(&mut state, "new-user bob | | bob@example.com |").unwrap_err();
    assert!(err.contains("full_name, role"), "{err}");

    run(&mut state, "new-user bob | Bob Hartono | bob@example.com | evaluator").unwrap();
    let evaluators = run(&mut state, "users evaluator").unwrap();
    assert!(evaluators.contains("Bob Hartono"));
    assert!(run(&mut state, "new-user bob | Bob Two | b2@example.com | admin").is_err());
}

#[test]
fn notify_persists_to_config_dir() {
    let dir = tempfile::tempdir().unwrap();
    let mut state = state().with_config_dir(Some(dir.path().to_path_buf()));

    run(&mut state, "notify weekly_report off").unwrap();
    assert!(!state.config.notifications.weekly_report);
    assert!(run(&mut state, "notify sms on").is_err());

    let saved = load_config_from(&dir.path().join("config.json")).unwrap();
    assert!(!saved.notifications.weekly_report);
    assert!(saved.notifications.email);
}

#[test]
fn dashboard_summarizes_workspace() {
    let mut state = state();
    let out = run(&mut state, "dashboard").unwrap();
    assert!(out.contains("Active events: 2"), "{out}");
    assert!(out.contains("Users: 5"), "{out}");
}

#[test]
fn summary_renders_one_standard() {
    let mut state = state();
    run(&mut state, "view self-assessment").unwrap();
    let summary = run(&mut state, "summary 1").unwrap();
    assert!(summary.starts_with("## PS Patient Safety"), "{summary}");
    assert!(summary.contains("### Medication Safety"), "{summary}");
    assert!(run(&mut state, "summary 42").is_err());
}

#[test]
fn items_show_the_score_of_the_current_mode() {
    let mut state = state();
    run(&mut state, "view self-assessment").unwrap();
    let own = run(&mut state, "items").unwrap();
    assert!(own.contains("[x] #1 PS.01 1.1 Medication Administration score: 10/10"), "{own}");
    assert!(own.contains("[ ] #3 PS.02 2.1 Hand Hygiene score: -/10"), "{own}");
    assert!(!own.contains(" self: "), "{own}");

    run(&mut state, "view evaluation").unwrap();
    let evaluated = run(&mut state, "items").unwrap();
    assert!(
        evaluated.contains("[ ] #3 PS.02 2.1 Hand Hygiene score: -/10 self: 10"),
        "{evaluated}"
    );
    assert!(evaluated.contains("[x] #2 PS.01 1.2 Medication Storage score: 5/10 self: 5"), "{evaluated}");
}

#[test]
fn mark_room_copies_assessment_progress() {
    let mut state = state();
    let out = run(&mut state, "mark-room 5").unwrap();
    assert_eq!(out, "Room #5 Medical Ward: self-assessment In Progress, evaluation In Progress");
    assert_eq!(state.current_view(), View::Rooms);

    run(&mut state, "view self-assessment").unwrap();
    for id in ["3", "4", "5"] {
        run(&mut state, &format!("open {id}")).unwrap();
        run(&mut state, "score 10").unwrap();
        run(&mut state, "save").unwrap();
    }
    let out = run(&mut state, "mark-room 6").unwrap();
    assert!(out.contains("self-assessment Completed, evaluation In Progress"), "{out}");
    assert!(run(&mut state, "mark-room 42").is_err());
    assert!("mark-room".parse::<Command>().is_err());

    run(&mut state, "role room_representative").unwrap();
    assert!(run(&mut state, "mark-room 5").is_err());
}

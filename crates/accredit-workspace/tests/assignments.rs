use accredit_core::models::assignment::NewAssignment;
use accredit_workspace::Workspace;
use accredit_workspace::assignments::{AssignmentMatrix, NOT_ASSIGNED};
use accredit_workspace::error::WorkspaceError;
use accredit_workspace::seed;

fn choose(room: &str, standard: &str, evaluator: &str) -> NewAssignment {
    NewAssignment {
        room_id: Some(room.to_string()),
        standard_id: Some(standard.to_string()),
        evaluator_id: Some(evaluator.to_string()),
    }
}

#[test]
fn create_then_lookup_returns_evaluator_name() {
    let mut matrix = AssignmentMatrix::new(seed::evaluators(), Vec::new());
    assert_eq!(matrix.lookup("1", "1"), NOT_ASSIGNED);

    let created = matrix.create(choose("1", "1", "2")).unwrap();
    assert_eq!(created.id, "1");
    assert_eq!(matrix.lookup("1", "1"), "Sarah Williams");
    assert!(matrix.is_assigned("1", "1"));
    assert!(!matrix.is_assigned("1", "2"));
}

#[test]
fn second_assignment_for_same_pair_is_rejected() {
    let mut matrix = AssignmentMatrix::new(seed::evaluators(), Vec::new());
    matrix.create(choose("1", "1", "2")).unwrap();

    let err = matrix.create(choose("1", "1", "3")).unwrap_err();
    assert!(matches!(err, WorkspaceError::AlreadyAssigned { .. }));
    assert_eq!(matrix.list().len(), 1);
    assert_eq!(matrix.lookup("1", "1"), "Sarah Williams");
}

#[test]
fn missing_fields_are_reported_not_ignored() {
    let mut matrix = AssignmentMatrix::new(seed::evaluators(), Vec::new());
    let err = matrix
        .create(NewAssignment {
            room_id: Some("2".to_string()),
            standard_id: None,
            evaluator_id: Some(" ".to_string()),
        })
        .unwrap_err();

    match err {
        WorkspaceError::Validation { entity, missing } => {
            assert_eq!(entity, "assignment");
            assert_eq!(missing, vec!["standard", "evaluator"]);
        }
        other => panic!("expected validation error, got {other:?}"),
    }
    assert!(matrix.list().is_empty());
}

#[test]
fn unknown_evaluator_is_not_found() {
    let mut matrix = AssignmentMatrix::new(seed::evaluators(), Vec::new());
    let err = matrix.create(choose("1", "1", "9")).unwrap_err();
    assert!(matches!(err, WorkspaceError::NotFound { kind: "evaluator", .. }));
}

#[test]
fn lookup_falls_back_when_evaluator_is_gone() {
    let mut assignments = seed::assignments();
    assignments[0].evaluator_id = "77".to_string();
    let matrix = AssignmentMatrix::new(seed::evaluators(), assignments);
    assert_eq!(matrix.lookup("1", "1"), NOT_ASSIGNED);
}

#[test]
fn evaluator_loads_count_distinct_rooms() {
    let matrix = AssignmentMatrix::new(seed::evaluators(), seed::assignments());
    let loads: Vec<u32> = matrix.evaluators().iter().map(|e| e.assigned_rooms).collect();
    // Robert covers rooms 1, 2 and 4; Sarah 1 and 2; Michael 3 and 4; Emily 4.
    assert_eq!(loads, vec![3, 2, 2, 1]);
    assert_eq!(matrix.assignments_for("1").len(), 3);
    assert_eq!(matrix.evaluators_in_room("4"), 3);
}

#[test]
fn workspace_checks_room_and_standard() {
    let mut workspace = Workspace::seeded().unwrap();

    let err = workspace.create_assignment(choose("99", "1", "1")).unwrap_err();
    assert!(matches!(err, WorkspaceError::NotFound { kind: "room", .. }));

    let err = workspace.create_assignment(choose("5", "42", "1")).unwrap_err();
    assert!(matches!(err, WorkspaceError::NotFound { kind: "standard", .. }));

    let created = workspace.create_assignment(choose("5", "5", "4")).unwrap();
    assert_eq!(created.id, "9");
    assert_eq!(workspace.assignments.lookup("5", "5"), "Emily Davis");
    assert_eq!(workspace.rooms.get("5").unwrap().assigned_evaluators, 1);
}

#[test]
fn grid_has_one_column_per_standard_grouped_by_unit() {
    let workspace = Workspace::seeded().unwrap();
    let (standards, grid) = workspace.assignment_grid();

    assert_eq!(standards.len(), 5);
    let units: Vec<&str> = grid.keys().copied().collect();
    assert_eq!(
        units,
        vec!["Outpatient Department", "Emergency Department", "Inpatient Department"]
    );

    let outpatient = grid.get("Outpatient Department").unwrap();
    let surgical = &outpatient[0];
    assert_eq!(surgical.room.room_name, "Surgical Clinic");
    assert_eq!(
        surgical.evaluators,
        vec!["Robert Johnson", "Sarah Williams", NOT_ASSIGNED, NOT_ASSIGNED, NOT_ASSIGNED]
    );
}

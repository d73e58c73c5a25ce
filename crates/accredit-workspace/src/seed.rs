//! Fixed sample data loaded at start: one surgical clinic's Q2 2023
//! assessment, six rooms across three departments, four evaluators.

use accredit_core::models::assessment_item::AssessmentItem;
use accredit_core::models::assignment::{Assignment, Evaluator};
use accredit_core::models::event::{AssessmentEvent, EventStatus};
use accredit_core::models::evidence::Evidence;
use accredit_core::models::room::{ProgressStatus, Room};
use accredit_core::models::score::Score;
use accredit_core::models::user::{Role, User};
use accredit_standards::standards::patient_safety::PatientSafety;
use accredit_standards::standards::quality_improvement::QualityImprovement;
use accredit_standards::Standard;
use jiff::civil::date;

use crate::error::WorkspaceError;

fn base_checklist() -> Vec<AssessmentItem> {
    let mut items = PatientSafety.checklist(1);
    let next = items.len() as u32 + 1;
    items.extend(QualityImprovement.checklist(next));
    items
}

fn self_assess(
    item: &mut AssessmentItem,
    score: Score,
    evidence: Evidence,
    notes: &str,
) {
    item.self_assessment_score = Some(score);
    item.self_assessment_evidence = Some(evidence);
    item.self_assessment_notes = Some(notes.to_string());
}

fn evaluate(item: &mut AssessmentItem, score: Score, notes: &str) {
    item.evaluation_score = Some(score);
    item.evaluation_notes = Some(notes.to_string());
}

/// The clinic's own form: two of five checkpoints answered so far.
pub fn self_assessment_items() -> Result<Vec<AssessmentItem>, WorkspaceError> {
    let mut items = base_checklist();
    self_assess(
        &mut items[0],
        Score::Met,
        Evidence::file("medication_policy.pdf")?,
        "All medication administration protocols are documented and followed.",
    );
    self_assess(
        &mut items[1],
        Score::Partial,
        Evidence::link("https://example.com/storage-guidelines")?,
        "Some medications are not stored at the correct temperature.",
    );
    Ok(items)
}

/// The evaluator's form: self-assessment complete, two checkpoints reviewed.
pub fn evaluation_items() -> Result<Vec<AssessmentItem>, WorkspaceError> {
    let mut items = self_assessment_items()?;
    evaluate(
        &mut items[0],
        Score::Met,
        "Verified documentation and observed proper medication administration protocols.",
    );
    evaluate(
        &mut items[1],
        Score::Partial,
        "Confirmed issues with temperature control in medication storage area.",
    );
    self_assess(
        &mut items[2],
        Score::Met,
        Evidence::file("hand_hygiene_policy.pdf")?,
        "Hand hygiene stations available and staff trained on proper procedures.",
    );
    self_assess(
        &mut items[3],
        Score::Met,
        Evidence::link("https://example.com/isolation-procedures")?,
        "Isolation procedures are well-documented and followed.",
    );
    self_assess(
        &mut items[4],
        Score::Partial,
        Evidence::file("data_collection_process.pdf")?,
        "Data collection process exists but is not consistently followed.",
    );
    Ok(items)
}

pub fn events() -> Vec<AssessmentEvent> {
    let event = |id: &str, name: &str, description: &str, start, end, status| AssessmentEvent {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        start_date: start,
        end_date: end,
        status,
    };
    let quarterly = "Quarterly assessment for all departments";
    vec![
        event("1", "Q2 2023 Assessment", quarterly, date(2023, 4, 1), date(2023, 6, 30), EventStatus::Active),
        event(
            "2",
            "Emergency Department Audit",
            "Special audit for emergency department",
            date(2023, 5, 15),
            date(2023, 6, 15),
            EventStatus::Active,
        ),
        event("3", "Q3 2023 Assessment", quarterly, date(2023, 7, 1), date(2023, 9, 30), EventStatus::Draft),
        event("4", "Q1 2023 Assessment", quarterly, date(2023, 1, 1), date(2023, 3, 31), EventStatus::Completed),
    ]
}

pub fn rooms() -> Vec<Room> {
    use ProgressStatus::{Completed, InProgress, NotStarted};

    let room = |id: &str, unit: &str, name: &str, self_status, eval_status| Room {
        id: id.to_string(),
        unit_name: unit.to_string(),
        room_name: name.to_string(),
        self_assessment_status: self_status,
        evaluation_status: eval_status,
        assigned_evaluators: 0,
    };
    vec![
        room("1", "Outpatient Department", "Surgical Clinic", Completed, InProgress),
        room("2", "Outpatient Department", "Medical Clinic", Completed, Completed),
        room("3", "Emergency Department", "Triage Area", InProgress, NotStarted),
        room("4", "Emergency Department", "Resuscitation Room", Completed, InProgress),
        room("5", "Inpatient Department", "Medical Ward", NotStarted, NotStarted),
        room("6", "Inpatient Department", "Surgical Ward", NotStarted, NotStarted),
    ]
}

pub fn users() -> Vec<User> {
    let user = |id: &str, username: &str, full_name: &str, role, assigned_rooms, last_login| User {
        id: id.to_string(),
        username: username.to_string(),
        full_name: full_name.to_string(),
        email: format!("{username}@example.com"),
        role,
        assigned_rooms,
        last_login: Some(last_login),
    };
    vec![
        user("1", "admin", "Admin User", Role::Admin, None, date(2023, 6, 15)),
        user("2", "john.doe", "John Doe", Role::RoomRepresentative, Some(3), date(2023, 6, 20)),
        user("3", "jane.smith", "Jane Smith", Role::RoomRepresentative, Some(2), date(2023, 6, 18)),
        user("4", "robert.johnson", "Robert Johnson", Role::Evaluator, Some(5), date(2023, 6, 19)),
        user("5", "sarah.williams", "Sarah Williams", Role::Evaluator, Some(4), date(2023, 6, 17)),
    ]
}

pub fn evaluators() -> Vec<Evaluator> {
    [
        ("1", "Robert Johnson"),
        ("2", "Sarah Williams"),
        ("3", "Michael Brown"),
        ("4", "Emily Davis"),
    ]
    .into_iter()
    .map(|(id, name)| Evaluator {
        id: id.to_string(),
        name: name.to_string(),
        assigned_rooms: 0,
    })
    .collect()
}

pub fn assignments() -> Vec<Assignment> {
    // (room, standard, evaluator)
    [
        ("1", "1", "1"),
        ("1", "2", "2"),
        ("2", "1", "1"),
        ("2", "2", "2"),
        ("3", "3", "3"),
        ("4", "1", "1"),
        ("4", "3", "3"),
        ("4", "4", "4"),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (room_id, standard_id, evaluator_id))| Assignment {
        id: (i + 1).to_string(),
        room_id: room_id.to_string(),
        standard_id: standard_id.to_string(),
        evaluator_id: evaluator_id.to_string(),
    })
    .collect()
}

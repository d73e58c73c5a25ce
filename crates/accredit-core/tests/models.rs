use accredit_core::error::CoreError;
use accredit_core::models::event::EventStatus;
use accredit_core::models::evidence::{Evidence, EvidenceType};
use accredit_core::models::score::Score;
use accredit_core::models::user::{Role, User};

#[test]
fn evidence_variant_is_explicit() {
    let file = Evidence::file("medication_policy.pdf").unwrap();
    let link = Evidence::link("https://example.com/storage-guidelines").unwrap();

    assert!(!file.is_link());
    assert!(link.is_link());
    assert_eq!(file.label(), "medication_policy.pdf");

    // A file whose name happens to mention http stays a file.
    let odd = Evidence::file("http_notes.pdf").unwrap();
    assert!(!odd.is_link());
}

#[test]
fn evidence_rejects_bad_input() {
    assert!(matches!(Evidence::file("   "), Err(CoreError::InvalidEvidence(_))));
    assert!(matches!(
        Evidence::link("example.com/guide"),
        Err(CoreError::InvalidEvidence(_))
    ));
    assert!(Evidence::link("https://").is_err());
}

#[test]
fn evidence_serializes_with_kind_tag() {
    let link = Evidence::link("https://example.com/isolation-procedures").unwrap();
    let json = serde_json::to_value(&link).unwrap();
    assert_eq!(json["kind"], "link");
    assert_eq!(json["url"], "https://example.com/isolation-procedures");

    let back: Evidence =
        serde_json::from_str(r#"{"kind":"file","name":"hand_hygiene_policy.pdf"}"#).unwrap();
    assert_eq!(back, Evidence::file("hand_hygiene_policy.pdf").unwrap());
}

#[test]
fn evidence_type_permits() {
    let file = Evidence::file("a.pdf").unwrap();
    let link = Evidence::link("https://example.com").unwrap();

    assert!(EvidenceType::File.permits(&file));
    assert!(!EvidenceType::File.permits(&link));
    assert!(EvidenceType::Link.permits(&link));
    assert!(!EvidenceType::Link.permits(&file));
    assert!(EvidenceType::Both.permits(&file));
    assert!(EvidenceType::Both.permits(&link));
}

#[test]
fn roles_parse_from_wire_names() {
    assert_eq!("room_representative".parse::<Role>().unwrap(), Role::RoomRepresentative);
    assert!(matches!("superuser".parse::<Role>(), Err(CoreError::UnknownRole(_))));
    assert_eq!(serde_json::to_string(&Role::Evaluator).unwrap(), "\"evaluator\"");
}

#[test]
fn user_initials() {
    let user = User {
        id: "4".to_string(),
        username: "robert.johnson".to_string(),
        full_name: "Robert  johnson".to_string(),
        email: "robert.johnson@example.com".to_string(),
        role: Role::Evaluator,
        assigned_rooms: Some(5),
        last_login: None,
    };
    assert_eq!(user.initials(), "RJ");
}

#[test]
fn only_three_scores_are_accepted() {
    for value in 0..=u8::MAX {
        let parsed = Score::try_from(value);
        match value {
            0 | 5 | 10 => assert_eq!(parsed.unwrap().value(), value),
            _ => assert!(matches!(parsed, Err(CoreError::InvalidScore(v)) if v == value)),
        }
    }
}

#[test]
fn core_errors_name_the_bad_input() {
    assert_eq!(
        Score::try_from(7).unwrap_err().to_string(),
        "invalid score 7: expected one of 0, 5 or 10"
    );
    assert_eq!(
        "paused".parse::<EventStatus>().unwrap_err().to_string(),
        "unknown event status: paused"
    );
    assert!(matches!("auditor".parse::<Role>(), Err(CoreError::UnknownRole(r)) if r == "auditor"));
}

#[test]
fn score_serializes_as_bare_number() {
    assert_eq!(serde_json::to_string(&Score::Partial).unwrap(), "5");
    assert_eq!(serde_json::from_str::<Score>("10").unwrap(), Score::Met);
    assert!(serde_json::from_str::<Score>("7").is_err());
}

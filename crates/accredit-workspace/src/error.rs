use accredit_core::error::CoreError;
use accredit_core::models::assessment_item::AssessmentMode;
use accredit_core::models::evidence::EvidenceType;
use accredit_standards::error::StandardError;
use jiff::civil::Date;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorkspaceError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    #[error("cannot create {entity}: missing {}", .missing.join(", "))]
    Validation {
        entity: &'static str,
        missing: Vec<&'static str>,
    },

    #[error("end date {end} is before start date {start}")]
    InvalidDates { start: Date, end: Date },

    #[error("duplicate id: {0}")]
    DuplicateId(String),

    #[error("room {room_id} already has an evaluator for standard {standard_id}")]
    AlreadyAssigned {
        room_id: String,
        standard_id: String,
    },

    #[error("username already taken: {0}")]
    UsernameTaken(String),

    #[error("item {id} is already open for editing")]
    EditorBusy { id: String },

    #[error("no item is open for editing")]
    NoOpenDraft,

    #[error("{field} is read-only in {mode} mode")]
    ReadOnlyField {
        field: &'static str,
        mode: AssessmentMode,
    },

    #[error("item {id} accepts {evidence_type} evidence only")]
    EvidenceNotPermitted {
        id: String,
        evidence_type: EvidenceType,
    },

    #[error("catalog mismatch: {0}")]
    Catalog(#[from] StandardError),

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl WorkspaceError {
    pub(crate) fn not_found(kind: &'static str, id: &str) -> Self {
        WorkspaceError::NotFound {
            kind,
            id: id.to_string(),
        }
    }
}

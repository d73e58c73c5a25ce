use accredit_core::models::evidence::EvidenceType;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// A single measurable checkpoint (an "EP") within an evaluation element.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Checkpoint {
    pub number: String,
    pub sub_point: String,
    pub title: String,
    pub max_weight: u32,
    pub evidence_type: EvidenceType,
}

/// A sub-category of a standard, grouping related checkpoints.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EvaluationElement {
    pub id: String,
    pub name: String,
    pub checkpoints: Vec<Checkpoint>,
}

/// Compact description of a standard, safe to hand to the front end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StandardInfo {
    pub id: String,
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub item_id: String,
    pub standard_id: String,
    pub message: String,
}

/// Shorthand for the static checkpoint tables in `standards/`.
pub(crate) fn checkpoint(
    number: &str,
    sub_point: &str,
    title: &str,
    evidence_type: EvidenceType,
) -> Checkpoint {
    Checkpoint {
        number: number.to_string(),
        sub_point: sub_point.to_string(),
        title: title.to_string(),
        max_weight: 10,
        evidence_type,
    }
}

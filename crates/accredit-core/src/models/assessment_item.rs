use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::evidence::{Evidence, EvidenceType};
use super::score::Score;

/// One scoring-checklist entry of an accreditation assessment.
///
/// The self-assessment fields are filled in by the room being assessed; the
/// evaluation fields by the external evaluator reviewing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentItem {
    pub id: String,
    pub standard: String,
    pub evaluation_element: String,
    pub title: String,
    pub number: String,
    pub sub_point: String,
    pub max_weight: u32,
    pub evidence_type: EvidenceType,
    #[serde(default)]
    #[ts(type = "0 | 5 | 10 | null")]
    pub self_assessment_score: Option<Score>,
    #[serde(default)]
    pub self_assessment_evidence: Option<Evidence>,
    #[serde(default)]
    pub self_assessment_notes: Option<String>,
    #[serde(default)]
    #[ts(type = "0 | 5 | 10 | null")]
    pub evaluation_score: Option<Score>,
    #[serde(default)]
    pub evaluation_notes: Option<String>,
}

impl AssessmentItem {
    /// "Complete" from the room's point of view.
    pub fn is_self_assessed(&self) -> bool {
        self.self_assessment_score.is_some()
    }

    pub fn is_evaluated(&self) -> bool {
        self.evaluation_score.is_some()
    }

    /// `PS.01 1.1`-style reference shown next to the title.
    pub fn reference(&self) -> String {
        format!("{} {}", self.number, self.sub_point)
    }
}

/// Which side of the assessment a view is working on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AssessmentMode {
    SelfAssessment,
    Evaluation,
}

impl AssessmentMode {
    /// Whether `item` has a recorded score for this mode.
    pub fn is_done(self, item: &AssessmentItem) -> bool {
        match self {
            AssessmentMode::SelfAssessment => item.is_self_assessed(),
            AssessmentMode::Evaluation => item.is_evaluated(),
        }
    }

    pub fn score_of(self, item: &AssessmentItem) -> Option<Score> {
        match self {
            AssessmentMode::SelfAssessment => item.self_assessment_score,
            AssessmentMode::Evaluation => item.evaluation_score,
        }
    }
}

impl fmt::Display for AssessmentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssessmentMode::SelfAssessment => f.write_str("self-assessment"),
            AssessmentMode::Evaluation => f.write_str("evaluation"),
        }
    }
}

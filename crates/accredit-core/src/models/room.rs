use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::completion::Completion;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ProgressStatus {
    NotStarted,
    InProgress,
    Completed,
}

impl From<&Completion> for ProgressStatus {
    fn from(completion: &Completion) -> Self {
        if completion.completed == 0 {
            ProgressStatus::NotStarted
        } else if completion.completed >= completion.total {
            ProgressStatus::Completed
        } else {
            ProgressStatus::InProgress
        }
    }
}

impl fmt::Display for ProgressStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ProgressStatus::NotStarted => "Not Started",
            ProgressStatus::InProgress => "In Progress",
            ProgressStatus::Completed => "Completed",
        };
        f.write_str(s)
    }
}

/// A room (clinic, ward, triage area) within a hospital unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Room {
    pub id: String,
    pub unit_name: String,
    pub room_name: String,
    pub self_assessment_status: ProgressStatus,
    pub evaluation_status: ProgressStatus,
    pub assigned_evaluators: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewRoom {
    pub unit_name: Option<String>,
    pub room_name: Option<String>,
}

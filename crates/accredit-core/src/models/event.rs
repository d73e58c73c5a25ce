use std::fmt;
use std::str::FromStr;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum EventStatus {
    Draft,
    Active,
    Completed,
    Archived,
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EventStatus::Draft => "draft",
            EventStatus::Active => "active",
            EventStatus::Completed => "completed",
            EventStatus::Archived => "archived",
        };
        f.write_str(s)
    }
}

impl FromStr for EventStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(EventStatus::Draft),
            "active" => Ok(EventStatus::Active),
            "completed" => Ok(EventStatus::Completed),
            "archived" => Ok(EventStatus::Archived),
            other => Err(CoreError::UnknownEventStatus(other.to_string())),
        }
    }
}

/// An assessment round (e.g. "Q2 2023 Assessment") spanning a date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentEvent {
    pub id: String,
    pub name: String,
    pub description: String,
    pub start_date: Date,
    pub end_date: Date,
    pub status: EventStatus,
}

impl AssessmentEvent {
    /// True when the event ends between `today` and `today + days`, inclusive.
    pub fn ends_within(&self, today: Date, days: i64) -> bool {
        let horizon = today.saturating_add(jiff::Span::new().days(days));
        self.end_date >= today && self.end_date <= horizon
    }
}

/// Form input for a new event. Name and both dates are required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewEvent {
    pub name: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
}

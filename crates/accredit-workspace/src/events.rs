use std::fmt;
use std::str::FromStr;

use accredit_core::models::event::{AssessmentEvent, EventStatus, NewEvent};
use jiff::civil::Date;

use crate::error::WorkspaceError;
use crate::ids::{next_id, required};

/// Dashboard tabs over the event list. Every event falls in exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventTab {
    Active,
    Upcoming,
    Completed,
}

impl EventTab {
    pub fn contains(self, event: &AssessmentEvent, today: Date) -> bool {
        match (self, event.status) {
            (EventTab::Active, EventStatus::Active) => event.start_date <= today,
            (EventTab::Upcoming, EventStatus::Draft) => true,
            (EventTab::Upcoming, EventStatus::Active) => event.start_date > today,
            (EventTab::Completed, EventStatus::Completed | EventStatus::Archived) => true,
            _ => false,
        }
    }
}

impl FromStr for EventTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(EventTab::Active),
            "upcoming" => Ok(EventTab::Upcoming),
            "completed" => Ok(EventTab::Completed),
            other => Err(format!("unknown event tab: {other}")),
        }
    }
}

impl fmt::Display for EventTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EventTab::Active => "active",
            EventTab::Upcoming => "upcoming",
            EventTab::Completed => "completed",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Default)]
pub struct EventRegistry {
    events: Vec<AssessmentEvent>,
}

impl EventRegistry {
    pub fn new(events: Vec<AssessmentEvent>) -> Self {
        Self { events }
    }

    pub fn list(&self) -> &[AssessmentEvent] {
        &self.events
    }

    pub fn get(&self, id: &str) -> Option<&AssessmentEvent> {
        self.events.iter().find(|e| e.id == id)
    }

    /// New events always start as drafts.
    pub fn create(&mut self, new: NewEvent) -> Result<&AssessmentEvent, WorkspaceError> {
        let mut missing = Vec::new();
        let name = required(new.name, "name", &mut missing);
        if new.start_date.is_none() {
            missing.push("start_date");
        }
        if new.end_date.is_none() {
            missing.push("end_date");
        }
        let (start_date, end_date) = match (new.start_date, new.end_date) {
            (Some(start), Some(end)) if missing.is_empty() => (start, end),
            _ => {
                return Err(WorkspaceError::Validation {
                    entity: "event",
                    missing,
                });
            }
        };
        if end_date < start_date {
            return Err(WorkspaceError::InvalidDates {
                start: start_date,
                end: end_date,
            });
        }

        let event = AssessmentEvent {
            id: next_id(self.events.iter().map(|e| e.id.as_str())),
            name,
            description: new.description.unwrap_or_default().trim().to_string(),
            start_date,
            end_date,
            status: EventStatus::Draft,
        };
        tracing::info!(id = %event.id, name = %event.name, "event created");
        self.events.push(event);

        let idx = self.events.len() - 1;
        Ok(&self.events[idx])
    }

    pub fn set_status(
        &mut self,
        id: &str,
        status: EventStatus,
    ) -> Result<&AssessmentEvent, WorkspaceError> {
        let event = self
            .events
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| WorkspaceError::not_found("event", id))?;
        let previous = event.status;
        event.status = status;
        tracing::info!(id, %previous, %status, "event status changed");
        Ok(event)
    }

    pub fn archive(&mut self, id: &str) -> Result<&AssessmentEvent, WorkspaceError> {
        self.set_status(id, EventStatus::Archived)
    }

    pub fn by_tab(&self, tab: EventTab, today: Date) -> Vec<&AssessmentEvent> {
        self.events
            .iter()
            .filter(|e| tab.contains(e, today))
            .collect()
    }
}

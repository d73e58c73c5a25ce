use accredit_core::completion::{Completion, completion};
use accredit_core::models::event::EventStatus;
use accredit_core::models::room::ProgressStatus;
use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::events::EventTab;
use crate::workspace::Workspace;

/// Active events ending this many days from today count as deadlines.
pub const DEADLINE_WINDOW_DAYS: i64 = 7;

/// Headline figures for the admin dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DashboardSummary {
    pub active_events: usize,
    pub upcoming_deadlines: usize,
    pub rooms_self_assessed: Completion,
    pub rooms_evaluated: Completion,
    pub users: usize,
}

impl DashboardSummary {
    pub fn summarize(workspace: &Workspace, today: Date) -> Self {
        let events = workspace.events.list();
        let rooms = workspace.rooms.list();

        Self {
            active_events: workspace.events.by_tab(EventTab::Active, today).len(),
            upcoming_deadlines: events
                .iter()
                .filter(|e| e.status == EventStatus::Active)
                .filter(|e| e.ends_within(today, DEADLINE_WINDOW_DAYS))
                .count(),
            rooms_self_assessed: completion(rooms, |r| {
                r.self_assessment_status == ProgressStatus::Completed
            }),
            rooms_evaluated: completion(rooms, |r| r.evaluation_status == ProgressStatus::Completed),
            users: workspace.users.list().len(),
        }
    }
}

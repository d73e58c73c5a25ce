//! Plain-text rendering of console views.

use accredit_core::completion::Completion;
use accredit_core::models::assessment_item::{AssessmentItem, AssessmentMode};
use accredit_core::models::event::AssessmentEvent;
use accredit_core::models::score::Score;
use accredit_core::models::user::User;
use accredit_workspace::dashboard::DashboardSummary;
use accredit_workspace::rooms::RoomRegistry;
use accredit_workspace::view::AssessmentView;
use accredit_workspace::Workspace;

use crate::config::{AdminConfig, NotificationPrefs};
use crate::navigation::View;

const BAR_WIDTH: usize = 20;

pub fn progress_bar(completion: &Completion) -> String {
    let filled = usize::from(completion.percentage) * BAR_WIDTH / 100;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

pub fn progress(completion: &Completion) -> String {
    format!(
        "Assessment Progress: {} of {} items completed ({}%)\n{}",
        completion.completed,
        completion.total,
        completion.percentage,
        progress_bar(completion)
    )
}

fn score_cell(score: Option<Score>) -> String {
    score.map_or_else(|| "-".to_string(), |s| s.value().to_string())
}

fn item_line(item: &AssessmentItem, mode: AssessmentMode) -> String {
    let score = mode.score_of(item);
    let marker = if score.is_some() { "x" } else { " " };
    let mut line = format!(
        "  [{marker}] #{} {} {} score: {}/{}",
        item.id,
        item.reference(),
        item.title,
        score_cell(score),
        item.max_weight
    );
    // Evaluators see what the room claimed next to their own score.
    if mode == AssessmentMode::Evaluation {
        line.push_str(&format!(" self: {}", score_cell(item.self_assessment_score)));
    }
    if let Some(evidence) = &item.self_assessment_evidence {
        line.push_str(&format!(" evidence: {evidence}"));
    }
    line
}

/// The checklist grouped by standard then element, headed by the progress card.
pub fn items(view: &AssessmentView) -> String {
    let mode = view.mode();
    let mut lines = vec![progress(&view.completion()), String::new()];
    for (standard, elements) in view.grouped().iter() {
        lines.push(format!("## {standard}"));
        for (element, items) in elements.iter() {
            lines.push(format!("### {element}"));
            lines.extend(items.iter().map(|item| item_line(item, mode)));
        }
    }
    lines.join("\n")
}

pub fn draft(item: &AssessmentItem, mode: AssessmentMode) -> String {
    let mut lines = vec![
        format!("Editing #{} {} {} ({mode})", item.id, item.reference(), item.title),
        format!("  evidence accepted: {}", item.evidence_type),
        format!("  self-assessment score: {}", score_cell(item.self_assessment_score)),
    ];
    if let Some(evidence) = &item.self_assessment_evidence {
        lines.push(format!("  evidence: {evidence}"));
    }
    if let Some(notes) = &item.self_assessment_notes {
        lines.push(format!("  self-assessment notes: {notes}"));
    }
    if mode == AssessmentMode::Evaluation {
        lines.push(format!("  evaluation score: {}", score_cell(item.evaluation_score)));
        if let Some(notes) = &item.evaluation_notes {
            lines.push(format!("  evaluation notes: {notes}"));
        }
    }
    lines.join("\n")
}

pub fn matrix(workspace: &Workspace) -> String {
    let (standards, grid) = workspace.assignment_grid();
    let header = standards
        .iter()
        .map(|s| s.code.as_str())
        .collect::<Vec<_>>()
        .join(" | ");
    let mut lines = vec![format!("Room | {header}")];
    for (unit, rows) in grid.iter() {
        lines.push(format!("## {unit}"));
        for row in rows {
            lines.push(format!("{} | {}", row.room.room_name, row.evaluators.join(" | ")));
        }
    }
    lines.push(String::new());
    lines.push("Evaluators:".to_string());
    for evaluator in workspace.assignments.evaluators() {
        lines.push(format!(
            "  {} ({}): {} rooms",
            evaluator.name, evaluator.id, evaluator.assigned_rooms
        ));
    }
    lines.join("\n")
}

pub fn events(events: &[&AssessmentEvent]) -> String {
    if events.is_empty() {
        return "No events.".to_string();
    }
    events
        .iter()
        .map(|e| {
            format!(
                "#{} {} [{}] {} to {}",
                e.id, e.name, e.status, e.start_date, e.end_date
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn rooms(registry: &RoomRegistry) -> String {
    let mut lines = Vec::new();
    for (unit, rooms) in registry.by_unit().iter() {
        lines.push(format!("## {unit}"));
        for room in rooms {
            lines.push(format!(
                "  #{} {}: self-assessment {}, evaluation {}, {} evaluators",
                room.id,
                room.room_name,
                room.self_assessment_status,
                room.evaluation_status,
                room.assigned_evaluators
            ));
        }
    }
    if lines.is_empty() {
        return "No rooms.".to_string();
    }
    lines.join("\n")
}

pub fn users(users: &[&User]) -> String {
    if users.is_empty() {
        return "No users.".to_string();
    }
    users
        .iter()
        .map(|u| {
            let last_login = u
                .last_login
                .map_or_else(|| "never".to_string(), |d| d.to_string());
            format!(
                "#{} {} ({}) {} <{}> {}, last login {last_login}",
                u.id,
                u.full_name,
                u.initials(),
                u.username,
                u.email,
                u.role.label()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn dashboard(summary: &DashboardSummary) -> String {
    [
        format!("Active events: {}", summary.active_events),
        format!("Upcoming deadlines: {}", summary.upcoming_deadlines),
        format!(
            "Rooms self-assessed: {}/{} ({}%)",
            summary.rooms_self_assessed.completed,
            summary.rooms_self_assessed.total,
            summary.rooms_self_assessed.percentage
        ),
        format!(
            "Rooms evaluated: {}/{} ({}%)",
            summary.rooms_evaluated.completed,
            summary.rooms_evaluated.total,
            summary.rooms_evaluated.percentage
        ),
        format!("Users: {}", summary.users),
    ]
    .join("\n")
}

pub fn settings(config: &AdminConfig) -> String {
    let profile = &config.profile;
    let mut lines = vec![
        format!("Profile: {} <{}>", profile.name, profile.email),
        format!("  role: {}", profile.role.label()),
        format!("  language: {:?}", profile.language),
        format!("  timezone: {}", profile.timezone),
        "Notifications:".to_string(),
    ];
    for key in NotificationPrefs::KEYS {
        let on = config.notifications.get(key).unwrap_or(false);
        lines.push(format!("  {key}: {}", if on { "on" } else { "off" }));
    }
    lines.push(format!(
        "Backups: {} ({:?})",
        if config.system.automatic_backups { "automatic" } else { "manual" },
        config.system.backup_frequency
    ));
    lines.join("\n")
}

pub fn navigation(entries: &[View], current: View) -> String {
    entries
        .iter()
        .map(|v| {
            let marker = if *v == current { ">" } else { " " };
            format!("{marker} {} (/{})", v.title(), v.path())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

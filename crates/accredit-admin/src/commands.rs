use std::str::FromStr;

use accredit_core::models::assessment_item::AssessmentMode;
use accredit_core::models::assignment::NewAssignment;
use accredit_core::models::evidence::Evidence;
use accredit_core::models::event::NewEvent;
use accredit_core::models::room::NewRoom;
use accredit_core::models::score::Score;
use accredit_core::models::user::{NewUser, Role};
use accredit_standards::get_standard;
use accredit_workspace::dashboard::DashboardSummary;
use accredit_workspace::editor::ItemEditor;
use accredit_workspace::error::WorkspaceError;
use accredit_workspace::events::EventTab;
use jiff::civil::Date;

use crate::navigation::{View, navigation};
use crate::render;
use crate::state::AdminState;

pub const HELP: &str = "\
view <path>                      open a view (dashboard, events, rooms, users,
                                 self-assessment, evaluation, assignment, settings)
nav                              list sidebar entries for the current role
role <role>                      act as admin, room_representative or evaluator
items | progress                 checklist or progress of the current assessment view
summary <standard id>            scores of one standard, by element
open <id>                        start editing an item
score <0|5|10>                   set the score for the current mode
evidence file <name>             attach a file as evidence (self-assessment)
evidence link <url>              attach a link as evidence (self-assessment)
notes <text>                     set notes for the current mode; empty clears
save | cancel                    commit or discard the open draft
assign <room> <standard> <eval>  assign an evaluator
lookup <room> <standard>         show who evaluates a room for a standard
matrix                           evaluator assignment grid
events [active|upcoming|completed]
new-event <name> | <start> | <end> [| <description>]
archive <event id>
rooms
new-room <unit> | <room>
mark-room <id>                   set a room's statuses from the two assessment views
users [role]
new-user <username> | <full name> | <email> | <role>
delete-user <id>
dashboard
settings
notify <key> on|off
help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Quit,
    View(View),
    Nav,
    Role(Role),
    Items,
    Progress,
    Summary(String),
    Open(String),
    Score(Score),
    Evidence(Evidence),
    Notes(String),
    Save,
    Cancel,
    Assign(NewAssignment),
    Lookup { room_id: String, standard_id: String },
    Matrix,
    Events(Option<EventTab>),
    NewEvent(NewEvent),
    Archive(String),
    Rooms,
    NewRoom(NewRoom),
    MarkRoom(String),
    Users(Option<Role>),
    NewUser(NewUser),
    DeleteUser(String),
    Dashboard,
    Settings,
    Notify { key: String, enabled: bool },
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Split a `|`-separated field list, keeping blanks so validation can name them.
fn fields(rest: &str) -> Vec<&str> {
    rest.split('|').map(str::trim).collect()
}

fn parse_date(value: Option<&str>) -> Result<Option<Date>, String> {
    match non_empty(value) {
        Some(s) => s
            .parse::<Date>()
            .map(Some)
            .map_err(|e| format!("invalid date '{s}': {e}")),
        None => Ok(None),
    }
}

fn required_arg<'a>(arg: Option<&'a str>, usage: &str) -> Result<&'a str, String> {
    arg.filter(|a| !a.is_empty())
        .ok_or_else(|| format!("usage: {usage}"))
}

impl FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();
        let mut args = rest.split_whitespace();

        let command = match word {
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            "view" => Command::View(View::from_path(rest)),
            "nav" => Command::Nav,
            "role" => {
                let role = required_arg(args.next(), "role <role>")?;
                Command::Role(role.parse::<Role>().map_err(|e| e.to_string())?)
            }
            "items" => Command::Items,
            "progress" => Command::Progress,
            "summary" => Command::Summary(required_arg(args.next(), "summary <standard id>")?.to_string()),
            "open" => Command::Open(required_arg(args.next(), "open <id>")?.to_string()),
            "score" => {
                let raw = required_arg(args.next(), "score <0|5|10>")?;
                let value: u8 = raw.parse().map_err(|_| format!("invalid score '{raw}'"))?;
                Command::Score(Score::try_from(value).map_err(|e| e.to_string())?)
            }
            "evidence" => {
                let kind = required_arg(args.next(), "evidence file|link <value>")?;
                let value = rest[kind.len()..].trim();
                let evidence = match kind {
                    "file" => Evidence::file(value),
                    "link" => Evidence::link(value),
                    other => return Err(format!("unknown evidence kind '{other}'")),
                };
                Command::Evidence(evidence.map_err(|e| e.to_string())?)
            }
            "notes" => Command::Notes(rest.to_string()),
            "save" => Command::Save,
            "cancel" => Command::Cancel,
            "assign" => Command::Assign(NewAssignment {
                room_id: args.next().map(str::to_string),
                standard_id: args.next().map(str::to_string),
                evaluator_id: args.next().map(str::to_string),
            }),
            "lookup" => {
                let room_id = required_arg(args.next(), "lookup <room> <standard>")?;
                let standard_id = required_arg(args.next(), "lookup <room> <standard>")?;
                Command::Lookup {
                    room_id: room_id.to_string(),
                    standard_id: standard_id.to_string(),
                }
            }
            "matrix" => Command::Matrix,
            "events" => Command::Events(args.next().map(EventTab::from_str).transpose()?),
            "new-event" => {
                let f = fields(rest);
                Command::NewEvent(NewEvent {
                    name: non_empty(f.first().copied()),
                    start_date: parse_date(f.get(1).copied())?,
                    end_date: parse_date(f.get(2).copied())?,
                    description: non_empty(f.get(3).copied()),
                })
            }
            "archive" => Command::Archive(required_arg(args.next(), "archive <event id>")?.to_string()),
            "rooms" => Command::Rooms,
            "new-room" => {
                let f = fields(rest);
                Command::NewRoom(NewRoom {
                    unit_name: non_empty(f.first().copied()),
                    room_name: non_empty(f.get(1).copied()),
                })
            }
            "mark-room" => Command::MarkRoom(required_arg(args.next(), "mark-room <id>")?.to_string()),
            "users" => Command::Users(
                args.next()
                    .map(Role::from_str)
                    .transpose()
                    .map_err(|e| e.to_string())?,
            ),
            "new-user" => {
                let f = fields(rest);
                let role = non_empty(f.get(3).copied())
                    .map(|r| r.parse::<Role>())
                    .transpose()
                    .map_err(|e| e.to_string())?;
                Command::NewUser(NewUser {
                    username: non_empty(f.first().copied()),
                    full_name: non_empty(f.get(1).copied()),
                    email: non_empty(f.get(2).copied()),
                    role,
                })
            }
            "delete-user" => {
                Command::DeleteUser(required_arg(args.next(), "delete-user <id>")?.to_string())
            }
            "dashboard" => Command::Dashboard,
            "settings" => Command::Settings,
            "notify" => {
                let key = required_arg(args.next(), "notify <key> on|off")?;
                let enabled = match args.next() {
                    Some("on") => true,
                    Some("off") => false,
                    _ => return Err("usage: notify <key> on|off".to_string()),
                };
                Command::Notify {
                    key: key.to_string(),
                    enabled,
                }
            }
            "" => return Err("empty command".to_string()),
            other => return Err(format!("unknown command '{other}', try help")),
        };
        Ok(command)
    }
}

/// The assessment mode to act on, or an error outside assessment views.
fn current_mode(state: &AdminState) -> Result<AssessmentMode, String> {
    state
        .assessment_mode()
        .ok_or_else(|| "open self-assessment or evaluation first".to_string())
}

pub fn execute(state: &mut AdminState, command: Command) -> Result<String, String> {
    match command {
        Command::Help => Ok(HELP.to_string()),
        Command::Quit => Ok(String::new()),
        Command::View(view) => {
            state.navigate(view)?;
            render_view(state, view)
        }
        Command::Nav => Ok(render::navigation(
            &navigation(state.role()),
            state.current_view(),
        )),
        Command::Role(role) => {
            state.switch_role(role);
            Ok(format!(
                "Acting as {}\n{}",
                role.label(),
                render::navigation(&navigation(role), state.current_view())
            ))
        }
        Command::Items => {
            let mode = current_mode(state)?;
            Ok(render::items(state.workspace.view(mode)))
        }
        Command::Progress => {
            let mode = current_mode(state)?;
            Ok(render::progress(&state.workspace.view(mode).completion()))
        }
        Command::Summary(standard_id) => {
            let mode = current_mode(state)?;
            let standard = get_standard(&standard_id)
                .ok_or_else(|| format!("unknown standard: {standard_id}"))?;
            Ok(standard.to_summary(state.workspace.view(mode).store().list_items()))
        }
        Command::Open(id) => {
            let mode = current_mode(state)?;
            let item = state
                .workspace
                .view_mut(mode)
                .open(&id)
                .map_err(|e| e.to_string())?;
            Ok(render::draft(item, mode))
        }
        Command::Score(score) => edit_draft(state, |editor, mode| match mode {
            AssessmentMode::SelfAssessment => editor.set_self_assessment_score(score),
            AssessmentMode::Evaluation => editor.set_evaluation_score(score),
        }),
        Command::Evidence(evidence) => {
            edit_draft(state, |editor, _| editor.set_self_assessment_evidence(evidence))
        }
        Command::Notes(notes) => edit_draft(state, |editor, mode| match mode {
            AssessmentMode::SelfAssessment => editor.set_self_assessment_notes(&notes),
            AssessmentMode::Evaluation => editor.set_evaluation_notes(&notes),
        }),
        Command::Save => {
            let mode = current_mode(state)?;
            let view = state.workspace.view_mut(mode);
            let id = view.save().map_err(|e| e.to_string())?;
            Ok(format!(
                "Saved item #{id}\n{}",
                render::progress(&view.completion())
            ))
        }
        Command::Cancel => {
            let mode = current_mode(state)?;
            match state.workspace.view_mut(mode).cancel() {
                Some(draft) => Ok(format!("Discarded changes to item #{}", draft.id)),
                None => Ok("Nothing to cancel".to_string()),
            }
        }
        Command::Assign(new) => {
            state.navigate(View::Assignment)?;
            let assignment = state
                .workspace
                .create_assignment(new)
                .map_err(|e| e.to_string())?;
            Ok(format!(
                "Assigned {} to room {} for standard {}",
                state.workspace.assignments.lookup(&assignment.room_id, &assignment.standard_id),
                assignment.room_id,
                assignment.standard_id
            ))
        }
        Command::Lookup {
            room_id,
            standard_id,
        } => {
            state.navigate(View::Assignment)?;
            Ok(state
                .workspace
                .assignments
                .lookup(&room_id, &standard_id)
                .to_string())
        }
        Command::Matrix => {
            state.navigate(View::Assignment)?;
            Ok(render::matrix(&state.workspace))
        }
        Command::Events(tab) => {
            state.navigate(View::Events)?;
            let events = match tab {
                Some(tab) => state.workspace.events.by_tab(tab, state.today),
                None => state.workspace.events.list().iter().collect(),
            };
            Ok(render::events(&events))
        }
        Command::NewEvent(new) => {
            state.navigate(View::Events)?;
            let event = state
                .workspace
                .events
                .create(new)
                .map_err(|e| e.to_string())?;
            Ok(format!("Created event #{} {} ({})", event.id, event.name, event.status))
        }
        Command::Archive(id) => {
            state.navigate(View::Events)?;
            let event = state
                .workspace
                .events
                .archive(&id)
                .map_err(|e| e.to_string())?;
            Ok(format!("Archived event #{} {}", event.id, event.name))
        }
        Command::Rooms => {
            state.navigate(View::Rooms)?;
            Ok(render::rooms(&state.workspace.rooms))
        }
        Command::NewRoom(new) => {
            state.navigate(View::Rooms)?;
            let room = state
                .workspace
                .rooms
                .create(new)
                .map_err(|e| e.to_string())?;
            Ok(format!("Created room #{} {} in {}", room.id, room.room_name, room.unit_name))
        }
        Command::MarkRoom(id) => {
            state.navigate(View::Rooms)?;
            let self_assessment = state.workspace.self_assessment.progress();
            let evaluation = state.workspace.evaluation.progress();
            let room = state
                .workspace
                .rooms
                .set_progress(&id, self_assessment, evaluation)
                .map_err(|e| e.to_string())?;
            Ok(format!(
                "Room #{} {}: self-assessment {}, evaluation {}",
                room.id, room.room_name, room.self_assessment_status, room.evaluation_status
            ))
        }
        Command::Users(role) => {
            state.navigate(View::Users)?;
            Ok(render::users(&state.workspace.users.by_role(role)))
        }
        Command::NewUser(new) => {
            state.navigate(View::Users)?;
            let user = state
                .workspace
                .users
                .create(new)
                .map_err(|e| e.to_string())?;
            Ok(format!("Created user #{} {}", user.id, user.username))
        }
        Command::DeleteUser(id) => {
            state.navigate(View::Users)?;
            let user = state
                .workspace
                .users
                .delete(&id)
                .map_err(|e| e.to_string())?;
            Ok(format!("Deleted user #{} {}", user.id, user.username))
        }
        Command::Dashboard => {
            state.navigate(View::Dashboard)?;
            render_view(state, View::Dashboard)
        }
        Command::Settings => {
            state.navigate(View::Settings)?;
            render_view(state, View::Settings)
        }
        Command::Notify { key, enabled } => {
            state.navigate(View::Settings)?;
            state
                .config
                .notifications
                .set(&key, enabled)
                .ok_or_else(|| format!("unknown notification '{key}'"))?;
            state.persist_config().map_err(|e| e.to_string())?;
            Ok(format!("{key}: {}", if enabled { "on" } else { "off" }))
        }
    }
}

fn edit_draft<F>(state: &mut AdminState, edit: F) -> Result<String, String>
where
    F: FnOnce(&mut ItemEditor, AssessmentMode) -> Result<(), WorkspaceError>,
{
    let mode = current_mode(state)?;
    let editor = state.workspace.view_mut(mode).editor_mut();
    edit(editor, mode).map_err(|e| e.to_string())?;
    match editor.draft() {
        Some(draft) => Ok(render::draft(draft, mode)),
        None => Err("no item is open".to_string()),
    }
}

fn render_view(state: &AdminState, view: View) -> Result<String, String> {
    let body = match view {
        View::Dashboard => {
            render::dashboard(&DashboardSummary::summarize(&state.workspace, state.today))
        }
        View::Events => {
            let events: Vec<_> = state.workspace.events.list().iter().collect();
            render::events(&events)
        }
        View::Rooms => render::rooms(&state.workspace.rooms),
        View::Users => render::users(&state.workspace.users.by_role(None)),
        View::SelfAssessment => render::items(&state.workspace.self_assessment),
        View::Evaluation => render::items(&state.workspace.evaluation),
        View::Assignment => render::matrix(&state.workspace),
        View::Settings => render::settings(&state.config),
    };
    Ok(format!("# {}\n{body}", view.title()))
}

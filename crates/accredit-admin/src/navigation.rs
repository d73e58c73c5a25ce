use std::collections::BTreeSet;
use std::fmt;

use accredit_core::models::user::Role;

/// A screen of the admin console, addressed by a path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum View {
    Dashboard,
    Events,
    Rooms,
    Users,
    SelfAssessment,
    Evaluation,
    Assignment,
    Settings,
}

/// Sidebar order.
pub const SIDEBAR: [View; 5] = [
    View::Dashboard,
    View::Events,
    View::Rooms,
    View::Users,
    View::Settings,
];

impl View {
    pub const ALL: [View; 8] = [
        View::Dashboard,
        View::Events,
        View::Rooms,
        View::Users,
        View::SelfAssessment,
        View::Evaluation,
        View::Assignment,
        View::Settings,
    ];

    pub fn path(self) -> &'static str {
        match self {
            View::Dashboard => "dashboard",
            View::Events => "events",
            View::Rooms => "rooms",
            View::Users => "users",
            View::SelfAssessment => "self-assessment",
            View::Evaluation => "evaluation",
            View::Assignment => "assignment",
            View::Settings => "settings",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::Events => "Assessment Events",
            View::Rooms => "Rooms",
            View::Users => "Users",
            View::SelfAssessment => "Self-Assessment",
            View::Evaluation => "External Evaluation",
            View::Assignment => "Evaluator Assignment",
            View::Settings => "Settings",
        }
    }

    /// Resolve a path like `/rooms` or `evaluation`. Empty and unknown
    /// paths land on the dashboard.
    pub fn from_path(path: &str) -> View {
        let segment = path.trim().trim_matches('/');
        View::ALL
            .into_iter()
            .find(|v| v.path() == segment)
            .unwrap_or(View::Dashboard)
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// The set of views a role may navigate to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capabilities {
    role: Role,
    views: BTreeSet<View>,
}

impl Capabilities {
    pub fn for_role(role: Role) -> Self {
        let views = match role {
            Role::Admin => View::ALL.into_iter().collect(),
            Role::RoomRepresentative => {
                BTreeSet::from([View::Dashboard, View::Events, View::SelfAssessment])
            }
            Role::Evaluator => BTreeSet::from([
                View::Dashboard,
                View::Events,
                View::Rooms,
                View::Evaluation,
            ]),
        };
        Self { role, views }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn allows(&self, view: View) -> bool {
        self.views.contains(&view)
    }

    pub fn views(&self) -> impl Iterator<Item = View> + '_ {
        self.views.iter().copied()
    }
}

/// Sidebar entries visible to `role`, in sidebar order.
pub fn navigation(role: Role) -> Vec<View> {
    let caps = Capabilities::for_role(role);
    SIDEBAR.into_iter().filter(|v| caps.allows(*v)).collect()
}

use std::path::PathBuf;

use accredit_core::models::assessment_item::AssessmentMode;
use accredit_core::models::user::Role;
use accredit_workspace::Workspace;
use jiff::civil::Date;

use crate::config::{self, AdminConfig};
use crate::navigation::{Capabilities, View};

/// Session state for the console: the workspace plus who is looking at it
/// and where.
pub struct AdminState {
    pub workspace: Workspace,
    pub config: AdminConfig,
    pub today: Date,
    capabilities: Capabilities,
    current_view: View,
    /// Where settings changes are persisted. `None` keeps them in memory.
    config_dir: Option<PathBuf>,
}

impl AdminState {
    pub fn new(workspace: Workspace, config: AdminConfig, today: Date) -> Self {
        let capabilities = Capabilities::for_role(config.profile.role);
        Self {
            workspace,
            config,
            today,
            capabilities,
            current_view: View::Dashboard,
            config_dir: None,
        }
    }

    pub fn with_config_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.config_dir = dir;
        self
    }

    pub fn role(&self) -> Role {
        self.capabilities.role()
    }

    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    pub fn current_view(&self) -> View {
        self.current_view
    }

    /// Switch the acting role. A view the new role cannot see falls back
    /// to the dashboard.
    pub fn switch_role(&mut self, role: Role) {
        self.capabilities = Capabilities::for_role(role);
        if !self.capabilities.allows(self.current_view) {
            self.current_view = View::Dashboard;
        }
        tracing::debug!(%role, view = %self.current_view, "role switched");
    }

    pub fn navigate(&mut self, view: View) -> Result<View, String> {
        if !self.capabilities.allows(view) {
            return Err(format!(
                "{} cannot open {}",
                self.role().label(),
                view.title()
            ));
        }
        self.current_view = view;
        Ok(view)
    }

    /// The assessment mode of the current view, if it is an assessment view.
    pub fn assessment_mode(&self) -> Option<AssessmentMode> {
        match self.current_view {
            View::SelfAssessment => Some(AssessmentMode::SelfAssessment),
            View::Evaluation => Some(AssessmentMode::Evaluation),
            _ => None,
        }
    }

    /// Persist the config if a directory was configured.
    pub fn persist_config(&self) -> eyre::Result<()> {
        match &self.config_dir {
            Some(dir) => config::save_config_to(dir, &self.config),
            None => Ok(()),
        }
    }
}

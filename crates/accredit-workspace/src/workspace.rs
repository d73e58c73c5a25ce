use accredit_core::grouping::Groups;
use accredit_core::models::assessment_item::AssessmentMode;
use accredit_core::models::assignment::{Assignment, NewAssignment};
use accredit_standards::catalog::StandardInfo;
use accredit_standards::{all_standards, check_items, get_standard};

use crate::assignments::{self, AssignmentMatrix, MatrixRow};
use crate::error::WorkspaceError;
use crate::events::EventRegistry;
use crate::items::ItemStore;
use crate::rooms::RoomRegistry;
use crate::seed;
use crate::users::UserDirectory;
use crate::view::AssessmentView;

/// Everything one admin session works on. Owned by the view layer and
/// passed around by reference.
#[derive(Debug, Clone)]
pub struct Workspace {
    pub self_assessment: AssessmentView,
    pub evaluation: AssessmentView,
    pub assignments: AssignmentMatrix,
    pub events: EventRegistry,
    pub rooms: RoomRegistry,
    pub users: UserDirectory,
}

impl Workspace {
    /// Build the workspace from the fixed sample data.
    pub fn seeded() -> Result<Self, WorkspaceError> {
        let self_items = seed::self_assessment_items()?;
        let evaluation_items = seed::evaluation_items()?;
        check_items(&self_items)?;
        check_items(&evaluation_items)?;

        let mut workspace = Self {
            self_assessment: AssessmentView::new(
                AssessmentMode::SelfAssessment,
                ItemStore::new(self_items)?,
            ),
            evaluation: AssessmentView::new(
                AssessmentMode::Evaluation,
                ItemStore::new(evaluation_items)?,
            ),
            assignments: AssignmentMatrix::new(seed::evaluators(), seed::assignments()),
            events: EventRegistry::new(seed::events()),
            rooms: RoomRegistry::new(seed::rooms()),
            users: UserDirectory::new(seed::users()),
        };
        workspace.sync_room_evaluators()?;

        tracing::info!(
            items = workspace.self_assessment.store().len(),
            rooms = workspace.rooms.list().len(),
            events = workspace.events.list().len(),
            "workspace seeded"
        );
        Ok(workspace)
    }

    pub fn view(&self, mode: AssessmentMode) -> &AssessmentView {
        match mode {
            AssessmentMode::SelfAssessment => &self.self_assessment,
            AssessmentMode::Evaluation => &self.evaluation,
        }
    }

    pub fn view_mut(&mut self, mode: AssessmentMode) -> &mut AssessmentView {
        match mode {
            AssessmentMode::SelfAssessment => &mut self.self_assessment,
            AssessmentMode::Evaluation => &mut self.evaluation,
        }
    }

    pub fn standards(&self) -> Vec<StandardInfo> {
        all_standards().iter().map(|s| s.info()).collect()
    }

    /// Assign an evaluator after checking that the room and standard exist.
    pub fn create_assignment(&mut self, new: NewAssignment) -> Result<Assignment, WorkspaceError> {
        let (room_id, standard_id, evaluator_id) = assignments::validate(new)?;
        if self.rooms.get(&room_id).is_none() {
            return Err(WorkspaceError::not_found("room", &room_id));
        }
        if get_standard(&standard_id).is_none() {
            return Err(WorkspaceError::not_found("standard", &standard_id));
        }

        let assignment = self
            .assignments
            .assign(room_id, standard_id, evaluator_id)?
            .clone();
        let count = self.assignments.evaluators_in_room(&assignment.room_id) as u32;
        self.rooms
            .set_assigned_evaluators(&assignment.room_id, count)?;
        Ok(assignment)
    }

    /// The evaluator grid: catalog standards as columns, rooms by unit as rows.
    pub fn assignment_grid(&self) -> (Vec<StandardInfo>, Groups<&str, Vec<MatrixRow<'_>>>) {
        let standards = self.standards();
        let ids: Vec<&str> = standards.iter().map(|s| s.id.as_str()).collect();
        let rows = self.assignments.rows(self.rooms.list(), &ids);
        (standards, rows)
    }

    fn sync_room_evaluators(&mut self) -> Result<(), WorkspaceError> {
        let counts: Vec<(String, u32)> = self
            .rooms
            .list()
            .iter()
            .map(|r| (r.id.clone(), self.assignments.evaluators_in_room(&r.id) as u32))
            .collect();
        for (id, count) in counts {
            self.rooms.set_assigned_evaluators(&id, count)?;
        }
        Ok(())
    }
}

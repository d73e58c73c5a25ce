use std::collections::HashSet;

use accredit_core::grouping::Groups;
use accredit_core::models::assignment::{Assignment, Evaluator, NewAssignment};
use accredit_core::models::room::Room;

use crate::error::WorkspaceError;
use crate::ids::{next_id, required};

/// Display value when a (room, standard) pair has no evaluator.
pub const NOT_ASSIGNED: &str = "Not Assigned";

/// Evaluators and their (room, standard) assignments.
#[derive(Debug, Clone, Default)]
pub struct AssignmentMatrix {
    evaluators: Vec<Evaluator>,
    assignments: Vec<Assignment>,
}

/// One room's line in the assignment grid. `evaluators` is aligned with the
/// standards the grid was built for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixRow<'a> {
    pub room: &'a Room,
    pub evaluators: Vec<&'a str>,
}

impl AssignmentMatrix {
    pub fn new(evaluators: Vec<Evaluator>, assignments: Vec<Assignment>) -> Self {
        let mut matrix = Self {
            evaluators,
            assignments,
        };
        matrix.recount_loads();
        matrix
    }

    pub fn evaluators(&self) -> &[Evaluator] {
        &self.evaluators
    }

    pub fn evaluator(&self, id: &str) -> Option<&Evaluator> {
        self.evaluators.iter().find(|e| e.id == id)
    }

    pub fn list(&self) -> &[Assignment] {
        &self.assignments
    }

    /// First assignment covering the pair.
    pub fn find(&self, room_id: &str, standard_id: &str) -> Option<&Assignment> {
        self.assignments
            .iter()
            .find(|a| a.covers(room_id, standard_id))
    }

    pub fn is_assigned(&self, room_id: &str, standard_id: &str) -> bool {
        self.find(room_id, standard_id).is_some()
    }

    /// Evaluator name for the pair, or [`NOT_ASSIGNED`].
    pub fn lookup(&self, room_id: &str, standard_id: &str) -> &str {
        self.find(room_id, standard_id)
            .and_then(|a| self.evaluator(&a.evaluator_id))
            .map_or(NOT_ASSIGNED, |e| e.name.as_str())
    }

    pub fn assignments_for(&self, evaluator_id: &str) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.evaluator_id == evaluator_id)
            .collect()
    }

    /// Distinct evaluators covering any standard in the room.
    pub fn evaluators_in_room(&self, room_id: &str) -> usize {
        self.assignments
            .iter()
            .filter(|a| a.room_id == room_id)
            .map(|a| a.evaluator_id.as_str())
            .collect::<HashSet<_>>()
            .len()
    }

    /// Form entry point: every field must be chosen.
    pub fn create(&mut self, new: NewAssignment) -> Result<&Assignment, WorkspaceError> {
        let (room_id, standard_id, evaluator_id) = validate(new)?;
        self.assign(room_id, standard_id, evaluator_id)
    }

    /// Record an assignment. The pair must not already be covered.
    pub fn assign(
        &mut self,
        room_id: String,
        standard_id: String,
        evaluator_id: String,
    ) -> Result<&Assignment, WorkspaceError> {
        if self.evaluator(&evaluator_id).is_none() {
            return Err(WorkspaceError::not_found("evaluator", &evaluator_id));
        }
        if self.is_assigned(&room_id, &standard_id) {
            return Err(WorkspaceError::AlreadyAssigned {
                room_id,
                standard_id,
            });
        }

        let assignment = Assignment {
            id: next_id(self.assignments.iter().map(|a| a.id.as_str())),
            room_id,
            standard_id,
            evaluator_id,
        };
        tracing::info!(
            id = %assignment.id,
            room_id = %assignment.room_id,
            standard_id = %assignment.standard_id,
            evaluator_id = %assignment.evaluator_id,
            "evaluator assigned"
        );
        self.assignments.push(assignment);
        self.recount_loads();

        let idx = self.assignments.len() - 1;
        Ok(&self.assignments[idx])
    }

    /// Grid for display: unit → rooms, each with one evaluator name per
    /// standard id in `standard_ids`.
    pub fn rows<'a>(
        &'a self,
        rooms: &'a [Room],
        standard_ids: &[&str],
    ) -> Groups<&'a str, Vec<MatrixRow<'a>>> {
        let mut grid: Groups<&'a str, Vec<MatrixRow<'a>>> = Groups::default();
        for room in rooms {
            let evaluators = standard_ids
                .iter()
                .map(|standard_id| self.lookup(&room.id, standard_id))
                .collect();
            grid.entry(room.unit_name.as_str())
                .push(MatrixRow { room, evaluators });
        }
        grid
    }

    fn recount_loads(&mut self) {
        for evaluator in &mut self.evaluators {
            evaluator.assigned_rooms = self
                .assignments
                .iter()
                .filter(|a| a.evaluator_id == evaluator.id)
                .map(|a| a.room_id.as_str())
                .collect::<HashSet<_>>()
                .len() as u32;
        }
    }
}

/// Check that room, standard and evaluator were all chosen.
pub fn validate(new: NewAssignment) -> Result<(String, String, String), WorkspaceError> {
    let mut missing = Vec::new();
    let room_id = required(new.room_id, "room", &mut missing);
    let standard_id = required(new.standard_id, "standard", &mut missing);
    let evaluator_id = required(new.evaluator_id, "evaluator", &mut missing);
    if !missing.is_empty() {
        return Err(WorkspaceError::Validation {
            entity: "assignment",
            missing,
        });
    }
    Ok((room_id, standard_id, evaluator_id))
}

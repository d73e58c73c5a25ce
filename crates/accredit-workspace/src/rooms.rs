use accredit_core::grouping::{Groups, group_by};
use accredit_core::models::room::{NewRoom, ProgressStatus, Room};

use crate::error::WorkspaceError;
use crate::ids::{next_id, required};

#[derive(Debug, Clone, Default)]
pub struct RoomRegistry {
    rooms: Vec<Room>,
}

impl RoomRegistry {
    pub fn new(rooms: Vec<Room>) -> Self {
        Self { rooms }
    }

    pub fn list(&self) -> &[Room] {
        &self.rooms
    }

    pub fn get(&self, id: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id)
    }

    pub fn create(&mut self, new: NewRoom) -> Result<&Room, WorkspaceError> {
        let mut missing = Vec::new();
        let unit_name = required(new.unit_name, "unit_name", &mut missing);
        let room_name = required(new.room_name, "room_name", &mut missing);
        if !missing.is_empty() {
            return Err(WorkspaceError::Validation {
                entity: "room",
                missing,
            });
        }

        let room = Room {
            id: next_id(self.rooms.iter().map(|r| r.id.as_str())),
            unit_name,
            room_name,
            self_assessment_status: ProgressStatus::NotStarted,
            evaluation_status: ProgressStatus::NotStarted,
            assigned_evaluators: 0,
        };
        tracing::info!(id = %room.id, unit = %room.unit_name, room = %room.room_name, "room added");
        self.rooms.push(room);

        let idx = self.rooms.len() - 1;
        Ok(&self.rooms[idx])
    }

    /// Rooms grouped by unit, units in first-appearance order.
    pub fn by_unit(&self) -> Groups<&str, Vec<&Room>> {
        group_by(&self.rooms, |room| room.unit_name.as_str())
    }

    /// Rooms that still owe a self-assessment.
    pub fn pending_self_assessment(&self) -> Vec<&Room> {
        self.rooms
            .iter()
            .filter(|r| r.self_assessment_status != ProgressStatus::Completed)
            .collect()
    }

    /// Rooms whose self-assessment is in but whose evaluation is not done.
    pub fn pending_evaluation(&self) -> Vec<&Room> {
        self.rooms
            .iter()
            .filter(|r| {
                r.self_assessment_status == ProgressStatus::Completed
                    && r.evaluation_status != ProgressStatus::Completed
            })
            .collect()
    }

    pub fn set_progress(
        &mut self,
        id: &str,
        self_assessment: ProgressStatus,
        evaluation: ProgressStatus,
    ) -> Result<&Room, WorkspaceError> {
        let room = self.get_mut(id)?;
        room.self_assessment_status = self_assessment;
        room.evaluation_status = evaluation;
        tracing::debug!(id, %self_assessment, %evaluation, "room progress updated");
        Ok(room)
    }

    pub fn set_assigned_evaluators(&mut self, id: &str, count: u32) -> Result<(), WorkspaceError> {
        self.get_mut(id)?.assigned_evaluators = count;
        Ok(())
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut Room, WorkspaceError> {
        self.rooms
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| WorkspaceError::not_found("room", id))
    }
}

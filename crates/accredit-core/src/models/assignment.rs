use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// An external evaluator who can be assigned to rooms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Evaluator {
    pub id: String,
    pub name: String,
    pub assigned_rooms: u32,
}

/// A (room, standard) → evaluator association for an assessment event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Assignment {
    pub id: String,
    pub room_id: String,
    pub standard_id: String,
    pub evaluator_id: String,
}

impl Assignment {
    pub fn covers(&self, room_id: &str, standard_id: &str) -> bool {
        self.room_id == room_id && self.standard_id == standard_id
    }
}

/// Form input for a new assignment. Every field must be chosen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewAssignment {
    pub room_id: Option<String>,
    pub standard_id: Option<String>,
    pub evaluator_id: Option<String>,
}

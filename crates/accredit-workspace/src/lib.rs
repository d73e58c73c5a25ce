//! accredit-workspace
//!
//! In-memory stores for one assessment workspace: checklist items with their
//! draft/commit editor, the evaluator assignment matrix, and the event, room
//! and user registries. Everything is seeded at start and lives for the
//! lifetime of the process.

pub mod assignments;
pub mod dashboard;
pub mod editor;
pub mod error;
pub mod events;
mod ids;
pub mod items;
pub mod rooms;
pub mod seed;
pub mod users;
pub mod view;
pub mod workspace;

pub use workspace::Workspace;

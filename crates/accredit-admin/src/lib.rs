//! accredit-admin
//!
//! Line-oriented admin console over an accreditation workspace: role-scoped
//! navigation between views, item editing, evaluator assignment and the
//! event, room and user registries. Settings persist to a versioned JSON
//! config file.

pub mod commands;
pub mod config;
pub mod navigation;
pub mod render;
pub mod state;

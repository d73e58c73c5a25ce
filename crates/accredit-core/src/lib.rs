//! accredit-core
//!
//! Pure domain types for the accreditation-assessment workflow, plus the
//! grouping and completion calculations shared by the self-assessment and
//! evaluation views. No I/O. This is the shared vocabulary of the system.

pub mod completion;
pub mod error;
pub mod grouping;
pub mod models;

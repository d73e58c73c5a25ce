use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid score {0}: expected one of 0, 5 or 10")]
    InvalidScore(u8),

    #[error("invalid evidence: {0}")]
    InvalidEvidence(String),

    #[error("unknown role: {0}")]
    UnknownRole(String),

    #[error("unknown event status: {0}")]
    UnknownEventStatus(String),
}

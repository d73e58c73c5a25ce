use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A checkpoint score. The scale has exactly three points.
///
/// Serialized as a bare number (`0`, `5` or `10`). Any other number is
/// rejected on deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Score {
    /// 0: the checkpoint is not met.
    NotMet,
    /// 5: partially met.
    Partial,
    /// 10: fully met.
    Met,
}

impl Score {
    pub const ALL: [Score; 3] = [Score::NotMet, Score::Partial, Score::Met];

    pub fn value(self) -> u8 {
        match self {
            Score::NotMet => 0,
            Score::Partial => 5,
            Score::Met => 10,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Score::NotMet => "Not Met",
            Score::Partial => "Partially Met",
            Score::Met => "Fully Met",
        }
    }
}

impl TryFrom<u8> for Score {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Score::NotMet),
            5 => Ok(Score::Partial),
            10 => Ok(Score::Met),
            other => Err(CoreError::InvalidScore(other)),
        }
    }
}

impl From<Score> for u8 {
    fn from(score: Score) -> Self {
        score.value()
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

//! Mission error type
//!
//! None of these ever reach the UI: the session degrades every failure
//! to a safe state and logs it.

use serde::{Deserialize, Serialize};

/// Common result type for mission operations
pub type MissionResult<T> = Result<T, MissionError>;

/// Mission-level errors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MissionError {
    /// Key-value store could not be read or written
    Storage(String),
    /// Groups could not be serialized for persistence
    Serialize(String),
    /// Celebration collaborator failed
    Notify(String),
}

impl std::fmt::Display for MissionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MissionError::Storage(msg) => write!(f, "Storage error: {}", msg),
            MissionError::Serialize(msg) => write!(f, "Serialize error: {}", msg),
            MissionError::Notify(msg) => write!(f, "Notify error: {}", msg),
        }
    }
}

impl std::error::Error for MissionError {}

impl From<serde_json::Error> for MissionError {
    fn from(err: serde_json::Error) -> Self {
        MissionError::Serialize(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = MissionError::Notify("confetti missing".to_string());
        assert_eq!(err.to_string(), "Notify error: confetti missing");
        assert_eq!(MissionError::Storage("quota".into()).to_string(), "Storage error: quota");
    }
}

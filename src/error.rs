//! Error types for the joiner.

use std::fmt;

/// An error that can occur while configuring, growing or rendering a [`Joiner`](crate::Joiner).
#[derive(Debug, Clone, PartialEq)]
pub enum JoinError {
    /// The rendered output is not valid UTF-8 (raw bytes were written).
    InvalidUtf8 { valid_up_to: usize },
    /// The buffer could not reserve the requested number of additional bytes.
    AllocationFailed { requested: usize },
    /// Options could not be deserialized.
    InvalidOptions(String),
}

impl fmt::Display for JoinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JoinError::InvalidUtf8 { valid_up_to } => {
                write!(f, "Invalid UTF-8 in output after byte {}", valid_up_to)
            }
            JoinError::AllocationFailed { requested } => {
                write!(f, "Failed to reserve {} additional bytes", requested)
            }
            JoinError::InvalidOptions(msg) => write!(f, "Invalid joiner options: {}", msg),
        }
    }
}

impl std::error::Error for JoinError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            JoinError::InvalidUtf8 { valid_up_to: 3 }.to_string(),
            "Invalid UTF-8 in output after byte 3"
        );
        assert_eq!(
            JoinError::AllocationFailed { requested: 8 }.to_string(),
            "Failed to reserve 8 additional bytes"
        );
        assert_eq!(
            JoinError::InvalidOptions("bad".to_string()).to_string(),
            "Invalid joiner options: bad"
        );
    }
}

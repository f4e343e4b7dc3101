//! Protocol error types

use thiserror::Error;

/// Protocol-level errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProtocolError {
    /// Address text did not have six colon-separated groups
    #[error("invalid address `{input}`: expected 6 colon-separated groups, got {groups}")]
    WrongGroupCount { input: String, groups: usize },

    /// A group was empty or contained non-hex characters, or exceeded 0xff
    #[error("invalid address group `{group}`: expected a hex byte (00-ff)")]
    InvalidGroup { group: String },

    /// Master report shorter than the fixed 8-byte layout
    #[error("master report too short: expected {expected} bytes, got {actual}")]
    ShortReport { expected: usize, actual: usize },
}

/// Type alias for protocol results
pub type Result<T> = std::result::Result<T, ProtocolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ProtocolError::WrongGroupCount {
            input: "aa:bb".to_string(),
            groups: 2,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("aa:bb"));
        assert!(msg.contains("6 colon-separated groups"));
    }

    #[test]
    fn test_short_report_error() {
        let err = ProtocolError::ShortReport {
            expected: 8,
            actual: 3,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("expected 8 bytes, got 3"));
    }
}

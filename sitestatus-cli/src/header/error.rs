//! Errors raised while decoding columns and inferring header layouts

use super::infer::Checkpoint;

/// Error when interpreting a column index or label
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnError {
    /// Input is not a non-negative integer or a valid column label
    InvalidArgument { input: String, reason: &'static str },
}

impl ColumnError {
    pub(crate) fn invalid(input: &str, reason: &'static str) -> Self {
        ColumnError::InvalidArgument {
            input: input.to_string(),
            reason,
        }
    }
}

impl std::fmt::Display for ColumnError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColumnError::InvalidArgument { input, reason } => {
                write!(f, "invalid column '{}': {}", input, reason)
            }
        }
    }
}

impl std::error::Error for ColumnError {}

/// Error when a header row does not have the expected layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderError {
    /// A cell that must be inspected is not in the row at all
    MissingCell {
        checkpoint: Checkpoint,
        address: String,
    },
    /// A mandatory cell is present but its text does not match
    HeaderMismatch {
        checkpoint: Checkpoint,
        address: String,
        expected: &'static str,
        found: String,
    },
}

impl HeaderError {
    pub fn checkpoint(&self) -> Checkpoint {
        match self {
            HeaderError::MissingCell { checkpoint, .. }
            | HeaderError::HeaderMismatch { checkpoint, .. } => *checkpoint,
        }
    }
}

impl std::fmt::Display for HeaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HeaderError::MissingCell {
                checkpoint,
                address,
            } => write!(
                f,
                "{} checkpoint: cell {} is missing from the header row",
                checkpoint, address
            ),
            HeaderError::HeaderMismatch {
                checkpoint,
                address,
                expected,
                found,
            } => write!(
                f,
                "{} checkpoint: cell {} contains '{}', expected text matching /{}/",
                checkpoint, address, found, expected
            ),
        }
    }
}

impl std::error::Error for HeaderError {}

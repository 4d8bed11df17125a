use thiserror::Error;

/// Result type for selection operations.
pub type Result<T> = std::result::Result<T, SelectionError>;

/// Errors that can occur during selection operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// The operation was invoked on a zero-length sequence.
    #[error("empty input: {0}")]
    EmptyInput(String),

    /// The requested rank does not exist in the sequence.
    #[error("index {index} out of range for sequence of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A partitioner reported boundaries outside the active range.
    /// This signals a logic defect, not a data condition.
    #[error("partition invariant violated: {0}")]
    InvariantViolation(String),
}

impl SelectionError {
    /// Creates a new empty input error.
    pub fn empty_input(msg: impl Into<String>) -> Self {
        SelectionError::EmptyInput(msg.into())
    }

    /// Creates a new index out of range error.
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        SelectionError::IndexOutOfRange { index, len }
    }

    /// Creates a new invariant violation error.
    pub fn invariant_violation(msg: impl Into<String>) -> Self {
        SelectionError::InvariantViolation(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SelectionError::empty_input("median requires at least one element");
        assert_eq!(
            err.to_string(),
            "empty input: median requires at least one element"
        );

        let err = SelectionError::index_out_of_range(5, 3);
        assert_eq!(
            err.to_string(),
            "index 5 out of range for sequence of length 3"
        );
    }
}

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SequenceError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Index {index} out of range for window of length {len}")]
    IndexOutOfRange { index: WindowIndex, len: usize },
}

impl SequenceError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        SequenceError::InvalidArgument(message.into())
    }
}

/// A position requested from a [`crate::window::Window`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowIndex {
    /// Counted from the oldest value, starting at 0.
    Front(usize),
    /// Counted from the most recent value, starting at 1, exactly as requested.
    /// Offsets that do not fit an `i128` are saturated.
    Back(i128),
}

impl fmt::Display for WindowIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindowIndex::Front(index) => write!(f, "{index}"),
            WindowIndex::Back(offset) => write!(f, "{offset} from the end"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let front = SequenceError::IndexOutOfRange {
            index: WindowIndex::Front(3),
            len: 3,
        };
        assert_eq!(front.to_string(), "Index 3 out of range for window of length 3");

        let back = SequenceError::IndexOutOfRange {
            index: WindowIndex::Back(-2),
            len: 3,
        };
        assert_eq!(
            back.to_string(),
            "Index -2 from the end out of range for window of length 3"
        );
    }
}

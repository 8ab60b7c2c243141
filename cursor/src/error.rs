//! Error types for cursor operations.

use std::fmt;

/// Result type for cursor operations.
pub type CursorResult<T> = Result<T, CursorError>;

/// Errors that can occur while reading or writing fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CursorError {
    /// Attempted to read past the end of the content.
    OutOfBounds {
        /// Number of bytes requested.
        requested: usize,
        /// Number of bytes available.
        available: usize,
    },

    /// Value exceeds the range representable by the field width.
    ValueOutOfRange {
        /// The value that was out of range.
        value: u32,
        /// Field width in bytes.
        width: usize,
    },
}

impl fmt::Display for CursorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds {
                requested,
                available,
            } => {
                write!(
                    f,
                    "attempted to read {requested} bytes but only {available} bytes available"
                )
            }
            Self::ValueOutOfRange { value, width } => {
                write!(f, "value {value} cannot be represented in {width} bytes")
            }
        }
    }
}

impl std::error::Error for CursorError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_out_of_bounds() {
        let err = CursorError::OutOfBounds {
            requested: 2,
            available: 1,
        };
        let msg = err.to_string();
        assert!(msg.contains("2 bytes"), "should mention requested bytes");
        assert!(msg.contains("1 bytes"), "should mention available bytes");
        assert!(msg.contains("read"), "should mention read operation");
    }

    #[test]
    fn error_display_value_out_of_range() {
        let err = CursorError::ValueOutOfRange {
            value: 256,
            width: 1,
        };
        let msg = err.to_string();
        assert!(msg.contains("256"), "should mention the value");
        assert!(msg.contains("1 bytes"), "should mention field width");
    }

    #[test]
    fn error_equality() {
        let err1 = CursorError::OutOfBounds {
            requested: 1,
            available: 0,
        };
        let err2 = CursorError::OutOfBounds {
            requested: 1,
            available: 0,
        };
        let err3 = CursorError::OutOfBounds {
            requested: 2,
            available: 0,
        };
        assert_eq!(err1, err2);
        assert_ne!(err1, err3);
    }

    #[test]
    fn error_is_std_error() {
        fn assert_error<E: std::error::Error>() {}
        assert_error::<CursorError>();
    }
}

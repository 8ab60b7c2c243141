//! Error types for packet framing.

use std::fmt;

/// Result type for framing operations.
pub type WireResult<T> = Result<T, FrameError>;

/// Reasons a buffer cannot be framed into a packet.
///
/// Every variant means the buffer is broken: the caller must discard it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FrameError {
    /// No type delimiter seen within the longest possible type token.
    TypeTokenTooLong { len: usize, max: usize },

    /// No length delimiter seen within the allowed length token size.
    SizeTokenTooLong { len: usize, max: usize },

    /// Type token does not name a known packet kind.
    UnknownKind { token: String },

    /// Length token is empty, contains a non-digit, or overflows.
    InvalidLength { token: String },
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TypeTokenTooLong { len, max } => {
                write!(
                    f,
                    "no type delimiter in {len} bytes, type token is at most {max}"
                )
            }
            Self::SizeTokenTooLong { len, max } => {
                write!(
                    f,
                    "no length delimiter in {len} bytes, length token is at most {max}"
                )
            }
            Self::UnknownKind { token } => write!(f, "unknown packet kind: {token:?}"),
            Self::InvalidLength { token } => write!(f, "invalid length token: {token:?}"),
        }
    }
}

impl std::error::Error for FrameError {}

//! Error types for payload decoding.

use cursor::CursorError;
use thiserror::Error;

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur while decoding or encoding packet content.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Text-bearing content is not valid UTF-8.
    #[error("content is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    /// Init content could not be parsed into a catalog.
    #[error("init data could not be parsed: {message}")]
    InitParse {
        /// Parser message.
        message: String,
    },

    /// A packet that needs the catalog arrived before any init data.
    #[error("packet requires init data but none has been received")]
    CatalogMissing,

    /// Frame content is shorter than its own header counts imply.
    #[error("frame content too short: header implies {needed} bytes, have {available}")]
    FrameTooShort {
        /// Bytes implied by the frame header.
        needed: usize,
        /// Bytes actually present.
        available: usize,
    },

    /// A grid layer does not hold exactly one entry per cell.
    #[error("{layer} layer has {actual} entries, grid has {expected} cells")]
    LayerLength {
        /// Layer name.
        layer: &'static str,
        /// Cell count.
        expected: usize,
        /// Entries present.
        actual: usize,
    },

    /// Field cursor error.
    #[error("field error: {0}")]
    Cursor(#[from] CursorError),
}

impl CodecError {
    /// Returns `true` if the error means the catalog has not been established.
    #[must_use]
    pub const fn is_catalog_missing(&self) -> bool {
        matches!(self, Self::CatalogMissing)
    }
}

impl From<serde_json::Error> for CodecError {
    fn from(err: serde_json::Error) -> Self {
        Self::InitParse {
            message: err.to_string(),
        }
    }
}

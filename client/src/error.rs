//! Error types for stream processing.

use codec::CodecError;
use thiserror::Error;
use wire::FrameError;

/// Why the stream buffer was discarded.
///
/// Neither variant is fatal to the connection: the reassembler resets to an
/// empty buffer and keeps accepting chunks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StreamError {
    /// The packet header could not be framed.
    #[error("broken packet header: {0}")]
    Broken(#[from] FrameError),

    /// A framed packet could not be decoded or dispatched.
    #[error("undecodable packet: {0}")]
    Decode(#[from] CodecError),
}

impl StreamError {
    /// Returns `true` if a frame packet arrived before any init data.
    #[must_use]
    pub const fn is_catalog_missing(&self) -> bool {
        matches!(self, Self::Decode(CodecError::CatalogMissing))
    }
}

//! Packet kinds and header constants.

use std::fmt;

use crate::error::FrameError;

/// Byte separating the type token, the length token, and the content.
///
/// It may legitimately appear inside content, which is why only the first two
/// occurrences in a buffer are treated as delimiters.
pub const DELIMITER: u8 = b':';

/// Length of the longest kind name (`StaticDisplay`).
pub const MAX_KIND_NAME_LEN: usize = 13;

/// Maximum number of digits in the length token before a header is considered broken.
pub const MAX_SIZE_TOKEN_LEN: usize = 5;

/// The fixed set of packet kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PacketKind {
    /// Plain log text.
    Text,
    /// Grid frame for the main view.
    Display,
    /// Catalog initialization data.
    Init,
    /// Server-reported error message.
    Err,
    /// Minimap image reference.
    Img,
    /// Grid frame for the secondary panel.
    StaticDisplay,
}

impl PacketKind {
    /// All kinds in wire enumeration order.
    pub const ALL: [Self; 6] = [
        Self::Text,
        Self::Display,
        Self::Init,
        Self::Err,
        Self::Img,
        Self::StaticDisplay,
    ];

    /// Returns the ASCII name used as the type token.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Display => "Display",
            Self::Init => "Init",
            Self::Err => "Err",
            Self::Img => "Img",
            Self::StaticDisplay => "StaticDisplay",
        }
    }

    /// Parses a type token.
    pub fn parse(token: &[u8]) -> Result<Self, FrameError> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().as_bytes() == token)
            .ok_or_else(|| FrameError::UnknownKind {
                token: String::from_utf8_lossy(token).into_owned(),
            })
    }

    /// Returns `true` for kinds whose content is a grid frame.
    #[must_use]
    pub const fn carries_frame(self) -> bool {
        matches!(self, Self::Display | Self::StaticDisplay)
    }
}

impl fmt::Display for PacketKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

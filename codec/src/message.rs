//! Per-kind payload decoding.

use wire::{Packet, PacketKind};

use crate::catalog::{decode_catalog, Catalog, NONE_IMAGE};
use crate::error::{CodecError, CodecResult};
use crate::frame::{decode_grid_frame, FrameFormat, GridFrame};

/// Where a grid frame is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Surface {
    /// The main map view (`Display` packets).
    Main,
    /// The secondary panel (`StaticDisplay` packets).
    Panel,
}

/// A decoded packet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Text(String),
    Error(String),
    Catalog(Catalog),
    Frame { surface: Surface, frame: GridFrame },
    /// Image for the secondary panel; `None` clears it.
    Minimap(Option<String>),
}

impl Message {
    /// Returns the packet kind this message was decoded from.
    #[must_use]
    pub const fn kind(&self) -> PacketKind {
        match self {
            Self::Text(_) => PacketKind::Text,
            Self::Error(_) => PacketKind::Err,
            Self::Catalog(_) => PacketKind::Init,
            Self::Frame {
                surface: Surface::Main,
                ..
            } => PacketKind::Display,
            Self::Frame {
                surface: Surface::Panel,
                ..
            } => PacketKind::StaticDisplay,
            Self::Minimap(_) => PacketKind::Img,
        }
    }
}

/// Decodes a framed packet into a [`Message`].
///
/// `catalog` is the session's current catalog, if one has been established.
/// Frame packets without a catalog fail with [`CodecError::CatalogMissing`].
pub fn decode_packet(
    packet: &Packet<'_>,
    catalog: Option<&Catalog>,
    format: &FrameFormat,
) -> CodecResult<Message> {
    match packet.kind {
        PacketKind::Text => decode_text(packet.content).map(Message::Text),
        PacketKind::Err => decode_error(packet.content).map(Message::Error),
        PacketKind::Init => decode_catalog(packet.content).map(Message::Catalog),
        PacketKind::Display => decode_frame(packet.content, catalog, format, Surface::Main),
        PacketKind::StaticDisplay => decode_frame(packet.content, catalog, format, Surface::Panel),
        PacketKind::Img => decode_minimap(packet.content, catalog).map(Message::Minimap),
    }
}

/// Decodes text packet content.
pub fn decode_text(content: &[u8]) -> CodecResult<String> {
    Ok(std::str::from_utf8(content)?.to_owned())
}

/// Decodes a server error message.
pub fn decode_error(content: &[u8]) -> CodecResult<String> {
    decode_text(content)
}

/// Decodes a minimap image reference.
///
/// `none` clears the panel and never needs a catalog. Any other name needs a
/// catalog to exist, but the name itself does not have to be in it: the
/// renderer may load it later.
pub fn decode_minimap(content: &[u8], catalog: Option<&Catalog>) -> CodecResult<Option<String>> {
    let name = std::str::from_utf8(content)?;
    if name == NONE_IMAGE {
        return Ok(None);
    }
    let catalog = catalog.ok_or(CodecError::CatalogMissing)?;
    if !catalog.contains_image(name) {
        tracing::debug!(image = name, "minimap image not in catalog");
    }
    Ok(Some(name.to_owned()))
}

fn decode_frame(
    content: &[u8],
    catalog: Option<&Catalog>,
    format: &FrameFormat,
    surface: Surface,
) -> CodecResult<Message> {
    if catalog.is_none() {
        return Err(CodecError::CatalogMissing);
    }
    let frame = decode_grid_frame(content, format)?;
    Ok(Message::Frame { surface, frame })
}

//! Packet extraction and encoding.
//!
//! A packet on the wire is `<type>:<length>:<content>`. Packets are
//! concatenated with no separator beyond each packet's declared length.

use crate::error::{FrameError, WireResult};
use crate::header::{PacketKind, DELIMITER};
use crate::limits::{Limits, SizeTokenBound};

/// A framed packet borrowing its content from the stream buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Packet<'a> {
    pub kind: PacketKind,
    /// Exactly the declared number of content bytes.
    pub content: &'a [u8],
}

impl Packet<'_> {
    /// Copies the content into an [`OwnedPacket`].
    #[must_use]
    pub fn to_owned_packet(&self) -> OwnedPacket {
        OwnedPacket {
            kind: self.kind,
            content: self.content.to_vec(),
        }
    }

    /// Returns the number of bytes this packet occupies on the wire.
    #[must_use]
    pub fn wire_len(&self) -> usize {
        encoded_len(self.kind, self.content.len())
    }
}

/// A framed packet that owns its content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnedPacket {
    pub kind: PacketKind,
    pub content: Vec<u8>,
}

impl OwnedPacket {
    /// Creates an owned packet.
    #[must_use]
    pub fn new(kind: PacketKind, content: impl Into<Vec<u8>>) -> Self {
        Self {
            kind,
            content: content.into(),
        }
    }

    /// Borrows this packet.
    #[must_use]
    pub fn as_packet(&self) -> Packet<'_> {
        Packet {
            kind: self.kind,
            content: &self.content,
        }
    }

    /// Serializes the packet to wire bytes.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        encode_packet(self.kind, &self.content)
    }
}

/// Outcome of a successful extraction attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extracted<'a> {
    /// A complete packet at the front of the buffer.
    Packet {
        packet: Packet<'a>,
        /// Bytes to drop from the front of the buffer; the rest is leftover.
        consumed: usize,
    },
    /// More bytes are needed; the buffer must be kept as-is.
    Incomplete,
}

/// Extracts the first packet from `buf`.
///
/// The buffer is not modified. An `Err` means the buffer is broken and must be
/// discarded in full.
pub fn extract_packet<'a>(buf: &'a [u8], limits: &Limits) -> WireResult<Extracted<'a>> {
    let Some(type_end) = nth_delimiter(buf, 0) else {
        if buf.len() > limits.max_type_len {
            return Err(FrameError::TypeTokenTooLong {
                len: buf.len(),
                max: limits.max_type_len,
            });
        }
        return Ok(Extracted::Incomplete);
    };

    let Some(size_end) = nth_delimiter(buf, 1) else {
        let measured = match limits.size_bound {
            SizeTokenBound::BufferLength => buf.len(),
            SizeTokenBound::SinceTypeDelimiter => buf.len() - type_end - 1,
        };
        if measured > limits.max_size_len {
            return Err(FrameError::SizeTokenTooLong {
                len: measured,
                max: limits.max_size_len,
            });
        }
        return Ok(Extracted::Incomplete);
    };

    let kind = PacketKind::parse(&buf[..type_end])?;
    let declared = parse_length(&buf[type_end + 1..size_end])?;

    let content_start = size_end + 1;
    let available = buf.len() - content_start;
    if available < declared {
        return Ok(Extracted::Incomplete);
    }

    let consumed = content_start + declared;
    Ok(Extracted::Packet {
        packet: Packet {
            kind,
            content: &buf[content_start..consumed],
        },
        consumed,
    })
}

/// Result of framing a complete capture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitPackets<'a> {
    /// Packets with the byte offset of their header.
    pub packets: Vec<(usize, Packet<'a>)>,
    /// What followed the last packet.
    pub tail: Tail,
}

/// What remained after the last complete packet of a capture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tail {
    /// The capture ended exactly on a packet boundary.
    Clean,
    /// The capture ends with an incomplete packet starting at `offset`.
    Incomplete { offset: usize },
    /// Framing broke at `offset`.
    Broken { offset: usize, error: FrameError },
}

/// Frames every packet in a complete capture.
///
/// This is the batch counterpart of repeatedly calling [`extract_packet`] on a
/// stream buffer; it stops at the first incomplete or broken packet.
pub fn split_packets<'a>(buf: &'a [u8], limits: &Limits) -> SplitPackets<'a> {
    let mut offset = 0usize;
    let mut packets = Vec::new();

    let tail = loop {
        if offset == buf.len() {
            break Tail::Clean;
        }
        match extract_packet(&buf[offset..], limits) {
            Ok(Extracted::Packet { packet, consumed }) => {
                packets.push((offset, packet));
                offset += consumed;
            }
            Ok(Extracted::Incomplete) => break Tail::Incomplete { offset },
            Err(error) => break Tail::Broken { offset, error },
        }
    };

    SplitPackets { packets, tail }
}

/// Encodes a packet to wire bytes.
#[must_use]
pub fn encode_packet(kind: PacketKind, content: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(encoded_len(kind, content.len()));
    encode_packet_into(kind, content, &mut out);
    out
}

/// Appends an encoded packet to `out`.
pub fn encode_packet_into(kind: PacketKind, content: &[u8], out: &mut Vec<u8>) {
    out.extend_from_slice(kind.name().as_bytes());
    out.push(DELIMITER);
    out.extend_from_slice(content.len().to_string().as_bytes());
    out.push(DELIMITER);
    out.extend_from_slice(content);
}

fn encoded_len(kind: PacketKind, content_len: usize) -> usize {
    kind.name().len() + 1 + decimal_digits(content_len) + 1 + content_len
}

fn decimal_digits(mut value: usize) -> usize {
    let mut digits = 1;
    while value >= 10 {
        value /= 10;
        digits += 1;
    }
    digits
}

fn nth_delimiter(buf: &[u8], n: usize) -> Option<usize> {
    buf.iter()
        .enumerate()
        .filter(|&(_, &byte)| byte == DELIMITER)
        .nth(n)
        .map(|(idx, _)| idx)
}

fn parse_length(token: &[u8]) -> WireResult<usize> {
    let invalid = || FrameError::InvalidLength {
        token: String::from_utf8_lossy(token).into_owned(),
    };
    if token.is_empty() || !token.iter().all(u8::is_ascii_digit) {
        return Err(invalid());
    }
    token.iter().try_fold(0usize, |acc, &digit| {
        acc.checked_mul(10)
            .and_then(|acc| acc.checked_add(usize::from(digit - b'0')))
            .ok_or_else(invalid)
    })
}

//! Packet framing for the mirae stream protocol.
//!
//! This crate handles the wire format: `<type>:<length>:<content>` packets
//! concatenated back-to-back on an ordered byte stream. It finds packet
//! boundaries in an accumulating buffer and classifies the front of the buffer
//! as a complete packet, incomplete, or broken. It does not interpret packet
//! content.
//!
//! # Design Principles
//!
//! - **Single wire format** - One fixed set of packet kinds, no negotiation.
//! - **Bounded headers** - Header tokens are checked against limits before a buffer is accepted.
//! - **Borrowed packets** - Extraction never copies or mutates the caller's buffer.

mod error;
mod header;
mod limits;
mod packet;

pub use error::{FrameError, WireResult};
pub use header::{PacketKind, DELIMITER, MAX_KIND_NAME_LEN, MAX_SIZE_TOKEN_LEN};
pub use limits::{Limits, SizeTokenBound};
pub use packet::{
    encode_packet, encode_packet_into, extract_packet, split_packets, Extracted, OwnedPacket,
    Packet, SplitPackets, Tail,
};

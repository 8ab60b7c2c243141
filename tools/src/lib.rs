//! Capture inspection, decoding, and replay tools for the mirae stream protocol.
//!
//! This crate works on captured server streams, raw bytes exactly as they
//! arrived on the socket:
//!
//! - Frame a capture and list its packets
//! - Decode every packet to JSON, tracking the catalog
//! - Replay a capture through the client reassembler in fixed-size chunks
//!
//! # Design Principles
//!
//! - **Same code path as the client** - Tools call the library crates; nothing is reimplemented.
//! - **Human-readable output** - Make it easy to see what the server actually sent.

mod decode;
mod inspect;
mod replay;
mod telemetry;

pub use decode::{decode_stream, format_decode_pretty, DecodeOutput, DecodeStop, DecodedPacket};
pub use inspect::{format_inspect_pretty, inspect_stream, InspectReport, PacketSummary, TailSummary};
pub use replay::{replay_stream, RenderCounts, ReplayReport, ScrollbackRenderer};
pub use telemetry::{filter_directive, init_tracing, LOG_ENV};

//! Payload decoding for the mirae stream protocol.
//!
//! This crate turns framed packets into typed values: log text, server error
//! messages, the session catalog, grid frames, and minimap references. It also
//! provides the matching encoders used by tests and tooling.
//!
//! # Features
//!
//! - Per-kind decoders and a single [`decode_packet`] router
//! - Grid frames with optional block/entity layers modelled as [`GridLayers`]
//! - Session [`Catalog`] lookups and image preload lists
//!
//! # Design Principles
//!
//! - **Validate before iterating** - Field counts are checked against content length first.
//! - **Catalog is explicit** - Decoders that need it take it as an argument; nothing is global.
//! - **No framing knowledge** - Content arrives already cut to its declared length.

mod catalog;
mod error;
mod frame;
mod message;

pub use catalog::{
    decode_catalog, encode_catalog, AssetRoots, Catalog, ImageKind, ImageRef, NONE_IMAGE,
};
pub use cursor::FieldWidth;
pub use error::{CodecError, CodecResult};
pub use frame::{
    decode_grid_frame, encode_grid_frame, Cell, FrameFormat, GridFrame, GridLayers, Player, Rgb,
    SENTINEL_ID,
};
pub use message::{decode_error, decode_minimap, decode_packet, decode_text, Message, Surface};

//! Reassembly of packets from arbitrarily chunked stream input.

use codec::Catalog;
use tracing::{debug, trace, warn};
use wire::{extract_packet, Extracted};

use crate::config::ClientConfig;
use crate::dispatch::{Dispatcher, Session};
use crate::error::StreamError;
use crate::render::Renderer;

/// Outcome of one [`StreamReassembler::feed`] call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FeedReport {
    /// Packets decoded and dispatched during this call.
    pub dispatched: usize,
    /// Set when the buffer was thrown away, with the reason.
    pub discarded: Option<StreamError>,
}

impl FeedReport {
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.discarded.is_none()
    }
}

/// Buffers stream chunks and dispatches every complete packet they contain.
///
/// Packets may be split across chunks or several may share one chunk; the
/// renderer sees the same calls either way. A broken header or an undecodable
/// packet discards everything buffered, and parsing resumes with the next
/// chunk.
#[derive(Debug)]
pub struct StreamReassembler<R> {
    buffer: Vec<u8>,
    session: Session,
    config: ClientConfig,
    renderer: R,
}

impl<R: Renderer> StreamReassembler<R> {
    /// Creates a reassembler with the default config.
    pub fn new(renderer: R) -> Self {
        Self::with_config(ClientConfig::default(), renderer)
    }

    pub fn with_config(config: ClientConfig, renderer: R) -> Self {
        Self {
            buffer: Vec::new(),
            session: Session::new(),
            config,
            renderer,
        }
    }

    /// Appends `chunk` and processes every complete packet now buffered.
    pub fn feed(&mut self, chunk: &[u8]) -> FeedReport {
        self.buffer.extend_from_slice(chunk);
        let mut report = FeedReport::default();
        loop {
            match self.step() {
                Ok(Some(consumed)) => {
                    self.buffer.drain(..consumed);
                    report.dispatched += 1;
                }
                Ok(None) => {
                    trace!(buffered = self.buffer.len(), "waiting for more bytes");
                    return report;
                }
                Err(err) => {
                    warn!(error = %err, discarded = self.buffer.len(), "discarding stream buffer");
                    self.buffer.clear();
                    report.discarded = Some(err);
                    return report;
                }
            }
        }
    }

    /// Extracts and dispatches the packet at the front of the buffer.
    ///
    /// Returns the number of bytes to drop, or `None` if the packet is not
    /// complete yet.
    fn step(&mut self) -> Result<Option<usize>, StreamError> {
        let (packet, consumed) = match extract_packet(&self.buffer, &self.config.limits)? {
            Extracted::Packet { packet, consumed } => (packet, consumed),
            Extracted::Incomplete => return Ok(None),
        };
        debug!(kind = %packet.kind, len = packet.content.len(), "dispatching packet");
        let message =
            codec::decode_packet(&packet, self.session.catalog(), &self.config.frame_format)?;
        Dispatcher::dispatch(message, &mut self.session, &mut self.renderer)?;
        Ok(Some(consumed))
    }

    /// Bytes held while waiting for the rest of a packet.
    #[must_use]
    pub fn buffered(&self) -> &[u8] {
        &self.buffer
    }

    #[must_use]
    pub const fn catalog(&self) -> Option<&Catalog> {
        self.session.catalog()
    }

    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    #[must_use]
    pub const fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Drops buffered bytes and the catalog, as when the connection closes.
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.session.clear();
    }
}

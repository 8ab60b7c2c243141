//! Replaying captures through the stream reassembler.

use client::{ClientConfig, Renderer, Scrollback, StreamReassembler};
use codec::{Catalog, GridFrame, Surface};
use serde::Serialize;

/// Number of renderer calls of each kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct RenderCounts {
    pub text: usize,
    pub errors: usize,
    pub catalogs: usize,
    pub main_frames: usize,
    pub panel_frames: usize,
    pub minimaps: usize,
}

/// Renderer that keeps a text log and counts everything else.
#[derive(Debug, Clone, Default)]
pub struct ScrollbackRenderer {
    pub log: Scrollback,
    pub counts: RenderCounts,
    pub minimap: Option<String>,
}

impl ScrollbackRenderer {
    #[must_use]
    pub const fn new(max_len: usize) -> Self {
        Self {
            log: Scrollback::new(max_len),
            counts: RenderCounts {
                text: 0,
                errors: 0,
                catalogs: 0,
                main_frames: 0,
                panel_frames: 0,
                minimaps: 0,
            },
            minimap: None,
        }
    }
}

impl Renderer for ScrollbackRenderer {
    fn render_text(&mut self, message: &str) {
        self.counts.text += 1;
        self.log.push(message);
    }

    fn render_error(&mut self, message: &str) {
        self.counts.errors += 1;
        self.log.push_error(message);
    }

    fn set_catalog(&mut self, catalog: &Catalog) {
        self.counts.catalogs += 1;
        tracing::debug!(images = catalog.images().len(), "catalog installed");
    }

    fn render_frame(&mut self, surface: Surface, _frame: &GridFrame, _catalog: &Catalog) {
        match surface {
            Surface::Main => self.counts.main_frames += 1,
            Surface::Panel => self.counts.panel_frames += 1,
        }
    }

    fn render_minimap(&mut self, reference: Option<&str>) {
        self.counts.minimaps += 1;
        self.minimap = reference.map(str::to_owned);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayReport {
    pub chunks: usize,
    pub dispatched: usize,
    /// Reasons for each discarded buffer, in order.
    pub discards: Vec<String>,
    /// Bytes still waiting for the rest of a packet at the end.
    pub buffered: usize,
    pub counts: RenderCounts,
    pub log: String,
}

/// Feeds `bytes` to a fresh reassembler in chunks of `chunk_size` bytes.
///
/// A zero chunk size feeds the whole capture at once.
#[must_use]
pub fn replay_stream(bytes: &[u8], chunk_size: usize, config: &ClientConfig) -> ReplayReport {
    let renderer = ScrollbackRenderer::new(config.scrollback_limit);
    let mut reassembler = StreamReassembler::with_config(config.clone(), renderer);
    let size = if chunk_size == 0 {
        bytes.len().max(1)
    } else {
        chunk_size
    };

    let mut chunks = 0;
    let mut dispatched = 0;
    let mut discards = Vec::new();
    for chunk in bytes.chunks(size) {
        chunks += 1;
        let report = reassembler.feed(chunk);
        dispatched += report.dispatched;
        if let Some(err) = report.discarded {
            discards.push(err.to_string());
        }
    }

    let buffered = reassembler.buffered().len();
    let renderer = reassembler.into_renderer();
    ReplayReport {
        chunks,
        dispatched,
        discards,
        buffered,
        counts: renderer.counts,
        log: renderer.log.as_str().to_owned(),
    }
}

//! Client-side stream handling for the mirae stream protocol.
//!
//! This crate sits between the transport and the renderer. A
//! [`StreamReassembler`] accepts byte chunks in arrival order, frames complete
//! packets with `wire`, decodes them with `codec`, and routes each one to a
//! [`Renderer`] capability through the [`Dispatcher`].
//!
//! It also carries the small outbound side of the client: the display poll
//! [`Request`], typed command encoding, and a bounded [`Scrollback`] log.
//!
//! # Design Principles
//!
//! - **One call per packet** - Every dispatched packet produces exactly one renderer call.
//! - **Discard, don't resync** - A bad packet drops the whole buffer; the next chunk starts fresh.
//! - **Single owner** - The reassembler owns its buffer, catalog, and renderer; `feed` takes `&mut self`.

mod config;
mod dispatch;
mod error;
mod reassembler;
mod render;
mod request;
mod scrollback;

pub use config::ClientConfig;
pub use dispatch::{Dispatcher, Session};
pub use error::StreamError;
pub use reassembler::{FeedReport, StreamReassembler};
pub use render::{NullRenderer, RecordingRenderer, RenderCall, Renderer};
pub use request::{CommandEncoder, Request};
pub use scrollback::Scrollback;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_api_exports() {
        let _ = ClientConfig::default();
        let _ = Session::new();
        let _ = Scrollback::default();
        let _ = CommandEncoder::new();
        let _ = FeedReport::default();
        let _ = Request::Display;
    }

    #[test]
    fn null_renderer_accepts_stream() {
        let mut reassembler = StreamReassembler::new(NullRenderer);
        let report = reassembler.feed(b"Text:2:hiImg:4:none");
        assert_eq!(report.dispatched, 2);
        assert!(report.is_clean());
    }
}

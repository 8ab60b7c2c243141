//! Routing decoded messages to the renderer.

use codec::{Catalog, CodecError, FrameFormat, Message};
use wire::Packet;

use crate::render::Renderer;

/// Per-connection state shared between decoding and rendering.
///
/// The catalog starts empty and is replaced wholesale by every init packet.
#[derive(Debug, Clone, Default)]
pub struct Session {
    catalog: Option<Catalog>,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn catalog(&self) -> Option<&Catalog> {
        self.catalog.as_ref()
    }

    /// Installs `catalog`, returning the one it replaces.
    pub fn replace_catalog(&mut self, catalog: Catalog) -> Option<Catalog> {
        self.catalog.replace(catalog)
    }

    pub fn clear(&mut self) {
        self.catalog = None;
    }
}

/// Routes decoded messages to renderer capabilities.
///
/// Holds no state of its own; everything that persists between packets lives
/// in the [`Session`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Dispatcher;

impl Dispatcher {
    /// Sends a decoded message to the matching renderer capability.
    ///
    /// A catalog message is stored in `session` before the renderer sees it.
    pub fn dispatch<R: Renderer + ?Sized>(
        message: Message,
        session: &mut Session,
        renderer: &mut R,
    ) -> Result<(), CodecError> {
        match message {
            Message::Text(text) => renderer.render_text(&text),
            Message::Error(text) => renderer.render_error(&text),
            Message::Catalog(catalog) => {
                session.replace_catalog(catalog);
                let catalog = session.catalog().ok_or(CodecError::CatalogMissing)?;
                renderer.set_catalog(catalog);
            }
            Message::Frame { surface, frame } => {
                let catalog = session.catalog().ok_or(CodecError::CatalogMissing)?;
                renderer.render_frame(surface, &frame, catalog);
            }
            Message::Minimap(reference) => renderer.render_minimap(reference.as_deref()),
        }
        Ok(())
    }

    /// Decodes `packet` against the session and dispatches the result.
    pub fn decode_and_dispatch<R: Renderer + ?Sized>(
        packet: &Packet<'_>,
        format: &FrameFormat,
        session: &mut Session,
        renderer: &mut R,
    ) -> Result<(), CodecError> {
        let message = codec::decode_packet(packet, session.catalog(), format)?;
        Self::dispatch(message, session, renderer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{RecordingRenderer, RenderCall};
    use codec::{GridFrame, GridLayers, Rgb, Surface};
    use wire::PacketKind;

    fn frame() -> GridFrame {
        GridFrame::new(1, 1, Vec::new(), vec![Rgb::new(0, 0, 0)], GridLayers::ColorOnly).unwrap()
    }

    #[test]
    fn catalog_is_stored_then_rendered() {
        let mut session = Session::new();
        let mut renderer = RecordingRenderer::new();
        let mut catalog = Catalog::default();
        catalog.blocks.insert(1, "stone.png".to_string());

        Dispatcher::dispatch(Message::Catalog(catalog.clone()), &mut session, &mut renderer).unwrap();

        assert_eq!(session.catalog(), Some(&catalog));
        assert_eq!(renderer.calls, vec![RenderCall::Catalog(catalog)]);
    }

    #[test]
    fn later_catalog_replaces_earlier() {
        let mut session = Session::new();
        let mut first = Catalog::default();
        first.preload.push("a.png".to_string());
        let mut second = Catalog::default();
        second.preload.push("b.png".to_string());

        assert!(session.replace_catalog(first.clone()).is_none());
        assert_eq!(session.replace_catalog(second.clone()), Some(first));
        assert_eq!(session.catalog(), Some(&second));
    }

    #[test]
    fn frame_without_catalog_is_rejected() {
        let mut session = Session::new();
        let mut renderer = RecordingRenderer::new();
        let err = Dispatcher::dispatch(
            Message::Frame {
                surface: Surface::Main,
                frame: frame(),
            },
            &mut session,
            &mut renderer,
        )
        .unwrap_err();
        assert_eq!(err, CodecError::CatalogMissing);
        assert!(renderer.calls.is_empty());
    }

    #[test]
    fn frame_with_catalog_is_rendered() {
        let mut session = Session::new();
        session.replace_catalog(Catalog::default());
        let mut renderer = RecordingRenderer::new();
        Dispatcher::dispatch(
            Message::Frame {
                surface: Surface::Panel,
                frame: frame(),
            },
            &mut session,
            &mut renderer,
        )
        .unwrap();
        assert_eq!(
            renderer.calls,
            vec![RenderCall::Frame {
                surface: Surface::Panel,
                frame: frame(),
            }]
        );
    }

    #[test]
    fn text_error_and_minimap() {
        let mut session = Session::new();
        let mut renderer = RecordingRenderer::new();
        Dispatcher::dispatch(Message::Text("hi".to_string()), &mut session, &mut renderer).unwrap();
        Dispatcher::dispatch(Message::Error("no".to_string()), &mut session, &mut renderer).unwrap();
        Dispatcher::dispatch(Message::Minimap(None), &mut session, &mut renderer).unwrap();
        assert_eq!(
            renderer.calls,
            vec![
                RenderCall::Text("hi".to_string()),
                RenderCall::Error("no".to_string()),
                RenderCall::Minimap(None),
            ]
        );
    }

    #[test]
    fn decode_and_dispatch_routes_packet() {
        let mut session = Session::new();
        let mut renderer = RecordingRenderer::new();
        let packet = Packet {
            kind: PacketKind::Text,
            content: b"hello",
        };
        Dispatcher::decode_and_dispatch(&packet, &FrameFormat::default(), &mut session, &mut renderer)
            .unwrap();
        assert_eq!(renderer.calls, vec![RenderCall::Text("hello".to_string())]);
    }

    #[test]
    fn cleared_session_has_no_catalog() {
        let mut session = Session::new();
        session.replace_catalog(Catalog::default());
        session.clear();
        assert!(session.catalog().is_none());
    }
}

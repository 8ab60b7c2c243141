//! Rendering capabilities consumed by the dispatcher.

use codec::{Catalog, GridFrame, Surface};

/// Output side of the client: whatever draws frames and shows text.
///
/// Each dispatched packet produces exactly one call on this trait.
pub trait Renderer {
    /// Appends server text to the log.
    fn render_text(&mut self, message: &str);

    /// Shows a server-reported error.
    fn render_error(&mut self, message: &str);

    /// Installs a new catalog: block images, entity images, and preload names.
    fn set_catalog(&mut self, catalog: &Catalog);

    /// Draws a grid frame on `surface` using `catalog` for textures.
    fn render_frame(&mut self, surface: Surface, frame: &GridFrame, catalog: &Catalog);

    /// Shows an image on the secondary panel, or clears it for `None`.
    fn render_minimap(&mut self, reference: Option<&str>);
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn render_text(&mut self, message: &str) {
        (**self).render_text(message);
    }

    fn render_error(&mut self, message: &str) {
        (**self).render_error(message);
    }

    fn set_catalog(&mut self, catalog: &Catalog) {
        (**self).set_catalog(catalog);
    }

    fn render_frame(&mut self, surface: Surface, frame: &GridFrame, catalog: &Catalog) {
        (**self).render_frame(surface, frame, catalog);
    }

    fn render_minimap(&mut self, reference: Option<&str>) {
        (**self).render_minimap(reference);
    }
}

/// A renderer that drops everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render_text(&mut self, _message: &str) {}
    fn render_error(&mut self, _message: &str) {}
    fn set_catalog(&mut self, _catalog: &Catalog) {}
    fn render_frame(&mut self, _surface: Surface, _frame: &GridFrame, _catalog: &Catalog) {}
    fn render_minimap(&mut self, _reference: Option<&str>) {}
}

/// One recorded renderer call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderCall {
    Text(String),
    Error(String),
    Catalog(Catalog),
    Frame { surface: Surface, frame: GridFrame },
    Minimap(Option<String>),
}

/// A renderer that records every call in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    pub calls: Vec<RenderCall>,
}

impl RecordingRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns the calls recorded so far.
    pub fn take(&mut self) -> Vec<RenderCall> {
        std::mem::take(&mut self.calls)
    }
}

impl Renderer for RecordingRenderer {
    fn render_text(&mut self, message: &str) {
        self.calls.push(RenderCall::Text(message.to_owned()));
    }

    fn render_error(&mut self, message: &str) {
        self.calls.push(RenderCall::Error(message.to_owned()));
    }

    fn set_catalog(&mut self, catalog: &Catalog) {
        self.calls.push(RenderCall::Catalog(catalog.clone()));
    }

    fn render_frame(&mut self, surface: Surface, frame: &GridFrame, _catalog: &Catalog) {
        self.calls.push(RenderCall::Frame {
            surface,
            frame: frame.clone(),
        });
    }

    fn render_minimap(&mut self, reference: Option<&str>) {
        self.calls.push(RenderCall::Minimap(reference.map(str::to_owned)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_preserves_order() {
        let mut renderer = RecordingRenderer::new();
        renderer.render_text("a");
        renderer.render_minimap(None);
        renderer.render_error("b");
        assert_eq!(
            renderer.take(),
            vec![
                RenderCall::Text("a".to_string()),
                RenderCall::Minimap(None),
                RenderCall::Error("b".to_string()),
            ]
        );
        assert!(renderer.calls.is_empty());
    }

    #[test]
    fn mutable_reference_forwards() {
        let mut renderer = RecordingRenderer::new();
        {
            let mut borrowed = &mut renderer;
            borrowed.render_minimap(Some("map.png"));
        }
        assert_eq!(
            renderer.calls,
            vec![RenderCall::Minimap(Some("map.png".to_string()))]
        );
    }
}

use crate::config::LayoutConfig;
use boxglue_traits::SharedBackend;
use boxglue_types::Font;

/// The configuration bundle glyph and rule nodes are built against.
///
/// Nodes copy what they need out of the state at construction time, so a
/// state can be freely cloned and adjusted (e.g. a smaller font for scripts)
/// without affecting nodes that already exist.
#[derive(Debug, Clone)]
pub struct State {
    backend: SharedBackend,
    pub font: Font,
    pub dpi: f64,
}

impl State {
    pub fn new(backend: SharedBackend, font: Font, dpi: f64) -> Self {
        Self { backend, font, dpi }
    }

    pub fn from_config(backend: SharedBackend, config: &LayoutConfig) -> Self {
        Self::new(backend, config.font.clone(), config.dpi)
    }

    pub fn backend(&self) -> &SharedBackend {
        &self.backend
    }

    /// A copy of this state using `font` instead.
    pub fn with_font(&self, font: Font) -> Self {
        Self {
            font,
            ..self.clone()
        }
    }

    /// A copy of this state with the font size multiplied by `factor`.
    pub fn with_font_size(&self, factor: f64) -> Self {
        self.with_font(self.font.scaled(factor))
    }
}

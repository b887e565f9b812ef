use super::Node;
use super::size::SizeLevel;
use crate::algorithms::pack::PackDims;
use crate::config::{GROW_FACTOR, SHRINK_FACTOR};
use crate::state::State;
use boxglue_traits::SharedBackend;
use boxglue_types::{Font, Metrics};
use std::fmt;

/// A single glyph.
///
/// Unlike TeX, the font and metrics live on each `Char` so they can be looked
/// up again whenever the glyph changes size. Backends describe glyphs with a
/// bounding box and an advance; the advance, when it differs from the width,
/// turns into a `Kern` when the glyph is added to a kerned `HList`.
#[derive(Debug, Clone)]
pub struct Char {
    symbol: String,
    level: SizeLevel,
    width: f64,
    height: f64,
    depth: f64,
    metrics: Metrics,
    backend: SharedBackend,
    font: Font,
    dpi: f64,
    math: bool,
}

impl Char {
    pub fn new(symbol: impl Into<String>, state: &State, math: bool) -> Self {
        let mut ch = Self::unmeasured(symbol.into(), state, math);
        ch.update_metrics();
        ch
    }

    fn unmeasured(symbol: String, state: &State, math: bool) -> Self {
        Self {
            symbol,
            level: SizeLevel::default(),
            width: 0.0,
            height: 0.0,
            depth: 0.0,
            metrics: Metrics::default(),
            backend: state.backend().clone(),
            font: state.font.clone(),
            dpi: state.dpi,
            math,
        }
    }

    fn fetch_metrics(&mut self) {
        self.metrics = self
            .backend
            .metrics(&self.symbol, &self.font, self.dpi, self.math);
    }

    fn update_metrics(&mut self) {
        self.fetch_metrics();
        self.width = if self.symbol == " " {
            self.metrics.advance
        } else {
            self.metrics.width
        };
        self.height = self.metrics.iceberg;
        self.depth = -(self.metrics.iceberg - self.metrics.height);
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn font(&self) -> &Font {
        &self.font
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn level(&self) -> SizeLevel {
        self.level
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn depth(&self) -> f64 {
        self.depth
    }

    /// Advance correction plus the backend's pairwise kern with `next`.
    pub fn kerning(&self, next: Option<&Node>) -> f64 {
        let advance = self.metrics.advance - self.width;
        let next = match next {
            Some(Node::Char(next)) => Some(next),
            Some(Node::Accent(next)) => Some(&next.glyph),
            _ => None,
        };
        let kern = next.map_or(0.0, |next| {
            self.backend
                .kern(&self.font, &self.symbol, &next.font, &next.symbol, self.dpi)
        });
        advance + kern
    }

    pub fn shrink(&mut self) {
        if self.level.shrink() {
            self.font.size *= SHRINK_FACTOR;
        }
        self.update_metrics();
    }

    pub fn grow(&mut self) {
        self.level.grow();
        self.font.size *= GROW_FACTOR;
        self.update_metrics();
    }

    pub fn render(&self, x: f64, y: f64) {
        self.backend
            .render_glyph(x, y, &self.font, &self.symbol, self.dpi);
    }

    pub(crate) fn hpack_dims(&self, dims: &mut PackDims) {
        dims.width += self.width;
        dims.height = dims.height.max(self.height);
        dims.depth = dims.depth.max(self.depth);
    }
}

impl fmt::Display for Char {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbol)
    }
}

/// A glyph used as an accent.
///
/// TrueType accents are already offset from the baseline, so their box is the
/// glyph's ink bounding box with no depth, and rendering compensates for the
/// glyph's own bearing.
#[derive(Debug, Clone)]
pub struct Accent {
    glyph: Char,
}

impl Accent {
    pub fn new(symbol: impl Into<String>, state: &State, math: bool) -> Self {
        let mut acc = Self {
            glyph: Char::unmeasured(symbol.into(), state, math),
        };
        acc.update_metrics();
        acc
    }

    fn update_metrics(&mut self) {
        let glyph = &mut self.glyph;
        glyph.fetch_metrics();
        glyph.width = glyph.metrics.x_max - glyph.metrics.x_min;
        glyph.height = glyph.metrics.y_max - glyph.metrics.y_min;
        glyph.depth = 0.0;
    }

    pub fn glyph(&self) -> &Char {
        &self.glyph
    }

    pub fn width(&self) -> f64 {
        self.glyph.width
    }

    pub fn height(&self) -> f64 {
        self.glyph.height
    }

    pub fn depth(&self) -> f64 {
        self.glyph.depth
    }

    pub fn kerning(&self, next: Option<&Node>) -> f64 {
        self.glyph.kerning(next)
    }

    pub fn shrink(&mut self) {
        if self.glyph.level.shrink() {
            self.glyph.font.size *= SHRINK_FACTOR;
        }
        self.update_metrics();
    }

    pub fn grow(&mut self) {
        self.glyph.level.grow();
        self.glyph.font.size *= GROW_FACTOR;
        self.update_metrics();
    }

    pub fn render(&self, x: f64, y: f64) {
        let glyph = &self.glyph;
        glyph.backend.render_glyph(
            x - glyph.metrics.x_min,
            y + glyph.metrics.y_min,
            &glyph.font,
            &glyph.symbol,
            glyph.dpi,
        );
    }

    pub(crate) fn hpack_dims(&self, dims: &mut PackDims) {
        self.glyph.hpack_dims(dims);
    }
}

impl fmt::Display for Accent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.glyph, f)
    }
}

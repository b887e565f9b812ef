//! The rendering capability the box model consumes.
//!
//! The layout core never measures or draws anything itself: glyph metrics,
//! pairwise kerning and the actual drawing are delegated to a `Backend`
//! reached through the layout `State`.

use boxglue_types::{Font, Metrics};
use std::fmt::Debug;
use std::sync::Arc;

/// Shared, thread-safe handle to a backend.
pub type SharedBackend = Arc<dyn Backend>;

/// A trait for the font metrics and drawing primitives used during layout and
/// shipout.
///
/// All methods take `&self`: the same backend may be shared by several node
/// trees, and trees may be shipped from different threads, so implementations
/// that record state must synchronise internally.
///
/// # Implementations
///
/// - `RecordingBackend`: table-driven metrics, records every render call
pub trait Backend: Send + Sync + Debug {
    /// Metrics of `symbol` set in `font` at `dpi`.
    ///
    /// `math` selects math-mode glyph lookup where a backend distinguishes it.
    fn metrics(&self, symbol: &str, font: &Font, dpi: f64, math: bool) -> Metrics;

    /// Pairwise kerning between `sym1` in `font1` followed by `sym2` in `font2`.
    fn kern(&self, font1: &Font, sym1: &str, font2: &Font, sym2: &str, dpi: f64) -> f64;

    /// Draws `symbol` with its reference point at `(x, y)`.
    fn render_glyph(&self, x: f64, y: f64, font: &Font, symbol: &str, dpi: f64);

    /// Draws a filled rectangle from `(x1, y1)` to `(x2, y2)`.
    fn render_rect_filled(&self, x1: f64, y1: f64, x2: f64, y2: f64);

    /// The line thickness matching `font`, used as the base unit for rules
    /// such as fraction bars.
    fn underline_thickness(&self, font: &Font, dpi: f64) -> f64;

    /// The x-height of `font`.
    fn x_height(&self, font: &Font, dpi: f64) -> f64;

    /// Returns a human-readable name for this backend (for logging/debugging).
    fn name(&self) -> &'static str;
}

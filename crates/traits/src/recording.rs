//! An in-memory backend driven by a metrics table.
//!
//! Metrics and kerning pairs are registered at a reference size of
//! [`RecordingBackend::REFERENCE_SIZE`] points and 72 dpi, and scaled linearly
//! for the requested font size and resolution. Every render call is recorded
//! so callers can inspect exactly what a shipout produced.

use crate::backend::Backend;
use boxglue_types::{Font, Metrics};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::{Mutex, RwLock};
use thiserror::Error;

/// Error type for managing the recording backend's tables.
#[derive(Error, Debug, Clone)]
pub enum BackendError {
    #[error("Backend table '{0}' lock poisoned")]
    Poisoned(&'static str),
}

/// A single drawing operation issued by a shipout.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum RenderCall {
    Glyph {
        x: f64,
        y: f64,
        font: Font,
        symbol: String,
        dpi: f64,
    },
    RectFilled {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
    },
}

/// A table-driven backend that records its render calls.
///
/// Symbols that were never registered fall back to the backend's default
/// metrics, so every glyph gets a usable box.
#[derive(Debug)]
pub struct RecordingBackend {
    glyphs: RwLock<HashMap<String, Metrics>>,
    kerns: RwLock<HashMap<(String, String), f64>>,
    fallback: Metrics,
    x_height: f64,
    calls: Mutex<Vec<RenderCall>>,
}

impl Default for RecordingBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingBackend {
    /// Point size the registered tables are expressed in.
    pub const REFERENCE_SIZE: f64 = 10.0;

    pub fn new() -> Self {
        Self {
            glyphs: RwLock::new(HashMap::new()),
            kerns: RwLock::new(HashMap::new()),
            fallback: Metrics {
                advance: 6.0,
                width: 5.0,
                height: 7.0,
                iceberg: 7.0,
                x_min: 0.5,
                x_max: 5.5,
                y_min: 0.0,
                y_max: 7.0,
                slanted: false,
            },
            x_height: 4.3,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Replaces the metrics used for unregistered symbols.
    pub fn with_fallback(mut self, metrics: Metrics) -> Self {
        self.fallback = metrics;
        self
    }

    /// Sets the x-height at the reference size.
    pub fn with_x_height(mut self, x_height: f64) -> Self {
        self.x_height = x_height;
        self
    }

    /// Registers the metrics of `symbol` at the reference size.
    ///
    /// # Errors
    ///
    /// Returns `BackendError::Poisoned` if the internal lock is poisoned.
    pub fn add_glyph(
        &self,
        symbol: impl Into<String>,
        metrics: Metrics,
    ) -> Result<(), BackendError> {
        let mut glyphs = self
            .glyphs
            .write()
            .map_err(|_| BackendError::Poisoned("glyphs"))?;
        glyphs.insert(symbol.into(), metrics);
        Ok(())
    }

    /// Registers the kerning between `first` followed by `second` at the
    /// reference size.
    ///
    /// # Errors
    ///
    /// Returns `BackendError::Poisoned` if the internal lock is poisoned.
    pub fn add_kern(
        &self,
        first: impl Into<String>,
        second: impl Into<String>,
        value: f64,
    ) -> Result<(), BackendError> {
        let mut kerns = self
            .kerns
            .write()
            .map_err(|_| BackendError::Poisoned("kerns"))?;
        kerns.insert((first.into(), second.into()), value);
        Ok(())
    }

    /// A snapshot of every render call recorded so far.
    ///
    /// Returns an empty list if the lock is poisoned.
    pub fn calls(&self) -> Vec<RenderCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    /// Drains the recorded render calls.
    pub fn take_calls(&self) -> Vec<RenderCall> {
        self.calls
            .lock()
            .map(|mut c| std::mem::take(&mut *c))
            .unwrap_or_default()
    }

    /// Number of recorded render calls. Returns 0 if the lock is poisoned.
    pub fn len(&self) -> usize {
        self.calls.lock().map(|c| c.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn scale(font: &Font, dpi: f64) -> f64 {
        font.size / Self::REFERENCE_SIZE * dpi / 72.0
    }

    fn record(&self, call: RenderCall) {
        match self.calls.lock() {
            Ok(mut calls) => calls.push(call),
            Err(_) => log::warn!("Recording backend call log lock poisoned, dropping {:?}", call),
        }
    }
}

impl Backend for RecordingBackend {
    fn metrics(&self, symbol: &str, font: &Font, dpi: f64, _math: bool) -> Metrics {
        let base = match self.glyphs.read() {
            Ok(glyphs) => glyphs.get(symbol).copied(),
            Err(_) => {
                log::warn!("Recording backend glyph table lock poisoned");
                None
            }
        };
        let base = base.unwrap_or_else(|| {
            log::trace!("No metrics registered for {:?}, using fallback", symbol);
            self.fallback
        });
        base.scaled(Self::scale(font, dpi))
    }

    fn kern(&self, font1: &Font, sym1: &str, font2: &Font, sym2: &str, dpi: f64) -> f64 {
        if !font1.same_face(font2) {
            return 0.0;
        }
        let kern = self
            .kerns
            .read()
            .ok()
            .and_then(|k| k.get(&(sym1.to_string(), sym2.to_string())).copied())
            .unwrap_or(0.0);
        kern * Self::scale(font1, dpi)
    }

    fn render_glyph(&self, x: f64, y: f64, font: &Font, symbol: &str, dpi: f64) {
        log::trace!("glyph {:?} at ({:.2}, {:.2})", symbol, x, y);
        self.record(RenderCall::Glyph {
            x,
            y,
            font: font.clone(),
            symbol: symbol.to_string(),
            dpi,
        });
    }

    fn render_rect_filled(&self, x1: f64, y1: f64, x2: f64, y2: f64) {
        log::trace!("rect ({:.2}, {:.2})-({:.2}, {:.2})", x1, y1, x2, y2);
        self.record(RenderCall::RectFilled { x1, y1, x2, y2 });
    }

    fn underline_thickness(&self, font: &Font, dpi: f64) -> f64 {
        // Font tables report this too unreliably to be worth reading.
        (0.75 / 12.0 * font.size * dpi) / 72.0
    }

    fn x_height(&self, font: &Font, dpi: f64) -> f64 {
        self.x_height * Self::scale(font, dpi)
    }

    fn name(&self) -> &'static str {
        "RecordingBackend"
    }
}

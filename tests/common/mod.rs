#![allow(dead_code)]

use boxglue::{Font, FontKind, Metrics, RecordingBackend, RenderCall, State};
use std::sync::Arc;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn glyph(width: f64, ascent: f64, descent: f64) -> Metrics {
    Metrics {
        advance: width,
        width,
        height: ascent + descent,
        iceberg: ascent,
        x_min: 0.0,
        x_max: width,
        y_min: -descent,
        y_max: ascent,
        slanted: false,
    }
}

/// A backend knowing `x`, `y` (with a descender) and `z` at the reference
/// size. Their advances equal their widths, so kerned lists get no kerns.
pub fn create_backend() -> Arc<RecordingBackend> {
    let backend = RecordingBackend::new();
    backend.add_glyph("x", glyph(5.0, 4.5, 0.0)).unwrap();
    backend.add_glyph("y", glyph(5.0, 4.5, 2.0)).unwrap();
    backend.add_glyph("z", glyph(4.5, 4.5, 0.0)).unwrap();
    Arc::new(backend)
}

/// A state at the backend's reference size and 72 dpi.
pub fn create_state(backend: &Arc<RecordingBackend>) -> State {
    State::new(
        backend.clone(),
        Font::new("default", RecordingBackend::REFERENCE_SIZE, FontKind::Regular),
        72.0,
    )
}

/// `(symbol, x, y)` of every glyph call, in call order.
pub fn glyph_calls(backend: &RecordingBackend) -> Vec<(String, f64, f64)> {
    backend
        .calls()
        .into_iter()
        .filter_map(|call| match call {
            RenderCall::Glyph { symbol, x, y, .. } => Some((symbol, x, y)),
            RenderCall::RectFilled { .. } => None,
        })
        .collect()
}

/// `(x1, y1, x2, y2)` of every rectangle call, in call order.
pub fn rect_calls(backend: &RecordingBackend) -> Vec<(f64, f64, f64, f64)> {
    backend
        .calls()
        .into_iter()
        .filter_map(|call| match call {
            RenderCall::RectFilled { x1, y1, x2, y2 } => Some((x1, y1, x2, y2)),
            RenderCall::Glyph { .. } => None,
        })
        .collect()
}

#[track_caller]
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}

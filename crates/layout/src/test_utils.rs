use crate::state::State;
use boxglue_traits::RecordingBackend;
use boxglue_types::{Font, FontKind, Metrics};
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::cell::RefCell;
use std::sync::{Arc, Once};

/// Metrics for a glyph sitting on the baseline with `ascent` above it and
/// `descent` below.
pub fn glyph(width: f64, advance: f64, ascent: f64, descent: f64) -> Metrics {
    Metrics {
        advance,
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

/// A backend with a handful of glyphs at the reference size.
///
/// `A` asks for one unit of advance correction that the `AV` kern pair
/// cancels exactly; `g` has a descender; `^` is an accent glyph floating
/// above the baseline with a left bearing of 1.
pub fn create_test_backend() -> Arc<RecordingBackend> {
    let backend = RecordingBackend::new();
    backend.add_glyph("A", glyph(6.0, 7.0, 7.0, 0.0)).unwrap();
    backend.add_glyph("V", glyph(6.0, 6.0, 7.0, 0.0)).unwrap();
    backend.add_glyph("g", glyph(5.0, 5.0, 5.0, 2.0)).unwrap();
    backend.add_glyph("x", glyph(5.0, 5.0, 4.5, 0.0)).unwrap();
    backend.add_glyph(" ", glyph(0.0, 3.0, 0.0, 0.0)).unwrap();
    backend
        .add_glyph(
            "^",
            Metrics {
                x_min: 1.0,
                x_max: 4.0,
                y_min: 7.0,
                y_max: 9.0,
                ..glyph(3.0, 4.0, 9.0, 0.0)
            },
        )
        .unwrap();
    backend.add_kern("A", "V", -1.0).unwrap();
    Arc::new(backend)
}

/// A state at the backend's reference size and 72 dpi, so metrics come back
/// unscaled.
pub fn create_test_state() -> (Arc<RecordingBackend>, State) {
    let backend = create_test_backend();
    let font = Font::new("default", RecordingBackend::REFERENCE_SIZE, FontKind::Regular);
    let state = State::new(backend.clone(), font, 72.0);
    (backend, state)
}

thread_local! {
    static CAPTURED: RefCell<Option<Vec<(Level, String)>>> = const { RefCell::new(None) };
}

/// Forwards to `env_logger` and additionally records what the current
/// thread logs while inside [`capture_logs`].
struct CaptureLogger {
    inner: env_logger::Logger,
}

impl Log for CaptureLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Warn || self.inner.enabled(metadata)
    }

    fn log(&self, record: &Record) {
        CAPTURED.with(|captured| {
            if let Some(records) = captured.borrow_mut().as_mut() {
                records.push((record.level(), record.args().to_string()));
            }
        });
        if self.inner.enabled(record.metadata()) {
            self.inner.log(record);
        }
    }

    fn flush(&self) {
        self.inner.flush();
    }
}

pub fn init_logger() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let inner = env_logger::builder().is_test(true).build();
        let max_level = inner.filter().max(LevelFilter::Warn);
        let logger: &'static CaptureLogger = Box::leak(Box::new(CaptureLogger { inner }));
        if log::set_logger(logger).is_ok() {
            log::set_max_level(max_level);
        }
    });
}

/// Runs `f` and returns the warnings and errors it logged on this thread.
pub fn capture_logs(f: impl FnOnce()) -> Vec<(Level, String)> {
    init_logger();
    CAPTURED.with(|captured| *captured.borrow_mut() = Some(Vec::new()));
    f();
    CAPTURED
        .with(|captured| captured.borrow_mut().take())
        .unwrap_or_default()
        .into_iter()
        .filter(|(level, _)| *level <= Level::Warn)
        .collect()
}

#[track_caller]
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        crate::util::fuzzy_eq(actual, expected),
        "expected {}, got {}",
        expected,
        actual
    );
}

use boxglue_layout::LayoutError;
use boxglue_traits::BackendError;
use thiserror::Error;

/// Top-level error for building, configuring and shipping box trees.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("Backend failed: {0}")]
    Backend(#[from] BackendError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

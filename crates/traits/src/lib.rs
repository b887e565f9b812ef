pub mod backend;
pub mod recording;

pub use backend::{Backend, SharedBackend};
pub use recording::{BackendError, RecordingBackend, RenderCall};

pub mod font;
pub mod metrics;

pub use font::{Font, FontKind};
pub use metrics::Metrics;

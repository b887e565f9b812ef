//! Box-and-glue typesetting.
//!
//! The engine lives in `boxglue-layout`; glyph metrics and drawing come from
//! a [`Backend`]. This crate re-exports both and adds the top-level error.

pub mod error;
pub mod sample;

pub use error::EngineError;

pub use boxglue_layout::builder;
pub use boxglue_layout::{
    Accent, BoxNode, Char, Glue, GlueOrder, GlueSign, GlueSpec, HList, Kern, LayoutConfig,
    LayoutError, List, Node, Rule, Ship, State, SubSuperCluster, VList, determine_order,
};
pub use boxglue_traits::{Backend, BackendError, RecordingBackend, RenderCall, SharedBackend};
pub use boxglue_types::{Font, FontKind, Metrics};

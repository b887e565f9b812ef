use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Unknown glue specification '{0}'.")]
    UnknownGlue(String),
    #[error("{0} node found directly in a vertical list; wrap it in an HList first.")]
    GlyphInVerticalList(&'static str),
    #[error("Invalid layout configuration: {0}")]
    Config(String),
}

pub mod algorithms;
pub mod builder;
pub mod config;
pub mod nodes;
pub mod painting;
pub mod state;
pub mod util;

pub use self::algorithms::pack::{GlueOrder, GlueSign, determine_order};
pub use self::config::{GROW_FACTOR, LayoutConfig, NUM_SIZE_LEVELS, SHRINK_FACTOR};
pub use self::nodes::{
    Accent, BoxNode, Char, Glue, GlueSpec, HList, Kern, List, Node, Rule, SubSuperCluster, VList,
};
pub use self::painting::ship::Ship;
pub use self::state::State;

// Re-export the backend seam so callers need only this crate
pub use boxglue_traits::{Backend, SharedBackend};
pub use boxglue_types::{Font, FontKind, Metrics};

#[cfg(test)]
mod ship_test;
#[cfg(test)]
mod test_utils;

//! Shared bookkeeping for `HList::hpack` and `VList::vpack`.
//!
//! Each node contributes to a [`PackDims`] accumulator through
//! `Node::hpack_dims` / `Node::vpack_dims`; glue also adds its stretch and
//! shrink to the per-order totals. The list then resolves its glue setting
//! from the accumulated totals.

use serde::Serialize;

/// The order of infinity of a glue component.
///
/// Stretch or shrink of a higher order dominates every lower order: as soon
/// as a list contains any `fil` glue, finite glue no longer stretches.
#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum GlueOrder {
    #[default]
    Normal,
    Fil,
    Fill,
    Filll,
}

impl GlueOrder {
    pub const ALL: [GlueOrder; 4] = [
        GlueOrder::Normal,
        GlueOrder::Fil,
        GlueOrder::Fill,
        GlueOrder::Filll,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// The order for `index`, or `None` when out of range.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Whether a packed list's glue is stretched, shrunk, or left alone.
#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum GlueSign {
    #[default]
    Normal,
    Stretching,
    Shrinking,
}

/// Total stretch or shrink, indexed by [`GlueOrder`].
pub type GlueTotals = [f64; 4];

/// Running accumulators while scanning a list's children.
///
/// For horizontal packing `width` is the running natural width and
/// `height`/`depth` the running maxima; for vertical packing `height` is the
/// running natural height, `depth` the depth of the last item, and `width`
/// the running maximum.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PackDims {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    pub stretch: GlueTotals,
    pub shrink: GlueTotals,
}

/// Determines the highest order of glue with a nonzero total.
///
/// Returns [`GlueOrder::Normal`] when every total is zero.
pub fn determine_order(totals: &GlueTotals) -> GlueOrder {
    GlueOrder::ALL
        .iter()
        .rev()
        .copied()
        .find(|order| totals[order.index()] != 0.0)
        .unwrap_or_default()
}

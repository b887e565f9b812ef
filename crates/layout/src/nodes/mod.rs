//! The node variants of the box model.
//!
//! Every typeset item is a [`Node`]. Leaves (glyphs, boxes, rules, glue and
//! kerns) carry fixed or elastic dimensions; [`HList`] and [`VList`] own their
//! children exclusively and get their own dimensions from packing.

mod boxed;
mod cluster;
mod glue;
mod glyph;
mod hlist;
mod kern;
mod list;
mod rule;
mod size;
mod vlist;

pub use self::boxed::BoxNode;
pub use self::cluster::SubSuperCluster;
pub use self::glue::{Glue, GlueSpec};
pub use self::glyph::{Accent, Char};
pub use self::hlist::HList;
pub use self::kern::Kern;
pub use self::list::{GlueSetting, List};
pub use self::rule::Rule;
pub use self::size::SizeLevel;
pub use self::vlist::VList;

use crate::algorithms::pack::PackDims;
use std::fmt;

/// A node in the box model.
#[derive(Debug, Clone)]
pub enum Node {
    Box(BoxNode),
    Char(Char),
    Accent(Accent),
    HList(HList),
    VList(VList),
    Rule(Rule),
    Glue(Glue),
    Kern(Kern),
    SubSuperCluster(SubSuperCluster),
}

impl Node {
    pub fn width(&self) -> f64 {
        match self {
            Node::Box(b) => b.width(),
            Node::Char(c) => c.width(),
            Node::Accent(a) => a.width(),
            Node::HList(l) => l.width(),
            Node::VList(l) => l.width(),
            Node::Rule(r) => r.width(),
            Node::Glue(g) => g.width(),
            Node::Kern(k) => k.width(),
            Node::SubSuperCluster(c) => c.width(),
        }
    }

    pub fn height(&self) -> f64 {
        match self {
            Node::Box(b) => b.height(),
            Node::Char(c) => c.height(),
            Node::Accent(a) => a.height(),
            Node::HList(l) => l.height(),
            Node::VList(l) => l.height(),
            Node::Rule(r) => r.height(),
            Node::Glue(_) | Node::Kern(_) => 0.0,
            Node::SubSuperCluster(c) => c.height(),
        }
    }

    pub fn depth(&self) -> f64 {
        match self {
            Node::Box(b) => b.depth(),
            Node::Char(c) => c.depth(),
            Node::Accent(a) => a.depth(),
            Node::HList(l) => l.depth(),
            Node::VList(l) => l.depth(),
            Node::Rule(r) => r.depth(),
            Node::Glue(_) | Node::Kern(_) => 0.0,
            Node::SubSuperCluster(c) => c.depth(),
        }
    }

    /// The extra spacing this node needs before `next`.
    ///
    /// Only glyph nodes ask for kerning; everything else returns 0.
    pub fn kerning(&self, next: Option<&Node>) -> f64 {
        match self {
            Node::Char(c) => c.kerning(next),
            Node::Accent(a) => a.kerning(next),
            _ => 0.0,
        }
    }

    /// Shrinks this node (and everything it owns) one size level.
    pub fn shrink(&mut self) {
        match self {
            Node::Box(b) => {
                b.shrink();
            }
            Node::Char(c) => c.shrink(),
            Node::Accent(a) => a.shrink(),
            Node::HList(l) => l.shrink(),
            Node::VList(l) => l.shrink(),
            Node::Rule(r) => r.shrink(),
            Node::Glue(g) => g.shrink(),
            Node::Kern(k) => k.shrink(),
            Node::SubSuperCluster(c) => c.shrink(),
        }
    }

    /// Grows this node (and everything it owns) one size level.
    pub fn grow(&mut self) {
        match self {
            Node::Box(b) => b.grow(),
            Node::Char(c) => c.grow(),
            Node::Accent(a) => a.grow(),
            Node::HList(l) => l.grow(),
            Node::VList(l) => l.grow(),
            Node::Rule(r) => r.grow(),
            Node::Glue(g) => g.grow(),
            Node::Kern(k) => k.grow(),
            Node::SubSuperCluster(c) => c.grow(),
        }
    }

    /// Draws this node with its reference point at `(x, y)`.
    ///
    /// Only glyphs draw themselves; rules are drawn by the shipout with their
    /// resolved running dimensions, and lists are traversed by the shipout.
    pub fn render(&self, x: f64, y: f64) {
        match self {
            Node::Char(c) => c.render(x, y),
            Node::Accent(a) => a.render(x, y),
            _ => {}
        }
    }

    /// Whether this is a glyph node, which may only appear in horizontal lists.
    pub fn is_glyph(&self) -> bool {
        matches!(self, Node::Char(_) | Node::Accent(_))
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::Box(_) => "Box",
            Node::Char(_) => "Char",
            Node::Accent(_) => "Accent",
            Node::HList(_) => "HList",
            Node::VList(_) => "VList",
            Node::Rule(_) => "Rule",
            Node::Glue(_) => "Glue",
            Node::Kern(_) => "Kern",
            Node::SubSuperCluster(_) => "SubSuperCluster",
        }
    }

    pub(crate) fn hpack_dims(&self, dims: &mut PackDims) {
        match self {
            Node::Box(b) => b.hpack_dims(dims),
            Node::Rule(r) => r.hpack_dims(dims),
            Node::Char(c) => c.hpack_dims(dims),
            Node::Accent(a) => a.hpack_dims(dims),
            Node::HList(l) => l.list().hpack_dims(dims),
            Node::VList(l) => l.list().hpack_dims(dims),
            Node::SubSuperCluster(c) => c.hlist().list().hpack_dims(dims),
            Node::Glue(g) => g.hpack_dims(dims),
            Node::Kern(k) => dims.width += k.width(),
        }
    }

    pub(crate) fn vpack_dims(&self, dims: &mut PackDims) {
        match self {
            Node::Box(b) => b.vpack_dims(dims),
            Node::Rule(r) => r.vpack_dims(dims),
            Node::HList(l) => l.list().vpack_dims(dims),
            Node::VList(l) => l.list().vpack_dims(dims),
            Node::SubSuperCluster(c) => c.hlist().list().vpack_dims(dims),
            Node::Glue(g) => g.vpack_dims(dims),
            Node::Kern(k) => {
                dims.height += dims.depth + k.width();
                dims.depth = 0.0;
            }
            // VList constructors reject glyphs, so this is a construction bug.
            Node::Char(_) | Node::Accent(_) => {
                panic!("{} node in vertical list", self.kind_name())
            }
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Box(b) => write!(f, "Box{{w={}, h={}, d={}}}", b.width(), b.height(), b.depth()),
            Node::Char(c) => fmt::Display::fmt(c, f),
            Node::Accent(a) => fmt::Display::fmt(a, f),
            Node::HList(l) => write!(f, "HList[{}]", l.list()),
            Node::VList(l) => write!(f, "VList[{}]", l.list()),
            Node::Rule(r) => fmt::Display::fmt(r, f),
            Node::Glue(g) => fmt::Display::fmt(g, f),
            Node::Kern(k) => fmt::Display::fmt(k, f),
            Node::SubSuperCluster(c) => write!(f, "SubSuper[{}]", c.hlist().list()),
        }
    }
}

macro_rules! impl_from_node {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for Node {
                fn from(node: $ty) -> Self {
                    Node::$variant(node)
                }
            }
        )*
    };
}

impl_from_node!(
    Box(BoxNode),
    Char(Char),
    Accent(Accent),
    HList(HList),
    VList(VList),
    Rule(Rule),
    Glue(Glue),
    Kern(Kern),
    SubSuperCluster(SubSuperCluster),
);

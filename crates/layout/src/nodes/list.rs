use super::Node;
use super::boxed::BoxNode;
use crate::algorithms::pack::{GlueOrder, GlueSign, GlueTotals, PackDims, determine_order};
use crate::config::{GROW_FACTOR, SHRINK_FACTOR};
use std::fmt;

/// The glue setting of a packed list.
///
/// `set` is the signed ratio applied to every glue component of the selected
/// `order`: positive when stretching, negative when shrinking.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GlueSetting {
    pub set: f64,
    pub sign: GlueSign,
    pub order: GlueOrder,
}

/// A list of nodes with aggregate dimensions.
///
/// `HList` and `VList` wrap a `List` and give it a packing direction; packing
/// is the only thing that writes the aggregate box and the glue setting.
#[derive(Debug, Clone, Default)]
pub struct List {
    pub(crate) bx: BoxNode,
    pub(crate) shift: f64,
    pub(crate) children: Vec<Node>,
    pub(crate) glue: GlueSetting,
}

impl List {
    pub fn new(children: Vec<Node>) -> Self {
        Self {
            children,
            ..Self::default()
        }
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn width(&self) -> f64 {
        self.bx.width()
    }

    pub fn height(&self) -> f64 {
        self.bx.height()
    }

    pub fn depth(&self) -> f64 {
        self.bx.depth()
    }

    /// Cross-axis offset applied when this list is shipped inside its parent.
    pub fn shift(&self) -> f64 {
        self.shift
    }

    pub fn glue(&self) -> GlueSetting {
        self.glue
    }

    pub fn shrink(&mut self) {
        for node in &mut self.children {
            node.shrink();
        }
        if self.bx.shrink() {
            self.shift *= SHRINK_FACTOR;
            self.glue.set *= SHRINK_FACTOR;
        }
    }

    pub fn grow(&mut self) {
        for node in &mut self.children {
            node.grow();
        }
        self.bx.grow();
        self.shift *= GROW_FACTOR;
        self.glue.set *= GROW_FACTOR;
    }

    /// Resolves the glue setting needed to absorb `slack`.
    ///
    /// An unmet slack on a non-empty list (no elastic capacity at all, or
    /// more shrinking than finite glue allows) is reported, not fatal.
    pub(crate) fn set_glue(&mut self, slack: f64, dims: &PackDims, kind: &'static str) {
        if slack == 0.0 {
            self.glue = GlueSetting::default();
            return;
        }
        let (sign, totals): (GlueSign, &GlueTotals) = if slack > 0.0 {
            (GlueSign::Stretching, &dims.stretch)
        } else {
            (GlueSign::Shrinking, &dims.shrink)
        };
        let order = determine_order(totals);
        let total = totals[order.index()];
        self.glue.order = order;
        if total != 0.0 {
            self.glue.sign = sign;
            self.glue.set = slack / total;
        } else {
            self.glue.sign = GlueSign::Normal;
            self.glue.set = 0.0;
        }

        if order != GlueOrder::Normal || self.children.is_empty() {
            return;
        }
        let unmet = match sign {
            GlueSign::Stretching => total == 0.0,
            _ => total == 0.0 || -slack > total,
        };
        if unmet {
            let badness = if slack > 0.0 { "underfull" } else { "overfull" };
            log::warn!(
                "{} {} ({:.3} units unabsorbed): {}",
                badness,
                kind,
                slack.abs(),
                self
            );
        }
    }

    pub(crate) fn hpack_dims(&self, dims: &mut PackDims) {
        dims.width += self.bx.width();
        if self.bx.height().is_infinite() || self.bx.depth().is_infinite() {
            return;
        }
        dims.height = dims.height.max(self.bx.height() - self.shift);
        dims.depth = dims.depth.max(self.bx.depth() + self.shift);
    }

    pub(crate) fn vpack_dims(&self, dims: &mut PackDims) {
        dims.height += dims.depth + self.bx.height();
        dims.depth = self.bx.depth();
        if self.bx.width().is_infinite() {
            return;
        }
        dims.width = dims.width.max(self.bx.width());
    }
}

impl fmt::Display for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, node) in self.children.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", node)?;
        }
        Ok(())
    }
}

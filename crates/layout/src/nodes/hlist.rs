use super::Node;
use super::kern::Kern;
use super::list::{GlueSetting, List};
use crate::algorithms::pack::{GlueOrder, GlueSign, PackDims};

/// A horizontal list of nodes.
#[derive(Debug, Clone, Default)]
pub struct HList {
    list: List,
}

impl HList {
    /// Builds a list from `elements` and packs it to its natural width.
    ///
    /// With `do_kern`, a `Kern` is inserted between adjacent children
    /// wherever the first asks for extra spacing before the second. The last
    /// child never gets a trailing kern.
    pub fn new(elements: Vec<Node>, do_kern: bool) -> Self {
        let mut hlist = Self {
            list: List::new(elements),
        };
        if do_kern {
            hlist.kern();
        }
        hlist.hpack(0.0, true);
        hlist
    }

    /// Inserts `Kern` nodes between children that need kerning.
    ///
    /// The children themselves determine the amount; this only rebuilds the
    /// list.
    fn kern(&mut self) {
        let children = std::mem::take(&mut self.list.children);
        let mut kerned = Vec::with_capacity(children.len());
        let mut iter = children.into_iter().peekable();
        while let Some(node) = iter.next() {
            let dist = iter.peek().map_or(0.0, |next| node.kerning(Some(next)));
            kerned.push(node);
            if dist != 0.0 {
                kerned.push(Kern::new(dist).into());
            }
        }
        self.list.children = kerned;
    }

    /// Computes the dimensions of the list and sets its glue so the list is
    /// exactly `width` wide.
    ///
    /// With `additional`, the target is the natural width plus `width`
    /// instead. Material may stick out when the list is overfull or contains
    /// negative glue.
    pub fn hpack(&mut self, width: f64, additional: bool) {
        let mut dims = PackDims::default();
        for node in &self.list.children {
            node.hpack_dims(&mut dims);
        }
        self.list.bx.set_height(dims.height);
        self.list.bx.set_depth(dims.depth);

        let width = if additional { width + dims.width } else { width };
        self.list.bx.set_width(width);
        self.list.set_glue(width - dims.width, &dims, "HList");
    }

    pub fn list(&self) -> &List {
        &self.list
    }

    pub fn children(&self) -> &[Node] {
        self.list.children()
    }

    pub fn width(&self) -> f64 {
        self.list.width()
    }

    pub fn height(&self) -> f64 {
        self.list.height()
    }

    pub fn depth(&self) -> f64 {
        self.list.depth()
    }

    pub fn shift(&self) -> f64 {
        self.list.shift
    }

    pub fn set_shift(&mut self, shift: f64) {
        self.list.shift = shift;
    }

    pub fn glue(&self) -> GlueSetting {
        self.list.glue
    }

    pub fn glue_order(&self) -> GlueOrder {
        self.list.glue.order
    }

    pub fn glue_sign(&self) -> GlueSign {
        self.list.glue.sign
    }

    pub fn glue_set(&self) -> f64 {
        self.list.glue.set
    }

    pub fn shrink(&mut self) {
        self.list.shrink();
    }

    pub fn grow(&mut self) {
        self.list.grow();
    }
}

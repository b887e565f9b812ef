use super::Node;
use super::list::{GlueSetting, List};
use crate::LayoutError;
use crate::algorithms::pack::{GlueOrder, GlueSign, PackDims};

/// A vertical list of nodes.
///
/// Glyphs may not appear directly in a vertical list; they must be wrapped in
/// an `HList` first.
#[derive(Debug, Clone, Default)]
pub struct VList {
    list: List,
}

impl VList {
    /// Builds a list from `elements` and packs it to its natural height with
    /// unbounded depth.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::GlyphInVerticalList` if any element is a `Char`
    /// or `Accent`.
    pub fn of(elements: Vec<Node>) -> Result<Self, LayoutError> {
        if let Some(glyph) = elements.iter().find(|n| n.is_glyph()) {
            return Err(LayoutError::GlyphInVerticalList(glyph.kind_name()));
        }
        let mut vlist = Self {
            list: List::new(elements),
        };
        vlist.vpack(0.0, true, f64::INFINITY);
        Ok(vlist)
    }

    /// Computes the dimensions of the list and sets its glue so the list is
    /// exactly `height` tall.
    ///
    /// With `additional`, the target is the natural height plus `height`.
    /// Depth beyond `max_depth` is moved into the height, so the box depth
    /// never exceeds `max_depth`.
    pub fn vpack(&mut self, height: f64, additional: bool, max_depth: f64) {
        let mut dims = PackDims::default();
        for node in &self.list.children {
            node.vpack_dims(&mut dims);
        }
        self.list.bx.set_width(dims.width);

        let mut natural = dims.height;
        if dims.depth > max_depth {
            natural += dims.depth - max_depth;
            self.list.bx.set_depth(max_depth);
        } else {
            self.list.bx.set_depth(dims.depth);
        }

        let height = if additional { height + natural } else { height };
        self.list.bx.set_height(height);
        self.list.set_glue(height - natural, &dims, "VList");
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

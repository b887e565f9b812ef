use super::size::SizeLevel;
use crate::algorithms::pack::PackDims;
use crate::config::{GROW_FACTOR, SHRINK_FACTOR};

/// A node with fixed, non-elastic dimensions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoxNode {
    level: SizeLevel,
    width: f64,
    height: f64,
    depth: f64,
}

impl BoxNode {
    pub fn new(width: f64, height: f64, depth: f64) -> Self {
        Self {
            level: SizeLevel::default(),
            width,
            height,
            depth,
        }
    }

    /// A box with a width but no height nor depth.
    pub fn hbox(width: f64) -> Self {
        Self::new(width, 0.0, 0.0)
    }

    /// A box with a height and depth but no width.
    pub fn vbox(height: f64, depth: f64) -> Self {
        Self::new(0.0, height, depth)
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn depth(&self) -> f64 {
        self.depth
    }

    pub fn level(&self) -> SizeLevel {
        self.level
    }

    /// Shrinks one level. Returns whether the dimensions were scaled.
    pub fn shrink(&mut self) -> bool {
        let scaled = self.level.shrink();
        if scaled {
            self.scale(SHRINK_FACTOR);
        }
        scaled
    }

    pub fn grow(&mut self) {
        self.level.grow();
        self.scale(GROW_FACTOR);
    }

    fn scale(&mut self, factor: f64) {
        self.width *= factor;
        self.height *= factor;
        self.depth *= factor;
    }

    pub(crate) fn set_width(&mut self, width: f64) {
        self.width = width;
    }

    pub(crate) fn set_height(&mut self, height: f64) {
        self.height = height;
    }

    pub(crate) fn set_depth(&mut self, depth: f64) {
        self.depth = depth;
    }

    pub(crate) fn hpack_dims(&self, dims: &mut PackDims) {
        dims.width += self.width;
        // Running dimensions must not drag the whole list to infinity.
        if self.height.is_infinite() || self.depth.is_infinite() {
            return;
        }
        dims.height = dims.height.max(self.height);
        dims.depth = dims.depth.max(self.depth);
    }

    pub(crate) fn vpack_dims(&self, dims: &mut PackDims) {
        dims.height += dims.depth + self.height;
        dims.depth = self.depth;
        if self.width.is_infinite() {
            return;
        }
        dims.width = dims.width.max(self.width);
    }
}

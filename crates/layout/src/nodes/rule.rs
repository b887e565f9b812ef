use super::boxed::BoxNode;
use crate::algorithms::pack::PackDims;
use crate::state::State;
use boxglue_traits::SharedBackend;
use std::fmt;

/// A solid black rectangle.
///
/// Like an `HList`, a rule has a width, height and depth. Any of them may be
/// infinite, in which case shipout runs the rule up to the boundary of the
/// innermost enclosing box (a "running dimension"). The width never runs in
/// a horizontal list; the height and depth never run in a vertical list.
#[derive(Debug, Clone)]
pub struct Rule {
    bx: BoxNode,
    backend: SharedBackend,
}

impl Rule {
    pub fn new(width: f64, height: f64, depth: f64, state: &State) -> Self {
        Self {
            bx: BoxNode::new(width, height, depth),
            backend: state.backend().clone(),
        }
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

    pub fn shrink(&mut self) {
        self.bx.shrink();
    }

    pub fn grow(&mut self) {
        self.bx.grow();
    }

    /// Fills the `width` x `height` rectangle whose corner is at `(x, y)`.
    pub fn render_rect(&self, x: f64, y: f64, width: f64, height: f64) {
        self.backend.render_rect_filled(x, y, x + width, y + height);
    }

    pub(crate) fn hpack_dims(&self, dims: &mut PackDims) {
        self.bx.hpack_dims(dims);
    }

    pub(crate) fn vpack_dims(&self, dims: &mut PackDims) {
        self.bx.vpack_dims(dims);
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rule{{w={}, h={}, d={}}}",
            self.width(),
            self.height(),
            self.depth()
        )
    }
}

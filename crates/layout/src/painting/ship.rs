//! Ships packed boxes to the backend.
//!
//! Since boxes can be inside of boxes inside of boxes, the main work is done
//! by two mutually recursive routines, `hlist_out` and `vlist_out`, which
//! traverse the horizontal and vertical lists and issue render calls at
//! absolute coordinates. Coordinates grow to the right and downward; the
//! origin passed to [`Ship::call`] is the top-left corner of the outer box.

use crate::algorithms::pack::{GlueOrder, GlueSign};
use crate::nodes::{Glue, HList, List, Node};
use crate::util::vet_glue;

#[derive(Debug, Default, Clone, Copy)]
struct Cursor {
    /// Current nesting depth.
    s: usize,
    v: f64,
    h: f64,
}

#[derive(Debug, Default, Clone, Copy)]
struct Offset {
    h: f64,
    v: f64,
}

/// Running glue state for one list being shipped.
///
/// Glue of the list's order accumulates into `total`; each glue item moves by
/// its width plus the change in the rounded cumulative adjustment, so rounding
/// errors never add up along a long run of glue.
struct GlueRun {
    sign: GlueSign,
    order: GlueOrder,
    set: f64,
    total: f64,
    rounded: f64,
}

impl GlueRun {
    fn new(list: &List) -> Self {
        let glue = list.glue();
        Self {
            sign: glue.sign,
            order: glue.order,
            set: glue.set,
            total: 0.0,
            rounded: 0.0,
        }
    }

    fn advance(&mut self, glue: &Glue) -> f64 {
        let previous = self.rounded;
        let elastic = match self.sign {
            GlueSign::Normal => None,
            GlueSign::Stretching => {
                (glue.stretch_order() == self.order).then_some(glue.stretch())
            }
            GlueSign::Shrinking => {
                (glue.shrink_order() == self.order).then_some(glue.shrink_amount())
            }
        };
        if let Some(amount) = elastic {
            self.total += amount;
            self.rounded = vet_glue(self.set * self.total).round();
        }
        glue.width() + (self.rounded - previous)
    }
}

/// The shipout traversal.
#[derive(Debug, Default)]
pub struct Ship {
    max_push: usize,
    cur: Cursor,
    off: Offset,
}

impl Ship {
    pub fn new() -> Self {
        Self::default()
    }

    /// The deepest list nesting reached by the last shipout.
    pub fn max_push(&self) -> usize {
        self.max_push
    }

    /// Ships `root` with its top-left corner at `(ox, oy)`.
    pub fn call(&mut self, ox: f64, oy: f64, root: &HList) {
        self.max_push = 0;
        self.cur = Cursor::default();
        self.off = Offset {
            h: ox,
            v: oy + root.height(),
        };
        self.hlist_out(root.list());
        log::debug!(
            "Shipped {}x{}+{} box at ({}, {}), max nesting {}",
            root.width(),
            root.height(),
            root.depth(),
            ox,
            oy,
            self.max_push
        );
    }

    fn push(&mut self) {
        self.cur.s += 1;
        self.max_push = self.max_push.max(self.cur.s);
    }

    fn hlist_out(&mut self, list: &List) {
        let mut glue = GlueRun::new(list);
        let base_line = self.cur.v;
        self.push();

        for node in list.children() {
            match node {
                Node::Char(_) | Node::Accent(_) => {
                    node.render(self.cur.h + self.off.h, self.cur.v + self.off.v);
                    self.cur.h += node.width();
                }
                Node::Kern(k) => self.cur.h += k.width(),
                Node::HList(l) => self.nested_in_hlist(l.list(), false, base_line),
                Node::VList(l) => self.nested_in_hlist(l.list(), true, base_line),
                Node::SubSuperCluster(c) => {
                    self.nested_in_hlist(c.hlist().list(), false, base_line)
                }
                Node::Glue(g) => self.cur.h += glue.advance(g),
                Node::Rule(rule) => {
                    let width = rule.width();
                    let mut height = rule.height();
                    let mut depth = rule.depth();
                    if height.is_infinite() {
                        height = list.height();
                    }
                    if depth.is_infinite() {
                        depth = list.depth();
                    }
                    if height > 0.0 && width > 0.0 {
                        self.cur.v = base_line + depth;
                        rule.render_rect(
                            self.cur.h + self.off.h,
                            self.cur.v + self.off.v,
                            width,
                            height,
                        );
                        self.cur.v = base_line;
                    }
                    self.cur.h += width;
                }
                Node::Box(b) => self.cur.h += b.width(),
            }
        }
        self.cur.s -= 1;
    }

    fn vlist_out(&mut self, list: &List) {
        let mut glue = GlueRun::new(list);
        let left_edge = self.cur.h;
        self.push();
        self.cur.v -= list.height();

        for node in list.children() {
            match node {
                Node::Kern(k) => self.cur.v += k.width(),
                Node::HList(l) => self.nested_in_vlist(l.list(), false, left_edge),
                Node::VList(l) => self.nested_in_vlist(l.list(), true, left_edge),
                Node::SubSuperCluster(c) => {
                    self.nested_in_vlist(c.hlist().list(), false, left_edge)
                }
                Node::Glue(g) => self.cur.v += glue.advance(g),
                Node::Rule(rule) => {
                    let mut width = rule.width();
                    if width.is_infinite() {
                        width = list.width();
                    }
                    let height = rule.height() + rule.depth();
                    self.cur.v += height;
                    if height > 0.0 && width > 0.0 {
                        rule.render_rect(
                            self.cur.h + self.off.h,
                            self.cur.v + self.off.v,
                            width,
                            height,
                        );
                    }
                }
                Node::Box(b) => self.cur.v += b.height() + b.depth(),
                Node::Char(_) | Node::Accent(_) => {
                    panic!("{} node found in vertical list", node.kind_name())
                }
            }
        }
        self.cur.s -= 1;
    }

    fn list_out(&mut self, inner: &List, vertical: bool) {
        if vertical {
            self.vlist_out(inner);
        } else {
            self.hlist_out(inner);
        }
    }

    fn nested_in_hlist(&mut self, inner: &List, vertical: bool, base_line: f64) {
        if inner.is_empty() {
            self.cur.h += inner.width();
            return;
        }
        let edge = self.cur.h;
        self.cur.v = base_line + inner.shift();
        self.list_out(inner, vertical);
        self.cur.h = edge + inner.width();
        self.cur.v = base_line;
    }

    fn nested_in_vlist(&mut self, inner: &List, vertical: bool, left_edge: f64) {
        if inner.is_empty() {
            self.cur.v += inner.height() + inner.depth();
            return;
        }
        self.cur.v += inner.height();
        self.cur.h = left_edge + inner.shift();
        let cur_v = self.cur.v;
        self.list_out(inner, vertical);
        self.cur.v = cur_v + inner.depth();
        self.cur.h = left_edge;
    }
}

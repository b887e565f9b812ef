//! Small sample trees used by the demo binary and the benchmarks.

use boxglue_layout::builder::{hcentered, hrule};
use boxglue_layout::{Char, Glue, GlueOrder, HList, Kern, LayoutError, Node, State, VList};

/// Glyph nodes for each character of `text`.
pub fn glyphs(text: &str, state: &State) -> Vec<Node> {
    text.chars()
        .map(|c| Char::new(c.to_string(), state, true).into())
        .collect()
}

/// A fraction-like stack: `numerator` over a rule over `denominator`, each
/// line centered on the wider one.
///
/// # Errors
///
/// Fails only if a glyph ends up directly in the vertical stack, which the
/// construction here never does.
pub fn fraction(state: &State, numerator: &str, denominator: &str) -> Result<HList, LayoutError> {
    let num = HList::new(glyphs(numerator, state), true);
    let den = HList::new(glyphs(denominator, state), true);
    let width = num.width().max(den.width());

    let mut num = hcentered(vec![num.into()]);
    num.hpack(width, false);
    let mut den = hcentered(vec![den.into()]);
    den.hpack(width, false);

    let thickness = state
        .backend()
        .underline_thickness(&state.font, state.dpi);
    let gap = 2.0 * thickness;
    let stack = VList::of(vec![
        num.into(),
        Kern::new(gap).into(),
        hrule(state, thickness).into(),
        Kern::new(gap).into(),
        den.into(),
    ])?;
    Ok(HList::new(vec![stack.into()], false))
}

/// A line of `count` copies of `symbol` separated by finite glue, packed to
/// `width`.
pub fn glue_run(state: &State, symbol: &str, count: usize, width: f64) -> HList {
    let mut nodes = Vec::with_capacity(count * 2);
    for i in 0..count {
        if i > 0 {
            nodes.push(Glue::new(1.0, 1.0, GlueOrder::Normal, 0.5, GlueOrder::Normal).into());
        }
        nodes.push(Char::new(symbol, state, false).into());
    }
    let mut line = HList::new(nodes, true);
    line.hpack(width, false);
    line
}

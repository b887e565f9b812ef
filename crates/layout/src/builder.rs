//! Convenience constructors for common box-model shapes.

use crate::LayoutError;
use crate::nodes::{Char, Glue, GlueSpec, HList, Node, Rule, VList};
use crate::state::State;

/// A horizontal rule: runs the full width of its enclosing vertical list.
///
/// A negative `thickness` uses the backend's underline thickness for the
/// current font.
pub fn hrule(state: &State, thickness: f64) -> Rule {
    let thickness = if thickness < 0.0 {
        state
            .backend()
            .underline_thickness(&state.font, state.dpi)
    } else {
        thickness
    };
    let half = 0.5 * thickness;
    Rule::new(f64::INFINITY, half, half, state)
}

/// A vertical rule: runs the full height and depth of its enclosing
/// horizontal list.
pub fn vrule(state: &State) -> Rule {
    let thickness = state
        .backend()
        .underline_thickness(&state.font, state.dpi);
    Rule::new(thickness, f64::INFINITY, f64::INFINITY, state)
}

fn centered(elements: Vec<Node>) -> Vec<Node> {
    let mut nodes = Vec::with_capacity(elements.len() + 2);
    nodes.push(Glue::from_spec(GlueSpec::Ss).into());
    nodes.extend(elements);
    nodes.push(Glue::from_spec(GlueSpec::Ss).into());
    nodes
}

/// An `HList` whose contents are centered within its enclosing box.
pub fn hcentered(elements: Vec<Node>) -> HList {
    HList::new(centered(elements), false)
}

/// A `VList` whose contents are centered within its enclosing box.
///
/// # Errors
///
/// Returns `LayoutError::GlyphInVerticalList` if any element is a glyph.
pub fn vcentered(elements: Vec<Node>) -> Result<VList, LayoutError> {
    VList::of(centered(elements))
}

/// Creates `symbol` as close to the given height and depth as possible.
///
/// See [`auto_height_char_from`] for the scaling rules; this variant only
/// considers the state's current font.
pub fn auto_height_char(
    symbol: &str,
    height: f64,
    depth: f64,
    state: &State,
    factor: Option<f64>,
) -> HList {
    auto_height_char_from(symbol, &[state.font.name.as_str()], height, depth, state, factor)
}

/// Creates `symbol` as close to the given height and depth as possible,
/// choosing among sized font alternatives.
///
/// The first alternative whose natural height+depth reaches the target (less
/// a fifth of the x-height, so regular-sized glyphs with descenders still pick
/// the first size) is used; otherwise the last one. The glyph is then scaled
/// by `factor`, or to exactly the target size when `factor` is `None` or not
/// positive, and the resulting list is shifted so its depth lines up with
/// `depth`.
pub fn auto_height_char_from(
    symbol: &str,
    alternatives: &[&str],
    height: f64,
    depth: f64,
    state: &State,
    factor: Option<f64>,
) -> HList {
    let target = height + depth;
    let x_height = state.backend().x_height(&state.font, state.dpi);

    let mut chosen = state.clone();
    let mut ch = Char::new(symbol, &chosen, true);
    for name in alternatives {
        let mut font = state.font.clone();
        font.name = name.to_string();
        chosen = state.with_font(font);
        ch = Char::new(symbol, &chosen, true);
        if ch.height() + ch.depth() >= target - 0.2 * x_height {
            break;
        }
    }

    let natural = ch.height() + ch.depth();
    let factor = match factor {
        Some(factor) if factor > 0.0 => factor,
        _ if natural > 0.0 => target / natural,
        _ => 1.0,
    };
    log::trace!(
        "auto-height {:?} in {}: target {:.3}, natural {:.3}, factor {:.3}",
        symbol,
        chosen.font.name,
        target,
        natural,
        factor
    );

    let ch = Char::new(symbol, &chosen.with_font_size(factor), true);
    let shift = depth - ch.depth();
    let mut hlist = HList::new(vec![ch.into()], true);
    hlist.set_shift(shift);
    hlist
}

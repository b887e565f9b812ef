use crate::algorithms::pack::GlueOrder;
use crate::builder::hrule;
use crate::nodes::{Accent, BoxNode, Char, Glue, HList, Node, Rule, SubSuperCluster, VList};
use crate::painting::ship::Ship;
use crate::test_utils::{assert_close, create_test_state, init_logger};
use boxglue_traits::{RecordingBackend, RenderCall};

fn glyphs(backend: &RecordingBackend) -> Vec<(String, f64, f64)> {
    backend
        .calls()
        .into_iter()
        .filter_map(|call| match call {
            RenderCall::Glyph { symbol, x, y, .. } => Some((symbol, x, y)),
            _ => None,
        })
        .collect()
}

fn rects(backend: &RecordingBackend) -> Vec<(f64, f64, f64, f64)> {
    backend
        .calls()
        .into_iter()
        .filter_map(|call| match call {
            RenderCall::RectFilled { x1, y1, x2, y2 } => Some((x1, y1, x2, y2)),
            _ => None,
        })
        .collect()
}

fn fil() -> Node {
    Glue::new(0.0, 1.0, GlueOrder::Fil, 0.0, GlueOrder::Normal).into()
}

fn stretch(width: f64, amount: f64) -> Node {
    Glue::new(width, amount, GlueOrder::Normal, 0.0, GlueOrder::Normal).into()
}

#[test]
fn test_glue_spreads_horizontal_material() {
    init_logger();
    let (backend, state) = create_test_state();
    let mut hlist = HList::new(
        vec![
            Rule::new(10.0, 1.0, 0.0, &state).into(),
            stretch(0.0, 1.0),
            Rule::new(5.0, 1.0, 0.0, &state).into(),
        ],
        false,
    );
    hlist.hpack(20.0, false);
    assert_close(hlist.glue_set(), 5.0);

    Ship::new().call(0.0, 0.0, &hlist);
    assert_eq!(
        rects(&backend),
        vec![(0.0, 1.0, 10.0, 2.0), (15.0, 1.0, 20.0, 2.0)]
    );
}

#[test]
fn test_glyphs_sit_on_the_baseline() {
    let (backend, state) = create_test_state();
    let mut hlist = HList::new(
        vec![
            Char::new("A", &state, false).into(),
            fil(),
            Char::new("x", &state, false).into(),
        ],
        false,
    );
    hlist.hpack(20.0, false);
    assert_eq!(hlist.glue_order(), GlueOrder::Fil);

    Ship::new().call(0.0, 0.0, &hlist);
    assert_eq!(
        glyphs(&backend),
        vec![("A".to_string(), 0.0, 7.0), ("x".to_string(), 15.0, 7.0)]
    );
}

#[test]
fn test_origin_offsets_everything() {
    let (backend, state) = create_test_state();
    let hlist = HList::new(vec![Char::new("A", &state, false).into()], false);
    Ship::new().call(10.0, 20.0, &hlist);
    assert_eq!(glyphs(&backend), vec![("A".to_string(), 10.0, 27.0)]);
}

#[test]
fn test_shifted_hlist_drops_below_baseline() {
    let (backend, state) = create_test_state();
    let mut inner = HList::new(vec![Char::new("A", &state, false).into()], false);
    inner.set_shift(2.0);
    let outer = HList::new(vec![BoxNode::hbox(3.0).into(), inner.into()], false);
    assert_close(outer.height(), 5.0);

    let mut ship = Ship::new();
    ship.call(0.0, 0.0, &outer);
    assert_eq!(glyphs(&backend), vec![("A".to_string(), 3.0, 7.0)]);
    assert_eq!(ship.max_push(), 2);
}

#[test]
fn test_vertical_list_stacks_lines_in_order() {
    let (backend, state) = create_test_state();
    let line = |s: &str| -> Node {
        HList::new(vec![Char::new(s, &state, false).into()], false).into()
    };
    let vlist = VList::of(vec![line("A"), line("g")]).unwrap();
    assert_close(vlist.height(), 12.0);
    assert_close(vlist.depth(), 2.0);
    let page = HList::new(vec![vlist.into()], false);

    let mut ship = Ship::new();
    ship.call(0.0, 0.0, &page);
    // The last line's baseline is the page's baseline.
    assert_eq!(
        glyphs(&backend),
        vec![("A".to_string(), 0.0, 7.0), ("g".to_string(), 0.0, 12.0)]
    );
    assert_eq!(ship.max_push(), 3);
}

#[test]
fn test_running_rule_fills_hlist_height() {
    let (backend, state) = create_test_state();
    let hlist = HList::new(
        vec![
            Char::new("A", &state, false).into(),
            Rule::new(1.0, f64::INFINITY, f64::INFINITY, &state).into(),
            Char::new("g", &state, false).into(),
        ],
        false,
    );
    Ship::new().call(0.0, 0.0, &hlist);
    assert_eq!(rects(&backend), vec![(6.0, 9.0, 7.0, 16.0)]);
    assert_eq!(
        glyphs(&backend),
        vec![("A".to_string(), 0.0, 7.0), ("g".to_string(), 7.0, 7.0)]
    );
}

#[test]
fn test_running_rule_fills_vlist_width() {
    let (backend, state) = create_test_state();
    let line: Node = HList::new(vec![Char::new("A", &state, false).into()], false).into();
    let vlist = VList::of(vec![line, hrule(&state, 2.0).into()]).unwrap();
    assert_close(vlist.width(), 6.0);
    assert_close(vlist.height(), 8.0);
    assert_close(vlist.depth(), 1.0);

    Ship::new().call(0.0, 0.0, &HList::new(vec![vlist.into()], false));
    assert_eq!(glyphs(&backend), vec![("A".to_string(), 0.0, 7.0)]);
    assert_eq!(rects(&backend), vec![(0.0, 9.0, 6.0, 11.0)]);
}

#[test]
fn test_rounded_glue_never_drifts() {
    let (backend, state) = create_test_state();
    let mut hlist = HList::new(
        vec![
            stretch(0.0, 1.0),
            stretch(0.0, 1.0),
            stretch(0.0, 1.0),
            Rule::new(1.0, 1.0, 0.0, &state).into(),
        ],
        false,
    );
    hlist.hpack(11.0, false);
    Ship::new().call(0.0, 0.0, &hlist);
    // 10/3 per glue rounds to 3, 4, 3 steps
    assert_eq!(rects(&backend), vec![(10.0, 1.0, 11.0, 2.0)]);
}

#[test]
fn test_shrinking_glue_in_shipout() {
    let (backend, state) = create_test_state();
    let mut hlist = HList::new(
        vec![
            Rule::new(10.0, 1.0, 0.0, &state).into(),
            Glue::new(4.0, 0.0, GlueOrder::Normal, 2.0, GlueOrder::Normal).into(),
            Rule::new(5.0, 1.0, 0.0, &state).into(),
        ],
        false,
    );
    hlist.hpack(15.0, false);
    Ship::new().call(0.0, 0.0, &hlist);
    let xs: Vec<f64> = rects(&backend).iter().map(|r| r.0).collect();
    assert_eq!(xs, vec![0.0, 10.0]);
}

#[test]
fn test_only_selected_order_glue_stretches() {
    let (backend, state) = create_test_state();
    let mut hlist = HList::new(
        vec![
            Rule::new(1.0, 1.0, 0.0, &state).into(),
            stretch(2.0, 1.0),
            fil(),
            Rule::new(1.0, 1.0, 0.0, &state).into(),
        ],
        false,
    );
    hlist.hpack(13.0, false);
    Ship::new().call(0.0, 0.0, &hlist);
    let xs: Vec<f64> = rects(&backend).iter().map(|r| r.0).collect();
    assert_eq!(xs, vec![0.0, 12.0]);
}

#[test]
fn test_accent_compensates_for_bearing() {
    let (backend, state) = create_test_state();
    let accent = Accent::new("^", &state, true);
    assert_close(accent.width(), 3.0);
    assert_close(accent.height(), 2.0);
    let hlist = HList::new(vec![accent.into()], false);
    Ship::new().call(0.0, 0.0, &hlist);
    assert_eq!(glyphs(&backend), vec![("^".to_string(), -1.0, 9.0)]);
}

#[test]
fn test_boxes_and_empty_lists_only_advance() {
    let (backend, state) = create_test_state();
    let mut empty = HList::new(vec![], false);
    empty.hpack(5.0, false);
    let hlist = HList::new(
        vec![
            BoxNode::hbox(4.0).into(),
            empty.into(),
            Char::new("A", &state, false).into(),
        ],
        false,
    );
    Ship::new().call(0.0, 0.0, &hlist);
    assert_eq!(backend.len(), 1);
    assert_eq!(glyphs(&backend), vec![("A".to_string(), 9.0, 7.0)]);
}

#[test]
fn test_cluster_ships_like_hlist() {
    let (backend, state) = create_test_state();
    let cluster = SubSuperCluster::of(vec![
        Char::new("A", &state, false).into(),
        Char::new("x", &state, false).into(),
    ]);
    let hlist = HList::new(vec![BoxNode::hbox(2.0).into(), cluster.into()], false);
    Ship::new().call(0.0, 0.0, &hlist);
    // A's advance correction becomes a kern before x
    assert_eq!(
        glyphs(&backend),
        vec![("A".to_string(), 2.0, 7.0), ("x".to_string(), 9.0, 7.0)]
    );
}

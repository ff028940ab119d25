//! Property-based tests for the quantified invariants of the spec: segment
//! tree shape/status consistency under arbitrary insert/remove sequences,
//! sweep conservation, polygon closure, and order-independence of the
//! result under input-polygon permutation.
//!
//! Deterministic scenario coverage (S1-S6) lives in `src/sweep/tests.rs` and
//! `src/contour/tests.rs` as plain `#[test]`s; this file is specifically the
//! randomized counterpart.

use proptest::prelude::*;

use layer_arithmetics::contour::reconstruct;
use layer_arithmetics::geom::{sort_boundary_polygon, Layer, Point, Polygon};
use layer_arithmetics::segtree::{Node, SegTree, Status};
use layer_arithmetics::sweep::run_sweep;

// --- 1 & 2: segment tree coverage and status consistency -------------------

fn assert_coverage(node: &Node) {
    assert!(node.seg_b < node.seg_e);
    if let (Some(l), Some(r)) = (&node.left, &node.right) {
        assert!(node.seg_b <= node.seg_m && node.seg_m <= node.seg_e);
        assert_eq!(l.seg_b, node.seg_b);
        assert_eq!(l.seg_e, node.seg_m);
        assert_eq!(r.seg_b, node.seg_m);
        assert_eq!(r.seg_e, node.seg_e);
        assert_coverage(l);
        assert_coverage(r);
    }
}

fn assert_status_consistency(node: &Node, layer: Layer) {
    if let (Some(l), Some(r)) = (&node.left, &node.right) {
        if node.status(layer) == Status::Partial {
            let (ls, rs) = (l.status(layer), r.status(layer));
            assert!(!(ls == Status::Full && rs == Status::Full));
            assert!(!(ls == Status::Empty && rs == Status::Empty));
        }
        assert_status_consistency(l, layer);
        assert_status_consistency(r, layer);
    }
}

fn op_strategy() -> impl Strategy<Value = (i64, i64, bool, bool)> {
    (-50i64..50, -50i64..50, any::<bool>(), any::<bool>()).prop_map(|(a, b, insert, poly)| {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        (lo, hi, insert, poly)
    })
}

proptest! {
    #[test]
    fn segtree_invariants_hold_under_random_insert_remove(
        ys in prop::collection::vec(-50i64..50, 0..20),
        ops in prop::collection::vec(op_strategy(), 0..15),
    ) {
        let mut tree = SegTree::build(&ys);
        for (lo, hi, insert, poly) in ops {
            if lo == hi {
                continue;
            }
            let layer = if poly { Layer::Polysilicon } else { Layer::Diffusion };
            if insert {
                tree.insert(lo, hi, layer);
            } else {
                tree.remove(lo, hi, layer);
            }
            if let Some(root) = tree.root() {
                assert_coverage(root);
                assert_status_consistency(root, Layer::Polysilicon);
                assert_status_consistency(root, Layer::Diffusion);
            }
        }
    }
}

// --- 3: sweep conservation, 4: polygon closure -----------------------------

fn rect_strategy() -> impl Strategy<Value = (bool, i64, i64, i64, i64)> {
    (any::<bool>(), -30i64..30, -30i64..30, 1i64..20, 1i64..20).prop_map(
        |(is_diff, x, y, dx, dy)| (is_diff, x, y, x + dx, y + dy),
    )
}

fn to_polygon((is_diff, x0, y0, x1, y1): (bool, i64, i64, i64, i64)) -> Polygon {
    let layer = if is_diff { "diffusion" } else { "polysilicon" };
    sort_boundary_polygon(layer, x0, y0, x1, y1)
}

fn assert_closed_and_axis_aligned(poly: &Polygon) {
    let pts = &poly.points;
    assert!(pts.len() >= 4);
    for i in 0..pts.len() {
        let a = pts[i];
        let b = pts[(i + 1) % pts.len()];
        assert!(a.x == b.x || a.y == b.y, "leg {i} is not axis-aligned: {a:?} -> {b:?}");
        assert_ne!(a, b, "degenerate leg at {i}");
    }
}

proptest! {
    #[test]
    fn sweep_conserves_signed_extent_and_yields_closed_polygons(
        rects in prop::collection::vec(rect_strategy(), 0..8),
    ) {
        let polys: Vec<Polygon> = rects.into_iter().map(to_polygon).collect();
        let swept = run_sweep(&polys);

        for edges in [&swept.intersection, &swept.pure_diffusion] {
            let total: i64 = edges.iter().map(|e| e.y1 - e.y0).sum();
            prop_assert_eq!(total, 0);
        }

        for (edges, tag) in [
            (&swept.intersection, "polysilicon"),
            (&swept.pure_diffusion, "diffusion"),
        ] {
            for poly in reconstruct(edges, tag) {
                assert_closed_and_axis_aligned(&poly);
            }
        }
    }
}

// --- 5: empty input idempotence --------------------------------------------

#[test]
fn empty_input_yields_no_polygons_on_either_output() {
    let out = layer_arithmetics::run(&[], true, true);
    assert_eq!(out.intersection, Some(Vec::new()));
    assert_eq!(out.pure_diffusion, Some(Vec::new()));
}

// --- 6: commutativity under input reordering -------------------------------

fn canonical_points(points: &[Point]) -> Vec<Point> {
    let mut pts = points.to_vec();
    pts.sort();
    pts
}

fn canonical_polygon_set(polys: &[Polygon]) -> Vec<Vec<Point>> {
    let mut shapes: Vec<Vec<Point>> = polys.iter().map(|p| canonical_points(&p.points)).collect();
    shapes.sort();
    shapes
}

proptest! {
    #[test]
    fn reordering_input_polygons_yields_the_same_output_shapes(
        rects in prop::collection::vec(rect_strategy(), 1..8),
        seed in 0u64..1000,
    ) {
        let polys: Vec<Polygon> = rects.into_iter().map(to_polygon).collect();

        let mut reordered = polys.clone();
        // Deterministic pseudo-shuffle (no real RNG available in proptest
        // closures beyond its own generator): rotate by a seed-derived amount.
        if !reordered.is_empty() {
            let shift = (seed as usize) % reordered.len();
            reordered.rotate_left(shift);
        }

        let a = run_sweep(&polys);
        let b = run_sweep(&reordered);

        for tag_pair in [
            (&a.intersection, &b.intersection, "polysilicon"),
            (&a.pure_diffusion, &b.pure_diffusion, "diffusion"),
        ] {
            let (ea, eb, tag) = tag_pair;
            let pa = canonical_polygon_set(&reconstruct(ea, tag));
            let pb = canonical_polygon_set(&reconstruct(eb, tag));
            prop_assert_eq!(pa, pb);
        }
    }
}

// --- 7 & 8: disjoint / single-layer round trip -----------------------------

#[test]
fn disjoint_layers_leave_diffusion_untouched() {
    let diffusion = sort_boundary_polygon("diffusion", 0, 0, 10, 10);
    let polysilicon = sort_boundary_polygon("polysilicon", 20, 0, 30, 10);
    let swept = run_sweep(&[diffusion.clone(), polysilicon]);

    assert!(reconstruct(&swept.intersection, "polysilicon").is_empty());
    let pdiff = reconstruct(&swept.pure_diffusion, "diffusion");
    assert_eq!(pdiff.len(), 1);
    assert_eq!(canonical_points(&pdiff[0].points), canonical_points(&diffusion.points));
}

#[test]
fn single_layer_input_is_untouched_by_pure_diffusion() {
    let diffusion = sort_boundary_polygon("diffusion", 0, 0, 10, 10);
    let swept = run_sweep(&[diffusion.clone()]);

    assert!(reconstruct(&swept.intersection, "polysilicon").is_empty());
    let pdiff = reconstruct(&swept.pure_diffusion, "diffusion");
    assert_eq!(pdiff.len(), 1);
    assert_eq!(canonical_points(&pdiff[0].points), canonical_points(&diffusion.points));
}

//! The plane-sweep engine: drives the segment tree along ascending X and
//! collects the vertical edges of the intersection and pure-diffusion
//! outputs.
//!
//! This module owns the [`SegTree`] for the duration of one sweep and
//! discards it once the last edge has been processed; [`crate::contour`]
//! takes over from its output.

use crate::geom::{merge_intervals, vertical_edges, y_coordinates, Layer, Polygon, VEdge};
use crate::segtree::{intersection, pure_diffusion, SegTree};

/// The vertical edges produced by one sweep, one list per output layer.
#[derive(Debug, Default)]
pub struct SweepOutput {
    pub intersection: Vec<VEdge>,
    pub pure_diffusion: Vec<VEdge>,
}

/// Run the sweep over every vertical edge derivable from `polygons`.
pub fn run_sweep(polygons: &[Polygon]) -> SweepOutput {
    let mut tree = SegTree::build(&y_coordinates(polygons));
    let edges = vertical_edges(polygons);
    tracing::debug!(edges = edges.len(), "sweep start");

    let mut out = SweepOutput::default();
    for edge in &edges {
        process_edge(&mut tree, *edge, &mut out);
    }
    tracing::debug!(
        intersection = out.intersection.len(),
        pure_diffusion = out.pure_diffusion.len(),
        "sweep done"
    );
    out
}

fn process_edge(tree: &mut SegTree, edge: VEdge, out: &mut SweepOutput) {
    let nlayer = edge.layer.other();
    let (lo, hi) = edge.lo_hi();
    tracing::trace!(?edge.layer, edge.x, lo, hi, opening = edge.is_opening(), "edge");

    if edge.is_opening() {
        tree.insert(lo, hi, edge.layer);
        let frontier = tree.find_nodes(lo, hi);
        let mut inter = Vec::new();
        let mut pdiff = Vec::new();
        for f in &frontier {
            inter.extend(intersection(f, nlayer));
            pdiff.extend(pure_diffusion(f, nlayer));
        }
        emit(&mut out.intersection, &merge_intervals(&inter), Layer::Polysilicon, edge.x, true);
        let pdiff_opening = edge.layer == Layer::Diffusion;
        emit(&mut out.pure_diffusion, &merge_intervals(&pdiff), Layer::Diffusion, edge.x, pdiff_opening);
    } else {
        let frontier = tree.find_nodes(lo, hi);
        let mut inter = Vec::new();
        let mut pdiff = Vec::new();
        for f in &frontier {
            inter.extend(intersection(f, nlayer));
            pdiff.extend(pure_diffusion(f, nlayer));
        }
        emit(&mut out.intersection, &merge_intervals(&inter), Layer::Polysilicon, edge.x, false);
        let pdiff_opening = edge.layer != Layer::Diffusion;
        emit(&mut out.pure_diffusion, &merge_intervals(&pdiff), Layer::Diffusion, edge.x, pdiff_opening);
        tree.remove(lo, hi, edge.layer);
    }
}

/// Emit one output edge per `(a, b)` pair in `merged`, at column `x` on
/// `tag`, with `opening` choosing which endpoint leads.
fn emit(sink: &mut Vec<VEdge>, merged: &[i64], tag: Layer, x: i64, opening: bool) {
    for pair in merged.chunks_exact(2) {
        let (a, b) = (pair[0], pair[1]);
        let (y0, y1) = if opening { (a, b) } else { (b, a) };
        if y0 != y1 {
            sink.push(VEdge::new(tag, x, y0, y1));
        }
    }
}

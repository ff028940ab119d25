use super::node::{Node, Status};
use crate::geom::Layer;

/// One node of the query frontier, carrying its *effective* status per layer
/// — i.e. with any `Full` tombstone inherited from an ancestor resolved.
#[derive(Debug)]
pub struct Frontier<'a> {
    pub node: &'a Node,
    eff_poly: Status,
    eff_diff: Status,
}

impl<'a> Frontier<'a> {
    #[inline]
    pub fn effective(&self, layer: Layer) -> Status {
        match layer {
            Layer::Polysilicon => self.eff_poly,
            Layer::Diffusion => self.eff_diff,
        }
    }
}

/// Descend from `node` to the frontier tiling `[sb, se]`, threading the
/// `Full` status seen so far on the path for each layer.
pub(super) fn find_nodes_rec<'a>(
    node: &'a Node,
    sb: i64,
    se: i64,
    inherited_poly: Status,
    inherited_diff: Status,
    out: &mut Vec<Frontier<'a>>,
) {
    let eff_poly = if inherited_poly == Status::Full {
        Status::Full
    } else {
        node.status(Layer::Polysilicon)
    };
    let eff_diff = if inherited_diff == Status::Full {
        Status::Full
    } else {
        node.status(Layer::Diffusion)
    };
    if sb <= node.seg_b && node.seg_e <= se {
        out.push(Frontier {
            node,
            eff_poly,
            eff_diff,
        });
        return;
    }
    if sb < node.seg_m {
        if let Some(l) = &node.left {
            find_nodes_rec(l, sb, se, eff_poly, eff_diff, out);
        }
    }
    if se > node.seg_m {
        if let Some(r) = &node.right {
            find_nodes_rec(r, sb, se, eff_poly, eff_diff, out);
        }
    }
}

/// Collect `[seg_b, seg_e]` ranges under `node` whose effective status for
/// `layer` equals `target`, recursing into `Partial` subranges. Below the
/// frontier, each node's own stored status is authoritative (it cannot be a
/// stale tombstone: tombstoning only happens under an ancestor that is
/// itself `Full`, which is a terminal case here).
fn collect_matching(node: &Node, layer: Layer, eff: Status, target: Status, out: &mut Vec<i64>) {
    if eff == target {
        out.push(node.seg_b);
        out.push(node.seg_e);
        return;
    }
    if eff == Status::Partial {
        if let Some(l) = &node.left {
            collect_matching(l, layer, l.status(layer), target, out);
        }
        if let Some(r) = &node.right {
            collect_matching(r, layer, r.status(layer), target, out);
        }
    }
}

/// Y-intervals under `frontier` where `other` is `Full` — the extent that
/// contributes to the intersection of both layers at this sweep column.
pub fn intersection(frontier: &Frontier, other: Layer) -> Vec<i64> {
    let mut out = Vec::new();
    collect_matching(
        frontier.node,
        other,
        frontier.effective(other),
        Status::Full,
        &mut out,
    );
    out
}

/// Y-intervals under `frontier` contributing to `diffusion \ polysilicon`:
/// where diffusion is `Full` (if `other == Diffusion`) or polysilicon is
/// `Empty` (if `other == Polysilicon`).
pub fn pure_diffusion(frontier: &Frontier, other: Layer) -> Vec<i64> {
    let target = match other {
        Layer::Diffusion => Status::Full,
        Layer::Polysilicon => Status::Empty,
    };
    let mut out = Vec::new();
    collect_matching(
        frontier.node,
        other,
        frontier.effective(other),
        target,
        &mut out,
    );
    out
}

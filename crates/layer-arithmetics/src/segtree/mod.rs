//! Segment tree over sorted unique Y-coordinates, augmented with a
//! per-node, per-layer `{Empty, Partial, Full}` status.
//!
//! The tree is built once per run ([`SegTree::build`]) and then mutated by
//! [`SegTree::insert`]/[`SegTree::remove`] as the sweep crosses each vertical
//! edge. [`SegTree::find_nodes`] returns the frontier tiling a query range
//! with each node's *effective* status (resolving any `Full` tombstone
//! inherited from an ancestor); [`query::intersection`] and
//! [`query::pure_diffusion`] then walk each frontier node's own subtree to
//! produce the y-intervals the sweep emits as output edges.

mod node;
mod query;

pub use node::{Node, Status};
pub use query::{intersection, pure_diffusion, Frontier};

use crate::geom::Layer;

/// A segment tree over a fixed set of Y break-points, or empty if fewer than
/// two distinct Y values were supplied.
#[derive(Debug, Default)]
pub struct SegTree {
    root: Option<Node>,
}

impl SegTree {
    /// Dedupe and sort `ys`, then build the tree. `ys.len() < 2` yields an
    /// empty tree (no interval can be represented by fewer than two points).
    pub fn build(ys: &[i64]) -> Self {
        let mut sorted = ys.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        let root = if sorted.len() < 2 {
            None
        } else {
            Some(Node::build(&sorted))
        };
        Self { root }
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Root range, if the tree is non-empty.
    pub fn range(&self) -> Option<(i64, i64)> {
        self.root.as_ref().map(|n| (n.seg_b, n.seg_e))
    }

    /// The root node, for callers (the debug dump) that need to walk the
    /// whole shape rather than query it.
    pub fn root(&self) -> Option<&Node> {
        self.root.as_ref()
    }

    pub fn insert(&mut self, sb: i64, se: i64, layer: Layer) {
        if let Some(root) = &mut self.root {
            root.insert(sb, se, layer);
        }
    }

    pub fn remove(&mut self, sb: i64, se: i64, layer: Layer) {
        if let Some(root) = &mut self.root {
            root.remove(sb, se, layer);
        }
    }

    /// The deepest frontier of nodes tiling `[sb, se]`, each tagged with its
    /// effective (tombstone-resolved) status for both layers.
    pub fn find_nodes(&self, sb: i64, se: i64) -> Vec<Frontier<'_>> {
        let mut out = Vec::new();
        if let Some(root) = &self.root {
            query::find_nodes_rec(root, sb, se, Status::Empty, Status::Empty, &mut out);
        }
        out
    }
}

use crate::geom::Layer;

/// Coverage state of one layer over a node's Y-range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Empty,
    Partial,
    Full,
}

/// One segment-tree node. Leaves (`left`/`right` both `None`) are never
/// `Partial`; internal nodes recompute their status from their children in
/// [`Node::update_node`] after every insert/remove that touches them.
#[derive(Debug)]
pub struct Node {
    pub seg_b: i64,
    pub seg_e: i64,
    pub seg_m: i64,
    pub left: Option<Box<Node>>,
    pub right: Option<Box<Node>>,
    poly: Status,
    diff: Status,
}

impl Node {
    /// Build a tree over `ys` (sorted, deduped, `len() >= 2`).
    pub(super) fn build(ys: &[i64]) -> Node {
        debug_assert!(ys.len() >= 2, "a segment-tree node needs at least 2 points");
        let k = ys.len();
        let seg_b = ys[0];
        let seg_e = ys[k - 1];
        // A 2-element slice is a leaf covering one segment: `segM` has no
        // further split to name, and recursing would hand the right child
        // the exact same slice as this node.
        if k == 2 {
            return Node {
                seg_b,
                seg_e,
                seg_m: seg_b,
                left: None,
                right: None,
                poly: Status::Empty,
                diff: Status::Empty,
            };
        }
        let m_idx = (k - 1) / 2;
        let seg_m = ys[m_idx];
        let left = Some(Box::new(Node::build(&ys[..=m_idx])));
        let right = Some(Box::new(Node::build(&ys[m_idx..])));
        Node {
            seg_b,
            seg_e,
            seg_m,
            left,
            right,
            poly: Status::Empty,
            diff: Status::Empty,
        }
    }

    #[inline]
    pub fn status(&self, layer: Layer) -> Status {
        match layer {
            Layer::Polysilicon => self.poly,
            Layer::Diffusion => self.diff,
        }
    }

    #[inline]
    fn set_status(&mut self, layer: Layer, s: Status) {
        match layer {
            Layer::Polysilicon => self.poly = s,
            Layer::Diffusion => self.diff = s,
        }
    }

    #[inline]
    fn covers(&self, sb: i64, se: i64) -> bool {
        sb <= self.seg_b && self.seg_e <= se
    }

    /// Lazily mark `[sb, se]` as `Full` for `layer`. See module docs for the
    /// tombstone discipline this relies on.
    pub fn insert(&mut self, sb: i64, se: i64, layer: Layer) {
        if self.covers(sb, se) {
            self.set_status(layer, Status::Full);
            if let Some(l) = &mut self.left {
                l.set_status(layer, Status::Empty);
            }
            if let Some(r) = &mut self.right {
                r.set_status(layer, Status::Empty);
            }
            return;
        }
        if sb < self.seg_m {
            if let Some(l) = &mut self.left {
                l.insert(sb, se, layer);
            }
        }
        if se > self.seg_m {
            if let Some(r) = &mut self.right {
                r.insert(sb, se, layer);
            }
        }
        self.update_node(layer);
    }

    /// Unmark `[sb, se]` as `Full` for `layer`, re-materializing an
    /// untouched sibling's lazily-tombstoned state where needed.
    pub fn remove(&mut self, sb: i64, se: i64, layer: Layer) {
        if self.covers(sb, se) {
            self.set_status(layer, Status::Empty);
            return;
        }
        let visit_left = sb < self.seg_m;
        let visit_right = se > self.seg_m;
        let prior = self.status(layer);
        if visit_left {
            if let Some(l) = &mut self.left {
                l.remove(sb, se, layer);
            }
        }
        if visit_right {
            if let Some(r) = &mut self.right {
                r.remove(sb, se, layer);
            }
        }
        if visit_left != visit_right && prior != Status::Partial {
            if visit_left {
                if let Some(r) = &mut self.right {
                    r.set_status(layer, Status::Full);
                }
            } else if let Some(l) = &mut self.left {
                l.set_status(layer, Status::Full);
            }
        }
        self.update_node(layer);
    }

    /// Recompute this node's status for `layer` from its children: `Full` if
    /// both are `Full` (tombstoning both back to `Empty`), `Empty` if both
    /// are `Empty`, else `Partial`. A no-op on leaves.
    fn update_node(&mut self, layer: Layer) {
        let (Some(l), Some(r)) = (&mut self.left, &mut self.right) else {
            return;
        };
        let (ls, rs) = (l.status(layer), r.status(layer));
        match (ls, rs) {
            (Status::Full, Status::Full) => {
                l.set_status(layer, Status::Empty);
                r.set_status(layer, Status::Empty);
                self.set_status(layer, Status::Full);
            }
            (Status::Empty, Status::Empty) => self.set_status(layer, Status::Empty),
            _ => self.set_status(layer, Status::Partial),
        }
    }
}

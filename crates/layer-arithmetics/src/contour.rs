//! Stitches the vertical edges one sweep output produces back into closed
//! rectilinear polygons.
//!
//! The adjacency map is realized as an arena of point/successor records
//! indexed by integer handles, with a doubly linked overlay threading them
//! in insertion order. This sidesteps both `Rc`/`RefCell` cycles and
//! `HashMap`'s randomized iteration order — the overlay, not the map, picks
//! the next unvisited starting vertex, so output ordering is stable across
//! runs for the same input.

use std::collections::{BTreeMap, HashMap};

use crate::geom::{Point, Polygon, VEdge};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum EndKind {
    /// The `y1` end of a vertical edge: the vertical edge already supplies
    /// this vertex's *incoming* leg, so it needs an outgoing horizontal one.
    Head,
    /// The `y0` end of a vertical edge: it needs an incoming horizontal leg.
    Tail,
}

struct Record {
    point: Point,
    succ: Point,
}

/// Point → successor map plus a doubly linked insertion-order overlay.
struct Arena {
    records: Vec<Record>,
    next: Vec<Option<usize>>,
    prev: Vec<Option<usize>>,
    head: Option<usize>,
    tail: Option<usize>,
    index: HashMap<Point, usize>,
}

impl Arena {
    fn new() -> Self {
        Self {
            records: Vec::new(),
            next: Vec::new(),
            prev: Vec::new(),
            head: None,
            tail: None,
            index: HashMap::new(),
        }
    }

    /// Record `point -> succ`. A zero-length edge (`point == succ`, as
    /// produced when a vertical edge's opening and closing columns coincide,
    /// e.g. two identical overlaid rectangles) carries no shape information
    /// and is dropped rather than recorded: keeping it would both overwrite
    /// `index`'s entry for the real successor at that point and introduce an
    /// unbreakable self-loop at traversal time.
    fn insert(&mut self, point: Point, succ: Point) {
        if point == succ {
            return;
        }
        let handle = self.records.len();
        self.records.push(Record { point, succ });
        self.prev.push(self.tail);
        self.next.push(None);
        match self.tail {
            Some(t) => self.next[t] = Some(handle),
            None => self.head = Some(handle),
        }
        self.tail = Some(handle);
        self.index.insert(point, handle);
    }

    /// Unlink `handle` from the overlay and drop its `index` entry, so a
    /// dangling successor pointing back at an already-consumed point is
    /// caught as a lookup failure rather than silently re-entering it.
    fn remove(&mut self, handle: usize) {
        let (prev, next) = (self.prev[handle], self.next[handle]);
        match prev {
            Some(p) => self.next[p] = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.prev[n] = prev,
            None => self.tail = prev,
        }
        let point = self.records[handle].point;
        if self.index.get(&point) == Some(&handle) {
            self.index.remove(&point);
        }
    }

    fn handle_of(&self, point: &Point) -> Option<usize> {
        self.index.get(point).copied()
    }
}

/// Derive the horizontal edges implied by `vedges` and record them, together
/// with the vertical edges themselves, as `point -> successor` entries.
fn build_adjacency(vedges: &[VEdge]) -> Arena {
    let mut arena = Arena::new();
    for v in vedges {
        arena.insert(Point::new(v.x, v.y0), Point::new(v.x, v.y1));
    }

    let mut rows: BTreeMap<i64, Vec<(i64, EndKind)>> = BTreeMap::new();
    for v in vedges {
        rows.entry(v.y0).or_default().push((v.x, EndKind::Tail));
        rows.entry(v.y1).or_default().push((v.x, EndKind::Head));
    }
    for (y, mut ends) in rows {
        ends.sort_by_key(|&(x, _)| x);
        for pair in ends.chunks_exact(2) {
            let (a, b) = (pair[0], pair[1]);
            match (a.1, b.1) {
                (EndKind::Head, EndKind::Tail) => {
                    arena.insert(Point::new(a.0, y), Point::new(b.0, y));
                }
                (EndKind::Tail, EndKind::Head) => {
                    arena.insert(Point::new(b.0, y), Point::new(a.0, y));
                }
                _ => debug_assert!(false, "unpaired horizontal endpoints at y={y}"),
            }
        }
    }
    arena
}

/// Reconstruct every closed polygon implied by `vedges`, tagging each with
/// `layer_name`. A traversed loop with fewer than 4 vertices is a zero-width
/// column collapsed on itself (no two legs of it can alternate axis, so it
/// can't be a real rectilinear polygon) and is dropped rather than emitted.
pub fn reconstruct(vedges: &[VEdge], layer_name: &str) -> Vec<Polygon> {
    let mut arena = build_adjacency(vedges);
    let mut polygons = Vec::new();

    while let Some(start) = arena.head {
        let start_point = arena.records[start].point;
        let mut points = Vec::new();
        let mut current = start;
        loop {
            points.push(arena.records[current].point);
            let succ_point = arena.records[current].succ;
            arena.remove(current);
            if succ_point == start_point {
                break;
            }
            current = arena
                .handle_of(&succ_point)
                .expect("dangling successor in adjacency map");
        }
        if points.len() >= 4 {
            polygons.push(Polygon::new(layer_name, points));
        }
    }
    polygons
}

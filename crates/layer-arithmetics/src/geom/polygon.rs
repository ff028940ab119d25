use super::point::{Layer, Point, VEdge};

/// A closed rectilinear loop on one (opaque) CIF layer.
///
/// Input rectangles carry exactly four vertices, normalized by
/// [`sort_boundary_polygon`]; reconstructed output polygons may carry more.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Polygon {
    pub layer: String,
    pub points: Vec<Point>,
}

impl Polygon {
    pub fn new(layer: impl Into<String>, points: Vec<Point>) -> Self {
        Self {
            layer: layer.into(),
            points,
        }
    }

    /// The [`Layer`] this polygon sits on, if it's one the sweep understands.
    pub fn sweep_layer(&self) -> Option<Layer> {
        Layer::parse(&self.layer)
    }
}

/// Flatten the y-coordinates of every vertex of every polygon (duplicates
/// allowed; the segment tree dedupes and sorts on build).
pub fn y_coordinates(polygons: &[Polygon]) -> Vec<i64> {
    polygons
        .iter()
        .flat_map(|p| p.points.iter().map(|pt| pt.y))
        .collect()
}

/// Flatten the x-coordinates of every vertex of every polygon.
pub fn x_coordinates(polygons: &[Polygon]) -> Vec<i64> {
    polygons
        .iter()
        .flat_map(|p| p.points.iter().map(|pt| pt.x))
        .collect()
}

/// Walk each polygon's consecutive vertex pairs (closing the loop) and emit
/// a [`VEdge`] for every pair that shares an x-coordinate. Only polygons on a
/// layer the sweep understands contribute. The result is sorted ascending by
/// x with ties kept in original (stable) insertion order.
pub fn vertical_edges(polygons: &[Polygon]) -> Vec<VEdge> {
    let mut edges = Vec::new();
    for poly in polygons {
        let Some(layer) = poly.sweep_layer() else {
            continue;
        };
        let n = poly.points.len();
        if n < 2 {
            continue;
        }
        for i in 0..n {
            let p = poly.points[i];
            let q = poly.points[(i + 1) % n];
            if p.x == q.x {
                edges.push(VEdge::new(layer, p.x, p.y, q.y));
            }
        }
    }
    edges.sort_by_key(|e| e.x);
    edges
}

/// Normalize a four-corner rectangle to
/// `(x_min, y_min), (x_min, y_max), (x_max, y_max), (x_max, y_min)` — CCW,
/// starting at the left-bottom corner.
pub fn sort_boundary_polygon(
    layer: impl Into<String>,
    x_min: i64,
    y_min: i64,
    x_max: i64,
    y_max: i64,
) -> Polygon {
    Polygon::new(
        layer,
        vec![
            Point::new(x_min, y_min),
            Point::new(x_min, y_max),
            Point::new(x_max, y_max),
            Point::new(x_max, y_min),
        ],
    )
}

use std::fmt::Write as _;

use crate::geom::Polygon;

/// Render polygons as the fixed CIF output: a constant header, one `L`/`P`
/// pair per polygon (the layer line only re-emitted when it changes), and a
/// constant footer.
pub fn write(polygons: &[Polygon]) -> String {
    let mut out = String::new();
    out.push_str("4 1000;\n");
    out.push_str("DS 1;\n");
    let mut current_layer: Option<&str> = None;
    for poly in polygons {
        if current_layer != Some(poly.layer.as_str()) {
            let _ = writeln!(out, "L {};", poly.layer);
            current_layer = Some(poly.layer.as_str());
        }
        out.push('P');
        for p in &poly.points {
            let _ = write!(out, " {} {}", p.x, p.y);
        }
        out.push_str(";\n");
    }
    out.push_str("DF;\n");
    out.push('E');
    out
}

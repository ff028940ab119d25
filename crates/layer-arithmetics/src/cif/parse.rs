use std::collections::HashMap;

use crate::error::{EngineError, Result};
use crate::geom::{Point, Polygon};

struct Symbol {
    layer: String,
    points: [Point; 4],
}

/// Parse a CIF source string into the polygon list the sweep consumes.
///
/// Commands are delimited by `;` (an unconditional terminator, even inside a
/// `P` line's whitespace padding); everything else is whitespace-insensitive.
/// Unrecognised commands are ignored. Only the first `P` inside a `DS` block
/// is captured as that symbol's base rectangle — the rest are silently
/// dropped, matching the upstream behaviour this adapter reproduces as-is.
pub fn parse(input: &str) -> Result<Vec<Polygon>> {
    let mut polygons = Vec::new();
    let mut current_layer: Option<String> = None;
    let mut symbols: HashMap<i64, Symbol> = HashMap::new();
    let mut in_symbol: Option<(i64, bool)> = None;

    for raw in input.split(';') {
        let tokens: Vec<&str> = raw.split_whitespace().collect();
        let Some(&cmd) = tokens.first() else {
            continue;
        };
        match cmd {
            "E" => break,
            "L" => {
                if let Some(name) = tokens.get(1) {
                    current_layer = Some((*name).to_string());
                }
            }
            "DS" => {
                let id = tokens
                    .get(1)
                    .and_then(|s| s.parse::<i64>().ok())
                    .ok_or_else(|| EngineError::MalformedCif("DS without a symbol number".into()))?;
                in_symbol = Some((id, false));
            }
            "DF" => {
                if let Some((id, captured)) = in_symbol.take() {
                    if !captured {
                        return Err(EngineError::MalformedCif(format!(
                            "DS {id} has no valid P"
                        )));
                    }
                }
            }
            "P" => {
                let coords = parse_coords(&tokens[1..])?;
                if let Some((id, captured)) = &mut in_symbol {
                    if !*captured {
                        if coords.len() != 8 {
                            return Err(EngineError::MalformedCif(format!(
                                "DS {id} symbol rectangle needs 8 coordinates, got {}",
                                coords.len()
                            )));
                        }
                        let pts = to_points(&coords);
                        symbols.insert(
                            *id,
                            Symbol {
                                layer: current_layer.clone().unwrap_or_default(),
                                points: [pts[0], pts[1], pts[2], pts[3]],
                            },
                        );
                        *captured = true;
                    }
                    continue;
                }
                if coords.len() < 6 {
                    return Err(EngineError::MalformedCif(format!(
                        "P needs at least 6 coordinates, got {}",
                        coords.len()
                    )));
                }
                let Some(layer) = &current_layer else {
                    return Err(EngineError::MalformedCif("P command before any L".into()));
                };
                polygons.push(Polygon::new(layer.clone(), to_points(&coords)));
            }
            "C" => {
                let id = tokens
                    .get(1)
                    .and_then(|s| s.parse::<i64>().ok())
                    .ok_or_else(|| EngineError::MalformedCif("C without a symbol number".into()))?;
                let Some(symbol) = symbols.get(&id) else {
                    continue;
                };
                let (dx, dy, mx, my) = parse_transform(&tokens[2..]);
                let points = symbol
                    .points
                    .iter()
                    .map(|p| transform(*p, mx, my, dx, dy))
                    .collect();
                polygons.push(Polygon::new(symbol.layer.clone(), points));
            }
            _ => {}
        }
    }
    Ok(polygons)
}

/// Parse whitespace-split coordinate tokens as integers, rejecting an odd
/// count (an unpaired x or y).
fn parse_coords(tokens: &[&str]) -> Result<Vec<i64>> {
    let mut out = Vec::with_capacity(tokens.len());
    for t in tokens {
        let v = t
            .parse::<i64>()
            .map_err(|_| EngineError::MalformedCif(format!("non-integer coordinate {t:?}")))?;
        out.push(v);
    }
    if out.len() % 2 != 0 {
        return Err(EngineError::MalformedCif(format!(
            "odd coordinate count ({})",
            out.len()
        )));
    }
    Ok(out)
}

fn to_points(coords: &[i64]) -> Vec<Point> {
    coords.chunks_exact(2).map(|c| Point::new(c[0], c[1])).collect()
}

/// Mirror (about the origin) then translate — applied in that order per
/// conventional CIF `C` semantics.
fn transform(p: Point, mirror_x: bool, mirror_y: bool, dx: i64, dy: i64) -> Point {
    let x = if mirror_x { -p.x } else { p.x };
    let y = if mirror_y { -p.y } else { p.y };
    Point::new(x + dx, y + dy)
}

fn parse_transform(tokens: &[&str]) -> (i64, i64, bool, bool) {
    let (mut dx, mut dy) = (0, 0);
    let (mut mx, mut my) = (false, false);
    let mut i = 0;
    while i < tokens.len() {
        match tokens[i] {
            "T" => {
                dx = tokens.get(i + 1).and_then(|s| s.parse().ok()).unwrap_or(0);
                dy = tokens.get(i + 2).and_then(|s| s.parse().ok()).unwrap_or(0);
                i += 3;
            }
            "MX" => {
                mx = true;
                i += 1;
            }
            "MY" => {
                my = true;
                i += 1;
            }
            _ => i += 1,
        }
    }
    (dx, dy, mx, my)
}

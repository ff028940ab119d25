//! Two-dimensional layer-arithmetic engine for rectilinear VLSI layout geometry.
//!
//! Given a set of rectilinear polygons on a `polysilicon` and a `diffusion`
//! layer, this crate computes their intersection (gate regions) and the
//! relative complement `diffusion \ polysilicon` (pure diffusion), both as
//! closed rectilinear polygons. The heart of the crate is a plane-sweep
//! driven by a segment tree indexed on the sweep line's y-coordinates; see
//! [`segtree`] and [`sweep`] for the two halves of that algorithm, and
//! [`contour`] for turning the sweep's vertical edges back into polygons.
//!
//! CIF parsing/writing ([`cif`]) and the typed error model ([`error`]) are
//! the ambient edges of the crate; application shells (e.g. the `cli` crate)
//! are expected to drive [`run`] end to end.

pub mod cif;
pub mod config;
pub mod contour;
pub mod dump;
pub mod error;
pub mod geom;
pub mod segtree;
pub mod sweep;

pub use config::RunConfig;
pub use error::{EngineError, Result};
pub use geom::{Layer, Point, Polygon};

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Output of one full run: the two optional derived layers.
#[derive(Debug, Default)]
pub struct RunOutputs {
    pub intersection: Option<Vec<Polygon>>,
    pub pure_diffusion: Option<Vec<Polygon>>,
}

/// Run the engine end to end over already-parsed input polygons.
///
/// This is the library entry point application shells should call after
/// parsing CIF input and before writing CIF output; it contains no I/O.
pub fn run(polygons: &[Polygon], want_inter: bool, want_pdiff: bool) -> RunOutputs {
    tracing::debug!(polygons = polygons.len(), want_inter, want_pdiff, "run");
    let swept = sweep::run_sweep(polygons);
    RunOutputs {
        intersection: want_inter.then(|| contour::reconstruct(&swept.intersection, "polysilicon")),
        pure_diffusion: want_pdiff
            .then(|| contour::reconstruct(&swept.pure_diffusion, "diffusion")),
    }
}

//! Run configuration: the single, immutable set of paths one invocation acts
//! on. Built once from parsed CLI flags — there is no environment-variable
//! or config-file layer.

use std::path::PathBuf;

/// One run's inputs and requested outputs.
#[derive(Clone, Debug)]
pub struct RunConfig {
    pub input: PathBuf,
    pub intersection_out: Option<PathBuf>,
    pub pure_diffusion_out: Option<PathBuf>,
    pub segtree_dump_out: Option<PathBuf>,
}

impl RunConfig {
    pub fn new(
        input: PathBuf,
        intersection_out: Option<PathBuf>,
        pure_diffusion_out: Option<PathBuf>,
        segtree_dump_out: Option<PathBuf>,
    ) -> Self {
        Self {
            input,
            intersection_out,
            pure_diffusion_out,
            segtree_dump_out,
        }
    }

    pub fn wants_intersection(&self) -> bool {
        self.intersection_out.is_some()
    }

    pub fn wants_pure_diffusion(&self) -> bool {
        self.pure_diffusion_out.is_some()
    }
}

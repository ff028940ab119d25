//! Typed error kinds surfaced by the engine.
//!
//! All four kinds are fatal to the run; there is no retry and no partial
//! success. Internal invariant violations (a malformed segment-tree query, a
//! dangling contour successor) are programming bugs and are reported via
//! `assert!`/`debug_assert!` instead, not through this enum.

use std::io;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, EngineError>;

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("cannot read input file {path}: {source}")]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write output file {path}: {source}")]
    OutputUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed CIF input: {0}")]
    MalformedCif(String),

    #[error("usage error: {0}")]
    Usage(String),
}

//! `layer-arithmetics` — CLI shell around the [`layer_arithmetics`] engine.
//!
//! Pure orchestration: parse flags, read the input file, hand everything to
//! the engine crate, write whichever outputs were requested. No geometry or
//! sweep logic lives here; see `layer_arithmetics::lib` for that.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use layer_arithmetics::error::EngineError;
use layer_arithmetics::geom::y_coordinates;
use layer_arithmetics::segtree::SegTree;
use layer_arithmetics::{cif, config::RunConfig, dump, run as run_engine};
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser, Debug)]
#[command(
    name = "layer-arithmetics",
    about = "Plane-sweep intersection and pure-diffusion arithmetic over a CIF layout"
)]
struct Cli {
    /// CIF file to read polygons from.
    #[arg(long)]
    input: PathBuf,

    /// Write the polysilicon ∩ diffusion ("gate") polygons here.
    #[arg(long)]
    inter: Option<PathBuf>,

    /// Write the diffusion \ polysilicon ("pure diffusion") polygons here.
    #[arg(long)]
    pdiff: Option<PathBuf>,

    /// Dump the initial (pre-sweep) segment tree shape here, for debugging.
    #[arg(long)]
    ps: Option<PathBuf>,
}

fn main() -> ExitCode {
    SubscriberBuilder::default().with_target(false).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // clap's own usage synopsis is exactly the "usage message on
            // standard output" the CLI contract requires on a usage error.
            print!("{e}");
            return exit_code(&EngineError::Usage(e.to_string()));
        }
    };

    // clap enforces `--input`'s presence on its own (it isn't `Option`); the
    // "at least one of --inter, --pdiff" constraint is a cross-flag relation
    // clap can't express as a required-ness rule on either field alone, so
    // it's validated here instead.
    if cli.inter.is_none() && cli.pdiff.is_none() {
        let mut cmd = Cli::command();
        print!("error: at least one of --inter or --pdiff is required\n\n");
        let _ = cmd.print_help();
        println!();
        return exit_code(&EngineError::Usage(
            "at least one of --inter or --pdiff is required".into(),
        ));
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("layer-arithmetics: {err}");
            exit_code(&err)
        }
    }
}

fn run(cli: Cli) -> layer_arithmetics::Result<()> {
    let config = RunConfig::new(cli.input, cli.inter, cli.pdiff, cli.ps);

    let text = fs::read_to_string(&config.input).map_err(|source| EngineError::InputUnavailable {
        path: config.input.clone(),
        source,
    })?;
    let polygons = cif::parse(&text)?;
    tracing::info!(polygons = polygons.len(), input = %config.input.display(), "parsed");

    if let Some(ps_path) = &config.segtree_dump_out {
        let tree = SegTree::build(&y_coordinates(&polygons));
        write_output(ps_path, &dump::render(&tree))?;
    }

    let outputs = run_engine(
        &polygons,
        config.wants_intersection(),
        config.wants_pure_diffusion(),
    );

    if let Some(path) = &config.intersection_out {
        let polys = outputs.intersection.expect("requested intersection output was not computed");
        tracing::info!(polygons = polys.len(), path = %path.display(), "writing intersection");
        write_output(path, &cif::write(&polys))?;
    }
    if let Some(path) = &config.pure_diffusion_out {
        let polys = outputs
            .pure_diffusion
            .expect("requested pure-diffusion output was not computed");
        tracing::info!(polygons = polys.len(), path = %path.display(), "writing pure diffusion");
        write_output(path, &cif::write(&polys))?;
    }

    Ok(())
}

fn write_output(path: &PathBuf, text: &str) -> layer_arithmetics::Result<()> {
    fs::write(path, text).map_err(|source| EngineError::OutputUnavailable {
        path: path.clone(),
        source,
    })
}

fn exit_code(err: &EngineError) -> ExitCode {
    let code = match err {
        EngineError::Usage(_) => 2,
        EngineError::InputUnavailable { .. } => 3,
        EngineError::OutputUnavailable { .. } => 4,
        EngineError::MalformedCif(_) => 5,
    };
    ExitCode::from(code)
}

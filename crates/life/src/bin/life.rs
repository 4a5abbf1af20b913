//! `life`: runs a Game of Life board until it repeats, dies out, or
//! exhausts its step budget, writing every frame as text.
//!
//! **Usage:**
//! ```text
//! life [OPTIONS] <INPUT>
//! life [OPTIONS] --random <RxC>
//! ```

#![deny(clippy::unwrap_used, clippy::expect_used, missing_docs)]

use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use life::prelude::*;
use life::grid::DEFAULT_DENSITY;
use life::replay::first_divergence;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Run a Game of Life board with loop detection.
#[derive(Parser)]
#[command(
    name = "life",
    about = "Run a Game of Life board until it loops, dies out, or hits the step budget"
)]
struct Args {
    /// Initial board: one line of '0'/'1' per row.
    #[arg(required_unless_present = "random", conflicts_with = "random")]
    input: Option<PathBuf>,

    /// Generate a random ROWSxCOLS board instead of reading a file.
    #[arg(long, value_name = "RxC", value_parser = parse_dims)]
    random: Option<(u32, u32)>,

    /// Probability that a generated cell starts alive.
    #[arg(long, default_value_t = DEFAULT_DENSITY, requires = "random")]
    density: f64,

    /// Seed for `--random`; a fresh seed is drawn when omitted.
    #[arg(long, requires = "random")]
    seed: Option<u64>,

    /// Step budget.
    #[arg(long, default_value_t = 500)]
    max_steps: u64,

    /// Keep stepping after a loop is detected, until the budget runs out.
    #[arg(long)]
    keep_going: bool,

    /// Write frames to this file instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Do not write frames to stdout.
    #[arg(long, short)]
    quiet: bool,

    /// Compare the recorded frames against a previously written frame file.
    #[arg(long, value_name = "FRAMES")]
    verify: Option<PathBuf>,

    /// Log at debug level (overridden by `RUST_LOG`).
    #[arg(long, short)]
    verbose: bool,
}

/// Parse `RxC`; the separator may be `x` or `X`.
fn parse_dims(s: &str) -> std::result::Result<(u32, u32), String> {
    let (rows, cols) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected ROWSxCOLS, got {s:?}"))?;
    let parse = |part: &str| {
        part.trim()
            .parse::<u32>()
            .map_err(|e| format!("invalid dimension {part:?}: {e}"))
    };
    Ok((parse(rows)?, parse(cols)?))
}

/// Build a grid from file contents; the row count is the number of lines.
///
/// Trailing blank lines are ignored.
fn parse_grid(text: &str) -> Result<Grid> {
    let mut lines: Vec<&str> = text.lines().collect();
    while lines.last().is_some_and(|l| l.trim().is_empty()) {
        lines.pop();
    }
    if lines.is_empty() {
        bail!("board has no rows");
    }
    let rows = u32::try_from(lines.len()).context("too many rows")?;
    let width = u32::try_from(lines[0].trim().chars().count()).context("row too long")?;
    let mut grid = Grid::new(rows, width.max(1))?;
    grid.load_from_text(&lines)?;
    Ok(grid)
}

fn load_grid(path: &Path) -> Result<Grid> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse_grid(&text).with_context(|| format!("parsing {}", path.display()))
}

fn random_grid(rows: u32, cols: u32, density: f64, seed: Option<u64>) -> Result<Grid> {
    let mut grid = Grid::new(rows, cols)?;
    match seed {
        Some(seed) => grid.randomize_seeded(density, seed)?,
        None => grid.randomize(density)?,
    }
    Ok(grid)
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn opt(value: Option<u64>) -> String {
    value.map_or_else(|| "-".to_owned(), |v| v.to_string())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let grid = match (&args.input, args.random) {
        (_, Some((rows, cols))) => random_grid(rows, cols, args.density, args.seed)?,
        (Some(path), None) => load_grid(path)?,
        (None, None) => bail!("either an input file or --random is required"),
    };
    info!(
        rows = grid.rows(),
        cols = grid.cols(),
        alive = grid.alive_count(),
        "board loaded"
    );

    let config = SimConfig {
        max_steps: args.max_steps,
        stop_on_loop: !args.keep_going,
    };
    let driver = SimulationDriver::with_config(grid, config)?;
    let recording = Recorder::new(driver).run_to_completion();

    let sink: Option<Box<dyn Write>> = match &args.out {
        Some(path) => {
            let file =
                File::create(path).with_context(|| format!("creating {}", path.display()))?;
            Some(Box::new(BufWriter::new(file)))
        }
        None if args.quiet => None,
        None => Some(Box::new(io::stdout().lock())),
    };
    if let Some(sink) = sink {
        let mut writer = FrameWriter::new(sink);
        writer
            .write_all(&recording.frames)
            .context("writing frames")?;
        writer.flush().context("flushing frames")?;
        debug!(frames = writer.frames_written(), "frames written");
    }

    if let Some(path) = &args.verify {
        let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
        let expected = FrameReader::new(BufReader::new(file))
            .read_all()
            .with_context(|| format!("reading frames from {}", path.display()))?;
        if let Some(divergence) = first_divergence(&expected, &recording.frames) {
            bail!("run diverges from {}: {divergence:?}", path.display());
        }
        info!(frames = expected.len(), "frames match");
    }

    let result = &recording.result;
    println!(
        "reason={} steps={} loop_step={} period={} frames={}",
        result.reason,
        result.step_count,
        opt(result.loop_step),
        opt(result.loop_period),
        recording.frames.len()
    );
    Ok(())
}

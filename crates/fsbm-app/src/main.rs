//! FSBM Trace - Full-search block-matching with frame-memory tracing
//!
//! Entry point: reads the run configuration, then estimates motion over a raw
//! YUV sequence while writing the memory access trace.

use anyhow::{Context, Result};
use clap::Parser;
use fsbm_media::RunConfig;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "fsbm")]
#[command(about = "Full-search block-matching motion estimation with a frame-memory trace")]
#[command(version)]
struct Cli {
    /// JSON run configuration; flags below override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of frames to process after the reference frame
    #[arg(short = 'n', long)]
    frames: Option<usize>,

    /// Macroblock size M
    #[arg(long)]
    mb_size: Option<usize>,

    /// Maximum displacement p
    #[arg(long)]
    search_range: Option<usize>,

    /// Macroblock rows
    #[arg(long)]
    mb_rows: Option<usize>,

    /// Macroblock columns
    #[arg(long)]
    mb_cols: Option<usize>,

    /// Raw planar YUV 4:2:0 input
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Motion vector report output
    #[arg(short, long)]
    results: Option<PathBuf>,

    /// Memory access trace output
    #[arg(short, long)]
    trace: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Defaults, then the config file, then individual flags.
    fn into_config(self) -> Result<RunConfig> {
        let mut config = match &self.config {
            Some(path) => RunConfig::load_from_file(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => RunConfig::default(),
        };

        if let Some(frames) = self.frames {
            config.frames = frames;
        }
        if let Some(mb_size) = self.mb_size {
            config.geometry.mb_size = mb_size;
        }
        if let Some(search_range) = self.search_range {
            config.geometry.search_range = search_range;
        }
        if let Some(mb_rows) = self.mb_rows {
            config.geometry.mb_rows = mb_rows;
        }
        if let Some(mb_cols) = self.mb_cols {
            config.geometry.mb_cols = mb_cols;
        }
        if let Some(input) = self.input {
            config.input = input;
        }
        if let Some(results) = self.results {
            config.results = results;
        }
        if let Some(trace) = self.trace {
            config.trace = trace;
        }

        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; RUST_LOG wins over --verbose
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = cli.into_config()?;
    let summary = fsbm_media::session::run(&config).with_context(|| {
        format!(
            "Motion estimation over {} failed",
            config.input.display()
        )
    })?;

    info!(
        frames = summary.frames.len(),
        trace_records = summary.trace_records,
        "Done! Simulation results have been successfully written to file: {}",
        config.results.display()
    );
    Ok(())
}

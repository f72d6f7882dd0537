//! Command-line entry point: generate every golden tensor fixture.
//!
//! Writes the operand pools and the expected output of each reference
//! operation into one directory, then prints a summary.

use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tg_backend_cpu::CpuBackend;
use tg_fixtures::config::{DEFAULT_OUT_DIR, DEFAULT_PAIRS};
use tg_fixtures::shapes::{DEFAULT_EXTENTS, DEFAULT_RANKS};
use tg_fixtures::{FixtureConfig, FixtureSuite};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "tensorgold")]
#[command(about = "Generate golden tensor fixtures for validating a tensor library")]
#[command(version)]
struct Args {
    /// Directory the fixture files are written to
    #[arg(short, long, default_value = DEFAULT_OUT_DIR)]
    out_dir: PathBuf,

    /// Operand pairs in the element-wise pool
    #[arg(short, long, default_value_t = DEFAULT_PAIRS)]
    pairs: usize,

    /// Operand pairs in the matmul pool
    #[arg(short, long, default_value_t = DEFAULT_PAIRS)]
    matmul_pairs: usize,

    /// Smallest tensor rank drawn
    #[arg(long, default_value_t = *DEFAULT_RANKS.start())]
    min_rank: usize,

    /// Largest tensor rank drawn
    #[arg(long, default_value_t = *DEFAULT_RANKS.end())]
    max_rank: usize,

    /// Largest extent drawn for any axis
    #[arg(long, default_value_t = *DEFAULT_EXTENTS.end())]
    max_extent: usize,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn config(&self) -> FixtureConfig {
        FixtureConfig {
            out_dir: self.out_dir.clone(),
            pairs: self.pairs,
            matmul_pairs: self.matmul_pairs,
            ranks: self.min_rank..=self.max_rank,
            extents: *DEFAULT_EXTENTS.start()..=self.max_extent,
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(std::io::stdout().is_terminal())
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let suite = FixtureSuite::new(args.config()).context("invalid fixture configuration")?;
    info!(
        pairs = args.pairs,
        matmul_pairs = args.matmul_pairs,
        "generating fixtures"
    );
    let report = suite
        .run::<CpuBackend, _>(&mut rand::thread_rng())
        .with_context(|| {
            format!(
                "fixture generation into {} failed",
                suite.config().out_dir.display()
            )
        })?;

    println!("=== Golden Tensor Fixtures ===\n");
    for file in &report.files {
        println!("  {:<40} {:>6} tensors", file.path.display(), file.tensors);
    }
    println!("\n{} files written", report.files.len());

    Ok(())
}

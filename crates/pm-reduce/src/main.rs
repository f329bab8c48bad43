//! tree-reduce: multiply `n` random sign matrices in order on a fixed pool of
//! 4 workers.
//!
//! Usage:
//!   tree-reduce <INPUT>
//!
//! INPUT holds two unsigned integers, `n` and `size`. The product is written
//! to stdout and the compute time in seconds to stderr.

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use log::info;

use pm_matrix::{generate, print, CpuBackend, Result, WorkerPool};
use pm_reduce::{ReduceInput, TreeReducer, SEED};

/// Order-preserving parallel matrix product
#[derive(Parser, Debug)]
#[command(name = "tree-reduce")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Input file containing `n size`
    #[arg(value_name = "INPUT")]
    input: PathBuf,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let input = ReduceInput::from_file(&cli.input)?;
    let pool = WorkerPool::fixed()?;
    let backend = CpuBackend::new();

    let seq = generate::sign_sequence(input.count, input.size, SEED)?;

    let start = Instant::now();
    let product = TreeReducer::new(&pool, &backend).reduce(seq)?;
    let elapsed = start.elapsed().as_secs_f64();
    info!(
        "reduced {} matrices of {}x{} in {:.6}s",
        input.count, input.size, input.size, elapsed
    );

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    print::write_matrix(&mut out, &product)?;
    out.flush()?;

    eprintln!("{:.6}", elapsed);
    Ok(())
}

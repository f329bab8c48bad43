//! matmul: multiply two seeded random matrices on a fixed pool of 4 workers.
//!
//! Usage:
//!   matmul <INPUT>
//!
//! INPUT holds two unsigned integers, `size` and `seed`. The product is
//! written to stdout and the compute time in seconds to stderr.

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use log::info;

use pm_matmul::{multiply_into, MatmulInput};
use pm_matrix::{generate, print, Matrix, Result, WorkerPool};

/// Parallel dense matrix multiply
#[derive(Parser, Debug)]
#[command(name = "matmul")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Input file containing `size seed`
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
    let input = MatmulInput::from_file(&cli.input)?;
    let pool = WorkerPool::fixed()?;

    let (a, b) = generate::digit_pair(input.size, input.seed)?;
    let mut c = Matrix::zeros(input.size)?;

    let start = Instant::now();
    multiply_into(&pool, &a, &b, &mut c)?;
    let elapsed = start.elapsed().as_secs_f64();
    info!("multiplied {0}x{0} in {1:.6}s", input.size, elapsed);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    print::write_matrix(&mut out, &c)?;
    out.flush()?;

    eprintln!("{:.6}", elapsed);
    Ok(())
}

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use bitmeasure::analyzer::{self, DEFAULT_CHUNK_SIZE};

/// Shannon entropy analyzer for arbitrary files
///
/// Expands the file into a binary sequence (most-significant bit first),
/// reading fixed-size chunks in parallel, and reports symbol probabilities,
/// information content, and Shannon entropy.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Arguments {
    /// File to analyze
    path: PathBuf,
    /// Chunk size in bytes for parallel reads
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
    chunk_size: u64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Arguments::parse();

    println!("Processing {} ...", args.path.display());
    let report = analyzer::analyze_file(&args.path, args.chunk_size)?;

    println!("Binary sequence length: {} bits", report.bits);
    println!("Information Content (bits): {}", report.information);
    println!("Shannon Entropy (bits/symbol): {}", report.entropy);

    Ok(())
}

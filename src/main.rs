use anyhow::Context;
use clap::Parser;
use rolldiff::{rolling_hash, DiffOptions, HashParams};
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rolldiff", about = "Rolling-hash byte delta between two files")]
struct Cli {
    /// Path to the old (original) file
    old: PathBuf,
    /// Path to the new (updated) file
    new: PathBuf,
    /// Window size in bytes (0 selects the default of 32)
    #[arg(long, short, default_value_t = rolldiff::DEFAULT_WINDOW)]
    window: usize,
    /// Hash base
    #[arg(long, default_value_t = rolling_hash::DEFAULT_BASE)]
    base: u64,
    /// Hash modulus
    #[arg(long, default_value_t = rolling_hash::DEFAULT_MODULUS)]
    modulus: u64,
    /// Drop unmatched bytes after either file runs out of windows
    #[arg(long)]
    no_tail: bool,
    /// Print the delta list as JSON
    #[arg(long)]
    json: bool,
    /// Log progress to stderr
    #[arg(long, short)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let params = HashParams::new(cli.base, cli.modulus)?;
    let options = DiffOptions::new()
        .with_window(cli.window)
        .with_params(params)
        .with_capture_tail(!cli.no_tail);

    let start = Instant::now();
    let result = rolldiff::diff_files(&cli.old, &cli.new, &options).await?;
    tracing::info!(elapsed = ?start.elapsed(), deltas = result.deltas.len(), "diff complete");

    if cli.json {
        let json = serde_json::to_string_pretty(&result.deltas)
            .context("Failed to serialize delta list")?;
        println!("{}", json);
        return Ok(());
    }

    if result.deltas.is_empty() {
        println!("Files are identical");
        return Ok(());
    }

    println!("Delta for upgrade:");
    for delta in &result.deltas {
        println!("  {}", delta);
    }

    let stats = result.deltas.stats();
    println!("\nSummary:");
    println!("  Old size: {} bytes", result.old_len);
    println!("  New size: {} bytes", result.new_len);
    println!("  Deletes: {}", stats.deletes);
    println!("  Inserts: {}", stats.inserts);
    println!("  Replaces: {}", stats.replaces);
    println!("  Literal bytes: {}", stats.literal_bytes);

    Ok(())
}

use anyhow::{Context, Result};
use clap::Parser;
use std::io;

use pipetally::{output, DataProcessor};

const EXIT_SUCCESS: i32 = 0;
const EXIT_IO: i32 = 1;

/// Batch fed through the pipeline on every run.
const INPUT_VALUES: [i64; 4] = [5, 10, 15, 20];

#[derive(Parser, Debug)]
#[command(name = "pipetally")]
#[command(about = "Transform, filter, and tally a batch of integers", long_about = None)]
#[command(version)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();

    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(EXIT_IO);
    }

    std::process::exit(EXIT_SUCCESS);
}

fn run() -> Result<()> {
    #[cfg(feature = "debug-mode")]
    {
        pipetally::debug_print!("starting in debug mode");
        // The doubled seed is diagnostic only; the batch below is processed
        // as-is.
        let seed = pipetally::transform(10);
        pipetally::debug_print!("seed doubled to {seed}");
    }

    let mut processor = DataProcessor::new();
    for value in INPUT_VALUES {
        processor.process(value);
    }

    let result = processor.result();

    #[cfg(feature = "debug-mode")]
    {
        pipetally::debug_print!("final result: {result}");
        assert!(result > 0, "pipeline result must be positive, got {result}");
    }

    let use_colors = output::should_use_colors();
    output::write_result(&mut io::stdout(), result, use_colors)
        .context("Failed to write result")?;

    Ok(())
}

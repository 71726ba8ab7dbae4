//! Wordpair CLI - Command-line interface for the subword tokenizer.
//!
//! This is the main entry point for the `wordpair` command-line tool.

mod commands;

use clap::{Parser, Subcommand};
use commands::{BenchmarkCommand, EncodeCommand, TrainCommand};
use env_logger::Env;

#[derive(Parser)]
#[command(name = "wordpair")]
#[command(about = "Word-level BPE trainer and subword segmenter", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Train a vocabulary from a text corpus
    Train(TrainCommand),
    /// Segment a sentence into tokens and token IDs
    Encode(EncodeCommand),
    /// Benchmark segmentation performance
    Benchmark(BenchmarkCommand),
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Train(cmd) => commands::train::run(cmd)?,
        Commands::Encode(cmd) => commands::encode::run(cmd)?,
        Commands::Benchmark(cmd) => commands::benchmark::run(cmd)?,
    }

    Ok(())
}

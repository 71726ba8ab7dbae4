//! Benchmark command implementation.

use clap::Parser;

/// Benchmark command arguments.
#[derive(Parser)]
pub struct BenchmarkCommand {
    /// Directory containing the trained vocabulary
    #[arg(short, long)]
    pub vocab: String,

    /// Path to input text file for benchmarking
    #[arg(short, long)]
    pub input: String,

    /// Number of iterations to run
    #[arg(short = 'n', long, default_value_t = 10)]
    pub iterations: usize,
}

use anyhow::Result as AnyhowResult;
use std::fs;
use std::path::Path;
use std::time::Instant;
use wordpair_tokenizer::Tokenizer;

pub fn run(cmd: BenchmarkCommand) -> AnyhowResult<()> {
    let tokenizer = Tokenizer::load(Path::new(&cmd.vocab))?;

    let text = fs::read_to_string(&cmd.input)?;
    let sentences: Vec<String> = text.lines().map(str::to_string).collect();
    let iterations = cmd.iterations.max(1);

    println!("Benchmarking segmentation...");
    println!("  Lines: {}", sentences.len());
    println!("  Words: {}", text.split_whitespace().count());
    println!("  Iterations: {}", iterations);
    println!();

    // Warmup
    let tokens: usize = tokenizer
        .encode_batch(&sentences)?
        .iter()
        .map(|e| e.len())
        .sum();

    let start = Instant::now();
    for _ in 0..iterations {
        tokenizer.encode_batch(&sentences)?;
    }
    let elapsed = start.elapsed();

    let avg_secs = elapsed.as_secs_f64() / iterations as f64;

    println!("Results:");
    println!("  Total time: {:.2}s", elapsed.as_secs_f64());
    println!("  Average time: {:.3}ms", avg_secs * 1000.0);
    println!("  Tokens per pass: {}", tokens);
    println!("  Throughput: {:.0} tokens/s", tokens as f64 / avg_secs.max(f64::EPSILON));

    Ok(())
}

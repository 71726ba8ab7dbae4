//! Train command implementation.

use clap::Parser;

/// Train command arguments.
#[derive(Parser)]
pub struct TrainCommand {
    /// Path to the training corpus (whitespace-delimited words)
    #[arg(short, long)]
    pub input: String,

    /// Output directory for the trained vocabulary
    #[arg(short, long)]
    pub output: String,

    /// Maximum number of spellings to keep (unbounded if omitted)
    #[arg(short, long)]
    pub vocab_size: Option<usize>,

    /// Drop spellings seen fewer times than this
    #[arg(short, long, default_value_t = 2)]
    pub min_freq: u64,

    /// Maximum number of merge rounds
    #[arg(short = 'n', long, default_value_t = 100)]
    pub iterations: usize,
}

use anyhow::{Context, Result as AnyhowResult};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Instant;
use wordpair_tokenizer::{Tokenizer, TokenizerConfig};
use wordpair_training::{BpeTrainer, CorpusVocabularyBuilder, TrainingConfig};

pub fn run(cmd: TrainCommand) -> AnyhowResult<()> {
    let training = TrainingConfig {
        iterations: cmd.iterations,
        vocab_size: cmd.vocab_size,
        min_frequency: cmd.min_freq,
    };
    training.validate()?;

    log::info!(
        "Training on {} (iterations: {}, vocab size: {}, min frequency: {})",
        cmd.input,
        training.iterations,
        training
            .vocab_size
            .map_or_else(|| "unbounded".to_string(), |v| v.to_string()),
        training.min_frequency
    );

    // Read corpus
    let start = Instant::now();
    let file = File::open(&cmd.input).with_context(|| format!("opening {}", cmd.input))?;
    let mut builder = CorpusVocabularyBuilder::new();
    builder.add_reader(BufReader::new(file))?;
    let lines = builder.line_count();
    let initial = builder.build();
    log::info!(
        "Read {} lines, {} distinct words in {:.2}s",
        lines,
        initial.len(),
        start.elapsed().as_secs_f64()
    );

    // Train
    let start = Instant::now();
    let output = BpeTrainer::new(training.clone()).train(initial)?;
    log::info!(
        "Training completed in {:.2}s: {} merges, {} spellings",
        start.elapsed().as_secs_f64(),
        output.merges.len(),
        output.vocab.len()
    );

    // Save
    let config = TokenizerConfig {
        training,
        ..Default::default()
    };
    let tokenizer = Tokenizer::from_vocab(output.vocab, config)?;
    tokenizer.save(Path::new(&cmd.output))?;
    println!(
        "Saved {} spellings ({} tokens) to {}",
        tokenizer.vocab().len(),
        tokenizer.catalog().len(),
        cmd.output
    );

    Ok(())
}

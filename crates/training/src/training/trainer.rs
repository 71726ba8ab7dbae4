//! BPE trainer implementation.
//!
//! The trainer repeatedly counts adjacent symbol pairs, merges the most
//! frequent one across the whole word vocabulary, and finally keeps the most
//! frequent spellings.

use super::corpus::CorpusVocabularyBuilder;
use super::counter::PairCounter;
use wordpair_core::{Result, SymbolPair, TokenizerError, WordVocab};

/// Configuration for BPE training.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingConfig {
    /// Maximum number of merge rounds
    pub iterations: usize,
    /// Cap on retained spellings after training (`None` keeps all)
    pub vocab_size: Option<usize>,
    /// Spellings counted fewer times than this are dropped after truncation
    pub min_frequency: u64,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            iterations: 100,
            vocab_size: None,
            min_frequency: 2,
        }
    }
}

impl TrainingConfig {
    /// Create a training config builder.
    pub fn builder() -> TrainingConfigBuilder {
        TrainingConfigBuilder::default()
    }

    /// Check the configuration for values that can never produce a vocabulary.
    pub fn validate(&self) -> Result<()> {
        if self.vocab_size == Some(0) {
            return Err(TokenizerError::InvalidConfig(
                "vocab_size must be at least 1 when set".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for [`TrainingConfig`].
#[derive(Debug, Clone, Default)]
pub struct TrainingConfigBuilder {
    config: TrainingConfig,
}

impl TrainingConfigBuilder {
    /// Set the maximum number of merge rounds.
    pub fn iterations(mut self, iterations: usize) -> Self {
        self.config.iterations = iterations;
        self
    }

    /// Cap the number of retained spellings.
    pub fn vocab_size(mut self, size: usize) -> Self {
        self.config.vocab_size = Some(size);
        self
    }

    /// Keep every spelling regardless of rank.
    pub fn unbounded(mut self) -> Self {
        self.config.vocab_size = None;
        self
    }

    /// Set the minimum spelling count.
    pub fn min_frequency(mut self, freq: u64) -> Self {
        self.config.min_frequency = freq;
        self
    }

    /// Validate and build the config.
    pub fn build(self) -> Result<TrainingConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

/// Trainer state.
#[derive(Debug, Clone, PartialEq, Eq)]
enum TrainerState {
    /// Counting pairs of the current vocabulary
    Scanning,
    /// Applying the selected pair
    Merging(SymbolPair),
    /// Finalizing the vocabulary
    Done,
}

/// Result of a training run.
#[derive(Debug, Clone)]
pub struct TrainingOutput {
    /// Final vocabulary, count descending
    pub vocab: WordVocab,
    /// Applied merges, in order
    pub merges: Vec<SymbolPair>,
}

/// BPE trainer.
///
/// Trains a word vocabulary by iteratively merging the most frequent
/// adjacent symbol pair. Training is sequential: every round depends on the
/// vocabulary produced by the previous one.
pub struct BpeTrainer {
    /// Configuration
    config: TrainingConfig,
}

impl BpeTrainer {
    /// Create a new BPE trainer with the given configuration.
    pub fn new(config: TrainingConfig) -> Self {
        Self { config }
    }

    /// Create a new BPE trainer running at most `iterations` merge rounds.
    pub fn with_iterations(iterations: usize) -> Self {
        Self::new(TrainingConfig {
            iterations,
            ..Default::default()
        })
    }

    /// The trainer's configuration.
    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }

    /// Build the corpus vocabulary from `text` and train on it.
    pub fn train_text(&self, text: &str) -> Result<TrainingOutput> {
        let mut builder = CorpusVocabularyBuilder::new();
        builder.add_text(text);
        self.train(builder.build())
    }

    /// Train on an initial word vocabulary.
    pub fn train(&self, initial: WordVocab) -> Result<TrainingOutput> {
        self.config.validate()?;

        log::info!(
            "Starting BPE training: {} words, up to {} merges",
            initial.len(),
            self.config.iterations
        );

        let mut vocab = initial;
        let mut merges = Vec::new();
        let mut remaining = self.config.iterations;
        let mut state = if remaining == 0 {
            TrainerState::Done
        } else {
            TrainerState::Scanning
        };

        loop {
            state = match state {
                TrainerState::Scanning => {
                    let pairs = PairCounter::count(&vocab);
                    match pairs.best() {
                        Some((pair, count)) => {
                            log::debug!(
                                "Merge {}: ({}) x {} of {} pairs",
                                merges.len() + 1,
                                pair,
                                count,
                                pairs.len()
                            );
                            TrainerState::Merging(pair.clone())
                        }
                        None => {
                            log::info!("No pairs left to merge after {} merges", merges.len());
                            TrainerState::Done
                        }
                    }
                }
                TrainerState::Merging(pair) => {
                    vocab = vocab.merge_pair(&pair);
                    merges.push(pair);
                    remaining -= 1;
                    if remaining == 0 {
                        TrainerState::Done
                    } else {
                        TrainerState::Scanning
                    }
                }
                TrainerState::Done => break,
            };
        }

        let merged_len = vocab.len();
        let vocab = self.finalize(&vocab);

        log::info!(
            "Finished training: {} merges, {} of {} spellings kept",
            merges.len(),
            vocab.len(),
            merged_len
        );

        Ok(TrainingOutput { vocab, merges })
    }

    /// Sort by count, keep at most `vocab_size`, then drop rare spellings.
    fn finalize(&self, vocab: &WordVocab) -> WordVocab {
        let mut entries = vocab.sorted_by_count();
        if let Some(limit) = self.config.vocab_size {
            entries.truncate(limit);
        }

        entries
            .into_iter()
            .filter(|&(_, count)| count >= self.config.min_frequency)
            .collect()
    }
}

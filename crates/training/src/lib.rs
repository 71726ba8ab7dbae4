//! Wordpair-training - BPE training infrastructure
//!
//! This crate learns a word-level BPE vocabulary from whitespace-delimited
//! text by repeatedly merging the most frequent adjacent symbol pair.
//!
//! # Features
//!
//! - Initial vocabulary from in-memory text or any `BufRead` source
//! - Deterministic pair selection (first-discovered pair wins ties)
//! - Configurable iteration budget, vocabulary cap and minimum frequency
//!
//! # Example
//!
//! ```rust
//! use wordpair_training::{BpeTrainer, TrainingConfig};
//!
//! let config = TrainingConfig::builder()
//!     .iterations(10)
//!     .min_frequency(1)
//!     .build()?;
//!
//! let output = BpeTrainer::new(config).train_text("low lower newest widest")?;
//! assert!(!output.vocab.is_empty());
//! # Ok::<(), wordpair_training::TokenizerError>(())
//! ```

pub use wordpair_core::{Result, TokenizerError};

pub mod training;
pub use training::{
    BpeTrainer, CorpusVocabularyBuilder, PairCounter, PairCounts, TrainingConfig,
    TrainingConfigBuilder, TrainingOutput,
};

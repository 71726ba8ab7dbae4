//! Training infrastructure for word-level BPE.
//!
//! This module provides the corpus vocabulary builder, the pair counter and
//! the merge loop.

pub mod corpus;
pub mod counter;
pub mod trainer;

pub use corpus::CorpusVocabularyBuilder;
pub use counter::{PairCounter, PairCounts};
pub use trainer::{BpeTrainer, TrainingConfig, TrainingConfigBuilder, TrainingOutput};

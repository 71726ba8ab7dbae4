//! Wordpair-tokenizer - High-level tokenizer API
//!
//! This crate turns a trained word vocabulary into a tokenizer: it derives
//! the priority-ordered token catalog, segments words with the recursive
//! greedy segmenter and assigns token ids.
//!
//! # Features
//!
//! - Immutable token catalog shared by reference, no global state
//! - Exact-match fast path for words seen during training
//! - Explicit unknown marker for input no token covers
//! - Parallel batch encoding with rayon
//! - JSON persistence of the trained vocabulary and the token catalog
//!
//! # Example
//!
//! ```rust
//! use wordpair_tokenizer::Tokenizer;
//!
//! let mut tokenizer = Tokenizer::builder()
//!     .iterations(10)
//!     .min_frequency(1)
//!     .build()?;
//! tokenizer.train("low lower newest widest")?;
//!
//! let encoding = tokenizer.encode("lowest")?;
//! println!("{:?} {:?}", encoding.tokens, encoding.ids);
//! # Ok::<(), wordpair_tokenizer::TokenizerError>(())
//! ```

// Re-export core types
pub use wordpair_core::{
    Result, Spelling, TokenizerError, WordVocab, END_OF_WORD, UNKNOWN_TOKEN,
};
pub use wordpair_training::{BpeTrainer, TrainingConfig};

// Catalog and segmentation
pub mod catalog;
pub use catalog::{token_length, CatalogEntry, TokenCatalog};

pub mod segmenter;
pub use segmenter::RecursiveSegmenter;

// Tokenizer API
pub mod tokenizer;
pub use tokenizer::{Encoding, Tokenizer, TokenizerBuilder, TokenizerConfig};

// IO/Serialization
pub mod io;
pub use io::{VocabLoader, VocabSaver};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

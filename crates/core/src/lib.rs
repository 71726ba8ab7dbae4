//! Wordpair-core - Core data model for word-level BPE
//!
//! This crate provides the fundamental data structures shared by the trainer
//! and the segmenter: symbols, spellings, the insertion-ordered word
//! vocabulary and merge application.
//!
//! # Features
//!
//! - Spellings stored as `CompactString` symbols
//! - Insertion-ordered counting backed by `AHashMap` for deterministic tie-breaks
//! - Whole-symbol, left-to-right merge application
//! - Error handling with detailed diagnostics
//!
//! # Example
//!
//! ```rust
//! use wordpair_core::{SymbolPair, WordVocab};
//!
//! let mut vocab = WordVocab::new();
//! vocab.add_word("low");
//! vocab.add_word("lower");
//!
//! let merged = vocab.merge_pair(&SymbolPair::new("l", "o"));
//! assert_eq!(merged.len(), 2);
//! ```

pub mod error;
pub use error::{Result, TokenizerError};

pub mod core;
pub use self::core::{
    OrderedCounts, Spelling, Symbol, SymbolPair, WordVocab, END_OF_WORD, UNKNOWN_TOKEN,
};

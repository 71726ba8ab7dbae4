//! Core data model for word-level BPE.
//!
//! This module contains the spelling and word-vocabulary types, the ordered
//! counter shared by training and cataloguing, and merge application.

pub mod counts;
pub mod merges;
pub mod vocab;

pub use counts::OrderedCounts;
pub use merges::SymbolPair;
pub use vocab::{Spelling, Symbol, WordVocab, END_OF_WORD, UNKNOWN_TOKEN};

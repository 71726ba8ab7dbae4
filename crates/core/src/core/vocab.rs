//! Spellings and the word vocabulary.
//!
//! A word is represented as a [`Spelling`]: the ordered list of symbols it is
//! currently split into, always ending with the [`END_OF_WORD`] marker. The
//! [`WordVocab`] maps spellings to occurrence counts and keeps them in
//! first-encounter order, which the trainer's tie-breaks depend on.

use super::counts::OrderedCounts;
use crate::error::{Result, TokenizerError};
use compact_str::CompactString;
use std::fmt;

/// Marker appended to every word before training and segmentation.
pub const END_OF_WORD: &str = "</w>";

/// Default marker emitted for input no catalog token can cover.
pub const UNKNOWN_TOKEN: &str = "</u>";

/// An atomic unit of a spelling: one character or a merged run of them.
pub type Symbol = CompactString;

/// A word split into symbols.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Spelling {
    symbols: Vec<Symbol>,
}

impl Spelling {
    /// Initial spelling of a surface word: one symbol per character plus `</w>`.
    pub fn from_word(word: &str) -> Self {
        let mut symbols: Vec<Symbol> = Vec::with_capacity(word.chars().count() + 1);
        let mut buf = [0u8; 4];
        for ch in word.chars() {
            symbols.push(CompactString::new(ch.encode_utf8(&mut buf)));
        }
        symbols.push(CompactString::new(END_OF_WORD));
        Self { symbols }
    }

    /// Parse the textual form (symbols separated by whitespace).
    pub fn parse(text: &str) -> Result<Self> {
        let symbols: Vec<Symbol> = text.split_whitespace().map(CompactString::new).collect();
        if symbols.is_empty() {
            return Err(TokenizerError::InvalidSpelling(text.to_string()));
        }
        Ok(Self { symbols })
    }

    /// Build a spelling from already-split symbols.
    ///
    /// Symbols must be non-empty and free of whitespace.
    pub fn from_symbols(symbols: Vec<Symbol>) -> Result<Self> {
        let valid = !symbols.is_empty()
            && symbols
                .iter()
                .all(|s| !s.is_empty() && !s.chars().any(char::is_whitespace));
        if !valid {
            return Err(TokenizerError::InvalidSpelling(
                symbols.iter().map(|s| s.as_str()).collect::<Vec<_>>().join(" "),
            ));
        }
        Ok(Self { symbols })
    }

    pub(crate) fn from_symbols_unchecked(symbols: Vec<Symbol>) -> Self {
        Self { symbols }
    }

    /// The symbols of this spelling, in order.
    #[inline]
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Number of symbols.
    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Spellings are never empty; kept for API symmetry.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The symbols concatenated without separators.
    pub fn surface(&self) -> String {
        self.symbols.iter().map(|s| s.as_str()).collect()
    }
}

impl fmt::Display for Spelling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, symbol) in self.symbols.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(symbol)?;
        }
        Ok(())
    }
}

/// Insertion-ordered mapping from spelling to occurrence count.
#[derive(Debug, Clone, Default)]
pub struct WordVocab {
    counts: OrderedCounts<Spelling>,
}

impl WordVocab {
    /// Create an empty word vocabulary.
    pub fn new() -> Self {
        Self {
            counts: OrderedCounts::new(),
        }
    }

    /// Create an empty word vocabulary with capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            counts: OrderedCounts::with_capacity(capacity),
        }
    }

    /// Add `count` occurrences of a spelling.
    ///
    /// A spelling seen before keeps its first position.
    pub fn add(&mut self, spelling: Spelling, count: u64) -> u64 {
        self.counts.add(spelling, count)
    }

    /// Count one occurrence of a surface word.
    pub fn add_word(&mut self, word: &str) -> u64 {
        self.add(Spelling::from_word(word), 1)
    }

    /// Get the count of a spelling.
    #[inline]
    pub fn get(&self, spelling: &Spelling) -> Option<u64> {
        self.counts.get(spelling)
    }

    /// Check whether a spelling is present.
    #[inline]
    pub fn contains(&self, spelling: &Spelling) -> bool {
        self.counts.contains(spelling)
    }

    /// Number of distinct spellings.
    #[inline]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check if the vocabulary is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over `(spelling, count)` in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Spelling, u64)> + '_ {
        self.counts.iter()
    }

    /// Sum of all counts.
    pub fn total_count(&self) -> u64 {
        self.iter().map(|(_, count)| count).sum()
    }

    /// Entries ordered by count descending; equal counts keep insertion order.
    pub fn sorted_by_count(&self) -> Vec<(Spelling, u64)> {
        let mut entries = self.counts.clone().into_entries();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
    }
}

impl FromIterator<(Spelling, u64)> for WordVocab {
    fn from_iter<I: IntoIterator<Item = (Spelling, u64)>>(iter: I) -> Self {
        Self {
            counts: iter.into_iter().collect(),
        }
    }
}

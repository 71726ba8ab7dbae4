//! Token catalog built from a trained vocabulary.
//!
//! The catalog aggregates every symbol's frequency across the vocabulary and
//! orders the symbols by segmentation priority: longer tokens first, higher
//! frequency first among tokens of equal length, and discovery order among
//! exact ties. It is immutable once built and can be shared freely between
//! threads.

use ahash::AHashMap;
use compact_str::CompactString;
use wordpair_core::{OrderedCounts, Spelling, Symbol, WordVocab, END_OF_WORD};

/// Length class of a token: its character count, with a trailing end-of-word
/// marker counting as a single character.
pub fn token_length(token: &str) -> usize {
    match token.strip_suffix(END_OF_WORD) {
        Some(stem) => stem.chars().count() + 1,
        None => token.chars().count(),
    }
}

/// A single catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    /// The token text
    pub token: Symbol,
    /// Sum of the counts of every spelling using this token, per use
    pub frequency: u64,
    /// Length class, see [`token_length`]
    pub length: usize,
}

/// Priority-ordered list of learned tokens plus a whole-word lookup.
#[derive(Debug, Clone, Default)]
pub struct TokenCatalog {
    /// Entries in segmentation priority order
    entries: Vec<CatalogEntry>,
    /// Token -> position in `entries`
    positions: AHashMap<CompactString, usize>,
    /// Surface form (symbols concatenated) -> spelling
    spellings: AHashMap<String, Spelling>,
}

impl TokenCatalog {
    /// Build the catalog from a trained vocabulary.
    pub fn from_vocab(vocab: &WordVocab) -> Self {
        let mut frequencies: OrderedCounts<Symbol> = OrderedCounts::new();
        let mut spellings = AHashMap::with_capacity(vocab.len());

        for (spelling, count) in vocab.iter() {
            for symbol in spelling.symbols() {
                frequencies.add(symbol.clone(), count);
            }
            spellings.insert(spelling.surface(), spelling.clone());
        }

        let mut entries: Vec<CatalogEntry> = frequencies
            .into_entries()
            .into_iter()
            .map(|(token, frequency)| CatalogEntry {
                length: token_length(&token),
                token,
                frequency,
            })
            .collect();

        // Stable: exact ties keep discovery order.
        entries.sort_by(|a, b| (b.length, b.frequency).cmp(&(a.length, a.frequency)));

        let positions = entries
            .iter()
            .enumerate()
            .map(|(pos, entry)| (entry.token.clone(), pos))
            .collect();

        log::debug!(
            "Built token catalog: {} tokens from {} spellings",
            entries.len(),
            spellings.len()
        );

        Self {
            entries,
            positions,
            spellings,
        }
    }

    /// Entries in segmentation priority order.
    #[inline]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Iterate over tokens in priority order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|e| e.token.as_str())
    }

    /// Get the entry for a token.
    pub fn get(&self, token: &str) -> Option<&CatalogEntry> {
        self.positions.get(token).map(|&pos| &self.entries[pos])
    }

    /// Priority rank of a token (0 is tried first).
    #[inline]
    pub fn position(&self, token: &str) -> Option<usize> {
        self.positions.get(token).copied()
    }

    /// Spelling of a trained word, looked up by its surface form
    /// (including the end-of-word marker).
    #[inline]
    pub fn lookup_spelling(&self, surface: &str) -> Option<&Spelling> {
        self.spellings.get(surface)
    }

    /// Number of distinct tokens.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the catalog has no tokens.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

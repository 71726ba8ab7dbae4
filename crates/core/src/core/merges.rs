//! Symbol pairs and merge application.
//!
//! A merge replaces every whole-symbol adjacent occurrence of a pair with the
//! concatenated symbol. Matches never reach inside a larger symbol and are
//! consumed left to right without overlap.

use super::vocab::{Spelling, Symbol, WordVocab};
use compact_str::CompactString;
use std::fmt;

/// An ordered pair of adjacent symbols.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SymbolPair {
    pub left: Symbol,
    pub right: Symbol,
}

impl SymbolPair {
    /// Create a new pair.
    pub fn new(left: impl Into<Symbol>, right: impl Into<Symbol>) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
        }
    }

    /// The symbol produced by merging this pair.
    pub fn merged(&self) -> Symbol {
        let mut merged = CompactString::with_capacity(self.left.len() + self.right.len());
        merged.push_str(&self.left);
        merged.push_str(&self.right);
        merged
    }

    /// Whether `a` followed by `b` is this pair.
    #[inline]
    pub fn matches(&self, a: &str, b: &str) -> bool {
        self.left == a && self.right == b
    }
}

impl fmt::Display for SymbolPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.left, self.right)
    }
}

impl Spelling {
    /// Apply one merge to this spelling.
    pub fn merge_pair(&self, pair: &SymbolPair) -> Spelling {
        let symbols = self.symbols();
        let mut out: Vec<Symbol> = Vec::with_capacity(symbols.len());
        let mut i = 0;

        while i < symbols.len() {
            if i + 1 < symbols.len() && pair.matches(&symbols[i], &symbols[i + 1]) {
                out.push(pair.merged());
                i += 2;
            } else {
                out.push(symbols[i].clone());
                i += 1;
            }
        }

        Spelling::from_symbols_unchecked(out)
    }
}

impl WordVocab {
    /// Apply one merge to every spelling, keeping counts and order.
    ///
    /// Spellings that merge into the same symbol sequence collapse into one
    /// entry at the first one's position, with their counts summed. Corpus
    /// vocabularies never collide; hand-built or loaded ones can.
    pub fn merge_pair(&self, pair: &SymbolPair) -> WordVocab {
        let mut out = WordVocab::with_capacity(self.len());
        for (spelling, count) in self.iter() {
            out.add(spelling.merge_pair(pair), count);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_adjacent_pair() {
        let spelling = Spelling::from_word("low");
        let merged = spelling.merge_pair(&SymbolPair::new("l", "o"));
        assert_eq!(merged.to_string(), "lo w </w>");
    }

    #[test]
    fn test_merge_is_left_to_right_non_overlapping() {
        let spelling = Spelling::parse("a a a </w>").unwrap();
        let merged = spelling.merge_pair(&SymbolPair::new("a", "a"));
        assert_eq!(merged.to_string(), "aa a </w>");

        let spelling = Spelling::parse("a a a a </w>").unwrap();
        let merged = spelling.merge_pair(&SymbolPair::new("a", "a"));
        assert_eq!(merged.to_string(), "aa aa </w>");
    }

    #[test]
    fn test_merge_respects_symbol_boundaries() {
        // "es t" must not match the pair (s, t)
        let spelling = Spelling::parse("n e w es t </w>").unwrap();
        let merged = spelling.merge_pair(&SymbolPair::new("s", "t"));
        assert_eq!(merged, spelling);

        let merged = spelling.merge_pair(&SymbolPair::new("es", "t"));
        assert_eq!(merged.to_string(), "n e w est </w>");
    }

    #[test]
    fn test_merge_with_end_marker() {
        let spelling = Spelling::parse("low </w>").unwrap();
        let merged = spelling.merge_pair(&SymbolPair::new("low", "</w>"));
        assert_eq!(merged.symbols(), &["low</w>"]);
    }

    #[test]
    fn test_vocab_merge_preserves_counts_and_order() {
        let mut vocab = WordVocab::new();
        vocab.add(Spelling::from_word("low"), 5);
        vocab.add(Spelling::from_word("newest"), 6);

        let merged = vocab.merge_pair(&SymbolPair::new("e", "s"));
        let entries: Vec<(String, u64)> = merged.iter().map(|(s, c)| (s.to_string(), c)).collect();
        assert_eq!(
            entries,
            vec![
                ("l o w </w>".to_string(), 5),
                ("n e w es t </w>".to_string(), 6),
            ]
        );
    }

    #[test]
    fn test_vocab_merge_sums_colliding_spellings() {
        let mut vocab = WordVocab::new();
        vocab.add(Spelling::parse("a b </w>").unwrap(), 3);
        vocab.add(Spelling::parse("c </w>").unwrap(), 4);
        vocab.add(Spelling::parse("ab </w>").unwrap(), 2);

        let merged = vocab.merge_pair(&SymbolPair::new("a", "b"));
        let entries: Vec<(String, u64)> = merged.iter().map(|(s, c)| (s.to_string(), c)).collect();
        assert_eq!(
            entries,
            vec![("ab </w>".to_string(), 5), ("c </w>".to_string(), 4)]
        );
        assert_eq!(merged.total_count(), vocab.total_count());
    }

    #[test]
    fn test_merged_symbol() {
        assert_eq!(SymbolPair::new("es", "t").merged(), "est");
        assert_eq!(SymbolPair::new("es", "t").to_string(), "es t");
    }
}

//! Recursive greedy segmentation.
//!
//! A word is split by the highest-priority catalog token that occurs in it.
//! Every fragment around the occurrences is segmented again using only the
//! tokens ranked below the one that matched. Fragments nothing matches become
//! the unknown marker.

use crate::catalog::TokenCatalog;
use compact_str::CompactString;

/// Splits words into catalog tokens.
///
/// Borrows the catalog immutably; any number of segmenters may share one
/// catalog across threads.
#[derive(Debug, Clone, Copy)]
pub struct RecursiveSegmenter<'a> {
    catalog: &'a TokenCatalog,
}

impl<'a> RecursiveSegmenter<'a> {
    /// Create a segmenter over a catalog.
    pub fn new(catalog: &'a TokenCatalog) -> Self {
        Self { catalog }
    }

    /// The catalog driving this segmenter.
    pub fn catalog(&self) -> &'a TokenCatalog {
        self.catalog
    }

    /// Segment a word (with the end-of-word marker already appended).
    ///
    /// Words present verbatim in the trained vocabulary return their stored
    /// spelling. Anything else goes through the recursive search. An empty
    /// word yields no tokens; any other word yields at least one.
    pub fn segment(&self, word: &str, unknown_marker: &str) -> Vec<CompactString> {
        if let Some(spelling) = self.catalog.lookup_spelling(word) {
            return spelling.symbols().to_vec();
        }
        self.segment_uncached(word, unknown_marker)
    }

    /// Segment a word without consulting the whole-word lookup.
    pub fn segment_uncached(&self, word: &str, unknown_marker: &str) -> Vec<CompactString> {
        let mut out = Vec::new();
        self.segment_from(word, 0, unknown_marker, &mut out);
        out
    }

    /// Segment `word` with the candidates ranked `first..` and append the
    /// result to `out`.
    fn segment_from(
        &self,
        word: &str,
        first: usize,
        unknown_marker: &str,
        out: &mut Vec<CompactString>,
    ) {
        if word.is_empty() {
            return;
        }

        let entries = self.catalog.entries();
        for (rank, entry) in entries.iter().enumerate().skip(first) {
            let token = entry.token.as_str();
            let mut occurrences = word.match_indices(token).peekable();
            if occurrences.peek().is_none() {
                continue;
            }

            let next = rank + 1;
            let mut start = 0;
            for (pos, _) in occurrences {
                self.segment_from(&word[start..pos], next, unknown_marker, out);
                out.push(entry.token.clone());
                start = pos + token.len();
            }
            self.segment_from(&word[start..], next, unknown_marker, out);
            return;
        }

        log::trace!("No catalog token matches {:?}", word);
        out.push(CompactString::new(unknown_marker));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordpair_core::{Spelling, WordVocab, UNKNOWN_TOKEN};

    fn catalog(entries: &[(&str, u64)]) -> TokenCatalog {
        let vocab: WordVocab = entries
            .iter()
            .map(|&(s, c)| (Spelling::parse(s).unwrap(), c))
            .collect();
        TokenCatalog::from_vocab(&vocab)
    }

    fn toy_catalog() -> TokenCatalog {
        // Priority: est</w>, low</w>, low, e, n, w, r, </w>
        catalog(&[("low</w>", 5), ("low e r </w>", 2), ("n e w est</w>", 6)])
    }

    #[test]
    fn test_empty_word() {
        let catalog = toy_catalog();
        let segmenter = RecursiveSegmenter::new(&catalog);
        assert!(segmenter.segment("", UNKNOWN_TOKEN).is_empty());
    }

    #[test]
    fn test_empty_catalog_yields_unknown() {
        let catalog = TokenCatalog::default();
        let segmenter = RecursiveSegmenter::new(&catalog);
        assert_eq!(segmenter.segment("abc</w>", UNKNOWN_TOKEN), vec!["</u>"]);
    }

    #[test]
    fn test_fast_path_returns_stored_spelling() {
        let catalog = toy_catalog();
        let segmenter = RecursiveSegmenter::new(&catalog);
        assert_eq!(
            segmenter.segment("lower</w>", UNKNOWN_TOKEN),
            vec!["low", "e", "r", "</w>"]
        );
    }

    #[test]
    fn test_lowest_decomposes() {
        let catalog = toy_catalog();
        let segmenter = RecursiveSegmenter::new(&catalog);
        assert_eq!(
            segmenter.segment("lowest</w>", UNKNOWN_TOKEN),
            vec!["low", "est</w>"]
        );
    }

    #[test]
    fn test_repeated_occurrences() {
        let catalog = toy_catalog();
        let segmenter = RecursiveSegmenter::new(&catalog);
        assert_eq!(
            segmenter.segment("lowlow</w>", UNKNOWN_TOKEN),
            vec!["low", "low</w>"]
        );
        assert_eq!(segmenter.segment("ene", UNKNOWN_TOKEN), vec!["e", "n", "e"]);
    }

    #[test]
    fn test_end_marker_is_matched_literally() {
        // "w" outranks "</w>" here, so it is found inside the marker itself.
        let catalog = toy_catalog();
        let segmenter = RecursiveSegmenter::new(&catalog);
        assert_eq!(
            segmenter.segment("ne</w>", UNKNOWN_TOKEN),
            vec!["n", "e", "</u>", "w", "</u>"]
        );
    }

    #[test]
    fn test_unknown_residue() {
        // Priority: ab, </w>, c, b
        let catalog = catalog(&[("ab c </w>", 3), ("b </w>", 1)]);
        let segmenter = RecursiveSegmenter::new(&catalog);
        assert_eq!(
            segmenter.segment("xaby</w>", "<unk>"),
            vec!["<unk>", "ab", "<unk>", "</w>"]
        );
        assert_eq!(segmenter.segment("xyz", UNKNOWN_TOKEN), vec!["</u>"]);
    }

    #[test]
    fn test_fragments_use_lower_ranked_tokens() {
        let catalog = catalog(&[("ab c </w>", 3), ("b </w>", 1)]);
        let segmenter = RecursiveSegmenter::new(&catalog);
        let tokens: Vec<&str> = catalog.tokens().collect();
        assert_eq!(tokens, vec!["ab", "</w>", "c", "b"]);

        assert_eq!(
            segmenter.segment_uncached("bab</w>", UNKNOWN_TOKEN),
            vec!["b", "ab", "</w>"]
        );
    }

    #[test]
    fn test_residue_between_matches() {
        // Priority: xy, z, q
        let catalog = catalog(&[("xy z", 5), ("q", 1)]);
        let segmenter = RecursiveSegmenter::new(&catalog);
        assert_eq!(
            segmenter.segment_uncached("xyqxz", UNKNOWN_TOKEN),
            vec!["xy", "q", "</u>", "z"]
        );
    }

    #[test]
    fn test_information_preserving_without_unknowns() {
        // Priority: est</w>, low</w>, low, </w>, a, e, n, w, r
        let catalog = catalog(&[
            ("low</w>", 5),
            ("low e r </w>", 2),
            ("n e w est</w>", 6),
            ("a </w>", 20),
        ]);
        let segmenter = RecursiveSegmenter::new(&catalog);

        for word in ["lowest</w>", "newer</w>", "renew</w>", "lowlow</w>", "anew</w>"] {
            let tokens = segmenter.segment(word, UNKNOWN_TOKEN);
            assert!(!tokens.iter().any(|t| t == UNKNOWN_TOKEN), "{}", word);
            let joined: String = tokens.iter().map(|t| t.as_str()).collect();
            assert_eq!(joined, word);
        }
    }
}

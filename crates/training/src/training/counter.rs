//! Pair counting for BPE training.
//!
//! The pair-count table is rebuilt from scratch every iteration. Pairs are
//! kept in discovery order so that the best pair is a deterministic function
//! of the corpus word order.

use wordpair_core::{OrderedCounts, SymbolPair, WordVocab};

/// Weighted adjacent-pair counts in discovery order.
#[derive(Debug, Clone, Default)]
pub struct PairCounts {
    counts: OrderedCounts<SymbolPair>,
}

impl PairCounts {
    /// The pair with the strictly highest count.
    ///
    /// When several pairs share the maximum, the one discovered first while
    /// scanning the vocabulary in insertion order wins.
    pub fn best(&self) -> Option<(&SymbolPair, u64)> {
        self.counts.max_first()
    }

    /// Get the count of a pair.
    #[inline]
    pub fn get(&self, pair: &SymbolPair) -> Option<u64> {
        self.counts.get(pair)
    }

    /// Number of distinct pairs.
    #[inline]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check if there is nothing left to merge.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over `(pair, count)` in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = (&SymbolPair, u64)> + '_ {
        self.counts.iter()
    }
}

/// Counter for adjacent-symbol pair frequencies.
pub struct PairCounter;

impl PairCounter {
    /// Count every adjacent pair, weighted by the spelling's count.
    pub fn count(vocab: &WordVocab) -> PairCounts {
        let mut counts = OrderedCounts::new();

        for (spelling, count) in vocab.iter() {
            for window in spelling.symbols().windows(2) {
                counts.add(SymbolPair::new(window[0].clone(), window[1].clone()), count);
            }
        }

        PairCounts { counts }
    }
}

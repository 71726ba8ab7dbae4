//! Main tokenizer implementation.
//!
//! This module provides the high-level `Tokenizer` struct that ties a trained
//! word vocabulary to its token catalog, segmenter and derived token ids.

use crate::catalog::TokenCatalog;
use crate::segmenter::RecursiveSegmenter;
use ahash::AHashMap;
use compact_str::CompactString;
use std::path::Path;
use wordpair_core::{Result, TokenizerError, WordVocab, END_OF_WORD, UNKNOWN_TOKEN};
use wordpair_training::{BpeTrainer, TrainingConfig};

/// Configuration for building a tokenizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizerConfig {
    /// Marker emitted for input no catalog token covers
    pub unknown_token: String,
    /// Parameters used by [`Tokenizer::train`]
    pub training: TrainingConfig,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            unknown_token: UNKNOWN_TOKEN.to_string(),
            training: TrainingConfig::default(),
        }
    }
}

impl TokenizerConfig {
    /// Check the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.unknown_token.is_empty() || self.unknown_token.chars().any(char::is_whitespace) {
            return Err(TokenizerError::InvalidConfig(format!(
                "unknown token must be non-empty and contain no whitespace, got {:?}",
                self.unknown_token
            )));
        }
        self.training.validate()
    }
}

/// Builder for creating a tokenizer.
#[derive(Debug, Clone, Default)]
pub struct TokenizerBuilder {
    config: TokenizerConfig,
}

impl TokenizerBuilder {
    /// Create a new tokenizer builder with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the unknown-token marker.
    pub fn unknown_token(mut self, token: impl Into<String>) -> Self {
        self.config.unknown_token = token.into();
        self
    }

    /// Set the maximum number of training merge rounds.
    pub fn iterations(mut self, iterations: usize) -> Self {
        self.config.training.iterations = iterations;
        self
    }

    /// Cap the number of spellings kept after training.
    pub fn vocab_size(mut self, size: Option<usize>) -> Self {
        self.config.training.vocab_size = size;
        self
    }

    /// Set the minimum spelling count kept after training.
    pub fn min_frequency(mut self, freq: u64) -> Self {
        self.config.training.min_frequency = freq;
        self
    }

    /// Build an untrained tokenizer.
    pub fn build(self) -> Result<Tokenizer> {
        Tokenizer::from_vocab(WordVocab::new(), self.config)
    }

    /// Build a tokenizer over an already trained vocabulary.
    pub fn build_with_vocab(self, vocab: WordVocab) -> Result<Tokenizer> {
        Tokenizer::from_vocab(vocab, self.config)
    }
}

/// Main tokenizer struct.
///
/// Token ids are derived, never stored: catalog tokens are numbered in
/// priority order from 0 and the unknown marker takes the next id.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    /// Trained word vocabulary, count descending
    vocab: WordVocab,
    /// Token catalog derived from `vocab`
    catalog: TokenCatalog,
    /// Token -> id
    token_ids: AHashMap<CompactString, u32>,
    /// Id -> token (catalog tokens, then the unknown marker)
    id_tokens: Vec<CompactString>,
    /// Configuration
    config: TokenizerConfig,
}

impl Tokenizer {
    /// Create a tokenizer builder.
    pub fn builder() -> TokenizerBuilder {
        TokenizerBuilder::new()
    }

    /// Create a tokenizer over a trained vocabulary.
    pub fn from_vocab(vocab: WordVocab, config: TokenizerConfig) -> Result<Self> {
        config.validate()?;

        let catalog = TokenCatalog::from_vocab(&vocab);
        Self::check_unknown_token(&catalog, &config.unknown_token)?;
        let (token_ids, id_tokens) = Self::assign_ids(&catalog, &config.unknown_token);

        Ok(Self {
            vocab,
            catalog,
            token_ids,
            id_tokens,
            config,
        })
    }

    /// The unknown marker must not also be a catalog token.
    fn check_unknown_token(catalog: &TokenCatalog, unknown_token: &str) -> Result<()> {
        match catalog.position(unknown_token) {
            Some(pos) => Err(TokenizerError::InvalidConfig(format!(
                "unknown token {:?} is already catalog token {}",
                unknown_token, pos
            ))),
            None => Ok(()),
        }
    }

    /// Number catalog tokens in priority order; the unknown marker comes last.
    fn assign_ids(
        catalog: &TokenCatalog,
        unknown_token: &str,
    ) -> (AHashMap<CompactString, u32>, Vec<CompactString>) {
        let mut id_tokens: Vec<CompactString> = Vec::with_capacity(catalog.len() + 1);
        id_tokens.extend(catalog.entries().iter().map(|e| e.token.clone()));
        id_tokens.push(CompactString::new(unknown_token));

        let mut token_ids = AHashMap::with_capacity(id_tokens.len());
        for (id, token) in id_tokens.iter().enumerate() {
            token_ids.insert(token.clone(), id as u32);
        }

        (token_ids, id_tokens)
    }

    /// Train on text and replace the current vocabulary.
    ///
    /// # Arguments
    /// * `data` - Training text, whitespace-delimited words
    pub fn train(&mut self, data: &str) -> Result<()> {
        let trainer = BpeTrainer::new(self.config.training.clone());
        let output = trainer.train_text(data)?;

        let catalog = TokenCatalog::from_vocab(&output.vocab);
        Self::check_unknown_token(&catalog, &self.config.unknown_token)?;

        self.catalog = catalog;
        let (token_ids, id_tokens) = Self::assign_ids(&self.catalog, &self.config.unknown_token);
        self.token_ids = token_ids;
        self.id_tokens = id_tokens;
        self.vocab = output.vocab;

        log::info!(
            "Tokenizer trained: {} spellings, {} tokens",
            self.vocab.len(),
            self.catalog.len()
        );

        Ok(())
    }

    /// Segment a bare word; the end-of-word marker is appended here.
    pub fn segment_word(&self, word: &str) -> Vec<CompactString> {
        let mut marked = String::with_capacity(word.len() + END_OF_WORD.len());
        marked.push_str(word);
        marked.push_str(END_OF_WORD);
        RecursiveSegmenter::new(&self.catalog).segment(&marked, &self.config.unknown_token)
    }

    /// Encode a sentence into tokens and token ids.
    ///
    /// # Arguments
    /// * `text` - Whitespace-delimited words
    pub fn encode(&self, text: &str) -> Result<Encoding> {
        let mut tokens = Vec::new();
        let mut ids = Vec::new();

        for word in text.split_whitespace() {
            for token in self.segment_word(word) {
                let id = self
                    .token_id(&token)
                    .ok_or_else(|| TokenizerError::UnknownToken(token.to_string()))?;
                ids.push(id);
                tokens.push(token);
            }
        }

        Ok(Encoding { tokens, ids })
    }

    /// Encode a batch of sentences (parallelized).
    pub fn encode_batch(&self, texts: &[String]) -> Result<Vec<Encoding>> {
        use rayon::prelude::*;

        texts
            .par_iter()
            .map(|text| self.encode(text))
            .collect::<std::result::Result<Vec<_>, _>>()
    }

    /// Decode token ids back to text.
    ///
    /// End-of-word markers become word boundaries. Unknown markers are kept
    /// as-is, since the text they replaced is gone.
    pub fn decode(&self, ids: &[u32]) -> Result<String> {
        let mut joined = String::new();
        for &id in ids {
            let token = self
                .id_to_token(id)
                .ok_or(TokenizerError::UnknownTokenId(id))?;
            joined.push_str(token);
        }

        let words: Vec<&str> = joined
            .split(END_OF_WORD)
            .filter(|w| !w.is_empty())
            .collect();
        Ok(words.join(" "))
    }

    /// Get the id of a token.
    #[inline]
    pub fn token_id(&self, token: &str) -> Option<u32> {
        self.token_ids.get(token).copied()
    }

    /// Get the token for an id.
    #[inline]
    pub fn id_to_token(&self, id: u32) -> Option<&str> {
        self.id_tokens.get(id as usize).map(|t| t.as_str())
    }

    /// Id of the unknown marker (equal to the catalog size).
    #[inline]
    pub fn unknown_id(&self) -> u32 {
        self.catalog.len() as u32
    }

    /// Number of ids, including the unknown marker.
    pub fn vocab_size(&self) -> usize {
        self.id_tokens.len()
    }

    /// Get a reference to the trained word vocabulary.
    pub fn vocab(&self) -> &WordVocab {
        &self.vocab
    }

    /// Get a reference to the token catalog.
    pub fn catalog(&self) -> &TokenCatalog {
        &self.catalog
    }

    /// Get a reference to the configuration.
    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    /// Save the tokenizer's vocabulary to a directory.
    ///
    /// # Arguments
    /// * `path` - Directory path to save to
    pub fn save(&self, path: &Path) -> Result<()> {
        use crate::io::save::VocabSaver;

        VocabSaver::new(&self.vocab, &self.config).save(path)
    }

    /// Save the token catalog with its ids to a directory.
    pub fn save_catalog(&self, path: &Path) -> Result<()> {
        use crate::io::save::VocabSaver;

        VocabSaver::new(&self.vocab, &self.config).save_catalog(&self.catalog, path)
    }

    /// Load a tokenizer from a directory.
    ///
    /// Ids are recomputed from the loaded vocabulary.
    pub fn load(path: &Path) -> Result<Self> {
        use crate::io::load::VocabLoader;

        let (vocab, config) = VocabLoader::load(path)?;
        Self::from_vocab(vocab, config)
    }

    /// Load a tokenizer from a directory, overriding the unknown marker.
    pub fn load_with_unknown(path: &Path, unknown_token: &str) -> Result<Self> {
        use crate::io::load::VocabLoader;

        let (vocab, mut config) = VocabLoader::load(path)?;
        config.unknown_token = unknown_token.to_string();
        Self::from_vocab(vocab, config)
    }
}

/// Result of encoding text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoding {
    /// Tokens, in order
    pub tokens: Vec<CompactString>,
    /// Token ids, parallel to `tokens`
    pub ids: Vec<u32>,
}

impl Encoding {
    /// Get the number of tokens.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Check if the encoding is empty.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Get the tokens as strings.
    pub fn get_tokens(&self) -> Vec<&str> {
        self.tokens.iter().map(|t| t.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordpair_core::Spelling;

    fn toy_tokenizer() -> Tokenizer {
        let vocab: WordVocab = [
            ("n e w est</w>", 6),
            ("low</w>", 5),
            ("a </w>", 20),
            ("low e r </w>", 2),
        ]
        .into_iter()
        .map(|(s, c)| (Spelling::parse(s).unwrap(), c))
        .collect();

        Tokenizer::builder().build_with_vocab(vocab).unwrap()
    }

    #[test]
    fn test_builder() {
        let tokenizer = Tokenizer::builder()
            .iterations(10)
            .vocab_size(Some(100))
            .min_frequency(1)
            .unknown_token("<unk>")
            .build()
            .unwrap();

        assert_eq!(tokenizer.config().training.iterations, 10);
        assert_eq!(tokenizer.config().training.vocab_size, Some(100));
        assert_eq!(tokenizer.config().unknown_token, "<unk>");
        // Only the unknown marker
        assert_eq!(tokenizer.vocab_size(), 1);
        assert_eq!(tokenizer.unknown_id(), 0);
    }

    #[test]
    fn test_builder_rejects_bad_unknown_token() {
        assert!(Tokenizer::builder().unknown_token("").build().is_err());
        assert!(Tokenizer::builder().unknown_token("a b").build().is_err());
    }

    #[test]
    fn test_unknown_token_must_not_be_catalog_token() {
        let vocab: WordVocab = [("n e w est</w>", 6), ("low</w>", 5)]
            .into_iter()
            .map(|(s, c)| (Spelling::parse(s).unwrap(), c))
            .collect();

        let result = Tokenizer::builder().unknown_token("e").build_with_vocab(vocab);
        assert!(matches!(result, Err(TokenizerError::InvalidConfig(_))));
    }

    #[test]
    fn test_train_rejects_colliding_unknown_token() {
        let mut tokenizer = Tokenizer::builder()
            .unknown_token("w")
            .min_frequency(1)
            .iterations(0)
            .build()
            .unwrap();

        let result = tokenizer.train("low new");
        assert!(matches!(result, Err(TokenizerError::InvalidConfig(_))));
        assert!(tokenizer.catalog().is_empty());
    }

    #[test]
    fn test_ids_follow_catalog_order() {
        let tokenizer = toy_tokenizer();
        // Priority: est</w>, low</w>, low, </w>, a, e, n, w, r
        assert_eq!(tokenizer.token_id("est</w>"), Some(0));
        assert_eq!(tokenizer.token_id("low</w>"), Some(1));
        assert_eq!(tokenizer.token_id("low"), Some(2));
        assert_eq!(tokenizer.token_id("</w>"), Some(3));
        assert_eq!(tokenizer.token_id("r"), Some(8));
        assert_eq!(tokenizer.token_id("</u>"), Some(9));
        assert_eq!(tokenizer.unknown_id(), 9);
        assert_eq!(tokenizer.vocab_size(), 10);
        assert_eq!(tokenizer.id_to_token(2), Some("low"));
        assert_eq!(tokenizer.id_to_token(10), None);
    }

    #[test]
    fn test_encode_sentence() {
        let tokenizer = toy_tokenizer();
        let encoding = tokenizer.encode("lowest  low\tnewer").unwrap();

        assert_eq!(
            encoding.get_tokens(),
            vec!["low", "est</w>", "low</w>", "n", "e", "w", "e", "r", "</w>"]
        );
        assert_eq!(encoding.ids, vec![2, 0, 1, 6, 5, 7, 5, 8, 3]);
        assert_eq!(encoding.len(), 9);
    }

    #[test]
    fn test_encode_unknown() {
        let tokenizer = toy_tokenizer();
        let encoding = tokenizer.encode("xa").unwrap();
        assert_eq!(encoding.get_tokens(), vec!["</u>", "a", "</w>"]);
        assert_eq!(encoding.ids, vec![9, 4, 3]);
    }

    #[test]
    fn test_encode_empty() {
        let tokenizer = toy_tokenizer();
        assert!(tokenizer.encode("   ").unwrap().is_empty());
    }

    #[test]
    fn test_decode() {
        let tokenizer = toy_tokenizer();
        let encoding = tokenizer.encode("lowest low newer").unwrap();
        assert_eq!(tokenizer.decode(&encoding.ids).unwrap(), "lowest low newer");

        assert!(matches!(
            tokenizer.decode(&[42]),
            Err(TokenizerError::UnknownTokenId(42))
        ));
    }

    #[test]
    fn test_encode_batch_matches_sequential() {
        let tokenizer = toy_tokenizer();
        let texts = vec![
            "lowest low".to_string(),
            "newer anew".to_string(),
            "zzz".to_string(),
        ];

        let batch = tokenizer.encode_batch(&texts).unwrap();
        for (text, encoding) in texts.iter().zip(batch.iter()) {
            assert_eq!(&tokenizer.encode(text).unwrap(), encoding);
        }
    }

    #[test]
    fn test_train() {
        let mut tokenizer = Tokenizer::builder()
            .iterations(10)
            .min_frequency(1)
            .build()
            .unwrap();
        tokenizer.train("low lower newest widest").unwrap();

        assert!(tokenizer.token_id("low</w>").is_some());
        assert_eq!(tokenizer.segment_word("low"), vec!["low</w>"]);
        assert_eq!(tokenizer.unknown_id() as usize, tokenizer.catalog().len());
    }
}

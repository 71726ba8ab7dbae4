//! Load functionality for trained vocabularies.

use super::format::{SerializedVocab, VOCAB_FILE};
use crate::tokenizer::TokenizerConfig;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use wordpair_core::{Result, Spelling, TokenizerError, WordVocab, END_OF_WORD};
use wordpair_training::TrainingConfig;

/// Vocabulary loader - handles loading trained models.
pub struct VocabLoader;

impl VocabLoader {
    /// Load a vocabulary from a directory.
    ///
    /// Expects a `vocab.json` file in the given directory.
    ///
    /// # Arguments
    /// * `path` - Directory path to load from
    pub fn load(path: &Path) -> Result<(WordVocab, TokenizerConfig)> {
        let file_path = path.join(VOCAB_FILE);
        let file = File::open(&file_path).map_err(|err| TokenizerError::Io {
            path: file_path.clone(),
            err,
        })?;

        let reader = BufReader::new(file);
        let serialized: SerializedVocab = serde_json::from_reader(reader)?;

        let loaded = Self::deserialize(serialized)?;
        log::info!(
            "Loaded {} spellings from {}",
            loaded.0.len(),
            file_path.display()
        );
        Ok(loaded)
    }

    /// Deserialize from a serialized structure.
    pub fn deserialize(data: SerializedVocab) -> Result<(WordVocab, TokenizerConfig)> {
        if data.end_of_word != END_OF_WORD {
            return Err(TokenizerError::Load(format!(
                "Vocabulary uses end-of-word marker {:?}, expected {:?}",
                data.end_of_word, END_OF_WORD
            )));
        }

        let mut vocab = WordVocab::with_capacity(data.entries.len());
        for (line, entry) in data.entries.into_iter().enumerate() {
            let spelling = Spelling::parse(&entry.spelling).map_err(|e| {
                TokenizerError::Load(format!("Entry {}: {}", line + 1, e))
            })?;
            if vocab.contains(&spelling) {
                return Err(TokenizerError::Load(format!(
                    "Entry {}: duplicate spelling {:?}",
                    line + 1,
                    entry.spelling
                )));
            }
            vocab.add(spelling, entry.count);
        }

        let config = TokenizerConfig {
            unknown_token: data.config.unknown_token,
            training: TrainingConfig {
                iterations: data.config.iterations,
                vocab_size: data.config.vocab_size,
                min_frequency: data.config.min_frequency,
            },
        };

        Ok((vocab, config))
    }
}

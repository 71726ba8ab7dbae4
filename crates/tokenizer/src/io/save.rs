//! Save functionality for trained vocabularies.
//!
//! This module writes the trained word vocabulary and the derived token
//! catalog to a model directory.

use super::format::{
    SerializedCatalog, SerializedConfig, SerializedEntry, SerializedToken, SerializedVocab,
    CATALOG_FILE, VOCAB_FILE,
};
use crate::catalog::TokenCatalog;
use crate::tokenizer::TokenizerConfig;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use wordpair_core::{Result, TokenizerError, WordVocab, END_OF_WORD};

/// Vocabulary saver - handles saving trained models.
pub struct VocabSaver<'a> {
    /// Vocabulary reference
    vocab: &'a WordVocab,
    /// Configuration reference
    config: &'a TokenizerConfig,
}

impl<'a> VocabSaver<'a> {
    /// Create a new vocabulary saver.
    pub fn new(vocab: &'a WordVocab, config: &'a TokenizerConfig) -> Self {
        Self { vocab, config }
    }

    /// Save the vocabulary to a directory as `vocab.json`.
    ///
    /// # Arguments
    /// * `path` - Directory path to save to
    pub fn save(&self, path: &Path) -> Result<()> {
        write_json(path, VOCAB_FILE, &self.serialize())?;
        log::info!(
            "Saved {} spellings to {}",
            self.vocab.len(),
            path.join(VOCAB_FILE).display()
        );
        Ok(())
    }

    /// Save the token catalog and its ids to a directory as `tokens.json`.
    pub fn save_catalog(&self, catalog: &TokenCatalog, path: &Path) -> Result<()> {
        write_json(path, CATALOG_FILE, &self.serialize_catalog(catalog))?;
        log::info!(
            "Saved {} tokens to {}",
            catalog.len(),
            path.join(CATALOG_FILE).display()
        );
        Ok(())
    }

    /// Serialize the vocabulary to a structure.
    fn serialize(&self) -> SerializedVocab {
        let entries = self
            .vocab
            .iter()
            .map(|(spelling, count)| SerializedEntry {
                spelling: spelling.to_string(),
                count,
            })
            .collect();

        let training = &self.config.training;
        SerializedVocab {
            version: env!("CARGO_PKG_VERSION").to_string(),
            end_of_word: END_OF_WORD.to_string(),
            config: SerializedConfig {
                iterations: training.iterations,
                vocab_size: training.vocab_size,
                min_frequency: training.min_frequency,
                unknown_token: self.config.unknown_token.clone(),
            },
            entries,
        }
    }

    /// Serialize a catalog; ids follow catalog order.
    fn serialize_catalog(&self, catalog: &TokenCatalog) -> SerializedCatalog {
        let tokens = catalog
            .entries()
            .iter()
            .enumerate()
            .map(|(id, entry)| SerializedToken {
                token: entry.token.to_string(),
                frequency: entry.frequency,
                id: id as u32,
            })
            .collect();

        SerializedCatalog {
            version: env!("CARGO_PKG_VERSION").to_string(),
            unknown_token: self.config.unknown_token.clone(),
            unknown_id: catalog.len() as u32,
            tokens,
        }
    }
}

/// Write `value` as pretty JSON to `dir/file_name`, creating `dir`.
fn write_json<T: Serialize>(dir: &Path, file_name: &str, value: &T) -> Result<()> {
    std::fs::create_dir_all(dir).map_err(|err| TokenizerError::Io {
        path: dir.to_path_buf(),
        err,
    })?;

    let file_path = dir.join(file_name);
    let file = File::create(&file_path).map_err(|err| TokenizerError::Io {
        path: file_path.clone(),
        err,
    })?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value).map_err(|e| {
        TokenizerError::Save(format!(
            "Failed to serialize {}: {}",
            file_path.display(),
            e
        ))
    })?;
    writer.flush().map_err(|err| TokenizerError::Io {
        path: file_path,
        err,
    })?;

    Ok(())
}

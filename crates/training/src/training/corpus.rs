//! Initial word vocabulary from a corpus.
//!
//! Every whitespace-delimited word becomes its characters followed by the
//! end-of-word marker; repeated words accumulate into one entry.

use std::io::BufRead;
use wordpair_core::{Result, TokenizerError, WordVocab};

/// Builds the initial word vocabulary from lines of text.
#[derive(Debug, Default)]
pub struct CorpusVocabularyBuilder {
    vocab: WordVocab,
    /// Lines consumed so far
    lines: usize,
}

impl CorpusVocabularyBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every word of one line.
    pub fn add_line(&mut self, line: &str) {
        for word in line.split_whitespace() {
            self.vocab.add_word(word);
        }
        self.lines += 1;
    }

    /// Count every word of a block of text, line by line.
    pub fn add_text(&mut self, text: &str) {
        for line in text.lines() {
            self.add_line(line);
        }
    }

    /// Stream lines from a UTF-8 reader.
    pub fn add_reader<R: BufRead>(&mut self, reader: R) -> Result<()> {
        for (line_num, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| {
                TokenizerError::Training(format!(
                    "Failed to read corpus line {}: {}",
                    self.lines + line_num + 1,
                    e
                ))
            })?;
            self.add_line(&line);
        }
        Ok(())
    }

    /// Number of lines consumed.
    pub fn line_count(&self) -> usize {
        self.lines
    }

    /// Finish and return the word vocabulary.
    pub fn build(self) -> WordVocab {
        log::debug!(
            "Built corpus vocabulary: {} lines, {} distinct words, {} occurrences",
            self.lines,
            self.vocab.len(),
            self.vocab.total_count()
        );
        self.vocab
    }
}

//! Format definitions for vocabulary serialization.
//!
//! This module defines the data structures written to and read from disk.
//! Entries are stored as a list so that their order survives the round trip.

use serde::{Deserialize, Serialize};

/// File name of the trained word vocabulary inside a model directory.
pub const VOCAB_FILE: &str = "vocab.json";

/// File name of the exported token catalog inside a model directory.
pub const CATALOG_FILE: &str = "tokens.json";

/// A single trained spelling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializedEntry {
    /// Space-separated symbols
    pub spelling: String,
    /// Occurrence count
    pub count: u64,
}

/// Configuration the vocabulary was trained with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializedConfig {
    pub iterations: usize,
    pub vocab_size: Option<usize>,
    pub min_frequency: u64,
    pub unknown_token: String,
}

/// Complete word vocabulary serialization format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerializedVocab {
    /// Format version
    pub version: String,
    /// End-of-word marker the spellings were built with
    pub end_of_word: String,
    /// Training configuration
    pub config: SerializedConfig,
    /// Spellings, count descending
    pub entries: Vec<SerializedEntry>,
}

/// A catalog token with its derived id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializedToken {
    pub token: String,
    pub frequency: u64,
    pub id: u32,
}

/// Token catalog export, in priority order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerializedCatalog {
    /// Format version
    pub version: String,
    pub unknown_token: String,
    pub unknown_id: u32,
    pub tokens: Vec<SerializedToken>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialization_preserves_order() {
        let data = SerializedVocab {
            version: "0.1.0".to_string(),
            end_of_word: "</w>".to_string(),
            config: SerializedConfig {
                iterations: 100,
                vocab_size: None,
                min_frequency: 2,
                unknown_token: "</u>".to_string(),
            },
            entries: vec![
                SerializedEntry {
                    spelling: "low</w>".to_string(),
                    count: 5,
                },
                SerializedEntry {
                    spelling: "n e w est</w>".to_string(),
                    count: 5,
                },
            ],
        };

        let json = serde_json::to_string(&data).unwrap();
        let deserialized: SerializedVocab = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.version, data.version);
        assert_eq!(deserialized.config, data.config);
        assert_eq!(deserialized.entries, data.entries);
    }

    #[test]
    fn test_unbounded_vocab_size_is_null() {
        let config = SerializedConfig {
            iterations: 1,
            vocab_size: None,
            min_frequency: 1,
            unknown_token: "</u>".to_string(),
        };
        let json = serde_json::to_value(&config).unwrap();
        assert!(json["vocab_size"].is_null());
    }
}

//! Error types for the wordpair tokenizer library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the tokenizer library.
///
/// Expected conditions such as an exhausted pair table or an unsegmentable
/// fragment are not errors; they are handled inside the trainer and segmenter.
#[derive(Error, Debug)]
pub enum TokenizerError {
    /// Error during training
    #[error("Training error: {0}")]
    Training(String),

    /// Error loading a trained vocabulary
    #[error("Load error: {0}")]
    Load(String),

    /// Error saving a trained vocabulary
    #[error("Save error: {0}")]
    Save(String),

    /// I/O error with file context
    #[error("I/O error for {path}: {err}")]
    Io {
        path: PathBuf,
        #[source]
        err: std::io::Error,
    },

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Unknown token ID
    #[error("Unknown token ID: {0}")]
    UnknownTokenId(u32),

    /// Token produced by segmentation that has no id
    #[error("Unknown token: {0}")]
    UnknownToken(String),

    /// A spelling that cannot be represented as a symbol sequence
    #[error("Invalid spelling: {0:?}")]
    InvalidSpelling(String),
}

/// Result type alias for tokenizer operations.
pub type Result<T> = std::result::Result<T, TokenizerError>;

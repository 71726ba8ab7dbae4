//! Serialization and deserialization of trained vocabularies.
//!
//! This module saves and loads the trained word vocabulary as JSON and
//! exports the derived token catalog.

pub mod format;
pub mod load;
pub mod save;

pub use format::{SerializedCatalog, SerializedVocab, CATALOG_FILE, VOCAB_FILE};
pub use load::VocabLoader;
pub use save::VocabSaver;

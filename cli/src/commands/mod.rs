//! CLI commands for the wordpair tokenizer.

pub mod benchmark;
pub mod encode;
pub mod train;

pub use benchmark::BenchmarkCommand;
pub use encode::EncodeCommand;
pub use train::TrainCommand;

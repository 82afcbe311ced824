use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Engine lifecycle while processing one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnginePhase {
    #[default]
    Idle,
    Setup,
    Running,
    Finished,
}

/// Which tokenizer drives the count.
///
/// Both strategies produce the same ordered word sequence for the same
/// input, for any chunk size of at least one byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenizerStrategy {
    /// Character-by-character forward scan.
    Scan,
    /// Fixed-size chunk reads with a dangling-fragment carry across
    /// chunk boundaries.
    Chunked { chunk_size: usize },
}

#[derive(Debug, Error)]
pub enum CountError {
    #[error("source file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("source file cannot be read: {}", .0.display())]
    AccessDenied(PathBuf),
    #[error("i/o failure while scanning: {0}")]
    Io(#[from] io::Error),
}

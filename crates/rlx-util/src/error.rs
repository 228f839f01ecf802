//! Error types shared across the util crate.

use thiserror::Error;

/// Errors raised while reading or indexing a source file.
#[derive(Debug, Error)]
pub enum UtilError {
    /// A requested line number does not exist in the file.
    #[error("line {line} out of bounds: file has {max_lines} lines")]
    LineOutOfBounds { line: usize, max_lines: usize },
}

pub type UtilResult<T> = std::result::Result<T, UtilError>;

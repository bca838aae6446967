use thiserror::Error;

/// Result type for buffer operations
pub type BufferResult<T> = Result<T, BufferError>;

/// Buffer error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// An access of `len` bytes at `index` crosses `bound`.
    #[error("Out of bounds: {len} byte(s) at index {index} exceed bound {bound}")]
    OutOfBounds { index: usize, len: usize, bound: usize },

    #[error("Invalid mark: reset called without a mark")]
    InvalidMark,

    #[error("No array: storage is not array-backed")]
    NoArray,

    #[error("Decode error: {0}")]
    Decode(String),
}

impl BufferError {
    pub(crate) fn out_of_bounds(index: usize, len: usize, bound: usize) -> Self {
        BufferError::OutOfBounds { index, len, bound }
    }
}

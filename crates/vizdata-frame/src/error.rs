//! Typed errors for frame construction and conversion.

use crate::column::DType;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FrameError {
    #[error("column '{column}' has length {actual}, expected {expected}")]
    LengthMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },

    #[error("duplicate column '{0}'")]
    DuplicateColumn(String),

    #[error("no column named '{0}'")]
    ColumnNotFound(String),

    #[error("column '{column}' has dtype {actual}, expected {expected}")]
    DTypeMismatch {
        column: String,
        expected: DType,
        actual: DType,
    },

    #[error("series has no name to key a mapping by")]
    UnnamedSeries,

    #[error(transparent)]
    Arrow(#[from] arrow::error::ArrowError),
}

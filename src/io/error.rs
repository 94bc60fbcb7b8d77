use std::path::PathBuf;

use thiserror::Error;

use crate::error::MatrixError;

/// Simplified `Result` using [`LoadError`] as error type
pub type Result<T> = std::result::Result<T, LoadError>;

/// Error variants from reading or writing the text matrix format
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// The input does not follow the `rows=`/`cols=`/`(r, c, v)` layout
    #[error("input file has wrong format: {reason}")]
    Format { line: Option<usize>, reason: String },
    #[error(transparent)]
    Matrix(#[from] MatrixError),
}

impl LoadError {
    pub(crate) fn format(line: Option<usize>, reason: impl Into<String>) -> Self {
        LoadError::Format {
            line,
            reason: reason.into(),
        }
    }
}

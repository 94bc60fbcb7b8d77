use thiserror::Error;

use crate::error::MatrixError;
use crate::io::LoadError;

/// Error variants from session configuration or an interactive run
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("invalid output path: the path must not be empty")]
    InvalidOutputPath,
    /// Reading the operator's input or writing the prompts failed
    #[error("terminal i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Matrix(#[from] MatrixError),
}

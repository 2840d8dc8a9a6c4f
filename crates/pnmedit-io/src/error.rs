//! I/O error types
//!
//! Provides a unified error type for PNM reading and writing so that
//! callers only need to handle one error type.

use thiserror::Error;

/// Error type for image I/O operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// Standard I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The magic number is not one of P1-P6, or the variant is disabled
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The header or payload is structurally invalid
    #[error("invalid image data: {0}")]
    InvalidData(String),

    /// An error from the core library (e.g. grid dimensions)
    #[error("core error: {0}")]
    Core(#[from] pnmedit_core::Error),
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;

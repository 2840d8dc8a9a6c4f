//! Error types for pnmedit-filter

use pnmedit_core::ColorModel;
use thiserror::Error;

/// Errors that can occur during filtering operations
#[derive(Debug, Error)]
pub enum FilterError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] pnmedit_core::Error),

    /// Invalid kernel
    #[error("invalid kernel: {0}")]
    InvalidKernel(String),

    /// Filter name not recognized
    #[error("unknown filter: {0}")]
    UnknownFilter(String),

    /// Filters only run on color images
    #[error("unsupported color model: expected color, got {0:?}")]
    UnsupportedModel(ColorModel),
}

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;

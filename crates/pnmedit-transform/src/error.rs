//! Error types for pnmedit-transform

use thiserror::Error;

/// Errors that can occur during geometric transformations
#[derive(Debug, Error)]
pub enum TransformError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] pnmedit_core::Error),

    /// Angle is not one of 0, 90, 180, 270, 360
    #[error("unsupported rotation angle: {0}")]
    UnsupportedAngle(u32),

    /// Partial selections must be square to rotate in place
    #[error("selection must be square, got {width}x{height}")]
    NonSquareSelection { width: u32, height: u32 },
}

/// Result type for transform operations
pub type TransformResult<T> = Result<T, TransformError>;

//! Error types for pnmedit-editor
//!
//! The `Display` of every variant is the exact status line the editor
//! prints for it.

use pnmedit_filter::FilterError;
use pnmedit_io::IoError;
use pnmedit_transform::TransformError;
use thiserror::Error;

/// Errors reported by editor commands
#[derive(Debug, Error)]
pub enum EditorError {
    /// Unknown keyword, wrong argument count or malformed argument
    #[error("Invalid command")]
    InvalidCommand,

    /// Command needs an image and none is loaded
    #[error("No image loaded")]
    NoImage,

    /// Reading the file failed; any previous image has been discarded
    #[error("Failed to load {path}")]
    LoadFailed {
        path: String,
        #[source]
        source: IoError,
    },

    /// Selection is negative, empty or outside the image
    #[error("Invalid set of coordinates")]
    InvalidCoordinates,

    #[error("Unsupported rotation angle")]
    UnsupportedAngle,

    /// Partial selections must be square to rotate
    #[error("The selection must be square")]
    NonSquareSelection,

    /// Filter name not recognized
    #[error("APPLY parameter invalid")]
    UnknownFilter,

    /// Filters only run on color images
    #[error("Easy, Charlie Chaplin")]
    NonColorImage,

    #[error("Failed to save {path}")]
    SaveFailed {
        path: String,
        #[source]
        source: IoError,
    },

    /// Invariant violation inside an operation
    #[error("Operation failed: {0}")]
    Core(#[from] pnmedit_core::Error),
}

impl From<TransformError> for EditorError {
    fn from(err: TransformError) -> Self {
        match err {
            TransformError::Core(e) => EditorError::Core(e),
            TransformError::UnsupportedAngle(_) => EditorError::UnsupportedAngle,
            TransformError::NonSquareSelection { .. } => EditorError::NonSquareSelection,
        }
    }
}

impl From<FilterError> for EditorError {
    fn from(err: FilterError) -> Self {
        match err {
            FilterError::Core(e) => EditorError::Core(e),
            FilterError::UnknownFilter(_) => EditorError::UnknownFilter,
            FilterError::UnsupportedModel(_) => EditorError::NonColorImage,
            FilterError::InvalidKernel(msg) => {
                EditorError::Core(pnmedit_core::Error::InvalidParameter(msg))
            }
        }
    }
}

/// Result type for editor commands
pub type EditorResult<T> = Result<T, EditorError>;

//! Error types for pnmedit-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

/// pnmedit core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid grid or image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Coordinates outside the grid
    #[error("coordinates ({x}, {y}) out of bounds for {width}x{height}")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Selection with zero width or height
    #[error("empty selection: ({x1}, {y1}) - ({x2}, {y2})")]
    EmptySelection { x1: u32, y1: u32, x2: u32, y2: u32 },

    /// Selection does not fit inside the image
    #[error("selection ({x1}, {y1}) - ({x2}, {y2}) exceeds {width}x{height}")]
    SelectionOutOfBounds {
        x1: u32,
        y1: u32,
        x2: u32,
        y2: u32,
        width: u32,
        height: u32,
    },

    /// Grid sizes that should agree do not
    #[error("dimension mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// Channel layout does not match the color model
    #[error("channel layout does not match color model {0}")]
    ChannelMismatch(&'static str),

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;

//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur during regression testing
#[derive(Debug, Error)]
pub enum TestError {
    /// Failed to build a fixture image
    #[error("failed to build fixture '{name}': {message}")]
    Fixture { name: String, message: String },

    /// Failed to write an output file
    #[error("failed to write '{path}': {message}")]
    Write { path: String, message: String },
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;

//! pnmedit-filter - Image filtering operations
//!
//! This crate provides the 3x3 convolution filters of the editor:
//!
//! - Edge detection (`EDGE`)
//! - Sharpening (`SHARPEN`)
//! - Box blur (`BLUR`)
//! - Gaussian blur (`GAUSSIAN_BLUR`)
//!
//! Filters run on the selection of color images only.

pub mod convolve;
mod error;
pub mod kernel;

pub use convolve::{apply_filter, convolve_image, convolve_window, filter_region};
pub use error::{FilterError, FilterResult};
pub use kernel::{FilterKind, Kernel};

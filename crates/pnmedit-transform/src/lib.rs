//! pnmedit-transform - Geometric transformations
//!
//! This crate provides the selection-scoped geometric operations:
//!
//! - Orthogonal rotation (0, 90, 180, 270, 360 degrees) of the whole image
//!   or, in place, of a square selection
//! - Cropping to the selection

pub mod crop;
mod error;
pub mod rotate;

pub use crop::crop;
pub use error::{TransformError, TransformResult};
pub use rotate::{Direction, Rotation, rotate, rotate_selection, rotate_whole};

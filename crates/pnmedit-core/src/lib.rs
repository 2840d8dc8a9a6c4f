//! pnmedit Core - Basic data structures for PNM image editing
//!
//! This crate provides the data structures shared by every pnmedit crate:
//!
//! - [`PixelGrid`] - One channel of real-valued samples, with copy-based
//!   and in-place orthogonal rotation and window extraction
//! - [`Image`] / [`Channels`] - An editable image and its channel grids
//! - [`Selection`] - The active rectangle of an image
//! - [`ColorModel`] / [`FormatVariant`] - PNM header attributes

pub mod error;
pub mod grid;
pub mod image;
pub mod selection;

pub use error::{Error, Result};
pub use grid::PixelGrid;
pub use image::{Channels, ColorModel, FormatVariant, Image};
pub use selection::Selection;

//! pnmedit - PNM image editing for Rust
//!
//! Loads the six PNM formats (P1-P6), edits a rectangular selection and
//! saves the result as text or binary PNM.
//!
//! # Overview
//!
//! - Image I/O for PBM, PGM and PPM, text and binary
//! - Selection-scoped rotation by multiples of 90 degrees
//! - Cropping to the selection
//! - 3x3 convolution filters on color images
//! - A line-oriented command interpreter
//!
//! # Example
//!
//! ```
//! use pnmedit::{FormatVariant, Selection};
//! use pnmedit::transform::{Rotation, rotate};
//!
//! let data = b"P2\n3 3\n255\n0 1 2\n3 4 5\n6 7 8\n";
//! let mut image = pnmedit::io::read_image_mem(data).unwrap();
//! image.set_selection(Selection::new(0, 0, 2, 2).unwrap()).unwrap();
//! rotate(&mut image, Rotation::from_quads(2)).unwrap();
//!
//! let out = pnmedit::io::write_image_mem(&image, FormatVariant::Text).unwrap();
//! assert_eq!(out, b"P2\n3 3\n255\n4 3 2 \n1 0 5 \n6 7 8 \n");
//! ```

// Re-export core types (primary data structures used everywhere)
pub use pnmedit_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use pnmedit_editor as editor;
pub use pnmedit_filter as filter;
pub use pnmedit_io as io;
pub use pnmedit_transform as transform;

//! PixelGrid - One channel of samples
//!
//! `PixelGrid` is a 2D array of `f64` samples. An image holds one grid for
//! bilevel and grayscale data and three grids (red, green, blue) for color.
//! Samples stay real-valued while the image is edited and are rounded only
//! when written back to a file.
//!
//! # Memory Layout
//!
//! Data is stored in row-major order with no padding. The sample at (x, y)
//! is at index `y * width + x`.
//!
//! # Examples
//!
//! ```
//! use pnmedit_core::PixelGrid;
//!
//! let mut grid = PixelGrid::new(4, 3).unwrap();
//! grid.set_pixel(1, 2, 200.0).unwrap();
//! assert_eq!(grid.get_pixel(1, 2), Some(200.0));
//! ```

mod clip;
mod rotate;

use crate::error::{Error, Result};

/// A single channel of real-valued samples
#[derive(Debug, Clone, PartialEq)]
pub struct PixelGrid {
    /// Width in samples
    width: u32,
    /// Height in samples
    height: u32,
    /// Sample data (row-major, no padding)
    data: Vec<f64>,
}

impl PixelGrid {
    /// Create a new grid with all samples set to zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0, or if
    /// the sample count does not fit in memory addressing.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::new_with_value(width, height, 0.0)
    }

    /// Create a new grid with every sample set to `value`.
    pub fn new_with_value(width: u32, height: u32, value: f64) -> Result<Self> {
        let size = Self::sample_count(width, height)?;
        Ok(PixelGrid {
            width,
            height,
            data: vec![value; size],
        })
    }

    /// Create a grid from row-major sample data.
    ///
    /// # Errors
    ///
    /// Returns an error if dimensions are invalid or the data length
    /// doesn't match `width * height`.
    pub fn from_data(width: u32, height: u32, data: Vec<f64>) -> Result<Self> {
        let expected = Self::sample_count(width, height)?;
        if data.len() != expected {
            return Err(Error::InvalidParameter(format!(
                "data length {} doesn't match {}x{} = {}",
                data.len(),
                width,
                height,
                expected
            )));
        }
        Ok(PixelGrid {
            width,
            height,
            data,
        })
    }

    fn sample_count(width: u32, height: u32) -> Result<usize> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        (width as usize)
            .checked_mul(height as usize)
            .ok_or(Error::InvalidDimension { width, height })
    }

    /// Get the grid width in samples
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the grid height in samples
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the grid dimensions as (width, height)
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get a sample at (x, y), or `None` if out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<f64> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[self.index(x, y)])
    }

    /// Set a sample at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the coordinates are outside the grid.
    pub fn set_pixel(&mut self, x: u32, y: u32, value: f64) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        let idx = self.index(x, y);
        self.data[idx] = value;
        Ok(())
    }

    /// Get a sample without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the computed index is outside the data buffer.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> f64 {
        self.data[self.index(x, y)]
    }

    /// Set a sample without bounds checking.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, value: f64) {
        let idx = self.index(x, y);
        self.data[idx] = value;
    }

    /// Swap the samples at (x1, y1) and (x2, y2).
    #[inline]
    fn swap_unchecked(&mut self, x1: u32, y1: u32, x2: u32, y2: u32) {
        let a = self.index(x1, y1);
        let b = self.index(x2, y2);
        self.data.swap(a, b);
    }

    /// Get the raw sample data
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Get mutable access to the raw sample data
    pub fn data_mut(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Get one row of samples.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row(&self, y: u32) -> &[f64] {
        assert!(y < self.height, "row {} out of bounds", y);
        let start = y as usize * self.width as usize;
        &self.data[start..start + self.width as usize]
    }

    /// Get one row of samples mutably.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row_mut(&mut self, y: u32) -> &mut [f64] {
        assert!(y < self.height, "row {} out of bounds", y);
        let start = y as usize * self.width as usize;
        let width = self.width as usize;
        &mut self.data[start..start + width]
    }

    /// Iterate over rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks_exact(self.width as usize)
    }

    /// Clamp every sample into `[0, max_value]`.
    pub fn clamp_to(&mut self, max_value: f64) {
        for v in &mut self.data {
            *v = v.clamp(0.0, max_value);
        }
    }
}

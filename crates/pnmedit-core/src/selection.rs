//! Selection - The active rectangle of an image
//!
//! Corners are stored as half-open bounds `[x1, x2) x [y1, y2)`. A
//! selection is always normalized (`x1 < x2`, `y1 < y2`) and never empty.

use crate::error::{Error, Result};
use std::fmt;

/// A normalized, non-empty rectangle in image coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Selection {
    x1: u32,
    y1: u32,
    x2: u32,
    y2: u32,
}

impl Selection {
    /// Create a selection from two corners in any order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptySelection`] if the rectangle has zero width
    /// or height.
    pub fn new(x1: u32, y1: u32, x2: u32, y2: u32) -> Result<Self> {
        let (x1, x2) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };
        let (y1, y2) = if y1 <= y2 { (y1, y2) } else { (y2, y1) };
        if x1 == x2 || y1 == y2 {
            return Err(Error::EmptySelection { x1, y1, x2, y2 });
        }
        Ok(Self { x1, y1, x2, y2 })
    }

    /// Selection covering a whole `width` x `height` image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either dimension is 0.
    pub fn full(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(Self {
            x1: 0,
            y1: 0,
            x2: width,
            y2: height,
        })
    }

    #[inline]
    pub fn x1(&self) -> u32 {
        self.x1
    }

    #[inline]
    pub fn y1(&self) -> u32 {
        self.y1
    }

    #[inline]
    pub fn x2(&self) -> u32 {
        self.x2
    }

    #[inline]
    pub fn y2(&self) -> u32 {
        self.y2
    }

    /// Corners as `(x1, y1, x2, y2)`
    #[inline]
    pub fn corners(&self) -> (u32, u32, u32, u32) {
        (self.x1, self.y1, self.x2, self.y2)
    }

    /// Width of the selection
    #[inline]
    pub fn width(&self) -> u32 {
        self.x2 - self.x1
    }

    /// Height of the selection
    #[inline]
    pub fn height(&self) -> u32 {
        self.y2 - self.y1
    }

    /// Check if width equals height
    #[inline]
    pub fn is_square(&self) -> bool {
        self.width() == self.height()
    }

    /// Check if the selection lies within a `width` x `height` image
    pub fn fits(&self, width: u32, height: u32) -> bool {
        self.x2 <= width && self.y2 <= height
    }

    /// Check if the selection covers a whole `width` x `height` image
    pub fn covers(&self, width: u32, height: u32) -> bool {
        self.x1 == 0 && self.y1 == 0 && self.x2 == width && self.y2 == height
    }

    /// The same rectangle with x and y axes exchanged
    pub fn transposed(&self) -> Selection {
        Selection {
            x1: self.y1,
            y1: self.x1,
            x2: self.y2,
            y2: self.x2,
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.x1, self.y1, self.x2, self.y2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_normalizes_corners() {
        let s = Selection::new(5, 7, 1, 2).unwrap();
        assert_eq!(s.corners(), (1, 2, 5, 7));
        assert_eq!(s.width(), 4);
        assert_eq!(s.height(), 5);
        assert!(!s.is_square());
    }

    #[test]
    fn test_selection_rejects_empty() {
        assert!(matches!(
            Selection::new(3, 0, 3, 4),
            Err(Error::EmptySelection { .. })
        ));
        assert!(Selection::new(0, 2, 4, 2).is_err());
        assert!(Selection::full(0, 5).is_err());
    }

    #[test]
    fn test_selection_bounds() {
        let s = Selection::new(1, 1, 3, 3).unwrap();
        assert!(s.fits(3, 3));
        assert!(!s.fits(2, 3));
        assert!(!s.covers(3, 3));
        assert!(Selection::full(3, 3).unwrap().covers(3, 3));
    }

    #[test]
    fn test_selection_transposed() {
        let s = Selection::new(4, 1, 6, 3).unwrap();
        let t = s.transposed();
        assert_eq!(t.corners(), (1, 4, 3, 6));
        assert_eq!(t.transposed(), s);
        assert_eq!(s.to_string(), "4 1 6 3");
    }
}

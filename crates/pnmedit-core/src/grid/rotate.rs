//! Orthogonal rotation of grids
//!
//! Two families of clockwise rotation:
//!
//! - Copy-based (`rotate_90`, `rotate_180`, `rotate_270`) produce a new grid.
//!   90 and 270 swap width and height.
//! - In-place (`rotate_*_in_place`) rotate a square window of the grid
//!   without reallocating. 90 is transpose followed by row reversal, 270 is
//!   row reversal followed by transpose, 180 is a point reflection.

use super::PixelGrid;
use crate::error::{Error, Result};

impl PixelGrid {
    /// Copy the grid rotated 90 degrees clockwise.
    pub fn rotate_90(&self) -> Result<PixelGrid> {
        let (w, h) = self.dimensions();
        let mut out = PixelGrid::new(h, w)?;
        for y in 0..h {
            for x in 0..w {
                out.set_pixel_unchecked(h - 1 - y, x, self.get_pixel_unchecked(x, y));
            }
        }
        Ok(out)
    }

    /// Copy the grid rotated 180 degrees.
    pub fn rotate_180(&self) -> Result<PixelGrid> {
        let (w, h) = self.dimensions();
        let mut out = PixelGrid::new(w, h)?;
        for y in 0..h {
            for x in 0..w {
                out.set_pixel_unchecked(w - 1 - x, h - 1 - y, self.get_pixel_unchecked(x, y));
            }
        }
        Ok(out)
    }

    /// Copy the grid rotated 270 degrees clockwise (90 counterclockwise).
    pub fn rotate_270(&self) -> Result<PixelGrid> {
        let (w, h) = self.dimensions();
        let mut out = PixelGrid::new(h, w)?;
        for y in 0..h {
            for x in 0..w {
                out.set_pixel_unchecked(y, w - 1 - x, self.get_pixel_unchecked(x, y));
            }
        }
        Ok(out)
    }

    /// Copy the grid rotated by `quads` clockwise quarter turns.
    pub fn rotate_orth(&self, quads: u32) -> Result<PixelGrid> {
        match quads % 4 {
            0 => Ok(self.clone()),
            1 => self.rotate_90(),
            2 => self.rotate_180(),
            3 => self.rotate_270(),
            _ => unreachable!(),
        }
    }

    /// Rotate the square window at (`x0`, `y0`) with side `side` 90 degrees
    /// clockwise in place.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the window does not fit the grid,
    /// [`Error::InvalidParameter`] if `side` is 0.
    pub fn rotate_90_in_place(&mut self, x0: u32, y0: u32, side: u32) -> Result<()> {
        self.check_window(x0, y0, side)?;
        self.transpose_window(x0, y0, side);
        self.reverse_window_rows(x0, y0, side);
        Ok(())
    }

    /// Rotate a square window 180 degrees in place.
    pub fn rotate_180_in_place(&mut self, x0: u32, y0: u32, side: u32) -> Result<()> {
        self.check_window(x0, y0, side)?;

        let total = side as u64 * side as u64;
        for i in 0..total / 2 {
            let x = (i % side as u64) as u32;
            let y = (i / side as u64) as u32;
            self.swap_unchecked(
                x0 + x,
                y0 + y,
                x0 + side - 1 - x,
                y0 + side - 1 - y,
            );
        }
        Ok(())
    }

    /// Rotate a square window 270 degrees clockwise in place.
    pub fn rotate_270_in_place(&mut self, x0: u32, y0: u32, side: u32) -> Result<()> {
        self.check_window(x0, y0, side)?;
        self.reverse_window_rows(x0, y0, side);
        self.transpose_window(x0, y0, side);
        Ok(())
    }

    /// Rotate a square window by `quads` clockwise quarter turns in place.
    pub fn rotate_orth_in_place(&mut self, x0: u32, y0: u32, side: u32, quads: u32) -> Result<()> {
        match quads % 4 {
            0 => self.check_window(x0, y0, side),
            1 => self.rotate_90_in_place(x0, y0, side),
            2 => self.rotate_180_in_place(x0, y0, side),
            3 => self.rotate_270_in_place(x0, y0, side),
            _ => unreachable!(),
        }
    }

    fn check_window(&self, x0: u32, y0: u32, side: u32) -> Result<()> {
        if side == 0 {
            return Err(Error::InvalidParameter(
                "rotation window side must be positive".to_string(),
            ));
        }
        let right = x0 as u64 + side as u64;
        let bottom = y0 as u64 + side as u64;
        if right > self.width() as u64 || bottom > self.height() as u64 {
            return Err(Error::OutOfBounds {
                x: x0.saturating_add(side),
                y: y0.saturating_add(side),
                width: self.width(),
                height: self.height(),
            });
        }
        Ok(())
    }

    fn transpose_window(&mut self, x0: u32, y0: u32, side: u32) {
        for i in 0..side {
            for j in (i + 1)..side {
                self.swap_unchecked(x0 + j, y0 + i, x0 + i, y0 + j);
            }
        }
    }

    fn reverse_window_rows(&mut self, x0: u32, y0: u32, side: u32) {
        for i in 0..side {
            for j in 0..side / 2 {
                self.swap_unchecked(x0 + j, y0 + i, x0 + side - 1 - j, y0 + i);
            }
        }
    }
}

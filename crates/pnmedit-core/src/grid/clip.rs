//! Rectangle extraction from grids

use super::PixelGrid;
use crate::error::{Error, Result};

impl PixelGrid {
    /// Extract the window `[x1, x2) x [y1, y2)` into a new grid.
    ///
    /// The result is `(x2 - x1)` wide and `(y2 - y1)` tall. The source is
    /// left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptySelection`] if the window has zero area and
    /// [`Error::SelectionOutOfBounds`] if it extends past the grid.
    pub fn crop_subgrid(&self, x1: u32, y1: u32, x2: u32, y2: u32) -> Result<PixelGrid> {
        if x2 <= x1 || y2 <= y1 {
            return Err(Error::EmptySelection { x1, y1, x2, y2 });
        }
        if x2 > self.width() || y2 > self.height() {
            return Err(Error::SelectionOutOfBounds {
                x1,
                y1,
                x2,
                y2,
                width: self.width(),
                height: self.height(),
            });
        }

        let w = x2 - x1;
        let mut data = Vec::with_capacity(w as usize * (y2 - y1) as usize);
        for y in y1..y2 {
            data.extend_from_slice(&self.row(y)[x1 as usize..x2 as usize]);
        }
        PixelGrid::from_data(w, y2 - y1, data)
    }
}

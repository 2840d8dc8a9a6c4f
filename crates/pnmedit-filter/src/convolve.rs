//! Convolution operations
//!
//! Each channel is convolved against an untouched copy of itself, so
//! every output sample sees its neighbors' original values.
//!
//! The 3x3 window never reaches past the image: the outermost row and
//! column of the image are never written, whatever the selection. A
//! selection touching an image edge is pulled in by one sample on that
//! side.

use crate::kernel::{KERNEL_SIZE, Kernel};
use crate::{FilterError, FilterKind, FilterResult};
use pnmedit_core::{ColorModel, Image, PixelGrid, Selection};
use tracing::debug;

/// Samples are clamped to this range after convolution
const SAMPLE_MAX: f64 = 255.0;

/// Region of a `width` x `height` image that a filter over `selection`
/// writes, as half-open corners `(x1, y1, x2, y2)`.
///
/// Returns `None` when nothing is left, e.g. for images narrower or
/// shorter than three samples.
pub fn filter_region(
    selection: Selection,
    width: u32,
    height: u32,
) -> Option<(u32, u32, u32, u32)> {
    let x1 = selection.x1().max(1);
    let y1 = selection.y1().max(1);
    let x2 = selection.x2().min(width.saturating_sub(1));
    let y2 = selection.y2().min(height.saturating_sub(1));
    if x1 >= x2 || y1 >= y2 {
        return None;
    }
    Some((x1, y1, x2, y2))
}

/// Convolve the window `[x1, x2) x [y1, y2)` of a grid in place.
///
/// Output samples are `clamp(round(sum), 0, 255)`.
///
/// # Errors
///
/// Returns [`pnmedit_core::Error::OutOfBounds`] if the window reaches the
/// outermost row or column of the grid, where the kernel would read
/// outside it.
pub fn convolve_window(
    grid: &mut PixelGrid,
    kernel: &Kernel,
    (x1, y1, x2, y2): (u32, u32, u32, u32),
) -> FilterResult<()> {
    let (w, h) = grid.dimensions();
    if x1 == 0 || y1 == 0 || x2 >= w || y2 >= h {
        return Err(pnmedit_core::Error::OutOfBounds {
            x: x2,
            y: y2,
            width: w,
            height: h,
        }
        .into());
    }

    let source = grid.clone();
    for y in y1..y2 {
        for x in x1..x2 {
            let mut sum = 0.0;
            for ky in 0..KERNEL_SIZE {
                for kx in 0..KERNEL_SIZE {
                    let weight = kernel.data()[(ky * KERNEL_SIZE + kx) as usize];
                    sum += weight * source.get_pixel_unchecked(x + kx - 1, y + ky - 1);
                }
            }
            grid.set_pixel_unchecked(x, y, sum.round().clamp(0.0, SAMPLE_MAX));
        }
    }
    Ok(())
}

/// Convolve every channel of a color image over its selection.
///
/// # Errors
///
/// Returns [`FilterError::UnsupportedModel`] for bilevel and grayscale
/// images; the image is left unchanged.
pub fn convolve_image(image: &mut Image, kernel: &Kernel) -> FilterResult<()> {
    let model = image.color_model();
    if model != ColorModel::Color {
        return Err(FilterError::UnsupportedModel(model));
    }

    let Some(region) = filter_region(image.selection(), image.width(), image.height()) else {
        return Ok(());
    };
    for grid in image.channels_mut().grids_mut() {
        convolve_window(grid, kernel, region)?;
    }
    Ok(())
}

/// Apply a named filter to the selection of a color image.
pub fn apply_filter(image: &mut Image, kind: FilterKind) -> FilterResult<()> {
    convolve_image(image, &kind.kernel())?;
    debug!(filter = kind.name(), selection = %image.selection(), "applied filter");
    Ok(())
}

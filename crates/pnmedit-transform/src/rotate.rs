//! Rotation operations
//!
//! Rotation applies to the image's selection:
//!
//! - When the selection covers the whole image, every channel is rotated
//!   into a new grid. 90 and 270 degree turns swap width and height and the
//!   selection is reset to the new full extent.
//! - Otherwise the selection must be square. Its window is rotated in
//!   place and, for 90 and 270 degree turns, the selection's own x and y
//!   coordinates are exchanged.

use crate::{TransformError, TransformResult};
use pnmedit_core::Image;
use tracing::debug;

/// Sign of a rotation request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// `+angle`
    #[default]
    Clockwise,
    /// `-angle`
    CounterClockwise,
}

/// A normalized orthogonal rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotation {
    /// Number of clockwise quarter turns (0-3)
    quads: u32,
}

impl Rotation {
    /// Normalize a signed angle into clockwise quarter turns.
    ///
    /// `+90` and `-270` are one turn, `+270` and `-90` are three, 180 is
    /// two in either direction, 0 and 360 are none.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::UnsupportedAngle`] unless `degrees` is
    /// 0, 90, 180, 270 or 360.
    pub fn new(direction: Direction, degrees: u32) -> TransformResult<Self> {
        if !matches!(degrees, 0 | 90 | 180 | 270 | 360) {
            return Err(TransformError::UnsupportedAngle(degrees));
        }
        let cw = (degrees / 90) % 4;
        let quads = match direction {
            Direction::Clockwise => cw,
            Direction::CounterClockwise => (4 - cw) % 4,
        };
        Ok(Self { quads })
    }

    /// Rotation by `quads` clockwise quarter turns
    pub fn from_quads(quads: u32) -> Self {
        Self { quads: quads % 4 }
    }

    /// Clockwise quarter turns (0-3)
    #[inline]
    pub fn quads(&self) -> u32 {
        self.quads
    }

    /// Check if the rotation leaves the image unchanged
    #[inline]
    pub fn is_identity(&self) -> bool {
        self.quads == 0
    }

    /// Check if the rotation exchanges the x and y axes
    #[inline]
    pub fn swaps_axes(&self) -> bool {
        self.quads % 2 == 1
    }

    /// The rotation that undoes this one
    pub fn inverse(&self) -> Rotation {
        Rotation::from_quads(4 - self.quads)
    }
}

/// Rotate the image's selection.
///
/// Dispatches to [`rotate_whole`] when the whole image is selected and to
/// [`rotate_selection`] otherwise.
pub fn rotate(image: &mut Image, rotation: Rotation) -> TransformResult<()> {
    if image.is_fully_selected() {
        rotate_whole(image, rotation)
    } else {
        rotate_selection(image, rotation)
    }
}

/// Rotate every channel of the whole image into new grids.
///
/// The selection is reset to the new full extent.
pub fn rotate_whole(image: &mut Image, rotation: Rotation) -> TransformResult<()> {
    if rotation.is_identity() {
        return Ok(());
    }

    let quads = rotation.quads();
    let channels = image.channels().try_map(|grid| grid.rotate_orth(quads))?;
    image.replace_channels(channels)?;

    debug!(
        quads,
        width = image.width(),
        height = image.height(),
        "rotated whole image"
    );
    Ok(())
}

/// Rotate the square selection of the image in place.
///
/// # Errors
///
/// Returns [`TransformError::NonSquareSelection`] if the selection is not
/// square; the image is left unchanged. This check comes before the angle
/// is considered, so identity rotations are rejected too.
pub fn rotate_selection(image: &mut Image, rotation: Rotation) -> TransformResult<()> {
    let selection = image.selection();
    if !selection.is_square() {
        return Err(TransformError::NonSquareSelection {
            width: selection.width(),
            height: selection.height(),
        });
    }
    if rotation.is_identity() {
        return Ok(());
    }

    let (x0, y0, side) = (selection.x1(), selection.y1(), selection.width());
    let quads = rotation.quads();
    image
        .channels_mut()
        .try_for_each_mut(|grid| grid.rotate_orth_in_place(x0, y0, side, quads))?;

    if rotation.swaps_axes() {
        let transposed = selection.transposed();
        if transposed.fits(image.width(), image.height()) {
            image.set_selection(transposed)?;
        }
    }

    debug!(quads, selection = %image.selection(), "rotated selection in place");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_normalization() {
        let cw = Direction::Clockwise;
        let ccw = Direction::CounterClockwise;
        assert_eq!(Rotation::new(cw, 90).unwrap().quads(), 1);
        assert_eq!(Rotation::new(ccw, 270).unwrap().quads(), 1);
        assert_eq!(Rotation::new(cw, 270).unwrap().quads(), 3);
        assert_eq!(Rotation::new(ccw, 90).unwrap().quads(), 3);
        assert_eq!(Rotation::new(cw, 180).unwrap().quads(), 2);
        assert_eq!(Rotation::new(ccw, 180).unwrap().quads(), 2);
        for d in [cw, ccw] {
            assert!(Rotation::new(d, 0).unwrap().is_identity());
            assert!(Rotation::new(d, 360).unwrap().is_identity());
        }
    }

    #[test]
    fn test_rotation_rejects_other_angles() {
        for degrees in [45, 91, 450, 720] {
            assert!(matches!(
                Rotation::new(Direction::Clockwise, degrees),
                Err(TransformError::UnsupportedAngle(d)) if d == degrees
            ));
        }
    }

    #[test]
    fn test_rotation_inverse() {
        for q in 0..4 {
            let r = Rotation::from_quads(q);
            assert_eq!((r.quads() + r.inverse().quads()) % 4, 0);
        }
        assert!(Rotation::from_quads(1).swaps_axes());
        assert!(!Rotation::from_quads(2).swaps_axes());
    }
}

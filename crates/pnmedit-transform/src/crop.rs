//! Cropping to the selection

use crate::TransformResult;
use pnmedit_core::Image;
use tracing::debug;

/// Crop the image to its selection.
///
/// Every channel is cut down to the selected window, the image adopts the
/// window's dimensions and the selection is reset to the new full extent.
///
/// # Returns
///
/// `true` if the image was cut, `false` if the selection already covered
/// the whole image and nothing was done.
pub fn crop(image: &mut Image) -> TransformResult<bool> {
    if image.is_fully_selected() {
        return Ok(false);
    }

    let (x1, y1, x2, y2) = image.selection().corners();
    let channels = image
        .channels()
        .try_map(|grid| grid.crop_subgrid(x1, y1, x2, y2))?;
    image.replace_channels(channels)?;

    debug!(
        width = image.width(),
        height = image.height(),
        "cropped to selection"
    );
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pnmedit_core::{Channels, ColorModel, FormatVariant, PixelGrid, Selection};

    fn ramp(width: u32, height: u32) -> Image {
        let data = (0..width * height).map(|v| v as f64).collect();
        let grid = PixelGrid::from_data(width, height, data).unwrap();
        Image::new(
            FormatVariant::Binary,
            ColorModel::Grayscale,
            255,
            Channels::Single(grid),
        )
        .unwrap()
    }

    #[test]
    fn test_crop_full_selection_is_noop() {
        let mut image = ramp(3, 3);
        let before = image.clone();
        assert!(!crop(&mut image).unwrap());
        assert_eq!(image, before);
    }

    #[test]
    fn test_crop_window() {
        let mut image = ramp(4, 3);
        image.set_selection(Selection::new(1, 1, 3, 3).unwrap()).unwrap();
        assert!(crop(&mut image).unwrap());
        assert_eq!(image.dimensions(), (2, 2));
        assert!(image.is_fully_selected());
        match image.channels() {
            Channels::Single(grid) => assert_eq!(grid.data(), &[5.0, 6.0, 9.0, 10.0]),
            other => panic!("unexpected channels: {:?}", other),
        }
    }
}

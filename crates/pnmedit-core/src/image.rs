//! Image - Channels, header attributes and selection
//!
//! An [`Image`] owns its channel grids and its current [`Selection`].
//! Bilevel and grayscale images hold a single grid; color images hold one
//! grid per RGB channel.

use crate::error::{Error, Result};
use crate::grid::PixelGrid;
use crate::selection::Selection;

/// Sample interpretation of an image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorModel {
    /// Black and white, max value 1
    Bilevel,
    /// Single-channel gray levels
    Grayscale,
    /// Three channels: red, green, blue
    Color,
}

impl ColorModel {
    /// Number of channels an image of this model carries
    pub fn channel_count(self) -> usize {
        match self {
            ColorModel::Bilevel | ColorModel::Grayscale => 1,
            ColorModel::Color => 3,
        }
    }

    /// Human-readable name
    pub fn name(self) -> &'static str {
        match self {
            ColorModel::Bilevel => "bilevel",
            ColorModel::Grayscale => "grayscale",
            ColorModel::Color => "color",
        }
    }
}

/// Payload encoding of a PNM file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FormatVariant {
    /// Whitespace-separated decimal samples (P1/P2/P3)
    Text,
    /// One byte per sample (P4/P5/P6)
    #[default]
    Binary,
}

/// Channel grids of an image
#[derive(Debug, Clone, PartialEq)]
pub enum Channels {
    /// One grid (bilevel or grayscale)
    Single(PixelGrid),
    /// Red, green and blue grids of equal size
    Rgb {
        red: PixelGrid,
        green: PixelGrid,
        blue: PixelGrid,
    },
}

impl Channels {
    /// Dimensions shared by every channel, as (width, height).
    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            Channels::Single(grid) => grid.dimensions(),
            Channels::Rgb { red, .. } => red.dimensions(),
        }
    }

    /// Borrow every grid, red first for color.
    pub fn grids(&self) -> Vec<&PixelGrid> {
        match self {
            Channels::Single(grid) => vec![grid],
            Channels::Rgb { red, green, blue } => vec![red, green, blue],
        }
    }

    /// Mutably borrow every grid, red first for color.
    pub fn grids_mut(&mut self) -> Vec<&mut PixelGrid> {
        match self {
            Channels::Single(grid) => vec![grid],
            Channels::Rgb { red, green, blue } => vec![red, green, blue],
        }
    }

    /// Build new channels by applying `f` to every grid.
    ///
    /// The first error aborts the whole operation; `self` is not modified.
    pub fn try_map<F>(&self, mut f: F) -> Result<Channels>
    where
        F: FnMut(&PixelGrid) -> Result<PixelGrid>,
    {
        Ok(match self {
            Channels::Single(grid) => Channels::Single(f(grid)?),
            Channels::Rgb { red, green, blue } => Channels::Rgb {
                red: f(red)?,
                green: f(green)?,
                blue: f(blue)?,
            },
        })
    }

    /// Apply `f` to every grid in place.
    pub fn try_for_each_mut<F>(&mut self, mut f: F) -> Result<()>
    where
        F: FnMut(&mut PixelGrid) -> Result<()>,
    {
        for grid in self.grids_mut() {
            f(grid)?;
        }
        Ok(())
    }

    fn matches(&self, model: ColorModel) -> bool {
        matches!(
            (self, model),
            (Channels::Single(_), ColorModel::Bilevel | ColorModel::Grayscale)
                | (Channels::Rgb { .. }, ColorModel::Color)
        )
    }

    fn check_uniform(&self) -> Result<()> {
        if let Channels::Rgb { red, green, blue } = self {
            for other in [green, blue] {
                if other.dimensions() != red.dimensions() {
                    return Err(Error::DimensionMismatch {
                        expected: red.dimensions(),
                        actual: other.dimensions(),
                    });
                }
            }
        }
        Ok(())
    }
}

/// An editable PNM image
///
/// # Examples
///
/// ```
/// use pnmedit_core::{Channels, ColorModel, FormatVariant, Image, PixelGrid};
///
/// let grid = PixelGrid::new(4, 3).unwrap();
/// let image = Image::new(
///     FormatVariant::Binary,
///     ColorModel::Grayscale,
///     255,
///     Channels::Single(grid),
/// )
/// .unwrap();
/// assert_eq!(image.width(), 4);
/// assert!(image.is_fully_selected());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    variant: FormatVariant,
    model: ColorModel,
    width: u32,
    height: u32,
    max_value: u32,
    channels: Channels,
    selection: Selection,
}

impl Image {
    /// Create an image with the whole extent selected.
    ///
    /// Bilevel images always carry a max value of 1 regardless of
    /// `max_value`.
    ///
    /// # Errors
    ///
    /// - [`Error::ChannelMismatch`] if the channel layout does not match
    ///   `model`
    /// - [`Error::DimensionMismatch`] if color grids differ in size
    /// - [`Error::InvalidParameter`] if `max_value` is 0
    pub fn new(
        variant: FormatVariant,
        model: ColorModel,
        max_value: u32,
        channels: Channels,
    ) -> Result<Self> {
        if !channels.matches(model) {
            return Err(Error::ChannelMismatch(model.name()));
        }
        channels.check_uniform()?;

        let max_value = match model {
            ColorModel::Bilevel => 1,
            _ if max_value == 0 => {
                return Err(Error::InvalidParameter(
                    "max value must be positive".to_string(),
                ));
            }
            _ => max_value,
        };

        let (width, height) = channels.dimensions();
        let selection = Selection::full(width, height)?;
        Ok(Self {
            variant,
            model,
            width,
            height,
            max_value,
            channels,
            selection,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Payload encoding the image was loaded with
    #[inline]
    pub fn variant(&self) -> FormatVariant {
        self.variant
    }

    #[inline]
    pub fn color_model(&self) -> ColorModel {
        self.model
    }

    #[inline]
    pub fn max_value(&self) -> u32 {
        self.max_value
    }

    pub fn channels(&self) -> &Channels {
        &self.channels
    }

    pub fn channels_mut(&mut self) -> &mut Channels {
        &mut self.channels
    }

    #[inline]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Replace the selection.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SelectionOutOfBounds`] if `selection` does not fit
    /// the image; the current selection is kept.
    pub fn set_selection(&mut self, selection: Selection) -> Result<()> {
        if !selection.fits(self.width, self.height) {
            let (x1, y1, x2, y2) = selection.corners();
            return Err(Error::SelectionOutOfBounds {
                x1,
                y1,
                x2,
                y2,
                width: self.width,
                height: self.height,
            });
        }
        self.selection = selection;
        Ok(())
    }

    /// Select the whole image.
    pub fn select_all(&mut self) {
        // Dimensions are never zero once an image exists
        if let Ok(full) = Selection::full(self.width, self.height) {
            self.selection = full;
        }
    }

    /// Check if the selection covers the whole image
    pub fn is_fully_selected(&self) -> bool {
        self.selection.covers(self.width, self.height)
    }

    /// Install new channel grids, adopting their dimensions and resetting
    /// the selection to the new full extent.
    ///
    /// # Errors
    ///
    /// Fails without modifying the image if the layout does not match the
    /// color model or the grids differ in size.
    pub fn replace_channels(&mut self, channels: Channels) -> Result<()> {
        if !channels.matches(self.model) {
            return Err(Error::ChannelMismatch(self.model.name()));
        }
        channels.check_uniform()?;

        let (width, height) = channels.dimensions();
        self.selection = Selection::full(width, height)?;
        self.width = width;
        self.height = height;
        self.channels = channels;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray(width: u32, height: u32) -> Image {
        let grid = PixelGrid::new(width, height).unwrap();
        Image::new(
            FormatVariant::Text,
            ColorModel::Grayscale,
            255,
            Channels::Single(grid),
        )
        .unwrap()
    }

    #[test]
    fn test_image_new_selects_all() {
        let image = gray(6, 4);
        assert_eq!(image.dimensions(), (6, 4));
        assert_eq!(image.selection().corners(), (0, 0, 6, 4));
        assert!(image.is_fully_selected());
    }

    #[test]
    fn test_image_rejects_layout_mismatch() {
        let grid = PixelGrid::new(2, 2).unwrap();
        let err = Image::new(
            FormatVariant::Binary,
            ColorModel::Color,
            255,
            Channels::Single(grid),
        );
        assert_eq!(err, Err(Error::ChannelMismatch("color")));

        let channels = Channels::Rgb {
            red: PixelGrid::new(2, 2).unwrap(),
            green: PixelGrid::new(2, 2).unwrap(),
            blue: PixelGrid::new(3, 2).unwrap(),
        };
        assert!(matches!(
            Image::new(FormatVariant::Binary, ColorModel::Color, 255, channels),
            Err(Error::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_bilevel_max_value_is_one() {
        let grid = PixelGrid::new(2, 2).unwrap();
        let image = Image::new(
            FormatVariant::Text,
            ColorModel::Bilevel,
            255,
            Channels::Single(grid),
        )
        .unwrap();
        assert_eq!(image.max_value(), 1);
    }

    #[test]
    fn test_set_selection_bounds() {
        let mut image = gray(4, 4);
        let inside = Selection::new(1, 1, 3, 3).unwrap();
        image.set_selection(inside).unwrap();
        assert!(!image.is_fully_selected());

        let outside = Selection::new(1, 1, 5, 3).unwrap();
        assert!(image.set_selection(outside).is_err());
        assert_eq!(image.selection(), inside);

        image.select_all();
        assert!(image.is_fully_selected());
    }

    #[test]
    fn test_replace_channels_resets_selection() {
        let mut image = gray(4, 2);
        image
            .set_selection(Selection::new(0, 0, 2, 2).unwrap())
            .unwrap();
        image
            .replace_channels(Channels::Single(PixelGrid::new(2, 4).unwrap()))
            .unwrap();
        assert_eq!(image.dimensions(), (2, 4));
        assert_eq!(image.selection().corners(), (0, 0, 2, 4));
    }
}

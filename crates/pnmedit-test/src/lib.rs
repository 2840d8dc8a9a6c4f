//! pnmedit-test - Regression test framework for pnmedit
//!
//! Provides [`RegParams`], which counts and records comparisons the way a
//! regression program does, plus fixture builders that synthesize images
//! in memory so tests need no image files on disk.
//!
//! # Usage
//!
//! ```ignore
//! use pnmedit_test::{RegParams, gray_ramp};
//!
//! let mut rp = RegParams::new("rotate");
//! let image = gray_ramp(8, 6, FormatVariant::Binary)?;
//! rp.compare_values(8.0, image.width() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::RegParams;

use pnmedit_core::{Channels, ColorModel, FormatVariant, Image, PixelGrid};

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // pnmedit-test is at crates/pnmedit-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}

/// Build a grid whose sample at (x, y) is `f(x, y)`.
pub fn grid_from_fn<F>(width: u32, height: u32, f: F) -> TestResult<PixelGrid>
where
    F: Fn(u32, u32) -> f64,
{
    let mut data = Vec::with_capacity(width as usize * height as usize);
    for y in 0..height {
        for x in 0..width {
            data.push(f(x, y));
        }
    }
    PixelGrid::from_data(width, height, data).map_err(|e| TestError::Fixture {
        name: "grid_from_fn".to_string(),
        message: e.to_string(),
    })
}

fn build(
    name: &str,
    variant: FormatVariant,
    model: ColorModel,
    max_value: u32,
    channels: Channels,
) -> TestResult<Image> {
    Image::new(variant, model, max_value, channels).map_err(|e| TestError::Fixture {
        name: name.to_string(),
        message: e.to_string(),
    })
}

/// Grayscale image, max value 255, with samples `(x + y * width) % 256`.
///
/// Every sample of an image up to 256 pixels is distinct, which makes
/// geometric mistakes easy to spot.
pub fn gray_ramp(width: u32, height: u32, variant: FormatVariant) -> TestResult<Image> {
    let grid = grid_from_fn(width, height, |x, y| ((x + y * width) % 256) as f64)?;
    build(
        "gray_ramp",
        variant,
        ColorModel::Grayscale,
        255,
        Channels::Single(grid),
    )
}

/// Bilevel checkerboard starting with 0 at the top-left corner.
pub fn bilevel_checker(width: u32, height: u32, variant: FormatVariant) -> TestResult<Image> {
    let grid = grid_from_fn(width, height, |x, y| ((x + y) % 2) as f64)?;
    build(
        "bilevel_checker",
        variant,
        ColorModel::Bilevel,
        1,
        Channels::Single(grid),
    )
}

/// Color image, max value 255, with distinct patterns per channel.
pub fn color_ramp(width: u32, height: u32, variant: FormatVariant) -> TestResult<Image> {
    let red = grid_from_fn(width, height, |x, y| ((x * 37 + y * 11) % 256) as f64)?;
    let green = grid_from_fn(width, height, |x, y| ((x * 5 + y * 53) % 256) as f64)?;
    let blue = grid_from_fn(width, height, |x, y| ((x * x + y * 7) % 256) as f64)?;
    build(
        "color_ramp",
        variant,
        ColorModel::Color,
        255,
        Channels::Rgb { red, green, blue },
    )
}

/// Color image with every channel set to `value`.
pub fn color_flat(width: u32, height: u32, value: f64) -> TestResult<Image> {
    let grid = grid_from_fn(width, height, |_, _| value)?;
    build(
        "color_flat",
        FormatVariant::Binary,
        ColorModel::Color,
        255,
        Channels::Rgb {
            red: grid.clone(),
            green: grid.clone(),
            blue: grid,
        },
    )
}

/// Single grid of a bilevel/grayscale image, or the red grid of a color one.
pub fn first_grid(image: &Image) -> &PixelGrid {
    match image.channels() {
        Channels::Single(grid) => grid,
        Channels::Rgb { red, .. } => red,
    }
}

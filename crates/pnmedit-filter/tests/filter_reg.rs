//! Convolution filter regression test
//!
//! Checks the four named filters on color images, the untouched border,
//! selection scoping and the rejection of non-color images.

use pnmedit_core::{Channels, FormatVariant, Image, PixelGrid, Selection};
use pnmedit_filter::{FilterError, FilterKind, Kernel, apply_filter};
use pnmedit_test::{RegParams, bilevel_checker, color_flat, color_ramp, gray_ramp};

/// Straightforward reference convolution of a single sample.
fn reference_sample(grid: &PixelGrid, kernel: &Kernel, x: u32, y: u32) -> f64 {
    let mut sum = 0.0;
    for ky in 0..3 {
        for kx in 0..3 {
            let weight = kernel.get(kx, ky).unwrap_or(0.0);
            let value = grid.get_pixel(x + kx - 1, y + ky - 1).unwrap_or(0.0);
            sum += weight * value;
        }
    }
    sum.round().clamp(0.0, 255.0)
}

fn rgb(image: &Image) -> [&PixelGrid; 3] {
    match image.channels() {
        Channels::Rgb { red, green, blue } => [red, green, blue],
        Channels::Single(_) => panic!("expected a color image"),
    }
}

#[test]
fn filter_reg() {
    let mut rp = RegParams::new("filter");

    let pixs = color_ramp(7, 6, FormatVariant::Binary).expect("color ramp");
    for kind in FilterKind::ALL {
        let mut pixd = pixs.clone();
        apply_filter(&mut pixd, kind).expect("apply filter");
        let kernel = kind.kernel();

        for (src, dst) in rgb(&pixs).into_iter().zip(rgb(&pixd)) {
            for y in 0..pixs.height() {
                for x in 0..pixs.width() {
                    let border =
                        x == 0 || y == 0 || x == pixs.width() - 1 || y == pixs.height() - 1;
                    let expected = if border {
                        src.get_pixel_unchecked(x, y)
                    } else {
                        reference_sample(src, &kernel, x, y)
                    };
                    rp.compare_values(expected, dst.get_pixel_unchecked(x, y), 0.0);
                }
            }
        }
        rp.compare_values(1.0, if pixd.is_fully_selected() { 1.0 } else { 0.0 }, 0.0);
        rp.write_image(&pixd).expect("write filtered image");
    }

    assert!(rp.cleanup(), "filter regression test failed");
}

#[test]
fn filter_flat_image_reg() {
    let mut rp = RegParams::new("filter_flat");

    // Normalized kernels keep a flat image flat, EDGE zeroes its interior
    let pixs = color_flat(5, 5, 120.0).expect("flat image");
    for (kind, interior) in [
        (FilterKind::Blur, 120.0),
        (FilterKind::GaussianBlur, 120.0),
        (FilterKind::Sharpen, 120.0),
        (FilterKind::Edge, 0.0),
    ] {
        let mut pixd = pixs.clone();
        apply_filter(&mut pixd, kind).expect("apply filter");
        for grid in rgb(&pixd) {
            rp.compare_values(interior, grid.get_pixel_unchecked(2, 2), 0.0);
            rp.compare_values(120.0, grid.get_pixel_unchecked(0, 2), 0.0);
            rp.compare_values(120.0, grid.get_pixel_unchecked(4, 4), 0.0);
        }
    }

    assert!(rp.cleanup(), "filter_flat regression test failed");
}

#[test]
fn filter_selection_reg() {
    let mut rp = RegParams::new("filter_selection");

    let pixs = color_ramp(8, 8, FormatVariant::Text).expect("color ramp");
    let mut pixd = pixs.clone();
    let sel = Selection::new(2, 3, 5, 6).expect("selection");
    pixd.set_selection(sel).expect("set selection");
    apply_filter(&mut pixd, FilterKind::Edge).expect("apply edge");

    let kernel = Kernel::edge();
    for (src, dst) in rgb(&pixs).into_iter().zip(rgb(&pixd)) {
        for y in 0..8 {
            for x in 0..8 {
                let inside = (2..5).contains(&x) && (3..6).contains(&y);
                let expected = if inside {
                    reference_sample(src, &kernel, x, y)
                } else {
                    src.get_pixel_unchecked(x, y)
                };
                rp.compare_values(expected, dst.get_pixel_unchecked(x, y), 0.0);
            }
        }
    }
    rp.compare_values(1.0, if pixd.selection() == sel { 1.0 } else { 0.0 }, 0.0);

    // A selection along the left edge is pulled in by one column
    let mut pixe = pixs.clone();
    pixe.set_selection(Selection::new(0, 2, 2, 4).expect("selection"))
        .expect("set selection");
    apply_filter(&mut pixe, FilterKind::Blur).expect("apply blur");
    for (src, dst) in rgb(&pixs).into_iter().zip(rgb(&pixe)) {
        for y in 2..4 {
            rp.compare_values(src.get_pixel_unchecked(0, y), dst.get_pixel_unchecked(0, y), 0.0);
        }
    }

    assert!(rp.cleanup(), "filter_selection regression test failed");
}

#[test]
fn filter_rejects_non_color() {
    let images = [
        gray_ramp(5, 5, FormatVariant::Binary).expect("gray ramp"),
        bilevel_checker(5, 5, FormatVariant::Text).expect("checker"),
    ];
    for image in images {
        let mut pixd = image.clone();
        let err = apply_filter(&mut pixd, FilterKind::Sharpen).unwrap_err();
        assert!(matches!(err, FilterError::UnsupportedModel(model) if model == image.color_model()));
        assert_eq!(pixd, image);
    }
}

#[test]
fn filter_tiny_image_is_untouched() {
    let pixs = color_flat(2, 2, 30.0).expect("flat image");
    let mut pixd = pixs.clone();
    apply_filter(&mut pixd, FilterKind::Edge).expect("apply edge");
    assert_eq!(pixd, pixs);
}

//! Pixel grid regression test
//!
//! Copy and in-place orthogonal rotation laws, and window extraction.

use pnmedit_core::PixelGrid;
use pnmedit_test::{RegParams, grid_from_fn};
use proptest::prelude::*;

fn ramp(width: u32, height: u32) -> PixelGrid {
    grid_from_fn(width, height, |x, y| (x + y * width) as f64).expect("ramp")
}

#[test]
fn grid_rotate_reg() {
    let mut rp = RegParams::new("grid_rotate");

    for (w, h) in [(1, 1), (1, 5), (4, 3), (7, 7)] {
        let g = ramp(w, h);
        eprintln!("Testing {}x{} grid rotation", w, h);

        let r1 = g.rotate_90().expect("rotate_90");
        rp.compare_values(h as f64, r1.width() as f64, 0.0);
        rp.compare_values(w as f64, r1.height() as f64, 0.0);

        // 180 = 90 twice
        let r2 = g.rotate_180().expect("rotate_180");
        rp.compare_grids(&r2, &r1.rotate_90().expect("90 twice"));

        // 270 undoes 90
        let r3 = g.rotate_270().expect("rotate_270");
        rp.compare_grids(&g, &r1.rotate_270().expect("90 then 270"));
        rp.compare_grids(&r3, &r2.rotate_90().expect("180 then 90"));

        // orth dispatches by quads modulo 4
        rp.compare_grids(&g, &g.rotate_orth(0).expect("orth 0"));
        rp.compare_grids(&r1, &g.rotate_orth(5).expect("orth 5"));
        rp.compare_grids(&r3, &g.rotate_orth(3).expect("orth 3"));
    }

    assert!(rp.cleanup(), "grid_rotate regression test failed");
}

#[test]
fn grid_rotate_in_place_reg() {
    let mut rp = RegParams::new("grid_rotate_in_place");

    // A window covering a square grid matches the copy rotation
    let g = ramp(5, 5);
    for quads in 0..4 {
        let mut inplace = g.clone();
        inplace
            .rotate_orth_in_place(0, 0, 5, quads)
            .expect("in place");
        rp.compare_grids(&g.rotate_orth(quads).expect("copy"), &inplace);
    }

    // A sub-window matches the rotation of the cropped window
    let g = ramp(8, 6);
    for quads in 1..4 {
        let mut inplace = g.clone();
        inplace
            .rotate_orth_in_place(3, 1, 4, quads)
            .expect("in place");
        let window = g.crop_subgrid(3, 1, 7, 5).expect("crop");
        let want = window.rotate_orth(quads).expect("rotate window");
        rp.compare_grids(&want, &inplace.crop_subgrid(3, 1, 7, 5).expect("crop"));
        rp.compare_values(g.get_pixel_unchecked(0, 0), inplace.get_pixel_unchecked(0, 0), 0.0);
        rp.compare_values(g.get_pixel_unchecked(7, 5), inplace.get_pixel_unchecked(7, 5), 0.0);
    }

    // Windows must fit
    let mut g = ramp(4, 4);
    rp.compare_values(
        1.0,
        if g.rotate_90_in_place(2, 2, 3).is_err() { 1.0 } else { 0.0 },
        0.0,
    );
    rp.compare_grids(&ramp(4, 4), &g);

    assert!(rp.cleanup(), "grid_rotate_in_place regression test failed");
}

#[test]
fn grid_crop_reg() {
    let mut rp = RegParams::new("grid_crop");

    let g = ramp(6, 4);
    let c = g.crop_subgrid(1, 2, 4, 4).expect("crop");
    rp.compare_values(3.0, c.width() as f64, 0.0);
    rp.compare_values(2.0, c.height() as f64, 0.0);
    rp.compare_values(13.0, c.get_pixel_unchecked(0, 0), 0.0);
    rp.compare_values(21.0, c.get_pixel_unchecked(2, 1), 0.0);

    rp.compare_grids(&g, &g.crop_subgrid(0, 0, 6, 4).expect("full crop"));
    rp.compare_values(
        1.0,
        if g.crop_subgrid(0, 0, 7, 4).is_err() { 1.0 } else { 0.0 },
        0.0,
    );

    assert!(rp.cleanup(), "grid_crop regression test failed");
}

proptest! {
    /// Four quarter turns in place restore the grid.
    #[test]
    fn prop_four_turns_in_place(
        width in 1u32..12,
        height in 1u32..12,
        side_seed in 0u32..100,
        origin_seed in 0u32..100,
    ) {
        let g = ramp(width, height);
        let side = 1 + side_seed % width.min(height);
        let x0 = origin_seed % (width - side + 1);
        let y0 = origin_seed % (height - side + 1);

        let mut turned = g.clone();
        for _ in 0..4 {
            turned.rotate_90_in_place(x0, y0, side).unwrap();
        }
        prop_assert_eq!(turned, g);
    }

    /// Clockwise then counterclockwise copy rotation is the identity.
    #[test]
    fn prop_copy_rotation_inverse(width in 1u32..12, height in 1u32..12) {
        let g = ramp(width, height);
        let back = g.rotate_90().unwrap().rotate_270().unwrap();
        prop_assert_eq!(back, g);
    }
}

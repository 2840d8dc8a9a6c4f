//! Per-channel sample I/O
//!
//! Binary payloads carry one byte per sample, text payloads one decimal
//! integer per sample. Color payloads interleave red, green and blue per
//! pixel; the `*_rgb` variants split them into three grids on read and
//! interleave them again on write.
//!
//! Samples are rounded to the nearest integer and clamped to
//! `[0, max_value]` when written.

use crate::header::PnmTokenizer;
use crate::{IoError, IoResult};
use pnmedit_core::PixelGrid;
use std::io::{self, BufRead, Read, Write};

fn truncated(err: io::Error) -> IoError {
    if err.kind() == io::ErrorKind::UnexpectedEof {
        IoError::InvalidData("truncated pixel data".to_string())
    } else {
        IoError::Io(err)
    }
}

#[inline]
fn quantize(sample: f64, max_value: u32) -> u32 {
    sample.round().clamp(0.0, max_value as f64) as u32
}

#[inline]
fn to_byte(sample: f64, max_value: u32) -> u8 {
    quantize(sample, max_value.min(255)) as u8
}

/// Fill `grid` from one byte per sample.
pub fn read_binary<R: Read>(reader: &mut R, grid: &mut PixelGrid) -> IoResult<()> {
    let mut row = vec![0u8; grid.width() as usize];
    for y in 0..grid.height() {
        reader.read_exact(&mut row).map_err(truncated)?;
        for (dst, &b) in grid.row_mut(y).iter_mut().zip(&row) {
            *dst = b as f64;
        }
    }
    Ok(())
}

/// Fill `grid` from one decimal token per sample.
pub fn read_text<R: BufRead>(tokens: &mut PnmTokenizer<R>, grid: &mut PixelGrid) -> IoResult<()> {
    for y in 0..grid.height() {
        for dst in grid.row_mut(y) {
            *dst = tokens.next_u32("sample")? as f64;
        }
    }
    Ok(())
}

/// Fill three grids from interleaved RGB bytes.
pub fn read_binary_rgb<R: Read>(
    reader: &mut R,
    red: &mut PixelGrid,
    green: &mut PixelGrid,
    blue: &mut PixelGrid,
) -> IoResult<()> {
    let mut row = vec![0u8; red.width() as usize * 3];
    for y in 0..red.height() {
        reader.read_exact(&mut row).map_err(truncated)?;
        for (x, px) in row.chunks_exact(3).enumerate() {
            let x = x as u32;
            red.set_pixel_unchecked(x, y, px[0] as f64);
            green.set_pixel_unchecked(x, y, px[1] as f64);
            blue.set_pixel_unchecked(x, y, px[2] as f64);
        }
    }
    Ok(())
}

/// Fill three grids from interleaved RGB tokens.
pub fn read_text_rgb<R: BufRead>(
    tokens: &mut PnmTokenizer<R>,
    red: &mut PixelGrid,
    green: &mut PixelGrid,
    blue: &mut PixelGrid,
) -> IoResult<()> {
    for y in 0..red.height() {
        for x in 0..red.width() {
            red.set_pixel_unchecked(x, y, tokens.next_u32("red sample")? as f64);
            green.set_pixel_unchecked(x, y, tokens.next_u32("green sample")? as f64);
            blue.set_pixel_unchecked(x, y, tokens.next_u32("blue sample")? as f64);
        }
    }
    Ok(())
}

/// Write one byte per sample, no separators.
pub fn write_binary<W: Write>(writer: &mut W, grid: &PixelGrid, max_value: u32) -> IoResult<()> {
    let mut row = Vec::with_capacity(grid.width() as usize);
    for samples in grid.rows() {
        row.clear();
        row.extend(samples.iter().map(|&s| to_byte(s, max_value)));
        writer.write_all(&row)?;
    }
    Ok(())
}

/// Write one row per line, each sample followed by a space.
pub fn write_text<W: Write>(writer: &mut W, grid: &PixelGrid, max_value: u32) -> IoResult<()> {
    for samples in grid.rows() {
        for &s in samples {
            write!(writer, "{} ", quantize(s, max_value))?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

/// Write interleaved RGB bytes.
pub fn write_binary_rgb<W: Write>(
    writer: &mut W,
    red: &PixelGrid,
    green: &PixelGrid,
    blue: &PixelGrid,
    max_value: u32,
) -> IoResult<()> {
    let mut row = Vec::with_capacity(red.width() as usize * 3);
    for y in 0..red.height() {
        row.clear();
        for x in 0..red.width() {
            row.push(to_byte(red.get_pixel_unchecked(x, y), max_value));
            row.push(to_byte(green.get_pixel_unchecked(x, y), max_value));
            row.push(to_byte(blue.get_pixel_unchecked(x, y), max_value));
        }
        writer.write_all(&row)?;
    }
    Ok(())
}

/// Write interleaved RGB text, one image row per line.
pub fn write_text_rgb<W: Write>(
    writer: &mut W,
    red: &PixelGrid,
    green: &PixelGrid,
    blue: &PixelGrid,
    max_value: u32,
) -> IoResult<()> {
    for y in 0..red.height() {
        for x in 0..red.width() {
            write!(
                writer,
                "{} {} {} ",
                quantize(red.get_pixel_unchecked(x, y), max_value),
                quantize(green.get_pixel_unchecked(x, y), max_value),
                quantize(blue.get_pixel_unchecked(x, y), max_value)
            )?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_binary() {
        let mut grid = PixelGrid::new(3, 2).unwrap();
        let mut data = &[0u8, 128, 255, 1, 2, 3][..];
        read_binary(&mut data, &mut grid).unwrap();
        assert_eq!(grid.data(), &[0.0, 128.0, 255.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_read_binary_truncated() {
        let mut grid = PixelGrid::new(3, 2).unwrap();
        let mut data = &[0u8, 128, 255, 1][..];
        assert!(matches!(
            read_binary(&mut data, &mut grid),
            Err(IoError::InvalidData(_))
        ));
    }

    #[test]
    fn test_read_text_rgb() {
        let (mut r, mut g, mut b) = (
            PixelGrid::new(2, 1).unwrap(),
            PixelGrid::new(2, 1).unwrap(),
            PixelGrid::new(2, 1).unwrap(),
        );
        let mut tokens = PnmTokenizer::new(&b"10 20 30\n40 50 60\n"[..]);
        read_text_rgb(&mut tokens, &mut r, &mut g, &mut b).unwrap();
        assert_eq!(r.data(), &[10.0, 40.0]);
        assert_eq!(g.data(), &[20.0, 50.0]);
        assert_eq!(b.data(), &[30.0, 60.0]);
    }

    #[test]
    fn test_write_text_rounds_and_clamps() {
        let grid = PixelGrid::from_data(3, 2, vec![0.4, 0.5, 254.6, -3.0, 300.0, 7.0]).unwrap();
        let mut out = Vec::new();
        write_text(&mut out, &grid, 255).unwrap();
        assert_eq!(out, b"0 1 255 \n0 255 7 \n");
    }

    #[test]
    fn test_write_binary_rgb_interleaves() {
        let r = PixelGrid::from_data(2, 1, vec![1.0, 4.0]).unwrap();
        let g = PixelGrid::from_data(2, 1, vec![2.0, 5.0]).unwrap();
        let b = PixelGrid::from_data(2, 1, vec![3.0, 6.0]).unwrap();
        let mut out = Vec::new();
        write_binary_rgb(&mut out, &r, &g, &b, 255).unwrap();
        assert_eq!(out, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_write_binary_clamps_to_max_value() {
        let grid = PixelGrid::from_data(2, 1, vec![1.0, 200.0]).unwrap();
        let mut out = Vec::new();
        write_binary(&mut out, &grid, 1).unwrap();
        assert_eq!(out, vec![1, 1]);
    }
}

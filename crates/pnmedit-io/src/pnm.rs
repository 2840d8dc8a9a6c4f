//! PNM (Portable Any Map) format support
//!
//! Reads and writes all six PNM formats: PBM (P1 text, P4 binary), PGM
//! (P2 text, P5 binary) and PPM (P3 text, P6 binary).
//!
//! Binary payloads use one byte per sample for every model, bilevel
//! included, so a P4 file holds `width * height` bytes of 0 or 1.

use crate::format::PnmFormat;
use crate::header::{PnmTokenizer, read_header};
use crate::samples;
use crate::{IoError, IoResult};
use pnmedit_core::{Channels, ColorModel, FormatVariant, Image, PixelGrid};
use std::io::{BufRead, Write};

fn disabled(format: PnmFormat) -> IoError {
    IoError::UnsupportedFormat(format!(
        "{} payloads are not enabled in this build",
        format.magic()
    ))
}

/// Read a PNM image (P1-P6) from a buffered reader.
///
/// # Returns
/// An [`Image`] with one grid (bilevel, grayscale) or three (color),
/// the whole extent selected.
pub fn read_pnm<R: BufRead>(reader: R) -> IoResult<Image> {
    let mut tokens = PnmTokenizer::new(reader);
    let header = read_header(&mut tokens)?;
    let format = header.format;
    if !format.is_enabled() {
        return Err(disabled(format));
    }

    let (w, h) = (header.width, header.height);
    let channels = match (format.color_model(), format.variant()) {
        (ColorModel::Color, variant) => {
            let mut red = PixelGrid::new(w, h)?;
            let mut green = PixelGrid::new(w, h)?;
            let mut blue = PixelGrid::new(w, h)?;
            match variant {
                FormatVariant::Binary => samples::read_binary_rgb(
                    tokens.reader_mut(),
                    &mut red,
                    &mut green,
                    &mut blue,
                )?,
                FormatVariant::Text => {
                    samples::read_text_rgb(&mut tokens, &mut red, &mut green, &mut blue)?
                }
            }
            Channels::Rgb { red, green, blue }
        }
        (_, variant) => {
            let mut grid = PixelGrid::new(w, h)?;
            match variant {
                FormatVariant::Binary => samples::read_binary(tokens.reader_mut(), &mut grid)?,
                FormatVariant::Text => samples::read_text(&mut tokens, &mut grid)?,
            }
            Channels::Single(grid)
        }
    };

    Ok(Image::new(
        format.variant(),
        format.color_model(),
        header.max_value,
        channels,
    )?)
}

/// Write an image using the payload variant it carries.
pub fn write_pnm<W: Write>(image: &Image, writer: W) -> IoResult<()> {
    write_pnm_as(image, image.variant(), writer)
}

/// Pick the format for writing `image` as `variant`.
///
/// # Errors
///
/// Returns [`IoError::UnsupportedFormat`] when the variant is disabled, or
/// when a binary payload is requested for a max value above 255, since
/// binary samples are one byte each.
pub(crate) fn output_format(image: &Image, variant: FormatVariant) -> IoResult<PnmFormat> {
    let format = PnmFormat::from_parts(image.color_model(), variant);
    if !format.is_enabled() {
        return Err(disabled(format));
    }
    if variant == FormatVariant::Binary && image.max_value() > u32::from(u8::MAX) {
        return Err(IoError::UnsupportedFormat(format!(
            "{} cannot hold max value {}, binary samples are one byte",
            format.magic(),
            image.max_value()
        )));
    }
    Ok(format)
}

/// Write an image as text or binary PNM.
///
/// The magic number is chosen from the image's color model and `variant`.
/// The max-value line is omitted for bilevel images. Nothing is written
/// when the image cannot be encoded as `variant`.
pub fn write_pnm_as<W: Write>(image: &Image, variant: FormatVariant, mut writer: W) -> IoResult<()> {
    let format = output_format(image, variant)?;
    let max_value = image.max_value();
    writeln!(writer, "{}", format.magic())?;
    writeln!(writer, "{} {}", image.width(), image.height())?;
    if image.color_model() != ColorModel::Bilevel {
        writeln!(writer, "{}", max_value)?;
    }

    match (image.channels(), variant) {
        (Channels::Single(grid), FormatVariant::Binary) => {
            samples::write_binary(&mut writer, grid, max_value)?
        }
        (Channels::Single(grid), FormatVariant::Text) => {
            samples::write_text(&mut writer, grid, max_value)?
        }
        (Channels::Rgb { red, green, blue }, FormatVariant::Binary) => {
            samples::write_binary_rgb(&mut writer, red, green, blue, max_value)?
        }
        (Channels::Rgb { red, green, blue }, FormatVariant::Text) => {
            samples::write_text_rgb(&mut writer, red, green, blue, max_value)?
        }
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_pgm_text() {
        let data = b"P2\n3 2\n255\n0 1 2 \n3 4 5 \n";
        let image = read_pnm(&data[..]).unwrap();
        assert_eq!(image.color_model(), ColorModel::Grayscale);
        assert_eq!(image.variant(), FormatVariant::Text);
        assert_eq!(image.dimensions(), (3, 2));
        match image.channels() {
            Channels::Single(grid) => assert_eq!(grid.data(), &[0.0, 1.0, 2.0, 3.0, 4.0, 5.0]),
            other => panic!("unexpected channels: {:?}", other),
        }
    }

    #[test]
    fn test_read_ppm_binary() {
        let data = b"P6\n2 1\n255\n\x01\x02\x03\x04\x05\x06";
        let image = read_pnm(&data[..]).unwrap();
        assert_eq!(image.color_model(), ColorModel::Color);
        match image.channels() {
            Channels::Rgb { red, green, blue } => {
                assert_eq!(red.data(), &[1.0, 4.0]);
                assert_eq!(green.data(), &[2.0, 5.0]);
                assert_eq!(blue.data(), &[3.0, 6.0]);
            }
            other => panic!("unexpected channels: {:?}", other),
        }
    }

    #[test]
    fn test_read_truncated_text() {
        let data = b"P1\n2 2\n0 1\n1\n";
        assert!(matches!(read_pnm(&data[..]), Err(IoError::InvalidData(_))));
    }

    #[test]
    fn test_write_pbm_text_has_no_max_value() {
        let data = b"P4\n2 2\n\x00\x01\x01\x00";
        let image = read_pnm(&data[..]).unwrap();
        let mut out = Vec::new();
        write_pnm_as(&image, FormatVariant::Text, &mut out).unwrap();
        assert_eq!(out, b"P1\n2 2\n0 1 \n1 0 \n");
    }

    #[test]
    fn test_binary_write_matches_input() {
        let data = b"P5\n2 2\n255\n\x00\x10\x80\xff";
        let image = read_pnm(&data[..]).unwrap();
        let mut out = Vec::new();
        write_pnm(&image, &mut out).unwrap();
        assert_eq!(out, data.to_vec());
    }

    #[test]
    fn test_binary_write_rejects_wide_max_value() {
        let data = b"P2\n2 1\n1000\n999 1000\n";
        let image = read_pnm(&data[..]).unwrap();
        let mut out = Vec::new();
        assert!(matches!(
            write_pnm_as(&image, FormatVariant::Binary, &mut out),
            Err(IoError::UnsupportedFormat(_))
        ));
        assert!(out.is_empty());

        write_pnm_as(&image, FormatVariant::Text, &mut out).unwrap();
        assert_eq!(out, b"P2\n2 1\n1000\n999 1000 \n");
    }
}

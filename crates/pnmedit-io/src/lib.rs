//! pnmedit-io - PNM codec
//!
//! Reads and writes the six PNM formats (P1-P6) to and from
//! [`pnmedit_core::Image`].
//!
//! # Features
//!
//! - `text` (default): P1/P2/P3 payloads
//! - `binary` (default): P4/P5/P6 payloads

mod error;
pub mod format;
pub mod header;
pub mod pnm;
pub mod samples;

pub use error::{IoError, IoResult};
pub use format::{PnmFormat, detect_format_from_bytes};
pub use header::{PnmHeader, PnmTokenizer, read_header};
pub use pnm::{read_pnm, write_pnm, write_pnm_as};

use pnmedit_core::{FormatVariant, Image};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use tracing::debug;

/// Read an image from a file path.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Image> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let image = read_pnm(BufReader::new(file))?;
    debug!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        model = image.color_model().name(),
        variant = ?image.variant(),
        "read image"
    );
    Ok(image)
}

/// Read an image from an in-memory PNM byte stream.
pub fn read_image_mem(data: &[u8]) -> IoResult<Image> {
    read_pnm(data)
}

/// Write an image to a file path with the given payload variant.
///
/// The file is created or truncated.
pub fn write_image<P: AsRef<Path>>(image: &Image, path: P, variant: FormatVariant) -> IoResult<()> {
    let path = path.as_ref();
    pnm::output_format(image, variant)?;
    let file = File::create(path)?;
    write_pnm_as(image, variant, BufWriter::new(file))?;
    debug!(
        path = %path.display(),
        magic = PnmFormat::from_parts(image.color_model(), variant).magic(),
        "wrote image"
    );
    Ok(())
}

/// Encode an image into a PNM byte vector.
pub fn write_image_mem(image: &Image, variant: FormatVariant) -> IoResult<Vec<u8>> {
    let mut out = Vec::new();
    write_pnm_as(image, variant, &mut out)?;
    Ok(out)
}

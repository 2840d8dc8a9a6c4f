//! PNM format detection
//!
//! Maps the six magic numbers onto (color model, payload variant) pairs.

use crate::header::PnmTokenizer;
use crate::{IoError, IoResult};
use pnmedit_core::{ColorModel, FormatVariant};

/// Magic numbers of the PNM family
mod magic {
    pub const PBM_TEXT: &str = "P1";
    pub const PGM_TEXT: &str = "P2";
    pub const PPM_TEXT: &str = "P3";
    pub const PBM_BINARY: &str = "P4";
    pub const PGM_BINARY: &str = "P5";
    pub const PPM_BINARY: &str = "P6";
}

/// One of the six PNM formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PnmFormat {
    /// P1: bilevel, text payload
    PbmText,
    /// P2: grayscale, text payload
    PgmText,
    /// P3: color, text payload
    PpmText,
    /// P4: bilevel, binary payload
    PbmBinary,
    /// P5: grayscale, binary payload
    PgmBinary,
    /// P6: color, binary payload
    PpmBinary,
}

impl PnmFormat {
    /// All six formats in magic-number order
    pub const ALL: [PnmFormat; 6] = [
        PnmFormat::PbmText,
        PnmFormat::PgmText,
        PnmFormat::PpmText,
        PnmFormat::PbmBinary,
        PnmFormat::PgmBinary,
        PnmFormat::PpmBinary,
    ];

    /// Parse a magic token such as `"P5"`.
    pub fn from_magic(token: &str) -> Option<Self> {
        match token {
            magic::PBM_TEXT => Some(PnmFormat::PbmText),
            magic::PGM_TEXT => Some(PnmFormat::PgmText),
            magic::PPM_TEXT => Some(PnmFormat::PpmText),
            magic::PBM_BINARY => Some(PnmFormat::PbmBinary),
            magic::PGM_BINARY => Some(PnmFormat::PgmBinary),
            magic::PPM_BINARY => Some(PnmFormat::PpmBinary),
            _ => None,
        }
    }

    /// The magic token written at the top of the file
    pub fn magic(self) -> &'static str {
        match self {
            PnmFormat::PbmText => magic::PBM_TEXT,
            PnmFormat::PgmText => magic::PGM_TEXT,
            PnmFormat::PpmText => magic::PPM_TEXT,
            PnmFormat::PbmBinary => magic::PBM_BINARY,
            PnmFormat::PgmBinary => magic::PGM_BINARY,
            PnmFormat::PpmBinary => magic::PPM_BINARY,
        }
    }

    /// Format for a given model and payload encoding
    pub fn from_parts(model: ColorModel, variant: FormatVariant) -> Self {
        match (variant, model) {
            (FormatVariant::Text, ColorModel::Bilevel) => PnmFormat::PbmText,
            (FormatVariant::Text, ColorModel::Grayscale) => PnmFormat::PgmText,
            (FormatVariant::Text, ColorModel::Color) => PnmFormat::PpmText,
            (FormatVariant::Binary, ColorModel::Bilevel) => PnmFormat::PbmBinary,
            (FormatVariant::Binary, ColorModel::Grayscale) => PnmFormat::PgmBinary,
            (FormatVariant::Binary, ColorModel::Color) => PnmFormat::PpmBinary,
        }
    }

    pub fn color_model(self) -> ColorModel {
        match self {
            PnmFormat::PbmText | PnmFormat::PbmBinary => ColorModel::Bilevel,
            PnmFormat::PgmText | PnmFormat::PgmBinary => ColorModel::Grayscale,
            PnmFormat::PpmText | PnmFormat::PpmBinary => ColorModel::Color,
        }
    }

    pub fn variant(self) -> FormatVariant {
        match self {
            PnmFormat::PbmText | PnmFormat::PgmText | PnmFormat::PpmText => FormatVariant::Text,
            _ => FormatVariant::Binary,
        }
    }

    /// Check whether this build can encode and decode the payload.
    pub fn is_enabled(self) -> bool {
        match self.variant() {
            FormatVariant::Text => cfg!(feature = "text"),
            FormatVariant::Binary => cfg!(feature = "binary"),
        }
    }
}

/// Detect the PNM format from the start of a byte stream.
///
/// Leading whitespace and `#` comment lines are skipped.
pub fn detect_format_from_bytes(data: &[u8]) -> IoResult<PnmFormat> {
    let mut tokens = PnmTokenizer::new(data);
    let token = tokens
        .next_token()?
        .ok_or_else(|| IoError::InvalidData("not enough data to detect format".to_string()))?;
    PnmFormat::from_magic(&token).ok_or(IoError::UnsupportedFormat(token))
}

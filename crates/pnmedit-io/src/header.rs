//! PNM header reading
//!
//! Headers are read through [`PnmTokenizer`], a lookahead tokenizer over
//! any [`BufRead`]. It peeks at the next byte to decide whether to skip
//! whitespace or a `#` comment line, and only consumes what it has
//! decided to consume, so the stream never has to be rewound.

use crate::format::PnmFormat;
use crate::{IoError, IoResult};
use pnmedit_core::ColorModel;
use std::io::BufRead;

/// Whitespace-delimited token reader with `#` comment skipping
pub struct PnmTokenizer<R> {
    reader: R,
}

impl<R: BufRead> PnmTokenizer<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Look at the next byte without consuming it.
    pub fn peek(&mut self) -> IoResult<Option<u8>> {
        let buf = self.reader.fill_buf()?;
        Ok(buf.first().copied())
    }

    #[inline]
    fn bump(&mut self) {
        self.reader.consume(1);
    }

    /// Consume everything up to and including the next newline.
    pub fn skip_line(&mut self) -> IoResult<()> {
        while let Some(b) = self.peek()? {
            self.bump();
            if b == b'\n' {
                break;
            }
        }
        Ok(())
    }

    /// Skip whitespace and whole `#` comment lines.
    pub fn skip_whitespace_and_comments(&mut self) -> IoResult<()> {
        loop {
            match self.peek()? {
                Some(b) if b.is_ascii_whitespace() => self.bump(),
                Some(b'#') => self.skip_line()?,
                _ => return Ok(()),
            }
        }
    }

    /// Read the next token, or `None` at end of input.
    pub fn next_token(&mut self) -> IoResult<Option<String>> {
        self.skip_whitespace_and_comments()?;

        let mut token = Vec::new();
        while let Some(b) = self.peek()? {
            if b.is_ascii_whitespace() || b == b'#' {
                break;
            }
            token.push(b);
            self.bump();
        }

        if token.is_empty() {
            return Ok(None);
        }
        String::from_utf8(token)
            .map(Some)
            .map_err(|_| IoError::InvalidData("non-ASCII token".to_string()))
    }

    /// Read the next token as an unsigned decimal integer.
    ///
    /// `what` names the field in error messages.
    pub fn next_u32(&mut self, what: &str) -> IoResult<u32> {
        let token = self
            .next_token()?
            .ok_or_else(|| IoError::InvalidData(format!("missing {}", what)))?;
        token
            .parse::<u32>()
            .map_err(|_| IoError::InvalidData(format!("invalid {}: {:?}", what, token)))
    }

    /// Consume the rest of the current line, including its newline.
    ///
    /// Only blanks and a carriage return may precede the newline; a
    /// payload byte stops the scan without being consumed.
    pub fn finish_line(&mut self) -> IoResult<()> {
        while let Some(b) = self.peek()? {
            match b {
                b'\n' => {
                    self.bump();
                    break;
                }
                b' ' | b'\t' | b'\r' => self.bump(),
                _ => break,
            }
        }
        Ok(())
    }

    /// Borrow the underlying reader, positioned after the last consumed byte.
    pub fn reader_mut(&mut self) -> &mut R {
        &mut self.reader
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}

/// Header fields of a PNM file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PnmHeader {
    /// Detected format
    pub format: PnmFormat,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Max sample value (1 for bilevel)
    pub max_value: u32,
}

/// Read the header and leave the tokenizer at the first payload byte.
///
/// # Errors
///
/// - [`IoError::UnsupportedFormat`] if the magic number is not P1-P6
/// - [`IoError::InvalidData`] if a field is missing, non-numeric or zero,
///   or a binary file declares a max value above 255
pub fn read_header<R: BufRead>(tokens: &mut PnmTokenizer<R>) -> IoResult<PnmHeader> {
    let magic = tokens
        .next_token()?
        .ok_or_else(|| IoError::InvalidData("missing magic number".to_string()))?;
    let format = PnmFormat::from_magic(&magic).ok_or(IoError::UnsupportedFormat(magic))?;

    let width = tokens.next_u32("width")?;
    let height = tokens.next_u32("height")?;
    if width == 0 || height == 0 {
        return Err(IoError::InvalidData(format!(
            "invalid dimensions: {}x{}",
            width, height
        )));
    }

    let max_value = match format.color_model() {
        ColorModel::Bilevel => 1,
        _ => {
            let max_value = tokens.next_u32("max value")?;
            if max_value == 0 {
                return Err(IoError::InvalidData("max value must be positive".to_string()));
            }
            if format.variant() == pnmedit_core::FormatVariant::Binary && max_value > 255 {
                return Err(IoError::InvalidData(format!(
                    "max value {} needs more than one byte per sample",
                    max_value
                )));
            }
            max_value
        }
    };

    tokens.finish_line()?;

    Ok(PnmHeader {
        format,
        width,
        height,
        max_value,
    })
}

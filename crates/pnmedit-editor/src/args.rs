//! Argument validation
//!
//! Each command's argument is checked for arity and shape first, then for
//! value ranges, so malformed input reports `Invalid command` before any
//! more specific diagnostic.

use crate::{EditorError, EditorResult};
use pnmedit_core::{FormatVariant, Selection};
use pnmedit_filter::FilterKind;
use pnmedit_transform::{Direction, Rotation};

/// Parsed `SELECT` argument
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectArgs {
    All,
    /// Raw corners `x1 y1 x2 y2`, not yet range-checked
    Corners([i64; 4]),
}

/// Parsed `SAVE` argument
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveTarget<'a> {
    pub path: &'a str,
    pub variant: FormatVariant,
}

/// Require exactly one word, e.g. a file name for `LOAD`.
pub fn single_word(arg: Option<&str>) -> EditorResult<&str> {
    let arg = arg.ok_or(EditorError::InvalidCommand)?;
    if arg.is_empty() || arg.contains(char::is_whitespace) {
        return Err(EditorError::InvalidCommand);
    }
    Ok(arg)
}

/// Require that no argument was given.
pub fn no_argument(arg: Option<&str>) -> EditorResult<()> {
    match arg {
        Some(a) if !a.trim().is_empty() => Err(EditorError::InvalidCommand),
        _ => Ok(()),
    }
}

/// Parse an integer of the form `-?[0-9]+`.
///
/// Values too large for `i64` saturate, which keeps them out of range
/// rather than malformed.
fn parse_integer(token: &str) -> Option<i64> {
    let (negative, digits) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    match token.parse::<i64>() {
        Ok(v) => Some(v),
        Err(_) if negative => Some(i64::MIN),
        Err(_) => Some(i64::MAX),
    }
}

/// Parse the argument of `SELECT`: `ALL` or four integers.
pub fn parse_select(arg: Option<&str>) -> EditorResult<SelectArgs> {
    let arg = arg.ok_or(EditorError::InvalidCommand)?;
    let tokens: Vec<&str> = arg.split_whitespace().collect();
    match tokens.as_slice() {
        ["ALL"] => Ok(SelectArgs::All),
        [a, b, c, d] => {
            let mut corners = [0i64; 4];
            for (slot, token) in corners.iter_mut().zip([a, b, c, d]) {
                *slot = parse_integer(token).ok_or(EditorError::InvalidCommand)?;
            }
            Ok(SelectArgs::Corners(corners))
        }
        _ => Err(EditorError::InvalidCommand),
    }
}

/// Range-check raw corners against a `width` x `height` image.
///
/// Corners may come in any order; the result is normalized.
///
/// # Errors
///
/// Returns [`EditorError::InvalidCoordinates`] if any value is negative,
/// the rectangle is empty or a coordinate lies beyond the image.
pub fn selection_within(corners: [i64; 4], width: u32, height: u32) -> EditorResult<Selection> {
    let [x1, y1, x2, y2] = corners;
    if corners.iter().any(|&v| v < 0) {
        return Err(EditorError::InvalidCoordinates);
    }
    let (w, h) = (i64::from(width), i64::from(height));
    if x1 > w || x2 > w || y1 > h || y2 > h {
        return Err(EditorError::InvalidCoordinates);
    }
    // All four values are now within u32 range
    Selection::new(x1 as u32, y1 as u32, x2 as u32, y2 as u32)
        .map_err(|_| EditorError::InvalidCoordinates)
}

/// Parse the argument of `ROTATE`: an optional sign followed by digits.
pub fn parse_rotation(arg: Option<&str>) -> EditorResult<Rotation> {
    let arg = arg.ok_or(EditorError::InvalidCommand)?.trim_end();
    let (direction, digits) = if let Some(rest) = arg.strip_prefix('-') {
        (Direction::CounterClockwise, rest)
    } else if let Some(rest) = arg.strip_prefix('+') {
        (Direction::Clockwise, rest)
    } else {
        (Direction::Clockwise, arg)
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(EditorError::InvalidCommand);
    }

    let degrees: u32 = digits.parse().map_err(|_| EditorError::UnsupportedAngle)?;
    Ok(Rotation::new(direction, degrees)?)
}

/// Parse the argument of `APPLY`: one of the filter names.
pub fn parse_filter(arg: Option<&str>) -> EditorResult<FilterKind> {
    let arg = arg.ok_or(EditorError::InvalidCommand)?;
    arg.trim_end()
        .parse::<FilterKind>()
        .map_err(|_| EditorError::UnknownFilter)
}

/// Parse the argument of `SAVE`: a file name, then any token to request
/// text output.
pub fn parse_save(arg: Option<&str>) -> EditorResult<SaveTarget<'_>> {
    let arg = arg.ok_or(EditorError::InvalidCommand)?;
    let mut tokens = arg.split_whitespace();
    let path = tokens.next().ok_or(EditorError::InvalidCommand)?;
    let variant = match tokens.next() {
        Some(_) => FormatVariant::Text,
        None => FormatVariant::Binary,
    };
    Ok(SaveTarget { path, variant })
}

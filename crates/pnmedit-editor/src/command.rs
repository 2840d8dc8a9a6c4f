//! Command lines
//!
//! A command line is a keyword, then optionally a single space and an
//! argument that runs to the end of the line.

use crate::{EditorError, EditorResult};
use std::fmt;
use std::str::FromStr;

/// Command keywords
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Load,
    Select,
    Rotate,
    Crop,
    Apply,
    Save,
    Exit,
}

impl Keyword {
    pub const ALL: [Keyword; 7] = [
        Keyword::Load,
        Keyword::Select,
        Keyword::Rotate,
        Keyword::Crop,
        Keyword::Apply,
        Keyword::Save,
        Keyword::Exit,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::Load => "LOAD",
            Keyword::Select => "SELECT",
            Keyword::Rotate => "ROTATE",
            Keyword::Crop => "CROP",
            Keyword::Apply => "APPLY",
            Keyword::Save => "SAVE",
            Keyword::Exit => "EXIT",
        }
    }
}

impl FromStr for Keyword {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Keyword::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or(EditorError::InvalidCommand)
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed command line borrowing its argument from the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command<'a> {
    pub keyword: Keyword,
    pub argument: Option<&'a str>,
}

impl<'a> Command<'a> {
    /// Parse one input line.
    ///
    /// The trailing line terminator is dropped. The argument is `None`
    /// when absent or empty.
    ///
    /// # Returns
    ///
    /// `Ok(None)` for blank lines.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::InvalidCommand`] for unknown keywords.
    pub fn parse(line: &'a str) -> EditorResult<Option<Self>> {
        let line = line.trim_end_matches(['\n', '\r']).trim_start();
        if line.trim_end().is_empty() {
            return Ok(None);
        }

        let (word, rest) = match line.split_once(' ') {
            Some((word, rest)) => (word, Some(rest)),
            None => (line, None),
        };
        let keyword = word.parse()?;
        let argument = rest.filter(|arg| !arg.is_empty());
        Ok(Some(Command { keyword, argument }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keyword_and_argument() {
        let cmd = Command::parse("SELECT 1 2 3 4\n").unwrap().unwrap();
        assert_eq!(cmd.keyword, Keyword::Select);
        assert_eq!(cmd.argument, Some("1 2 3 4"));

        let cmd = Command::parse("CROP\r\n").unwrap().unwrap();
        assert_eq!(cmd.keyword, Keyword::Crop);
        assert_eq!(cmd.argument, None);

        let cmd = Command::parse("CROP ").unwrap().unwrap();
        assert_eq!(cmd.argument, None);
    }

    #[test]
    fn test_parse_blank_and_unknown() {
        assert_eq!(Command::parse("\n").unwrap(), None);
        assert_eq!(Command::parse("   ").unwrap(), None);
        assert!(matches!(
            Command::parse("FLIP 90"),
            Err(EditorError::InvalidCommand)
        ));
        assert!(matches!(
            Command::parse("load in.pgm"),
            Err(EditorError::InvalidCommand)
        ));
        assert!(matches!(
            Command::parse("LOADX in.pgm"),
            Err(EditorError::InvalidCommand)
        ));
    }

    #[test]
    fn test_keyword_round_trip() {
        for k in Keyword::ALL {
            assert_eq!(k.to_string().parse::<Keyword>().unwrap(), k);
        }
    }
}

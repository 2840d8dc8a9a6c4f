//! The editing context
//!
//! [`Editor`] owns at most one image. Every command other than `LOAD`
//! first requires an image, then validates its argument, then runs. A bare
//! `SELECT` is the one exception: it is malformed whether or not an image
//! is loaded.
//! A successful command returns its status line; a failed one returns an
//! [`EditorError`] whose `Display` is the status line.

use crate::args::{self, SelectArgs};
use crate::command::{Command, Keyword};
use crate::{EditorError, EditorResult};
use pnmedit_core::Image;
use pnmedit_filter::apply_filter;
use pnmedit_io::{read_image, write_image};
use pnmedit_transform::{crop, rotate};
use tracing::debug;

/// What the session should do after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print the status line and read the next command
    Continue(String),
    /// Print the status line, if any, and stop
    Exit(Option<String>),
}

/// Editing context holding the loaded image, if any
#[derive(Debug, Default)]
pub struct Editor {
    image: Option<Image>,
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an image already loaded
    pub fn with_image(image: Image) -> Self {
        Self { image: Some(image) }
    }

    pub fn image(&self) -> Option<&Image> {
        self.image.as_ref()
    }

    pub fn is_loaded(&self) -> bool {
        self.image.is_some()
    }

    fn loaded(&self) -> EditorResult<&Image> {
        self.image.as_ref().ok_or(EditorError::NoImage)
    }

    fn loaded_mut(&mut self) -> EditorResult<&mut Image> {
        self.image.as_mut().ok_or(EditorError::NoImage)
    }

    /// Run one parsed command.
    pub fn execute(&mut self, command: &Command<'_>) -> EditorResult<Outcome> {
        let arg = command.argument;
        let status = match command.keyword {
            Keyword::Load => self.load(arg)?,
            Keyword::Select => self.select(arg)?,
            Keyword::Rotate => self.rotate(arg)?,
            Keyword::Crop => self.crop(arg)?,
            Keyword::Apply => self.apply(arg)?,
            Keyword::Save => self.save(arg)?,
            Keyword::Exit => return Ok(Outcome::Exit(self.exit())),
        };
        Ok(Outcome::Continue(status))
    }

    /// `LOAD <path>`: replace the current image with the file's content.
    ///
    /// A failed load leaves no image loaded.
    pub fn load(&mut self, arg: Option<&str>) -> EditorResult<String> {
        let path = args::single_word(arg)?;
        self.image = None;
        let image = read_image(path).map_err(|source| EditorError::LoadFailed {
            path: path.to_string(),
            source,
        })?;
        self.image = Some(image);
        Ok(format!("Loaded {}", path))
    }

    /// `SELECT ALL` or `SELECT x1 y1 x2 y2`.
    pub fn select(&mut self, arg: Option<&str>) -> EditorResult<String> {
        let arg = arg.ok_or(EditorError::InvalidCommand)?;
        let image = self.loaded_mut()?;
        match args::parse_select(Some(arg))? {
            SelectArgs::All => {
                image.select_all();
                Ok("Selected ALL".to_string())
            }
            SelectArgs::Corners(corners) => {
                let selection = args::selection_within(corners, image.width(), image.height())?;
                image.set_selection(selection)?;
                debug!(%selection, "selected");
                Ok(format!("Selected {}", selection))
            }
        }
    }

    /// `ROTATE [+|-]angle`. The status echoes the argument as given.
    pub fn rotate(&mut self, arg: Option<&str>) -> EditorResult<String> {
        let image = self.loaded_mut()?;
        let rotation = args::parse_rotation(arg)?;
        rotate(image, rotation)?;
        Ok(format!("Rotated {}", arg.unwrap_or_default()))
    }

    /// `CROP`: cut the image down to its selection.
    pub fn crop(&mut self, arg: Option<&str>) -> EditorResult<String> {
        let image = self.loaded_mut()?;
        args::no_argument(arg)?;
        crop(image)?;
        Ok("Image cropped".to_string())
    }

    /// `APPLY <filter>` on the selection of a color image.
    pub fn apply(&mut self, arg: Option<&str>) -> EditorResult<String> {
        let image = self.loaded_mut()?;
        let kind = args::parse_filter(arg)?;
        apply_filter(image, kind)?;
        Ok(format!("APPLY {} done", kind))
    }

    /// `SAVE <path> [ascii]`: binary unless a second token is present.
    pub fn save(&self, arg: Option<&str>) -> EditorResult<String> {
        let image = self.loaded()?;
        let target = args::parse_save(arg)?;
        write_image(image, target.path, target.variant).map_err(|source| {
            EditorError::SaveFailed {
                path: target.path.to_string(),
                source,
            }
        })?;
        Ok(format!("Saved {}", target.path))
    }

    /// `EXIT`: release the image.
    ///
    /// # Returns
    ///
    /// `No image loaded` when there was nothing to release.
    pub fn exit(&mut self) -> Option<String> {
        match self.image.take() {
            Some(_) => None,
            None => Some(EditorError::NoImage.to_string()),
        }
    }
}

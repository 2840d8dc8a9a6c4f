//! pnmedit-editor - Command interpreter
//!
//! Reads line-oriented commands and applies them to a single loaded image:
//!
//! ```text
//! LOAD <file>
//! SELECT ALL | SELECT <x1> <y1> <x2> <y2>
//! ROTATE [+|-]<angle>
//! CROP
//! APPLY EDGE | SHARPEN | BLUR | GAUSSIAN_BLUR
//! SAVE <file> [ascii]
//! EXIT
//! ```
//!
//! Each command produces one status line.

pub mod args;
pub mod command;
pub mod editor;
mod error;
pub mod session;

pub use command::{Command, Keyword};
pub use editor::{Editor, Outcome};
pub use error::{EditorError, EditorResult};
pub use session::{SessionOptions, SessionOutcome, run_session};

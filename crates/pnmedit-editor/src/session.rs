//! The command loop

use crate::EditorError;
use crate::command::Command;
use crate::editor::{Editor, Outcome};
use std::io::{self, BufRead, Write};
use tracing::{debug, warn};

/// Session settings
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionOptions {
    /// Write each command line before its status line
    pub echo: bool,
}

/// Summary of a finished session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOutcome {
    /// Number of non-blank lines processed
    pub commands: usize,
    /// `true` if the session ended with `EXIT` rather than end of input
    pub exited: bool,
}

/// Read commands from `input` until `EXIT` or end of input, writing one
/// status line per command to `output`.
///
/// Any image still loaded at end of input is dropped. A line that is not
/// valid UTF-8 is reported as `Invalid command` like any other malformed
/// line.
///
/// # Errors
///
/// Only I/O errors on `input` or `output` end the session early.
pub fn run_session<R, W>(
    mut input: R,
    mut output: W,
    options: SessionOptions,
) -> io::Result<SessionOutcome>
where
    R: BufRead,
    W: Write,
{
    let mut editor = Editor::new();
    let mut buf = Vec::new();
    let mut commands = 0;

    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let Ok(line) = std::str::from_utf8(&buf) else {
            commands += 1;
            let line = String::from_utf8_lossy(&buf);
            echo(&mut output, options, &line)?;
            warn!(line = line.trim_end(), "command line is not valid UTF-8");
            writeln!(output, "{}", EditorError::InvalidCommand)?;
            continue;
        };

        let command = match Command::parse(line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                commands += 1;
                echo(&mut output, options, line)?;
                warn!(line = line.trim_end(), "{}", err);
                writeln!(output, "{}", err)?;
                continue;
            }
        };
        commands += 1;
        echo(&mut output, options, line)?;

        match editor.execute(&command) {
            Ok(Outcome::Continue(status)) => {
                debug!(keyword = %command.keyword, "{}", status);
                writeln!(output, "{}", status)?;
            }
            Ok(Outcome::Exit(status)) => {
                if let Some(status) = status {
                    writeln!(output, "{}", status)?;
                }
                output.flush()?;
                return Ok(SessionOutcome {
                    commands,
                    exited: true,
                });
            }
            Err(err) => {
                warn!(keyword = %command.keyword, error = ?err, "{}", err);
                writeln!(output, "{}", err)?;
            }
        }
    }

    output.flush()?;
    Ok(SessionOutcome {
        commands,
        exited: false,
    })
}

fn echo<W: Write>(output: &mut W, options: SessionOptions, line: &str) -> io::Result<()> {
    if options.echo {
        writeln!(output, "{}", line.trim_end_matches(['\n', '\r']))?;
    }
    Ok(())
}

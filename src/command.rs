//! Text command interface for building canvases.
//!
//! Provides a tiny line-oriented language for placing shapes.
//!
//! # Syntax
//!
//! ```text
//! add rectangle x y width height
//! add circle x y radius
//! add cross x y size
//! show
//! clear
//! help
//! quit | exit
//! ```
//!
//! Tokens are separated by whitespace. Command words and shape kinds are
//! case-insensitive; parameters are decimal `i32` integers.
//!
//! # Example
//!
//! ```rust
//! use trueno_canvas::command::{parse_command, Command};
//!
//! let cmd = parse_command("add cross 10 5 2").unwrap();
//! assert!(matches!(cmd, Some(Command::Add(_))));
//! ```

use std::fmt::Write as FmtWrite;

use crate::error::{Error, Result};
use crate::shape::{Shape, ShapeKind};

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Append a validated shape to the canvas.
    Add(Shape),
    /// Render the canvas.
    Show,
    /// Drop every shape.
    Clear,
    /// Print the command summary.
    Help,
    /// End the session.
    Quit,
}

/// Parse one line of input.
///
/// Returns `Ok(None)` for a blank line.
///
/// # Errors
///
/// Returns an error for an unknown command, a missing or unknown shape kind,
/// a wrong parameter count, a non-integer parameter or a non-positive size.
pub fn parse_command(line: &str) -> Result<Option<Command>> {
    let mut words = line.split_whitespace();
    let Some(word) = words.next() else {
        return Ok(None);
    };

    let command = match word.to_lowercase().as_str() {
        "add" => {
            let kind = words.next().ok_or(Error::MissingShapeKind)?;
            let params: Vec<&str> = words.collect();
            Command::Add(Shape::parse(kind, &params)?)
        }
        "show" => Command::Show,
        "clear" => Command::Clear,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => return Err(Error::UnknownCommand(word.to_string())),
    };
    Ok(Some(command))
}

/// Command summary shown at session start and by `help`.
#[must_use]
pub fn usage_banner() -> String {
    let mut banner = String::from("Commands:\n");
    for kind in ShapeKind::ALL {
        let _ = writeln!(banner, " {}", kind.usage());
    }
    banner.push_str(" show\n clear\n help\n quit\n");
    banner
}

/// One-line, user-facing description of a command error.
#[must_use]
pub fn describe_error(err: &Error) -> String {
    match err {
        Error::MissingShapeKind => {
            "Usage: add [rectangle | circle | cross] parameters".to_string()
        }
        Error::ParameterCount { kind, .. } => format!("Usage: {}", kind.usage()),
        Error::InvalidDimension { kind, .. } => match kind {
            ShapeKind::Rectangle => "Width and Height must be positive".to_string(),
            ShapeKind::Circle => "Radius must be positive".to_string(),
            ShapeKind::Cross => "Size must be positive".to_string(),
        },
        other => other.to_string(),
    }
}

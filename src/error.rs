//! Error types for trueno-canvas operations.

use std::io;
use thiserror::Error;

use crate::shape::ShapeKind;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building shapes, canvases or sessions.
///
/// Every shape error is raised before a [`Shape`](crate::shape::Shape) exists,
/// so a canvas never holds an invalid shape. Rendering itself cannot fail.
#[derive(Error, Debug)]
pub enum Error {
    /// Wrong number of integer parameters for a shape kind.
    #[error("{kind} takes {expected} parameters, got {found}")]
    ParameterCount {
        /// Shape kind being constructed.
        kind: ShapeKind,
        /// Number of parameters the kind requires.
        expected: usize,
        /// Number of parameters supplied.
        found: usize,
    },

    /// A size-like parameter (width, height, radius, size) is zero or negative.
    #[error("{kind} {parameter} must be positive, got {value}")]
    InvalidDimension {
        /// Shape kind being constructed.
        kind: ShapeKind,
        /// Name of the offending parameter.
        parameter: &'static str,
        /// Rejected value.
        value: i32,
    },

    /// Shape kind is not one of rectangle, circle or cross.
    #[error("Unknown shape: {0}")]
    UnknownShapeKind(String),

    /// `add` was issued without a shape kind.
    #[error("Missing shape kind")]
    MissingShapeKind,

    /// A token is not an integer in `i32` range.
    #[error("Invalid integer: {0}")]
    Parse(String),

    /// Command word is not recognised.
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// Canvas or grid dimensions are zero.
    #[error("Invalid grid size: {width}x{height}")]
    InvalidGridSize {
        /// Width in columns.
        width: usize,
        /// Height in rows.
        height: usize,
    },

    /// Background must be a printable ASCII character.
    #[error("Invalid background character: {0:?}")]
    InvalidBackground(char),

    /// Configuration parsing error with line number.
    #[error("configuration error at line {line}: {message}")]
    ConfigParse {
        /// Line number where the error occurred (1-indexed).
        line: usize,
        /// Error message describing the issue.
        message: String,
    },

    /// Configuration file not found.
    #[error("configuration file not found: {0}")]
    ConfigNotFound(String),

    /// I/O error while reading commands or writing output.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

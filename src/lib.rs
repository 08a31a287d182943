//! # Trueno-Canvas
//!
//! Command-driven ASCII rasterizer: place rectangles, circles and crosses on a
//! fixed-size character grid and render it as text.
//!
//! ## Features
//!
//! - **Closed shape set**: [`Shape`](shape::Shape) is an enum, each variant
//!   carries its own fill algorithm
//! - **Clipping**: shapes may lie partly or fully outside the grid; writes
//!   outside are discarded
//! - **Draw order**: shapes paint in insertion order, later shapes win
//! - **Exact disks**: circle membership uses integer distance-squared tests
//! - **Command language**: `add`, `show`, `clear`, `help`, `quit`
//!
//! ## Quick Start
//!
//! ```rust
//! use trueno_canvas::prelude::*;
//!
//! let mut canvas = Canvas::default();
//! canvas.add_shape(Shape::construct(ShapeKind::Rectangle, &[0, 0, 3, 2])?);
//! canvas.add_shape(Shape::construct(ShapeKind::Circle, &[30, 10, 5])?);
//! canvas.add_shape(Shape::construct(ShapeKind::Cross, &[50, 5, 3])?);
//!
//! for row in canvas.render() {
//!     println!("{row}");
//! }
//! # Ok::<(), trueno_canvas::Error>(())
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::module_name_repetitions)]

// ============================================================================
// Core Modules
// ============================================================================

/// Character grid with clipped writes.
pub mod grid;

/// Integer grid geometry.
pub mod geometry;

/// Shape primitives and fill algorithms.
pub mod shape;

/// Ordered shape collection and rendering.
pub mod canvas;

// ============================================================================
// Command Modules
// ============================================================================

/// Text command parsing.
pub mod command;

/// Interactive command loop.
pub mod session;

/// YAML configuration.
pub mod config;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for trueno-canvas operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use trueno_canvas::prelude::*;
/// ```
pub mod prelude {
    pub use crate::canvas::Canvas;
    pub use crate::command::{parse_command, Command};
    pub use crate::config::Config;
    pub use crate::error::{Error, Result};
    pub use crate::geometry::Point;
    pub use crate::grid::Grid;
    pub use crate::session::Session;
    pub use crate::shape::{Circle, Cross, Paint, Rectangle, Shape, ShapeKind};
}

//! Canvas: an ordered list of shapes rendered onto a character grid.
//!
//! Insertion order is draw order. Where shapes overlap, the one added later
//! wins. The grid is not part of the canvas state: every render allocates a
//! fresh one, so rendering is pure and repeatable.

use std::fmt;

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::grid::{Grid, BACKGROUND};
use crate::shape::{Paint, Shape};

/// Default canvas width in columns.
pub const DEFAULT_WIDTH: usize = 60;

/// Default canvas height in rows.
pub const DEFAULT_HEIGHT: usize = 20;

/// Fixed-size canvas owning its shapes.
///
/// # Example
///
/// ```
/// use trueno_canvas::canvas::Canvas;
/// use trueno_canvas::shape::Rectangle;
///
/// let mut canvas = Canvas::default();
/// canvas.add_shape(Rectangle::new(0, 0, 3, 2).unwrap().into());
///
/// let rows = canvas.render();
/// assert_eq!(rows.len(), 20);
/// assert!(rows[0].starts_with("###."));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    height: usize,
    background: char,
    shapes: Vec<Shape>,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            background: BACKGROUND,
            shapes: Vec::new(),
        }
    }
}

impl Canvas {
    /// Create an empty canvas with the default background.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        Self::with_background(width, height, BACKGROUND)
    }

    /// Create an empty canvas with a custom background character.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero, or if `background` is
    /// not a printable ASCII character (space included).
    pub fn with_background(width: usize, height: usize, background: char) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidGridSize { width, height });
        }
        if !(background.is_ascii_graphic() || background == ' ') {
            return Err(Error::InvalidBackground(background));
        }

        Ok(Self {
            width,
            height,
            background,
            shapes: Vec::new(),
        })
    }

    /// Width in columns.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Height in rows.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Background character of a blank cell.
    #[must_use]
    pub const fn background(&self) -> char {
        self.background
    }

    /// Shapes in draw order.
    #[must_use]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Number of shapes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Check whether the canvas holds no shapes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Append a shape; it draws over everything added before it.
    pub fn add_shape(&mut self, shape: Shape) {
        debug!(index = self.shapes.len(), %shape, "shape added");
        self.shapes.push(shape);
    }

    /// Drop every shape.
    pub fn clear(&mut self) {
        debug!(dropped = self.shapes.len(), "canvas cleared");
        self.shapes.clear();
    }

    /// Paint all shapes, in insertion order, onto a fresh grid.
    #[must_use]
    pub fn render_grid(&self) -> Grid {
        let mut grid = Grid::filled(self.width, self.height, self.background);
        for shape in &self.shapes {
            shape.paint(&mut grid);
        }
        trace!(
            width = self.width,
            height = self.height,
            shapes = self.shapes.len(),
            "canvas rendered"
        );
        grid
    }

    /// Render to rows, top first. There are exactly `height` rows of exactly
    /// `width` characters each.
    #[must_use]
    pub fn render(&self) -> Vec<String> {
        self.render_grid().to_lines()
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.render_grid(), f)
    }
}

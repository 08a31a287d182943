//! Filled axis-aligned rectangle.

use std::fmt;

use super::{ensure_positive, Paint, ShapeKind};
use crate::error::Result;
use crate::geometry::Point;
use crate::grid::Grid;

/// Rectangle covering the half-open cells `[x, x+w) x [y, y+h)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rectangle {
    origin: Point,
    width: i32,
    height: i32,
}

impl Rectangle {
    /// Fill character.
    pub const GLYPH: char = '#';

    /// Create a rectangle with top-left corner `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns an error if `width` or `height` is not positive.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Result<Self> {
        ensure_positive(ShapeKind::Rectangle, "width", width)?;
        ensure_positive(ShapeKind::Rectangle, "height", height)?;
        Ok(Self {
            origin: Point::new(x, y),
            width,
            height,
        })
    }

    /// Top-left corner.
    #[must_use]
    pub const fn origin(&self) -> Point {
        self.origin
    }

    /// Width in columns.
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.width
    }

    /// Height in rows.
    #[must_use]
    pub const fn height(&self) -> i32 {
        self.height
    }

    /// Column span `[x, x+w)` in `i64`, so the end never overflows.
    fn columns(&self) -> (i64, i64) {
        let x = i64::from(self.origin.x);
        (x, x + i64::from(self.width))
    }

    fn rows(&self) -> (i64, i64) {
        let y = i64::from(self.origin.y);
        (y, y + i64::from(self.height))
    }
}

impl Paint for Rectangle {
    fn paint(&self, grid: &mut Grid) {
        let (x0, x1) = self.columns();
        let (y0, y1) = self.rows();
        grid.fill_span(x0, x1, y0, y1, Self::GLYPH);
    }

    fn contains(&self, col: i64, row: i64) -> bool {
        let (x0, x1) = self.columns();
        let (y0, y1) = self.rows();
        (x0..x1).contains(&col) && (y0..y1).contains(&row)
    }

    fn glyph(&self) -> char {
        Self::GLYPH
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rectangle {} {} {} {}",
            self.origin.x, self.origin.y, self.width, self.height
        )
    }
}

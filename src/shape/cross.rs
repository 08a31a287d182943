//! Upright "+" cross.

use std::fmt;

use super::{ensure_positive, Paint, ShapeKind};
use crate::error::Result;
use crate::geometry::Point;
use crate::grid::Grid;

/// Vertical and horizontal arms of length `size` on each side of a centre.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cross {
    center: Point,
    size: i32,
}

impl Cross {
    /// Fill character.
    pub const GLYPH: char = '+';

    /// Create a cross centred on `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns an error if `size` is not positive.
    pub fn new(x: i32, y: i32, size: i32) -> Result<Self> {
        ensure_positive(ShapeKind::Cross, "size", size)?;
        Ok(Self {
            center: Point::new(x, y),
            size,
        })
    }

    /// Centre cell.
    #[must_use]
    pub const fn center(&self) -> Point {
        self.center
    }

    /// Arm length on each side of the centre.
    #[must_use]
    pub const fn size(&self) -> i32 {
        self.size
    }
}

impl Paint for Cross {
    fn paint(&self, grid: &mut Grid) {
        let s = i64::from(self.size);
        let (x, y) = (i64::from(self.center.x), i64::from(self.center.y));

        // Vertical arm, then horizontal arm; the centre is written twice.
        grid.fill_span(x, x + 1, y - s, y + s + 1, Self::GLYPH);
        grid.fill_span(x - s, x + s + 1, y, y + 1, Self::GLYPH);
    }

    fn contains(&self, col: i64, row: i64) -> bool {
        let s = i64::from(self.size);
        let (x, y) = (i64::from(self.center.x), i64::from(self.center.y));
        (col == x && (row - y).abs() <= s) || (row == y && (col - x).abs() <= s)
    }

    fn glyph(&self) -> char {
        Self::GLYPH
    }
}

impl fmt::Display for Cross {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cross {} {} {}", self.center.x, self.center.y, self.size)
    }
}

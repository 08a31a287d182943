//! Filled disk.
//!
//! A cell belongs to the disk when its Euclidean distance to the centre is at
//! most the radius, boundary included. The test is done on squared distances
//! in integer arithmetic: for integer centre, cell and radius,
//! `sqrt(dx² + dy²) <= r` holds exactly when `dx² + dy² <= r²`, and the
//! integer form has no rounding at the boundary.

use std::fmt;

use super::{ensure_positive, extent, Paint, ShapeKind};
use crate::error::Result;
use crate::geometry::Point;
use crate::grid::Grid;

/// Disk of integer radius around a centre cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Circle {
    center: Point,
    radius: i32,
}

impl Circle {
    /// Fill character.
    pub const GLYPH: char = 'o';

    /// Create a circle centred on `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns an error if `radius` is not positive.
    pub fn new(x: i32, y: i32, radius: i32) -> Result<Self> {
        ensure_positive(ShapeKind::Circle, "radius", radius)?;
        Ok(Self {
            center: Point::new(x, y),
            radius,
        })
    }

    /// Centre cell.
    #[must_use]
    pub const fn center(&self) -> Point {
        self.center
    }

    /// Radius in cells.
    #[must_use]
    pub const fn radius(&self) -> i32 {
        self.radius
    }

    fn radius_squared(&self) -> i64 {
        let r = i64::from(self.radius);
        r * r
    }
}

impl Paint for Circle {
    fn paint(&self, grid: &mut Grid) {
        let r = i64::from(self.radius);
        let (cx, cy) = (i64::from(self.center.x), i64::from(self.center.y));

        // Scan only the bounding box of the disk, clipped to the grid.
        let col_lo = (cx - r).max(0);
        let col_hi = (cx + r).min(extent(grid.width()) - 1);
        let row_lo = (cy - r).max(0);
        let row_hi = (cy + r).min(extent(grid.height()) - 1);

        let r2 = self.radius_squared();
        for row in row_lo..=row_hi {
            for col in col_lo..=col_hi {
                if self.center.distance_squared(col, row) <= r2 {
                    grid.set(col, row, Self::GLYPH);
                }
            }
        }
    }

    fn contains(&self, col: i64, row: i64) -> bool {
        let r = i64::from(self.radius);
        let (cx, cy) = (i64::from(self.center.x), i64::from(self.center.y));
        if (col - cx).abs() > r || (row - cy).abs() > r {
            return false;
        }
        self.center.distance_squared(col, row) <= self.radius_squared()
    }

    fn glyph(&self) -> char {
        Self::GLYPH
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "circle {} {} {}", self.center.x, self.center.y, self.radius)
    }
}

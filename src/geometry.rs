//! Integer geometry on the character grid.

/// A grid cell position. `x` is the column, `y` the row.
///
/// Coordinates may be negative or beyond the grid; painting clips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance to a cell, computed exactly in `i64`.
    ///
    /// Exact for any cell within `i32::MAX` of the point on both axes.
    #[must_use]
    pub fn distance_squared(self, col: i64, row: i64) -> i64 {
        let dx = i64::from(self.x) - col;
        let dy = i64::from(self.y) - row;
        dx * dx + dy * dy
    }

    /// Euclidean distance to a cell.
    #[must_use]
    pub fn distance(self, col: i64, row: i64) -> f64 {
        let dx = (i64::from(self.x) - col) as f64;
        let dy = (i64::from(self.y) - row) as f64;
        (dx * dx + dy * dy).sqrt()
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

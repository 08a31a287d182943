//! Character grid for ASCII rasterization.
//!
//! A [`Grid`] is a row-major buffer of characters. All writes take signed
//! coordinates and are clipped against the grid bounds: a write outside
//! `[0, width) x [0, height)` is discarded, never an error and never wrapped.

use std::fmt;

use crate::error::{Error, Result};

/// Default background character.
pub const BACKGROUND: char = '.';

/// Row-major character buffer with clipped writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Width in columns.
    width: usize,
    /// Height in rows.
    height: usize,
    /// Cells in row-major order, `width * height` long.
    cells: Vec<char>,
}

impl Grid {
    /// Create a grid filled with `background`.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use trueno_canvas::grid::Grid;
    ///
    /// let grid = Grid::new(60, 20, '.').unwrap();
    /// assert_eq!(grid.width(), 60);
    /// assert_eq!(grid.height(), 20);
    /// ```
    pub fn new(width: usize, height: usize, background: char) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidGridSize { width, height });
        }

        Ok(Self::filled(width, height, background))
    }

    /// Create a grid without checking dimensions. Callers guarantee both are
    /// non-zero.
    pub(crate) fn filled(width: usize, height: usize, background: char) -> Self {
        Self {
            width,
            height,
            cells: vec![background; width * height],
        }
    }

    /// Get the width in columns.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Get the height in rows.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Get the total number of cells.
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Check whether `(x, y)` lies inside the grid.
    #[inline]
    #[must_use]
    pub fn contains(&self, x: i64, y: i64) -> bool {
        self.index(x, y).is_some()
    }

    /// Get the character at `(x, y)`, or `None` when out of bounds.
    #[must_use]
    pub fn get(&self, x: i64, y: i64) -> Option<char> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set the character at `(x, y)`.
    ///
    /// Does nothing if the coordinates are out of bounds.
    #[inline]
    pub fn set(&mut self, x: i64, y: i64, glyph: char) {
        if let Some(idx) = self.index(x, y) {
            self.cells[idx] = glyph;
        }
    }

    /// Fill the half-open region `[x0, x1) x [y0, y1)`.
    ///
    /// The region is clipped to the grid; an empty or fully outside region
    /// writes nothing.
    pub fn fill_span(&mut self, x0: i64, x1: i64, y0: i64, y1: i64, glyph: char) {
        let (Some((cx0, cx1)), Some((cy0, cy1))) =
            (clip_span(x0, x1, self.width), clip_span(y0, y1, self.height))
        else {
            return;
        };

        for row in cy0..cy1 {
            let start = row * self.width;
            self.cells[start + cx0..start + cx1].fill(glyph);
        }
    }

    /// Reset every cell to `background`.
    pub fn clear(&mut self, background: char) {
        self.cells.fill(background);
    }

    /// Get a row of cells as a slice.
    #[must_use]
    pub fn row(&self, y: usize) -> Option<&[char]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.width;
        Some(&self.cells[start..start + self.width])
    }

    /// Iterate over rows, top first.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.cells.chunks_exact(self.width)
    }

    /// Collect rows into strings, top first. Each string is `width` characters.
    #[must_use]
    pub fn to_lines(&self) -> Vec<String> {
        self.rows().map(|row| row.iter().collect()).collect()
    }

    /// Count cells holding `glyph`.
    #[must_use]
    pub fn count(&self, glyph: char) -> usize {
        self.cells.iter().filter(|&&c| c == glyph).count()
    }

    /// Calculate the cell index for a coordinate.
    #[inline]
    fn index(&self, x: i64, y: i64) -> Option<usize> {
        let col = usize::try_from(x).ok().filter(|&c| c < self.width)?;
        let row = usize::try_from(y).ok().filter(|&r| r < self.height)?;
        Some(row * self.width + col)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for &c in row {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}

/// Clip the half-open span `[start, end)` to `[0, len)`.
///
/// Returns `None` when nothing of the span is visible.
fn clip_span(start: i64, end: i64, len: usize) -> Option<(usize, usize)> {
    let len = i64::try_from(len).unwrap_or(i64::MAX);
    let lo = start.clamp(0, len);
    let hi = end.clamp(0, len);
    if lo >= hi {
        return None;
    }
    Some((lo as usize, hi as usize))
}

//! Shape primitives and their rasterization.
//!
//! A [`Shape`] is a closed set of variants ([`Rectangle`], [`Circle`],
//! [`Cross`]). Each variant owns its fill algorithm through the [`Paint`]
//! trait; [`Shape`] dispatches with a `match`, so adding a primitive is a
//! compile error everywhere it is not handled.
//!
//! # Construction
//!
//! Shapes are validated on construction. Size-like parameters must be
//! positive; coordinates may be anything, painting clips them.
//!
//! ```
//! use trueno_canvas::shape::{Shape, ShapeKind};
//!
//! let rect = Shape::construct(ShapeKind::Rectangle, &[1, 2, 3, 4]).unwrap();
//! assert_eq!(rect.kind(), ShapeKind::Rectangle);
//!
//! assert!(Shape::construct(ShapeKind::Circle, &[1, 2, -3]).is_err());
//! ```

mod circle;
mod cross;
mod rectangle;

pub use circle::Circle;
pub use cross::Cross;
pub use rectangle::Rectangle;

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::grid::Grid;

/// Trait for primitives that rasterize onto a [`Grid`].
pub trait Paint {
    /// Paint this primitive onto `grid`, discarding out-of-bounds cells.
    fn paint(&self, grid: &mut Grid);

    /// Check whether the cell `(col, row)` belongs to this primitive,
    /// ignoring grid bounds.
    fn contains(&self, col: i64, row: i64) -> bool;

    /// Character written into covered cells.
    fn glyph(&self) -> char;
}

// ============================================================================
// Shape kinds
// ============================================================================

/// The kinds of shape the canvas understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// Axis-aligned filled rectangle.
    Rectangle,
    /// Filled disk.
    Circle,
    /// Upright "+" cross.
    Cross,
}

impl ShapeKind {
    /// All shape kinds, in banner order.
    pub const ALL: [Self; 3] = [Self::Rectangle, Self::Circle, Self::Cross];

    /// Lowercase command name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rectangle => "rectangle",
            Self::Circle => "circle",
            Self::Cross => "cross",
        }
    }

    /// Parameter names, in the order they are given.
    #[must_use]
    pub const fn parameters(self) -> &'static [&'static str] {
        match self {
            Self::Rectangle => &["x", "y", "width", "height"],
            Self::Circle => &["x", "y", "radius"],
            Self::Cross => &["x", "y", "size"],
        }
    }

    /// Number of integer parameters this kind takes.
    #[must_use]
    pub const fn arity(self) -> usize {
        self.parameters().len()
    }

    /// Usage line for `add` with this kind, e.g. `add circle x y radius`.
    #[must_use]
    pub fn usage(self) -> String {
        format!("add {} {}", self.name(), self.parameters().join(" "))
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "rectangle" => Ok(Self::Rectangle),
            "circle" => Ok(Self::Circle),
            "cross" => Ok(Self::Cross),
            _ => Err(Error::UnknownShapeKind(s.to_string())),
        }
    }
}

// ============================================================================
// Shape
// ============================================================================

/// One validated primitive, owned by value in a canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Filled rectangle.
    Rectangle(Rectangle),
    /// Filled disk.
    Circle(Circle),
    /// "+" cross.
    Cross(Cross),
}

impl Shape {
    /// Build a shape from its kind and integer parameters.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ParameterCount`] if `params` has the wrong length for
    /// `kind`, or [`Error::InvalidDimension`] if a size-like parameter is not
    /// positive.
    pub fn construct(kind: ShapeKind, params: &[i32]) -> Result<Self> {
        match (kind, params) {
            (ShapeKind::Rectangle, &[x, y, w, h]) => Ok(Rectangle::new(x, y, w, h)?.into()),
            (ShapeKind::Circle, &[x, y, r]) => Ok(Circle::new(x, y, r)?.into()),
            (ShapeKind::Cross, &[x, y, s]) => Ok(Cross::new(x, y, s)?.into()),
            _ => Err(Error::ParameterCount {
                kind,
                expected: kind.arity(),
                found: params.len(),
            }),
        }
    }

    /// Build a shape from raw tokens: a kind name and integer strings.
    ///
    /// Checks run in order: kind, parameter count, integer syntax, dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownShapeKind`], [`Error::ParameterCount`],
    /// [`Error::Parse`] or [`Error::InvalidDimension`].
    pub fn parse(kind: &str, tokens: &[&str]) -> Result<Self> {
        let kind: ShapeKind = kind.parse()?;
        if tokens.len() != kind.arity() {
            return Err(Error::ParameterCount {
                kind,
                expected: kind.arity(),
                found: tokens.len(),
            });
        }

        let params = tokens
            .iter()
            .map(|&t| parse_int(t))
            .collect::<Result<Vec<_>>>()?;
        Self::construct(kind, &params)
    }

    /// Get the kind of this shape.
    #[must_use]
    pub const fn kind(&self) -> ShapeKind {
        match self {
            Self::Rectangle(_) => ShapeKind::Rectangle,
            Self::Circle(_) => ShapeKind::Circle,
            Self::Cross(_) => ShapeKind::Cross,
        }
    }
}

impl Paint for Shape {
    fn paint(&self, grid: &mut Grid) {
        match self {
            Self::Rectangle(rect) => rect.paint(grid),
            Self::Circle(circle) => circle.paint(grid),
            Self::Cross(cross) => cross.paint(grid),
        }
    }

    fn contains(&self, col: i64, row: i64) -> bool {
        match self {
            Self::Rectangle(rect) => rect.contains(col, row),
            Self::Circle(circle) => circle.contains(col, row),
            Self::Cross(cross) => cross.contains(col, row),
        }
    }

    fn glyph(&self) -> char {
        match self {
            Self::Rectangle(rect) => rect.glyph(),
            Self::Circle(circle) => circle.glyph(),
            Self::Cross(cross) => cross.glyph(),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rectangle(rect) => fmt::Display::fmt(rect, f),
            Self::Circle(circle) => fmt::Display::fmt(circle, f),
            Self::Cross(cross) => fmt::Display::fmt(cross, f),
        }
    }
}

impl From<Rectangle> for Shape {
    fn from(rect: Rectangle) -> Self {
        Self::Rectangle(rect)
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Self::Circle(circle)
    }
}

impl From<Cross> for Shape {
    fn from(cross: Cross) -> Self {
        Self::Cross(cross)
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Parse one integer token.
fn parse_int(token: &str) -> Result<i32> {
    token
        .parse::<i32>()
        .map_err(|_| Error::Parse(token.to_string()))
}

/// Reject a size-like parameter that is zero or negative.
fn ensure_positive(kind: ShapeKind, parameter: &'static str, value: i32) -> Result<()> {
    if value <= 0 {
        return Err(Error::InvalidDimension {
            kind,
            parameter,
            value,
        });
    }
    Ok(())
}

/// Grid extent as a signed coordinate bound.
#[inline]
fn extent(len: usize) -> i64 {
    i64::try_from(len).unwrap_or(i64::MAX)
}

//! Rasterization Falsification Tests
//!
//! Each test is a falsifiable claim about the rendered grid, checked against
//! randomly generated shapes with proptest.
//!
//! Run: cargo test --test rasterization_falsification_test

#![allow(clippy::unwrap_used, clippy::needless_range_loop)]

use proptest::prelude::*;

use trueno_canvas::prelude::*;

const WIDTH: usize = 60;
const HEIGHT: usize = 20;

/// Render one shape on a blank default-size canvas.
fn render_one(shape: Shape) -> Vec<Vec<char>> {
    let mut canvas = Canvas::default();
    canvas.add_shape(shape);
    canvas
        .render()
        .iter()
        .map(|row| row.chars().collect())
        .collect()
}

fn arb_rectangle() -> impl Strategy<Value = Shape> {
    (-30i32..90, -30i32..50, 1i32..50, 1i32..30)
        .prop_map(|(x, y, w, h)| Shape::construct(ShapeKind::Rectangle, &[x, y, w, h]).unwrap())
}

fn arb_circle() -> impl Strategy<Value = Shape> {
    (-30i32..90, -30i32..50, 1i32..35)
        .prop_map(|(x, y, r)| Shape::construct(ShapeKind::Circle, &[x, y, r]).unwrap())
}

fn arb_cross() -> impl Strategy<Value = Shape> {
    (-30i32..90, -30i32..50, 1i32..40)
        .prop_map(|(x, y, s)| Shape::construct(ShapeKind::Cross, &[x, y, s]).unwrap())
}

fn arb_shape() -> impl Strategy<Value = Shape> {
    prop_oneof![arb_rectangle(), arb_circle(), arb_cross()]
}

// ============================================================================
// SECTION 1: PER-SHAPE CELL PREDICATES
// ============================================================================

proptest! {
    /// Claim 1: a rectangle paints exactly the cells of [x, x+w) x [y, y+h)
    /// that fall inside the grid.
    #[test]
    fn claim_01_rectangle_cells(x in -30i32..90, y in -30i32..50, w in 1i32..50, h in 1i32..30) {
        let grid = render_one(Shape::construct(ShapeKind::Rectangle, &[x, y, w, h]).unwrap());

        for r in 0..HEIGHT {
            for c in 0..WIDTH {
                let (ri, ci) = (r as i32, c as i32);
                let inside = x <= ci && ci < x + w && y <= ri && ri < y + h;
                let expected = if inside { '#' } else { '.' };
                prop_assert_eq!(grid[r][c], expected, "cell ({}, {})", r, c);
            }
        }
    }

    /// Claim 2: a circle paints exactly the cells with
    /// (x-c)^2 + (y-r)^2 <= radius^2.
    #[test]
    fn claim_02_circle_cells(x in -30i32..90, y in -30i32..50, radius in 1i32..35) {
        let grid = render_one(Shape::construct(ShapeKind::Circle, &[x, y, radius]).unwrap());

        for r in 0..HEIGHT {
            for c in 0..WIDTH {
                let (dx, dy) = (x - c as i32, y - r as i32);
                let inside = dx * dx + dy * dy <= radius * radius;
                let expected = if inside { 'o' } else { '.' };
                prop_assert_eq!(grid[r][c], expected, "cell ({}, {})", r, c);
            }
        }
    }

    /// Claim 3: the integer disk test agrees with the floating-point
    /// distance test for every cell.
    #[test]
    fn claim_03_circle_matches_sqrt(x in -30i32..90, y in -30i32..50, radius in 1i32..35) {
        let grid = render_one(Shape::construct(ShapeKind::Circle, &[x, y, radius]).unwrap());

        for r in 0..HEIGHT {
            for c in 0..WIDTH {
                let dx = f64::from(x) - c as f64;
                let dy = f64::from(y) - r as f64;
                let inside = (dx * dx + dy * dy).sqrt() <= f64::from(radius);
                prop_assert_eq!(grid[r][c] == 'o', inside, "cell ({}, {})", r, c);
            }
        }
    }

    /// Claim 4: a cross paints exactly the "+" arms.
    #[test]
    fn claim_04_cross_cells(x in -30i32..90, y in -30i32..50, size in 1i32..40) {
        let grid = render_one(Shape::construct(ShapeKind::Cross, &[x, y, size]).unwrap());

        for r in 0..HEIGHT {
            for c in 0..WIDTH {
                let (ri, ci) = (r as i32, c as i32);
                let inside = (ci == x && (ri - y).abs() <= size)
                    || (ri == y && (ci - x).abs() <= size);
                let expected = if inside { '+' } else { '.' };
                prop_assert_eq!(grid[r][c], expected, "cell ({}, {})", r, c);
            }
        }
    }
}

// ============================================================================
// SECTION 2: CANVAS LAWS
// ============================================================================

proptest! {
    /// Claim 5: where two shapes overlap, the one added later wins; every
    /// other cell belongs to whichever shape covers it, or is background.
    #[test]
    fn claim_05_last_write_wins(a in arb_shape(), b in arb_shape()) {
        let mut canvas = Canvas::default();
        canvas.add_shape(a);
        canvas.add_shape(b);
        let grid = canvas.render_grid();

        for r in 0..HEIGHT as i64 {
            for c in 0..WIDTH as i64 {
                let expected = if b.contains(c, r) {
                    b.glyph()
                } else if a.contains(c, r) {
                    a.glyph()
                } else {
                    '.'
                };
                prop_assert_eq!(grid.get(c, r), Some(expected), "cell ({}, {})", r, c);
            }
        }
    }

    /// Claim 6: rendering twice without changes yields identical output.
    #[test]
    fn claim_06_render_idempotent(shapes in prop::collection::vec(arb_shape(), 0..8)) {
        let mut canvas = Canvas::default();
        for shape in shapes {
            canvas.add_shape(shape);
        }
        let first = canvas.render();
        let second = canvas.render();
        prop_assert_eq!(first, second);
    }

    /// Claim 7: output always has `height` rows of `width` characters,
    /// whatever lies outside the grid.
    #[test]
    fn claim_07_output_shape(
        width in 1usize..80,
        height in 1usize..40,
        shapes in prop::collection::vec(arb_shape(), 0..8),
    ) {
        let mut canvas = Canvas::new(width, height).unwrap();
        for shape in shapes {
            canvas.add_shape(shape);
        }
        let rows = canvas.render();
        prop_assert_eq!(rows.len(), height);
        for row in &rows {
            prop_assert_eq!(row.chars().count(), width);
        }
    }

    /// Claim 8: a canvas renders the same as painting its shapes one by one
    /// onto a blank grid.
    #[test]
    fn claim_08_render_equals_sequential_paint(shapes in prop::collection::vec(arb_shape(), 0..8)) {
        let mut canvas = Canvas::default();
        let mut grid = Grid::new(WIDTH, HEIGHT, '.').unwrap();
        for shape in shapes {
            shape.paint(&mut grid);
            canvas.add_shape(shape);
        }
        prop_assert_eq!(canvas.render_grid(), grid);
    }
}

// ============================================================================
// SECTION 3: CLIPPING AND VALIDATION
// ============================================================================

proptest! {
    /// Claim 9: a shape entirely outside the grid leaves it blank.
    #[test]
    fn claim_09_fully_outside_is_noop(offset in 0i32..1_000_000, size in 1i32..1000) {
        let shapes = [
            Shape::construct(ShapeKind::Rectangle, &[-offset - size, 0, size, 5]).unwrap(),
            Shape::construct(ShapeKind::Circle, &[60 + size + offset, 10, size]).unwrap(),
            Shape::construct(ShapeKind::Cross, &[30, -offset - size - 1, size]).unwrap(),
        ];
        for shape in shapes {
            let grid = render_one(shape);
            prop_assert!(grid.iter().flatten().all(|&c| c == '.'), "{} painted", shape);
        }
    }

    /// Claim 10: no size-like parameter <= 0 is ever accepted.
    #[test]
    fn claim_10_non_positive_sizes_rejected(bad in i32::MIN..=0, good in 1i32..100) {
        let is_dim_err = |r: trueno_canvas::Result<Shape>| matches!(r, Err(Error::InvalidDimension { .. }));

        prop_assert!(is_dim_err(Shape::construct(ShapeKind::Rectangle, &[0, 0, bad, good])));
        prop_assert!(is_dim_err(Shape::construct(ShapeKind::Rectangle, &[0, 0, good, bad])));
        prop_assert!(is_dim_err(Shape::construct(ShapeKind::Circle, &[0, 0, bad])));
        prop_assert!(is_dim_err(Shape::construct(ShapeKind::Cross, &[0, 0, bad])));
    }
}

// ============================================================================
// SECTION 4: FIXED SCENARIOS
// ============================================================================

/// Claim 11: 60x20 blank canvas plus rectangle(0, 0, 3, 2).
#[test]
fn claim_11_default_canvas_scenario() {
    let mut canvas = Canvas::default();
    canvas.add_shape(Shape::construct(ShapeKind::Rectangle, &[0, 0, 3, 2]).unwrap());

    let rows = canvas.render();
    assert_eq!(rows.len(), 20);
    for row in &rows[..2] {
        assert_eq!(row, &format!("###{}", ".".repeat(57)));
    }
    for row in &rows[2..] {
        assert_eq!(row, &".".repeat(60));
    }
}

/// Claim 12: the documented validation rejections.
#[test]
fn claim_12_validation_rejections() {
    assert!(matches!(
        Shape::construct(ShapeKind::Rectangle, &[1, 2, 0, 5]),
        Err(Error::InvalidDimension { .. })
    ));
    assert!(matches!(
        Shape::construct(ShapeKind::Circle, &[1, 2, -3]),
        Err(Error::InvalidDimension { .. })
    ));
    assert!(matches!(
        Shape::parse("triangle", &["1", "2", "3"]),
        Err(Error::UnknownShapeKind(_))
    ));
    assert!(matches!(
        Shape::construct(ShapeKind::Rectangle, &[1, 2, 3]),
        Err(Error::ParameterCount { .. })
    ));
}

/// Claim 13: a mixed scene renders as drawn by hand.
#[test]
fn claim_13_mixed_scene() {
    let mut canvas = Canvas::new(9, 5).unwrap();
    canvas.add_shape(Rectangle::new(0, 0, 9, 1).unwrap().into());
    canvas.add_shape(Circle::new(2, 2, 1).unwrap().into());
    canvas.add_shape(Cross::new(6, 2, 2).unwrap().into());

    assert_eq!(
        canvas.render(),
        vec![
            "######+##",
            "..o...+..",
            ".ooo+++++",
            "..o...+..",
            "......+..",
        ]
    );
}

//! Shapes that can be drawn on the canvas and transformed.

use std::fmt::{self, Display};

use cushy::figures::Point;

/// A rectangle defined by two opposite corners.
///
/// The corners do not need to be normalized: dragging up and to the left
/// produces a rectangle whose `first` corner is below and to the right of its
/// `second` corner. All operations preserve the corners as given.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    /// The corner where the rectangle was anchored.
    pub first: Point<f32>,
    /// The corner opposite of `first`.
    pub second: Point<f32>,
}

impl Rectangle {
    /// Returns a rectangle spanning `first` to `second`.
    #[must_use]
    pub const fn new(first: Point<f32>, second: Point<f32>) -> Self {
        Self { first, second }
    }

    /// Returns a rectangle from the coordinates `(x1, y1)`-`(x2, y2)`.
    #[must_use]
    pub fn from_coords(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    /// Returns the four corners in drawing order: `(x1, y1)`, `(x2, y1)`,
    /// `(x2, y2)`, `(x1, y2)`.
    #[must_use]
    pub fn corners(&self) -> [Point<f32>; 4] {
        let Self { first, second } = *self;
        [
            first,
            Point::new(second.x, first.y),
            second,
            Point::new(first.x, second.y),
        ]
    }

    /// Returns the midpoint of the two defining corners.
    #[must_use]
    pub fn centroid(&self) -> Point<f32> {
        Point::new(
            (self.first.x + self.second.x) / 2.,
            (self.first.y + self.second.y) / 2.,
        )
    }

    /// Returns the horizontal extent of this rectangle, ignoring direction.
    #[must_use]
    pub fn width(&self) -> f32 {
        (self.second.x - self.first.x).abs()
    }

    /// Returns the vertical extent of this rectangle, ignoring direction.
    #[must_use]
    pub fn height(&self) -> f32 {
        (self.second.y - self.first.y).abs()
    }
}

impl Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_corners(f, &self.corners())
    }
}

/// The outline of a shape on the canvas.
///
/// Translating or scaling a rectangle keeps it axis-aligned, while rotating
/// it produces an arbitrary quadrilateral.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outline {
    /// An axis-aligned rectangle.
    Rectangle(Rectangle),
    /// Four corners in drawing order.
    Quad([Point<f32>; 4]),
}

impl Outline {
    /// Returns the four corners of this outline in drawing order.
    #[must_use]
    pub fn corners(&self) -> [Point<f32>; 4] {
        match self {
            Outline::Rectangle(rect) => rect.corners(),
            Outline::Quad(corners) => *corners,
        }
    }

    /// Returns the point rotations and scales are applied around.
    ///
    /// For rectangles this is the midpoint of the defining corners, which is
    /// the same as the mean of all four corners.
    #[must_use]
    pub fn centroid(&self) -> Point<f32> {
        match self {
            Outline::Rectangle(rect) => rect.centroid(),
            Outline::Quad(corners) => {
                let (x, y) = corners
                    .iter()
                    .fold((0., 0.), |(x, y), corner| (x + corner.x, y + corner.y));
                Point::new(x / 4., y / 4.)
            }
        }
    }

    /// Returns true if every corner of `self` is within `tolerance` of the
    /// corresponding corner of `other`.
    #[must_use]
    pub fn approx_eq(&self, other: &Outline, tolerance: f32) -> bool {
        self.corners()
            .iter()
            .zip(other.corners().iter())
            .all(|(a, b)| (a.x - b.x).abs() <= tolerance && (a.y - b.y).abs() <= tolerance)
    }
}

impl From<Rectangle> for Outline {
    fn from(rect: Rectangle) -> Self {
        Self::Rectangle(rect)
    }
}

impl Display for Outline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_corners(f, &self.corners())
    }
}

fn write_corners(f: &mut fmt::Formatter<'_>, corners: &[Point<f32>; 4]) -> fmt::Result {
    for (index, corner) in corners.iter().enumerate() {
        if index > 0 {
            f.write_str(" ")?;
        }
        write!(f, "({:.1}, {:.1})", corner.x, corner.y)?;
    }
    Ok(())
}

//! The affine transform calculator.
//!
//! Every transform is applied to an [`Outline`] and returns a new outline,
//! leaving the input untouched. Rotations and scales happen around the
//! outline's centroid.

use std::fmt::{self, Display};

use cushy::figures::Point;

use crate::geometry::{Outline, Rectangle};
use crate::parameters::TransformKind;

/// A single 2D affine transformation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    /// Shift by `dx` horizontally and `dy` vertically.
    Translate {
        /// The horizontal offset.
        dx: f32,
        /// The vertical offset.
        dy: f32,
    },
    /// Rotate around the centroid.
    ///
    /// The rotation matrix is applied to screen coordinates where Y grows
    /// downward, so positive angles appear clockwise on screen.
    Rotate {
        /// The rotation angle in degrees.
        degrees: f32,
    },
    /// Scale each axis independently around the centroid.
    ///
    /// Zero and negative factors are allowed and produce degenerate or
    /// mirrored shapes.
    Scale {
        /// The horizontal scale factor.
        sx: f32,
        /// The vertical scale factor.
        sy: f32,
    },
}

impl Transform {
    /// Returns a translation by `(dx, dy)`.
    #[must_use]
    pub const fn translate(dx: f32, dy: f32) -> Self {
        Self::Translate { dx, dy }
    }

    /// Returns a rotation by `degrees`.
    #[must_use]
    pub const fn rotate(degrees: f32) -> Self {
        Self::Rotate { degrees }
    }

    /// Returns a scale by `(sx, sy)`.
    #[must_use]
    pub const fn scale(sx: f32, sy: f32) -> Self {
        Self::Scale { sx, sy }
    }

    /// Returns which kind of transform this is.
    #[must_use]
    pub const fn kind(&self) -> TransformKind {
        match self {
            Transform::Translate { .. } => TransformKind::Translate,
            Transform::Rotate { .. } => TransformKind::Rotate,
            Transform::Scale { .. } => TransformKind::Scale,
        }
    }

    /// Returns the transform that undoes this one.
    ///
    /// Scales with a zero factor have no inverse and return `None`.
    #[must_use]
    pub fn inverse(&self) -> Option<Self> {
        match *self {
            Transform::Translate { dx, dy } => Some(Self::translate(-dx, -dy)),
            Transform::Rotate { degrees } => Some(Self::rotate(-degrees)),
            Transform::Scale { sx, sy } if sx != 0. && sy != 0. => {
                Some(Self::scale(sx.recip(), sy.recip()))
            }
            Transform::Scale { .. } => None,
        }
    }

    /// Applies this transform to `outline`.
    #[must_use]
    pub fn apply(&self, outline: &Outline) -> Outline {
        match *self {
            Transform::Translate { dx, dy } => translate(outline, dx, dy),
            Transform::Rotate { degrees } => Outline::Quad(rotate(outline, degrees)),
            Transform::Scale { sx, sy } => scale(outline, sx, sy),
        }
    }

    /// Applies this transform to `rect`.
    #[must_use]
    pub fn apply_to_rectangle(&self, rect: &Rectangle) -> Outline {
        self.apply(&Outline::Rectangle(*rect))
    }
}

impl Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transform::Translate { dx, dy } => write!(f, "translate by ({dx}, {dy})"),
            Transform::Rotate { degrees } => write!(f, "rotate by {degrees}°"),
            Transform::Scale { sx, sy } => write!(f, "scale by ({sx}, {sy})"),
        }
    }
}

/// Shifts every corner of `outline` by `(dx, dy)`.
#[must_use]
pub fn translate(outline: &Outline, dx: f32, dy: f32) -> Outline {
    let shift = |point: Point<f32>| Point::new(point.x + dx, point.y + dy);
    match outline {
        Outline::Rectangle(rect) => {
            Outline::Rectangle(Rectangle::new(shift(rect.first), shift(rect.second)))
        }
        Outline::Quad(corners) => Outline::Quad(corners.map(shift)),
    }
}

/// Rotates each corner of `outline` by `degrees` around its centroid.
#[must_use]
pub fn rotate(outline: &Outline, degrees: f32) -> [Point<f32>; 4] {
    let center = outline.centroid();
    let (sin, cos) = degrees.to_radians().sin_cos();
    outline.corners().map(|corner| {
        let x = corner.x - center.x;
        let y = corner.y - center.y;
        Point::new(x * cos - y * sin + center.x, x * sin + y * cos + center.y)
    })
}

/// Scales `outline` by `(sx, sy)` around its centroid.
///
/// Rectangles only have their two defining corners scaled, which keeps them
/// axis-aligned.
#[must_use]
pub fn scale(outline: &Outline, sx: f32, sy: f32) -> Outline {
    let center = outline.centroid();
    let scale_point = |point: Point<f32>| {
        Point::new(
            center.x + (point.x - center.x) * sx,
            center.y + (point.y - center.y) * sy,
        )
    };
    match outline {
        Outline::Rectangle(rect) => Outline::Rectangle(Rectangle::new(
            scale_point(rect.first),
            scale_point(rect.second),
        )),
        Outline::Quad(corners) => Outline::Quad(corners.map(scale_point)),
    }
}

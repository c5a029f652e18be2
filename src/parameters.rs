//! User-supplied transform parameters.

use std::fmt::{self, Display};
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::transform::Transform;
use crate::Error;

/// The slider range for translation offsets, in pixels.
pub const TRANSLATE_RANGE: RangeInclusive<f32> = -50.0..=50.0;
/// The slider range for rotation angles, in degrees.
pub const ROTATE_RANGE: RangeInclusive<f32> = 0.0..=360.0;
/// The slider range for scale factors. `2.0` is 200%.
pub const SCALE_RANGE: RangeInclusive<f32> = 0.0..=2.0;

/// The kinds of transformations that can be applied to a rectangle.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
pub enum TransformKind {
    /// Shift the rectangle.
    #[default]
    Translate,
    /// Rotate the rectangle around its center.
    Rotate,
    /// Scale the rectangle around its center.
    Scale,
}

impl TransformKind {
    /// All kinds, in the order they are presented to the user.
    pub const ALL: [Self; 3] = [Self::Translate, Self::Rotate, Self::Scale];

    /// Returns the parameters this kind of transform needs, in the order they
    /// are requested.
    #[must_use]
    pub const fn parameters(self) -> &'static [ParameterInfo] {
        match self {
            TransformKind::Translate => &[
                ParameterInfo {
                    name: "dx",
                    prompt: "Enter X translation (dx): ",
                },
                ParameterInfo {
                    name: "dy",
                    prompt: "Enter Y translation (dy): ",
                },
            ],
            TransformKind::Rotate => &[ParameterInfo {
                name: "angle",
                prompt: "Enter rotation angle (in degrees): ",
            }],
            TransformKind::Scale => &[
                ParameterInfo {
                    name: "sx",
                    prompt: "Enter X scaling factor (sx): ",
                },
                ParameterInfo {
                    name: "sy",
                    prompt: "Enter Y scaling factor (sy): ",
                },
            ],
        }
    }

    /// Builds a transform of this kind from `values`, which must be given in
    /// the order of [`Self::parameters()`].
    ///
    /// Returns `None` if the number of values does not match.
    #[must_use]
    pub fn with_values(self, values: &[f32]) -> Option<Transform> {
        match (self, values) {
            (TransformKind::Translate, &[dx, dy]) => Some(Transform::translate(dx, dy)),
            (TransformKind::Rotate, &[degrees]) => Some(Transform::rotate(degrees)),
            (TransformKind::Scale, &[sx, sy]) => Some(Transform::scale(sx, sy)),
            _ => None,
        }
    }

    /// Returns the capitalized name of this kind, for display.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            TransformKind::Translate => "Translate",
            TransformKind::Rotate => "Rotate",
            TransformKind::Scale => "Scale",
        }
    }

    /// Returns the lowercase name of this kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            TransformKind::Translate => "translate",
            TransformKind::Rotate => "rotate",
            TransformKind::Scale => "scale",
        }
    }
}

impl Display for TransformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TransformKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownCommand(s.to_string()))
    }
}

/// A named numeric input of a transform.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct ParameterInfo {
    /// The short name of the parameter.
    pub name: &'static str,
    /// The text shown when asking the user for this parameter.
    pub prompt: &'static str,
}

impl ParameterInfo {
    /// Parses `input` as a value for this parameter.
    pub fn parse(&self, input: &str) -> Result<f32, Error> {
        parse_parameter(self.name, input)
    }
}

/// The current value of every transform parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    /// The horizontal translation.
    pub dx: f32,
    /// The vertical translation.
    pub dy: f32,
    /// The rotation angle in degrees.
    pub degrees: f32,
    /// The horizontal scale factor.
    pub sx: f32,
    /// The vertical scale factor.
    pub sy: f32,
}

impl Parameters {
    /// Returns the transform of `kind` using these parameters.
    #[must_use]
    pub const fn transform(&self, kind: TransformKind) -> Transform {
        match kind {
            TransformKind::Translate => Transform::translate(self.dx, self.dy),
            TransformKind::Rotate => Transform::rotate(self.degrees),
            TransformKind::Scale => Transform::scale(self.sx, self.sy),
        }
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            dx: 0.,
            dy: 0.,
            degrees: 0.,
            sx: 1.,
            sy: 1.,
        }
    }
}

/// Parses `input` as a finite number for the parameter named `parameter`.
///
/// Surrounding whitespace is ignored. NaN and infinite values are rejected.
pub fn parse_parameter(parameter: &'static str, input: &str) -> Result<f32, Error> {
    match input.trim().parse::<f32>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(Error::InvalidNumber {
            parameter,
            input: input.trim().to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_parameter, Parameters, TransformKind};
    use crate::geometry::{Outline, Rectangle};
    use crate::transform::Transform;
    use crate::Error;

    #[test]
    fn defaults_are_identities() {
        let rect = Outline::Rectangle(Rectangle::from_coords(5., 5., 25., 45.));
        let parameters = Parameters::default();
        for kind in TransformKind::ALL {
            assert!(parameters.transform(kind).apply(&rect).approx_eq(&rect, 0.));
        }
    }

    #[test]
    fn transform_uses_matching_fields() {
        let parameters = Parameters {
            dx: 1.,
            dy: 2.,
            degrees: 3.,
            sx: 4.,
            sy: 5.,
        };
        assert_eq!(
            parameters.transform(TransformKind::Translate),
            Transform::translate(1., 2.)
        );
        assert_eq!(
            parameters.transform(TransformKind::Rotate),
            Transform::rotate(3.)
        );
        assert_eq!(
            parameters.transform(TransformKind::Scale),
            Transform::scale(4., 5.)
        );
    }

    #[test]
    fn parsing() {
        assert_eq!(parse_parameter("dx", " 42 "), Ok(42.));
        assert_eq!(parse_parameter("dx", "-1.5"), Ok(-1.5));
        assert_eq!(
            parse_parameter("sx", "two"),
            Err(Error::InvalidNumber {
                parameter: "sx",
                input: String::from("two"),
            })
        );
        assert!(parse_parameter("angle", "NaN").is_err());
        assert!(parse_parameter("angle", "inf").is_err());
        assert!(parse_parameter("angle", "").is_err());
    }

    #[test]
    fn values_must_match_parameters() {
        for kind in TransformKind::ALL {
            let values = vec![1.; kind.parameters().len()];
            let transform = kind.with_values(&values).expect("matching arity");
            assert_eq!(transform.kind(), kind);
            assert_eq!(kind.with_values(&[1.; 3]), None);
        }
    }

    #[test]
    fn kinds_parse_from_names() {
        assert_eq!("Rotate".parse::<TransformKind>(), Ok(TransformKind::Rotate));
        assert_eq!("scale".parse::<TransformKind>(), Ok(TransformKind::Scale));
        assert!("skew".parse::<TransformKind>().is_err());
    }
}

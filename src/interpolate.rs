//! Two color gradients used for the gradient display mode.

use euclid::default::Point2D;

use crate::{
    math::{clamp_unit, lerp},
    models::Rgba,
    Component,
};

/// The axis a [`Gradient`] runs along.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GradientDirection {
    /// Left to right.
    Horizontal,
    /// Top to bottom.
    #[default]
    Vertical,
}

impl GradientDirection {
    /// Start point of the gradient in unit space, where `(0, 0)` is the top
    /// left and `(1, 1)` the bottom right of the painted area.
    pub fn start_point(self) -> Point2D<Component> {
        match self {
            GradientDirection::Horizontal => Point2D::new(0.0, 0.5),
            GradientDirection::Vertical => Point2D::new(0.5, 0.0),
        }
    }

    /// End point of the gradient in unit space.
    pub fn end_point(self) -> Point2D<Component> {
        match self {
            GradientDirection::Horizontal => Point2D::new(1.0, 0.5),
            GradientDirection::Vertical => Point2D::new(0.5, 1.0),
        }
    }
}

impl Rgba {
    /// Linearly interpolate each channel from this color to another using `t`
    /// as the progress between them.
    pub fn interpolate(&self, other: &Self, t: Component) -> Self {
        Self::new(
            lerp(self.red, other.red, t),
            lerp(self.green, other.green, t),
            lerp(self.blue, other.blue, t),
            lerp(self.alpha, other.alpha, t),
        )
    }
}

/// A linear gradient between two colors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gradient {
    /// The color at the start point.
    pub start: Rgba,
    /// The color at the end point.
    pub end: Rgba,
    /// The axis the gradient runs along.
    pub direction: GradientDirection,
}

impl Gradient {
    /// Create a new gradient running in the default (vertical) direction.
    pub fn new(start: Rgba, end: Rgba) -> Self {
        Self {
            start,
            end,
            direction: GradientDirection::default(),
        }
    }

    /// Build a gradient from the colors returned by
    /// [`display_colors`](crate::display_colors). A single color gives a
    /// flat gradient and an empty list gives `None`.
    pub fn from_colors(colors: &[Rgba]) -> Option<Self> {
        let start = *colors.first()?;
        let end = colors.get(1).copied().unwrap_or(start);
        Some(Self::new(start, end))
    }

    /// Return a copy of this gradient running along `direction`.
    pub fn with_direction(self, direction: GradientDirection) -> Self {
        Self { direction, ..self }
    }

    /// The color at `t` along the gradient. `t` is clamped into `[0, 1]`.
    pub fn at(&self, t: Component) -> Rgba {
        let t = clamp_unit(t);
        self.start.interpolate(&self.end, t)
    }

    /// The color at a point in unit space, projected onto the gradient axis.
    pub fn at_point(&self, point: Point2D<Component>) -> Rgba {
        match self.direction {
            GradientDirection::Horizontal => self.at(point.x),
            GradientDirection::Vertical => self.at(point.y),
        }
    }
}

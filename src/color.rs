//! A [`Color`] is a color value tagged with the color space its components
//! are specified in.

use crate::models::Model;

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value that all components are stored as.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value that all components are stored as.
pub type Component = f64;

/// Represent the three components that describe any color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }
}

/// The color spaces and notations a [`Color`] can be specified in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Space {
    /// A single intensity, stored in the first component. The other two
    /// components are ignored.
    Monochrome = 0,
    /// Red, green and blue.
    Rgb = 1,
    /// Hue, saturation and lightness.
    Hsl = 2,
    /// Hue, saturation and brightness.
    Hsb = 3,
}

/// Implemented by the typed models to name the [`Space`] they live in.
pub trait HasSpace {
    /// The color space of the model.
    const SPACE: Space;
}

/// Struct that can hold a color of any supported color space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// The three components that make up any color.
    pub components: Components,
    /// The alpha component of the color.
    pub alpha: Component,
    /// The color space in which the components are set.
    pub space: Space,
}

impl Color {
    /// Create a new [`Color`] from raw components. No clamping is applied;
    /// that happens when the color is turned into one of the typed models.
    pub fn new(
        space: Space,
        c0: Component,
        c1: Component,
        c2: Component,
        alpha: Component,
    ) -> Self {
        Self {
            components: Components(c0, c1, c2),
            alpha,
            space,
        }
    }

    /// Create a monochrome color from a single intensity.
    pub fn gray(white: Component, alpha: Component) -> Self {
        Self::new(Space::Monochrome, white, 0.0, 0.0, alpha)
    }

    /// Return this color as the given model, converting between color
    /// spaces if needed.
    pub fn as_model<T: Model>(&self) -> T {
        T::to_model(self)
    }
}

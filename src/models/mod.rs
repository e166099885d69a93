//! Typed color models. Each model holds components that are already in
//! range: hues wrap into `[0, 1)` and everything else clamps into `[0, 1]`.

use crate::color::{Color, Component, Components, HasSpace};

mod hsb;
mod hsl;
mod rgb;

pub use hsb::Hsb;
pub use hsl::Hsl;
pub use rgb::Rgba;

/// A trait implemented for color models that can be converted to and from a
/// generic [`Color`].
pub trait Model: HasSpace + Sized {
    /// Convert a model to a generic [`Color`].
    fn to_color(&self) -> Color;

    /// Build the model from components that are already in its color space.
    fn from_components(components: Components, alpha: Component) -> Self;

    /// Convert a generic [`Color`] to a model.
    fn to_model(color: &Color) -> Self {
        let color = color.to_space(Self::SPACE);
        Self::from_components(color.components, color.alpha)
    }
}

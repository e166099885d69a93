//! Model a color with the HSB (hue, saturation, brightness) notation.

use crate::color::{Component, HasSpace, Space};

huepick_macros::gen_model! {
    /// A color specified with the HSB notation.
    pub struct Hsb {
        /// The hue as a fraction of a full turn.
        #[hue]
        hue: Component,
        /// The saturation component of the color.
        saturation: Component,
        /// The brightness component of the color.
        brightness: Component,
    }
}

impl HasSpace for Hsb {
    const SPACE: Space = Space::Hsb;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_setters() {
        let hsb = Hsb::opaque(0.5, 0.5, 0.5);
        assert_eq!(hsb.with_hue(0.25).hue, 0.25);
        assert_eq!(hsb.with_saturation(0.1).saturation, 0.1);
        assert_eq!(hsb.with_brightness(1.5).brightness, 1.0);
        assert_eq!(hsb.with_brightness(1.5).hue, 0.5);
    }

    #[test]
    fn hue_wraps_and_alpha_clamps() {
        let hsb = Hsb::new(-0.5, 0.2, 0.3, 4.0);
        assert_component_eq!(hsb.hue, 0.5);
        assert_eq!(hsb.alpha, 1.0);
    }
}

//! Model a color with the HSL notation.

use crate::color::{Component, HasSpace, Space};

huepick_macros::gen_model! {
    /// A color specified with the HSL notation.
    pub struct Hsl {
        /// The hue as a fraction of a full turn.
        #[hue]
        hue: Component,
        /// The saturation component of the color.
        saturation: Component,
        /// The lightness component of the color.
        lightness: Component,
    }
}

impl HasSpace for Hsl {
    const SPACE: Space = Space::Hsl;
}

//! Model a color with red, green, blue and alpha channels.

use crate::color::{Component, HasSpace, Space};
use crate::math::unit_to_byte;

huepick_macros::gen_model! {
    /// A color specified with red, green and blue channels.
    pub struct Rgba {
        /// The red component of the color.
        red: Component,
        /// The green component of the color.
        green: Component,
        /// The blue component of the color.
        blue: Component,
    }
}

impl HasSpace for Rgba {
    const SPACE: Space = Space::Rgb;
}

impl Rgba {
    /// Opaque white, the fallback whenever nothing could be sampled.
    pub const WHITE: Self = Self {
        red: 1.0,
        green: 1.0,
        blue: 1.0,
        alpha: 1.0,
    };

    /// Opaque black.
    pub const BLACK: Self = Self {
        red: 0.0,
        green: 0.0,
        blue: 0.0,
        alpha: 1.0,
    };

    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self {
        red: 0.0,
        green: 0.0,
        blue: 0.0,
        alpha: 0.0,
    };

    /// Create a color from 8-bit channel values.
    pub fn from_bytes(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self::new(
            Component::from(red) / 255.0,
            Component::from(green) / 255.0,
            Component::from(blue) / 255.0,
            Component::from(alpha) / 255.0,
        )
    }

    /// Return the channels as 8-bit values, rounding half away from zero.
    pub fn to_bytes(&self) -> [u8; 4] {
        [
            unit_to_byte(self.red),
            unit_to_byte(self.green),
            unit_to_byte(self.blue),
            unit_to_byte(self.alpha),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels_are_clamped() {
        let c = Rgba::new(1.2, -0.1, 0.5, 2.0);
        assert_eq!(c.red, 1.0);
        assert_eq!(c.green, 0.0);
        assert_eq!(c.blue, 0.5);
        assert_eq!(c.alpha, 1.0);
    }

    #[test]
    fn bytes() {
        assert_eq!(Rgba::from_bytes(255, 0, 0, 255), Rgba::opaque(1.0, 0.0, 0.0));
        assert_eq!(Rgba::WHITE.to_bytes(), [255, 255, 255, 255]);
        // 0.5 * 255 = 127.5 rounds away from zero.
        assert_eq!(Rgba::new(0.5, 0.0, 0.0, 1.0).to_bytes()[0], 128);
    }
}

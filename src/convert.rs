//! Conversions between the supported color spaces/notations.
//!
//! Each typed model only implements the conversions that are relevant to
//! it. [`Color::to_space`] routes any other pair through RGB.
//!
//! ```rust
//! use huepick::Rgba;
//! let red = Rgba::opaque(1.0, 0.0, 0.0);
//! let hsl = red.to_hsl();
//! assert_eq!(hsl.saturation, 1.0);
//! assert_eq!(hsl.to_rgba(), red);
//! ```

use crate::{
    color::{Color, Components, Space},
    models::{Hsb, Hsl, Model, Rgba},
};

impl Color {
    /// Convert this color from its current color space/notation to the
    /// specified color space/notation.
    pub fn to_space(&self, space: Space) -> Self {
        use Space as S;

        if self.space == space {
            return *self;
        }

        let with = |components: Components| Color {
            components,
            alpha: self.alpha,
            space,
        };

        // Handle direct conversions.
        match (self.space, space) {
            (S::Hsl, S::Hsb) => return with(util::hsl_to_hsb(&self.components)),
            (S::Hsb, S::Hsl) => return with(util::hsb_to_hsl(&self.components)),
            _ => {}
        }

        // The rest goes through RGB.
        let rgb = match self.space {
            S::Monochrome => {
                let white = self.components.0;
                Components(white, white, white)
            }
            S::Rgb => self.components,
            S::Hsl => util::hsl_to_rgb(&self.components),
            S::Hsb => util::hsl_to_rgb(&util::hsb_to_hsl(&self.components)),
        };

        match space {
            S::Monochrome => with(Components(util::luma(&rgb), 0.0, 0.0)),
            S::Rgb => with(rgb),
            S::Hsl => with(util::rgb_to_hsl(&rgb)),
            S::Hsb => with(util::hsl_to_hsb(&util::rgb_to_hsl(&rgb))),
        }
    }
}

impl Rgba {
    /// Convert this color to the HSL notation.
    pub fn to_hsl(&self) -> Hsl {
        Hsl::from_components(util::rgb_to_hsl(&self.to_components()), self.alpha)
    }

    /// Convert this color to the HSB notation.
    pub fn to_hsb(&self) -> Hsb {
        self.to_hsl().to_hsb()
    }
}

impl Hsl {
    /// Convert this color from the HSL notation to RGB.
    pub fn to_rgba(&self) -> Rgba {
        Rgba::from_components(util::hsl_to_rgb(&self.to_components()), self.alpha)
    }

    /// Convert this color from the HSL notation to the HSB notation.
    pub fn to_hsb(&self) -> Hsb {
        Hsb::from_components(util::hsl_to_hsb(&self.to_components()), self.alpha)
    }
}

impl Hsb {
    /// Convert this color from the HSB notation to the HSL notation.
    pub fn to_hsl(&self) -> Hsl {
        Hsl::from_components(util::hsb_to_hsl(&self.to_components()), self.alpha)
    }

    /// Convert this color from the HSB notation to RGB.
    pub fn to_rgba(&self) -> Rgba {
        self.to_hsl().to_rgba()
    }
}

mod util {
    use crate::{
        color::{Component, Components},
        math::modulo,
    };

    /// Convert from RGB notation to HSL notation. The hue is `0` when there
    /// is no chroma.
    pub fn rgb_to_hsl(from: &Components) -> Components {
        let Components(red, green, blue) = *from;

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);
        let delta = max - min;

        let lightness = (max + min) / 2.0;

        if delta == 0.0 {
            return Components(0.0, 0.0, lightness);
        }

        let saturation = if lightness < 0.5 {
            delta / (max + min)
        } else {
            delta / (2.0 - max - min)
        };

        let sector = if max == red {
            (green - blue) / delta + if green < blue { 6.0 } else { 0.0 }
        } else if max == green {
            (blue - red) / delta + 2.0
        } else {
            (red - green) / delta + 4.0
        };

        Components(modulo(sector / 6.0, 1.0), saturation, lightness)
    }

    /// Convert from HSL notation to RGB notation.
    pub fn hsl_to_rgb(from: &Components) -> Components {
        let Components(hue, saturation, lightness) = *from;

        let m2 = if lightness <= 0.5 {
            lightness * (saturation + 1.0)
        } else {
            lightness + saturation - lightness * saturation
        };
        let m1 = lightness * 2.0 - m2;

        Components(
            hue_to_rgb(m1, m2, hue + 1.0 / 3.0),
            hue_to_rgb(m1, m2, hue),
            hue_to_rgb(m1, m2, hue - 1.0 / 3.0),
        )
    }

    fn hue_to_rgb(m1: Component, m2: Component, hue: Component) -> Component {
        let hue = modulo(hue, 1.0);

        if hue * 6.0 < 1.0 {
            m1 + (m2 - m1) * hue * 6.0
        } else if hue * 2.0 < 1.0 {
            m2
        } else if hue * 3.0 < 2.0 {
            m1 + (m2 - m1) * (2.0 / 3.0 - hue) * 6.0
        } else {
            m1
        }
    }

    /// Convert from HSL notation to HSB notation.
    pub fn hsl_to_hsb(from: &Components) -> Components {
        let Components(hue, saturation, lightness) = *from;

        let brightness = lightness + saturation * lightness.min(1.0 - lightness);
        let saturation = if brightness == 0.0 {
            0.0
        } else {
            2.0 * (1.0 - lightness / brightness)
        };

        Components(hue, saturation, brightness)
    }

    /// Convert from HSB notation to HSL notation.
    pub fn hsb_to_hsl(from: &Components) -> Components {
        let Components(hue, saturation, brightness) = *from;

        let lightness = brightness * (1.0 - saturation / 2.0);
        let saturation = if lightness == 0.0 || lightness == 1.0 {
            0.0
        } else {
            (brightness - lightness) / lightness.min(1.0 - lightness)
        };

        Components(hue, saturation, lightness)
    }

    /// Rec. 601 luma of RGB components.
    pub fn luma(from: &Components) -> Component {
        0.299 * from.0 + 0.587 * from.1 + 0.114 * from.2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Component;

    #[test]
    fn test_conversions() {
        use Space as S;

        #[rustfmt::skip]
        #[allow(clippy::type_complexity)]
        const TESTS: &[(Space, Component, Component, Component, Space, Component, Component, Component)] = &[
            (S::Rgb, 0.823529, 0.411765, 0.117647, S::Rgb, 0.823529, 0.411765, 0.117647),
            (S::Rgb, 0.823529, 0.411765, 0.117647, S::Hsl, 0.069444, 0.750000, 0.470588),
            (S::Rgb, 0.823529, 0.411765, 0.117647, S::Hsb, 0.069444, 0.857143, 0.823529),
            (S::Rgb, 1.000000, 0.000000, 0.000000, S::Hsl, 0.000000, 1.000000, 0.500000),
            (S::Rgb, 0.000000, 1.000000, 0.000000, S::Hsl, 0.333333, 1.000000, 0.500000),
            (S::Rgb, 0.000000, 0.000000, 1.000000, S::Hsl, 0.666667, 1.000000, 0.500000),
            (S::Rgb, 1.000000, 0.000000, 1.000000, S::Hsb, 0.833333, 1.000000, 1.000000),
            (S::Rgb, 0.460000, 0.520000, 0.280000, S::Hsl, 0.208333, 0.300000, 0.400000),
            (S::Hsl, 0.069444, 0.750000, 0.470588, S::Rgb, 0.823529, 0.411765, 0.117647),
            (S::Hsl, 0.069444, 0.750000, 0.470588, S::Hsb, 0.069444, 0.857143, 0.823529),
            (S::Hsl, 0.500000, 1.000000, 0.250000, S::Rgb, 0.000000, 0.500000, 0.500000),
            (S::Hsb, 0.069444, 0.857143, 0.823529, S::Rgb, 0.823529, 0.411765, 0.117647),
            (S::Hsb, 0.069444, 0.857143, 0.823529, S::Hsl, 0.069444, 0.750000, 0.470588),
            (S::Hsb, 0.000000, 0.000000, 0.000000, S::Hsl, 0.000000, 0.000000, 0.000000),
            (S::Monochrome, 0.400000, 0.000000, 0.000000, S::Rgb, 0.400000, 0.400000, 0.400000),
            (S::Monochrome, 0.400000, 0.000000, 0.000000, S::Hsl, 0.000000, 0.000000, 0.400000),
            (S::Rgb, 1.000000, 1.000000, 1.000000, S::Monochrome, 1.000000, 0.000000, 0.000000),
        ];

        for &(source_space, source_0, source_1, source_2, dest_space, dest_0, dest_1, dest_2) in
            TESTS
        {
            println!("{:?} -> {:?}", source_space, dest_space);
            let source = Color::new(source_space, source_0, source_1, source_2, 1.0);
            let dest = source.to_space(dest_space);
            assert_eq!(dest.space, dest_space);
            assert_component_eq!(dest.components.0, dest_0);
            assert_component_eq!(dest.components.1, dest_1);
            assert_component_eq!(dest.components.2, dest_2);
        }
    }

    #[test]
    fn hue_is_zero_if_there_is_no_chroma() {
        for v in [0.0, 0.5, 1.0] {
            let hsl = Rgba::opaque(v, v, v).to_hsl();
            assert_eq!(hsl.hue, 0.0);
            assert_eq!(hsl.saturation, 0.0);
            assert_component_eq!(hsl.lightness, v);
        }
    }

    #[test]
    fn hue_wraps_near_the_red_boundary() {
        // Red with a touch of blue sits just below a full turn.
        let hsl = Rgba::opaque(1.0, 0.0, 0.05).to_hsl();
        assert!(hsl.hue > 0.99 && hsl.hue < 1.0);

        // And a touch of green just above zero.
        let hsl = Rgba::opaque(1.0, 0.05, 0.0).to_hsl();
        assert!(hsl.hue > 0.0 && hsl.hue < 0.01);

        // A hue of exactly one turn is red again.
        let rgba = Hsl::opaque(1.0, 1.0, 0.5).to_rgba();
        assert_component_eq!(rgba.red, 1.0);
        assert_component_eq!(rgba.green, 0.0);
        assert_component_eq!(rgba.blue, 0.0);
    }

    #[test]
    fn converting_a_color_should_maintain_source_alpha() {
        let hsl = Color::new(Space::Hsl, 0.3, 0.4, 0.4, 0.25);
        assert_eq!(hsl.to_space(Space::Rgb).alpha, 0.25);
        assert_eq!(Hsl::new(0.3, 0.4, 0.4, 0.25).to_rgba().alpha, 0.25);
        assert_eq!(Rgba::new(0.3, 0.4, 0.4, 0.25).to_hsb().alpha, 0.25);
    }

    #[test]
    fn hsl_hsb_zero_brightness_has_no_saturation() {
        let hsb = Hsl::opaque(0.4, 1.0, 0.0).to_hsb();
        assert_eq!(hsb.brightness, 0.0);
        assert_eq!(hsb.saturation, 0.0);
    }

    #[test]
    fn hsb_round_trip() {
        let rgba = Rgba::opaque(0.2, 0.6, 0.9);
        let back = rgba.to_hsb().to_rgba();
        assert_component_eq!(back.red, rgba.red);
        assert_component_eq!(back.green, rgba.green);
        assert_component_eq!(back.blue, rgba.blue);
    }
}

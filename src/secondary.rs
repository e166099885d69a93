//! Derive an accent color from the picked color and build the list of
//! colors to display.

use crate::{
    models::{Hsl, Rgba},
    shade::{DisplayMode, ShadeKind},
    Component,
};

/// Offset added to the hue of the primary color. The result wraps.
pub const SECONDARY_HUE_OFFSET: Component = -0.05;

/// Offset added to the saturation of the primary color.
pub const SECONDARY_SATURATION_OFFSET: Component = 0.15;

/// Offset added to the lightness of the primary color.
pub const SECONDARY_LIGHTNESS_OFFSET: Component = -0.15;

impl Hsl {
    /// The secondary color for this color.
    pub fn secondary(&self) -> Self {
        Hsl::new(
            self.hue + SECONDARY_HUE_OFFSET,
            self.saturation + SECONDARY_SATURATION_OFFSET,
            self.lightness + SECONDARY_LIGHTNESS_OFFSET,
            self.alpha,
        )
    }
}

impl Rgba {
    /// Derive the secondary color by offsetting the HSL components of this
    /// color by a fixed amount.
    pub fn derive_secondary(&self) -> Self {
        self.to_hsl().secondary().to_rgba()
    }
}

/// The colors to paint for a picked `primary` color: the shaded primary and,
/// in [`DisplayMode::Gradient`], the shaded secondary. The shade is applied to
/// the secondary after it is derived from the unshaded primary.
pub fn display_colors(primary: Rgba, shade: ShadeKind, mode: DisplayMode) -> Vec<Rgba> {
    let mut colors = Vec::with_capacity(mode.number_of_colors());
    colors.push(primary.apply_shade(shade));
    if mode == DisplayMode::Gradient {
        colors.push(primary.derive_secondary().apply_shade(shade));
    }
    colors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secondary_of_red() {
        let red = Rgba::from_hex("#FF0000").unwrap();

        let hsl = red.to_hsl().secondary();
        assert_component_eq!(hsl.hue, 0.95);
        assert_component_eq!(hsl.saturation, 1.0);
        assert_component_eq!(hsl.lightness, 0.35);

        let rgba = red.derive_secondary();
        assert_component_eq!(rgba.red, 0.7);
        assert_component_eq!(rgba.green, 0.0);
        assert_component_eq!(rgba.blue, 0.21);
        assert_eq!(rgba.alpha, 1.0);
    }

    #[test]
    fn secondary_clamps_dark_colors() {
        let hsl = Hsl::opaque(0.5, 0.3, 0.1).secondary();
        assert_eq!(hsl.lightness, 0.0);
        assert_component_eq!(hsl.saturation, 0.45);
        assert_component_eq!(hsl.hue, 0.45);
    }

    #[test]
    fn solid_mode_has_one_color() {
        let primary = Rgba::opaque(0.2, 0.5, 0.8);
        let colors = display_colors(primary, ShadeKind::Original, DisplayMode::Solid);
        assert_eq!(colors, vec![primary]);
    }

    #[test]
    fn gradient_mode_shades_both_colors() {
        let primary = Rgba::opaque(0.2, 0.5, 0.8);
        let colors = display_colors(primary, ShadeKind::Darker, DisplayMode::Gradient);
        assert_eq!(colors.len(), 2);
        assert_eq!(colors[0], primary.apply_shade(ShadeKind::Darker));
        assert_eq!(
            colors[1],
            primary.derive_secondary().apply_shade(ShadeKind::Darker)
        );
    }
}

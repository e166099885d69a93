//! Named tonal adjustments applied to a picked color.
//!
//! Every shade is a fixed offset on the HSL lightness or saturation of the
//! color; the result is clamped, so applying a shade repeatedly saturates at
//! the range boundary.

use crate::{
    models::{Hsl, Rgba},
    Component,
};

/// Lightness offset used by [`ShadeKind::Lighter`] and [`ShadeKind::Darker`].
pub const LIGHTNESS_STEP: Component = 0.2;

/// Saturation offset used by [`ShadeKind::Saturated`] and
/// [`ShadeKind::Desaturated`].
pub const SATURATION_STEP: Component = 0.3;

/// The tonal adjustment applied to displayed colors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ShadeKind {
    /// The color as picked.
    #[default]
    Original,
    /// Lightness raised by [`LIGHTNESS_STEP`].
    Lighter,
    /// Lightness lowered by [`LIGHTNESS_STEP`].
    Darker,
    /// Saturation raised by [`SATURATION_STEP`].
    Saturated,
    /// Saturation lowered by [`SATURATION_STEP`].
    Desaturated,
}

impl ShadeKind {
    /// All shades in cycling order.
    pub const ALL: [ShadeKind; 5] = [
        ShadeKind::Original,
        ShadeKind::Lighter,
        ShadeKind::Darker,
        ShadeKind::Saturated,
        ShadeKind::Desaturated,
    ];

    /// The shade after this one, wrapping back to [`ShadeKind::Original`].
    pub fn next(self) -> Self {
        Self::ALL[(self as usize + 1) % Self::ALL.len()]
    }

    /// Upper case label for the shade.
    pub fn title(self) -> &'static str {
        match self {
            ShadeKind::Original => "ORIGINAL",
            ShadeKind::Lighter => "LIGHTER",
            ShadeKind::Darker => "DARKER",
            ShadeKind::Saturated => "SATURATED",
            ShadeKind::Desaturated => "DESATURATED",
        }
    }
}

/// How picked colors are presented.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DisplayMode {
    /// A single fill of the primary color.
    #[default]
    Solid,
    /// A two color gradient from the primary to the secondary color.
    Gradient,
}

impl DisplayMode {
    /// All modes in cycling order.
    pub const ALL: [DisplayMode; 2] = [DisplayMode::Solid, DisplayMode::Gradient];

    /// The mode after this one, wrapping around.
    pub fn next(self) -> Self {
        Self::ALL[(self as usize + 1) % Self::ALL.len()]
    }

    /// Upper case label for the mode.
    pub fn title(self) -> &'static str {
        match self {
            DisplayMode::Solid => "SOLID",
            DisplayMode::Gradient => "GRADIENT",
        }
    }

    /// How many colors are displayed in this mode.
    pub fn number_of_colors(self) -> usize {
        match self {
            DisplayMode::Solid => 1,
            DisplayMode::Gradient => 2,
        }
    }
}

impl Hsl {
    /// Raise the lightness by `amount`.
    pub fn lighter(&self, amount: Component) -> Self {
        self.with_lightness(self.lightness + amount)
    }

    /// Lower the lightness by `amount`.
    pub fn darkened(&self, amount: Component) -> Self {
        self.with_lightness(self.lightness - amount)
    }

    /// Raise the saturation by `amount`.
    pub fn saturated(&self, amount: Component) -> Self {
        self.with_saturation(self.saturation + amount)
    }

    /// Lower the saturation by `amount`.
    pub fn desaturated(&self, amount: Component) -> Self {
        self.with_saturation(self.saturation - amount)
    }
}

impl Rgba {
    /// Raise the HSL lightness of this color by `amount`.
    pub fn lighter(&self, amount: Component) -> Self {
        self.to_hsl().lighter(amount).to_rgba()
    }

    /// Lower the HSL lightness of this color by `amount`.
    pub fn darkened(&self, amount: Component) -> Self {
        self.to_hsl().darkened(amount).to_rgba()
    }

    /// Raise the HSL saturation of this color by `amount`.
    pub fn saturated(&self, amount: Component) -> Self {
        self.to_hsl().saturated(amount).to_rgba()
    }

    /// Lower the HSL saturation of this color by `amount`.
    pub fn desaturated(&self, amount: Component) -> Self {
        self.to_hsl().desaturated(amount).to_rgba()
    }

    /// Apply one of the named shades. Alpha is left untouched.
    pub fn apply_shade(&self, shade: ShadeKind) -> Self {
        match shade {
            ShadeKind::Original => *self,
            ShadeKind::Lighter => self.lighter(LIGHTNESS_STEP),
            ShadeKind::Darker => self.darkened(LIGHTNESS_STEP),
            ShadeKind::Saturated => self.saturated(SATURATION_STEP),
            ShadeKind::Desaturated => self.desaturated(SATURATION_STEP),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_nexts_return_to_original() {
        let mut shade = ShadeKind::Original;
        let mut seen = vec![];
        for _ in 0..5 {
            seen.push(shade);
            shade = shade.next();
        }
        assert_eq!(shade, ShadeKind::Original);
        assert_eq!(seen, ShadeKind::ALL);
    }

    #[test]
    fn display_mode_cycles() {
        assert_eq!(DisplayMode::Solid.next(), DisplayMode::Gradient);
        assert_eq!(DisplayMode::Gradient.next(), DisplayMode::Solid);
        assert_eq!(DisplayMode::Solid.number_of_colors(), 1);
        assert_eq!(DisplayMode::Gradient.number_of_colors(), 2);
        assert_eq!(DisplayMode::Gradient.title(), "GRADIENT");
        assert_eq!(ShadeKind::Desaturated.title(), "DESATURATED");
    }

    #[test]
    fn original_is_identity() {
        let c = Rgba::new(0.12, 0.34, 0.56, 0.78);
        assert_eq!(c.apply_shade(ShadeKind::Original), c);
    }

    #[test]
    fn lighter_and_darker_shift_lightness() {
        let c = Hsl::opaque(0.6, 0.5, 0.5).to_rgba();

        let lighter = c.apply_shade(ShadeKind::Lighter).to_hsl();
        assert_component_eq!(lighter.lightness, 0.7);
        assert_component_eq!(lighter.saturation, 0.5);
        assert_component_eq!(lighter.hue, 0.6);

        let darker = c.apply_shade(ShadeKind::Darker).to_hsl();
        assert_component_eq!(darker.lightness, 0.3);
    }

    #[test]
    fn saturation_shades_clamp() {
        let c = Hsl::opaque(0.3, 0.9, 0.5).to_rgba();
        let saturated = c.apply_shade(ShadeKind::Saturated).to_hsl();
        assert_component_eq!(saturated.saturation, 1.0);

        let c = Hsl::opaque(0.3, 0.2, 0.5).to_rgba();
        let desaturated = c.apply_shade(ShadeKind::Desaturated).to_hsl();
        assert_eq!(desaturated.saturation, 0.0);
    }

    #[test]
    fn lighter_on_white_stays_white() {
        let white = Rgba::WHITE;
        let once = white.apply_shade(ShadeKind::Lighter);
        let twice = once.apply_shade(ShadeKind::Lighter);
        assert_eq!(once.to_hsl().lightness, 1.0);
        assert_eq!(twice.to_hsl().lightness, 1.0);
        assert_eq!(twice, Rgba::WHITE);
    }

    #[test]
    fn darker_on_black_stays_black() {
        let black = Rgba::BLACK.apply_shade(ShadeKind::Darker);
        assert_eq!(black.to_hsl().lightness, 0.0);
        assert_eq!(black, Rgba::BLACK);
    }

    #[test]
    fn shades_keep_alpha() {
        let c = Rgba::new(0.2, 0.4, 0.6, 0.5);
        for shade in ShadeKind::ALL {
            assert_eq!(c.apply_shade(shade).alpha, 0.5);
        }
    }
}

//! Hex string representations of colors (`#RRGGBB` and `#RRGGBBAA`).

use std::{fmt, str::FromStr};

use crate::{
    error::{Error, Result},
    math::unit_to_byte,
    models::Rgba,
    Color, Component, Space,
};

/// Which hex form to produce.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum HexForm {
    /// `#RRGGBB`, alpha is dropped.
    #[default]
    Rgb,
    /// `#RRGGBBAA`.
    Rgba,
}

fn format_hex(
    red: Component,
    green: Component,
    blue: Component,
    alpha: Component,
    form: HexForm,
) -> String {
    let (r, g, b) = (
        unit_to_byte(red),
        unit_to_byte(green),
        unit_to_byte(blue),
    );
    match form {
        HexForm::Rgb => format!("#{r:02X}{g:02X}{b:02X}"),
        HexForm::Rgba => {
            let a = unit_to_byte(alpha);
            format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
        }
    }
}

impl Color {
    /// Format this color as a hex string. Only monochrome and RGB colors
    /// have a direct hex representation; monochrome colors repeat their
    /// intensity in all three channels.
    pub fn to_hex(&self, form: HexForm) -> Result<String> {
        let Self {
            components,
            alpha,
            space,
        } = *self;

        match space {
            Space::Monochrome => Ok(format_hex(
                components.0,
                components.0,
                components.0,
                alpha,
                form,
            )),
            Space::Rgb => Ok(format_hex(
                components.0,
                components.1,
                components.2,
                alpha,
                form,
            )),
            space => Err(Error::InvalidColorSpace(space)),
        }
    }

    /// Like [`Color::to_hex`] with [`HexForm::Rgb`], but never fails: colors
    /// without a hex representation format with all channels at zero.
    pub fn hex_string(&self) -> String {
        self.to_hex(HexForm::Rgb).unwrap_or_else(|err| {
            log::warn!("{err}, formatting as black");
            format_hex(0.0, 0.0, 0.0, 0.0, HexForm::Rgb)
        })
    }
}

impl Rgba {
    /// Format this color as a hex string.
    pub fn to_hex(&self, form: HexForm) -> String {
        format_hex(self.red, self.green, self.blue, self.alpha, form)
    }

    /// Parse a hex string of 6 or 8 hex digits. A leading `#` and surrounding
    /// whitespace are ignored. Without an alpha pair the color is opaque.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let malformed = || Error::MalformedHex(hex.to_string());

        let digits = hex.trim();
        let digits = digits.strip_prefix('#').unwrap_or(digits);

        let well_formed =
            matches!(digits.len(), 6 | 8) && digits.bytes().all(|b| b.is_ascii_hexdigit());
        if !well_formed {
            return Err(malformed());
        }

        let mut bytes = [255_u8; 4];
        for (i, byte) in bytes.iter_mut().enumerate().take(digits.len() / 2) {
            let pair = &digits[i * 2..i * 2 + 2];
            *byte = u8::from_str_radix(pair, 16).map_err(|_| malformed())?;
        }

        let [red, green, blue, alpha] = bytes;
        Ok(Self::from_bytes(red, green, blue, alpha))
    }

    /// Parse a hex string, falling back to opaque white when it is
    /// malformed.
    pub fn from_hex_or_white(hex: &str) -> Self {
        Self::from_hex(hex).unwrap_or_else(|err| {
            log::warn!("{err}, using white");
            Self::WHITE
        })
    }
}

impl FromStr for Rgba {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex(HexForm::Rgb))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_rgb_and_rgba() {
        let c = Rgba::new(1.0, 0.0, 0.0, 1.0);
        assert_eq!(c.to_hex(HexForm::Rgb), "#FF0000");
        assert_eq!(c.to_hex(HexForm::Rgba), "#FF0000FF");
        assert_eq!(c.to_string(), "#FF0000");

        let c = Rgba::from_bytes(0x0A, 0xBC, 0x01, 0x33);
        assert_eq!(c.to_hex(HexForm::Rgba), "#0ABC0133");
    }

    #[test]
    fn format_rounds_half_away_from_zero() {
        // 0.5 * 255 = 127.5
        assert_eq!(Rgba::opaque(0.5, 0.5, 0.5).to_hex(HexForm::Rgb), "#808080");
    }

    #[test]
    fn parse_forms() {
        assert_eq!(Rgba::from_hex("#FF0000").unwrap(), Rgba::opaque(1.0, 0.0, 0.0));
        assert_eq!(Rgba::from_hex("00ff00").unwrap(), Rgba::opaque(0.0, 1.0, 0.0));
        assert_eq!(Rgba::from_hex("  #0000FF\n").unwrap(), Rgba::opaque(0.0, 0.0, 1.0));

        let c: Rgba = "#00000033".parse().unwrap();
        assert_eq!(c.to_bytes(), [0, 0, 0, 0x33]);
    }

    #[test]
    fn parse_rejects_malformed_input() {
        let inputs = [
            "", "#", "#FFF", "#FFFFF", "#FFFFFFF", "#FFFFFFFFF", "#GG0000", "#+F0000", "##FF0000",
        ];
        for bad in inputs {
            assert_eq!(
                Rgba::from_hex(bad),
                Err(Error::MalformedHex(bad.to_string())),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn malformed_falls_back_to_white() {
        assert_eq!(Rgba::from_hex_or_white("nope"), Rgba::WHITE);
    }

    #[test]
    fn round_trip_canonicalizes_case() {
        let c = Rgba::from_hex("#a1b2c3").unwrap();
        assert_eq!(c.to_hex(HexForm::Rgb), "#A1B2C3");
    }

    #[test]
    fn generic_color_hex() {
        let gray = Color::gray(1.0, 1.0);
        assert_eq!(gray.to_hex(HexForm::Rgb).unwrap(), "#FFFFFF");

        let rgb = Color::new(Space::Rgb, 0.0, 1.0, 0.0, 0.0);
        assert_eq!(rgb.to_hex(HexForm::Rgba).unwrap(), "#00FF0000");

        let hsl = Color::new(Space::Hsl, 0.0, 1.0, 0.5, 1.0);
        assert_eq!(hsl.to_hex(HexForm::Rgb), Err(Error::InvalidColorSpace(Space::Hsl)));
        assert_eq!(hsl.hex_string(), "#000000");
        assert_eq!(hsl.to_space(Space::Rgb).hex_string(), "#FF0000");
    }
}

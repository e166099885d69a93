//! huepick provides the color math and pixel sampling needed by a photo
//! color picker: conversions between RGB, HSL, HSB and hex strings, tonal
//! shades, a derived secondary color, and sampling colors out of raw pixel
//! buffers that have been resampled onto a fixed canvas.
//!
//! ```rust
//! use huepick::{Rgba, ShadeKind};
//!
//! let red: Rgba = "#FF0000".parse().unwrap();
//! let secondary = red.derive_secondary();
//! let hsl = secondary.to_hsl();
//! assert!((hsl.hue - 0.95).abs() < 1e-4);
//! assert!((hsl.lightness - 0.35).abs() < 1e-4);
//!
//! assert_eq!(red.apply_shade(ShadeKind::Darker).to_string(), "#990000");
//! ```

#![deny(missing_docs)]

#[cfg(test)]
#[macro_use]
mod test;

mod color;
mod convert;
mod error;
mod hex;
mod interpolate;
mod math;
mod models;
mod picker;
mod pixel;
mod preview;
mod resample;
mod secondary;
mod shade;

pub use color::{Color, Component, Components, HasSpace, Space};
pub use error::{Error, Result};
pub use hex::HexForm;
pub use interpolate::{Gradient, GradientDirection};
pub use models::{Hsb, Hsl, Model, Rgba};
pub use picker::{
    Pick, Picker, PickerOptions, DEFAULT_CANVAS_SIDE, DEFAULT_MAGNIFIER_PATCH,
    DEFAULT_MAGNIFIER_SCALE,
};
pub use pixel::{Channel, ChannelOrder, ColorModel, PixelBuffer, PixelFormat, PixelLayout};
pub use preview::{CircularPreview, CursorPreview, DropletPreview, Outline, EDGE_INSET, SIDE_WIDTH};
pub use resample::{crop_to_bounds, magnify, resample, resample_with, FilterType, FitMode, Placement};
pub use secondary::{
    display_colors, SECONDARY_HUE_OFFSET, SECONDARY_LIGHTNESS_OFFSET, SECONDARY_SATURATION_OFFSET,
};
pub use shade::{DisplayMode, ShadeKind, LIGHTNESS_STEP, SATURATION_STEP};

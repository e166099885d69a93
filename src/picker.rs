//! Pick colors from a picture.
//!
//! A [`Picker`] resamples a picture once onto a canvas of a fixed logical
//! size and then answers any number of picks against that snapshot. Picks do
//! not change the picker, so every pick only depends on its point.
//!
//! ```rust
//! use euclid::default::{Point2D, Size2D};
//! use huepick::{PixelBuffer, PixelFormat, Picker, PickerOptions, Rgba};
//!
//! let photo = PixelBuffer::from_rgba_fn(640, 480, PixelFormat::BGRA8, |_, _| {
//!     Rgba::opaque(1.0, 0.0, 0.0)
//! })
//! .unwrap();
//!
//! let picker = Picker::new(&photo, PickerOptions::default()).unwrap();
//! let pick = picker.pick(Point2D::new(10.0, 20.0));
//! assert_eq!(pick.hex, "#FF0000");
//! assert_eq!(pick.magnified.unwrap().size(), Size2D::new(80, 80));
//! ```

use euclid::default::{Point2D, Size2D};

use crate::{
    error::Result,
    models::Rgba,
    pixel::PixelBuffer,
    resample::{magnify, resample, scaled_size, FitMode},
    secondary::display_colors,
    shade::{DisplayMode, ShadeKind},
    Component, HexForm,
};

/// Side of the default square canvas.
pub const DEFAULT_CANVAS_SIDE: u32 = 300;

/// Side of the default square patch shown in the magnifier.
pub const DEFAULT_MAGNIFIER_PATCH: u32 = 20;

/// Default scale of the magnifier patch.
pub const DEFAULT_MAGNIFIER_SCALE: u32 = 4;

/// Options for a [`Picker`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PickerOptions {
    /// Logical size of the canvas the picture is resampled onto. Pick points
    /// are in this coordinate space.
    pub canvas_size: Size2D<u32>,
    /// How the picture is placed on the canvas.
    pub fit_mode: FitMode,
    /// Size of the patch around the pick point shown in the magnifier.
    pub magnifier_patch: Size2D<u32>,
    /// How much the magnifier patch is scaled up.
    pub magnifier_scale: u32,
}

impl Default for PickerOptions {
    fn default() -> Self {
        Self {
            canvas_size: Size2D::new(DEFAULT_CANVAS_SIDE, DEFAULT_CANVAS_SIDE),
            fit_mode: FitMode::AspectFill,
            magnifier_patch: Size2D::new(DEFAULT_MAGNIFIER_PATCH, DEFAULT_MAGNIFIER_PATCH),
            magnifier_scale: DEFAULT_MAGNIFIER_SCALE,
        }
    }
}

/// The result of picking a point.
#[derive(Clone, Debug, PartialEq)]
pub struct Pick {
    /// The point that was picked, clamped onto the canvas.
    pub point: Point2D<u32>,
    /// The color under the point.
    pub color: Rgba,
    /// `color` as `#RRGGBB`.
    pub hex: String,
    /// The accent color derived from `color`.
    pub secondary: Rgba,
    /// The area around the point, scaled up. `None` when the patch could
    /// not be produced.
    pub magnified: Option<PixelBuffer>,
}

impl Pick {
    /// The colors to paint for this pick.
    pub fn display_colors(&self, shade: ShadeKind, mode: DisplayMode) -> Vec<Rgba> {
        display_colors(self.color, shade, mode)
    }
}

/// Picks colors from a resampled snapshot of a picture.
#[derive(Clone, Debug)]
pub struct Picker {
    canvas: PixelBuffer,
    options: PickerOptions,
}

impl Picker {
    /// Resample `source` onto the canvas described by `options`.
    pub fn new<D: AsRef<[u8]>>(source: &PixelBuffer<D>, options: PickerOptions) -> Result<Self> {
        scaled_size(options.magnifier_patch, options.magnifier_scale)?;

        let canvas = resample(source, options.canvas_size, options.fit_mode)?;
        Ok(Self { canvas, options })
    }

    /// The resampled canvas.
    pub fn canvas(&self) -> &PixelBuffer {
        &self.canvas
    }

    /// The options the picker was created with.
    pub fn options(&self) -> &PickerOptions {
        &self.options
    }

    /// The center of the canvas.
    pub fn center(&self) -> Point2D<Component> {
        let size = self.canvas.size();
        Point2D::new(size.width as Component, size.height as Component) / 2.0
    }

    /// Pick the color at `point` in canvas coordinates.
    ///
    /// Points outside the canvas pick the nearest edge pixel.
    pub fn pick(&self, point: Point2D<Component>) -> Pick {
        let (x, y) = self.canvas.clamp_point(point);
        let color = self.canvas.sample(point);
        let hex = color.to_hex(HexForm::Rgb);
        log::debug!("picked {hex} at {x},{y}");

        let magnified = magnify(
            &self.canvas,
            point,
            self.options.magnifier_patch,
            self.options.magnifier_scale,
        )
        .map_err(|err| log::warn!("{err}, no magnifier image"))
        .ok();

        Pick {
            point: Point2D::new(x, y),
            color,
            hex,
            secondary: color.derive_secondary(),
            magnified,
        }
    }

    /// Pick the center of the canvas, the point picked when a new picture
    /// is loaded.
    pub fn pick_default(&self) -> Pick {
        self.pick(self.center())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::Error, pixel::PixelFormat};

    fn quadrants() -> PixelBuffer {
        // 400x200, left half red, right half blue.
        PixelBuffer::from_rgba_fn(400, 200, PixelFormat::BGRA8, |x, _| {
            if x < 200 {
                Rgba::opaque(1.0, 0.0, 0.0)
            } else {
                Rgba::opaque(0.0, 0.0, 1.0)
            }
        })
        .unwrap()
    }

    #[test]
    fn default_options() {
        let options = PickerOptions::default();
        assert_eq!(options.canvas_size, Size2D::new(300, 300));
        assert_eq!(options.fit_mode, FitMode::AspectFill);
        assert_eq!(options.magnifier_patch, Size2D::new(20, 20));
        assert_eq!(options.magnifier_scale, 4);
    }

    #[test]
    fn pick_maps_canvas_points() {
        let picker = Picker::new(&quadrants(), PickerOptions::default()).unwrap();
        assert_eq!(picker.canvas().size(), Size2D::new(300, 300));

        let left = picker.pick(Point2D::new(20.0, 150.0));
        assert_eq!(left.hex, "#FF0000");
        let right = picker.pick(Point2D::new(280.0, 150.0));
        assert_eq!(right.hex, "#0000FF");
    }

    #[test]
    fn pick_is_independent_of_earlier_picks() {
        let picker = Picker::new(&quadrants(), PickerOptions::default()).unwrap();
        let first = picker.pick(Point2D::new(20.0, 20.0));
        picker.pick(Point2D::new(280.0, 280.0));
        assert_eq!(picker.pick(Point2D::new(20.0, 20.0)), first);
    }

    #[test]
    fn pick_outside_the_canvas_clamps() {
        let picker = Picker::new(&quadrants(), PickerOptions::default()).unwrap();
        let pick = picker.pick(Point2D::new(-40.0, 900.0));
        assert_eq!(pick.point, Point2D::new(0, 299));
        assert_eq!(pick.hex, "#FF0000");
        assert_eq!(pick.magnified.unwrap().size(), Size2D::new(80, 80));
    }

    #[test]
    fn pick_default_uses_the_center() {
        let picker = Picker::new(&quadrants(), PickerOptions::default()).unwrap();
        assert_eq!(picker.center(), Point2D::new(150.0, 150.0));
        assert_eq!(picker.pick_default().point, Point2D::new(150, 150));
    }

    #[test]
    fn pick_derives_the_secondary() {
        let picker = Picker::new(&quadrants(), PickerOptions::default()).unwrap();
        let pick = picker.pick(Point2D::new(10.0, 10.0));
        assert_eq!(pick.secondary, pick.color.derive_secondary());
        let colors = pick.display_colors(ShadeKind::Original, DisplayMode::Gradient);
        assert_eq!(colors, vec![pick.color, pick.secondary]);
    }

    #[test]
    fn empty_magnifier_is_an_error() {
        let options = PickerOptions {
            magnifier_scale: 0,
            ..Default::default()
        };
        assert_eq!(
            Picker::new(&quadrants(), options).err(),
            Some(Error::InvalidDimensions {
                width: 0,
                height: 0
            })
        );
    }

    #[test]
    fn empty_canvas_is_an_error() {
        let options = PickerOptions {
            canvas_size: Size2D::new(0, 0),
            ..Default::default()
        };
        assert!(matches!(
            Picker::new(&quadrants(), options),
            Err(Error::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn oversized_magnifier_is_an_error() {
        let options = PickerOptions {
            magnifier_scale: u32::MAX,
            ..Default::default()
        };
        assert_eq!(
            Picker::new(&quadrants(), options).err(),
            Some(Error::InvalidDimensions {
                width: u32::MAX,
                height: u32::MAX
            })
        );
    }
}

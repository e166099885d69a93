//! Scale and crop pixel buffers.
//!
//! Pictures are resampled onto a canvas of a fixed logical size before any
//! colors are sampled, so a point on the canvas always maps to the same
//! pixel no matter what size the source picture was. Resampled buffers keep
//! the [`PixelFormat`](crate::PixelFormat) of their source.

use std::ops::Range;

use euclid::default::{Point2D, Rect, Size2D};
use image::{imageops, ImageBuffer, Rgba32FImage};

pub use image::imageops::FilterType;

use crate::{
    error::{Error, Result},
    models::Rgba,
    pixel::PixelBuffer,
    Component,
};

/// How a source picture is placed onto a target canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FitMode {
    /// Stretch the source to cover the canvas exactly.
    Fill,
    /// Scale uniformly so the whole source is visible, centered on the
    /// shorter axis.
    AspectFit,
    /// Scale uniformly so the source covers the canvas, centered on the axis
    /// that overflows.
    #[default]
    AspectFill,
    /// Native size, centered horizontally against the top edge.
    Top,
    /// Native size, centered horizontally against the bottom edge.
    Bottom,
    /// Native size, centered vertically against the left edge.
    Left,
    /// Native size, centered vertically against the right edge.
    Right,
    /// Native size in the top left corner.
    TopLeft,
    /// Native size in the top right corner.
    TopRight,
    /// Native size in the bottom left corner.
    BottomLeft,
    /// Native size in the bottom right corner.
    BottomRight,
    /// Native size, centered.
    Center,
    /// Native size on a canvas of the native size. The target size is
    /// ignored.
    Redraw,
}

/// Where a source is drawn and how large the canvas it is drawn onto is.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// Size of the canvas.
    pub output_size: Size2D<Component>,
    /// Rectangle the source is drawn into. It may extend past the canvas.
    pub draw_rect: Rect<Component>,
}

impl FitMode {
    /// Work out the placement of a `source` sized picture on a `target`
    /// sized canvas.
    pub fn placement(self, source: Size2D<Component>, target: Size2D<Component>) -> Placement {
        use FitMode as M;

        let native = |x: Component, y: Component| (Point2D::new(x, y), source);
        let center_x = (target.width - source.width) / 2.0;
        let center_y = (target.height - source.height) / 2.0;
        let right = target.width - source.width;
        let bottom = target.height - source.height;

        let (origin, size) = match self {
            M::Fill => (Point2D::origin(), target),
            M::Redraw => {
                return Placement {
                    output_size: source,
                    draw_rect: Rect::new(Point2D::origin(), source),
                }
            }
            M::AspectFit => {
                let scaled_height = source.height * target.width / source.width;
                if scaled_height < target.height {
                    (
                        Point2D::new(0.0, (target.height - scaled_height) / 2.0),
                        Size2D::new(target.width, scaled_height),
                    )
                } else {
                    let scaled_width = source.width * target.height / source.height;
                    (
                        Point2D::new((target.width - scaled_width) / 2.0, 0.0),
                        Size2D::new(scaled_width, target.height),
                    )
                }
            }
            M::AspectFill => {
                let scaled_height = source.height * target.width / source.width;
                if scaled_height > target.height {
                    (
                        Point2D::new(0.0, (target.height - scaled_height) / 2.0),
                        Size2D::new(target.width, scaled_height),
                    )
                } else {
                    let scaled_width = source.width * target.height / source.height;
                    (
                        Point2D::new((target.width - scaled_width) / 2.0, 0.0),
                        Size2D::new(scaled_width, target.height),
                    )
                }
            }
            M::Top => native(center_x, 0.0),
            M::Bottom => native(center_x, bottom),
            M::Left => native(0.0, center_y),
            M::Right => native(right, center_y),
            M::TopLeft => native(0.0, 0.0),
            M::TopRight => native(right, 0.0),
            M::BottomLeft => native(0.0, bottom),
            M::BottomRight => native(right, bottom),
            M::Center => native(center_x, center_y),
        };

        Placement {
            output_size: target,
            draw_rect: Rect::new(origin, size),
        }
    }
}

/// Round a length to whole pixels, never less than one.
fn to_pixels(length: Component) -> u32 {
    length.round().max(1.0) as u32
}

/// One axis of the part of a draw rectangle that lands on the canvas.
#[derive(Clone, Debug, PartialEq)]
struct Span {
    /// Canvas pixels covered.
    canvas: Range<u32>,
    /// Source pixels read to cover them, with some margin for the filter.
    source: Range<u32>,
    /// Canvas coordinate the first source pixel read is scaled to.
    offset: i64,
    /// Length the source pixels read are scaled to.
    scaled: u32,
}

/// Clip a draw span starting at `origin` with `length` to a canvas of
/// `canvas_len` pixels. `None` when nothing of the source is visible.
fn clip_span(
    source_len: u32,
    canvas_len: u32,
    origin: Component,
    length: Component,
) -> Option<Span> {
    let origin = (origin as f64).round();
    let length = (length as f64).round().max(1.0);
    let scale = length / source_len as f64;

    let visible_start = origin.max(0.0);
    let visible_end = (origin + length).min(canvas_len as f64);
    if visible_start >= visible_end {
        return None;
    }

    // The filter reaches one source pixel out when enlarging and further
    // when shrinking.
    let margin = (1.0 / scale).ceil().max(1.0) + 1.0;
    let first = (((visible_start - origin) / scale).floor() - margin).max(0.0) as u32;
    let last = ((((visible_end - origin) / scale).ceil() + margin) as u32).min(source_len);

    let edge = |i: u32| {
        if i == source_len {
            origin + length
        } else {
            (origin + i as f64 * scale).round()
        }
    };
    let offset = edge(first);

    Some(Span {
        canvas: visible_start as u32..visible_end as u32,
        source: first..last,
        offset: offset as i64,
        scaled: (edge(last) - offset).max(1.0) as u32,
    })
}

fn decode<D: AsRef<[u8]>>(source: &PixelBuffer<D>, region: Rect<u32>) -> Result<Rgba32FImage> {
    let len = region.width() as usize * region.height() as usize * 4;
    let mut samples = Vec::with_capacity(len);
    for y in region.y_range() {
        for x in region.x_range() {
            let color = source.pixel(x, y)?;
            let channels = [color.red, color.green, color.blue, color.alpha];
            samples.extend(channels.map(|c| c as f32));
        }
    }
    ImageBuffer::from_raw(region.width(), region.height(), samples).ok_or(Error::NoImageData)
}

fn scaled_pixel(image: &Rgba32FImage, x: u32, y: u32) -> Result<Rgba> {
    if x >= image.width() || y >= image.height() {
        return Err(Error::OutOfBounds { x, y });
    }
    let [red, green, blue, alpha] = image.get_pixel(x, y).0;
    Ok(Rgba::new(
        red as Component,
        green as Component,
        blue as Component,
        alpha as Component,
    ))
}

/// Multiply `size` by `scale`, failing when the result is empty or does
/// not fit.
pub(crate) fn scaled_size(size: Size2D<u32>, scale: u32) -> Result<Size2D<u32>> {
    match (size.width.checked_mul(scale), size.height.checked_mul(scale)) {
        (Some(width), Some(height)) if width > 0 && height > 0 => Ok(Size2D::new(width, height)),
        _ => Err(Error::InvalidDimensions {
            width: size.width.saturating_mul(scale),
            height: size.height.saturating_mul(scale),
        }),
    }
}

/// Resample `source` onto a canvas of `target` size with bilinear filtering.
/// Parts of the canvas the source does not cover are transparent.
pub fn resample<D: AsRef<[u8]>>(
    source: &PixelBuffer<D>,
    target: Size2D<u32>,
    mode: FitMode,
) -> Result<PixelBuffer> {
    resample_with(source, target, mode, FilterType::Triangle)
}

/// Like [`resample`], with a choice of filter.
///
/// Only the part of the source that lands on the canvas is read and scaled,
/// so the work done is bounded by the source and canvas sizes no matter how
/// far the draw rectangle overflows the canvas.
pub fn resample_with<D: AsRef<[u8]>>(
    source: &PixelBuffer<D>,
    target: Size2D<u32>,
    mode: FitMode,
    filter: FilterType,
) -> Result<PixelBuffer> {
    if target.is_empty() {
        return Err(Error::InvalidDimensions {
            width: target.width,
            height: target.height,
        });
    }

    let placement = mode.placement(source.size().cast(), target.cast());
    let output = placement.output_size;
    let rect = placement.draw_rect;
    log::debug!(
        "resampling {}x{} with {mode:?} onto {}x{} at {:?}",
        source.width(),
        source.height(),
        output.width,
        output.height,
        rect
    );

    let (width, height) = (to_pixels(output.width), to_pixels(output.height));
    let mut canvas = PixelBuffer::zeroed(width, height, source.format())?;

    let columns = clip_span(source.width(), width, rect.origin.x, rect.size.width);
    let rows = clip_span(source.height(), height, rect.origin.y, rect.size.height);
    let Some((columns, rows)) = columns.zip(rows) else {
        return Ok(canvas);
    };

    let region = Rect::new(
        Point2D::new(columns.source.start, rows.source.start),
        Size2D::new(
            columns.source.end - columns.source.start,
            rows.source.end - rows.source.start,
        ),
    );
    let resized = Size2D::new(columns.scaled, rows.scaled);
    log::trace!("reading {region:?} scaled to {resized:?}");

    let scaled = if resized == region.size {
        None
    } else {
        let decoded = decode(source, region)?;
        Some(imageops::resize(&decoded, resized.width, resized.height, filter))
    };

    for y in rows.canvas {
        let sy = (y as i64 - rows.offset) as u32;
        for x in columns.canvas.clone() {
            let sx = (x as i64 - columns.offset) as u32;
            let color = match &scaled {
                Some(image) => scaled_pixel(image, sx, sy)?,
                None => source.pixel(region.min_x() + sx, region.min_y() + sy)?,
            };
            canvas.put_pixel(x, y, &color)?;
        }
    }

    Ok(canvas)
}

/// Copy a `size` rectangle out of `source`, centered on `center` as far as
/// the source bounds allow. The crop is shifted, never shrunk, to stay in
/// bounds, unless `size` is larger than the source itself.
pub fn crop_to_bounds<D: AsRef<[u8]>>(
    source: &PixelBuffer<D>,
    size: Size2D<u32>,
    center: Point2D<Component>,
) -> Result<PixelBuffer> {
    let width = size.width.min(source.width());
    let height = size.height.min(source.height());
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimensions {
            width: size.width,
            height: size.height,
        });
    }

    let (center_x, center_y) = source.clamp_point(center);
    let x = center_x
        .saturating_sub(width / 2)
        .min(source.width() - width);
    let y = center_y
        .saturating_sub(height / 2)
        .min(source.height() - height);
    log::debug!("cropping {width}x{height} at {x},{y}");

    let format = source.format();
    let len = width as usize * height as usize * format.bytes_per_pixel();
    let mut data = Vec::with_capacity(len);
    for row in y..y + height {
        data.extend_from_slice(source.row_bytes(x, row, width)?);
    }
    PixelBuffer::packed(width, height, format, data)
}

/// Crop a `patch` around `center` and scale it up by `scale` with nearest
/// neighbour filtering, for a magnifier loupe.
pub fn magnify<D: AsRef<[u8]>>(
    source: &PixelBuffer<D>,
    center: Point2D<Component>,
    patch: Size2D<u32>,
    scale: u32,
) -> Result<PixelBuffer> {
    let cropped = crop_to_bounds(source, patch, center)?;
    let target = scaled_size(cropped.size(), scale)?;
    resample_with(&cropped, target, FitMode::Fill, FilterType::Nearest)
}

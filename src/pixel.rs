//! Raw pixel buffers and sampling a color at a point.
//!
//! A [`PixelBuffer`] is a grid of bytes described by a [`PixelFormat`]. The
//! format decides which channel every byte belongs to, so buffers produced by
//! platforms that store pixels as B,G,R,A (little endian, alpha first) are
//! read correctly without assuming RGBA.

use bitflags::bitflags;
use euclid::default::{Point2D, Size2D};

use crate::{
    error::{Error, Result},
    math::clamp_unit,
    models::Rgba,
    Color, Component, Space,
};

bitflags! {
    /// How the channels of a pixel are laid out in memory. This mirrors a
    /// 32-bit bitmap info word.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct PixelLayout : u8 {
        /// Every pixel carries an alpha channel.
        const HAS_ALPHA = 1 << 0;
        /// The alpha channel comes before the color channels. Ignored
        /// without [`PixelLayout::HAS_ALPHA`].
        const ALPHA_FIRST = 1 << 1;
        /// The pixel is stored little endian. With 8-bit components the
        /// channel order is reversed in memory; with 16-bit components each
        /// component is stored low byte first.
        const BYTE_ORDER_LITTLE = 1 << 2;
    }
}

impl PixelLayout {
    /// R,G,B,A in memory.
    pub const RGBA: Self = Self::HAS_ALPHA;

    /// B,G,R,A in memory (an ARGB pixel stored little endian).
    pub const BGRA: Self = Self::HAS_ALPHA
        .union(Self::ALPHA_FIRST)
        .union(Self::BYTE_ORDER_LITTLE);

    /// A,R,G,B in memory.
    pub const ARGB: Self = Self::HAS_ALPHA.union(Self::ALPHA_FIRST);

    /// Color channels only.
    pub const OPAQUE: Self = Self::empty();
}

/// The color channels a pixel stores.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorModel {
    /// A single intensity channel.
    Monochrome,
    /// Red, green and blue channels.
    #[default]
    Rgb,
}

impl ColorModel {
    fn color_channels(self) -> &'static [Channel] {
        match self {
            ColorModel::Monochrome => &[Channel::Gray],
            ColorModel::Rgb => &[Channel::Red, Channel::Green, Channel::Blue],
        }
    }
}

/// A single channel of a pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Red.
    Red,
    /// Green.
    Green,
    /// Blue.
    Blue,
    /// Intensity of a monochrome pixel.
    Gray,
    /// Alpha.
    Alpha,
}

/// The order channels are stored in, first byte first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChannelOrder {
    channels: [Channel; 4],
    len: usize,
}

impl ChannelOrder {
    /// The channels as a slice.
    pub fn as_slice(&self) -> &[Channel] {
        &self.channels[..self.len]
    }
}

/// Full description of how a pixel is stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PixelFormat {
    /// The color channels.
    pub model: ColorModel,
    /// Alpha placement and byte order.
    pub layout: PixelLayout,
    /// Bits per component. 8 and 16 are supported.
    pub bits_per_component: u8,
}

impl Default for PixelFormat {
    fn default() -> Self {
        Self::BGRA8
    }
}

impl PixelFormat {
    /// 8-bit B,G,R,A, the layout camera and photo library images use.
    pub const BGRA8: Self = Self::new(ColorModel::Rgb, PixelLayout::BGRA, 8);

    /// 8-bit R,G,B,A.
    pub const RGBA8: Self = Self::new(ColorModel::Rgb, PixelLayout::RGBA, 8);

    /// 8-bit grayscale without alpha.
    pub const GRAY8: Self = Self::new(ColorModel::Monochrome, PixelLayout::OPAQUE, 8);

    /// Create a new pixel format.
    pub const fn new(model: ColorModel, layout: PixelLayout, bits_per_component: u8) -> Self {
        Self {
            model,
            layout,
            bits_per_component,
        }
    }

    /// Number of channels per pixel.
    pub fn channels(&self) -> usize {
        let alpha = usize::from(self.layout.contains(PixelLayout::HAS_ALPHA));
        self.model.color_channels().len() + alpha
    }

    /// Bits per pixel.
    pub fn bits_per_pixel(&self) -> u32 {
        self.channels() as u32 * u32::from(self.bits_per_component)
    }

    /// Bytes per pixel.
    pub fn bytes_per_pixel(&self) -> usize {
        self.channels() * self.bytes_per_component()
    }

    fn bytes_per_component(&self) -> usize {
        usize::from(self.bits_per_component / 8)
    }

    /// The largest value a component can store, `2^bits - 1`.
    pub fn max_value(&self) -> Component {
        ((1_u32 << self.bits_per_component) - 1) as Component
    }

    /// Return an error if pixels in this format can not be read.
    pub fn validate(&self) -> Result<()> {
        match self.bits_per_component {
            8 | 16 => Ok(()),
            _ => Err(Error::UnsupportedFormat {
                bits_per_component: self.bits_per_component,
                bits_per_pixel: self.bits_per_pixel(),
            }),
        }
    }

    /// The order the channels of a pixel are stored in memory.
    pub fn channel_order(&self) -> ChannelOrder {
        let colors = self.model.color_channels();
        let mut channels = [Channel::Alpha; 4];
        let mut len = 0;
        let mut push = |channel| {
            channels[len] = channel;
            len += 1;
        };

        let has_alpha = self.layout.contains(PixelLayout::HAS_ALPHA);
        let alpha_first = self.layout.contains(PixelLayout::ALPHA_FIRST);
        if has_alpha && alpha_first {
            push(Channel::Alpha);
        }
        colors.iter().copied().for_each(&mut push);
        if has_alpha && !alpha_first {
            push(Channel::Alpha);
        }

        // A little endian 8-bit pixel is the same word with its bytes
        // reversed.
        let little = self.layout.contains(PixelLayout::BYTE_ORDER_LITTLE);
        if self.bits_per_component == 8 && little {
            channels[..len].reverse();
        }

        ChannelOrder { channels, len }
    }

    /// Read component `index` of the pixel in `bytes`, normalized to
    /// `[0, 1]`.
    fn read_component(&self, bytes: &[u8], index: usize) -> Component {
        let raw = match self.bits_per_component {
            16 => {
                let pair = [bytes[index * 2], bytes[index * 2 + 1]];
                if self.layout.contains(PixelLayout::BYTE_ORDER_LITTLE) {
                    u16::from_le_bytes(pair)
                } else {
                    u16::from_be_bytes(pair)
                }
            }
            _ => u16::from(bytes[index]),
        };
        Component::from(raw) / self.max_value()
    }

    fn write_component(&self, bytes: &mut [u8], index: usize, value: Component) {
        let raw = (clamp_unit(value) * self.max_value()).round() as u16;
        match self.bits_per_component {
            16 => {
                let pair = if self.layout.contains(PixelLayout::BYTE_ORDER_LITTLE) {
                    raw.to_le_bytes()
                } else {
                    raw.to_be_bytes()
                };
                bytes[index * 2..index * 2 + 2].copy_from_slice(&pair);
            }
            _ => bytes[index] = raw as u8,
        }
    }

    /// Decode a single pixel. `bytes` holds exactly one pixel.
    fn decode(&self, bytes: &[u8]) -> Rgba {
        let (mut red, mut green, mut blue, mut alpha) = (0.0, 0.0, 0.0, 1.0);
        for (index, channel) in self.channel_order().as_slice().iter().enumerate() {
            let value = self.read_component(bytes, index);
            match channel {
                Channel::Red => red = value,
                Channel::Green => green = value,
                Channel::Blue => blue = value,
                Channel::Gray => (red, green, blue) = (value, value, value),
                Channel::Alpha => alpha = value,
            }
        }
        Rgba::new(red, green, blue, alpha)
    }

    /// Encode a single pixel into `bytes`, which holds exactly one pixel.
    fn encode(&self, bytes: &mut [u8], color: &Rgba) {
        for (index, channel) in self.channel_order().as_slice().iter().enumerate() {
            let value = match channel {
                Channel::Red => color.red,
                Channel::Green => color.green,
                Channel::Blue => color.blue,
                Channel::Gray => {
                    let gray = Color::from(*color).to_space(Space::Monochrome);
                    gray.components.0
                }
                Channel::Alpha => color.alpha,
            };
            self.write_component(bytes, index, value);
        }
    }
}

/// A rectangular grid of raw pixel bytes.
///
/// The buffer does not own a particular storage type: anything that derefs
/// to bytes can be sampled, so callers can wrap borrowed platform memory
/// without copying it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer<D = Vec<u8>> {
    width: u32,
    height: u32,
    bytes_per_row: usize,
    format: PixelFormat,
    data: D,
}

impl<D: AsRef<[u8]>> PixelBuffer<D> {
    /// Wrap pixel data. `bytes_per_row` may be larger than the packed row
    /// size to allow for row padding.
    ///
    /// The length of `data` is not checked here. A buffer with missing data
    /// fails with [`Error::NoImageData`] when it is read.
    pub fn new(
        width: u32,
        height: u32,
        bytes_per_row: usize,
        format: PixelFormat,
        data: D,
    ) -> Result<Self> {
        format.validate()?;

        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        let min = width as usize * format.bytes_per_pixel();
        if bytes_per_row < min {
            return Err(Error::InvalidRowStride { bytes_per_row, min });
        }

        Ok(Self {
            width,
            height,
            bytes_per_row,
            format,
            data,
        })
    }

    /// Wrap tightly packed pixel data.
    pub fn packed(width: u32, height: u32, format: PixelFormat, data: D) -> Result<Self> {
        let bytes_per_row = width as usize * format.bytes_per_pixel();
        Self::new(width, height, bytes_per_row, format, data)
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Size in pixels.
    pub fn size(&self) -> Size2D<u32> {
        Size2D::new(self.width, self.height)
    }

    /// Bytes between the start of two consecutive rows.
    pub fn bytes_per_row(&self) -> usize {
        self.bytes_per_row
    }

    /// The format of every pixel.
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// The raw pixel bytes.
    pub fn data(&self) -> &[u8] {
        self.data.as_ref()
    }

    /// Unwrap the raw pixel storage.
    pub fn into_data(self) -> D {
        self.data
    }

    /// Byte offset of the pixel at `x`, `y`.
    fn offset(&self, x: u32, y: u32) -> usize {
        self.bytes_per_row * y as usize + x as usize * self.format.bytes_per_pixel()
    }

    /// The bytes of the pixel at `x`, `y`.
    fn pixel_bytes(&self, x: u32, y: u32) -> Result<&[u8]> {
        let start = self.offset(x, y);
        let end = start + self.format.bytes_per_pixel();
        self.data().get(start..end).ok_or(Error::NoImageData)
    }

    /// Bytes of `width` pixels starting at `x`, `y`.
    pub(crate) fn row_bytes(&self, x: u32, y: u32, width: u32) -> Result<&[u8]> {
        let start = self.offset(x, y);
        let end = start + width as usize * self.format.bytes_per_pixel();
        self.data().get(start..end).ok_or(Error::NoImageData)
    }

    /// Decode the pixel at integer coordinates.
    pub fn pixel(&self, x: u32, y: u32) -> Result<Rgba> {
        if x >= self.width || y >= self.height {
            return Err(Error::OutOfBounds { x, y });
        }
        self.pixel_bytes(x, y).map(|bytes| self.format.decode(bytes))
    }

    /// Clamp a point into the buffer, returning the integer pixel it falls
    /// on. Points outside the buffer land on the nearest edge pixel.
    pub fn clamp_point(&self, point: Point2D<Component>) -> (u32, u32) {
        (
            clamp_coordinate(point.x, self.width),
            clamp_coordinate(point.y, self.height),
        )
    }

    /// Sample the color at `point`. Points outside the buffer sample the
    /// nearest edge pixel.
    pub fn try_sample(&self, point: Point2D<Component>) -> Result<Rgba> {
        if self.data().is_empty() {
            return Err(Error::NoImageData);
        }

        let (x, y) = self.clamp_point(point);
        let color = self.pixel(x, y)?;
        log::trace!("sampled {x},{y}: {color}");
        Ok(color)
    }

    /// Like [`PixelBuffer::try_sample`], but falls back to opaque white when
    /// the buffer has no pixel data.
    pub fn sample(&self, point: Point2D<Component>) -> Rgba {
        self.try_sample(point).unwrap_or_else(|err| {
            log::warn!("{err}, sampling white");
            Rgba::WHITE
        })
    }
}

impl<D: AsRef<[u8]> + AsMut<[u8]>> PixelBuffer<D> {
    /// Encode `color` into the pixel at `x`, `y`.
    pub fn put_pixel(&mut self, x: u32, y: u32, color: &Rgba) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::OutOfBounds { x, y });
        }
        let start = self.offset(x, y);
        let end = start + self.format.bytes_per_pixel();
        let format = self.format;
        let bytes = self
            .data
            .as_mut()
            .get_mut(start..end)
            .ok_or(Error::NoImageData)?;
        format.encode(bytes, color);
        Ok(())
    }
}

impl PixelBuffer<Vec<u8>> {
    /// Allocate a packed buffer with every pixel set to zero bytes.
    pub fn zeroed(width: u32, height: u32, format: PixelFormat) -> Result<Self> {
        let len = (width as usize)
            .checked_mul(height as usize)
            .and_then(|pixels| pixels.checked_mul(format.bytes_per_pixel()))
            .ok_or(Error::InvalidDimensions { width, height })?;
        Self::packed(width, height, format, vec![0; len])
    }

    /// Allocate a packed buffer and fill it with the colors returned by `f`
    /// for every pixel.
    pub fn from_rgba_fn(
        width: u32,
        height: u32,
        format: PixelFormat,
        mut f: impl FnMut(u32, u32) -> Rgba,
    ) -> Result<Self> {
        let mut buffer = Self::zeroed(width, height, format)?;
        for y in 0..height {
            for x in 0..width {
                buffer.put_pixel(x, y, &f(x, y))?;
            }
        }
        Ok(buffer)
    }
}

fn clamp_coordinate(value: Component, len: u32) -> u32 {
    let max = len.saturating_sub(1) as Component;
    let value = if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, max)
    };
    value.floor() as u32
}

//! Error types for color conversion and pixel sampling.

use thiserror::Error;

use crate::Space;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while converting or sampling colors.
///
/// None of these are fatal to an interactive session: every fallible
/// operation has a sibling that substitutes a documented default.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The string is not 6 or 8 hex digits after stripping `#`.
    #[error("malformed hex color: {0:?}")]
    MalformedHex(String),

    /// The color is not in a monochrome or RGB color space.
    #[error("color space {0:?} has no direct RGB representation")]
    InvalidColorSpace(Space),

    /// The pixel buffer has no decodable pixel data.
    #[error("pixel buffer has no image data")]
    NoImageData,

    /// Width or height is zero.
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Rows are too short to hold `width` pixels.
    #[error("row stride of {bytes_per_row} bytes is shorter than {min} bytes")]
    InvalidRowStride {
        /// The row stride given.
        bytes_per_row: usize,
        /// The packed row size.
        min: usize,
    },

    /// The pixel coordinate lies outside the buffer.
    #[error("pixel {x},{y} is out of bounds")]
    OutOfBounds {
        /// Horizontal pixel coordinate.
        x: u32,
        /// Vertical pixel coordinate.
        y: u32,
    },

    /// The pixel layout can not be read.
    #[error(
        "unsupported pixel format: {bits_per_component} bits per component, \
         {bits_per_pixel} bits per pixel"
    )]
    UnsupportedFormat {
        /// Bits per component.
        bits_per_component: u8,
        /// Bits per pixel.
        bits_per_pixel: u32,
    },
}

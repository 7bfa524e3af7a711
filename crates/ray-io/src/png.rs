//! PNG output.
//!
//! Writes an [`Image`] as 8-bit RGBA with an sRGB chunk. Rows are written
//! top to bottom, which flips the bottom-up buffer vertically (see
//! [`Image::to_rgba8`]).
//!
//! # Example
//!
//! ```rust,ignore
//! use ray_core::Image;
//! use ray_io::png;
//!
//! let image = Image::new(1025, 512);
//! png::write("data/img.png", &image)?;
//! ```

use std::fs;
use std::io::Write;
use std::path::Path;

use ray_core::Image;
use tracing::{debug, trace};

use crate::{IoError, IoResult};

/// Encodes `image` as PNG into `writer`.
///
/// # Errors
///
/// [`IoError::EmptyImage`] for a zero-sized image, [`IoError::EncodeError`]
/// if the encoder fails.
pub fn encode<W: Write>(image: &Image, writer: W) -> IoResult<()> {
    let (width, height) = image.dimensions();
    if image.is_empty() {
        return Err(IoError::EmptyImage { width, height });
    }

    let mut encoder = png::Encoder::new(writer, width, height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::default());
    encoder.set_source_srgb(png::SrgbRenderingIntent::Perceptual);

    let mut png_writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(e.to_string()))?;

    let data = image.to_rgba8();
    trace!(bytes = data.len(), "png::encode");

    png_writer
        .write_image_data(&data)
        .map_err(|e| IoError::EncodeError(e.to_string()))?;
    png_writer
        .finish()
        .map_err(|e| IoError::EncodeError(e.to_string()))?;

    Ok(())
}

/// Writes `image` to a PNG file at `path`.
///
/// The parent directory must exist. The image is encoded in memory first;
/// if encoding fails an existing file at `path` is left untouched.
pub fn write<P: AsRef<Path>>(path: P, image: &Image) -> IoResult<()> {
    let path = path.as_ref();
    debug!(path = %path.display(), width = image.width(), height = image.height(), "Writing PNG");

    let mut bytes = Vec::new();
    encode(image, &mut bytes)?;
    fs::write(path, &bytes)?;

    Ok(())
}

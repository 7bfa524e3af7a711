//! # ray-io
//!
//! Image output for ray-rs.
//!
//! - **PNG** - 8-bit RGBA with sRGB chunk
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use ray_core::Image;
//!
//! let image = Image::new(1025, 512);
//! ray_io::write("data/img.png", &image)?;
//! ```
//!
//! # Feature Flags
//!
//! - `png` - PNG support (default)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

use std::path::Path;

use ray_core::Image;

pub mod detect;
pub mod error;

#[cfg(feature = "png")]
pub mod png;

pub use detect::Format;
pub use error::{IoError, IoResult};

/// Writes an image, choosing the encoder from the file extension.
///
/// # Errors
///
/// [`IoError::UnsupportedFormat`] if no enabled encoder matches the
/// extension, otherwise whatever the encoder returns.
pub fn write<P: AsRef<Path>>(path: P, image: &Image) -> IoResult<()> {
    let path = path.as_ref();
    let format = Format::from_extension(path);

    match format {
        #[cfg(feature = "png")]
        Format::Png => png::write(path, image),

        #[cfg(not(feature = "png"))]
        Format::Png => Err(IoError::UnsupportedFormat("png".to_string())),

        Format::Unknown => Err(IoError::UnsupportedFormat(
            path.extension()
                .and_then(|e| e.to_str())
                .unwrap_or("unknown")
                .to_string(),
        )),
    }
}

//! # ray-core
//!
//! Core types built on `ray-math`:
//!
//! - [`Image`] - RGBA pixel buffer with bottom-up rows
//! - [`Color`] - RGBA color (`Vec4` with `r/g/b/a` accessors)
//! - [`Ray`] - origin plus unit direction
//! - [`render`] - gradient and sky fills
//! - [`Error`] - buffer errors
//!
//! ## Crate Structure
//!
//! ```text
//! ray-math
//!    ^
//!    |
//! ray-core (this crate)
//!    ^
//!    +-- ray-io (PNG output)
//!    +-- ray-cli (image fills)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod image;
pub mod ray;
pub mod render;

pub use error::*;
pub use image::*;
pub use ray::*;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use ray_core::prelude::*;
///
/// let img = Image::filled(2, 2, Color::ONE);
/// assert_eq!(img.pixel(1, 1), Color::ONE);
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::image::{Color, Image};
    pub use crate::ray::Ray;
    pub use crate::render::Camera;
    pub use ray_math::{lerp, vec2, vec3, vec4, Vec2, Vec3, Vec4};
}

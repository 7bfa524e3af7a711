//! Per-pixel image fills.
//!
//! Each renderer builds a fresh [`Image`] and visits every pixel once via
//! [`Image::fill_with`].

use ray_math::{lerp, vec3, Vec3};

use crate::{Color, Image, Ray};

/// Sky color straight down (`direction.y = -1`).
pub const SKY_HORIZON: Vec3 = Vec3::ONE;

/// Sky color straight up (`direction.y = 1`).
pub const SKY_ZENITH: Vec3 = Vec3::from_array([0.5, 0.7, 1.0]);

/// Flat test gradient: `r = x / width`, `g = y / height`, `b = 0.25`.
///
/// Red grows to the right, green grows upward.
pub fn gradient(width: u32, height: u32) -> Image {
    let mut image = Image::new(width, height);
    image.fill_with(|x, y| gradient_color(x, y, width, height));
    image
}

fn gradient_color(x: u32, y: u32, width: u32, height: u32) -> Color {
    Color::new(x as f32 / width as f32, y as f32 / height as f32, 0.25, 1.0)
}

/// Camera at the origin looking down `-z` through the plane `z = -1`.
///
/// Plane coordinates span `[-aspect, aspect] x [-1, 1]`, so pixels are square.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Eye position
    pub position: Vec3,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
}

impl Camera {
    /// Camera at the origin for a `width x height` image.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            position: Vec3::ZERO,
            width,
            height,
        }
    }

    /// Point on the image plane hit by pixel `(x, y)`.
    pub fn extremity(&self, x: u32, y: u32) -> Vec3 {
        let w = self.width as f32;
        let h = self.height as f32;
        vec3((2.0 * x as f32 - w) / h, (2.0 * y as f32 - h) / h, -1.0)
    }

    /// Primary ray through pixel `(x, y)`.
    pub fn ray(&self, x: u32, y: u32) -> Ray {
        Ray::new(self.position, self.extremity(x, y) - self.position)
    }
}

/// Background color seen along `ray`, blended on the direction's height.
pub fn sky_color(ray: &Ray) -> Color {
    let t = 0.5 + 0.5 * ray.direction.y();
    lerp(SKY_HORIZON, SKY_ZENITH, t).extend(1.0)
}

/// Sky backdrop: one primary ray per pixel, colored by [`sky_color`].
pub fn sky(width: u32, height: u32) -> Image {
    let camera = Camera::new(width, height);
    let mut image = Image::new(width, height);
    image.fill_with(|x, y| sky_color(&camera.ray(x, y)));
    image
}

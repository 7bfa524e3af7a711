//! Pixel buffer filled one pixel at a time.
//!
//! [`Image`] owns a `width x height` grid of [`Color`] values, stored
//! row-major. Coordinates are `(x, y)` with `x` the column and `y` the row;
//! `y = 0` is the **bottom** row, so [`Image::to_rgba8`] emits rows in
//! reverse to get a top-down raster.
//!
//! ```text
//! y = height-1  [ .. .. .. ]  <- first row in to_rgba8()
//!      ...
//! y = 0         [ .. .. .. ]  <- last row in to_rgba8()
//! ```
//!
//! # Usage
//!
//! ```rust
//! use ray_core::{Color, Image};
//!
//! let mut img = Image::new(4, 2);
//! img[(1, 0)] = Color::new(1.0, 0.0, 0.0, 1.0);
//! assert_eq!(img.pixel(1, 0).r(), 1.0);
//!
//! // Bottom row is written last.
//! let bytes = img.to_rgba8();
//! assert_eq!(&bytes[4 * 5..4 * 6], &[255, 0, 0, 255]);
//! ```

use std::ops::{Index, IndexMut};

use ray_math::Vec4;

use crate::{Error, Result};

/// RGBA color with `f32` channels, nominally in `[0, 1]`.
pub type Color = Vec4;

/// Owned RGBA pixel buffer.
///
/// New images are zero-filled (transparent black).
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    /// Row-major pixels, `y * width + x`
    data: Vec<Color>,
    /// Image width in pixels
    width: u32,
    /// Image height in pixels
    height: u32,
}

impl Image {
    /// Creates a new image filled with zeros.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ray_core::{Color, Image};
    ///
    /// let img = Image::new(1025, 512);
    /// assert_eq!(img.dimensions(), (1025, 512));
    /// assert_eq!(img.pixel(0, 0), Color::ZERO);
    /// ```
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, Color::ZERO)
    }

    /// Creates an image where every pixel is `color`.
    pub fn filled(width: u32, height: u32, color: Color) -> Self {
        Self {
            data: vec![color; width as usize * height as usize],
            width,
            height,
        }
    }

    /// Creates an image from row-major pixels (bottom row first).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `pixels.len()` is not
    /// `width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Color>) -> Result<Self> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("expected {} pixels, got {}", expected, pixels.len()),
            ));
        }
        Ok(Self {
            data: pixels,
            width,
            height,
        })
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the image has no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Row-major pixel data.
    #[inline]
    pub fn data(&self) -> &[Color] {
        &self.data
    }

    /// Mutable row-major pixel data.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [Color] {
        &mut self.data
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| y as usize * self.width as usize + x as usize)
    }

    #[inline]
    #[track_caller]
    fn offset_or_panic(&self, x: u32, y: u32) -> usize {
        match self.offset(x, y) {
            Some(offset) => offset,
            None => panic!(
                "pixel ({}, {}) out of bounds for image {}x{}",
                x, y, self.width, self.height
            ),
        }
    }

    /// Returns the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is out of bounds.
    #[inline]
    #[track_caller]
    pub fn pixel(&self, x: u32, y: u32) -> Color {
        self.data[self.offset_or_panic(x, y)]
    }

    /// Returns the pixel at (x, y), or `None` if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.offset(x, y).map(|offset| self.data[offset])
    }

    /// Mutable reference to the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is out of bounds.
    #[inline]
    #[track_caller]
    pub fn pixel_mut(&mut self, x: u32, y: u32) -> &mut Color {
        let offset = self.offset_or_panic(x, y);
        &mut self.data[offset]
    }

    /// Sets the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is out of bounds.
    #[inline]
    #[track_caller]
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        *self.pixel_mut(x, y) = color;
    }

    /// Sets the pixel at (x, y), reporting out-of-bounds coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if (x, y) is outside the image.
    pub fn try_set_pixel(&mut self, x: u32, y: u32, color: Color) -> Result<()> {
        let offset = self
            .offset(x, y)
            .ok_or_else(|| Error::out_of_bounds(x, y, self.width, self.height))?;
        self.data[offset] = color;
        Ok(())
    }

    /// Fills the entire image with `color`.
    pub fn fill(&mut self, color: Color) {
        self.data.fill(color);
    }

    /// Sets every pixel to `f(x, y)`, row by row from `y = 0`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ray_core::{Color, Image};
    ///
    /// let mut img = Image::new(2, 2);
    /// img.fill_with(|x, y| Color::new(x as f32, y as f32, 0.0, 1.0));
    /// assert_eq!(img.pixel(1, 0), Color::new(1.0, 0.0, 0.0, 1.0));
    /// ```
    pub fn fill_with<F>(&mut self, mut f: F)
    where
        F: FnMut(u32, u32) -> Color,
    {
        let width = self.width as usize;
        if width == 0 {
            return;
        }
        for (y, row) in self.data.chunks_exact_mut(width).enumerate() {
            for (x, pixel) in row.iter_mut().enumerate() {
                *pixel = f(x as u32, y as u32);
            }
        }
    }

    /// Returns row `y` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    #[track_caller]
    pub fn row(&self, y: u32) -> &[Color] {
        assert!(y < self.height, "row {} out of bounds for height {}", y, self.height);
        let start = y as usize * self.width as usize;
        &self.data[start..start + self.width as usize]
    }

    /// Iterates over all pixels with their coordinates, bottom row first.
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32, Color)> + '_ {
        (0..self.height).flat_map(move |y| {
            self.row(y)
                .iter()
                .enumerate()
                .map(move |(x, c)| (x as u32, y, *c))
        })
    }

    /// Converts to interleaved 8-bit RGBA, top row first.
    ///
    /// Each channel becomes `clamp(255 * c, 0, 255)` truncated to `u8`;
    /// NaN channels become 0.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.data.len() * 4);
        for y in (0..self.height).rev() {
            for color in self.row(y) {
                out.extend(color.to_array().map(channel_to_u8));
            }
        }
        out
    }
}

#[inline]
fn channel_to_u8(c: f32) -> u8 {
    // `as` saturates and maps NaN to 0.
    (255.0 * c).clamp(0.0, 255.0) as u8
}

impl Index<(u32, u32)> for Image {
    type Output = Color;

    #[inline]
    #[track_caller]
    fn index(&self, (x, y): (u32, u32)) -> &Color {
        &self.data[self.offset_or_panic(x, y)]
    }
}

impl IndexMut<(u32, u32)> for Image {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut Color {
        self.pixel_mut(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_new() {
        let img = Image::new(100, 50);
        assert_eq!(img.width(), 100);
        assert_eq!(img.height(), 50);
        assert_eq!(img.pixel_count(), 5000);
        assert!(img.data().iter().all(|c| *c == Color::ZERO));
    }

    #[test]
    fn test_image_filled() {
        let img = Image::filled(10, 10, Color::new(1.0, 0.5, 0.25, 1.0));
        assert_eq!(img.pixel(0, 0), Color::new(1.0, 0.5, 0.25, 1.0));
        assert_eq!(img.pixel(9, 9), Color::new(1.0, 0.5, 0.25, 1.0));
    }

    #[test]
    fn test_image_set_get_pixel() {
        let mut img = Image::new(10, 10);
        img.set_pixel(5, 3, Color::new(1.0, 0.0, 0.0, 1.0));
        assert_eq!(img.pixel(5, 3), Color::new(1.0, 0.0, 0.0, 1.0));
        assert_eq!(img.get_pixel(3, 5), Some(Color::ZERO));
        assert_eq!(img.get_pixel(10, 0), None);
    }

    #[test]
    fn test_index_and_pixel_mut_alias() {
        let mut img = Image::new(3, 2);
        img[(2, 1)].set_g(0.5);
        img.pixel_mut(2, 1).set_a(1.0);
        assert_eq!(img[(2, 1)], Color::new(0.0, 0.5, 0.0, 1.0));
        assert_eq!(img.data()[5], img[(2, 1)]);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_index_x_past_width_panics() {
        let img = Image::new(3, 2);
        // (3, 0) would alias (0, 1) without the column check.
        let _ = img[(3, 0)];
    }

    #[test]
    fn test_try_set_pixel() {
        let mut img = Image::new(4, 4);
        assert!(img.try_set_pixel(3, 3, Color::ONE).is_ok());
        assert_eq!(
            img.try_set_pixel(4, 0, Color::ONE),
            Err(Error::out_of_bounds(4, 0, 4, 4))
        );
    }

    #[test]
    fn test_from_pixels() {
        let img = Image::from_pixels(2, 2, vec![Color::ONE; 4]).unwrap();
        assert_eq!(img.pixel(1, 1), Color::ONE);

        let err = Image::from_pixels(2, 2, vec![Color::ONE; 3]).unwrap_err();
        assert!(matches!(err, Error::InvalidDimensions { width: 2, height: 2, .. }));
    }

    #[test]
    fn test_fill_with_coordinates() {
        let mut img = Image::new(3, 2);
        img.fill_with(|x, y| Color::new(x as f32, y as f32, 0.0, 0.0));
        for (x, y, c) in img.pixels() {
            assert_eq!((c.x(), c.y()), (x as f32, y as f32));
        }
        assert_eq!(img.pixels().count(), 6);
    }

    #[test]
    fn test_fill() {
        let mut img = Image::new(2, 2);
        img.fill(Color::splat(0.5));
        assert!(img.data().iter().all(|c| *c == Color::splat(0.5)));
    }

    #[test]
    fn test_channel_to_u8() {
        assert_eq!(channel_to_u8(0.0), 0);
        assert_eq!(channel_to_u8(1.0), 255);
        assert_eq!(channel_to_u8(0.5), 127);
        assert_eq!(channel_to_u8(-3.0), 0);
        assert_eq!(channel_to_u8(7.0), 255);
        assert_eq!(channel_to_u8(f32::INFINITY), 255);
        assert_eq!(channel_to_u8(f32::NAN), 0);
    }

    #[test]
    fn test_to_rgba8_flips_rows() {
        let mut img = Image::new(2, 2);
        img.set_pixel(0, 0, Color::new(1.0, 0.0, 0.0, 1.0));
        img.set_pixel(1, 1, Color::new(0.0, 0.0, 1.0, 1.0));

        let bytes = img.to_rgba8();
        assert_eq!(bytes.len(), 16);
        // Top row (y = 1) first.
        assert_eq!(&bytes[0..4], &[0, 0, 0, 0]);
        assert_eq!(&bytes[4..8], &[0, 0, 255, 255]);
        // Bottom row (y = 0) last.
        assert_eq!(&bytes[8..12], &[255, 0, 0, 255]);
        assert_eq!(&bytes[12..16], &[0, 0, 0, 0]);
    }

    #[test]
    fn test_empty_image() {
        let img = Image::new(0, 5);
        assert!(img.is_empty());
        assert!(img.to_rgba8().is_empty());
        assert_eq!(img.pixels().count(), 0);
    }
}

//! Interpolation helpers.
//!
//! [`lerp`] works on anything that scales by `f32` and adds, so the same
//! function blends scalars and vectors:
//!
//! ```rust
//! use ray_math::{lerp, vec3, Vec3};
//!
//! assert_eq!(lerp(0.0_f32, 10.0, 0.5), 5.0);
//!
//! let sky = lerp(Vec3::ONE, vec3(0.5, 0.7, 1.0), 1.0);
//! assert_eq!(sky, vec3(0.5, 0.7, 1.0));
//! ```

use std::ops::{Add, Mul};

/// Linear interpolation between two values.
///
/// Returns `a` when `t = 0.0`, and `b` when `t = 1.0`.
/// For values outside [0, 1], the result is extrapolated.
///
/// # Formula
///
/// `(1 - t) * a + t * b`
///
/// Both endpoints are exact, unlike `a + (b - a) * t`.
#[inline]
pub fn lerp<T>(a: T, b: T, t: f32) -> T
where
    f32: Mul<T, Output = T>,
    T: Add<Output = T>,
{
    (1.0 - t) * a + t * b
}

/// Clamps a value to [0, 1].
///
/// NaN passes through unchanged.
#[inline]
pub fn saturate(value: f32) -> f32 {
    value.clamp(0.0, 1.0)
}

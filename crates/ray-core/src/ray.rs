//! Half-line from an origin along a unit direction.

use ray_math::Vec3;

/// A ray `origin + t * direction`.
///
/// The direction is normalized on construction, so `t` measures distance
/// along the ray.
///
/// # Example
///
/// ```rust
/// use ray_core::Ray;
/// use ray_math::vec3;
///
/// let ray = Ray::new(vec3(1.0, 0.0, 0.0), vec3(0.0, 0.0, -4.0));
/// assert_eq!(ray.direction, vec3(0.0, 0.0, -1.0));
/// assert_eq!(ray.at(2.0), vec3(1.0, 0.0, -2.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Ray {
    /// Start point
    pub origin: Vec3,
    /// Unit direction
    pub direction: Vec3,
}

impl Ray {
    /// Creates a ray, normalizing `direction`.
    ///
    /// A zero `direction` is not rejected; it normalizes to NaN.
    #[inline]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Point at distance `t` along the ray.
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + t * self.direction
    }
}

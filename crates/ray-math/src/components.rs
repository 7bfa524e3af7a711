//! Named component accessors and per-arity constructors.
//!
//! Every arity exposes two sets of names over the same storage slots:
//!
//! | Arity | Geometric      | Alternate       |
//! |-------|----------------|-----------------|
//! | 2     | `x y`          | `u v`           |
//! | 3     | `x y z`        | `r g b`         |
//! | 4     | `x y z w`      | `r g b a`       |
//!
//! Each name comes with a getter (`x()`), a setter (`set_x()`) and a
//! mutable reference (`x_mut()`). Writing through one name and reading
//! through its alias returns the same value.
//!
//! ```rust
//! use ray_math::Vec3;
//!
//! let mut color = Vec3::new(0.0, 0.0, 0.0);
//! color.set_r(0.5);
//! *color.y_mut() = 0.25;
//! assert_eq!(color.x(), 0.5);
//! assert_eq!(color.g(), 0.25);
//! ```

use crate::{Vec2, Vec3, Vec4, Vector};

macro_rules! components {
    ($n:literal { $($idx:literal => $get:ident, $set:ident, $get_mut:ident;)+ }) => {
        impl Vector<$n> {
            $(
                #[doc = concat!("Returns component ", stringify!($idx), " as `", stringify!($get), "`.")]
                #[inline]
                pub const fn $get(&self) -> f32 {
                    self.0[$idx]
                }

                #[doc = concat!("Sets component ", stringify!($idx), " through `", stringify!($get), "`.")]
                #[inline]
                pub fn $set(&mut self, value: f32) {
                    self.0[$idx] = value;
                }

                #[doc = concat!("Mutable reference to component ", stringify!($idx), " as `", stringify!($get), "`.")]
                #[inline]
                pub fn $get_mut(&mut self) -> &mut f32 {
                    &mut self.0[$idx]
                }
            )+
        }
    };
}

components!(2 {
    0 => x, set_x, x_mut;
    1 => y, set_y, y_mut;
    0 => u, set_u, u_mut;
    1 => v, set_v, v_mut;
});

components!(3 {
    0 => x, set_x, x_mut;
    1 => y, set_y, y_mut;
    2 => z, set_z, z_mut;
    0 => r, set_r, r_mut;
    1 => g, set_g, g_mut;
    2 => b, set_b, b_mut;
});

components!(4 {
    0 => x, set_x, x_mut;
    1 => y, set_y, y_mut;
    2 => z, set_z, z_mut;
    3 => w, set_w, w_mut;
    0 => r, set_r, r_mut;
    1 => g, set_g, g_mut;
    2 => b, set_b, b_mut;
    3 => a, set_a, a_mut;
});

impl Vector<2> {
    /// Unit X vector (1, 0).
    pub const X: Self = Self::new(1.0, 0.0);

    /// Unit Y vector (0, 1).
    pub const Y: Self = Self::new(0.0, 1.0);

    /// Creates a vector from `x` and `y`.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self([x, y])
    }

    /// Appends a third component.
    #[inline]
    pub const fn extend(self, z: f32) -> Vec3 {
        Vec3::new(self.0[0], self.0[1], z)
    }
}

impl Vector<3> {
    /// Unit X vector (1, 0, 0).
    pub const X: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit Y vector (0, 1, 0).
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit Z vector (0, 0, 1).
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a vector from `x`, `y` and `z`.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self([x, y, z])
    }

    /// Cross product.
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        let [ax, ay, az] = self.0;
        let [bx, by, bz] = other.0;
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }

    /// Appends a fourth component, e.g. an alpha channel.
    #[inline]
    pub const fn extend(self, w: f32) -> Vec4 {
        Vec4::new(self.0[0], self.0[1], self.0[2], w)
    }

    /// Drops the last component.
    #[inline]
    pub const fn truncate(self) -> Vec2 {
        Vec2::new(self.0[0], self.0[1])
    }
}

impl Vector<4> {
    /// Creates a vector from `x`, `y`, `z` and `w`.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self([x, y, z, w])
    }

    /// Drops the last component.
    #[inline]
    pub const fn truncate(self) -> Vec3 {
        Vec3::new(self.0[0], self.0[1], self.0[2])
    }
}

/// Shorthand for [`Vec2::new`].
#[inline]
pub const fn vec2(x: f32, y: f32) -> Vec2 {
    Vec2::new(x, y)
}

/// Shorthand for [`Vec3::new`].
#[inline]
pub const fn vec3(x: f32, y: f32, z: f32) -> Vec3 {
    Vec3::new(x, y, z)
}

/// Shorthand for [`Vec4::new`].
#[inline]
pub const fn vec4(x: f32, y: f32, z: f32, w: f32) -> Vec4 {
    Vec4::new(x, y, z, w)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec2_uv_aliases_xy() {
        let mut v = Vec2::default();
        v.set_x(5.0);
        assert_eq!(v.u(), 5.0);
        *v.v_mut() = -1.0;
        assert_eq!(v.y(), -1.0);
        assert_eq!(v, vec2(5.0, -1.0));
    }

    #[test]
    fn test_vec3_rgb_aliases_xyz() {
        let mut v = vec3(1.0, 2.0, 3.0);
        assert_eq!((v.r(), v.g(), v.b()), (1.0, 2.0, 3.0));
        v.set_b(7.0);
        assert_eq!(v.z(), 7.0);
        *v.x_mut() += 1.0;
        assert_eq!(v.r(), 2.0);
        v.set_g(0.0);
        assert_eq!(v[1], 0.0);
    }

    #[test]
    fn test_vec4_rgba_aliases_xyzw() {
        let mut v = Vec4::ZERO;
        v.set_w(0.5);
        assert_eq!(v.a(), 0.5);
        *v.r_mut() = 0.25;
        assert_eq!(v.x(), 0.25);
        v.set_y(0.75);
        assert_eq!(v.g(), 0.75);
        v.set_b(1.0);
        assert_eq!(v.z(), 1.0);
        assert_eq!(v, vec4(0.25, 0.75, 1.0, 0.5));
    }

    #[test]
    fn test_units() {
        assert_eq!(Vec3::X + Vec3::Y + Vec3::Z, Vec3::ONE);
        assert_eq!(Vec2::X + Vec2::Y, Vec2::ONE);
    }

    #[test]
    fn test_cross() {
        assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
        assert_eq!(Vec3::Y.cross(Vec3::X), -Vec3::Z);
    }

    #[test]
    fn test_extend_truncate() {
        let rgb = vec3(0.1, 0.2, 0.3);
        let rgba = rgb.extend(1.0);
        assert_eq!(rgba, vec4(0.1, 0.2, 0.3, 1.0));
        assert_eq!(rgba.truncate(), rgb);
        assert_eq!(rgb.truncate(), vec2(0.1, 0.2));
        assert_eq!(vec2(1.0, 2.0).extend(3.0), vec3(1.0, 2.0, 3.0));
    }
}

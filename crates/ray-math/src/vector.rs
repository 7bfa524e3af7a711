//! Fixed-size `f32` vector shared by every arity.
//!
//! [`Vector<N>`] stores `N` components in positional order. The public
//! aliases [`Vec2`], [`Vec3`] and [`Vec4`] are the only arities the rest of
//! the workspace uses; their named accessors (`x`/`u`, `r`/`g`/`b`, ...)
//! are generated in [`crate::components`].
//!
//! All arithmetic is componentwise and unchecked: dividing by zero yields
//! IEEE-754 infinities or NaN, never an error.
//!
//! # Usage
//!
//! ```rust
//! use ray_math::{vec3, Vec3};
//!
//! let a = vec3(1.0, 2.0, 3.0);
//! let b = Vec3::splat(0.5);
//!
//! assert_eq!(a + b, vec3(1.5, 2.5, 3.5));
//! assert_eq!(2.0 * a, a * 2.0);
//! assert_eq!(-a, vec3(-1.0, -2.0, -3.0));
//! ```

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::interp::saturate;

/// A vector of `N` `f32` components.
///
/// Components are addressed positionally (`v[0]`) or, for the 2/3/4
/// aliases, by name. Named accessors are views over the same storage and
/// carry no state of their own.
///
/// # Example
///
/// ```rust
/// use ray_math::{Vec2, Vector};
///
/// let mut uv = Vec2::new(0.25, 0.75);
/// uv.set_x(1.0);
/// assert_eq!(uv.u(), 1.0);
///
/// let v: Vector<2> = Vector::from_array([0.25, 0.75]);
/// assert_eq!(v[1], uv.v());
/// ```
#[derive(Debug, Clone, Copy)]
#[repr(transparent)]
pub struct Vector<const N: usize>(pub(crate) [f32; N]);

/// Two components: `(x, y)` or `(u, v)`.
pub type Vec2 = Vector<2>;

/// Three components: `(x, y, z)` or `(r, g, b)`.
pub type Vec3 = Vector<3>;

/// Four components: `(x, y, z, w)` or `(r, g, b, a)`.
pub type Vec4 = Vector<4>;

impl<const N: usize> Vector<N> {
    /// All components zero.
    pub const ZERO: Self = Self([0.0; N]);

    /// All components one.
    pub const ONE: Self = Self([1.0; N]);

    /// Number of components.
    pub const DIM: usize = N;

    /// Creates a vector from its components in declared order.
    #[inline]
    pub const fn from_array(components: [f32; N]) -> Self {
        Self(components)
    }

    /// Creates a vector with every component set to `value`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ray_math::{vec3, Vec3};
    ///
    /// assert_eq!(Vec3::splat(0.5), vec3(0.5, 0.5, 0.5));
    /// ```
    #[inline]
    pub const fn splat(value: f32) -> Self {
        Self([value; N])
    }

    /// Returns the components as an array.
    #[inline]
    pub const fn to_array(self) -> [f32; N] {
        self.0
    }

    /// Borrows the components as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    /// Applies `f` to every component.
    #[inline]
    pub fn map(self, f: impl FnMut(f32) -> f32) -> Self {
        Self(self.0.map(f))
    }

    /// Combines two vectors component by component.
    #[inline]
    pub fn zip_map(self, other: Self, mut f: impl FnMut(f32, f32) -> f32) -> Self {
        Self(std::array::from_fn(|i| f(self.0[i], other.0[i])))
    }

    /// Adds `rhs` componentwise in place. Same as `*self += rhs`.
    ///
    /// Returns `self` so calls can be chained:
    ///
    /// ```rust
    /// use ray_math::vec2;
    ///
    /// let mut v = vec2(1.0, 2.0);
    /// v.add_mut(vec2(1.0, 1.0)).mul_scalar_mut(2.0);
    /// assert_eq!(v, vec2(4.0, 6.0));
    /// ```
    #[inline]
    pub fn add_mut(&mut self, rhs: Self) -> &mut Self {
        for (c, r) in self.0.iter_mut().zip(rhs.0) {
            *c += r;
        }
        self
    }

    /// Subtracts `rhs` componentwise in place. Same as `*self -= rhs`.
    #[inline]
    pub fn sub_mut(&mut self, rhs: Self) -> &mut Self {
        for (c, r) in self.0.iter_mut().zip(rhs.0) {
            *c -= r;
        }
        self
    }

    /// Multiplies by `rhs` componentwise in place. Same as `*self *= rhs`.
    #[inline]
    pub fn mul_mut(&mut self, rhs: Self) -> &mut Self {
        for (c, r) in self.0.iter_mut().zip(rhs.0) {
            *c *= r;
        }
        self
    }

    /// Divides by `rhs` componentwise in place. Same as `*self /= rhs`.
    ///
    /// Zero components in `rhs` are not checked.
    #[inline]
    pub fn div_mut(&mut self, rhs: Self) -> &mut Self {
        for (c, r) in self.0.iter_mut().zip(rhs.0) {
            *c /= r;
        }
        self
    }

    /// Adds `value` to every component in place.
    #[inline]
    pub fn add_scalar_mut(&mut self, value: f32) -> &mut Self {
        for c in &mut self.0 {
            *c += value;
        }
        self
    }

    /// Subtracts `value` from every component in place.
    #[inline]
    pub fn sub_scalar_mut(&mut self, value: f32) -> &mut Self {
        for c in &mut self.0 {
            *c -= value;
        }
        self
    }

    /// Multiplies every component by `value` in place.
    #[inline]
    pub fn mul_scalar_mut(&mut self, value: f32) -> &mut Self {
        for c in &mut self.0 {
            *c *= value;
        }
        self
    }

    /// Divides every component by `value` in place. A zero `value` is not checked.
    #[inline]
    pub fn div_scalar_mut(&mut self, value: f32) -> &mut Self {
        for c in &mut self.0 {
            *c /= value;
        }
        self
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.0.iter().zip(other.0).map(|(a, b)| a * b).sum()
    }

    /// Squared length (avoids sqrt).
    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Length (magnitude) of the vector.
    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Scales the vector to unit length.
    ///
    /// The length is not checked: the zero vector normalizes to NaN
    /// components, consistent with the rest of the arithmetic.
    #[inline]
    pub fn normalize(self) -> Self {
        self / self.length()
    }

    /// Component-wise minimum.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        self.zip_map(other, f32::min)
    }

    /// Component-wise maximum.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        self.zip_map(other, f32::max)
    }

    /// Clamps each component to `[min, max]`.
    #[inline]
    pub fn clamp(self, min: Self, max: Self) -> Self {
        self.min(max).max(min)
    }

    /// Clamps each component to `[0, 1]`.
    #[inline]
    pub fn clamp01(self) -> Self {
        self.map(saturate)
    }

    /// Component-wise absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        self.map(f32::abs)
    }

    /// Returns the smallest component.
    #[inline]
    pub fn min_element(self) -> f32 {
        self.0.into_iter().fold(f32::INFINITY, f32::min)
    }

    /// Returns the largest component.
    #[inline]
    pub fn max_element(self) -> f32 {
        self.0.into_iter().fold(f32::NEG_INFINITY, f32::max)
    }

    /// Returns true if any component is NaN.
    #[inline]
    pub fn is_nan(self) -> bool {
        self.0.iter().any(|c| c.is_nan())
    }

    /// Returns true if all components are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.iter().all(|c| c.is_finite())
    }
}

impl<const N: usize> Default for Vector<N> {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

// Exact comparison: `==` ANDs and `!=` ORs the per-component results.
impl<const N: usize> PartialEq for Vector<N> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0.iter().zip(&other.0).all(|(a, b)| a == b)
    }

    #[inline]
    #[allow(clippy::partialeq_ne_impl)]
    fn ne(&self, other: &Self) -> bool {
        self.0.iter().zip(&other.0).any(|(a, b)| a != b)
    }
}

impl<const N: usize> Index<usize> for Vector<N> {
    type Output = f32;

    #[inline]
    fn index(&self, i: usize) -> &f32 {
        match self.0.get(i) {
            Some(c) => c,
            None => panic!("Vector<{}> index out of bounds: {}", N, i),
        }
    }
}

impl<const N: usize> IndexMut<usize> for Vector<N> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        match self.0.get_mut(i) {
            Some(c) => c,
            None => panic!("Vector<{}> index out of bounds: {}", N, i),
        }
    }
}

/// Wires one arithmetic operator: compound assignment for vector and scalar
/// operands on top of the chaining methods, then the binary form as
/// "copy the left operand, apply the compound operator".
macro_rules! impl_arith {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $vec_mut:ident, $scalar_mut:ident) => {
        impl<const N: usize> $OpAssign for Vector<N> {
            #[inline]
            fn $op_assign(&mut self, rhs: Self) {
                self.$vec_mut(rhs);
            }
        }

        impl<const N: usize> $OpAssign<f32> for Vector<N> {
            #[inline]
            fn $op_assign(&mut self, rhs: f32) {
                self.$scalar_mut(rhs);
            }
        }

        impl<const N: usize> $Op for Vector<N> {
            type Output = Self;

            #[inline]
            fn $op(mut self, rhs: Self) -> Self {
                $OpAssign::$op_assign(&mut self, rhs);
                self
            }
        }

        impl<const N: usize> $Op<f32> for Vector<N> {
            type Output = Self;

            #[inline]
            fn $op(mut self, rhs: f32) -> Self {
                $OpAssign::$op_assign(&mut self, rhs);
                self
            }
        }
    };
}

impl_arith!(Add, add, AddAssign, add_assign, add_mut, add_scalar_mut);
impl_arith!(Sub, sub, SubAssign, sub_assign, sub_mut, sub_scalar_mut);
impl_arith!(Mul, mul, MulAssign, mul_assign, mul_mut, mul_scalar_mut);
impl_arith!(Div, div, DivAssign, div_assign, div_mut, div_scalar_mut);

// f32 * Vector
impl<const N: usize> Mul<Vector<N>> for f32 {
    type Output = Vector<N>;

    #[inline]
    fn mul(self, rhs: Vector<N>) -> Vector<N> {
        rhs.map(|c| self * c)
    }
}

impl<const N: usize> Neg for Vector<N> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.map(|c| -c)
    }
}

impl<const N: usize> From<[f32; N]> for Vector<N> {
    #[inline]
    fn from(a: [f32; N]) -> Self {
        Self::from_array(a)
    }
}

impl<const N: usize> From<Vector<N>> for [f32; N] {
    #[inline]
    fn from(v: Vector<N>) -> [f32; N] {
        v.to_array()
    }
}

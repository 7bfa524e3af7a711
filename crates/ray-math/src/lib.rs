//! # ray-math
//!
//! Small fixed-size vector math for ray-rs.
//!
//! This crate provides the value types every other crate in the workspace
//! builds on:
//!
//! - [`Vector<N>`] - `N` `f32` components with componentwise arithmetic
//! - [`Vec2`], [`Vec3`], [`Vec4`] - the 2/3/4 arities with named accessors
//!   (`x/y` or `u/v`, `x/y/z` or `r/g/b`, `x/y/z/w` or `r/g/b/a`)
//! - [`lerp`] - interpolation for scalars and vectors
//!
//! # Design
//!
//! One generic definition carries all operators for every arity; the
//! arities differ only in component count and accessor names. Arithmetic is
//! unchecked and follows IEEE-754: `vec2(1.0, 1.0) / 0.0` is
//! `( inf ; inf )`, not an error. Equality is exact.
//!
//! # Usage
//!
//! ```rust
//! use ray_math::{vec3, Vec3};
//!
//! let mut color = vec3(0.5, 0.25, 1.0);
//! color *= 0.5;
//! color += Vec3::splat(0.25);
//! assert_eq!(color, vec3(0.5, 0.375, 0.75));
//! assert_eq!(color.g(), color.y());
//! println!("{color}"); // ( 0.5 ; 0.375 ; 0.75 )
//! ```
//!
//! # Dependencies
//!
//! - [`glam`] - interop conversions
//! - [`thiserror`] - parse errors
//!
//! # Used By
//!
//! - `ray-core` - pixel colors and rays
//! - `ray-cli` - image fills

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod components;
mod convert;
mod interp;
mod text;
mod vector;

pub use components::*;
pub use interp::*;
pub use text::*;
pub use vector::*;

/// Re-export glam types for direct use
pub mod glam {
    pub use ::glam::{Vec2 as GlamVec2, Vec3 as GlamVec3, Vec4 as GlamVec4};
}

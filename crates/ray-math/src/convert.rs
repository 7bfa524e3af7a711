//! Conversions to and from [`glam`] vector types.
//!
//! `Vec2`, `Vec3` and `Vec4` map onto their glam counterparts component by
//! component, so callers can hand values to glam-based code without copying
//! through arrays by hand.

use crate::Vector;

macro_rules! glam_interop {
    ($n:literal, $Glam:ty) => {
        impl Vector<$n> {
            #[doc = concat!("Converts to [`", stringify!($Glam), "`].")]
            #[inline]
            pub fn to_glam(self) -> $Glam {
                <$Glam>::from_array(self.0)
            }

            #[doc = concat!("Creates from [`", stringify!($Glam), "`].")]
            #[inline]
            pub fn from_glam(v: $Glam) -> Self {
                Self(v.to_array())
            }
        }

        impl From<$Glam> for Vector<$n> {
            #[inline]
            fn from(v: $Glam) -> Self {
                Self::from_glam(v)
            }
        }

        impl From<Vector<$n>> for $Glam {
            #[inline]
            fn from(v: Vector<$n>) -> $Glam {
                v.to_glam()
            }
        }
    };
}

glam_interop!(2, glam::Vec2);
glam_interop!(3, glam::Vec3);
glam_interop!(4, glam::Vec4);

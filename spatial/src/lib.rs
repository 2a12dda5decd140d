//! Value types for rigid spatial transformations.
//!
//! [`Vec`] is a 3D vector, [`Quat`] a quaternion (a rotation when it is unit
//! length) and [`Transf`] a rotation followed by a translation. Each type only
//! builds on the ones before it, and all of them are plain `Copy` values.
//!
//! ```
//! use spatial::{Quat, Transf, Vec};
//! use std::f64::consts::FRAC_PI_2;
//!
//! let shoulder = Transf::new(Vec::new(0.0, 0.0, 2.0), Quat::from_angle_axis(-FRAC_PI_2, Vec::X));
//! let elbow = Transf::from_translation(Vec::new(0.0, 0.0, 1.0));
//!
//! let tip = shoulder + elbow + Vec::ZERO;
//! assert_eq!(tip.round(), Vec::new(0.0, 1.0, 2.0));
//! ```
//!
//! The operators are permissive: normalizing something of length zero gives
//! NaN components instead of panicking. Use the `checked_*` and `try_*`
//! variants to get a [`SpatialError`] instead.

mod error;
mod interop;
mod quat;
mod transf;
mod vec;

pub use error::SpatialError;
pub use quat::{slerp, Quat};
pub use transf::Transf;
pub use vec::{cross, dot, Vec};

/// Scalar type used by every component.
pub type Real = f64;

pub(crate) mod macros {
    macro_rules! debug_assert_finite {
        ($val:expr) => {
            debug_assert!(
                $val.is_finite(),
                "{} = {}",
                stringify!($val),
                $val
            )
        };
    }

    pub(crate) use debug_assert_finite;
}

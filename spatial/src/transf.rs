use std::{fmt, ops::Add};

use approx::{AbsDiffEq, RelativeEq};
use bytemuck::{Pod, Zeroable};

use crate::{Quat, Real, Vec};

/// A rigid transformation: rotate by `q`, then translate by `v`.
///
/// `a + b` composes two transformations (`b` first, then `a`) and `a + p`
/// moves the point `p`:
///
/// ```
/// use spatial::{Quat, Transf, Vec};
///
/// let a = Transf::new(Vec::new(1.0, 0.0, 0.0), Quat::from_angle_axis(0.4, Vec::Z));
/// let b = Transf::from_translation(Vec::new(0.0, 2.0, 0.0));
/// let p = Vec::new(0.5, 0.5, 0.5);
///
/// approx::assert_relative_eq!((a + b) + p, a + (b + p), epsilon = 1e-12);
/// ```
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Transf {
    /// Translation, applied after the rotation.
    pub v: Vec,
    /// Rotation, expected to be unit length.
    pub q: Quat,
}

impl Transf {
    pub const IDENTITY: Self = Self::new(Vec::ZERO, Quat::IDENTITY);

    pub const fn new(v: Vec, q: Quat) -> Self {
        Self { v, q }
    }

    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    pub const fn from_translation(v: Vec) -> Self {
        Self::new(v, Quat::IDENTITY)
    }

    pub const fn from_rotation(q: Quat) -> Self {
        Self::new(Vec::ZERO, q)
    }

    /// Apply `other` first, then `self`. Same as `self + other`.
    pub fn compose(self, other: Self) -> Self {
        Self::new(self.v + self.q * other.v, self.q * other.q)
    }

    /// Move the point `p`. Same as `self + p`.
    pub fn apply(self, p: Vec) -> Vec {
        self.v + self.q * p
    }

    /// The inverse transformation, `self + self.conj()` is the identity.
    pub fn conj(self) -> Self {
        let q = self.q.conj();
        Self::new(q * -self.v, q)
    }

    pub fn inverse(self) -> Self {
        self.conj()
    }

    /// Translations are interpolated linearly, rotations with [`crate::slerp`].
    pub fn interpolate(self, other: Self, t: Real) -> Self {
        Self::new(self.v.lerp(other.v, t), self.q.slerp(other.q, t))
    }

    pub fn is_finite(&self) -> bool {
        self.v.is_finite() && self.q.is_finite()
    }
}

impl From<(Vec, Quat)> for Transf {
    fn from((v, q): (Vec, Quat)) -> Self {
        Self::new(v, q)
    }
}

impl From<Vec> for Transf {
    fn from(v: Vec) -> Self {
        Self::from_translation(v)
    }
}

impl From<Quat> for Transf {
    fn from(q: Quat) -> Self {
        Self::from_rotation(q)
    }
}

impl Add for Transf {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.compose(rhs)
    }
}

impl Add<Vec> for Transf {
    type Output = Vec;

    fn add(self, rhs: Vec) -> Vec {
        self.apply(rhs)
    }
}

impl fmt::Display for Transf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[v: {}, q: {}]", self.v, self.q)
    }
}

impl AbsDiffEq for Transf {
    type Epsilon = Real;

    fn default_epsilon() -> Real {
        Real::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Real) -> bool {
        self.v.abs_diff_eq(&other.v, epsilon) && self.q.abs_diff_eq(&other.q, epsilon)
    }
}

impl RelativeEq for Transf {
    fn default_max_relative() -> Real {
        Real::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: Real, max_relative: Real) -> bool {
        self.v.relative_eq(&other.v, epsilon, max_relative)
            && self.q.relative_eq(&other.q, epsilon, max_relative)
    }
}

use std::{
    fmt,
    ops::{Add, AddAssign, BitXor, Div, Mul, Neg, Sub, SubAssign},
};

use approx::{AbsDiffEq, RelativeEq};
use bytemuck::{Pod, Zeroable};

use crate::{Real, SpatialError};

/// A vector in 3D space.
///
/// Equality is exact per component, use the [`approx`] traits to compare with a tolerance.
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vec {
    pub x: Real,
    pub y: Real,
    pub z: Real,
}

impl Vec {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    pub const fn new(x: Real, y: Real, z: Real) -> Self {
        Self { x, y, z }
    }

    pub const fn zero() -> Self {
        Self::ZERO
    }

    pub fn dot(self, other: Self) -> Real {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Right-handed cross product, also available as `self ^ other`.
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    pub fn norm_squared(self) -> Real {
        self.dot(self)
    }

    /// Euclidean length.
    pub fn norm(self) -> Real {
        self.norm_squared().sqrt()
    }

    /// Same direction with a length of one.
    ///
    /// The zero vector has no direction, the result is NaN in every component.
    pub fn unit(self) -> Self {
        self / self.norm()
    }

    /// Like [`Vec::unit`] but reports a zero-length or non-finite vector.
    pub fn checked_unit(self) -> Result<Self, SpatialError> {
        if !self.is_finite() {
            return Err(SpatialError::NonFinite { what: "vector" });
        }

        let norm = self.norm();
        if norm == 0.0 {
            return Err(SpatialError::ZeroNorm { what: "vector" });
        }

        Ok(self / norm)
    }

    /// Round every component to the nearest integer, halfway cases away from zero.
    pub fn round(self) -> Self {
        Self::new(self.x.round(), self.y.round(), self.z.round())
    }

    /// `self` at `t == 0.0`, `other` at `t == 1.0`.
    pub fn lerp(self, other: Self, t: Real) -> Self {
        self + (other - self) * t
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

pub fn dot(a: Vec, b: Vec) -> Real {
    a.dot(b)
}

pub fn cross(a: Vec, b: Vec) -> Vec {
    a.cross(b)
}

impl Add for Vec {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vec {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Vec {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl SubAssign for Vec {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for Vec {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl BitXor for Vec {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self {
        self.cross(rhs)
    }
}

impl Mul<Real> for Vec {
    type Output = Self;

    fn mul(self, rhs: Real) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Mul<Vec> for Real {
    type Output = Vec;

    fn mul(self, rhs: Vec) -> Vec {
        rhs * self
    }
}

impl Div<Real> for Vec {
    type Output = Self;

    fn div(self, rhs: Real) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl fmt::Display for Vec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl AbsDiffEq for Vec {
    type Epsilon = Real;

    fn default_epsilon() -> Real {
        Real::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Real) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl RelativeEq for Vec {
    fn default_max_relative() -> Real {
        Real::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: Real, max_relative: Real) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}

use std::{
    fmt,
    ops::{Add, Div, Mul, Neg, Sub},
};

use approx::{AbsDiffEq, RelativeEq};
use bytemuck::{Pod, Zeroable};

use crate::{macros::debug_assert_finite, Real, SpatialError, Vec};

/// Above this dot product two quaternions are treated as parallel by [`slerp`].
const SLERP_LINEAR_THRESHOLD: Real = 0.9995;

/// A quaternion `w + xi + yj + zk`.
///
/// Only unit quaternions represent rotations, nothing here normalizes implicitly.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Quat {
    pub w: Real,
    pub x: Real,
    pub y: Real,
    pub z: Real,
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quat {
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 0.0);

    pub const fn new(w: Real, x: Real, y: Real, z: Real) -> Self {
        Self { w, x, y, z }
    }

    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Quaternion with scalar part `w` and vector part `v`.
    pub const fn from_parts(w: Real, v: Vec) -> Self {
        Self::new(w, v.x, v.y, v.z)
    }

    /// Rotation of `angle` radians around `axis`, right-handed.
    ///
    /// The axis is normalized first, a zero axis gives NaN components.
    pub fn from_angle_axis(angle: Real, axis: Vec) -> Self {
        let half = angle / 2.0;
        Self::from_parts(half.cos(), axis.unit() * half.sin())
    }

    /// Like [`Quat::from_angle_axis`] but rejects a zero or non-finite axis.
    pub fn try_from_angle_axis(angle: Real, axis: Vec) -> Result<Self, SpatialError> {
        if !angle.is_finite() {
            return Err(SpatialError::NonFinite { what: "angle" });
        }

        let axis = axis.checked_unit().map_err(|e| match e {
            SpatialError::ZeroNorm { .. } => SpatialError::ZeroNorm { what: "axis" },
            SpatialError::NonFinite { .. } => SpatialError::NonFinite { what: "axis" },
        })?;

        let q = Self::from_angle_axis(angle, axis);
        debug_assert_finite!(q);
        Ok(q)
    }

    /// The vector part `(x, y, z)`.
    pub const fn vec(self) -> Vec {
        Vec::new(self.x, self.y, self.z)
    }

    pub fn dot(self, other: Self) -> Real {
        self.w * other.w + self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Negated vector part, the inverse rotation of a unit quaternion.
    pub fn conj(self) -> Self {
        Self::new(self.w, -self.x, -self.y, -self.z)
    }

    pub fn norm_squared(self) -> Real {
        self.dot(self)
    }

    pub fn norm(self) -> Real {
        self.norm_squared().sqrt()
    }

    /// NaN in every component for the zero quaternion.
    pub fn unit(self) -> Self {
        self / self.norm()
    }

    pub fn checked_unit(self) -> Result<Self, SpatialError> {
        if !self.is_finite() {
            return Err(SpatialError::NonFinite { what: "quaternion" });
        }

        let norm = self.norm();
        if norm == 0.0 {
            return Err(SpatialError::ZeroNorm { what: "quaternion" });
        }

        Ok(self / norm)
    }

    /// Multiplicative inverse, equal to [`Quat::conj`] for unit quaternions.
    pub fn inverse(self) -> Self {
        self.conj() / self.norm_squared()
    }

    /// Rotation angle in radians, in `[0, 2π]`. Assumes a unit quaternion.
    pub fn angle(self) -> Real {
        2.0 * self.w.clamp(-1.0, 1.0).acos()
    }

    /// Rotation axis of a unit quaternion, `None` when there is no rotation.
    pub fn axis(self) -> Option<Vec> {
        self.vec().checked_unit().ok()
    }

    /// Rotate `v`. Same as `self * v`.
    pub fn rotate(self, v: Vec) -> Vec {
        (self * Self::from_parts(0.0, v) * self.conj()).vec()
    }

    pub fn slerp(self, other: Self, t: Real) -> Self {
        slerp(self, other, t)
    }

    pub fn is_finite(&self) -> bool {
        self.w.is_finite() && self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

/// Spherical linear interpolation from `a` (`t == 0.0`) to `b` (`t == 1.0`) along the shorter arc.
///
/// Values of `t` outside `[0, 1]` extrapolate. Nearly parallel inputs fall back to a normalized
/// linear interpolation.
pub fn slerp(a: Quat, b: Quat, t: Real) -> Quat {
    let mut b = b;
    let mut d = a.dot(b);

    // q and -q are the same rotation
    if d < 0.0 {
        b = -b;
        d = -d;
    }

    if d > SLERP_LINEAR_THRESHOLD {
        return (a + (b - a) * t).unit();
    }

    let theta_0 = d.acos();
    let theta = theta_0 * t;

    let s1 = theta.sin() / theta_0.sin();
    let s0 = theta.cos() - d * s1;

    a * s0 + b * s1
}

impl Add for Quat {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.w + rhs.w,
            self.x + rhs.x,
            self.y + rhs.y,
            self.z + rhs.z,
        )
    }
}

impl Sub for Quat {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(
            self.w - rhs.w,
            self.x - rhs.x,
            self.y - rhs.y,
            self.z - rhs.z,
        )
    }
}

impl Neg for Quat {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.w, -self.x, -self.y, -self.z)
    }
}

/// Hamilton product.
impl Mul for Quat {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let (a, b) = (self, rhs);
        Self::new(
            a.w * b.w - a.x * b.x - a.y * b.y - a.z * b.z,
            a.w * b.x + a.x * b.w + a.y * b.z - a.z * b.y,
            a.w * b.y - a.x * b.z + a.y * b.w + a.z * b.x,
            a.w * b.z + a.x * b.y - a.y * b.x + a.z * b.w,
        )
    }
}

/// Rotates the vector, see [`Quat::rotate`].
impl Mul<Vec> for Quat {
    type Output = Vec;

    fn mul(self, rhs: Vec) -> Vec {
        self.rotate(rhs)
    }
}

impl Mul<Real> for Quat {
    type Output = Self;

    fn mul(self, rhs: Real) -> Self {
        Self::new(self.w * rhs, self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Mul<Quat> for Real {
    type Output = Quat;

    fn mul(self, rhs: Quat) -> Quat {
        rhs * self
    }
}

impl Div<Real> for Quat {
    type Output = Self;

    fn div(self, rhs: Real) -> Self {
        Self::new(self.w / rhs, self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl fmt::Display for Quat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.w, self.x, self.y, self.z)
    }
}

impl AbsDiffEq for Quat {
    type Epsilon = Real;

    fn default_epsilon() -> Real {
        Real::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Real) -> bool {
        self.w.abs_diff_eq(&other.w, epsilon) && self.vec().abs_diff_eq(&other.vec(), epsilon)
    }
}

impl RelativeEq for Quat {
    fn default_max_relative() -> Real {
        Real::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: Real, max_relative: Real) -> bool {
        self.w.relative_eq(&other.w, epsilon, max_relative)
            && self.vec().relative_eq(&other.vec(), epsilon, max_relative)
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_2, PI};

    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;

    const EPS: Real = 1e-12;

    fn samples() -> [Quat; 4] {
        [
            Quat::new(1.0, 2.0, 3.0, 4.0),
            Quat::new(-0.5, 0.25, 0.0, 2.0),
            Quat::from_angle_axis(1.2, Vec::new(1.0, -2.0, 0.5)),
            Quat::new(0.0, 0.0, -3.0, 0.1),
        ]
    }

    #[test]
    fn default_is_identity() {
        assert_eq!(Quat::default(), Quat::new(1.0, 0.0, 0.0, 0.0));
        assert_eq!(Quat::identity() * Vec::new(1.0, 2.0, 3.0), Vec::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn arithmetic() {
        let a = Quat::new(1.0, 2.0, 3.0, 4.0);
        let b = Quat::new(0.5, -1.0, 0.0, 2.0);

        assert_eq!(a + b, Quat::new(1.5, 1.0, 3.0, 6.0));
        assert_eq!(a - b, Quat::new(0.5, 3.0, 3.0, 2.0));
        assert_eq!(-a, Quat::new(-1.0, -2.0, -3.0, -4.0));
        assert_eq!(a * 2.0, Quat::new(2.0, 4.0, 6.0, 8.0));
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(a / 2.0, Quat::new(0.5, 1.0, 1.5, 2.0));
        assert_eq!(a.dot(b), 0.5 - 2.0 + 8.0);
        assert_eq!(a.conj(), Quat::new(1.0, -2.0, -3.0, -4.0));
    }

    #[test]
    fn hamilton_product() {
        let i = Quat::new(0.0, 1.0, 0.0, 0.0);
        let j = Quat::new(0.0, 0.0, 1.0, 0.0);
        let k = Quat::new(0.0, 0.0, 0.0, 1.0);

        assert_eq!(i * j, k);
        assert_eq!(j * k, i);
        assert_eq!(k * i, j);
        assert_eq!(j * i, -k);
        assert_eq!(i * i, -Quat::IDENTITY);
        assert_eq!(i * j * k, -Quat::IDENTITY);

        let a = Quat::new(1.0, 2.0, 3.0, 4.0);
        let b = Quat::new(5.0, 6.0, 7.0, 8.0);
        assert_eq!(a * b, Quat::new(-60.0, 12.0, 30.0, 24.0));
        assert_ne!(a * b, b * a);
    }

    #[test]
    fn product_with_conjugate_is_norm_squared() {
        for q in samples() {
            let n2 = q.norm_squared();
            assert_relative_eq!(q * q.conj(), Quat::new(n2, 0.0, 0.0, 0.0), epsilon = EPS);
            assert_relative_eq!(q.unit() * q.unit().conj(), Quat::IDENTITY, epsilon = EPS);
            assert_relative_eq!(q * q.inverse(), Quat::IDENTITY, epsilon = EPS);
        }
    }

    #[test]
    fn norm_and_unit() {
        let q = Quat::new(1.0, 1.0, 1.0, 1.0);
        assert_eq!(q.norm(), 2.0);
        assert_eq!(q.unit(), Quat::new(0.5, 0.5, 0.5, 0.5));

        for q in samples() {
            assert_relative_eq!(q.unit().norm(), 1.0, epsilon = EPS);
        }

        assert!(!Quat::new(0.0, 0.0, 0.0, 0.0).unit().is_finite());
        assert_eq!(
            Quat::new(0.0, 0.0, 0.0, 0.0).checked_unit(),
            Err(SpatialError::ZeroNorm { what: "quaternion" })
        );
        assert_eq!(q.checked_unit(), Ok(q.unit()));
    }

    #[test]
    fn from_angle_axis() {
        let q = Quat::from_angle_axis(PI, Vec::new(0.0, 0.0, 5.0));
        assert_abs_diff_eq!(q, Quat::new(0.0, 0.0, 0.0, 1.0), epsilon = EPS);

        let q = Quat::from_angle_axis(-FRAC_PI_2, Vec::X);
        assert_abs_diff_eq!(
            q,
            Quat::new(FRAC_1_SQRT_2, -FRAC_1_SQRT_2, 0.0, 0.0),
            epsilon = EPS
        );

        assert_relative_eq!(q.angle(), FRAC_PI_2, epsilon = EPS);
        assert_relative_eq!(q.axis().unwrap(), -Vec::X, epsilon = EPS);
        assert_eq!(Quat::IDENTITY.axis(), None);
    }

    #[test]
    fn from_zero_axis() {
        assert!(!Quat::from_angle_axis(1.0, Vec::ZERO).is_finite());
        assert_eq!(
            Quat::try_from_angle_axis(1.0, Vec::ZERO),
            Err(SpatialError::ZeroNorm { what: "axis" })
        );
        assert_eq!(
            Quat::try_from_angle_axis(Real::NAN, Vec::X),
            Err(SpatialError::NonFinite { what: "angle" })
        );
        assert_eq!(
            Quat::try_from_angle_axis(0.3, Vec::Y * 4.0),
            Ok(Quat::from_angle_axis(0.3, Vec::Y))
        );
    }

    #[test]
    fn rotate_cyclic_permutation() {
        let q = Quat::from_angle_axis(2.0 * PI / 3.0, Vec::new(1.0, 1.0, 1.0));
        let v = q * Vec::new(1.0, 2.0, 3.0);

        assert_eq!(v.round(), Vec::new(3.0, 1.0, 2.0));
    }

    #[test]
    fn rotate_in_plane() {
        let n = Vec::new(1.0, -1.0, 2.0);
        let v = Vec::new(1.0, 1.0, 0.0);
        assert_eq!(n.dot(v), 0.0);

        for theta in [0.3, 1.0, FRAC_PI_2, 2.5, -1.7] {
            let r = Quat::from_angle_axis(theta, n) * v;

            assert_relative_eq!(r.norm(), v.norm(), epsilon = EPS);
            assert_relative_eq!(r.dot(n), 0.0, epsilon = EPS);

            let cos = r.dot(v) / v.norm_squared();
            let sin = v.cross(r).dot(n.unit()) / v.norm_squared();
            assert_relative_eq!(sin.atan2(cos), theta, epsilon = EPS);
        }
    }

    #[test]
    fn rotate_right_handed() {
        let q = Quat::from_angle_axis(FRAC_PI_2, Vec::Z);
        assert_abs_diff_eq!(q * Vec::X, Vec::Y, epsilon = EPS);
        assert_abs_diff_eq!(q * Vec::Y, -Vec::X, epsilon = EPS);
        assert_abs_diff_eq!(q * Vec::Z, Vec::Z, epsilon = EPS);
    }

    #[test]
    fn rotate_does_not_normalize() {
        assert_eq!(Quat::new(2.0, 0.0, 0.0, 0.0) * Vec::X, Vec::new(4.0, 0.0, 0.0));

        let v = Vec::new(1.0, 2.0, 3.0);
        let q = Quat::from_angle_axis(1.0, Vec::Z) * 3.0;
        assert_relative_eq!((q * v).norm(), 9.0 * v.norm(), max_relative = 1e-12);
    }

    #[test]
    fn slerp_endpoints() {
        let a = Quat::from_angle_axis(0.2, Vec::new(0.0, 1.0, 1.0));
        let b = Quat::from_angle_axis(2.1, Vec::new(1.0, 0.0, -1.0));

        assert_relative_eq!(slerp(a, b, 0.0), a, epsilon = EPS);
        assert_relative_eq!(slerp(a, b, 1.0), b, epsilon = EPS);
        assert_relative_eq!(a.slerp(b, 0.5).norm(), 1.0, epsilon = EPS);
    }

    #[test]
    fn slerp_constant_speed() {
        let a = Quat::IDENTITY;
        let b = Quat::from_angle_axis(2.0, Vec::Z);

        for t in [0.1, 0.25, 0.5, 0.9, 1.5, -0.5] {
            let expected = Quat::from_angle_axis(2.0 * t, Vec::Z);
            assert_relative_eq!(slerp(a, b, t), expected, epsilon = EPS);
        }
    }

    #[test]
    fn slerp_takes_shorter_arc() {
        let a = Quat::IDENTITY;
        let b = Quat::from_angle_axis(1.0, Vec::X);

        let q = slerp(a, -b, 0.5);
        assert_relative_eq!(q, Quat::from_angle_axis(0.5, Vec::X), epsilon = EPS);
    }

    /// The linear branch returns the normalized lerp toward `b`, a quaternion and not its norm.
    #[test]
    fn slerp_nearly_parallel() {
        let a = Quat::from_angle_axis(0.5, Vec::Y);
        let b = Quat::from_angle_axis(0.5 + 1e-3, Vec::Y);
        assert!(a.dot(b) > SLERP_LINEAR_THRESHOLD);

        let q = slerp(a, b, 0.5);
        assert_relative_eq!(q.norm(), 1.0, epsilon = EPS);
        assert_relative_eq!(q, Quat::from_angle_axis(0.5 + 5e-4, Vec::Y), epsilon = 1e-9);

        assert_relative_eq!(slerp(a, a, 0.7), a, epsilon = EPS);
    }
}

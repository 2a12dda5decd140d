//! Conversions to and from [`vek`] types.

use crate::{Quat, Real, Vec};

impl From<vek::Vec3<Real>> for Vec {
    fn from(v: vek::Vec3<Real>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vec> for vek::Vec3<Real> {
    fn from(v: Vec) -> Self {
        vek::Vec3::new(v.x, v.y, v.z)
    }
}

impl From<vek::Quaternion<Real>> for Quat {
    fn from(q: vek::Quaternion<Real>) -> Self {
        Self::new(q.w, q.x, q.y, q.z)
    }
}

impl From<Quat> for vek::Quaternion<Real> {
    fn from(q: Quat) -> Self {
        vek::Quaternion::from_xyzw(q.x, q.y, q.z, q.w)
    }
}

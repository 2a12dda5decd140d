use spatial::{Quat, Real, Transf};

use crate::KinematicsError;

#[derive(Debug, Default, PartialEq, Clone, Copy)]
pub enum Joint {
    #[default]
    Fixed,
    /// Rotates around `axis` by the joint value, in radians. `axis` is normalized when used.
    Revolute { axis: spatial::Vec },
    /// Slides along `axis` by the joint value. `axis` is normalized when used.
    Prismatic { axis: spatial::Vec },
}

impl Joint {
    /// Revolute joint around `axis`, which must have a non-zero length.
    pub fn revolute(axis: spatial::Vec) -> Result<Self, KinematicsError> {
        let axis = axis.checked_unit()?;
        Ok(Self::Revolute { axis })
    }

    /// Prismatic joint along `axis`, which must have a non-zero length.
    pub fn prismatic(axis: spatial::Vec) -> Result<Self, KinematicsError> {
        let axis = axis.checked_unit()?;
        Ok(Self::Prismatic { axis })
    }

    /// Number of values this joint consumes.
    pub fn dof(&self) -> usize {
        match self {
            Self::Fixed => 0,
            Self::Revolute { .. } | Self::Prismatic { .. } => 1,
        }
    }

    /// Motion of the joint frame at `value`. Ignored for fixed joints.
    pub fn transform(&self, value: Real) -> Transf {
        match *self {
            Self::Fixed => Transf::IDENTITY,
            Self::Revolute { axis } => Transf::from_rotation(Quat::from_angle_axis(value, axis)),
            Self::Prismatic { axis } => Transf::from_translation(axis.unit() * value),
        }
    }
}

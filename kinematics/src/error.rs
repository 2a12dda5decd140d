use spatial::SpatialError;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum KinematicsError {
    #[error("expected {expected} joint values, got {got}")]
    JointCountMismatch { expected: usize, got: usize },
    #[error("frame of link {link} has a NaN or infinite component")]
    NonFinite { link: usize },
    #[error("invalid joint")]
    Spatial(#[from] SpatialError),
}

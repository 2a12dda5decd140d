//! Forward kinematics for serial chains of links, built on [`spatial::Transf`] composition.

mod chain;
mod error;
mod joint;

pub use chain::{Chain, Link};
pub use error::KinematicsError;
pub use joint::Joint;

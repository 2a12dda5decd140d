use spatial::{Real, Transf};

use crate::{Joint, KinematicsError};

/// A joint placed in the frame of the previous link.
#[derive(Debug, Default, PartialEq, Clone, Copy)]
pub struct Link {
    /// Pose of the joint frame relative to the parent frame.
    pub origin: Transf,
    pub joint: Joint,
}

impl Link {
    pub fn new(origin: Transf, joint: Joint) -> Self {
        Self { origin, joint }
    }

    pub fn fixed(origin: Transf) -> Self {
        Self::new(origin, Joint::Fixed)
    }

    /// Pose of this link in the parent frame with the joint at `value`.
    pub fn transform(&self, value: Real) -> Transf {
        self.origin + self.joint.transform(value)
    }
}

/// Links ordered from the base to the tip.
#[derive(Debug, Default, PartialEq, Clone)]
pub struct Chain {
    base: Transf,
    links: Vec<Link>,
}

impl Chain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base(mut self, base: Transf) -> Self {
        self.base = base;
        self
    }

    /// Pose of the first link's parent frame.
    pub fn base(&self) -> Transf {
        self.base
    }

    pub fn with_link(mut self, link: Link) -> Self {
        self.push(link);
        self
    }

    pub fn push(&mut self, link: Link) {
        self.links.push(link);
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Number of joint values [`Chain::frames`] expects.
    pub fn dof(&self) -> usize {
        self.links.iter().map(|l| l.joint.dof()).sum()
    }

    /// World pose of every link, one joint value per movable joint in order.
    pub fn frames(&self, values: &[Real]) -> Result<Vec<Transf>, KinematicsError> {
        let expected = self.dof();
        if values.len() != expected {
            return Err(KinematicsError::JointCountMismatch {
                expected,
                got: values.len(),
            });
        }

        let mut values = values.iter().copied();
        let mut current = self.base;
        let mut frames = Vec::with_capacity(self.links.len());

        for (i, link) in self.links.iter().enumerate() {
            let value = match link.joint.dof() {
                0 => 0.0,
                _ => values.next().unwrap_or_default(),
            };

            current = current + link.transform(value);
            log::trace!("link {} at {} -> {}", i, value, current);

            if !current.is_finite() {
                log::debug!("link {} produced a non-finite frame: {}", i, current);
                return Err(KinematicsError::NonFinite { link: i });
            }

            frames.push(current);
        }

        Ok(frames)
    }

    /// World pose of the last link, or the base for an empty chain.
    pub fn forward(&self, values: &[Real]) -> Result<Transf, KinematicsError> {
        let frames = self.frames(values)?;
        Ok(frames.last().copied().unwrap_or(self.base))
    }

    /// World position of the origin of the last link.
    pub fn tip_position(&self, values: &[Real]) -> Result<spatial::Vec, KinematicsError> {
        Ok(self.forward(values)? + spatial::Vec::ZERO)
    }
}

impl FromIterator<Link> for Chain {
    fn from_iter<I: IntoIterator<Item = Link>>(iter: I) -> Self {
        Self {
            base: Transf::IDENTITY,
            links: iter.into_iter().collect(),
        }
    }
}

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpatialError {
    #[error("cannot normalize a zero-length {what}")]
    ZeroNorm { what: &'static str },
    #[error("{what} has a NaN or infinite component")]
    NonFinite { what: &'static str },
}

use crate::charset::CharacterClass;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Inconsistent inputs. These are deterministic functions of the request, so
/// retrying one can never succeed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpecificationError {
    #[error("length ({length}) must be >= the sum of the class minimums ({required})")]
    LengthBelowMinimums { length: usize, required: usize },
    #[error("class minimums add up to more than usize::MAX characters")]
    MinimumsOverflow,
    #[error("no characters are enabled but {length} must still be drawn")]
    EmptyPool { length: usize },
    #[error("{class} requires at least {min} characters but its character set is empty")]
    EmptyClass { class: CharacterClass, min: usize },
    #[error("byte length must be at least 1")]
    ZeroByteLength,
    #[error("minimum value ({min}) needs to be smaller than or equal to maximum value ({max})")]
    InvalidRange { min: i64, max: i64 },
    #[error("range {min}..={max} holds more values than can be drawn")]
    RangeOverflow { min: i64, max: i64 },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid specification: {0}")]
    Specification(#[from] SpecificationError),
    #[error("secure random source failed: {0}")]
    Entropy(String),
    #[error("could not hash generated value: {0}")]
    Hash(#[from] bcrypt::BcryptError),
}

impl Error {
    /// Entropy failures are usually transient; everything else is not.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::Entropy(_))
    }
}

use crate::entropy::{seed_from_str, Draw, LaggedFibonacci, SecureSource};
use crate::error::{Result, SpecificationError};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Inclusive bounds; `seed` pins the result the same way it pins a shuffle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegerOptions {
    pub min: i64,
    pub max: i64,
    #[serde(default)]
    pub seed: Option<String>,
}

impl IntegerOptions {
    pub fn new(min: i64, max: i64) -> Self {
        IntegerOptions {
            min,
            max,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: impl Into<String>) -> Self {
        self.seed = Some(seed.into());
        self
    }

    fn span(&self) -> std::result::Result<u64, SpecificationError> {
        if self.max < self.min {
            return Err(SpecificationError::InvalidRange {
                min: self.min,
                max: self.max,
            });
        }
        let span = self.max as i128 - self.min as i128 + 1;
        u64::try_from(span).map_err(|_| SpecificationError::RangeOverflow {
            min: self.min,
            max: self.max,
        })
    }
}

pub fn random_integer(options: &IntegerOptions) -> Result<i64> {
    match options.seed.as_deref().filter(|seed| !seed.is_empty()) {
        Some(seed) => {
            let seed = seed_from_str(seed);
            debug!(seed, min = options.min, max = options.max, "seeded integer");
            random_integer_with(options, &mut LaggedFibonacci::new(seed))
        }
        None => random_integer_with(options, &mut SecureSource::os()),
    }
}

pub fn random_integer_with<D: Draw + ?Sized>(options: &IntegerOptions, draw: &mut D) -> Result<i64> {
    let span = options.span()?;
    let offset = draw.below(span)?;
    Ok((options.min as i128 + offset as i128) as i64)
}

use crate::entropy::{seed_from_str, Draw, LaggedFibonacci, SecureSource};
use crate::error::Result;
use crate::shuffle::permutation::Permutation;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermutationSpec<T> {
    pub input: Vec<T>,
    /// `None` or `Some(0)` means "as many as the input holds".
    #[serde(default)]
    pub result_count: Option<usize>,
    #[serde(default)]
    pub seed: Option<String>,
}

impl<T> PermutationSpec<T> {
    pub fn new(input: Vec<T>) -> Self {
        PermutationSpec {
            input,
            result_count: None,
            seed: None,
        }
    }

    pub fn with_result_count(mut self, count: usize) -> Self {
        self.result_count = Some(count);
        self
    }

    pub fn with_seed(mut self, seed: impl Into<String>) -> Self {
        self.seed = Some(seed.into());
        self
    }

    pub fn output_len(&self) -> usize {
        match self.result_count {
            Some(count) if count > 0 => count,
            _ => self.input.len(),
        }
    }

    /// An empty seed means "unseeded".
    pub fn seed(&self) -> Option<&str> {
        self.seed.as_deref().filter(|seed| !seed.is_empty())
    }
}

/// Shuffles `spec.input` into `spec.output_len()` elements.
///
/// With a seed the output is fully determined by the seed and the input
/// order. Without one every pass is drawn from the operating system's secure
/// source.
pub fn shuffle<T: Clone>(spec: &PermutationSpec<T>) -> Result<Vec<T>> {
    let count = spec.output_len();
    if count == 0 || spec.input.is_empty() {
        return Ok(Vec::new());
    }

    match spec.seed() {
        Some(seed) => {
            let seed = seed_from_str(seed);
            debug!(seed, input = spec.input.len(), count, "seeded shuffle");
            shuffle_with(&spec.input, count, &mut LaggedFibonacci::new(seed))
        }
        None => {
            debug!(input = spec.input.len(), count, "unseeded shuffle");
            shuffle_with(&spec.input, count, &mut SecureSource::os())
        }
    }
}

/// Emits whole permutations of `input` back to back until `count` elements
/// exist. Each pass is a fresh permutation from the continuing stream, never
/// a replay of an earlier one.
pub fn shuffle_with<T, D>(input: &[T], count: usize, draw: &mut D) -> Result<Vec<T>>
where
    T: Clone,
    D: Draw + ?Sized,
{
    if input.is_empty() {
        return Ok(Vec::new());
    }

    // Capacity tracks what one pass yields; longer requests grow the vector.
    let mut result = Vec::with_capacity(count.min(input.len()));

    while result.len() < count {
        let permutation = Permutation::generate(input.len(), draw)?;
        let take = (count - result.len()).min(permutation.len());
        result.extend(permutation.iter().take(take).map(|idx| input[idx].clone()));
    }
    Ok(result)
}

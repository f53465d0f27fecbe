use super::{reject_below, Draw};
use crate::error::{Error, Result};
use rand::rngs::OsRng;
use rand::{TryCryptoRng, TryRngCore};

/// Cryptographically secure randomness, backed by the operating system unless
/// another [`TryCryptoRng`] is supplied.
///
/// Failures of the underlying generator are reported as [`Error::Entropy`]
/// rather than panicking.
#[derive(Debug, Clone, Default)]
pub struct SecureSource<R = OsRng> {
    rng: R,
}

impl SecureSource<OsRng> {
    pub fn os() -> Self {
        SecureSource { rng: OsRng }
    }
}

impl<R: TryCryptoRng> SecureSource<R> {
    pub fn new(rng: R) -> Self {
        SecureSource { rng }
    }

    pub fn next_u64(&mut self) -> Result<u64> {
        self.rng
            .try_next_u64()
            .map_err(|err| Error::Entropy(err.to_string()))
    }

    pub fn fill(&mut self, dest: &mut [u8]) -> Result<()> {
        self.rng
            .try_fill_bytes(dest)
            .map_err(|err| Error::Entropy(err.to_string()))
    }

    pub fn bytes(&mut self, len: usize) -> Result<Vec<u8>> {
        let mut bytes = vec![0u8; len];
        self.fill(&mut bytes)?;
        Ok(bytes)
    }
}

impl<R: TryCryptoRng> Draw for SecureSource<R> {
    fn below(&mut self, bound: u64) -> Result<u64> {
        reject_below(bound, || self.next_u64())
    }
}

use crate::entropy::SecureSource;
use crate::error::Result;
use rand::TryCryptoRng;
use uuid::{Builder, Uuid};

/// Version 4 UUID from 16 secure random bytes.
pub fn random_uuid<R: TryCryptoRng>(source: &mut SecureSource<R>) -> Result<Uuid> {
    let mut bytes = [0u8; 16];
    source.fill(&mut bytes)?;
    Ok(Builder::from_random_bytes(bytes).into_uuid())
}

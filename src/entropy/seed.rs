use crc::{Crc, CRC_64_GO_ISO};

const SEED_HASH: Crc<u64> = Crc::<u64>::new(&CRC_64_GO_ISO);

/// Maps a seed string onto the integer seed of [`super::LaggedFibonacci`].
///
/// The mapping is part of every seeded result and must never change.
pub fn seed_from_str(seed: &str) -> i64 {
    SEED_HASH.checksum(seed.as_bytes()) as i64
}

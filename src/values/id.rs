use crate::entropy::SecureSource;
use crate::error::{Result, SpecificationError};
use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine;
use rand::TryCryptoRng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdOptions {
    pub byte_length: usize,
    #[serde(default)]
    pub prefix: Option<String>,
}

impl IdOptions {
    pub fn new(byte_length: usize) -> Self {
        IdOptions {
            byte_length,
            prefix: None,
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }
}

/// Random bytes and their prefixed renderings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomId {
    #[serde(with = "hex::serde")]
    pub bytes: Vec<u8>,
    pub hex: String,
    pub b64_std: String,
    pub b64_url: String,
    pub dec: String,
}

impl RandomId {
    pub fn from_bytes(bytes: Vec<u8>, prefix: &str) -> Self {
        RandomId {
            hex: format!("{prefix}{}", hex::encode(&bytes)),
            b64_std: format!("{prefix}{}", STANDARD.encode(&bytes)),
            b64_url: format!("{prefix}{}", URL_SAFE_NO_PAD.encode(&bytes)),
            dec: format!("{prefix}{}", big_endian_decimal(&bytes)),
            bytes,
        }
    }
}

pub fn random_id<R: TryCryptoRng>(options: &IdOptions, source: &mut SecureSource<R>) -> Result<RandomId> {
    if options.byte_length == 0 {
        return Err(SpecificationError::ZeroByteLength.into());
    }
    let bytes = source.bytes(options.byte_length)?;
    Ok(RandomId::from_bytes(bytes, options.prefix.as_deref().unwrap_or("")))
}

/// Decimal rendering of an unsigned big-endian integer of any width.
///
/// Ids may be wider than `u128`, and a schoolbook conversion is all that is
/// needed here, so no bignum crate is pulled in for it.
fn big_endian_decimal(bytes: &[u8]) -> String {
    // little-endian base 10^9 limbs
    const LIMB: u64 = 1_000_000_000;
    let mut limbs: Vec<u64> = vec![0];
    for &byte in bytes {
        let mut carry = byte as u64;
        for limb in limbs.iter_mut() {
            let value = *limb * 256 + carry;
            *limb = value % LIMB;
            carry = value / LIMB;
        }
        while carry > 0 {
            limbs.push(carry % LIMB);
            carry /= LIMB;
        }
    }

    let mut out = String::new();
    let mut iter = limbs.iter().rev();
    if let Some(top) = iter.next() {
        out.push_str(&top.to_string());
    }
    for limb in iter {
        out.push_str(&format!("{limb:09}"));
    }
    out
}

use crate::charset::{generate_string, GeneratedString, StringOptions};
use crate::entropy::SecureSource;
use crate::error::Result;
use rand::TryCryptoRng;
use serde::Serialize;
use std::fmt;

/// A constrained string together with a bcrypt digest of it.
#[derive(Clone, Serialize)]
pub struct Password {
    pub result: GeneratedString,
    pub bcrypt_hash: String,
}

impl Password {
    pub fn matches(&self, candidate: &str) -> Result<bool> {
        Ok(bcrypt::verify(candidate, &self.bcrypt_hash)?)
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Password")
            .field("result", &"<redacted>")
            .field("bcrypt_hash", &self.bcrypt_hash)
            .finish()
    }
}

pub fn random_password<R: TryCryptoRng>(
    options: &StringOptions,
    source: &mut SecureSource<R>,
) -> Result<Password> {
    random_password_with_cost(options, source, bcrypt::DEFAULT_COST)
}

pub fn random_password_with_cost<R: TryCryptoRng>(
    options: &StringOptions,
    source: &mut SecureSource<R>,
    cost: u32,
) -> Result<Password> {
    let result = generate_string(options, source)?;
    let bcrypt_hash = bcrypt::hash(result.as_str(), cost)?;
    Ok(Password {
        result,
        bcrypt_hash,
    })
}

use crate::charset::spec::{GenerationSpec, StringOptions};
use crate::entropy::{Draw, SecureSource};
use crate::error::Result;
use rand::TryCryptoRng;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

// Larger outputs grow the buffer as characters arrive.
const MAX_PREALLOC: usize = 4096;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GeneratedString(String);

impl GeneratedString {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for GeneratedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for GeneratedString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Builds a string of exactly `spec.length()` characters that meets every
/// class minimum, then reorders it so the position of a character does not
/// reveal whether it was drawn for a minimum or for the remainder.
pub fn generate<R: TryCryptoRng>(
    spec: &GenerationSpec,
    source: &mut SecureSource<R>,
) -> Result<GeneratedString> {
    spec.validate()?;

    let mut buffer = Vec::with_capacity(spec.length().min(MAX_PREALLOC));
    for (class, rule) in spec.classes() {
        if rule.min == 0 {
            continue;
        }
        debug!(%class, min = rule.min, charset = rule.charset.len(), "drawing class minimum");
        draw_from(&rule.charset, rule.min, source, &mut buffer)?;
    }

    let remainder = spec.length() - buffer.len();
    if remainder > 0 {
        let pool = spec.pool();
        debug!(remainder, pool = pool.len(), "drawing remainder from pool");
        draw_from(&pool, remainder, source, &mut buffer)?;
    }

    scramble(&mut buffer, source)?;
    Ok(GeneratedString(buffer.into_iter().collect()))
}

pub fn generate_string<R: TryCryptoRng>(
    options: &StringOptions,
    source: &mut SecureSource<R>,
) -> Result<GeneratedString> {
    generate(&GenerationSpec::from_options(options), source)
}

fn draw_from<R: TryCryptoRng>(
    charset: &[char],
    count: usize,
    source: &mut SecureSource<R>,
    out: &mut Vec<char>,
) -> Result<()> {
    for _ in 0..count {
        out.push(charset[source.index(charset.len())?]);
    }
    Ok(())
}

/// Stable sort by independent random keys.
fn scramble<R: TryCryptoRng>(buffer: &mut Vec<char>, source: &mut SecureSource<R>) -> Result<()> {
    let mut keyed = Vec::with_capacity(buffer.len());
    for &ch in buffer.iter() {
        keyed.push((source.next_u64()?, ch));
    }
    keyed.sort_by_key(|(key, _)| *key);
    buffer.clear();
    buffer.extend(keyed.into_iter().map(|(_, ch)| ch));
    Ok(())
}

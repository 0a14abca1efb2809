//  ____                 _____
// |  _ \ __ _ ___ ___  |  ___|__  _ __ __ _  ___
// | |_) / _` / __/ __| | |_ / _ \| '__/ _` |/ _ \
// |  __/ (_| \__ \__ \ |  _| (_) | | | (_| |  __/
// |_|   \__,_|___/___/ |_|  \___/|_|  \__, |\___|
//                                     |___/
//
// License : MIT
//
// Password generation

use chrono::{DateTime, Utc};
use rand::rngs::OsRng;
use zeroize::Zeroize;

use crate::alphabet::PasswordKind;
use crate::error::{Error, Result};
use crate::sampler;
use crate::strength::{self, StrengthAssessment, StrengthTier};

pub const MIN_LENGTH: usize = 1;
pub const MAX_LENGTH: usize = 256;

/// Whether `length` is a password length this crate will generate.
/// Exposed so front ends can validate input without duplicating the
/// bounds.
pub fn is_valid_length(length: usize) -> bool {
    (MIN_LENGTH..=MAX_LENGTH).contains(&length)
}

/// A generated password together with the numbers that produced it.
///
/// The value is wiped from memory when the password is dropped.
pub struct Password {
    value: String,
    kind: PasswordKind,
    alphabet_len: usize,
    strength: StrengthAssessment,
    created_at: DateTime<Utc>,
}

impl Password {
    /// Generate a password of `length` characters drawn from the
    /// alphabet for `kind`.
    ///
    /// The OS random source is acquired for this call only; nothing is
    /// shared or reused between generations. The strength rating uses
    /// the same `(alphabet size, length)` pair the sampler used.
    pub fn generate(kind: PasswordKind, length: usize) -> Result<Self> {
        if !is_valid_length(length) {
            return Err(Error::LengthOutOfRange {
                min: MIN_LENGTH,
                max: MAX_LENGTH,
                value: length,
            });
        }

        let alphabet = kind.alphabet();
        let mut rng = OsRng;
        let value = sampler::fill(&mut rng, &alphabet, length)?;
        let strength = strength::classify(alphabet.len(), length);

        Ok(Self {
            value,
            kind,
            alphabet_len: alphabet.len(),
            strength,
            created_at: Utc::now(),
        })
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn kind(&self) -> PasswordKind {
        self.kind
    }

    /// Length in characters (all symbols are ASCII).
    pub fn length(&self) -> usize {
        self.value.len()
    }

    /// Size of the alphabet the password was drawn from.
    pub fn alphabet_len(&self) -> usize {
        self.alphabet_len
    }

    pub fn strength(&self) -> StrengthAssessment {
        self.strength
    }

    pub fn entropy_bits(&self) -> f64 {
        self.strength.entropy_bits
    }

    pub fn tier(&self) -> StrengthTier {
        self.strength.tier
    }

    /// When the password was generated. Display-only metadata.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Drop for Password {
    fn drop(&mut self) {
        self.value.zeroize();
    }
}

//  ____                 _____
// |  _ \ __ _ ___ ___  |  ___|__  _ __ __ _  ___
// | |_) / _` / __/ __| | |_ / _ \| '__/ _` |/ _ \
// |  __/ (_| \__ \__ \ |  _| (_) | | | (_| |  __/
// |_|   \__,_|___/___/ |_|  \___/|_|  \__, |\___|
//                                     |___/
//
// License : MIT
//
// Entropy-based strength rating

use std::fmt;

use crate::alphabet::ALPHA_NUMERIC;

/// 128 bits of entropy is infeasible to exhaust, even offline.
pub const STRONG_ENTROPY_BITS: f64 = 128.0;

/// NIST SP 800-63B: memorized secrets chosen by a subscriber must be at
/// least 8 characters.
pub const MIN_ACCEPTABLE_LENGTH: usize = 8;

/// An acceptable password draws from at least an alphanumeric-sized
/// alphabet.
pub const MIN_ACCEPTABLE_ALPHABET: usize = ALPHA_NUMERIC.len();

/// NIST SP 800-63B: randomly generated secrets may be as short as 6
/// characters, numeric allowed.
pub const MIN_PIN_LENGTH: usize = 6;

/// How well a password resists guessing, ordered weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthTier {
    /// Easily guessed when the attacker gets unlimited attempts.
    Weak,
    /// Long enough for a PIN on a device that locks out after a handful
    /// of bad guesses. Never adequate for remote authentication.
    AcceptableOnlyForPins,
    /// Holds up against online guessing when the remote system throttles
    /// failed attempts, but not against an offline attack.
    Acceptable,
    /// Too many combinations to search; infeasible to guess.
    Strong,
}

impl StrengthTier {
    /// Short label for display next to a generated password.
    pub fn label(self) -> &'static str {
        match self {
            StrengthTier::Weak => "Weak",
            StrengthTier::AcceptableOnlyForPins => "Acceptable only for PINs",
            StrengthTier::Acceptable => "Acceptable",
            StrengthTier::Strong => "Strong",
        }
    }

    /// One-sentence explanation of what the tier is good for.
    pub fn description(self) -> &'static str {
        match self {
            StrengthTier::Weak => {
                "can be guessed quickly by an attacker with unlimited attempts; \
                 not suitable for any account"
            }
            StrengthTier::AcceptableOnlyForPins => {
                "usable as a PIN on a device that locks after a few failed \
                 guesses; never for remote authentication"
            }
            StrengthTier::Acceptable => {
                "resists online guessing when the remote system throttles \
                 failed logins, but not a determined offline attack"
            }
            StrengthTier::Strong => {
                "has too many combinations to try; infeasible to guess even \
                 with an offline attack"
            }
        }
    }
}

impl fmt::Display for StrengthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The tier and the entropy it was derived from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrengthAssessment {
    pub tier: StrengthTier,
    pub entropy_bits: f64,
}

/// Rate a password policy from the size of its alphabet and its length.
///
/// Entropy is `log2(alphabet_size) * length`. Pure, so a policy can be
/// evaluated without generating anything; generation always classifies
/// with the same pair it sampled from. Zero-sized inputs are caller
/// bugs.
pub fn classify(alphabet_size: usize, length: usize) -> StrengthAssessment {
    debug_assert!(alphabet_size > 0, "alphabet size must be positive");
    debug_assert!(length > 0, "length must be positive");

    let bits_per_symbol = (alphabet_size as f64).log2();
    let entropy_bits = bits_per_symbol * length as f64;

    let tier = if entropy_bits >= STRONG_ENTROPY_BITS {
        StrengthTier::Strong
    } else if length >= MIN_ACCEPTABLE_LENGTH && alphabet_size >= MIN_ACCEPTABLE_ALPHABET {
        StrengthTier::Acceptable
    } else if length >= MIN_PIN_LENGTH {
        StrengthTier::AcceptableOnlyForPins
    } else {
        StrengthTier::Weak
    };

    StrengthAssessment { tier, entropy_bits }
}

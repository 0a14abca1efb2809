//  ____                 _____
// |  _ \ __ _ ___ ___  |  ___|__  _ __ __ _  ___
// | |_) / _` / __/ __| | |_ / _ \| '__/ _` |/ _ \
// |  __/ (_| \__ \__ \ |  _| (_) | | | (_| |  __/
// |_|   \__,_|___/___/ |_|  \___/|_|  \__, |\___|
//                                     |___/
//
// License : MIT
//
// Unbiased sampling of alphabet symbols from a secure byte source

use rand::{CryptoRng, RngCore};

use crate::alphabet::Alphabet;
use crate::error::Result;

const DISTINCT_BYTE_VALUES: usize = 256;

// Each rejection happens with probability below 94/256 for every table
// in use, so a run this long means the byte source is broken.
const MAX_CONSECUTIVE_REJECTS: u32 = 4096;

/// Draw `length` symbols from `alphabet`, each chosen uniformly at
/// random from the bytes produced by `rng`.
///
/// A byte only selects a symbol when it falls inside one of the whole
/// `[0, n)` ranges that fit in a byte; bytes in the partial range at the
/// top are discarded and redrawn, otherwise `byte % n` would
/// over-represent the low indices. The number of redraws is
/// geometrically bounded, below two draws per symbol for every table
/// size.
///
/// The caller validates `length`; this function validates the alphabet
/// and treats a violation as a broken internal invariant.
pub fn fill<R>(rng: &mut R, alphabet: &Alphabet, length: usize) -> Result<String>
where
    R: RngCore + CryptoRng,
{
    let n = alphabet.len();
    assert!(n > 0, "alphabet must not be empty");
    assert!(
        n <= Alphabet::MAX_SYMBOLS,
        "one byte cannot index an alphabet of {n} symbols"
    );
    debug_assert!(alphabet.as_str().is_ascii());

    let ranges_per_byte = DISTINCT_BYTE_VALUES / n;
    let last_acceptable = (ranges_per_byte * n - 1) as u8;

    let mut output = String::with_capacity(length);
    let mut byte = [0u8; 1];
    let mut rejected_in_a_row = 0u32;

    // Symbols are ASCII, so the byte count of `output` is its length.
    while output.len() < length {
        rng.try_fill_bytes(&mut byte)?;
        let value = byte[0];

        if value > last_acceptable {
            rejected_in_a_row += 1;
            assert!(
                rejected_in_a_row < MAX_CONSECUTIVE_REJECTS,
                "secure random source keeps producing bytes in the rejected range"
            );
            continue;
        }

        rejected_in_a_row = 0;
        output.push(alphabet.symbol(value as usize % n));
    }

    Ok(output)
}

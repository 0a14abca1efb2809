//  ____                 _____
// |  _ \ __ _ ___ ___  |  ___|__  _ __ __ _  ___
// | |_) / _` / __/ __| | |_ / _ \| '__/ _` |/ _ \
// |  __/ (_| \__ \__ \ |  _| (_) | | | (_| |  __/
// |_|   \__,_|___/___/ |_|  \___/|_|  \__, |\___|
//                                     |___/
//
// License : MIT
//
// Password kinds and their character tables

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

const NUMERIC: &str = "0123456789";

const HEX: &str = "0123456789abcdef";

pub(crate) const ALPHA_NUMERIC: &str = concat!(
    "0123456789",
    "abcdefghijklmnopqrstuvwxyz",
    "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
);

// Everything reachable on a standard 101-key US keyboard without Shift+Space.
const KEYBOARD: &str = concat!(
    "0123456789",
    "abcdefghijklmnopqrstuvwxyz",
    "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
    ")!@#$%^&*(",
    "`-=[]\\;',./",
    "~_+{}|:\"<>?",
);

const KEYBOARD_WITH_SPACE: &str = concat!(
    "0123456789",
    "abcdefghijklmnopqrstuvwxyz",
    "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
    ")!@#$%^&*(",
    "`-=[]\\;',./",
    "~_+{}|:\"<>?",
    " ",
);

/// Which characters a generated password may contain.
///
/// This only covers US-keyboard character sets; supporting other layouts
/// would need new tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum PasswordKind {
    /// The ten ASCII digits. PIN-grade only.
    Numeric,
    /// Lowercase hexadecimal digits.
    Hex,
    /// Digits plus lowercase and uppercase Latin letters.
    AlphaNumeric,
    /// Every key on a US keyboard except the space bar.
    Keyboard,
    /// Every key on a US keyboard, space included.
    KeyboardWithSpace,
}

impl PasswordKind {
    pub const ALL: [PasswordKind; 5] = [
        PasswordKind::Numeric,
        PasswordKind::Hex,
        PasswordKind::AlphaNumeric,
        PasswordKind::Keyboard,
        PasswordKind::KeyboardWithSpace,
    ];

    /// The character table for this kind.
    pub fn alphabet(self) -> Alphabet {
        let symbols = match self {
            PasswordKind::Numeric => NUMERIC,
            PasswordKind::Hex => HEX,
            PasswordKind::AlphaNumeric => ALPHA_NUMERIC,
            PasswordKind::Keyboard => KEYBOARD,
            PasswordKind::KeyboardWithSpace => KEYBOARD_WITH_SPACE,
        };
        Alphabet { symbols }
    }
}

impl fmt::Display for PasswordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PasswordKind::Numeric => "numeric",
            PasswordKind::Hex => "hex",
            PasswordKind::AlphaNumeric => "alpha-numeric",
            PasswordKind::Keyboard => "keyboard",
            PasswordKind::KeyboardWithSpace => "keyboard-with-space",
        })
    }
}

/// An ordered, duplicate-free table of ASCII symbols.
///
/// Only built from the static tables above, so the sampler's size limit
/// holds by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alphabet {
    symbols: &'static str,
}

impl Alphabet {
    /// One random byte indexes the table, so it can never hold more
    /// than 256 symbols.
    pub const MAX_SYMBOLS: usize = 256;

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The symbol at `index`. Panics if `index` is out of range.
    pub fn symbol(&self, index: usize) -> char {
        self.symbols.as_bytes()[index] as char
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.symbols.contains(symbol)
    }

    pub fn as_str(&self) -> &'static str {
        self.symbols
    }
}

//  ____                 _____
// |  _ \ __ _ ___ ___  |  ___|__  _ __ __ _  ___
// | |_) / _` / __/ __| | |_ / _ \| '__/ _` |/ _ \
// |  __/ (_| \__ \__ \ |  _| (_) | | | (_| |  __/
// |_|   \__,_|___/___/ |_|  \___/|_|  \__, |\___|
//                                     |___/
//
// License : MIT
//
// Error types

use thiserror::Error;

/// Errors reported to callers of this crate.
///
/// Broken internal invariants (an empty alphabet, a table larger than one
/// byte can index) are not represented here; those panic.
#[derive(Debug, Error)]
pub enum Error {
    /// The requested password length is outside the supported bounds.
    /// Carries both bounds so callers can build a complete message.
    #[error("password length must be between {min} and {max} characters, got {value}")]
    LengthOutOfRange {
        min: usize,
        max: usize,
        value: usize,
    },

    /// The operating system's secure random source failed to produce
    /// bytes. Never recovered by falling back to a weaker source.
    #[error("secure random source failed: {0}")]
    RandomSource(#[from] rand::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config directory error: {0}")]
    ConfigDir(String),
}

/// Result type for the library.
pub type Result<T> = std::result::Result<T, Error>;

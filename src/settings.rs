//  ____                 _____
// |  _ \ __ _ ___ ___  |  ___|__  _ __ __ _  ___
// | |_) / _` / __/ __| | |_ / _ \| '__/ _` |/ _ \
// |  __/ (_| \__ \__ \ |  _| (_) | | | (_| |  __/
// |_|   \__,_|___/___/ |_|  \___/|_|  \__, |\___|
//                                     |___/
//
// License : MIT
//
// Stored defaults for password generation

use std::fs;
use std::path::{Path, PathBuf};

use dirs::config_dir;
use serde::{Deserialize, Serialize};

use crate::alphabet::PasswordKind;
use crate::error::{Error, Result};
use crate::password;

pub const DEFAULT_KIND: PasswordKind = PasswordKind::Keyboard;
pub const DEFAULT_LENGTH: usize = 16;

const APP_DIR: &str = "passforge";
const SETTINGS_FILE: &str = "settings.json";

/// Defaults applied when `gen` is run without an explicit kind or
/// length, persisted as JSON in the user's config directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub default_kind: PasswordKind,
    pub default_length: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_kind: DEFAULT_KIND,
            default_length: DEFAULT_LENGTH,
        }
    }
}

impl Settings {
    /// The per-user configuration directory for this application.
    pub fn config_dir() -> Result<PathBuf> {
        config_dir()
            .map(|path| path.join(APP_DIR))
            .ok_or_else(|| {
                Error::ConfigDir("could not determine the user configuration directory".to_string())
            })
    }

    pub fn default_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(SETTINGS_FILE))
    }

    /// Load settings from the default location.
    pub fn load() -> Result<Self> {
        Ok(Self::load_from(&Self::default_path()?))
    }

    /// Load settings from `path`, tolerating broken state: a missing or
    /// unreadable file, malformed JSON, or an unknown kind tag falls
    /// back to the built-in defaults, and a stored length outside the
    /// supported bounds falls back for that field alone. Bad settings
    /// are never an error the user has to resolve by hand.
    pub fn load_from(path: &Path) -> Self {
        let data = match fs::read_to_string(path) {
            Ok(data) => data,
            Err(err) => {
                if err.kind() != std::io::ErrorKind::NotFound {
                    log::warn!("could not read {}: {err}", path.display());
                }
                return Self::default();
            }
        };

        match serde_json::from_str::<Self>(&data) {
            Ok(settings) => settings.sanitized(),
            Err(err) => {
                log::warn!("ignoring malformed settings in {}: {err}", path.display());
                Self::default()
            }
        }
    }

    /// Save to the default location, creating the directory if needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::default_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    fn sanitized(mut self) -> Self {
        if !password::is_valid_length(self.default_length) {
            log::warn!(
                "ignoring stored default length {} (must be between {} and {})",
                self.default_length,
                password::MIN_LENGTH,
                password::MAX_LENGTH,
            );
            self.default_length = DEFAULT_LENGTH;
        }
        self
    }
}

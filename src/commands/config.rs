use anyhow::Result;

use crate::alphabet::PasswordKind;
use crate::error::Error;
use crate::password;
use crate::settings::Settings;

/// Show the stored defaults, or update whichever of them were given.
pub fn run(default_kind: Option<PasswordKind>, default_length: Option<usize>) -> Result<()> {
    let mut settings = Settings::load()?;

    if default_kind.is_none() && default_length.is_none() {
        println!("Default password kind:   {}", settings.default_kind);
        println!("Default password length: {}", settings.default_length);
        println!("Settings file: {}", Settings::default_path()?.display());
        return Ok(());
    }

    if let Some(kind) = default_kind {
        settings.default_kind = kind;
    }
    if let Some(length) = default_length {
        if !password::is_valid_length(length) {
            return Err(Error::LengthOutOfRange {
                min: password::MIN_LENGTH,
                max: password::MAX_LENGTH,
                value: length,
            }
            .into());
        }
        settings.default_length = length;
    }

    settings.save()?;
    log::debug!("settings saved to {}", Settings::default_path()?.display());
    println!("Default password kind:   {}", settings.default_kind);
    println!("Default password length: {}", settings.default_length);

    Ok(())
}

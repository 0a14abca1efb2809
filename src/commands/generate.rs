use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::alphabet::PasswordKind;
use crate::password::Password;
use crate::settings::Settings;

pub fn run(kind: Option<PasswordKind>, length: Option<usize>, out: Option<&Path>) -> Result<()> {
    let settings = Settings::load()?;
    let kind = kind.unwrap_or(settings.default_kind);
    let length = length.unwrap_or(settings.default_length);
    log::debug!("generating a {kind} password of {length} characters");

    let password = Password::generate(kind, length)?;

    println!("New password: {}", password.value());
    println!();
    println!("Strength in bits: {:.1}", password.entropy_bits());
    println!(
        "Strength: {} ({})",
        password.tier(),
        password.tier().description()
    );

    if let Some(path) = out {
        write_report(&password, path)?;
        println!();
        println!("Saved password to {}", path.display());
    }

    Ok(())
}

/// Plain-text report in the shape of the printable document the GUI
/// versions of this tool produce.
fn write_report(password: &Password, path: &Path) -> Result<()> {
    let report = format!(
        "Password:       {}\n\
         Date generated: {}\n\
         Kind:           {}\n\
         Strength:       {} ({:.1} bits)\n",
        password.value(),
        password.created_at().format("%Y-%m-%d %H:%M:%S UTC"),
        password.kind(),
        password.tier(),
        password.entropy_bits(),
    );
    fs::write(path, report)
        .with_context(|| format!("failed to write password to {}", path.display()))
}

//! Build script for spotrelay.
//!
//! Copies the `.env.example` template into the platform-specific local data
//! directory so a fresh install has a configuration skeleton next to the
//! place where `config::load_env` looks for `.env`.

use std::{env, fs, path::PathBuf};

/// Copies `.env.example` to `<data_local_dir>/spotrelay/.env.example`.
///
/// Nothing here fails the build: a missing template or an unwritable data
/// directory only produces a cargo warning.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=.env.example");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let template = manifest_dir.join(".env.example");

    if !template.is_file() {
        println!(
            "cargo:warning=.env.example not found at {}",
            template.display()
        );
        return Ok(());
    }

    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("spotrelay");

    let copied = fs::create_dir_all(&out_dir)
        .and_then(|_| fs::copy(&template, out_dir.join(".env.example")));
    if let Err(e) = copied {
        println!(
            "cargo:warning=could not copy .env.example to {}: {}",
            out_dir.display(),
            e
        );
    }

    Ok(())
}

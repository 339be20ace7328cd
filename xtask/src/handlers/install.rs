use crate::models::packages::PACKAGE_SETS;
use crate::services::pip::Pip;
use anyhow::Result;
use std::path::Path;

/// Installs every pinned package set from the local cache, offline.
///
/// # Result
/// Returns `Ok(())` once all package sets have been installed.
///
/// # Errors
/// Returns an error as soon as one pip invocation fails; the remaining
/// package sets are not installed.
pub fn install_packages(cache: &Path) -> Result<()> {
    println!("🔌 Installing from local cache only, no network access: '{}'.", cache.display());

    let pip = Pip::new();
    for set in PACKAGE_SETS {
        println!("📦 Installing {}...", set.label());
        pip.install(cache, set)?;
    }

    println!("\n✨ Package stack installed from '{}'.", cache.display());
    Ok(())
}

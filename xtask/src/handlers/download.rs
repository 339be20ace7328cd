use crate::models::packages::PACKAGE_SETS;
use crate::services::pip::Pip;
use anyhow::Result;
use std::path::Path;

/// Downloads every pinned package set into the local cache.
///
/// # Result
/// Returns `Ok(())` once all package sets have been fetched.
///
/// # Errors
/// Returns an error as soon as one pip invocation fails; the remaining
/// package sets are not fetched.
pub fn download_packages(cache: &Path) -> Result<()> {
    println!("📥 Downloading {} package sets into '{}'...", PACKAGE_SETS.len(), cache.display());

    let pip = Pip::new();
    for set in PACKAGE_SETS {
        println!("📦 Fetching {}...", set.label());
        pip.download(cache, set)?;
    }

    println!("\n✨ Package cache is ready: '{}'.", cache.display());
    Ok(())
}

use crate::models::docs::DocsConfig;
use crate::services::sphinx::Sphinx;
use crate::services::utils::get_project_root;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

// --- Constants ---
const DOC_SOURCE_DIR: &str = "doc";
const BUILD_DIR: &str = "doc/_build";
const STATIC_DIR: &str = "doc/_static";
const TEMPLATES_DIR: &str = "doc/_templates";
const HTML_OUTPUT_DIR: &str = "doc/_build/html";
const CONF_FILE: &str = "doc/conf.py";

/// Rebuilds the HTML documentation with the given `sphinx-build` executable.
///
/// # Result
/// Returns `Ok(())` once the HTML tree has been rendered under `doc/_build/html`.
///
/// # Errors
/// Returns an error if the output directories cannot be reset, the Sphinx
/// configuration cannot be written, or the builder exits unsuccessfully.
pub fn build_docs(sphinx: &Path) -> Result<()> {
    let project_root = get_project_root()?;

    reset_output_dirs(&project_root)?;
    write_sphinx_config(&project_root)?;

    println!("📚 Building HTML documentation...");
    Sphinx::new(sphinx)
        .build_html(&project_root.join(DOC_SOURCE_DIR), &project_root.join(HTML_OUTPUT_DIR))?;

    println!("\n✨ Documentation is ready: '{HTML_OUTPUT_DIR}/index.html'.");
    Ok(())
}

/// Resets the build output and asset directories to a clean state.
///
/// Stale build output is removed entirely; the asset directories are
/// recreated so the builder never trips over missing paths.
fn reset_output_dirs(root: &Path) -> Result<()> {
    let build_dir = root.join(BUILD_DIR);
    if build_dir.exists() {
        fs::remove_dir_all(&build_dir)
            .with_context(|| format!("Failed to remove stale build output at '{BUILD_DIR}'"))?;
    }

    for dir in [BUILD_DIR, STATIC_DIR, TEMPLATES_DIR] {
        fs::create_dir_all(root.join(dir))
            .with_context(|| format!("Failed to create '{dir}'"))?;
    }

    Ok(())
}

/// Regenerates `doc/conf.py` from the static configuration.
fn write_sphinx_config(root: &Path) -> Result<()> {
    let conf_path = root.join(CONF_FILE);
    let rendered = DocsConfig::default().render()?;

    fs::write(&conf_path, rendered)
        .with_context(|| format!("Failed to write Sphinx configuration to '{CONF_FILE}'"))?;

    println!("✅ Generated Sphinx configuration: '{CONF_FILE}'.");
    Ok(())
}

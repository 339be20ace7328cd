use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Wrapper around an externally provided `sphinx-build` executable.
#[derive(Debug)]
pub struct Sphinx {
    program: PathBuf,
}

impl Sphinx {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self { program: program.into() }
    }

    /// Renders the documentation source directory into HTML.
    ///
    /// # Result
    /// Returns `Ok(())` once the builder exits successfully.
    ///
    /// # Errors
    /// Returns an error if the source directory is missing, the builder
    /// cannot be spawned, or it exits with a non-zero status.
    pub fn build_html(&self, source: &Path, output: &Path) -> Result<()> {
        if !source.is_dir() {
            anyhow::bail!("Documentation source not found at: {}", source.display());
        }

        let status = Command::new(&self.program)
            .arg("-b")
            .arg("html")
            .arg(source)
            .arg(output)
            .arg("--quiet")
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .with_context(|| {
                format!(
                    "Failed to execute '{}'. Does the sphinx-build path exist?",
                    self.program.display()
                )
            })?;

        if !status.success() {
            anyhow::bail!("Sphinx build failed with status: {status}");
        }

        Ok(())
    }
}

#[test]
fn missing_source_dir_is_reported() {
    let sphinx = Sphinx::new("sphinx-build");
    let err = sphinx
        .build_html(Path::new("non-existent-doc-dir"), Path::new("non-existent-doc-dir/_build"))
        .unwrap_err();
    assert!(err.to_string().contains("not found"), "expected missing source error, got: {err}");
}

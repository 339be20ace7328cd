use crate::models::packages::PackageSet;
use anyhow::{Context, Result};
use std::path::Path;
use std::process::{Command, Stdio};

#[derive(Debug)]
pub struct Pip {
    python: String,
}

impl Default for Pip {
    fn default() -> Self {
        // The python.org installer registers the launcher as 'python' on Windows
        let python = if cfg!(windows) { "python" } else { "python3" };
        Self { python: python.to_owned() }
    }
}

impl Pip {
    /// Creates a pip helper bound to the platform's default Python interpreter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the interpreter (useful for testing/custom setups).
    pub fn with_python(python: impl Into<String>) -> Self {
        Self { python: python.into() }
    }

    /// Run a pip subcommand through `python -m pip`.
    ///
    /// # Errors
    /// Returns an error if the interpreter cannot be spawned or pip exits
    /// with a non-zero status.
    pub fn run(&self, args: &[String]) -> Result<()> {
        let status = Command::new(&self.python)
            .arg("-m")
            .arg("pip")
            .args(args)
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .with_context(|| {
                format!(
                    "Failed to execute '{}'. Is Python installed and in your PATH?",
                    self.python
                )
            })?;

        if !status.success() {
            anyhow::bail!("pip command failed with status: {status}");
        }

        Ok(())
    }

    /// Downloads one package set into the cache directory.
    ///
    /// # Errors
    /// Returns an error if the underlying pip command fails.
    pub fn download(&self, cache: &Path, set: &PackageSet) -> Result<()> {
        self.run(&download_args(cache, set))
    }

    /// Installs one package set sourcing archives only from the cache directory.
    ///
    /// # Errors
    /// Returns an error if the underlying pip command fails.
    pub fn install(&self, cache: &Path, set: &PackageSet) -> Result<()> {
        self.run(&install_args(cache, set))
    }
}

/// Argument vector for `pip download` of one package set.
#[must_use]
pub fn download_args(cache: &Path, set: &PackageSet) -> Vec<String> {
    let mut args = vec![
        "download".to_owned(),
        "--no-cache-dir".to_owned(),
        "--dest".to_owned(),
        cache.display().to_string(),
        "--quiet".to_owned(),
    ];
    args.extend(set.requirements.iter().map(|req| (*req).to_owned()));

    if let Some(url) = set.index_url {
        args.push("--index-url".to_owned());
        args.push(url.to_owned());
    }

    args
}

/// Argument vector for `pip install` of one package set.
///
/// Strictly offline: `--no-index` pins the cache as the only package source,
/// so the set's extra index URL is never forwarded here.
#[must_use]
pub fn install_args(cache: &Path, set: &PackageSet) -> Vec<String> {
    let mut args = vec![
        "install".to_owned(),
        "--compile".to_owned(),
        "--no-index".to_owned(),
        format!("--find-links={}", cache.display()),
        "--quiet".to_owned(),
    ];
    args.extend(set.requirements.iter().map(|req| (*req).to_owned()));

    args
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::packages::PACKAGE_SETS;
    use std::path::PathBuf;

    #[test]
    fn download_args_are_deterministic() {
        let cache = PathBuf::from("/tmp/cache");
        let set = PackageSet { requirements: &["pytest", "jupyter"], index_url: None };

        assert_eq!(
            download_args(&cache, &set),
            ["download", "--no-cache-dir", "--dest", "/tmp/cache", "--quiet", "pytest", "jupyter"]
        );
    }

    #[test]
    fn download_args_append_extra_index() {
        let cache = PathBuf::from("cache");
        let set = PackageSet { requirements: &["torch"], index_url: Some("https://example.com") };

        assert_eq!(
            download_args(&cache, &set),
            [
                "download",
                "--no-cache-dir",
                "--dest",
                "cache",
                "--quiet",
                "torch",
                "--index-url",
                "https://example.com"
            ]
        );
    }

    #[test]
    fn install_args_are_deterministic() {
        let cache = PathBuf::from("cache");
        let set = PackageSet { requirements: &["pillow", "imageio"], index_url: None };

        assert_eq!(
            install_args(&cache, &set),
            [
                "install",
                "--compile",
                "--no-index",
                "--find-links=cache",
                "--quiet",
                "pillow",
                "imageio"
            ]
        );
    }

    #[test]
    fn install_never_reaches_an_index() {
        let cache = PathBuf::from("cache");

        for set in PACKAGE_SETS {
            let args = install_args(&cache, set);
            assert!(args.contains(&"--no-index".to_owned()));
            assert!(!args.iter().any(|arg| arg.contains("--index-url")));
        }
    }

    #[test]
    fn missing_interpreter_is_reported() {
        let pip = Pip::with_python("definitely-not-a-python-interpreter");
        let err = pip.run(&["--version".to_owned()]).unwrap_err();
        assert!(err.to_string().contains("Failed to execute"), "unexpected error: {err}");
    }
}

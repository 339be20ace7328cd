/// A group of pip requirements fetched and installed together.
///
/// The optional extra index URL only matters while downloading; installs are
/// offline and source every archive from the local cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackageSet {
    pub requirements: &'static [&'static str],
    pub index_url: Option<&'static str>,
}

impl PackageSet {
    const fn of(requirements: &'static [&'static str]) -> Self {
        Self { requirements, index_url: None }
    }

    const fn indexed(requirements: &'static [&'static str], index_url: &'static str) -> Self {
        Self { requirements, index_url: Some(index_url) }
    }

    /// Space-joined requirement list, as shown in progress output.
    #[must_use]
    pub fn label(&self) -> String {
        self.requirements.join(" ")
    }
}

/// The pinned package stack, iterated in this exact order by both the
/// `download` and `install` tasks.
pub const PACKAGE_SETS: &[PackageSet] = &[
    PackageSet::of(&["pytest", "jupyter"]),
    PackageSet::of(&["sphinx", "sphinxcontrib-plantuml", "esbonio", "sphinx_rtd_theme"]),
    PackageSet::of(&["pillow", "imageio"]),
    // scientific computing
    PackageSet::of(&["numpy", "scipy", "pandas", "scikit-learn"]),
    // plotting
    PackageSet::of(&["matplotlib", "seaborn", "plotly"]),
    // utilities
    PackageSet::of(&["tqdm", "colorama"]),
    // gpu computing
    PackageSet::indexed(
        &["torch", "torchvision", "torchaudio"],
        "https://download.pytorch.org/whl/cu124",
    ),
    PackageSet::of(&["pycuda"]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn package_sets_are_stable() {
        assert_eq!(PACKAGE_SETS.len(), 8);
        assert_eq!(PACKAGE_SETS[0].requirements, ["pytest", "jupyter"]);
        assert_eq!(PACKAGE_SETS[7].requirements, ["pycuda"]);
    }

    #[test]
    fn only_torch_uses_an_extra_index() {
        let indexed: Vec<&PackageSet> =
            PACKAGE_SETS.iter().filter(|set| set.index_url.is_some()).collect();

        assert_eq!(indexed.len(), 1);
        assert!(indexed[0].requirements.contains(&"torch"));
        assert_eq!(indexed[0].index_url, Some("https://download.pytorch.org/whl/cu124"));
    }

    #[test]
    fn label_joins_requirements() {
        assert_eq!(PACKAGE_SETS[0].label(), "pytest jupyter");
    }
}

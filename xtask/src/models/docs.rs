use anyhow::Result;
use std::fmt::Write as FmtWrite;

/// Options handed to the Read the Docs HTML theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeOptions {
    pub logo_only: bool,
    pub display_version: bool,
    pub prev_next_buttons_location: &'static str,
}

/// Static description of the Sphinx site configuration.
///
/// This is the single source of truth for `doc/conf.py`: the `build` task
/// regenerates the file from [`DocsConfig::render`] on every run, and the
/// committed copy is pinned to the renderer output by a test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocsConfig {
    pub project: &'static str,
    pub copyright: &'static str,
    pub author: &'static str,
    pub release: &'static str,
    /// Package sources made importable for autodoc, relative to the build cwd.
    pub source_path: &'static str,
    pub extensions: &'static [&'static str],
    pub templates_path: &'static [&'static str],
    pub exclude_patterns: &'static [&'static str],
    pub html_theme: &'static str,
    pub html_static_path: &'static [&'static str],
    pub theme_options: ThemeOptions,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            project: "Spectral Maps Rediscovered",
            copyright: "2024, Stefano Magrini Alunno",
            author: "Stefano Magrini Alunno",
            release: "1.0",
            source_path: "../../source",
            extensions: &[
                "sphinx.ext.autodoc",
                "sphinx.ext.mathjax",
                "sphinx.ext.githubpages",
                "sphinx.ext.napoleon",
                "sphinx.ext.viewcode",
            ],
            templates_path: &["_templates"],
            exclude_patterns: &["build", "Thumbs.db", ".DS_Store"],
            html_theme: "sphinx_rtd_theme",
            html_static_path: &["_static"],
            theme_options: ThemeOptions {
                logo_only: false,
                display_version: true,
                prev_next_buttons_location: "top",
            },
        }
    }
}

impl DocsConfig {
    /// Renders the configuration as `conf.py` source text.
    ///
    /// # Result
    /// Returns the complete file contents as a `String`.
    ///
    /// # Errors
    /// Returns an error if formatting into the output buffer fails.
    pub fn render(&self) -> Result<String> {
        let mut w = String::new();
        writeln!(w, "# Auto-generated by `cargo xtask build`. Do not edit by hand.\n")?;
        writeln!(w, "import os")?;
        writeln!(w, "import sys\n")?;
        writeln!(w, "sys.path.insert(0, os.path.abspath({}))\n", py_str(self.source_path))?;

        writeln!(w, "project = {}", py_str(self.project))?;
        writeln!(w, "copyright = {}", py_str(self.copyright))?;
        writeln!(w, "author = {}", py_str(self.author))?;
        writeln!(w, "release = {}\n", py_str(self.release))?;

        writeln!(w, "extensions = [")?;
        for extension in self.extensions {
            writeln!(w, "    {},", py_str(extension))?;
        }
        writeln!(w, "]\n")?;

        writeln!(w, "templates_path = {}", py_list(self.templates_path))?;
        writeln!(w, "exclude_patterns = {}\n", py_list(self.exclude_patterns))?;

        writeln!(w, "html_theme = {}", py_str(self.html_theme))?;
        writeln!(w, "html_theme_options = {{")?;
        writeln!(w, "    \"logo_only\": {},", py_bool(self.theme_options.logo_only))?;
        writeln!(w, "    \"display_version\": {},", py_bool(self.theme_options.display_version))?;
        writeln!(
            w,
            "    \"prev_next_buttons_location\": {},",
            py_str(self.theme_options.prev_next_buttons_location)
        )?;
        writeln!(w, "}}")?;
        writeln!(w, "html_static_path = {}", py_list(self.html_static_path))?;

        Ok(w)
    }
}

fn py_str(s: &str) -> String {
    format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
}

const fn py_bool(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}

fn py_list(items: &[&str]) -> String {
    let quoted: Vec<String> = items.iter().map(|item| py_str(item)).collect();
    format!("[{}]", quoted.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_is_static_across_loads() {
        assert_eq!(DocsConfig::default(), DocsConfig::default());
    }

    #[test]
    fn render_is_deterministic() {
        let config = DocsConfig::default();
        assert_eq!(config.render().unwrap(), config.render().unwrap());
    }

    #[test]
    fn render_emits_project_and_theme() {
        let rendered = DocsConfig::default().render().unwrap();

        assert!(rendered.starts_with("# Auto-generated by `cargo xtask build`."));
        assert!(rendered.contains("project = \"Spectral Maps Rediscovered\""));
        assert!(rendered.contains("html_theme = \"sphinx_rtd_theme\""));
        assert!(rendered.contains("\"display_version\": True,"));
        assert!(rendered.contains("exclude_patterns = [\"build\", \"Thumbs.db\", \".DS_Store\"]"));
    }

    #[test]
    fn committed_conf_matches_renderer() {
        let rendered = DocsConfig::default().render().unwrap();
        assert_eq!(include_str!("../../../doc/conf.py"), rendered);
    }

    #[test]
    fn py_str_escapes_quotes() {
        assert_eq!(py_str("a \"b\""), "\"a \\\"b\\\"\"");
    }
}

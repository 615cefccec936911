//! Project root, configuration and per-language path derivation

mod paths;

pub use paths::BuildPaths;

use crate::config::Config;
use crate::error::Result;
use std::path::{Path, PathBuf};

/// A resume project: the directory holding `data/`, `templates/` and the assets
#[derive(Debug, Clone)]
pub struct Project {
    pub root: PathBuf,
    pub config: Config,
}

impl Project {
    /// Open a project rooted at `root`
    ///
    /// With `explicit_config` the given file must exist and parse; otherwise
    /// `<root>/cvbuild.toml` is used when present and defaults apply when not.
    pub fn open(root: impl Into<PathBuf>, explicit_config: Option<&Path>) -> Result<Self> {
        let root = root.into();
        let mut config = match explicit_config {
            Some(path) => Config::from_file(path)?,
            None => Config::load_or_default(&root)?,
        };
        config
            .toolchain
            .apply_overrides(|key| std::env::var(key).ok());

        Ok(Self { root, config })
    }

    /// Build a project from an already loaded config (no env overrides)
    pub fn with_config(root: impl Into<PathBuf>, config: Config) -> Self {
        Self {
            root: root.into(),
            config,
        }
    }

    /// Derive every path a build of `lang` reads or writes
    pub fn paths_for(&self, lang: &str) -> Result<BuildPaths> {
        BuildPaths::new(&self.root, &self.config, lang)
    }

    pub fn templates_dir(&self) -> PathBuf {
        self.root.join(&self.config.paths.templates_dir)
    }

    pub fn data_dir(&self) -> PathBuf {
        self.root.join(&self.config.paths.data_dir)
    }

    pub fn build_dir(&self) -> PathBuf {
        self.root.join(&self.config.paths.build_dir)
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.root.join(&self.config.paths.logs_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cvbuild_testkit::temp_dir_in_workspace;
    use std::fs;

    #[test]
    fn test_open_without_config() {
        let temp = temp_dir_in_workspace();
        let project = Project::open(temp.path(), None).unwrap();
        assert_eq!(project.root, temp.path());
        assert_eq!(project.build_dir(), temp.path().join("build"));
        assert_eq!(project.templates_dir(), temp.path().join("templates"));
    }

    #[test]
    fn test_open_with_explicit_config() {
        let temp = temp_dir_in_workspace();
        let config_path = temp.path().join("custom.toml");
        fs::write(&config_path, "[paths]\nlogs_dir = \"tex-logs\"\n").unwrap();

        let project = Project::open(temp.path(), Some(&config_path)).unwrap();
        assert_eq!(project.logs_dir(), temp.path().join("tex-logs"));
    }

    #[test]
    fn test_open_with_missing_explicit_config_fails() {
        let temp = temp_dir_in_workspace();
        let missing = temp.path().join("nope.toml");
        assert!(Project::open(temp.path(), Some(&missing)).is_err());
    }
}

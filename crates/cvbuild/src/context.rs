//! Global context for CLI commands

use anyhow::{Context as _, Result};
use cvbuild_core::project::Project;
use std::env;
use std::path::Path;

/// Project loaded from the current directory
pub struct Context {
    pub project: Project,
    pub verbose: bool,
}

impl Context {
    /// Open the project rooted at the current directory
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory is unavailable or the config
    /// file cannot be read or parsed
    pub fn new(config: Option<&Path>, verbose: bool) -> Result<Self> {
        let root = env::current_dir().context("Failed to determine current directory")?;
        let project = Project::open(&root, config)?;

        log::debug!(
            "Project root {} (pdflatex: {}, biber: {})",
            project.root.display(),
            project.config.toolchain.pdflatex,
            project.config.toolchain.biber
        );

        Ok(Self { project, verbose })
    }
}

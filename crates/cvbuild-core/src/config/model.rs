use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::consts;
use crate::error::{CvbuildError, Result};

/// cvbuild.toml schema
///
/// Every section is optional; an empty file (or no file at all) yields the
/// fixed layout `data/`, `templates/`, `build/`, `logs/`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub templates: TemplatesConfig,
    #[serde(default)]
    pub assets: AssetsConfig,
    #[serde(default)]
    pub toolchain: ToolchainConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PathsConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default = "default_templates_dir")]
    pub templates_dir: PathBuf,
    #[serde(default = "default_build_dir")]
    pub build_dir: PathBuf,
    #[serde(default = "default_logs_dir")]
    pub logs_dir: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            templates_dir: default_templates_dir(),
            build_dir: default_build_dir(),
            logs_dir: default_logs_dir(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_templates_dir() -> PathBuf {
    PathBuf::from("templates")
}

fn default_build_dir() -> PathBuf {
    PathBuf::from("build")
}

fn default_logs_dir() -> PathBuf {
    PathBuf::from("logs")
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TemplatesConfig {
    #[serde(default = "default_main_template")]
    pub main: String,
    #[serde(default = "default_sidebar_template")]
    pub sidebar: String,
    /// File name the rendered sidebar is written to (the main template inputs it)
    #[serde(default = "default_sidebar_output")]
    pub sidebar_output: String,
    /// Fail on undefined variables instead of rendering them empty
    #[serde(default)]
    pub strict_undefined: bool,
}

impl Default for TemplatesConfig {
    fn default() -> Self {
        Self {
            main: default_main_template(),
            sidebar: default_sidebar_template(),
            sidebar_output: default_sidebar_output(),
            strict_undefined: false,
        }
    }
}

fn default_main_template() -> String {
    "main.tex.j2".to_string()
}

fn default_sidebar_template() -> String {
    "sidebar.tex.j2".to_string()
}

fn default_sidebar_output() -> String {
    "sidebar.tex".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssetsConfig {
    #[serde(default = "default_asset_files")]
    pub files: Vec<PathBuf>,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            files: default_asset_files(),
        }
    }
}

fn default_asset_files() -> Vec<PathBuf> {
    vec![
        PathBuf::from("altacv.cls"),
        PathBuf::from("profile_picture.png"),
    ]
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToolchainConfig {
    #[serde(default = "default_pdflatex")]
    pub pdflatex: String,
    #[serde(default = "default_biber")]
    pub biber: String,
}

impl Default for ToolchainConfig {
    fn default() -> Self {
        Self {
            pdflatex: default_pdflatex(),
            biber: default_biber(),
        }
    }
}

fn default_pdflatex() -> String {
    "pdflatex".to_string()
}

fn default_biber() -> String {
    "biber".to_string()
}

impl ToolchainConfig {
    /// Replace program names with `CVBUILD_PDFLATEX` / `CVBUILD_BIBER` when set
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(pdflatex) = lookup(consts::env::PDFLATEX).filter(|v| !v.is_empty()) {
            log::debug!("pdflatex overridden by {}: {}", consts::env::PDFLATEX, pdflatex);
            self.pdflatex = pdflatex;
        }
        if let Some(biber) = lookup(consts::env::BIBER).filter(|v| !v.is_empty()) {
            log::debug!("biber overridden by {}: {}", consts::env::BIBER, biber);
            self.biber = biber;
        }
    }
}

impl Config {
    /// Read and parse a cvbuild.toml
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| CvbuildError::ConfigParseError(format!("{}: {}", path.display(), e)))?;

        toml::from_str(&content).map_err(|e| CvbuildError::ProjectConfigInvalid {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Load `<root>/cvbuild.toml` if it exists, defaults otherwise
    pub fn load_or_default(root: &Path) -> Result<Self> {
        let path = root.join(consts::CONFIG_FILE);
        if path.is_file() {
            log::debug!("Loading config from {}", path.display());
            Self::from_file(&path)
        } else {
            log::debug!("No {} in {}, using defaults", consts::CONFIG_FILE, root.display());
            Ok(Self::default())
        }
    }
}

use crate::config::Config;
use crate::error::Result;
use crate::path::validate_lang_tag;
use std::path::{Path, PathBuf};

/// Every file a single-language build touches
///
/// Paths are absolute (joined onto the project root) except
/// `bibliography_target`, which is handed to biber running in the project
/// root and therefore stays as configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildPaths {
    pub lang: String,
    pub root: PathBuf,
    pub data_file: PathBuf,
    pub templates_dir: PathBuf,
    pub build_dir: PathBuf,
    pub logs_dir: PathBuf,
    /// `build/<lang>.tex`
    pub main_tex: PathBuf,
    /// `build/sidebar.tex`
    pub sidebar_tex: PathBuf,
    /// `build/<lang>.pdf`
    pub output_pdf: PathBuf,
    /// `build/<lang>` relative to the project root, without extension
    pub bibliography_target: PathBuf,
}

impl BuildPaths {
    pub(crate) fn new(root: &Path, config: &Config, lang: &str) -> Result<Self> {
        validate_lang_tag(lang)?;

        let build_dir = root.join(&config.paths.build_dir);
        let logs_dir = root.join(&config.paths.logs_dir);

        Ok(Self {
            lang: lang.to_string(),
            root: root.to_path_buf(),
            data_file: root
                .join(&config.paths.data_dir)
                .join(format!("{lang}.yaml")),
            templates_dir: root.join(&config.paths.templates_dir),
            main_tex: build_dir.join(format!("{lang}.tex")),
            sidebar_tex: build_dir.join(&config.templates.sidebar_output),
            output_pdf: build_dir.join(format!("{lang}.pdf")),
            bibliography_target: config.paths.build_dir.join(lang),
            build_dir,
            logs_dir,
        })
    }

    /// File name pdflatex is invoked on from inside the build directory
    pub fn job_file(&self) -> String {
        format!("{}.tex", self.lang)
    }

    /// `logs/<lang>_<step>.log`
    pub fn log_file(&self, step: &str) -> PathBuf {
        self.logs_dir.join(format!("{}_{}.log", self.lang, step))
    }
}

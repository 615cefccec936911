use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CvbuildError {
    // Project errors
    #[error("PROJECT_CONFIG_INVALID: failed to parse {path}: {reason}")]
    ProjectConfigInvalid { path: PathBuf, reason: String },

    #[error("PROJECT_INVALID_LANG: '{0}' is not a valid language tag")]
    ProjectInvalidLang(String),

    // Config errors
    #[error("CONFIG_PARSE_ERROR: {0}")]
    ConfigParseError(String),

    // Data errors
    #[error("DATA_NOT_FOUND: data file '{path}' not found")]
    DataNotFound { path: PathBuf },

    #[error("DATA_INVALID: {path}: {reason}")]
    DataInvalid { path: PathBuf, reason: String },

    // Template errors
    #[error("TEMPLATE_NOT_FOUND: template '{name}' not found in {dir}")]
    TemplateNotFound { name: String, dir: PathBuf },

    #[error("TEMPLATE_RENDER_FAILED: {0}")]
    TemplateRenderFailed(String),

    // Asset errors
    #[error("ASSET_MISSING: {}", .0.join(", "))]
    AssetMissing(Vec<String>),

    // IO errors
    #[error("IO_ERROR: {0}")]
    IoError(#[from] std::io::Error),

    // Generic errors
    #[error("{0}")]
    Generic(String),
}

impl From<serde_yaml::Error> for CvbuildError {
    fn from(err: serde_yaml::Error) -> Self {
        CvbuildError::Generic(format!("YAML error: {}", err))
    }
}

impl From<crate::template::error::TemplateError> for CvbuildError {
    fn from(err: crate::template::error::TemplateError) -> Self {
        match err {
            crate::template::error::TemplateError::NotFound { name, dir } => {
                CvbuildError::TemplateNotFound { name, dir }
            }
            other => CvbuildError::TemplateRenderFailed(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CvbuildError>;

//! Template error types

use std::fmt;
use std::path::PathBuf;

/// Template loading and rendering errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// Template file does not exist in the templates directory
    NotFound {
        /// Template name as requested
        name: String,
        /// Directory that was searched
        dir: PathBuf,
    },

    /// Template could not be parsed
    Syntax {
        name: String,
        line: Option<usize>,
        message: String,
    },

    /// Template parsed but failed while rendering (e.g. strict undefined)
    Render {
        name: String,
        line: Option<usize>,
        message: String,
    },

    /// The delimiter configuration was rejected by the engine
    InvalidSyntaxConfig(String),
}

fn write_location(f: &mut fmt::Formatter<'_>, name: &str, line: &Option<usize>) -> fmt::Result {
    match line {
        Some(line) => write!(f, "{}:{}", name, line),
        None => write!(f, "{}", name),
    }
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::NotFound { name, dir } => {
                write!(f, "Template '{}' not found in {}", name, dir.display())
            }
            TemplateError::Syntax {
                name,
                line,
                message,
            } => {
                write!(f, "Syntax error in ")?;
                write_location(f, name, line)?;
                write!(f, ": {}", message)
            }
            TemplateError::Render {
                name,
                line,
                message,
            } => {
                write!(f, "Failed to render ")?;
                write_location(f, name, line)?;
                write!(f, ": {}", message)
            }
            TemplateError::InvalidSyntaxConfig(message) => {
                write!(f, "Invalid template delimiters: {}", message)
            }
        }
    }
}

impl std::error::Error for TemplateError {}

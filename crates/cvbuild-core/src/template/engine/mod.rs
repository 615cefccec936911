//! Template engine implementation

use crate::config::consts::syntax;
use crate::data::ResumeData;
use crate::template::error::TemplateError;
use minijinja::syntax::SyntaxConfig;
use minijinja::{AutoEscape, Environment, ErrorKind, UndefinedBehavior, Value};
use std::path::{Path, PathBuf};

/// Delimiters that do not collide with LaTeX braces and comments
pub fn latex_syntax() -> Result<SyntaxConfig, TemplateError> {
    SyntaxConfig::builder()
        .block_delimiters(syntax::BLOCK_START, syntax::BLOCK_END)
        .variable_delimiters(syntax::VARIABLE_START, syntax::VARIABLE_END)
        .comment_delimiters(syntax::COMMENT_START, syntax::COMMENT_END)
        .build()
        .map_err(|e| TemplateError::InvalidSyntaxConfig(e.to_string()))
}

/// Template engine loading `.tex.j2` files from one directory
pub struct TemplateEngine {
    env: Environment<'static>,
    templates_dir: PathBuf,
}

impl TemplateEngine {
    /// Create an engine reading templates from `templates_dir`
    ///
    /// With `strict_undefined` a missing variable is an error; otherwise it
    /// renders as an empty string.
    pub fn new(templates_dir: impl AsRef<Path>, strict_undefined: bool) -> Result<Self, TemplateError> {
        let templates_dir = templates_dir.as_ref().to_path_buf();

        let mut env = Environment::new();
        env.set_syntax(latex_syntax()?);
        env.set_loader(minijinja::path_loader(&templates_dir));
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_undefined_behavior(if strict_undefined {
            UndefinedBehavior::Strict
        } else {
            UndefinedBehavior::Lenient
        });

        Ok(Self { env, templates_dir })
    }

    /// Render the template file `name` with the given data
    pub fn render(&self, name: &str, data: &ResumeData) -> Result<String, TemplateError> {
        let template = self
            .env
            .get_template(name)
            .map_err(|e| self.convert_error(name, e))?;

        log::debug!("Rendering {}", self.templates_dir.join(name).display());
        template
            .render(Value::from_serialize(data))
            .map_err(|e| self.convert_error(name, e))
    }

    /// Render template source that does not live on disk
    pub fn render_str(&self, source: &str, data: &ResumeData) -> Result<String, TemplateError> {
        self.env
            .render_str(source, Value::from_serialize(data))
            .map_err(|e| self.convert_error("<inline>", e))
    }

    fn convert_error(&self, name: &str, err: minijinja::Error) -> TemplateError {
        let message = match err.detail() {
            Some(detail) => format!("{}: {}", err.kind(), detail),
            None => err.kind().to_string(),
        };
        let name = err.name().unwrap_or(name).to_string();

        match err.kind() {
            ErrorKind::TemplateNotFound => TemplateError::NotFound {
                name,
                dir: self.templates_dir.clone(),
            },
            ErrorKind::SyntaxError => TemplateError::Syntax {
                name,
                line: err.line(),
                message,
            },
            _ => TemplateError::Render {
                name,
                line: err.line(),
                message,
            },
        }
    }
}

#[cfg(test)]
mod tests;

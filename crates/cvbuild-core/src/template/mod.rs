//! Template module - Jinja templates with LaTeX-safe delimiters
//!
//! LaTeX source is full of `{` and `%`, so the usual Jinja delimiters are
//! replaced:
//!
//! - Variables: `((( name )))`
//! - Blocks: `((* for job in experience *))` ... `((* endfor *))`
//! - Comments: `((# ignored #))`
//!
//! Output is never escaped; the data author is responsible for valid LaTeX.

pub mod engine;
pub mod error;

pub use engine::{latex_syntax, TemplateEngine};
pub use error::TemplateError;

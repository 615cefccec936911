// Core modules
pub mod assets;
pub mod cleanup;
pub mod config;
pub mod data;
pub mod error;
pub mod path;
pub mod project;
pub mod template;

// Re-export commonly used types
pub use error::{CvbuildError, Result};

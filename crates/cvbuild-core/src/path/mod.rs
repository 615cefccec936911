//! Path validation for values that end up inside file names
//!
//! A language tag becomes `data/<lang>.yaml`, `build/<lang>.tex` and
//! `logs/<lang>_*.log`, so it has to be a single relative path component.
//! Component-based analysis is used instead of `Path::is_absolute()`, which
//! treats rooted paths like `/tmp` differently on Windows.

use crate::error::{CvbuildError, Result};
use std::path::{Component, Path};

/// Check if path is absolute OR rooted (cross-platform)
pub fn has_absolute_or_rooted_component(path: &Path) -> bool {
    if path.is_absolute() {
        return true;
    }

    path.components()
        .any(|c| matches!(c, Component::RootDir | Component::Prefix(_)))
}

/// Validate a language tag
///
/// Accepts exactly one `Normal` path component: no separators, no `.`/`..`,
/// no root or drive prefix, not empty.
///
/// # Examples
///
/// ```rust
/// use cvbuild_core::path::validate_lang_tag;
///
/// assert!(validate_lang_tag("english").is_ok());
/// assert!(validate_lang_tag("pt-BR").is_ok());
/// assert!(validate_lang_tag("../etc").is_err());
/// assert!(validate_lang_tag("a/b").is_err());
/// ```
pub fn validate_lang_tag(lang: &str) -> Result<()> {
    let invalid = || CvbuildError::ProjectInvalidLang(lang.to_string());

    if lang.trim().is_empty() {
        return Err(invalid());
    }

    let path = Path::new(lang);
    if has_absolute_or_rooted_component(path) {
        return Err(invalid());
    }

    let mut normal_count = 0;
    for component in path.components() {
        match component {
            Component::Normal(_) => normal_count += 1,
            Component::Prefix(_)
            | Component::RootDir
            | Component::CurDir
            | Component::ParentDir => return Err(invalid()),
        }
    }

    // "a/." normalizes to a single component, so check separators too
    if normal_count != 1 || lang.contains(['/', '\\']) {
        return Err(invalid());
    }

    Ok(())
}

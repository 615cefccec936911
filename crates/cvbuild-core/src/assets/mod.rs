//! Static support files (document class, profile picture)
//!
//! Assets live in the project root and are copied next to the generated
//! `.tex` files so pdflatex, running inside the build directory, finds them.

use crate::error::{CvbuildError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Result of looking for the configured assets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetCheck {
    pub present: Vec<PathBuf>,
    pub missing: Vec<PathBuf>,
}

impl AssetCheck {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    /// Missing asset paths as display strings, e.g. `["profile_picture.png"]`
    pub fn missing_names(&self) -> Vec<String> {
        self.missing
            .iter()
            .map(|p| p.display().to_string())
            .collect()
    }
}

/// Check which of `files` (relative to `root`) exist as regular files
pub fn check_assets(root: &Path, files: &[PathBuf]) -> AssetCheck {
    let (present, missing): (Vec<PathBuf>, Vec<PathBuf>) = files
        .iter()
        .cloned()
        .partition(|file| root.join(file).is_file());

    AssetCheck { present, missing }
}

/// Copy every asset into `build_dir`, keeping only its file name
///
/// Returns the destination paths. Fails with `ASSET_MISSING` if any asset is
/// absent, without copying anything.
pub fn stage_assets(root: &Path, files: &[PathBuf], build_dir: &Path) -> Result<Vec<PathBuf>> {
    let check = check_assets(root, files);
    if !check.is_complete() {
        return Err(CvbuildError::AssetMissing(check.missing_names()));
    }

    fs::create_dir_all(build_dir)?;

    let mut staged = Vec::with_capacity(files.len());
    for file in files {
        let file_name = file.file_name().ok_or_else(|| {
            CvbuildError::Generic(format!("Asset path '{}' has no file name", file.display()))
        })?;
        let dest = build_dir.join(file_name);
        fs::copy(root.join(file), &dest)?;
        log::debug!("Copied {} -> {}", file.display(), dest.display());
        staged.push(dest);
    }

    Ok(staged)
}

//! Build directory cleanup
//!
//! After a build only the PDFs stay. Everything else pdflatex and biber left
//! behind (`.aux`, `.bcf`, `.run.xml`, the rendered `.tex`, copied assets) is
//! removed. A file that cannot be removed is reported, never fatal.

use crate::config::consts::OUTPUT_EXTENSION;
use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Outcome of a cleanup pass
#[derive(Debug, Default)]
pub struct CleanupReport {
    pub removed: Vec<PathBuf>,
    pub kept: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, std::io::Error)>,
}

impl CleanupReport {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Whether `path` has a `.pdf` extension (any case)
pub fn is_output_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(OUTPUT_EXTENSION))
}

/// Remove every non-PDF entry directly inside `build_dir`
///
/// Only the directory listing itself can fail; per-entry removal errors are
/// collected in the report. Subdirectories are not descended into and fail
/// removal like any other non-file entry.
pub fn cleanup_intermediate_files(build_dir: &Path) -> Result<CleanupReport> {
    let mut report = CleanupReport::default();

    let mut entries: Vec<PathBuf> = fs::read_dir(build_dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .collect();
    entries.sort();

    for path in entries {
        if is_output_file(&path) {
            report.kept.push(path);
            continue;
        }

        match fs::remove_file(&path) {
            Ok(()) => {
                log::debug!("Removed {}", path.display());
                report.removed.push(path);
            }
            Err(e) => {
                log::debug!("Could not delete {}: {}", path.display(), e);
                report.failed.push((path, e));
            }
        }
    }

    Ok(report)
}

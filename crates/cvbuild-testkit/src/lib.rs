//! Test utilities for cvbuild
//!
//! This crate provides shared testing utilities used across the cvbuild workspace.

use tempfile::TempDir;

pub mod fixtures;
#[cfg(unix)]
pub mod toolchain;

pub use fixtures::ProjectFixture;
#[cfg(unix)]
pub use toolchain::{FakeTool, FakeToolchain};

/// Creates a temporary directory within `.tmp/` at the current directory
///
/// All test temporary files end up in a single gitignored location that is
/// easy to clean up manually. The directory is removed when the `TempDir`
/// drops.
///
/// # Panics
///
/// Panics if the current directory cannot be determined or `.tmp/` cannot
/// be created.
///
/// # Examples
///
/// ```rust
/// use cvbuild_testkit::temp_dir_in_workspace;
///
/// let temp = temp_dir_in_workspace();
/// let file_path = temp.path().join("test.txt");
/// std::fs::write(&file_path, "test data").unwrap();
/// ```
pub fn temp_dir_in_workspace() -> TempDir {
    try_temp_dir_in_workspace().expect("Failed to create temporary directory in .tmp/")
}

/// Alternative with Result for non-test code
pub fn try_temp_dir_in_workspace() -> std::io::Result<TempDir> {
    let workspace_root = std::env::current_dir()?;
    let tmp_base = workspace_root.join(".tmp");
    std::fs::create_dir_all(&tmp_base)?;
    TempDir::new_in(&tmp_base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_dir_lives_under_dot_tmp() {
        let temp = temp_dir_in_workspace();
        let parent = temp.path().parent().unwrap();
        assert_eq!(parent.file_name().unwrap(), ".tmp");
        assert!(temp.path().is_dir());
    }

    #[test]
    fn test_temp_dir_is_removed_on_drop() {
        let path = {
            let temp = temp_dir_in_workspace();
            temp.path().to_path_buf()
        };
        assert!(!path.exists());
    }
}

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Where a tool binary was found
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolSource {
    /// Configured as a path (config file or `CVBUILD_*` override)
    Explicit,
    /// Found by searching `PATH`
    SystemPath,
}

impl fmt::Display for ToolSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolSource::Explicit => write!(f, "configured path"),
            ToolSource::SystemPath => write!(f, "system PATH"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ToolInfo {
    pub program: String,
    pub path: PathBuf,
    pub source: ToolSource,
    /// First line of `<tool> --version`, when it could be read
    pub version: Option<String>,
}

/// Result of looking up one tool
#[derive(Debug, Clone)]
pub enum ToolResolution {
    Found(ToolInfo),
    NotFound { program: String, reason: String },
}

impl ToolResolution {
    pub fn is_found(&self) -> bool {
        matches!(self, ToolResolution::Found(_))
    }
}

fn is_explicit_path(program: &str) -> bool {
    Path::new(program).components().count() > 1 || program.contains(std::path::MAIN_SEPARATOR)
}

/// Locate `program` the way process spawning will
///
/// Bare names are searched on `PATH`; anything containing a separator is
/// checked as a path.
pub fn resolve_tool(program: &str) -> ToolResolution {
    let source = if is_explicit_path(program) {
        ToolSource::Explicit
    } else {
        ToolSource::SystemPath
    };

    match which::which(program) {
        Ok(path) => {
            let version = probe_version(&path);
            log::debug!("Resolved {} -> {} ({:?})", program, path.display(), version);
            ToolResolution::Found(ToolInfo {
                program: program.to_string(),
                path,
                source,
                version,
            })
        }
        Err(e) => ToolResolution::NotFound {
            program: program.to_string(),
            reason: e.to_string(),
        },
    }
}

/// Run `<tool> --version` and return its first non-empty line
fn probe_version(path: &Path) -> Option<String> {
    let output = Command::new(path)
        .arg("--version")
        .stdin(Stdio::null())
        .output()
        .ok()?;

    if !output.status.success() {
        return None;
    }

    parse_version_line(&String::from_utf8_lossy(&output.stdout))
}

/// First non-empty line, trimmed
///
/// - "pdfTeX 3.141592653-2.6-1.40.25 (TeX Live 2023)\nkpathsea version 6.3.5" → "pdfTeX 3.141592653-2.6-1.40.25 (TeX Live 2023)"
/// - "biber version: 2.19\n" → "biber version: 2.19"
fn parse_version_line(output: &str) -> Option<String> {
    output
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_version_line() {
        assert_eq!(
            parse_version_line("pdfTeX 3.141592653-2.6-1.40.25 (TeX Live 2023)\nkpathsea version 6.3.5\n"),
            Some("pdfTeX 3.141592653-2.6-1.40.25 (TeX Live 2023)".to_string())
        );
        assert_eq!(
            parse_version_line("\n  biber version: 2.19\n"),
            Some("biber version: 2.19".to_string())
        );
        assert_eq!(parse_version_line("\n\n"), None);
    }

    #[test]
    fn test_explicit_path_detection() {
        assert!(is_explicit_path("/usr/bin/pdflatex"));
        assert!(is_explicit_path("./bin/biber"));
        assert!(!is_explicit_path("pdflatex"));
    }

    #[test]
    fn test_missing_tool_is_not_found() {
        let resolution = resolve_tool("cvbuild-definitely-not-installed");
        assert!(!resolution.is_found());
        match resolution {
            ToolResolution::NotFound { program, .. } => {
                assert_eq!(program, "cvbuild-definitely-not-installed")
            }
            ToolResolution::Found(_) => unreachable!(),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_fake_tool_resolves_with_version() {
        use cvbuild_testkit::{FakeToolchain, temp_dir_in_workspace};

        let temp = temp_dir_in_workspace();
        let toolchain = FakeToolchain::succeeding(temp.path().join("bin"));

        match resolve_tool(&toolchain.biber().display().to_string()) {
            ToolResolution::Found(info) => {
                assert_eq!(info.source, ToolSource::Explicit);
                assert_eq!(info.path, toolchain.biber());
                assert_eq!(info.version.as_deref(), Some("biber version: 2.19 (fake)"));
            }
            other => panic!("Expected Found, got {:?}", other),
        }
        // --version is not recorded as a build invocation
        assert!(toolchain.invocations().is_empty());
    }
}

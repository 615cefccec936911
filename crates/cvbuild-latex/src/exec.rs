use crate::Result;
use crate::error::LatexError;
use std::fs::{self, File};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::Instant;

/// One external tool run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInvocation {
    pub program: String,
    pub args: Vec<String>,
    /// Working directory of the child process
    pub cwd: PathBuf,
    /// Receives both stdout and stderr; truncated before the run
    pub log: PathBuf,
}

impl ToolInvocation {
    /// Command line as shown to the user, e.g. `pdflatex -interaction=nonstopmode english.tex`
    pub fn display_command(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Result of a logged tool execution
#[derive(Debug, Clone)]
pub struct ExecResult {
    /// `None` when terminated by a signal
    pub exit_code: Option<i32>,
    pub duration_ms: u64,
    pub log: PathBuf,
}

impl ExecResult {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Run a tool to completion with its output redirected into `invocation.log`
///
/// A nonzero exit is not an error here; callers decide. Only failing to
/// open the log or to start the process is.
pub fn run_logged(invocation: &ToolInvocation) -> Result<ExecResult> {
    if let Some(parent) = invocation.log.parent() {
        fs::create_dir_all(parent)?;
    }

    let log_file = File::create(&invocation.log).map_err(|source| LatexError::LogOpen {
        path: invocation.log.clone(),
        source,
    })?;
    let stderr_file = log_file.try_clone()?;

    log::debug!(
        "Running `{}` in {} (log: {})",
        invocation.display_command(),
        invocation.cwd.display(),
        invocation.log.display()
    );

    let start = Instant::now();
    let status = Command::new(&invocation.program)
        .args(&invocation.args)
        .current_dir(&invocation.cwd)
        .stdin(Stdio::null())
        .stdout(Stdio::from(log_file))
        .stderr(Stdio::from(stderr_file))
        .status()
        .map_err(|source| LatexError::Spawn {
            program: invocation.program.clone(),
            source,
        })?;
    let duration_ms = start.elapsed().as_millis() as u64;

    log::debug!(
        "`{}` finished with {:?} in {}ms",
        invocation.program,
        status.code(),
        duration_ms
    );

    Ok(ExecResult {
        exit_code: status.code(),
        duration_ms,
        log: invocation.log.clone(),
    })
}

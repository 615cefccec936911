use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LatexError {
    #[error("TOOL_SPAWN_FAILED: could not start '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("TOOL_FAILED: {command} exited with {} (see {})", describe_exit(.exit_code), .log.display())]
    ToolFailed {
        command: String,
        /// `None` when the process was terminated by a signal
        exit_code: Option<i32>,
        log: PathBuf,
    },

    #[error("LOG_OPEN_FAILED: {path}: {source}")]
    LogOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO_ERROR: {0}")]
    Io(#[from] std::io::Error),
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "a signal".to_string(),
    }
}

impl LatexError {
    /// Exit status the whole run should terminate with
    ///
    /// A failing tool propagates its own status; a signal-terminated tool and
    /// every other error map to 1.
    pub fn exit_status(&self) -> i32 {
        match self {
            LatexError::ToolFailed {
                exit_code: Some(code),
                ..
            } if *code != 0 => *code,
            _ => 1,
        }
    }
}

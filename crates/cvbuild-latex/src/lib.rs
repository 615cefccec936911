//! LaTeX toolchain resolution and execution for cvbuild.
//!
//! # Architecture
//!
//! - [`resolve`]: locate `pdflatex` / `biber` and probe their versions
//! - [`exec`]: run one tool with stdout and stderr captured in a log file
//! - [`pipeline`]: the fixed four-step compile sequence
//!
//! # Compile Flow
//!
//! ```text
//! compile(plan)
//!     ↓
//! 1. pdflatex -interaction=nonstopmode <lang>.tex   (cwd build/)   → logs/<lang>_pdflatex1.log
//! 2. biber build/<lang>                             (cwd root)     → logs/<lang>_biber.log
//! 3. pdflatex -interaction=nonstopmode <lang>.tex   (cwd build/)   → logs/<lang>_pdflatex2.log
//! 4. pdflatex -interaction=nonstopmode <lang>.tex   (cwd build/)   → logs/<lang>_pdflatex3.log
//!     ↓
//! first nonzero exit → LatexError::ToolFailed, later steps never run
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use cvbuild_core::project::Project;
//! use cvbuild_latex::{compile, CompilePlan};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let project = Project::open(".", None)?;
//! let paths = project.paths_for("english")?;
//! let plan = CompilePlan::for_paths(&paths, &project.config.toolchain);
//! compile(&plan)?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod exec;
pub mod pipeline;
pub mod resolve;

// Re-export commonly used types
pub use error::LatexError;
pub use exec::{ExecResult, ToolInvocation, run_logged};
pub use pipeline::{CompilePlan, CompileReport, CompileStep, compile, compile_with};
pub use resolve::{ToolInfo, ToolResolution, ToolSource, resolve_tool};

pub type Result<T> = std::result::Result<T, LatexError>;

//! The fixed pdflatex → biber → pdflatex → pdflatex sequence

use crate::Result;
use crate::error::LatexError;
use crate::exec::{ExecResult, ToolInvocation, run_logged};
use cvbuild_core::config::ToolchainConfig;
use cvbuild_core::project::BuildPaths;

const NONSTOP: &str = "-interaction=nonstopmode";

/// One step of the compile sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileStep {
    /// Log suffix and display label, e.g. `pdflatex1`, `biber`
    pub label: String,
    pub invocation: ToolInvocation,
}

/// Ordered compile steps for one language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilePlan {
    pub steps: Vec<CompileStep>,
}

impl CompilePlan {
    /// Build the four-step plan for a language
    ///
    /// pdflatex runs inside the build directory on `<lang>.tex`; biber runs
    /// in the project root on `build/<lang>`.
    pub fn for_paths(paths: &BuildPaths, toolchain: &ToolchainConfig) -> Self {
        let pdflatex = |label: &str| CompileStep {
            label: label.to_string(),
            invocation: ToolInvocation {
                program: toolchain.pdflatex.clone(),
                args: vec![NONSTOP.to_string(), paths.job_file()],
                cwd: paths.build_dir.clone(),
                log: paths.log_file(label),
            },
        };

        let biber = CompileStep {
            label: "biber".to_string(),
            invocation: ToolInvocation {
                program: toolchain.biber.clone(),
                args: vec![paths.bibliography_target.display().to_string()],
                cwd: paths.root.clone(),
                log: paths.log_file("biber"),
            },
        };

        Self {
            steps: vec![
                pdflatex("pdflatex1"),
                biber,
                pdflatex("pdflatex2"),
                pdflatex("pdflatex3"),
            ],
        }
    }
}

/// Results of a fully successful compile
#[derive(Debug, Clone, Default)]
pub struct CompileReport {
    pub steps: Vec<(String, ExecResult)>,
}

impl CompileReport {
    pub fn total_duration_ms(&self) -> u64 {
        self.steps.iter().map(|(_, r)| r.duration_ms).sum()
    }
}

/// Run every step in order, stopping at the first nonzero exit
pub fn compile(plan: &CompilePlan) -> Result<CompileReport> {
    compile_with(plan, |_| {})
}

/// Like [`compile`], calling `on_step` before each step starts
pub fn compile_with<F>(plan: &CompilePlan, mut on_step: F) -> Result<CompileReport>
where
    F: FnMut(&CompileStep),
{
    let mut report = CompileReport::default();

    for step in &plan.steps {
        on_step(step);
        let result = run_logged(&step.invocation)?;

        if !result.success() {
            return Err(LatexError::ToolFailed {
                command: step.invocation.display_command(),
                exit_code: result.exit_code,
                log: result.log,
            });
        }

        report.steps.push((step.label.clone(), result));
    }

    Ok(report)
}

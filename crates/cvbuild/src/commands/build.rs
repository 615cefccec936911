//! Build command - render resume data and compile it to PDF with pdflatex/biber

use crate::context::Context;
use anyhow::Result;
use colored::Colorize;
use cvbuild_core::CvbuildError;
use cvbuild_core::assets::{check_assets, stage_assets};
use cvbuild_core::cleanup::cleanup_intermediate_files;
use cvbuild_core::data::load_resume_data;
use cvbuild_core::template::TemplateEngine;
use cvbuild_latex::{CompilePlan, LatexError, compile_with};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// How a single language build ended without an error
///
/// None of these change the exit status; only errors do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildOutcome {
    /// The PDF was produced
    Built(PathBuf),
    /// Style file or image absent; nothing was rendered or run
    MissingAssets(Vec<String>),
    /// Every tool succeeded but the PDF is not there
    PdfMissing(PathBuf),
}

/// Build every language in order, stopping at the first error
///
/// # Arguments
///
/// * `langs` - Language tags, each selecting `data/<lang>.yaml`
/// * `config` - Explicit config file, if given on the command line
/// * `verbose` - Print each step if true
pub fn run(langs: Vec<String>, config: Option<PathBuf>, verbose: bool) -> Result<Vec<BuildOutcome>> {
    let ctx = Context::new(config.as_deref(), verbose)?;

    let mut outcomes = Vec::with_capacity(langs.len());
    for lang in &langs {
        outcomes.push(build_lang(&ctx, lang)?);
    }

    Ok(outcomes)
}

/// Run the whole pipeline for one language tag
pub fn build_lang(ctx: &Context, lang: &str) -> Result<BuildOutcome> {
    let project = &ctx.project;
    let config = &project.config;
    let verbose = ctx.verbose;
    let paths = project.paths_for(lang)?;

    // Step 1: Check assets before touching anything else
    if verbose {
        println!("{} Checking assets", "→".cyan());
    }

    let assets = check_assets(&project.root, &config.assets.files);
    if !assets.is_complete() {
        let missing = assets.missing_names();
        eprintln!(
            "{} Warning: {} not found in project root!",
            "⚠".yellow().bold(),
            missing.join(" or ")
        );
        return Ok(BuildOutcome::MissingAssets(missing));
    }

    // Step 2: Load data
    if verbose {
        println!("{} Loading {}", "→".cyan(), display_relative(&project.root, &paths.data_file));
    }

    let data = load_resume_data(&paths.data_file, lang)?;

    // Step 3: Render both templates
    if verbose {
        println!(
            "{} Rendering {} and {}",
            "→".cyan(),
            config.templates.main,
            config.templates.sidebar
        );
    }

    let engine = TemplateEngine::new(&paths.templates_dir, config.templates.strict_undefined)
        .map_err(CvbuildError::from)?;
    let main_tex = engine
        .render(&config.templates.main, &data)
        .map_err(CvbuildError::from)?;
    let sidebar_tex = engine
        .render(&config.templates.sidebar, &data)
        .map_err(CvbuildError::from)?;

    // Step 4: Prepare build/ and logs/
    fs::create_dir_all(&paths.build_dir)?;
    fs::create_dir_all(&paths.logs_dir)?;
    stage_assets(&project.root, &config.assets.files, &paths.build_dir)?;

    // Step 5: Write rendered sources
    fs::write(&paths.sidebar_tex, sidebar_tex)?;
    fs::write(&paths.main_tex, main_tex)?;

    if verbose {
        println!(
            "{} Wrote {} and {}",
            "✓".green().bold(),
            display_relative(&project.root, &paths.main_tex),
            display_relative(&project.root, &paths.sidebar_tex)
        );
    }

    // Step 6: pdflatex, biber, pdflatex, pdflatex
    println!("{} Compiling {} → PDF...", "→".cyan(), paths.job_file());

    // A PDF from an earlier run must not pass for this run's output
    remove_output_pdf(&paths.output_pdf)?;

    let plan = CompilePlan::for_paths(&paths, &config.toolchain);
    let compiled = compile_with(&plan, |step| {
        if verbose {
            println!(
                "  {} {} (log: {})",
                "→".cyan(),
                step.invocation.display_command(),
                display_relative(&project.root, &step.invocation.log)
            );
        }
    });

    let report = match compiled {
        Ok(report) => report,
        Err(e) => {
            // Earlier pdflatex passes may have written a partial PDF
            if let Err(rm) = remove_output_pdf(&paths.output_pdf) {
                log::debug!("Could not remove {}: {}", paths.output_pdf.display(), rm);
            }
            if let LatexError::ToolFailed { command, log, .. } = &e {
                eprintln!(
                    "{} Command failed: {} (see {})",
                    "✗".red().bold(),
                    command,
                    display_relative(&project.root, log)
                );
            }
            return Err(e.into());
        }
    };

    if verbose {
        println!(
            "{} Toolchain finished in {}ms",
            "✓".green().bold(),
            report.total_duration_ms()
        );
    }

    // Step 7: Verify output
    let outcome = if paths.output_pdf.is_file() {
        println!(
            "{} Successfully generated {}",
            "✓".green().bold(),
            display_relative(&project.root, &paths.output_pdf)
        );
        BuildOutcome::Built(paths.output_pdf.clone())
    } else {
        eprintln!(
            "{} Failed to generate {}. Check {}/ for details.",
            "✗".red().bold(),
            display_relative(&project.root, &paths.output_pdf),
            display_relative(&project.root, &paths.logs_dir)
        );
        BuildOutcome::PdfMissing(paths.output_pdf.clone())
    };

    // Step 8: Cleanup runs whether or not the PDF appeared
    println!("{} Cleaning up intermediate files...", "→".cyan());
    let cleanup = cleanup_intermediate_files(&paths.build_dir)?;
    for (path, err) in &cleanup.failed {
        eprintln!(
            "{} Warning: could not delete {}: {}",
            "⚠".yellow().bold(),
            display_relative(&project.root, path),
            err
        );
    }
    log::debug!(
        "Cleanup removed {} files, kept {}",
        cleanup.removed.len(),
        cleanup.kept.len()
    );

    println!("{} Done.", "✓".green().bold());
    Ok(outcome)
}

/// Delete `path` if it exists
fn remove_output_pdf(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
        _ => Ok(()),
    }
}

/// Path relative to the project root when it lies inside it
fn display_relative(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

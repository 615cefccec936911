//! Doctor command - environment health check

use crate::context::Context;
use anyhow::Result;
use chrono::Utc;
use colored::Colorize;
use cvbuild_core::assets::check_assets;
use cvbuild_core::config::consts::CONFIG_FILE;
use cvbuild_core::data::load_resume_data;
use cvbuild_latex::{ToolResolution, resolve_tool};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};

/// Doctor command JSON output schema
#[derive(Debug, Serialize, Deserialize)]
struct DoctorOutput {
    schema_version: String,
    project: ProjectInfo,
    timestamp: String,
    checks: Vec<Check>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ProjectInfo {
    root: String,
    config: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Check {
    id: String,
    name: String,
    status: CheckStatus,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<BTreeMap<String, serde_json::Value>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum CheckStatus {
    Ok,
    Warning,
    Error,
}

impl Check {
    fn new(id: &str, name: &str, status: CheckStatus, message: impl Into<String>) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            status,
            message: message.into(),
            details: None,
        }
    }

    fn with_detail(mut self, key: &str, value: impl Into<serde_json::Value>) -> Self {
        self.details
            .get_or_insert_with(BTreeMap::new)
            .insert(key.to_string(), value.into());
        self
    }
}

/// Run environment health check
///
/// # Arguments
///
/// * `json` - Output in JSON format if true
/// * `lang` - Also validate `data/<lang>.yaml` if given
/// * `config` - Explicit config file, if given on the command line
/// * `verbose` - Enable verbose output if true
///
/// # Returns
///
/// Always returns Ok(()) - doctor command always exits 0
pub fn run(json: bool, lang: Option<String>, config: Option<PathBuf>, verbose: bool) -> Result<()> {
    // Try to load context, but continue even if it fails
    let ctx_result = Context::new(config.as_deref(), verbose);

    let mut checks = Vec::new();

    let project_info = match &ctx_result {
        Ok(ctx) => {
            let config_file = config
                .clone()
                .or_else(|| Some(ctx.project.root.join(CONFIG_FILE)))
                .filter(|p| p.is_file());
            checks.push(Check::new(
                "config_valid",
                "Configuration file",
                CheckStatus::Ok,
                match &config_file {
                    Some(path) => format!("{} is valid", path.display()),
                    None => "No config file, using defaults".to_string(),
                },
            ));
            ProjectInfo {
                root: ctx.project.root.display().to_string(),
                config: config_file.map(|p| p.display().to_string()),
            }
        }
        Err(e) => {
            checks.push(Check::new(
                "config_valid",
                "Configuration file",
                CheckStatus::Error,
                format!("Failed to load config: {}", e),
            ));
            let current_dir = env::current_dir().unwrap_or_else(|_| ".".into());
            ProjectInfo {
                root: current_dir.display().to_string(),
                config: config.map(|p| p.display().to_string()),
            }
        }
    };

    // Remaining checks need a loaded project
    if let Ok(ctx) = &ctx_result {
        checks.extend(project_checks(ctx, lang.as_deref()));
    }

    let output = DoctorOutput {
        schema_version: "1.0".to_string(),
        project: project_info,
        timestamp: Utc::now().to_rfc3339(),
        checks,
    };

    if json {
        let json_str = serde_json::to_string_pretty(&output)?;
        println!("{}", json_str);
    } else {
        print_human_readable(&output);
    }

    Ok(())
}

fn project_checks(ctx: &Context, lang: Option<&str>) -> Vec<Check> {
    let project = &ctx.project;
    let config = &project.config;
    let mut checks = Vec::new();

    checks.push(directory_check("data_dir", "Data directory", &project.data_dir()));
    checks.push(directory_check(
        "templates_dir",
        "Templates directory",
        &project.templates_dir(),
    ));

    let templates_dir = project.templates_dir();
    let missing_templates: Vec<&str> = [&config.templates.main, &config.templates.sidebar]
        .into_iter()
        .filter(|name| !templates_dir.join(name.as_str()).is_file())
        .map(String::as_str)
        .collect();
    checks.push(if missing_templates.is_empty() {
        Check::new("templates", "Templates", CheckStatus::Ok, "Both templates present")
    } else {
        Check::new(
            "templates",
            "Templates",
            CheckStatus::Error,
            format!("Missing: {}", missing_templates.join(", ")),
        )
    });

    let assets = check_assets(&project.root, &config.assets.files);
    checks.push(if assets.is_complete() {
        Check::new("assets", "Assets", CheckStatus::Ok, "All assets present")
    } else {
        Check::new(
            "assets",
            "Assets",
            CheckStatus::Warning,
            format!(
                "{} not found in project root (builds will be skipped)",
                assets.missing_names().join(", ")
            ),
        )
    });

    checks.push(tool_check("pdflatex_available", "pdflatex", &config.toolchain.pdflatex));
    checks.push(tool_check("biber_available", "biber", &config.toolchain.biber));

    if let Some(lang) = lang {
        checks.push(data_check(ctx, lang));
    }

    checks
}

fn directory_check(id: &str, name: &str, dir: &Path) -> Check {
    if dir.is_dir() {
        Check::new(id, name, CheckStatus::Ok, format!("{} exists", dir.display()))
    } else {
        Check::new(
            id,
            name,
            CheckStatus::Error,
            format!("{} not found", dir.display()),
        )
    }
}

fn tool_check(id: &str, name: &str, program: &str) -> Check {
    match resolve_tool(program) {
        ToolResolution::Found(info) => {
            let message = match &info.version {
                Some(version) => format!("{} available", version),
                None => format!("{} available", name),
            };
            Check::new(id, name, CheckStatus::Ok, message)
                .with_detail("path", info.path.display().to_string())
                .with_detail("source", info.source.to_string())
        }
        ToolResolution::NotFound { program, reason } => Check::new(
            id,
            name,
            CheckStatus::Error,
            format!("'{}' not found: {}", program, reason),
        ),
    }
}

fn data_check(ctx: &Context, lang: &str) -> Check {
    let id = "data_file";
    let name = "Resume data";

    let paths = match ctx.project.paths_for(lang) {
        Ok(paths) => paths,
        Err(e) => return Check::new(id, name, CheckStatus::Error, e.to_string()),
    };

    match load_resume_data(&paths.data_file, lang) {
        Ok(data) => Check::new(
            id,
            name,
            CheckStatus::Ok,
            format!("{} loaded", paths.data_file.display()),
        )
        .with_detail("keys", data.len()),
        Err(e) => Check::new(id, name, CheckStatus::Error, e.to_string()),
    }
}

/// Print human-readable output
fn print_human_readable(output: &DoctorOutput) {
    println!("{}", "Environment Health Check".bold());
    println!();

    println!("{}", "Project:".bold());
    println!("  Root: {}", output.project.root);
    if let Some(config) = &output.project.config {
        println!("  Config: {}", config);
    }
    println!();

    println!("{}", "Checks:".bold());
    for check in &output.checks {
        let status_str = match check.status {
            CheckStatus::Ok => "✓".green(),
            CheckStatus::Warning => "⚠".yellow(),
            CheckStatus::Error => "✗".red(),
        };

        println!("  {} {}: {}", status_str, check.name.bold(), check.message);

        if let Some(details) = &check.details {
            for (key, value) in details {
                println!("      {}: {}", key, value);
            }
        }
    }

    println!();
    println!("Timestamp: {}", output.timestamp);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_status_serializes_lowercase() {
        let check = Check::new("assets", "Assets", CheckStatus::Warning, "missing")
            .with_detail("count", 2);
        let value = serde_json::to_value(&check).unwrap();

        assert_eq!(value["status"], "warning");
        assert_eq!(value["details"]["count"], 2);
    }

    #[test]
    fn test_details_omitted_when_empty() {
        let check = Check::new("assets", "Assets", CheckStatus::Ok, "ok");
        let value = serde_json::to_value(&check).unwrap();
        assert!(value.get("details").is_none());
    }

    #[test]
    fn test_missing_tool_is_error() {
        let check = tool_check("pdflatex_available", "pdflatex", "cvbuild-definitely-not-installed");
        assert_eq!(check.status, CheckStatus::Error);
        assert!(check.message.contains("cvbuild-definitely-not-installed"));
    }
}

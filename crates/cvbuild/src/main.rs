mod cli;
mod commands;
mod context;

use clap::Parser;
use cli::{Cli, Commands};
use cvbuild_latex::LatexError;
use env_logger::Env;

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    let result = match cli.command {
        Some(Commands::Doctor { json, lang }) => {
            commands::doctor::run(json, lang, cli.config, cli.verbose)
        }
        None if cli.langs.is_empty() => {
            println!("Usage: cvbuild [english|french]");
            std::process::exit(1);
        }
        None => commands::build::run(cli.langs, cli.config, cli.verbose)
            .map(|outcomes| log::debug!("Build outcomes: {:?}", outcomes)),
    };

    if let Err(e) = result {
        std::process::exit(exit_status(&e));
    }
}

/// Report `err` and pick the process exit status
///
/// A failed tool has already been reported by the build command; its status
/// is passed through unchanged.
fn exit_status(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<LatexError>() {
        Some(latex @ LatexError::ToolFailed { .. }) => latex.exit_status(),
        Some(latex) => {
            eprintln!("Error: {}", err);
            latex.exit_status()
        }
        None => {
            eprintln!("Error: {:#}", err);
            1
        }
    }
}

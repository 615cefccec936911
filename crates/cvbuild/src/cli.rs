//! CLI command structure using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cvbuild")]
#[command(version, about = "Render YAML resume data into LaTeX and compile it to PDF", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Language tags to build, e.g. `english french`
    #[arg(value_name = "LANG")]
    pub langs: Vec<String>,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Explicit config file (default: ./cvbuild.toml if present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check environment health
    Doctor {
        #[arg(long)]
        json: bool,

        /// Also check the data file of this language
        #[arg(long, value_name = "LANG")]
        lang: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_languages() {
        let cli = Cli::try_parse_from(["cvbuild", "english", "french"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.langs, vec!["english", "french"]);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parse_no_arguments() {
        let cli = Cli::try_parse_from(["cvbuild"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.langs.is_empty());
    }

    #[test]
    fn test_parse_doctor_with_global_flags() {
        let cli =
            Cli::try_parse_from(["cvbuild", "doctor", "--json", "--lang", "french", "-v"]).unwrap();
        match cli.command {
            Some(Commands::Doctor { json, lang }) => {
                assert!(json);
                assert_eq!(lang.as_deref(), Some("french"));
            }
            None => panic!("Expected doctor subcommand"),
        }
        assert!(cli.verbose);
    }

    #[test]
    fn test_parse_config_flag() {
        let cli = Cli::try_parse_from(["cvbuild", "--config", "alt.toml", "english"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("alt.toml")));
        assert_eq!(cli.langs, vec!["english"]);
    }
}

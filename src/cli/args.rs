//! Command-line interface definitions.
//!
//! Flags choose *which* config file to read and how to print it. None of
//! them overrides a setting.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Typed site configuration for the blog's rendering engine
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: blog.toml, searched upward from cwd)
    #[arg(short = 'C', long, global = true, default_value = "blog.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write a commented config file with default values
    #[command(visible_alias = "i")]
    Init {
        /// Site directory name/path (relative to current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        name: Option<PathBuf>,
    },

    /// Print the loaded configuration (after `extends` is resolved)
    Show {
        /// Print JSON instead of TOML
        #[arg(short, long)]
        json: bool,
    },

    /// Export the settings map consumed by the rendering engine
    #[command(visible_alias = "e")]
    Export {
        #[command(flatten)]
        args: ExportArgs,
    },

    /// Check that everything the config references exists on disk
    #[command(visible_alias = "c")]
    Check {
        /// Treat warnings as errors
        #[arg(short, long)]
        strict: bool,
    },
}

/// Export command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ExportArgs {
    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

#[allow(unused)]
impl Cli {
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Commands::Init { .. })
    }
    pub const fn is_check(&self) -> bool {
        matches!(self.command, Commands::Check { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_name() {
        let cli = Cli::try_parse_from(["blogconf", "show"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("blog.toml"));
        assert!(matches!(cli.command, Commands::Show { json: false }));
    }

    #[test]
    fn test_global_config_after_subcommand() {
        let cli = Cli::try_parse_from(["blogconf", "check", "-C", "publish.toml", "--strict"])
            .unwrap();
        assert_eq!(cli.config, PathBuf::from("publish.toml"));
        assert!(cli.is_check());
        assert!(matches!(cli.command, Commands::Check { strict: true }));
    }

    #[test]
    fn test_export_args() {
        let cli = Cli::try_parse_from(["blogconf", "e", "-p", "-o", "settings.json"]).unwrap();
        match cli.command {
            Commands::Export { args } => {
                assert!(args.pretty);
                assert_eq!(args.output, Some(PathBuf::from("settings.json")));
            }
            other => panic!("expected export, got {other:?}"),
        }
    }

    #[test]
    fn test_init_name() {
        let cli = Cli::try_parse_from(["blogconf", "init", "my-blog"]).unwrap();
        assert!(cli.is_init());
    }
}

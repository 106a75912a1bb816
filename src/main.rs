//! blogconf - typed site configuration for a static blog.

#![allow(dead_code)]

mod cli;
mod config;
mod engine;
mod logger;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    match &cli.command {
        Commands::Init { name } => cli::init::new_config(name.as_deref(), &cli.config),
        Commands::Show { json } => cli::show::show_config(&SiteConfig::load(&cli)?, *json),
        Commands::Export { args } => {
            cli::export::export_settings(&SiteConfig::load(&cli)?, args)
        }
        Commands::Check { strict } => {
            cli::check::check_config(&SiteConfig::load(&cli)?, *strict)
        }
    }
}

//! `show` command: print the configuration as loaded.

use anyhow::Result;

use crate::config::SiteConfig;
use crate::debug;

/// Print the resolved configuration to stdout.
pub fn show_config(config: &SiteConfig, json: bool) -> Result<()> {
    debug!("show"; "loaded from {}", config.config_path.display());
    println!("{}", render_config(config, json)?);
    Ok(())
}

/// Render the configuration as TOML (default) or pretty JSON.
pub fn render_config(config: &SiteConfig, json: bool) -> Result<String> {
    let rendered = if json {
        serde_json::to_string_pretty(config)?
    } else {
        toml::to_string_pretty(config)?
    };
    Ok(rendered)
}

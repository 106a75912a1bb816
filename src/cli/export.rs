//! `export` command: write the engine settings map as JSON.

use std::fs;

use anyhow::{Context, Result};

use crate::cli::ExportArgs;
use crate::config::SiteConfig;
use crate::engine::EngineSettings;
use crate::log;

/// Export engine settings to stdout or a file.
pub fn export_settings(config: &SiteConfig, args: &ExportArgs) -> Result<()> {
    let settings = EngineSettings::from_config(config)?;
    let json = settings.to_json(args.pretty)?;

    match &args.output {
        Some(path) => {
            fs::write(path, format!("{json}\n"))
                .with_context(|| format!("Failed to write settings to '{}'", path.display()))?;
            log!("export"; "wrote {} settings to {}", settings.len(), path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_export_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("settings.json");
        let config = test_parse_config("[site]\nname = \"Blog\"\nurl = \"https://example.com\"");

        let args = ExportArgs {
            pretty: true,
            output: Some(output.clone()),
        };
        export_settings(&config, &args).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(written["SITENAME"], "Blog");
        assert_eq!(written["SITEURL"], "https://example.com");
    }

    #[test]
    fn test_export_to_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let args = ExportArgs {
            pretty: false,
            output: Some(dir.path().join("missing/settings.json")),
        };
        assert!(export_settings(&SiteConfig::default(), &args).is_err());
    }
}

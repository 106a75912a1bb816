//! `check` command: report what the rendering engine would fail on.

use anyhow::{Result, bail};

use crate::config::{ConfigError, SiteConfig};
use crate::log;
use crate::utils::plural_count;

/// Check the config against the files on disk.
///
/// Errors fail the command. Warnings are printed and only fail with `--strict`.
pub fn check_config(config: &SiteConfig, strict: bool) -> Result<()> {
    let diag = config.validate();
    diag.print_warnings();

    let warnings = diag.warnings().len();
    diag.into_result().map_err(ConfigError::Diagnostics)?;

    if strict && warnings > 0 {
        bail!(
            "{} treated as errors (--strict)",
            plural_count(warnings, "warning")
        );
    }

    log!("check"; "{} is ready for the engine", config.config_path.display());
    Ok(())
}

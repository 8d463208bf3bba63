//! `sitenav check`: validate the navigation declaration.
//!
//! Validation already ran during config loading; an invalid declaration
//! never reaches this point. The command exists so CI and pre-commit hooks
//! have an explicit "refuse the build" step with a summary on success.

use anyhow::Result;

use crate::config::NavConfig;
use crate::log;

pub fn run_check(config: &NavConfig) -> Result<()> {
    log!(
        "check";
        "{} nav entries, {} sidebar scopes, {} social links",
        config.nav.len(),
        config.sidebar.len(),
        config.social.len()
    );
    log!("check"; "{} is valid", config.config_path.display());
    Ok(())
}

//! `sitenav resolve`: show the sidebar scope for a page path.
//!
//! Exercises the same longest-prefix lookup the generator uses, so scope
//! boundaries can be checked from the command line before deploying.

use anyhow::Result;

use crate::config::{NavConfig, SidebarScope};
use crate::log;

pub fn run_resolve(config: &NavConfig, path: &str) -> Result<()> {
    match config.sidebar.resolve_entry(path) {
        Some((prefix, scope)) => {
            let summary = match scope {
                SidebarScope::Groups(groups) => format!("{} group(s)", groups.len()),
                SidebarScope::Links(links) => format!("{} bare link(s)", links.len()),
            };
            log!("resolve"; "{path} -> {prefix} ({summary})");
        }
        None => {
            // Not an error: the generator renders such pages without a sidebar
            log!("resolve"; "{path} -> no sidebar (no scope prefix matches)");
        }
    }

    Ok(())
}

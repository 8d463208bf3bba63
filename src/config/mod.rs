//! Navigation configuration management for `sitenav.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Declaration section definitions
//! │   ├── site       # [site] metadata
//! │   ├── nav        # [[nav]] top navigation entries
//! │   ├── sidebar    # [sidebar] path-scoped groups
//! │   └── social     # [[social]] external links
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, Rule, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # NavConfig (this file)
//! ```
//!
//! The whole declaration is parsed once, validated once, and then handed to
//! the rendering generator by reference. There is no runtime update path: an
//! invalid declaration aborts the build instead of rendering a partial nav.

pub mod section;
pub mod types;
pub(crate) mod util;

use util::find_config_file;

// Re-export from section/
pub use section::{
    NavEntry, NavLink, NavNode, SidebarConfig, SidebarGroup, SidebarScope, SiteInfoConfig,
    SocialIcon, SocialLink,
};

// Re-export from types/
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath, Rule};

use crate::log;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing sitenav.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Site metadata (title, description, base, url)
    pub site: SiteInfoConfig,

    /// Top navigation bar, in render order
    pub nav: Vec<NavEntry>,

    /// Path-scoped sidebars, in declaration order
    pub sidebar: SidebarConfig,

    /// External social links, in render order
    pub social: Vec<SocialLink>,
}

impl NavConfig {
    /// Load and validate a declaration file.
    ///
    /// Relative `config_name` is searched upward from the current directory,
    /// so any subdirectory of the docs repository works as cwd.
    ///
    /// Fail fast: every validation error is collected and returned before
    /// the generator sees the configuration.
    pub fn load(config_name: &Path) -> Result<Self, ConfigError> {
        let path = find_config_file(config_name)
            .ok_or_else(|| ConfigError::NotFound(config_name.to_path_buf()))?;

        let mut config = Self::from_path(&path)?;
        config.config_path = path;

        config.validate().map_err(ConfigError::Diagnostics)?;

        Ok(config)
    }

    /// Validate an in-memory declaration and return it as an immutable value.
    ///
    /// This is the programmatic entry point: construct the raw structure,
    /// then `build` it into a configuration the generator may consume.
    pub fn build(self) -> Result<Self, ConfigDiagnostics> {
        self.validate()?;
        Ok(self)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
            if !Self::prompt_continue().map_err(|err| ConfigError::Io(path.to_path_buf(), err))? {
                return Err(ConfigError::Validation(
                    "aborted due to unknown config fields".into(),
                ));
            }
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        eprintln!();
        log!("warning"; "unknown fields in {}:", display_path);
        log!("warning"; "ignoring:");
        for field in fields {
            eprintln!("- {field}");
        }
        eprintln!();
    }

    /// Prompt user to continue. Returns true only if user explicitly confirms.
    fn prompt_continue() -> std::io::Result<bool> {
        use std::io::{self, Write};

        eprint!("Continue? [y/N] ");
        io::stderr().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        let input = input.trim().to_lowercase();
        // Default no (empty input), explicit "y" or "yes" to continue
        Ok(input == "y" || input == "yes")
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate the whole declaration.
    ///
    /// Collects all violations into one aggregated report; each diagnostic
    /// names the offending field path and the violated rule.
    pub fn validate(&self) -> Result<(), ConfigDiagnostics> {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(&mut diag);

        let nav_field = FieldPath::new("nav");
        for (i, entry) in self.nav.iter().enumerate() {
            entry.validate(&nav_field.index(i), &mut diag);
        }

        self.sidebar.validate(&mut diag);

        let social_field = FieldPath::new("social");
        for (i, link) in self.social.iter().enumerate() {
            link.validate(&social_field.index(i), &mut diag);
        }

        diag.into_result()
    }

    // ========================================================================
    // lookups
    // ========================================================================

    /// Sidebar scope for a page path, by longest matching prefix.
    ///
    /// `None` means the page renders without a sidebar; it is not an error.
    pub fn sidebar_for(&self, path: &str) -> Option<&SidebarScope> {
        self.sidebar.resolve(path)
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with minimal required `[site]` fields.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> NavConfig {
    let config = format!("[site]\ntitle = \"Test\"\ndescription = \"Test\"\n{extra}");
    let (parsed, ignored) = NavConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {ignored:?}"
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

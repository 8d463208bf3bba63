//! `[site]` section: site metadata.
//!
//! ```toml
//! [site]
//! title = "SympAuthy"
//! description = "Documentation site"
//! base = "/"
//! url = "https://sympauthy.github.io/docs"
//! ```

use serde::{Deserialize, Serialize};

use crate::config::util::extract_url_path;
use crate::config::{ConfigDiagnostics, FieldPath, Rule};

/// Site metadata handed to the generator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfoConfig {
    /// Site title.
    pub title: String,

    /// Site description.
    pub description: String,

    /// URL prefix under which the whole site is served.
    /// Must start and end with '/'. When omitted, derived from `url`.
    pub base: Option<String>,

    /// Absolute site URL (e.g., "https://example.github.io/docs").
    pub url: Option<String>,
}

impl SiteInfoConfig {
    /// Effective base path: explicit `base`, else the path component of
    /// `url`, else "/".
    ///
    /// The base prefixes every resolved page path, so it is fixed for the
    /// lifetime of the configuration.
    pub fn base_path(&self) -> String {
        if let Some(base) = &self.base {
            return base.clone();
        }
        if let Some(url) = &self.url
            && let Some(path) = extract_url_path(url)
            && !path.is_empty()
        {
            return format!("/{path}/");
        }
        "/".to_string()
    }

    /// Validate site metadata.
    ///
    /// # Checks
    /// - `title` must be non-empty
    /// - `base` must start and end with '/'
    /// - `url` must be a valid http(s) URL with a host
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let field = FieldPath::new("site");

        if self.title.trim().is_empty() {
            diag.error_with_hint(
                field.field("title"),
                Rule::EmptyLabel,
                "site title must not be empty",
                "set site.title, e.g.: \"My Docs\"",
            );
        }

        if let Some(base) = &self.base
            && (!base.starts_with('/') || !base.ends_with('/'))
        {
            diag.error_with_hint(
                field.field("base"),
                Rule::MalformedPath,
                format!("base '{base}' must start and end with '/'"),
                "use a path like \"/\" or \"/docs/\"",
            );
        }

        if let Some(url_str) = &self.url {
            match url::Url::parse(url_str) {
                Ok(parsed) => {
                    // Must be http or https
                    if !matches!(parsed.scheme(), "http" | "https") {
                        diag.error_with_hint(
                            field.field("url"),
                            Rule::InvalidUrl,
                            format!(
                                "scheme '{}' not supported, must be http or https",
                                parsed.scheme()
                            ),
                            "use format like https://example.com",
                        );
                    }
                    // Must have a valid host
                    if parsed.host_str().is_none() {
                        diag.error_with_hint(
                            field.field("url"),
                            Rule::InvalidUrl,
                            "URL must have a valid host",
                            "use format like https://example.com",
                        );
                    }
                }
                Err(e) => {
                    diag.error_with_hint(
                        field.field("url"),
                        Rule::InvalidUrl,
                        format!("invalid URL: {e}"),
                        "use format like https://example.com",
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.site.title, "Test");
        assert!(config.site.base.is_none());
        assert_eq!(config.site.base_path(), "/");
    }

    fn parse_site(extra: &str) -> SiteInfoConfig {
        let content = format!("[site]\ntitle = \"T\"\n{extra}");
        crate::config::NavConfig::from_str(&content).unwrap().site
    }

    #[test]
    fn test_explicit_base() {
        let site = parse_site("base = \"/docs/\"");
        assert_eq!(site.base_path(), "/docs/");
    }

    #[test]
    fn test_base_derived_from_url() {
        let site = parse_site("url = \"https://example.github.io/docs\"");
        assert_eq!(site.base_path(), "/docs/");
    }

    #[test]
    fn test_root_url_gives_root_base() {
        let site = parse_site("url = \"https://example.com/\"");
        assert_eq!(site.base_path(), "/");
    }

    #[test]
    fn test_explicit_base_wins_over_url() {
        let site = parse_site("base = \"/other/\"\nurl = \"https://example.github.io/docs\"");
        assert_eq!(site.base_path(), "/other/");
    }

    #[test]
    fn test_base_must_be_slash_delimited() {
        for bad in ["docs/", "/docs", "docs"] {
            let site = SiteInfoConfig {
                title: "T".into(),
                base: Some(bad.into()),
                ..Default::default()
            };
            let mut diag = ConfigDiagnostics::new();
            site.validate(&mut diag);
            assert!(diag.has_rule(Rule::MalformedPath), "base '{bad}' accepted");
        }
    }

    #[test]
    fn test_empty_title_rejected() {
        let site = SiteInfoConfig::default();
        let mut diag = ConfigDiagnostics::new();
        site.validate(&mut diag);
        assert!(diag.has_rule(Rule::EmptyLabel));
        assert_eq!(diag.errors()[0].field.as_str(), "site.title");
    }

    #[test]
    fn test_url_scheme_checked() {
        let site = SiteInfoConfig {
            title: "T".into(),
            url: Some("ftp://example.com".into()),
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        site.validate(&mut diag);
        assert!(diag.has_rule(Rule::InvalidUrl));
    }
}

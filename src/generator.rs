//! Generator contract: the configuration shape the rendering generator loads.
//!
//! The external generator expects a value with fields `title`, `description`,
//! `base`, and `themeConfig` holding `nav`, `sidebar`, and `socialLinks`.
//! Field names and nesting must match that contract exactly, or the generator
//! renders nothing where the navigation should be.
//!
//! ```json
//! {
//!   "title": "SympAuthy",
//!   "description": "Documentation site",
//!   "base": "/",
//!   "themeConfig": {
//!     "nav": [{ "text": "Home", "link": "/" }],
//!     "sidebar": { "/guide/": [{ "text": "Guide", "items": [] }] },
//!     "socialLinks": [{ "icon": "github", "link": "https://github.com/sympauthy" }]
//!   }
//! }
//! ```

use serde::Serialize;

use crate::config::{NavConfig, NavLink, NavNode, SidebarConfig, SocialLink};

/// Borrowed view of a validated [`NavConfig`] in the generator's shape.
#[derive(Debug, Serialize)]
pub struct GeneratorConfig<'a> {
    title: &'a str,
    description: &'a str,
    base: String,
    #[serde(rename = "themeConfig")]
    theme_config: ThemeConfig<'a>,
}

#[derive(Debug, Serialize)]
struct ThemeConfig<'a> {
    nav: Vec<ThemeNavEntry<'a>>,
    // SidebarConfig serializes as a map in declaration order
    sidebar: &'a SidebarConfig,
    #[serde(rename = "socialLinks")]
    social_links: &'a [SocialLink],
}

/// Nav entry in the generator's shape: `{text, link}` or `{text, items}`.
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum ThemeNavEntry<'a> {
    Leaf { text: &'a str, link: &'a str },
    Branch { text: &'a str, items: &'a [NavLink] },
}

impl<'a> GeneratorConfig<'a> {
    /// Build the generator view of a configuration.
    ///
    /// Callers validate first; a nav entry without a determinate leaf/branch
    /// shape cannot exist in a validated config and is skipped here.
    pub fn new(config: &'a NavConfig) -> Self {
        let nav = config
            .nav
            .iter()
            .filter_map(|entry| {
                entry.node().map(|node| match node {
                    NavNode::Leaf(link) => ThemeNavEntry::Leaf {
                        text: &entry.text,
                        link,
                    },
                    NavNode::Branch(items) => ThemeNavEntry::Branch {
                        text: &entry.text,
                        items,
                    },
                })
            })
            .collect();

        Self {
            title: &config.site.title,
            description: &config.site.description,
            base: config.site.base_path(),
            theme_config: ThemeConfig {
                nav,
                sidebar: &config.sidebar,
                social_links: &config.social,
            },
        }
    }

    /// Serialize to JSON for the generator to consume.
    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NavConfig;

    fn sample_config() -> NavConfig {
        NavConfig::from_str(
            r#"
[site]
title = "SympAuthy"
description = "Documentation site"

[[nav]]
text = "Home"
link = "/"

[[nav]]
text = "Documentation"
items = [{ text = "Overview", link = "/documentation/" }]

[[sidebar."/guide/"]]
text = "Guide"
items = [{ text = "Introduction", link = "/guide/" }]

[[sidebar."/examples/"]]
text = "First"
link = "/examples/first"

[[social]]
icon = "github"
link = "https://github.com/sympauthy"
"#,
        )
        .unwrap()
        .build()
        .unwrap()
    }

    #[test]
    fn test_contract_field_names_and_nesting() {
        let config = sample_config();
        let json = GeneratorConfig::new(&config).to_json(false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["title"], "SympAuthy");
        assert_eq!(value["description"], "Documentation site");
        assert_eq!(value["base"], "/");

        let theme = &value["themeConfig"];
        assert_eq!(theme["nav"][0], serde_json::json!({"text": "Home", "link": "/"}));
        assert_eq!(theme["nav"][1]["items"][0]["link"], "/documentation/");
        assert!(theme["nav"][1].get("link").is_none());

        assert_eq!(
            theme["socialLinks"][0],
            serde_json::json!({"icon": "github", "link": "https://github.com/sympauthy"})
        );
    }

    #[test]
    fn test_sidebar_scopes_keep_order_and_shape() {
        let config = sample_config();
        let json = GeneratorConfig::new(&config).to_json(false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let sidebar = value["themeConfig"]["sidebar"].as_object().unwrap();
        let keys: Vec<_> = sidebar.keys().collect();
        assert_eq!(keys, vec!["/guide/", "/examples/"]);

        // Grouped scope keeps {text, items}; bare scope keeps {text, link}
        assert_eq!(sidebar["/guide/"][0]["text"], "Guide");
        assert!(sidebar["/guide/"][0].get("items").is_some());
        assert_eq!(sidebar["/examples/"][0]["link"], "/examples/first");
        assert!(sidebar["/examples/"][0].get("items").is_none());
    }

    #[test]
    fn test_base_flows_from_site_url() {
        let config = NavConfig::from_str(
            "[site]\ntitle = \"T\"\nurl = \"https://example.github.io/docs\"",
        )
        .unwrap()
        .build()
        .unwrap();

        let json = GeneratorConfig::new(&config).to_json(true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["base"], "/docs/");
    }
}

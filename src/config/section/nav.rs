//! Top navigation bar entries.
//!
//! Each entry is either a plain link or a submenu, never both:
//!
//! ```toml
//! [[nav]]
//! text = "Home"
//! link = "/"
//!
//! [[nav]]
//! text = "Documentation"
//! items = [
//!     { text = "Overview", link = "/documentation/" },
//!     { text = "Functional", link = "/documentation/functional/" },
//! ]
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath, Rule};

/// A single link: display label plus target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub text: String,
    pub link: String,
}

impl NavLink {
    pub fn validate(&self, field: &FieldPath, diag: &mut ConfigDiagnostics) {
        validate_label(&self.text, &field.field("text"), diag);
        validate_link(&self.link, &field.field("link"), diag);
    }
}

/// One top-nav entry: a leaf link or a submenu of links.
///
/// The declaration keeps both fields optional so a malformed entry can be
/// reported by `validate` instead of failing at parse time with a serde
/// message; [`NavEntry::node`] gives the resolved leaf-or-branch view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavEntry {
    pub text: String,

    /// Link target for a plain entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    /// Submenu links for a dropdown entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<NavLink>>,
}

/// Resolved view of a structurally valid nav entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavNode<'a> {
    /// Plain entry pointing at one target.
    Leaf(&'a str),
    /// Submenu with an ordered list of links.
    Branch(&'a [NavLink]),
}

impl NavEntry {
    /// Leaf-or-branch view. `None` when the entry declares both or neither,
    /// which `validate` reports as an invalid nav node.
    pub fn node(&self) -> Option<NavNode<'_>> {
        match (&self.link, &self.items) {
            (Some(link), None) => Some(NavNode::Leaf(link)),
            (None, Some(items)) => Some(NavNode::Branch(items)),
            _ => None,
        }
    }

    pub fn validate(&self, field: &FieldPath, diag: &mut ConfigDiagnostics) {
        validate_label(&self.text, &field.field("text"), diag);

        match (&self.link, &self.items) {
            (Some(_), Some(_)) => diag.error_with_hint(
                field.clone(),
                Rule::InvalidNavNode,
                format!("nav entry '{}' declares both `link` and `items`", self.text),
                "keep `link` for a plain entry, or `items` for a submenu",
            ),
            (None, None) => diag.error_with_hint(
                field.clone(),
                Rule::InvalidNavNode,
                format!(
                    "nav entry '{}' declares neither `link` nor `items`",
                    self.text
                ),
                "add `link` for a plain entry, or `items` for a submenu",
            ),
            (Some(link), None) => validate_link(link, &field.field("link"), diag),
            (None, Some(items)) => {
                let items_field = field.field("items");
                for (i, item) in items.iter().enumerate() {
                    item.validate(&items_field.index(i), diag);
                }
            }
        }
    }
}

/// Shared label rule: every `text` must be non-empty.
pub(crate) fn validate_label(text: &str, field: &FieldPath, diag: &mut ConfigDiagnostics) {
    if text.trim().is_empty() {
        diag.error(field.clone(), Rule::EmptyLabel, "label must not be empty");
    }
}

/// Internal links are site-absolute paths; anything else must be a valid
/// http(s) URL.
pub(crate) fn validate_link(link: &str, field: &FieldPath, diag: &mut ConfigDiagnostics) {
    if link.starts_with("http://") || link.starts_with("https://") {
        if url::Url::parse(link).is_err() {
            diag.error(
                field.clone(),
                Rule::InvalidUrl,
                format!("invalid URL '{link}'"),
            );
        }
        return;
    }

    if !link.starts_with('/') {
        diag.error_with_hint(
            field.clone(),
            Rule::MalformedPath,
            format!("internal link '{link}' must start with '/'"),
            "internal paths are site-absolute, e.g. \"/guide/\"",
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diag_for(entry: &NavEntry) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        entry.validate(&FieldPath::new("nav").index(0), &mut diag);
        diag
    }

    #[test]
    fn test_leaf_entry() {
        let entry: NavEntry = toml::from_str("text = \"Home\"\nlink = \"/\"").unwrap();
        assert_eq!(entry.node(), Some(NavNode::Leaf("/")));
        assert!(diag_for(&entry).is_empty());
    }

    #[test]
    fn test_branch_entry() {
        let entry: NavEntry = toml::from_str(
            r#"text = "Docs"
items = [{ text = "Overview", link = "/documentation/" }]"#,
        )
        .unwrap();

        match entry.node() {
            Some(NavNode::Branch(items)) => {
                assert_eq!(items.len(), 1);
                assert_eq!(items[0].link, "/documentation/");
            }
            other => panic!("expected branch, got {other:?}"),
        }
        assert!(diag_for(&entry).is_empty());
    }

    #[test]
    fn test_both_link_and_items_is_invalid() {
        let entry: NavEntry = toml::from_str(
            r#"text = "Docs"
link = "/documentation/"
items = [{ text = "Overview", link = "/documentation/" }]"#,
        )
        .unwrap();

        assert_eq!(entry.node(), None);
        let diag = diag_for(&entry);
        assert!(diag.has_rule(Rule::InvalidNavNode));
    }

    #[test]
    fn test_neither_link_nor_items_is_invalid() {
        let entry: NavEntry = toml::from_str("text = \"Docs\"").unwrap();

        assert_eq!(entry.node(), None);
        assert!(diag_for(&entry).has_rule(Rule::InvalidNavNode));
    }

    #[test]
    fn test_empty_label() {
        let entry: NavEntry = toml::from_str("text = \"\"\nlink = \"/\"").unwrap();
        let diag = diag_for(&entry);
        assert!(diag.has_rule(Rule::EmptyLabel));
        assert_eq!(diag.errors()[0].field.as_str(), "nav[0].text");
    }

    #[test]
    fn test_relative_link_is_malformed() {
        let entry: NavEntry = toml::from_str("text = \"Guide\"\nlink = \"guide/\"").unwrap();
        assert!(diag_for(&entry).has_rule(Rule::MalformedPath));
    }

    #[test]
    fn test_external_link_is_allowed() {
        let entry: NavEntry =
            toml::from_str("text = \"Source\"\nlink = \"https://github.com/sympauthy\"").unwrap();
        assert!(diag_for(&entry).is_empty());
    }

    #[test]
    fn test_submenu_item_paths_reported_with_index() {
        let entry: NavEntry = toml::from_str(
            r#"text = "Docs"
items = [
    { text = "Overview", link = "/documentation/" },
    { text = "", link = "broken" },
]"#,
        )
        .unwrap();

        let diag = diag_for(&entry);
        assert_eq!(diag.len(), 2);
        assert!(diag.has_rule(Rule::EmptyLabel));
        assert!(diag.has_rule(Rule::MalformedPath));
        assert_eq!(diag.errors()[0].field.as_str(), "nav[0].items[1].text");
        assert_eq!(diag.errors()[1].field.as_str(), "nav[0].items[1].link");
    }
}

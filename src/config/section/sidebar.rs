//! Path-scoped sidebars.
//!
//! Each key of `[sidebar]` is a URL path prefix; its value is either an
//! ordered list of labeled groups or a bare list of links. The generator
//! shows the scope whose key is the longest prefix of the current page path,
//! so `/documentation/functional/claims` falls under
//! `/documentation/functional/` rather than `/documentation/`.
//!
//! ```toml
//! [[sidebar."/guide/"]]
//! text = "Guide"
//! items = [{ text = "Introduction", link = "/guide/" }]
//!
//! [sidebar]
//! "/examples/" = [{ text = "First", link = "/examples/first" }]
//! ```

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashSet;
use std::fmt;

use super::nav::{NavLink, validate_label};
use crate::config::{ConfigDiagnostics, FieldPath, Rule};

/// One labeled sidebar section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarGroup {
    pub text: String,
    pub items: Vec<NavLink>,
}

/// Sidebar value for one path scope.
///
/// Both shapes appear in real-world declarations; neither is normalized into
/// the other, the generator receives whichever form was declared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SidebarScope {
    /// Labeled groups of links.
    Groups(Vec<SidebarGroup>),
    /// Bare links without a group label.
    Links(Vec<NavLink>),
}

/// Ordered mapping from URL path prefix to [`SidebarScope`].
///
/// Declaration order is preserved exactly. Duplicate prefixes are kept at
/// parse time so `validate` can report every occurrence instead of silently
/// keeping one.
#[derive(Debug, Clone, Default)]
pub struct SidebarConfig {
    entries: Vec<(String, SidebarScope)>,
}

impl SidebarConfig {
    pub fn new(entries: Vec<(String, SidebarScope)>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Scope prefixes in declaration order.
    pub fn prefixes(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(prefix, _)| prefix.as_str())
    }

    pub fn entries(&self) -> &[(String, SidebarScope)] {
        &self.entries
    }

    /// Exact-key lookup.
    pub fn get(&self, prefix: &str) -> Option<&SidebarScope> {
        self.entries
            .iter()
            .find(|(p, _)| p == prefix)
            .map(|(_, scope)| scope)
    }

    /// Longest-matching-prefix lookup for a page path.
    ///
    /// `None` means no scope covers the path; the generator then renders the
    /// page without a sidebar. This is not an error.
    pub fn resolve(&self, path: &str) -> Option<&SidebarScope> {
        self.resolve_entry(path).map(|(_, scope)| scope)
    }

    /// Like [`resolve`](Self::resolve), but also returns the matched prefix.
    pub fn resolve_entry(&self, path: &str) -> Option<(&str, &SidebarScope)> {
        self.entries
            .iter()
            .filter(|(prefix, _)| path.starts_with(prefix.as_str()))
            .max_by_key(|(prefix, _)| prefix.len())
            .map(|(prefix, scope)| (prefix.as_str(), scope))
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let field = FieldPath::new("sidebar");
        let mut seen: HashSet<&str> = HashSet::with_capacity(self.entries.len());

        for (prefix, scope) in &self.entries {
            let scope_field = field.key(prefix);

            if !prefix.starts_with('/') {
                diag.error_with_hint(
                    scope_field.clone(),
                    Rule::MalformedPath,
                    format!("sidebar scope '{prefix}' must start with '/'"),
                    "scope keys are site-absolute prefixes, e.g. \"/guide/\"",
                );
            }

            if !seen.insert(prefix.as_str()) {
                diag.error_with_hint(
                    scope_field.clone(),
                    Rule::DuplicateSidebarScope,
                    format!("sidebar scope '{prefix}' is declared more than once"),
                    "prefix matching cannot pick between identical keys, remove one",
                );
            }

            match scope {
                SidebarScope::Groups(groups) => {
                    for (g, group) in groups.iter().enumerate() {
                        let group_field = scope_field.index(g);
                        validate_label(&group.text, &group_field.field("text"), diag);
                        let items_field = group_field.field("items");
                        for (i, item) in group.items.iter().enumerate() {
                            item.validate(&items_field.index(i), diag);
                        }
                    }
                }
                SidebarScope::Links(links) => {
                    for (i, link) in links.iter().enumerate() {
                        link.validate(&scope_field.index(i), diag);
                    }
                }
            }
        }
    }
}

// Serialized as a map so the generator sees the declared key order.
impl Serialize for SidebarConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (prefix, scope) in &self.entries {
            map.serialize_entry(prefix, scope)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for SidebarConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SidebarVisitor;

        impl<'de> Visitor<'de> for SidebarVisitor {
            type Value = SidebarConfig;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of path prefixes to sidebar scopes")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                // Entries arrive in document order; duplicates are kept for
                // validation to report.
                while let Some((prefix, scope)) = access.next_entry::<String, SidebarScope>()? {
                    entries.push((prefix, scope));
                }
                Ok(SidebarConfig { entries })
            }
        }

        deserializer.deserialize_map(SidebarVisitor)
    }
}

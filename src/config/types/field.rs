//! Composable config field paths.

use owo_colors::OwoColorize;
use std::fmt;

/// A path pointing at one value inside the declaration.
///
/// Paths are composed while walking the structure during validation, so a
/// diagnostic can name the exact offending value, e.g.
/// `sidebar["/documentation/"][2].text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath(String);

impl FieldPath {
    #[inline]
    pub fn new(root: impl Into<String>) -> Self {
        Self(root.into())
    }

    /// Append a map key segment: `sidebar` -> `sidebar["/guide/"]`.
    pub fn key(&self, key: &str) -> Self {
        Self(format!("{}[\"{}\"]", self.0, key))
    }

    /// Append an index segment: `nav` -> `nav[2]`.
    pub fn index(&self, index: usize) -> Self {
        Self(format!("{}[{}]", self.0, index))
    }

    /// Append a named field segment: `nav[2]` -> `nav[2].text`.
    pub fn field(&self, name: &str) -> Self {
        Self(format!("{}.{}", self.0, name))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_segments() {
        let path = FieldPath::new("sidebar")
            .key("/documentation/")
            .index(2)
            .field("text");
        assert_eq!(path.as_str(), "sidebar[\"/documentation/\"][2].text");
    }

    #[test]
    fn test_index_then_field() {
        let path = FieldPath::new("nav").index(1).field("items").index(0);
        assert_eq!(path.as_str(), "nav[1].items[0]");
    }
}

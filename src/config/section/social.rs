//! External social links.
//!
//! Rendered by the generator's theme as icon links in the site header.
//!
//! ```toml
//! [[social]]
//! icon = "github"
//! link = "https://github.com/sympauthy"
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath, Rule};

/// Icon identifiers the generator's theme knows how to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialIcon {
    Github,
    Twitter,
    Mastodon,
    Discord,
    Linkedin,
    Youtube,
    Slack,
}

impl SocialIcon {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Github => "github",
            Self::Twitter => "twitter",
            Self::Mastodon => "mastodon",
            Self::Discord => "discord",
            Self::Linkedin => "linkedin",
            Self::Youtube => "youtube",
            Self::Slack => "slack",
        }
    }
}

/// One external link: theme icon plus absolute URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub icon: SocialIcon,
    pub link: String,
}

impl SocialLink {
    /// Social links point outside the site, so `link` must be an absolute
    /// http(s) URL.
    pub fn validate(&self, field: &FieldPath, diag: &mut ConfigDiagnostics) {
        match url::Url::parse(&self.link) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
                    diag.error_with_hint(
                        field.field("link"),
                        Rule::InvalidUrl,
                        format!("'{}' is not an absolute http(s) URL", self.link),
                        "use format like https://github.com/your-org",
                    );
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    field.field("link"),
                    Rule::InvalidUrl,
                    format!("invalid URL: {e}"),
                    "use format like https://github.com/your-org",
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diag_for(link: &SocialLink) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        link.validate(&FieldPath::new("social").index(0), &mut diag);
        diag
    }

    #[test]
    fn test_parse_icon() {
        let link: SocialLink =
            toml::from_str("icon = \"github\"\nlink = \"https://github.com/sympauthy\"").unwrap();
        assert_eq!(link.icon, SocialIcon::Github);
        assert_eq!(link.icon.as_str(), "github");
        assert!(diag_for(&link).is_empty());
    }

    #[test]
    fn test_unknown_icon_fails_parse() {
        let result: Result<SocialLink, _> =
            toml::from_str("icon = \"gopher\"\nlink = \"https://example.com\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_relative_link_rejected() {
        let link = SocialLink {
            icon: SocialIcon::Github,
            link: "/about".into(),
        };
        let diag = diag_for(&link);
        assert!(diag.has_rule(Rule::InvalidUrl));
        assert_eq!(diag.errors()[0].field.as_str(), "social[0].link");
    }

    #[test]
    fn test_non_http_scheme_rejected() {
        let link = SocialLink {
            icon: SocialIcon::Mastodon,
            link: "gemini://example.org".into(),
        };
        assert!(diag_for(&link).has_rule(Rule::InvalidUrl));
    }
}

//! Configuration error types.

use super::FieldPath;
use owo_colors::OwoColorize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// ConfigError
// ============================================================================

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file `{}` not found", .0.display())]
    NotFound(PathBuf),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("Config validation error: {0}")]
    Validation(String),

    // NOTE: No #[from] here - we don't want source() which causes duplicate output
    #[error("{0}")]
    Diagnostics(ConfigDiagnostics),
}

// ============================================================================
// Rule
// ============================================================================

/// The validation rule a diagnostic reports a violation of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Two sidebar scope keys are identical strings.
    DuplicateSidebarScope,
    /// A nav entry declares both `link` and `items`, or neither.
    InvalidNavNode,
    /// A `text` field is empty.
    EmptyLabel,
    /// An internal path does not start with `/`, or `base` is not
    /// slash-delimited.
    MalformedPath,
    /// A value that must be an absolute http(s) URL is not one.
    InvalidUrl,
}

impl Rule {
    /// Short label shown next to the field path.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::DuplicateSidebarScope => "duplicate sidebar scope",
            Self::InvalidNavNode => "invalid nav node",
            Self::EmptyLabel => "empty label",
            Self::MalformedPath => "malformed path",
            Self::InvalidUrl => "invalid url",
        }
    }
}

// ============================================================================
// ConfigDiagnostic
// ============================================================================

/// A single configuration diagnostic
#[derive(Debug, Clone)]
pub struct ConfigDiagnostic {
    /// Config field path (e.g., `sidebar["/documentation/"][2].text`)
    pub field: FieldPath,
    /// The rule this diagnostic violates
    pub rule: Rule,
    /// Error description
    pub message: String,
    /// Fix hint (optional)
    pub hint: Option<String>,
}

impl ConfigDiagnostic {
    pub fn new(field: FieldPath, rule: Rule, message: impl Into<String>) -> Self {
        Self {
            field,
            rule,
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl fmt::Display for ConfigDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Field path in cyan brackets, rule label dimmed
        writeln!(
            f,
            "{}{}{} {}",
            "[".dimmed(),
            self.field.as_str().cyan(),
            "]".dimmed(),
            self.rule.label().dimmed()
        )?;
        // Error message with red bullet
        write!(f, "{} {}", "→".red(), self.message)?;
        // Hint in yellow
        if let Some(hint) = &self.hint {
            write!(f, "\n  {} {}", "hint:".yellow(), hint)?;
        }
        Ok(())
    }
}

// ============================================================================
// ConfigDiagnostics
// ============================================================================

/// Aggregated validation report: every violation found in one pass.
#[derive(Debug, Default)]
pub struct ConfigDiagnostics {
    errors: Vec<ConfigDiagnostic>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, field: FieldPath, rule: Rule, message: impl Into<String>) {
        self.errors.push(ConfigDiagnostic::new(field, rule, message));
    }

    /// Add an error with a hint.
    pub fn error_with_hint(
        &mut self,
        field: FieldPath,
        rule: Rule,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.errors
            .push(ConfigDiagnostic::new(field, rule, message).with_hint(hint));
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Whether any collected diagnostic violates `rule`.
    pub fn has_rule(&self, rule: Rule) -> bool {
        self.errors.iter().any(|e| e.rule == rule)
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ConfigDiagnostic] {
        &self.errors
    }

    /// Convert to Result (returns Err if there are errors).
    pub fn into_result(self) -> Result<(), Self> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}\n", "config validation failed:".red().bold())?;
        for (i, err) in self.errors.iter().enumerate() {
            write!(f, "{err}")?;
            if i + 1 < self.errors.len() {
                writeln!(f, "\n")?;
            }
        }
        if self.errors.len() > 1 {
            write!(
                f,
                "\n\n{} {} {}",
                "found".dimmed(),
                self.errors.len().to_string().red().bold(),
                "errors".dimmed()
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigDiagnostics {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_config_error_display() {
        let io_err = ConfigError::Io(
            PathBuf::from("sitenav.toml"),
            Error::new(ErrorKind::NotFound, "file not found"),
        );
        let display = format!("{io_err}");
        assert!(display.contains("IO error"));
        assert!(display.contains("sitenav.toml"));

        let validation_err = ConfigError::Validation("Test validation error".to_string());
        let display = format!("{validation_err}");
        assert!(display.contains("Test validation error"));
    }

    #[test]
    fn test_diagnostics_report_names_field_and_rule() {
        let mut diag = ConfigDiagnostics::new();
        diag.error(
            FieldPath::new("nav").index(0).field("text"),
            Rule::EmptyLabel,
            "label must not be empty",
        );
        diag.error_with_hint(
            FieldPath::new("sidebar").key("/guide/"),
            Rule::DuplicateSidebarScope,
            "scope declared more than once",
            "remove one of the entries",
        );

        assert_eq!(diag.len(), 2);
        assert!(diag.has_rule(Rule::EmptyLabel));
        assert!(diag.has_rule(Rule::DuplicateSidebarScope));
        assert!(!diag.has_rule(Rule::InvalidNavNode));

        let display = format!("{diag}");
        assert!(display.contains("nav[0].text"));
        assert!(display.contains("sidebar[\"/guide/\"]"));
        assert!(display.contains("hint:"));
        assert!(display.contains("2"));
    }

    #[test]
    fn test_into_result() {
        assert!(ConfigDiagnostics::new().into_result().is_ok());

        let mut diag = ConfigDiagnostics::new();
        diag.error(FieldPath::new("site.base"), Rule::MalformedPath, "bad base");
        assert!(diag.into_result().is_err());
    }
}

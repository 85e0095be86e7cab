#![warn(rust_2024_compatibility, clippy::all)]

//! Types shared by every canon crate: declaration facts go in, findings come out.

mod facts;

use serde::{Deserialize, Serialize};

pub use facts::{
    BranchConstruct, CommentKind, CommentSpan, DeclarationFacts, DeclarationKind, DocComment,
    EmbeddedStatement, Location, Modifier, ParameterFacts,
};

/// How loudly a finding is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

impl Severity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }

    /// Parse a config value ("warning" / "error", case-insensitive).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "warning" => Some(Self::Warning),
            "error" => Some(Self::Error),
            _ => None,
        }
    }
}

/// Rule grouping, mirrors the categories suppression files are organised by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Comments,
    NamingConvention,
    CodeStructure,
    StaticClass,
}

impl Category {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Comments => "Comments",
            Self::NamingConvention => "Naming Convention",
            Self::CodeStructure => "Code structure",
            Self::StaticClass => "Static class",
        }
    }
}

/// Static description of a rule. Defined once, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleDefinition {
    /// Stable short code, e.g. `CAP0001`. External suppressions reference it by value.
    pub code: &'static str,
    pub name: &'static str,
    pub category: Category,
    pub default_severity: Severity,
    /// `{name}` is replaced by the rule name, `{0}` by the finding message.
    pub message_template: &'static str,
    pub enabled_by_default: bool,
}

impl RuleDefinition {
    /// Build a finding for this rule.
    #[must_use]
    pub fn finding(
        &self,
        severity: Severity,
        location: Location,
        message: impl Into<String>,
    ) -> Finding {
        Finding {
            rule_id: self.code.to_string(),
            rule_name: self.name.to_string(),
            severity,
            location,
            message: message.into(),
        }
    }

    /// Expand the message template around a finding message.
    #[must_use]
    pub fn render(&self, message: &str) -> String {
        self.message_template
            .replace("{name}", self.name)
            .replace("{0}", message)
    }
}

/// A single rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub rule_id: String,
    pub rule_name: String,
    pub severity: Severity,
    /// Opaque to the rules, handed back to the host unchanged.
    pub location: Location,
    pub message: String,
}

pub type Findings = Vec<Finding>;

/// Trait every canon rule implements.
///
/// Implementations must be pure: the same facts always produce the same
/// finding, and no rule looks at another rule's output.
pub trait Rule: Send + Sync {
    #[must_use]
    fn definition(&self) -> &'static RuleDefinition;

    /// Evaluate one declaration. `None` when the rule passes or does not apply.
    fn evaluate(&self, facts: &DeclarationFacts) -> Option<Finding>;

    #[must_use]
    fn code(&self) -> &'static str {
        self.definition().code
    }
}

/// Boxed rule for dynamic dispatch.
pub type BoxRule = Box<dyn Rule>;

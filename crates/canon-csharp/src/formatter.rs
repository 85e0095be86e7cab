//! Finding message text and severity escalation.

use crate::pattern::NameShape;
use canon_rule_abi::{DeclarationKind, Severity};

pub const STATIC_CLASS_MESSAGE: &str =
    "Static classes must be avoided unless there is no better option.";
pub const REDUNDANT_CODE_MESSAGE: &str = "These lines of code are redundant. Please delete them.";
pub const ONE_TYPE_PER_FILE_MESSAGE: &str =
    "Each file should contain only one type. Please split the types into multiple files.";
pub const FILE_HIERARCHY_MESSAGE: &str = "Namespace should match against file structure.";

/// How a count relates to the threshold it is reported against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    EqualTo,
    GreaterThan,
}

impl Comparison {
    #[must_use]
    pub const fn between(count: usize, threshold: usize) -> Self {
        if count == threshold {
            Self::EqualTo
        } else {
            Self::GreaterThan
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EqualTo => "equal to",
            Self::GreaterThan => "greater-than",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterSubject {
    Method,
    Constructor,
}

impl ParameterSubject {
    const fn label(self) -> &'static str {
        match self {
            Self::Method => "Method",
            Self::Constructor => "Constructor",
        }
    }

    const fn noun(self) -> &'static str {
        match self {
            Self::Method => "method",
            Self::Constructor => "constructor",
        }
    }
}

/// Two-tier parameter limits: above `warning_max` warns, `error_max` and up errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterThresholds {
    pub warning_max: usize,
    pub error_max: usize,
}

impl Default for ParameterThresholds {
    fn default() -> Self {
        Self {
            warning_max: 5,
            error_max: 10,
        }
    }
}

/// Outcome of escalating a parameter count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Escalation {
    pub severity: Severity,
    pub threshold: usize,
    pub comparison: Comparison,
}

impl ParameterThresholds {
    /// `None` when `count` is within the warning limit.
    #[must_use]
    pub const fn escalate(&self, count: usize) -> Option<Escalation> {
        let (severity, threshold) = if count >= self.error_max {
            (Severity::Error, self.error_max)
        } else if count > self.warning_max {
            (Severity::Warning, self.warning_max)
        } else {
            return None;
        };

        Some(Escalation {
            severity,
            threshold,
            comparison: Comparison::between(count, threshold),
        })
    }
}

#[must_use]
pub fn parameter_message(subject: ParameterSubject, count: usize, escalation: &Escalation) -> String {
    let advice = match escalation.severity {
        Severity::Error => "refactor",
        Severity::Warning => "consider refactoring",
    };
    format!(
        "{} has a total of {count} Parameters which is {} the recommended maximum of {}. Please {advice} the {} / class.",
        subject.label(),
        escalation.comparison.as_str(),
        escalation.threshold,
        subject.noun(),
    )
}

#[must_use]
pub fn naming_message(shape: NameShape, name: &str) -> String {
    let requirement = match shape {
        NameShape::NonPrivateMember => {
            "must start with one upper case character, \nnot end with uppercase character and not contain two consecutive upper case characters."
        }
        NameShape::PrivateField => {
            "must start with underscore character followed by at least two lower case characters, \nnot end with uppercase character and not contain two consecutive upper case characters."
        }
        NameShape::LocalVariable => {
            "must start with at least two lower case character, \nnot end with uppercase character and not contain two consecutive upper case characters."
        }
        NameShape::Interface => {
            "must start with character I and an upper case character, \nnot end with uppercase character and not contain two consecutive upper case characters apart from the first two characters."
        }
        NameShape::CamelCaseField => {
            "must start with one lower case character, \nnot end with uppercase character and not contain two consecutive upper case characters."
        }
    };

    if shape == NameShape::CamelCaseField {
        format!("Field '{name}' does not satisfy naming convention. \nField '{name}' {requirement}")
    } else {
        format!("{name} does not satisfy naming convention. \n{name} {requirement}")
    }
}

#[must_use]
pub fn access_modifier_message(kind: DeclarationKind, name: &str) -> String {
    if kind == DeclarationKind::Constructor {
        format!("Constructor {name} must include an access modifier.")
    } else {
        format!("{name} must include an access modifier.")
    }
}

#[must_use]
pub fn missing_documentation_message(name: &str) -> String {
    format!("{name} does not include valid comments.")
}

#[must_use]
pub fn documentation_too_long_message(name: &str, max_lines: usize) -> String {
    format!(
        "Documentation comments from {name} exceed the allowed maximum number of lines {{{max_lines}}}."
    )
}

#[must_use]
pub fn complexity_message(score: usize, max: usize) -> String {
    format!(
        "The cyclomatic complexity of this method is {score} which is greater than the maximum value of {max}. Please consider splitting this method into smaller methods."
    )
}

#[must_use]
pub fn monster_method_message(max: usize) -> String {
    format!(
        "This method is longer than {max} lines of executable code. Please consider splitting this method into smaller methods."
    )
}

#[must_use]
pub fn god_class_message(count: usize, max: usize) -> String {
    format!(
        "This class has {count} methods which is more than the recommended {max} methods. \nPlease consider applying the SOLID principles to the class design. \nIt is recommended to have small focused classes."
    )
}

#[must_use]
pub fn missing_braces_message(keyword: &str) -> String {
    format!("Please ensure that {keyword} statements have corresponding curly braces.")
}

#[must_use]
pub fn single_constructor_message(name: &str) -> String {
    format!("{name} already has a constructor. Only one constructor is allowed for this class.")
}

/// Local variable comment discipline violations, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentViolation {
    LeadingAndTrailing,
    MixedKinds,
    MultipleBlocks,
    TooManyLines { max: usize },
}

impl CommentViolation {
    #[must_use]
    pub fn message(self, name: &str) -> String {
        match self {
            Self::LeadingAndTrailing => {
                format!("{name} has both leading and trailing comments. Only one type is allowed!")
            }
            Self::MixedKinds => format!(
                "{name} has both multiline and single line comments. Please use only one type of comments!"
            ),
            Self::MultipleBlocks => format!(
                "{name} has multiple MultiLines comments. Please use no more than 1 MultiLines of comments!"
            ),
            Self::TooManyLines { max } => format!(
                "{name} has more than {max} lines comments. Please use no more than {max} lines of comments!"
            ),
        }
    }
}

#![warn(rust_2024_compatibility, clippy::all)]

//! canon-csharp - C# style rules: access modifiers, naming, comments,
//! method and class size, braces and file layout.
//!
//! Rules read [`DeclarationFacts`] produced by an external syntax walker and
//! never see source text beyond what the facts carry.

pub mod codes;
pub mod comments;
pub mod complexity;
pub mod fixes;
pub mod formatter;
pub mod pattern;
pub mod rewrite;
pub mod rules;

use canon_core::{CanonConfig, ConfigError, Engine, RuleSettings};
use canon_rule_abi::{
    BoxRule, DeclarationFacts, Finding, Findings, Rule, RuleDefinition, Severity,
};
use formatter::ParameterThresholds;
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

pub use codes::RuleCode;
pub use fixes::{Fix, propose_fixes};
pub use rewrite::{prefix_underscore, rewrite_casing, rewrite_pascal};

/// Thresholds and switches for the C# rule set.
#[derive(Debug, Clone)]
pub struct CSharpConfig {
    pub enabled: HashSet<RuleCode>,
    pub static_class_severity: Severity,
    pub max_documentation_lines: usize,
    pub max_comment_lines: usize,
    pub max_commented_code_lines: usize,
    pub max_statements: usize,
    pub max_class_members: usize,
    pub max_complexity: usize,
    pub constructor_parameters: ParameterThresholds,
    pub method_parameters: ParameterThresholds,
    /// Reported severity for every finding of a rule, both parameter tiers included.
    pub severity_overrides: HashMap<RuleCode, Severity>,
}

impl Default for CSharpConfig {
    fn default() -> Self {
        Self {
            enabled: RuleCode::ALL
                .into_iter()
                .filter(|code| code.definition().enabled_by_default)
                .collect(),
            static_class_severity: codes::STATIC_CLASS.default_severity,
            max_documentation_lines: rules::DEFAULT_MAX_DOCUMENTATION_LINES,
            max_comment_lines: rules::DEFAULT_MAX_COMMENT_LINES,
            max_commented_code_lines: rules::DEFAULT_MAX_COMMENTED_LINES,
            max_statements: rules::DEFAULT_MAX_STATEMENTS,
            max_class_members: rules::DEFAULT_MAX_CLASS_MEMBERS,
            max_complexity: complexity::DEFAULT_MAX_COMPLEXITY,
            constructor_parameters: ParameterThresholds::default(),
            method_parameters: ParameterThresholds::default(),
            severity_overrides: HashMap::new(),
        }
    }
}

// ============================================================================
// Rule construction
// ============================================================================

/// Reports a rule's findings with a fixed severity.
struct WithSeverity {
    inner: BoxRule,
    severity: Severity,
}

impl Rule for WithSeverity {
    fn definition(&self) -> &'static RuleDefinition {
        self.inner.definition()
    }

    fn evaluate(&self, facts: &DeclarationFacts) -> Option<Finding> {
        self.inner.evaluate(facts).map(|mut finding| {
            finding.severity = self.severity;
            finding
        })
    }
}

/// Instantiate one rule with the thresholds from `config`.
#[must_use]
pub fn build_rule(code: RuleCode, config: &CSharpConfig) -> BoxRule {
    let rule: BoxRule = match code {
        RuleCode::ExplicitAccessModifiers => Box::new(rules::ExplicitAccessModifiers),
        RuleCode::XmlComments => Box::new(rules::XmlComments),
        RuleCode::StaticClass => {
            return Box::new(rules::StaticClass {
                severity: config.static_class_severity,
            });
        }
        RuleCode::NamingConvention => Box::new(rules::NamingConvention),
        RuleCode::LargeCommentedCode => Box::new(rules::LargeCommentedCode {
            max_lines: config.max_commented_code_lines,
        }),
        RuleCode::Comments => Box::new(rules::Comments {
            max_documentation_lines: config.max_documentation_lines,
            max_comment_lines: config.max_comment_lines,
        }),
        RuleCode::MonsterMethod => Box::new(rules::MonsterMethod {
            max_statements: config.max_statements,
        }),
        RuleCode::GodClass => Box::new(rules::GodClass {
            max_members: config.max_class_members,
        }),
        RuleCode::FileHierarchy => Box::new(rules::FileHierarchy),
        RuleCode::OneTypePerFile => Box::new(rules::OneTypePerFile),
        RuleCode::IfStatement => Box::new(rules::IfStatement),
        RuleCode::LoopStatement => Box::new(rules::LoopStatement),
        RuleCode::MethodComplexity => Box::new(rules::MethodComplexity {
            max: config.max_complexity,
        }),
        RuleCode::ConstructorParameters => Box::new(rules::ConstructorParameters {
            thresholds: config.constructor_parameters,
        }),
        RuleCode::MethodParameters => Box::new(rules::MethodParameters {
            thresholds: config.method_parameters,
        }),
        RuleCode::PrivateFieldNamingUnderscore => Box::new(rules::PrivateFieldNamingUnderscore),
        RuleCode::PrivateFieldNameCasing => Box::new(rules::PrivateFieldNameCasing),
        RuleCode::SingleConstructor => Box::new(rules::SingleConstructor),
    };

    match config.severity_overrides.get(&code) {
        Some(&severity) => Box::new(WithSeverity {
            inner: rule,
            severity,
        }),
        None => rule,
    }
}

/// Default rule set.
#[must_use]
pub fn init_rules() -> Vec<BoxRule> {
    init_rules_with_config(&CSharpConfig::default())
}

/// Enabled rules in code order.
#[must_use]
pub fn init_rules_with_config(config: &CSharpConfig) -> Vec<BoxRule> {
    RuleCode::ALL
        .into_iter()
        .filter(|code| config.enabled.contains(code))
        .map(|code| build_rule(code, config))
        .collect()
}

/// Convert `.canon.toml` rule sections to `CSharpConfig`.
///
/// `max` means a different threshold per rule: commented-out lines for
/// CAP0005, documentation lines for CAP0006, statements for CAP0007, members
/// for CAP0008 and the complexity score for CAP0014. CAP0006 also takes
/// `max_comment_lines` for comments next to a local variable.
///
/// # Errors
///
/// Returns `ConfigError::Validation` for a section naming no known rule, a
/// threshold the rule does not have, or parameter limits where `warning_max`
/// is not below `error_max` once defaults fill the unset one.
pub fn config_from_canon_config(config: &CanonConfig) -> Result<CSharpConfig, ConfigError> {
    if let Some(key) = config.rule.keys().find(|key| !is_rule_key(key)) {
        return Err(ConfigError::Validation(format!(
            "rule.{key}: no rule has this code or name"
        )));
    }

    let mut out = CSharpConfig::default();

    for code in RuleCode::ALL {
        let definition = code.definition();
        if config.is_enabled(definition.code, definition.name, definition.enabled_by_default) {
            out.enabled.insert(code);
        } else {
            out.enabled.remove(&code);
        }

        let Some(settings) = config.settings_for(definition.code, definition.name) else {
            continue;
        };
        let invalid = |setting: &str| {
            ConfigError::Validation(format!(
                "rule.{}: {} has no `{setting}` setting",
                definition.code, definition.name
            ))
        };

        if let Some(severity) = settings.severity() {
            if code == RuleCode::StaticClass {
                out.static_class_severity = severity;
            } else {
                out.severity_overrides.insert(code, severity);
            }
        }

        if let Some(max) = settings.max {
            match code {
                RuleCode::LargeCommentedCode => out.max_commented_code_lines = max,
                RuleCode::Comments => out.max_documentation_lines = max,
                RuleCode::MonsterMethod => out.max_statements = max,
                RuleCode::GodClass => out.max_class_members = max,
                RuleCode::MethodComplexity => out.max_complexity = max,
                _ => return Err(invalid("max")),
            }
        }

        if let Some(max_comment_lines) = settings.max_comment_lines {
            if code != RuleCode::Comments {
                return Err(invalid("max_comment_lines"));
            }
            out.max_comment_lines = max_comment_lines;
        }

        let thresholds = match code {
            RuleCode::ConstructorParameters => &mut out.constructor_parameters,
            RuleCode::MethodParameters => &mut out.method_parameters,
            _ if settings.warning_max.is_some() => return Err(invalid("warning_max")),
            _ if settings.error_max.is_some() => return Err(invalid("error_max")),
            _ => continue,
        };
        apply_thresholds(thresholds, settings);
        if thresholds.warning_max >= thresholds.error_max {
            return Err(ConfigError::Validation(format!(
                "rule.{}: warning_max ({}) must be lower than error_max ({})",
                definition.code, thresholds.warning_max, thresholds.error_max
            )));
        }
    }

    Ok(out)
}

/// Section keys match a rule code exactly or a rule name.
fn is_rule_key(key: &str) -> bool {
    RuleCode::ALL.into_iter().any(|code| {
        let definition = code.definition();
        definition.code == key || definition.name == key
    })
}

fn apply_thresholds(thresholds: &mut ParameterThresholds, settings: &RuleSettings) {
    if let Some(warning_max) = settings.warning_max {
        thresholds.warning_max = warning_max;
    }
    if let Some(error_max) = settings.error_max {
        thresholds.error_max = error_max;
    }
}

/// Enabled rules configured from `.canon.toml` sections.
///
/// # Errors
///
/// Returns the errors of [`config_from_canon_config`].
pub fn rules_from_config(config: &CanonConfig) -> Result<Vec<BoxRule>, ConfigError> {
    Ok(init_rules_with_config(&config_from_canon_config(config)?))
}

/// Engine loaded with the rules `config` enables.
///
/// # Errors
///
/// Returns the errors of [`config_from_canon_config`].
pub fn init_engine(config: &CanonConfig) -> Result<Engine, ConfigError> {
    let mut engine = Engine::new();
    for rule in rules_from_config(config)? {
        engine.add_rule(rule);
    }
    tracing::info!("loaded {} C# rules", engine.len());
    Ok(engine)
}

static DEFAULT_ENGINE: LazyLock<Engine> = LazyLock::new(|| {
    init_rules()
        .into_iter()
        .fold(Engine::new(), Engine::with_rule)
});

/// Evaluate one declaration against the default rule set.
#[must_use]
pub fn lint_declaration(facts: &DeclarationFacts) -> Findings {
    DEFAULT_ENGINE.evaluate(facts)
}

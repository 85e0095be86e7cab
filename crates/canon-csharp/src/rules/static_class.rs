use crate::codes::STATIC_CLASS;
use crate::formatter::STATIC_CLASS_MESSAGE;
use canon_rule_abi::{
    DeclarationFacts, DeclarationKind, Finding, Modifier, Rule, RuleDefinition, Severity,
};

/// CAP0003 - static classes, unless they host extension methods.
#[derive(Debug, Clone, Copy)]
pub struct StaticClass {
    pub severity: Severity,
}

impl Default for StaticClass {
    fn default() -> Self {
        Self {
            severity: STATIC_CLASS.default_severity,
        }
    }
}

impl Rule for StaticClass {
    fn definition(&self) -> &'static RuleDefinition {
        &STATIC_CLASS
    }

    fn evaluate(&self, facts: &DeclarationFacts) -> Option<Finding> {
        let flagged = facts.kind == DeclarationKind::Class
            && facts.has_modifier(Modifier::Static)
            && !facts.is_extension_method_host;
        flagged.then(|| STATIC_CLASS.finding(self.severity, facts.location, STATIC_CLASS_MESSAGE))
    }
}

use crate::codes::SINGLE_CONSTRUCTOR;
use crate::formatter::single_constructor_message;
use canon_rule_abi::{DeclarationFacts, DeclarationKind, Finding, Rule, RuleDefinition};

const INJECTABLE: &str = "Injectable";

/// `[Injectable]`, `[InjectableAttribute]` or a namespace-qualified form.
fn is_injectable(attribute: &str) -> bool {
    let simple = attribute.rsplit('.').next().unwrap_or(attribute);
    simple == INJECTABLE || simple.strip_suffix("Attribute") == Some(INJECTABLE)
}

/// CAP0019 - classes resolved by dependency injection have one constructor.
#[derive(Debug, Default, Clone, Copy)]
pub struct SingleConstructor;

impl Rule for SingleConstructor {
    fn definition(&self) -> &'static RuleDefinition {
        &SINGLE_CONSTRUCTOR
    }

    fn evaluate(&self, facts: &DeclarationFacts) -> Option<Finding> {
        if facts.kind != DeclarationKind::Class
            || facts.constructor_count <= 1
            || !facts.attributes.iter().any(|a| is_injectable(a))
        {
            return None;
        }
        let name = facts.name()?;
        Some(SINGLE_CONSTRUCTOR.finding(
            SINGLE_CONSTRUCTOR.default_severity,
            facts.location,
            single_constructor_message(name),
        ))
    }
}

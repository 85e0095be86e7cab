use crate::codes::EXPLICIT_ACCESS_MODIFIERS;
use crate::formatter::access_modifier_message;
use canon_rule_abi::{DeclarationFacts, DeclarationKind, Finding, Modifier, Rule, RuleDefinition};

/// CAP0001 - declarations must spell out their accessibility.
///
/// Interface members are exempt; static constructors cannot carry one.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExplicitAccessModifiers;

impl Rule for ExplicitAccessModifiers {
    fn definition(&self) -> &'static RuleDefinition {
        &EXPLICIT_ACCESS_MODIFIERS
    }

    fn evaluate(&self, facts: &DeclarationFacts) -> Option<Finding> {
        let applies = match facts.kind {
            DeclarationKind::Class | DeclarationKind::Interface => true,
            DeclarationKind::Method | DeclarationKind::Property => !facts.enclosed_in_interface,
            DeclarationKind::Constructor => !facts.has_modifier(Modifier::Static),
            _ => false,
        };
        if !applies || facts.has_access_modifier() {
            return None;
        }

        let name = facts.name()?;
        Some(EXPLICIT_ACCESS_MODIFIERS.finding(
            EXPLICIT_ACCESS_MODIFIERS.default_severity,
            facts.location,
            access_modifier_message(facts.kind, name),
        ))
    }
}

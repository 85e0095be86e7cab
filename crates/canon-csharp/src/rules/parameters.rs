use crate::codes::{CONSTRUCTOR_PARAMETERS, METHOD_PARAMETERS};
use crate::formatter::{ParameterSubject, ParameterThresholds, parameter_message};
use canon_rule_abi::{DeclarationFacts, DeclarationKind, Finding, Rule, RuleDefinition};

fn check(
    definition: &'static RuleDefinition,
    subject: ParameterSubject,
    thresholds: &ParameterThresholds,
    facts: &DeclarationFacts,
) -> Option<Finding> {
    let count = facts.parameter_count();
    let escalation = thresholds.escalate(count)?;
    Some(definition.finding(
        escalation.severity,
        facts.location,
        parameter_message(subject, count, &escalation),
    ))
}

/// CAP0015
#[derive(Debug, Default, Clone, Copy)]
pub struct ConstructorParameters {
    pub thresholds: ParameterThresholds,
}

impl Rule for ConstructorParameters {
    fn definition(&self) -> &'static RuleDefinition {
        &CONSTRUCTOR_PARAMETERS
    }

    fn evaluate(&self, facts: &DeclarationFacts) -> Option<Finding> {
        if facts.kind != DeclarationKind::Constructor {
            return None;
        }
        check(
            &CONSTRUCTOR_PARAMETERS,
            ParameterSubject::Constructor,
            &self.thresholds,
            facts,
        )
    }
}

/// CAP0016
#[derive(Debug, Default, Clone, Copy)]
pub struct MethodParameters {
    pub thresholds: ParameterThresholds,
}

impl Rule for MethodParameters {
    fn definition(&self) -> &'static RuleDefinition {
        &METHOD_PARAMETERS
    }

    fn evaluate(&self, facts: &DeclarationFacts) -> Option<Finding> {
        if facts.kind != DeclarationKind::Method {
            return None;
        }
        check(
            &METHOD_PARAMETERS,
            ParameterSubject::Method,
            &self.thresholds,
            facts,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::test_support::public;
    use canon_rule_abi::{ParameterFacts, Severity};

    fn with_parameters(kind: DeclarationKind, n: usize) -> DeclarationFacts {
        let mut facts = public(kind, "Build");
        facts.parameters = (0..n)
            .map(|i| ParameterFacts {
                name: format!("arg{i}"),
                ..ParameterFacts::default()
            })
            .collect();
        facts
    }

    #[test]
    fn boundaries() {
        let rule = MethodParameters::default();
        assert!(rule.evaluate(&with_parameters(DeclarationKind::Method, 5)).is_none());

        let warning = rule
            .evaluate(&with_parameters(DeclarationKind::Method, 6))
            .unwrap();
        assert_eq!(warning.severity, Severity::Warning);
        assert!(warning.message.contains("greater-than the recommended maximum of 5"));

        let error = rule
            .evaluate(&with_parameters(DeclarationKind::Method, 10))
            .unwrap();
        assert_eq!(error.severity, Severity::Error);
        assert!(error.message.contains("equal to the recommended maximum of 10"));

        let error = rule
            .evaluate(&with_parameters(DeclarationKind::Method, 11))
            .unwrap();
        assert!(error.message.contains("greater-than the recommended maximum of 10"));
    }

    #[test]
    fn constructor_rule_reports_constructors_only() {
        let rule = ConstructorParameters::default();
        let finding = rule
            .evaluate(&with_parameters(DeclarationKind::Constructor, 12))
            .unwrap();
        assert_eq!(finding.rule_id, "CAP0015");
        assert!(finding.message.starts_with("Constructor has a total of 12 Parameters"));
        assert!(rule
            .evaluate(&with_parameters(DeclarationKind::Method, 12))
            .is_none());
        assert!(MethodParameters::default()
            .evaluate(&with_parameters(DeclarationKind::Constructor, 12))
            .is_none());
    }

    #[test]
    fn custom_thresholds() {
        let rule = MethodParameters {
            thresholds: ParameterThresholds {
                warning_max: 2,
                error_max: 4,
            },
        };
        let finding = rule
            .evaluate(&with_parameters(DeclarationKind::Method, 4))
            .unwrap();
        assert_eq!(finding.severity, Severity::Error);
        assert!(finding.message.contains("equal to the recommended maximum of 4"));
    }
}

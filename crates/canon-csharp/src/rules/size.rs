//! Size and complexity rules.

use crate::codes::{GOD_CLASS, METHOD_COMPLEXITY, MONSTER_METHOD};
use crate::complexity::{DEFAULT_MAX_COMPLEXITY, cyclomatic_complexity};
use crate::formatter::{complexity_message, god_class_message, monster_method_message};
use canon_rule_abi::{DeclarationFacts, DeclarationKind, Finding, Rule, RuleDefinition};

pub const DEFAULT_MAX_STATEMENTS: usize = 80;
pub const DEFAULT_MAX_CLASS_MEMBERS: usize = 20;

/// CAP0007 - methods longer than `max_statements` statements.
#[derive(Debug, Clone, Copy)]
pub struct MonsterMethod {
    pub max_statements: usize,
}

impl Default for MonsterMethod {
    fn default() -> Self {
        Self {
            max_statements: DEFAULT_MAX_STATEMENTS,
        }
    }
}

impl Rule for MonsterMethod {
    fn definition(&self) -> &'static RuleDefinition {
        &MONSTER_METHOD
    }

    fn evaluate(&self, facts: &DeclarationFacts) -> Option<Finding> {
        if facts.kind != DeclarationKind::Method {
            return None;
        }
        let statements = facts.statement_count?;
        (statements > self.max_statements).then(|| {
            MONSTER_METHOD.finding(
                MONSTER_METHOD.default_severity,
                facts.location,
                monster_method_message(self.max_statements),
            )
        })
    }
}

/// CAP0008 - classes exposing too many methods and constructors.
#[derive(Debug, Clone, Copy)]
pub struct GodClass {
    pub max_members: usize,
}

impl Default for GodClass {
    fn default() -> Self {
        Self {
            max_members: DEFAULT_MAX_CLASS_MEMBERS,
        }
    }
}

impl Rule for GodClass {
    fn definition(&self) -> &'static RuleDefinition {
        &GOD_CLASS
    }

    fn evaluate(&self, facts: &DeclarationFacts) -> Option<Finding> {
        if facts.kind != DeclarationKind::Class {
            return None;
        }
        let members = facts.non_private_method_count + facts.non_private_constructor_count;
        (members > self.max_members).then(|| {
            GOD_CLASS.finding(
                GOD_CLASS.default_severity,
                facts.location,
                god_class_message(members, self.max_members),
            )
        })
    }
}

/// CAP0014 - cyclomatic complexity above `max`.
#[derive(Debug, Clone, Copy)]
pub struct MethodComplexity {
    pub max: usize,
}

impl Default for MethodComplexity {
    fn default() -> Self {
        Self {
            max: DEFAULT_MAX_COMPLEXITY,
        }
    }
}

impl Rule for MethodComplexity {
    fn definition(&self) -> &'static RuleDefinition {
        &METHOD_COMPLEXITY
    }

    fn evaluate(&self, facts: &DeclarationFacts) -> Option<Finding> {
        if facts.kind != DeclarationKind::Method {
            return None;
        }
        let score = cyclomatic_complexity(&facts.branch_counts);
        (score > self.max).then(|| {
            METHOD_COMPLEXITY.finding(
                METHOD_COMPLEXITY.default_severity,
                facts.location,
                complexity_message(score, self.max),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::test_support::public;
    use canon_rule_abi::BranchConstruct;

    #[test]
    fn monster_method_threshold() {
        let mut method = public(DeclarationKind::Method, "Run");
        method.statement_count = Some(80);
        assert!(MonsterMethod::default().evaluate(&method).is_none());

        method.statement_count = Some(81);
        let finding = MonsterMethod::default().evaluate(&method).unwrap();
        assert_eq!(finding.rule_id, "CAP0007");
        assert_eq!(
            finding.message,
            "This method is longer than 80 lines of executable code. Please consider splitting this method into smaller methods."
        );
    }

    #[test]
    fn bodiless_method_is_not_applicable() {
        let method = public(DeclarationKind::Method, "Run");
        assert!(MonsterMethod::default().evaluate(&method).is_none());
    }

    #[test]
    fn god_class_counts_methods_and_constructors() {
        let mut class = public(DeclarationKind::Class, "Everything");
        class.non_private_method_count = 19;
        class.non_private_constructor_count = 1;
        assert!(GodClass::default().evaluate(&class).is_none());

        class.non_private_constructor_count = 2;
        let finding = GodClass::default().evaluate(&class).unwrap();
        assert!(finding
            .message
            .starts_with("This class has 21 methods which is more than the recommended 20 methods."));
    }

    #[test]
    fn complexity_boundary() {
        let mut method = public(DeclarationKind::Method, "Decide");
        method.branch_counts.insert(BranchConstruct::If, 14);
        assert!(MethodComplexity::default().evaluate(&method).is_none());

        method.branch_counts.insert(BranchConstruct::LogicalOr, 1);
        let finding = MethodComplexity::default().evaluate(&method).unwrap();
        assert_eq!(finding.rule_id, "CAP0014");
        assert!(finding
            .message
            .starts_with("The cyclomatic complexity of this method is 16 which is greater than the maximum value of 15."));
    }
}

//! Curly brace enforcement for conditionals and loops.

use crate::codes::{IF_STATEMENT, LOOP_STATEMENT};
use crate::formatter::missing_braces_message;
use canon_rule_abi::{
    DeclarationFacts, DeclarationKind, EmbeddedStatement, Finding, Rule, RuleDefinition,
};

/// `return ...`, `break;` or `continue;` as the whole embedded statement.
#[must_use]
pub fn is_bare_exit(statement: &str) -> bool {
    let trimmed = statement.trim();
    if let Some(rest) = trimmed.strip_prefix("return") {
        return !rest
            .chars()
            .next()
            .is_some_and(|c| c.is_alphanumeric() || c == '_');
    }
    trimmed.starts_with("break;") || trimmed.starts_with("continue;")
}

fn needs_braces(facts: &DeclarationFacts) -> bool {
    match facts.embedded_statement.as_ref() {
        None | Some(EmbeddedStatement::Block) => false,
        Some(EmbeddedStatement::If) => facts.kind != DeclarationKind::ElseClause,
        Some(EmbeddedStatement::Single { text }) => !is_bare_exit(text),
    }
}

fn missing_braces(definition: &'static RuleDefinition, facts: &DeclarationFacts) -> Option<Finding> {
    needs_braces(facts).then(|| {
        definition.finding(
            definition.default_severity,
            facts.location,
            missing_braces_message(facts.kind.keyword()),
        )
    })
}

/// CAP0012 - `if` and `else` bodies are blocks. `else if` is fine.
#[derive(Debug, Default, Clone, Copy)]
pub struct IfStatement;

impl Rule for IfStatement {
    fn definition(&self) -> &'static RuleDefinition {
        &IF_STATEMENT
    }

    fn evaluate(&self, facts: &DeclarationFacts) -> Option<Finding> {
        match facts.kind {
            DeclarationKind::IfStatement | DeclarationKind::ElseClause => {
                missing_braces(&IF_STATEMENT, facts)
            }
            _ => None,
        }
    }
}

/// CAP0013 - `for`, `foreach` and `while` bodies are blocks.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoopStatement;

impl Rule for LoopStatement {
    fn definition(&self) -> &'static RuleDefinition {
        &LOOP_STATEMENT
    }

    fn evaluate(&self, facts: &DeclarationFacts) -> Option<Finding> {
        if facts.kind.is_loop() {
            missing_braces(&LOOP_STATEMENT, facts)
        } else {
            None
        }
    }
}

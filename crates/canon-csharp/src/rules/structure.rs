//! File layout rules, evaluated on namespace declarations.

use crate::codes::{FILE_HIERARCHY, ONE_TYPE_PER_FILE};
use crate::formatter::{FILE_HIERARCHY_MESSAGE, ONE_TYPE_PER_FILE_MESSAGE};
use canon_rule_abi::{DeclarationFacts, DeclarationKind, Finding, Rule, RuleDefinition};

/// CAP0011 - one class, interface or enum per namespace block.
#[derive(Debug, Default, Clone, Copy)]
pub struct OneTypePerFile;

impl Rule for OneTypePerFile {
    fn definition(&self) -> &'static RuleDefinition {
        &ONE_TYPE_PER_FILE
    }

    fn evaluate(&self, facts: &DeclarationFacts) -> Option<Finding> {
        (facts.kind == DeclarationKind::Namespace && facts.sibling_type_count > 1).then(|| {
            ONE_TYPE_PER_FILE.finding(
                ONE_TYPE_PER_FILE.default_severity,
                facts.location,
                ONE_TYPE_PER_FILE_MESSAGE,
            )
        })
    }
}

/// CAP0010 - the namespace appears in the file path.
///
/// Both separators are turned into dots, so `src/Acme/Orders/Order.cs`
/// matches namespace `Acme.Orders`. Case-sensitive.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileHierarchy;

impl Rule for FileHierarchy {
    fn definition(&self) -> &'static RuleDefinition {
        &FILE_HIERARCHY
    }

    fn evaluate(&self, facts: &DeclarationFacts) -> Option<Finding> {
        if facts.kind != DeclarationKind::Namespace {
            return None;
        }
        let namespace = facts.name()?;
        let path = facts.file_path.as_deref()?;

        let dotted = path.replace(['\\', '/'], ".");
        if dotted.contains(&format!("{namespace}.")) {
            return None;
        }

        Some(FILE_HIERARCHY.finding(
            FILE_HIERARCHY.default_severity,
            facts.location,
            FILE_HIERARCHY_MESSAGE,
        ))
    }
}

#![warn(rust_2024_compatibility, clippy::all)]

pub mod config;
pub mod generated;

use canon_rule_abi::{
    BoxRule, DeclarationFacts, DeclarationKind, Finding, Findings, RuleDefinition,
};
use rayon::prelude::*;
use serde::Deserialize;
use std::borrow::Cow;

pub use config::{CanonConfig, ConfigError, RuleSettings};
pub use generated::is_generated_file;

/// Errors raised at the engine's entry points.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("invalid argument: {parameter} must not be empty")]
    InvalidArgument { parameter: &'static str },
}

/// Facts emitted by the syntax walker for one C# source file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FactsDocument {
    pub path: String,
    #[serde(default)]
    pub declarations: Vec<DeclarationFacts>,
}

/// The Engine: owns rule instances and evaluates them over facts.
pub struct Engine {
    rules: Vec<BoxRule>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    #[must_use]
    pub const fn new() -> Self {
        Self { rules: Vec::new() }
    }

    #[must_use]
    pub fn with_rule(mut self, rule: BoxRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn add_rule(&mut self, rule: BoxRule) {
        self.rules.push(rule);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Definitions of the loaded rules, in registration order.
    pub fn definitions(&self) -> impl Iterator<Item = &'static RuleDefinition> + '_ {
        self.rules.iter().map(|r| r.definition())
    }

    /// Run every rule against one declaration.
    ///
    /// Findings come back in rule registration order.
    #[must_use]
    pub fn evaluate(&self, facts: &DeclarationFacts) -> Findings {
        self.rules.iter().filter_map(|r| r.evaluate(facts)).collect()
    }

    /// Evaluate all declarations of a document.
    ///
    /// Generated files produce no findings. Namespace declarations without a
    /// `file_path` inherit the document path.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidArgument` if the document has an empty path.
    pub fn evaluate_document(&self, document: &FactsDocument) -> Result<Findings, AnalysisError> {
        Ok(self
            .evaluate_document_indexed(document)?
            .into_iter()
            .map(|(_, finding)| finding)
            .collect())
    }

    /// Like [`Engine::evaluate_document`], pairing each finding with the
    /// index of the declaration that raised it.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidArgument` if the document has an empty path.
    pub fn evaluate_document_indexed(
        &self,
        document: &FactsDocument,
    ) -> Result<Vec<(usize, Finding)>, AnalysisError> {
        if document.path.trim().is_empty() {
            return Err(AnalysisError::InvalidArgument { parameter: "path" });
        }

        if is_generated_file(&document.path) {
            tracing::debug!("skipping generated file {}", document.path);
            return Ok(Vec::new());
        }

        let findings: Vec<(usize, Finding)> = document
            .declarations
            .par_iter()
            .enumerate()
            .flat_map_iter(|(index, facts)| {
                self.evaluate(&with_document_path(facts, &document.path))
                    .into_iter()
                    .map(move |finding| (index, finding))
            })
            .collect();

        tracing::debug!(
            "evaluated {} declarations in {}: {} findings",
            document.declarations.len(),
            document.path,
            findings.len()
        );

        Ok(findings)
    }
}

fn with_document_path<'a>(facts: &'a DeclarationFacts, path: &str) -> Cow<'a, DeclarationFacts> {
    if facts.kind == DeclarationKind::Namespace && facts.file_path.is_none() {
        let mut owned = facts.clone();
        owned.file_path = Some(path.to_string());
        Cow::Owned(owned)
    } else {
        Cow::Borrowed(facts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use canon_rule_abi::{Category, Location, Rule, Severity};

    static STARTS_WITH_X: RuleDefinition = RuleDefinition {
        code: "CAP0900",
        name: "StartsWithX",
        category: Category::CodeStructure,
        default_severity: Severity::Error,
        message_template: "{name}: {0}",
        enabled_by_default: true,
    };

    static PATH_ECHO: RuleDefinition = RuleDefinition {
        code: "CAP0901",
        name: "PathEcho",
        category: Category::CodeStructure,
        default_severity: Severity::Warning,
        message_template: "{name}: {0}",
        enabled_by_default: true,
    };

    /// Flags every declaration whose name starts with `x`.
    struct XRule;

    impl Rule for XRule {
        fn definition(&self) -> &'static RuleDefinition {
            &STARTS_WITH_X
        }

        fn evaluate(&self, facts: &DeclarationFacts) -> Option<Finding> {
            let name = facts.name()?;
            name.starts_with('x').then(|| {
                STARTS_WITH_X.finding(Severity::Error, facts.location, format!("{name} starts with x"))
            })
        }
    }

    /// Reports the file path it sees on namespaces.
    struct PathRule;

    impl Rule for PathRule {
        fn definition(&self) -> &'static RuleDefinition {
            &PATH_ECHO
        }

        fn evaluate(&self, facts: &DeclarationFacts) -> Option<Finding> {
            if facts.kind != DeclarationKind::Namespace {
                return None;
            }
            let path = facts.file_path.as_deref()?;
            Some(PATH_ECHO.finding(Severity::Warning, Location::default(), path))
        }
    }

    fn engine() -> Engine {
        Engine::new()
            .with_rule(Box::new(XRule))
            .with_rule(Box::new(PathRule))
    }

    fn declaration(name: &str, line: usize) -> DeclarationFacts {
        let mut facts = DeclarationFacts::new(DeclarationKind::Class, name);
        facts.location = Location { line, column: 1 };
        facts
    }

    #[test]
    fn lists_definitions_in_registration_order() {
        let codes: Vec<_> = engine().definitions().map(|d| d.code).collect();
        assert_eq!(codes, vec!["CAP0900", "CAP0901"]);
    }

    #[test]
    fn evaluate_is_deterministic() {
        let engine = engine();
        let facts = declaration("xray", 3);
        assert_eq!(engine.evaluate(&facts), engine.evaluate(&facts));
        assert_eq!(engine.evaluate(&facts).len(), 1);
    }

    #[test]
    fn document_findings_keep_declaration_order() {
        let document = FactsDocument {
            path: "src/Orders.cs".into(),
            declarations: (0..64).map(|i| declaration(&format!("x{i}"), i)).collect(),
        };

        let findings = engine().evaluate_document(&document).unwrap();
        let lines: Vec<_> = findings.iter().map(|f| f.location.line).collect();
        assert_eq!(lines, (0..64).collect::<Vec<_>>());
    }

    #[test]
    fn indexed_findings_point_at_declarations() {
        let document = FactsDocument {
            path: "src/Orders.cs".into(),
            declarations: vec![
                declaration("Order", 1),
                declaration("xray", 2),
                declaration("Line", 3),
                declaration("xenon", 4),
            ],
        };

        let indexes: Vec<_> = engine()
            .evaluate_document_indexed(&document)
            .unwrap()
            .into_iter()
            .map(|(index, _)| index)
            .collect();
        assert_eq!(indexes, vec![1, 3]);
    }

    #[test]
    fn generated_documents_are_skipped() {
        let document = FactsDocument {
            path: "src/obj/Debug/Orders.cs".into(),
            declarations: vec![declaration("xray", 1)],
        };

        assert!(engine().evaluate_document(&document).unwrap().is_empty());
    }

    #[test]
    fn empty_path_is_invalid_argument() {
        let document = FactsDocument::default();
        let err = engine().evaluate_document(&document).unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::InvalidArgument { parameter: "path" }
        ));
    }

    #[test]
    fn namespaces_inherit_document_path() {
        let document = FactsDocument {
            path: "src/Orders/Order.cs".into(),
            declarations: vec![DeclarationFacts::new(DeclarationKind::Namespace, "Orders")],
        };

        let findings = engine().evaluate_document(&document).unwrap();
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].message, "src/Orders/Order.cs");
    }

    #[test]
    fn deserializes_document() {
        let json = r#"{"path": "A.cs", "declarations": [{"kind": "class", "name": "A"}]}"#;
        let document: FactsDocument = serde_json::from_str(json).unwrap();
        assert_eq!(document.path, "A.cs");
        assert_eq!(document.declarations.len(), 1);
    }
}

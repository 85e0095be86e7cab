use crate::codes::XML_COMMENTS;
use crate::formatter::missing_documentation_message;
use canon_rule_abi::{
    CommentKind, DeclarationFacts, DeclarationKind, Finding, Modifier, Rule, RuleDefinition,
};

/// A non-empty `<summary>`, or failing that exactly one regular leading
/// comment that has some content.
#[must_use]
pub fn has_valid_comments(facts: &DeclarationFacts) -> bool {
    let summary_present = facts
        .doc_comment
        .as_ref()
        .and_then(|doc| doc.summary.as_deref())
        .is_some_and(|summary| !summary.replace("///", "").trim().is_empty());
    if summary_present {
        return true;
    }

    let mut regular = facts
        .leading_comments
        .iter()
        .filter(|c| c.kind != CommentKind::XmlDoc);
    match (regular.next(), regular.next()) {
        (Some(only), None) => {
            let content = only.text.replace(' ', "");
            let content = content.trim();
            content != "//" && content != "/**/"
        }
        _ => false,
    }
}

/// CAP0002 - public API carries documentation.
#[derive(Debug, Default, Clone, Copy)]
pub struct XmlComments;

impl Rule for XmlComments {
    fn definition(&self) -> &'static RuleDefinition {
        &XML_COMMENTS
    }

    fn evaluate(&self, facts: &DeclarationFacts) -> Option<Finding> {
        let applies = match facts.kind {
            DeclarationKind::Class => facts.has_modifier(Modifier::Public),
            DeclarationKind::Method => {
                facts.has_modifier(Modifier::Public) || facts.enclosed_in_interface
            }
            DeclarationKind::Interface => true,
            _ => false,
        };
        if !applies || has_valid_comments(facts) {
            return None;
        }

        let name = facts.name()?;
        Some(XML_COMMENTS.finding(
            XML_COMMENTS.default_severity,
            facts.location,
            missing_documentation_message(name),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::test_support::{facts, private, public};
    use canon_rule_abi::{CommentSpan, DocComment, Severity};

    fn documented(mut facts: DeclarationFacts, summary: &str) -> DeclarationFacts {
        facts.doc_comment = Some(DocComment {
            text: format!("/// <summary>{summary}</summary>"),
            summary: Some(summary.to_string()),
        });
        facts
    }

    #[test]
    fn public_class_without_summary() {
        let finding = XmlComments
            .evaluate(&public(DeclarationKind::Class, "Order"))
            .unwrap();
        assert_eq!(finding.rule_id, "CAP0002");
        assert_eq!(finding.severity, Severity::Warning);
        assert_eq!(finding.message, "Order does not include valid comments.");
    }

    #[test]
    fn summary_satisfies() {
        let class = documented(public(DeclarationKind::Class, "Order"), "An order.");
        assert!(XmlComments.evaluate(&class).is_none());
    }

    #[test]
    fn empty_summary_does_not_satisfy() {
        let class = documented(public(DeclarationKind::Class, "Order"), "\n    /// \n    ");
        assert!(XmlComments.evaluate(&class).is_some());
    }

    #[test]
    fn single_regular_comment_satisfies() {
        let mut method = public(DeclarationKind::Method, "Run");
        method.leading_comments = vec![CommentSpan::single_line("// Runs the job")];
        assert!(XmlComments.evaluate(&method).is_none());

        method.leading_comments = vec![CommentSpan::single_line("//  ")];
        assert!(XmlComments.evaluate(&method).is_some());

        method.leading_comments = vec![CommentSpan::multi_line("/* */")];
        assert!(XmlComments.evaluate(&method).is_some());
    }

    #[test]
    fn two_regular_comments_do_not_satisfy() {
        let mut method = public(DeclarationKind::Method, "Run");
        method.leading_comments = vec![
            CommentSpan::single_line("// one"),
            CommentSpan::single_line("// two"),
        ];
        assert!(XmlComments.evaluate(&method).is_some());
    }

    #[test]
    fn scope() {
        assert!(XmlComments
            .evaluate(&private(DeclarationKind::Method, "Run"))
            .is_none());
        assert!(XmlComments
            .evaluate(&facts(DeclarationKind::Class, "Order"))
            .is_none());

        let mut member = facts(DeclarationKind::Method, "Run");
        member.enclosed_in_interface = true;
        assert!(XmlComments.evaluate(&member).is_some());

        assert!(XmlComments
            .evaluate(&facts(DeclarationKind::Interface, "IRunner"))
            .is_some());
    }
}

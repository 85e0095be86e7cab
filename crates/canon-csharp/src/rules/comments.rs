use crate::codes::COMMENTS;
use crate::comments::{classify_comments, count_lines};
use crate::formatter::{CommentViolation, documentation_too_long_message};
use canon_rule_abi::{DeclarationFacts, DeclarationKind, Finding, Rule, RuleDefinition};

pub const DEFAULT_MAX_DOCUMENTATION_LINES: usize = 30;
pub const DEFAULT_MAX_COMMENT_LINES: usize = 5;

/// First comment discipline violation on a local variable, if any.
#[must_use]
pub fn comment_violation(facts: &DeclarationFacts, max_lines: usize) -> Option<CommentViolation> {
    let classified = classify_comments(&facts.leading_comments, &facts.trailing_comments);

    if !classified.leading.is_empty() && !classified.trailing.is_empty() {
        return Some(CommentViolation::LeadingAndTrailing);
    }

    let side = if classified.leading.is_empty() {
        &classified.trailing
    } else {
        &classified.leading
    };

    if side.is_mixed() {
        return Some(CommentViolation::MixedKinds);
    }
    if side.multi_line.len() > 1 {
        return Some(CommentViolation::MultipleBlocks);
    }
    let too_long = side
        .multi_line
        .first()
        .is_some_and(|block| count_lines(&block.text) > max_lines);
    if too_long || side.single_line.len() > max_lines {
        return Some(CommentViolation::TooManyLines { max: max_lines });
    }

    None
}

/// CAP0006 - documentation length on members, comment discipline on locals.
#[derive(Debug, Clone, Copy)]
pub struct Comments {
    pub max_documentation_lines: usize,
    pub max_comment_lines: usize,
}

impl Default for Comments {
    fn default() -> Self {
        Self {
            max_documentation_lines: DEFAULT_MAX_DOCUMENTATION_LINES,
            max_comment_lines: DEFAULT_MAX_COMMENT_LINES,
        }
    }
}

impl Comments {
    fn check_documentation(&self, facts: &DeclarationFacts, name: &str) -> Option<String> {
        let doc = facts.doc_comment.as_ref()?;
        (count_lines(&doc.text) > self.max_documentation_lines)
            .then(|| documentation_too_long_message(name, self.max_documentation_lines))
    }
}

impl Rule for Comments {
    fn definition(&self) -> &'static RuleDefinition {
        &COMMENTS
    }

    fn evaluate(&self, facts: &DeclarationFacts) -> Option<Finding> {
        let name = facts.name()?;
        let message = match facts.kind {
            DeclarationKind::Class
            | DeclarationKind::Interface
            | DeclarationKind::Method
            | DeclarationKind::Constructor
            | DeclarationKind::Property => self.check_documentation(facts, name)?,
            DeclarationKind::LocalVariable => {
                comment_violation(facts, self.max_comment_lines)?.message(name)
            }
            _ => return None,
        };

        Some(COMMENTS.finding(COMMENTS.default_severity, facts.location, message))
    }
}

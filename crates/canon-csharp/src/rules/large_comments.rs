use crate::codes::LARGE_COMMENTED_CODE;
use crate::comments::{count_newlines, longest_comment_run, split_side};
use crate::formatter::REDUNDANT_CODE_MESSAGE;
use canon_rule_abi::{CommentSpan, DeclarationFacts, DeclarationKind, Finding, Rule, RuleDefinition};

pub const DEFAULT_MAX_COMMENTED_LINES: usize = 20;

/// CAP0005 - large blocks of commented-out code.
#[derive(Debug, Clone, Copy)]
pub struct LargeCommentedCode {
    pub max_lines: usize,
}

impl Default for LargeCommentedCode {
    fn default() -> Self {
        Self {
            max_lines: DEFAULT_MAX_COMMENTED_LINES,
        }
    }
}

impl LargeCommentedCode {
    /// A block comment spanning `max_lines` lines wins outright; single-line
    /// comments trip the rule through a long run in the body text or by count.
    fn is_redundant(&self, comments: &[CommentSpan], body_text: Option<&str>) -> bool {
        let side = split_side(comments);

        if side
            .multi_line
            .iter()
            .any(|block| count_newlines(&block.text) >= self.max_lines)
        {
            return true;
        }

        if side.single_line.is_empty() {
            return false;
        }

        body_text.is_some_and(|body| longest_comment_run(body) >= self.max_lines)
            || side.single_line.len() > self.max_lines
    }
}

impl Rule for LargeCommentedCode {
    fn definition(&self) -> &'static RuleDefinition {
        &LARGE_COMMENTED_CODE
    }

    fn evaluate(&self, facts: &DeclarationFacts) -> Option<Finding> {
        let has_body = match facts.kind {
            DeclarationKind::Method
            | DeclarationKind::Constructor
            | DeclarationKind::Class
            | DeclarationKind::Interface => true,
            DeclarationKind::Field | DeclarationKind::Property => false,
            _ => return None,
        };

        let redundant = (has_body
            && self.is_redundant(&facts.body_comments, facts.body_text.as_deref()))
            || self.is_redundant(&facts.leading_comments, None);

        redundant.then(|| {
            LARGE_COMMENTED_CODE.finding(
                LARGE_COMMENTED_CODE.default_severity,
                facts.location,
                REDUNDANT_CODE_MESSAGE,
            )
        })
    }
}

//! Line counting and comment classification.

use canon_rule_abi::{CommentKind, CommentSpan};
use memchr::memchr_iter;

/// Count non-empty lines. `\r\n` and `\n` both end a line; empty segments
/// (including the one after a trailing newline) are not counted.
#[must_use]
pub fn count_lines(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut count = 0;
    let mut line_start = 0;

    for nl in memchr_iter(b'\n', bytes) {
        if !strip_cr(&text[line_start..nl]).is_empty() {
            count += 1;
        }
        line_start = nl + 1;
    }

    // Final line without trailing newline.
    if line_start < bytes.len() && !strip_cr(&text[line_start..]).is_empty() {
        count += 1;
    }

    count
}

/// Raw newline tally.
#[must_use]
pub fn count_newlines(text: &str) -> usize {
    memchr_iter(b'\n', text.as_bytes()).count()
}

fn strip_cr(line: &str) -> &str {
    line.strip_suffix('\r').unwrap_or(line)
}

/// Comments on one side of a declaration, split by kind.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CommentSide<'a> {
    pub single_line: Vec<&'a CommentSpan>,
    pub multi_line: Vec<&'a CommentSpan>,
}

impl CommentSide<'_> {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.single_line.is_empty() && self.multi_line.is_empty()
    }

    #[must_use]
    pub fn is_mixed(&self) -> bool {
        !self.single_line.is_empty() && !self.multi_line.is_empty()
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ClassifiedComments<'a> {
    pub leading: CommentSide<'a>,
    pub trailing: CommentSide<'a>,
}

/// Partition comment trivia by side and kind. Documentation comments are
/// not regular comments and are dropped.
#[must_use]
pub fn classify_comments<'a>(
    leading: &'a [CommentSpan],
    trailing: &'a [CommentSpan],
) -> ClassifiedComments<'a> {
    ClassifiedComments {
        leading: split_side(leading),
        trailing: split_side(trailing),
    }
}

/// Split one side only.
#[must_use]
pub fn split_side(spans: &[CommentSpan]) -> CommentSide<'_> {
    let mut side = CommentSide::default();
    for span in spans {
        match span.kind {
            CommentKind::SingleLine => side.single_line.push(span),
            CommentKind::MultiLine => side.multi_line.push(span),
            CommentKind::XmlDoc => {}
        }
    }
    side
}

/// Longest run of lines that start with `//`. Blank lines do not break a run.
#[must_use]
pub fn longest_comment_run(text: &str) -> usize {
    let mut longest = 0;
    let mut current = 0;

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed.starts_with("//") {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }

    longest
}

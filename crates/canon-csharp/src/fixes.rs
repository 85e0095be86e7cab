//! Automated fix proposals. The host applies them; nothing here edits code.

use crate::codes::RuleCode;
use crate::pattern::NameShape;
use crate::rewrite::{prefix_underscore, rewrite_casing, rewrite_pascal};
use crate::rules::shape_for;
use canon_rule_abi::{DeclarationFacts, Finding, Modifier};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Fix {
    InsertModifier { modifier: Modifier },
    Rename { from: String, to: String },
}

impl fmt::Display for Fix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsertModifier { modifier } => {
                write!(f, "insert `{}` modifier", modifier.keyword())
            }
            Self::Rename { from, to } => write!(f, "rename `{from}` to `{to}`"),
        }
    }
}

/// Fixes for a finding raised on `facts`. Empty when the rule has no fix or
/// the rewrite would not change anything.
#[must_use]
pub fn propose_fixes(finding: &Finding, facts: &DeclarationFacts) -> Vec<Fix> {
    let Some(code) = RuleCode::lookup(&finding.rule_id) else {
        return Vec::new();
    };

    match code {
        RuleCode::ExplicitAccessModifiers => [Modifier::Public, Modifier::Internal, Modifier::Protected]
            .into_iter()
            .map(|modifier| Fix::InsertModifier { modifier })
            .collect(),
        RuleCode::PrivateFieldNamingUnderscore => rename(facts, |name| {
            prefix_underscore(&rewrite_casing(name.trim_start_matches('_')))
        }),
        RuleCode::PrivateFieldNameCasing => rename(facts, rewrite_casing),
        RuleCode::NamingConvention if shape_for(facts) == Some(NameShape::NonPrivateMember) => {
            rename(facts, rewrite_pascal)
        }
        _ => Vec::new(),
    }
}

fn rename(facts: &DeclarationFacts, rewrite: impl Fn(&str) -> String) -> Vec<Fix> {
    let Some(name) = facts.name() else {
        return Vec::new();
    };
    let to = rewrite(name);
    if to == name {
        return Vec::new();
    }
    vec![Fix::Rename {
        from: name.to_string(),
        to,
    }]
}

//! Cyclomatic complexity.

use canon_rule_abi::BranchConstruct;
use std::collections::BTreeMap;

pub const DEFAULT_MAX_COMPLEXITY: usize = 15;

/// Flat additive score: 1 plus one per branching construct.
#[must_use]
pub fn cyclomatic_complexity(branch_counts: &BTreeMap<BranchConstruct, usize>) -> usize {
    1 + BranchConstruct::ALL
        .iter()
        .filter_map(|construct| branch_counts.get(construct))
        .sum::<usize>()
}

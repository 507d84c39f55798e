//! Forbidden substring detection rule.
//!
//! Scans bundle values for substrings from a declarative denylist of
//! (forbidden, replacement) pairs, flagging probable misspellings such as
//! 帐户 where 账户 is expected. Matching is literal (not regex),
//! case-sensitive, and Unicode-aware.

use crate::bundle::Bundle;
use crate::config::PolicyRule;
use crate::issues::ForbiddenSubstringFinding;

/// Scan every value of `bundle` against every rule.
///
/// Rules are evaluated in declared order and scanning does not stop at the
/// first match: a value containing two different forbidden substrings yields
/// two findings. One finding is emitted per matching (key, rule) pair, at
/// the first occurrence of the substring.
pub fn check_forbidden_substrings(
    bundle: &Bundle,
    rules: &[PolicyRule],
) -> Vec<ForbiddenSubstringFinding> {
    let mut findings = Vec::new();
    for entry in bundle.entries() {
        for rule in rules {
            if let Some(pos) = entry.value.find(&rule.forbidden) {
                let match_col = entry.value[..pos].chars().count() + 1;
                findings.push(ForbiddenSubstringFinding {
                    context: entry.clone(),
                    forbidden: rule.forbidden.clone(),
                    replacement: rule.replacement.clone(),
                    match_col,
                });
            }
        }
    }
    findings
}

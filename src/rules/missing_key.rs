//! Missing key detection rule.
//!
//! Detects translation keys that exist in the driving bundle but are missing
//! from a reference bundle. The check is asymmetric on purpose: the driving
//! bundle is the authoritative superset of required keys, so keys present
//! only in a reference bundle are never reported.

use crate::bundle::Bundle;
use crate::issues::MissingKeyFinding;

/// Check one reference bundle for completeness against the driving bundle.
///
/// Findings follow the driving bundle's key order, top to bottom. The caller
/// invokes this once per reference bundle, in declared order.
pub fn check_missing_keys(driving: &Bundle, reference: &Bundle) -> Vec<MissingKeyFinding> {
    driving
        .entries()
        .filter(|entry| !reference.contains_key(&entry.key))
        .map(|entry| MissingKeyFinding {
            context: entry.clone(),
            reference: reference.name().to_string(),
        })
        .collect()
}

//! The validation run itself.
//!
//! Loads every configured bundle (fail-fast: a load error aborts before any
//! checking and no report is produced), runs the missing-key check once per
//! (driving, reference) pair in declared order, then the forbidden-substring
//! scan over the driving bundle, and aggregates everything into a [`Report`].

use std::path::Path;

use anyhow::Result;

use crate::bundle::Bundle;
use crate::config::Config;
use crate::issues::Finding;
use crate::report::Report;
use crate::rules::{forbidden::check_forbidden_substrings, missing_key::check_missing_keys};

/// Entry count of one checked bundle, for verbose output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleSummary {
    pub name: String,
    pub entries: usize,
}

/// Result of one validation run.
#[derive(Debug)]
pub struct RunOutcome {
    pub report: Report,
    /// Driving bundle first, then references in declared order.
    pub checked: Vec<BundleSummary>,
}

pub fn run(config: &Config) -> Result<RunOutcome> {
    let driving = Bundle::load(Path::new(&config.driving))?;
    let references = config
        .references
        .iter()
        .map(|path| Bundle::load(Path::new(path)))
        .collect::<Result<Vec<_>>>()?;

    let mut groups: Vec<Vec<Finding>> = Vec::new();
    for reference in &references {
        groups.push(
            check_missing_keys(&driving, reference)
                .into_iter()
                .map(Finding::MissingKey)
                .collect(),
        );
    }
    groups.push(
        check_forbidden_substrings(&driving, &config.rules)
            .into_iter()
            .map(Finding::ForbiddenSubstring)
            .collect(),
    );

    let checked = std::iter::once(&driving)
        .chain(references.iter())
        .map(|bundle| BundleSummary {
            name: bundle.name().to_string(),
            entries: bundle.len(),
        })
        .collect();

    Ok(RunOutcome {
        report: Report::aggregate(groups),
        checked,
    })
}

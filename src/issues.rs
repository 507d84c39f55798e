//! Finding types for bundle consistency checks.
//!
//! Each finding is self-contained: it carries the driving-bundle entry it was
//! raised for plus everything the reporter needs to display it. Findings are
//! severity-free warnings; the run fails iff at least one finding exists.

use enum_dispatch::enum_dispatch;
use unicode_width::UnicodeWidthStr;

use crate::bundle::EntryContext;

// ============================================================
// Rule
// ============================================================

/// Rule identifier for each finding kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    MissingKey,
    ForbiddenSubstring,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::MissingKey => write!(f, "missing-key"),
            Rule::ForbiddenSubstring => write!(f, "forbidden-substring"),
        }
    }
}

// ============================================================
// Finding Types
// ============================================================

/// Key present in the driving bundle but absent from a reference bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingKeyFinding {
    /// The entry in the driving bundle.
    pub context: EntryContext,
    /// Name of the reference bundle missing this key.
    pub reference: String,
}

impl MissingKeyFinding {
    pub fn rule() -> Rule {
        Rule::MissingKey
    }
}

/// Value containing a forbidden substring (probable misspelling).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForbiddenSubstringFinding {
    /// The entry whose value matched.
    pub context: EntryContext,
    /// The forbidden substring that matched.
    pub forbidden: String,
    /// The suggested replacement.
    pub replacement: String,
    /// 1-based character offset of the match within the value.
    pub match_col: usize,
}

impl ForbiddenSubstringFinding {
    pub fn rule() -> Rule {
        Rule::ForbiddenSubstring
    }
}

// ============================================================
// Finding Enum
// ============================================================

/// A consistency or content-policy violation found during a run.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    MissingKey(MissingKeyFinding),
    ForbiddenSubstring(ForbiddenSubstringFinding),
}

impl Finding {
    pub fn rule(&self) -> Rule {
        match self {
            Finding::MissingKey(_) => MissingKeyFinding::rule(),
            Finding::ForbiddenSubstring(_) => ForbiddenSubstringFinding::rule(),
        }
    }

    /// The key this finding was raised for.
    pub fn key(&self) -> &str {
        &self.context().key
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Trait for types that can be reported to CLI.
///
/// Implemented by all finding types to provide a consistent interface for the
/// report functions. Uses `enum_dispatch` for zero-cost dispatch on the
/// `Finding` enum.
#[enum_dispatch]
pub trait Report {
    /// The driving-bundle entry this finding points at.
    fn context(&self) -> &EntryContext;

    /// Primary message to display (the key name).
    fn message(&self) -> String;

    /// Rule identifier.
    fn report_rule(&self) -> Rule;

    /// Details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }

    /// Span to highlight within the entry value: (1-based char offset,
    /// display width). `None` if the value is not shown.
    fn value_span(&self) -> Option<(usize, usize)> {
        None
    }
}

impl Report for MissingKeyFinding {
    fn context(&self) -> &EntryContext {
        &self.context
    }

    fn message(&self) -> String {
        self.context.key.clone()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "(\"{}\") missing from {}",
            self.context.value, self.reference
        ))
    }
}

impl Report for ForbiddenSubstringFinding {
    fn context(&self) -> &EntryContext {
        &self.context
    }

    fn message(&self) -> String {
        self.context.key.clone()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "\"{}\" should be replaced by \"{}\"",
            self.forbidden, self.replacement
        ))
    }

    fn value_span(&self) -> Option<(usize, usize)> {
        let width = UnicodeWidthStr::width(self.forbidden.as_str()).max(1);
        Some((self.match_col, width))
    }
}

// ============================================================
// Tests
// ============================================================

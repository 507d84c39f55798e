//! Report aggregation, formatting and printing.
//!
//! A [`Report`] is the ordered sequence of findings produced by one
//! validation run, plus the derived pass/fail state. Rendering displays each
//! finding in cargo-style format with its bundle location and, for content
//! findings, the offending value with a caret under the match.
//!
//! Findings are printed in aggregation order: driving-bundle key order within
//! each check, reference bundles in declared order, content findings last.
//! The renderer never re-sorts.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use crate::issues::{Finding, Report as ReportFinding};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// The outcome of one validation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    findings: Vec<Finding>,
}

impl Report {
    /// Concatenate finding groups, preserving the relative order of each
    /// source group.
    pub fn aggregate(groups: impl IntoIterator<Item = Vec<Finding>>) -> Report {
        Report {
            findings: groups.into_iter().flatten().collect(),
        }
    }

    /// True iff the run produced no findings.
    pub fn passed(&self) -> bool {
        self.findings.is_empty()
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    pub fn len(&self) -> usize {
        self.findings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }
}

/// Print findings in cargo-style format to stdout.
pub fn report(findings: &[Finding]) {
    report_to(findings, &mut io::stdout().lock());
}

/// Print findings to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn report_to<W: Write>(findings: &[Finding], writer: &mut W) {
    if findings.is_empty() {
        return;
    }

    // Calculate max line number width for alignment
    let max_line_width = calculate_max_line_width(findings);

    for finding in findings {
        print_finding(finding, writer, max_line_width);
    }

    print_summary(findings, writer);
}

/// Print a success message when no findings exist.
pub fn print_success(bundles_checked: usize) {
    print_success_to(bundles_checked, &mut io::stdout().lock());
}

/// Print a success message to a custom writer.
pub fn print_success_to<W: Write>(bundles_checked: usize, writer: &mut W) {
    let msg = format!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} {} - no issues found",
            bundles_checked,
            if bundles_checked == 1 {
                "bundle"
            } else {
                "bundles"
            }
        )
        .green()
    );
    let _ = writeln!(writer, "{}", msg);
}

// ============================================================
// Internal Functions
// ============================================================

fn print_finding<W: Write>(finding: &Finding, writer: &mut W, max_line_width: usize) {
    let ctx = finding.context();

    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        "warning".bold().yellow(),
        finding.message(),
        finding.report_rule().to_string().dimmed().cyan()
    );

    // Clickable location: --> path:line:col
    let _ = writeln!(
        writer,
        "  {} {}:{}:{}",
        "-->".blue(),
        ctx.file_path(),
        ctx.line(),
        ctx.col()
    );

    // Show the value with a caret under the matched span
    if let Some((col, span_width)) = finding.value_span() {
        let line = ctx.line();
        let _ = writeln!(
            writer,
            "{:>width$} {}",
            "",
            "|".blue(),
            width = max_line_width
        );
        let _ = writeln!(
            writer,
            "{:>width$} {} {}",
            line.to_string().blue(),
            "|".blue(),
            ctx.value,
            width = max_line_width
        );

        // Caret aligned by display width so CJK values line up (col is 1-based)
        let prefix: String = ctx.value.chars().take(col.saturating_sub(1)).collect();
        let caret_padding = UnicodeWidthStr::width(prefix.as_str());
        let carets = "^".repeat(span_width);
        let _ = writeln!(
            writer,
            "{:>width$} {} {:>padding$}{}",
            "",
            "|".blue(),
            "",
            carets.as_str().yellow(),
            width = max_line_width,
            padding = caret_padding
        );
    }

    // Details (cargo-style note)
    if let Some(details) = finding.details() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "note:".bold(),
            details,
            width = max_line_width
        );
    }

    let _ = writeln!(writer); // Empty line between findings
}

fn print_summary<W: Write>(findings: &[Finding], writer: &mut W) {
    let total = findings.len();
    if total > 0 {
        let _ = writeln!(
            writer,
            "{} {} {} found",
            FAILURE_MARK.red(),
            total,
            if total == 1 { "problem" } else { "problems" }
        );
    }
}

fn calculate_max_line_width(findings: &[Finding]) -> usize {
    findings
        .iter()
        .map(|f| f.context().line())
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1)
}

// ============================================================
// Tests
// ============================================================

//! Human-readable report rendering.
//!
//! Pure string building: printing happens in the CLI layer. The output is
//! line-oriented and deterministic: per-category headers, per-file
//! markers, per-repository sections, final summary counts. No
//! machine-readable format is guaranteed; consumers needing structured
//! output should use the in-memory report types directly.

use crate::models::{CATEGORIES, OwnershipReport, ValidationOutcome, ValidationReport};
use std::fmt::Write;

/// Renders the schema track report.
///
/// Categories appear in declaration order, files in traversal order.
/// Skipped documents are listed only when `show_skipped` is set.
#[must_use]
pub fn render_validation_report(report: &ValidationReport, show_skipped: bool) -> String {
    let mut out = String::new();

    for category in CATEGORIES {
        let _ = writeln!(out, "Validating {}/", category.name);
        for record in report.records.iter().filter(|r| r.category == category.name) {
            let name = record.path.file_name().map_or_else(
                || record.path.display().to_string(),
                |n| n.to_string_lossy().into_owned(),
            );
            match &record.outcome {
                ValidationOutcome::Pass => {
                    let _ = writeln!(out, "  \u{2713} {name}");
                },
                ValidationOutcome::Skipped => {
                    if show_skipped {
                        let _ = writeln!(out, "  \u{00b7} {name} (skipped)");
                    }
                },
                ValidationOutcome::Fail { message, .. } => {
                    let _ = writeln!(out, "  \u{2717} {name}: {message}");
                },
            }
        }
        out.push('\n');
    }

    if report.is_success() {
        let _ = writeln!(
            out,
            "All configs validated successfully ({} passed, {} skipped)",
            report.passed(),
            report.skipped()
        );
    } else {
        let _ = writeln!(
            out,
            "{} validation error(s) found ({} passed, {} skipped)",
            report.failed(),
            report.passed(),
            report.skipped()
        );
    }

    out
}

/// Renders the ownership track report.
#[must_use]
pub fn render_ownership_report(report: &OwnershipReport) -> String {
    let mut out = String::new();

    for repo in &report.repos {
        let _ = writeln!(out, "{}", repo.name);
        let _ = writeln!(out, "{}", "=".repeat(50));

        if let Some(cause) = &repo.load_error {
            let _ = writeln!(out, "  \u{2717} ownership declaration unavailable: {cause}");
        } else if repo.issues.is_empty() {
            let _ = writeln!(out, "  \u{2713} valid ({} agents defined)", repo.agent_count);
        } else {
            for issue in &repo.issues {
                let _ = writeln!(out, "  \u{26a0} {issue}");
            }
            let _ = writeln!(out, "  \u{2717} {} issue(s) found", repo.issues.len());
        }
        out.push('\n');
    }

    if report.all_valid() {
        let _ = writeln!(out, "All ownership declarations are valid");
    } else {
        let _ = writeln!(out, "Some ownership declarations are invalid");
    }

    out
}

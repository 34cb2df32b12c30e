//! Validation report types.

use std::fmt;
use std::path::PathBuf;

/// Failure classes a document can be recorded with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Malformed structured data in the file.
    Parse,
    /// Document does not match its resolved type.
    Schema,
    /// Front matter schema pointer does not resolve.
    MissingReference,
}

impl FailureKind {
    /// Returns the failure kind as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Parse => "parse",
            Self::Schema => "schema",
            Self::MissingReference => "missing_reference",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Verdict for one governed document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// The document conforms to its resolved type.
    Pass,
    /// The document is not governed by the category (discriminator
    /// mismatch, empty document). Distinct from both pass and fail.
    Skipped,
    /// The document failed validation.
    Fail {
        /// Failure class.
        kind: FailureKind,
        /// Human-readable message locating the problem.
        message: String,
    },
}

impl ValidationOutcome {
    /// Whether this outcome is a failure.
    #[must_use]
    pub const fn is_fail(&self) -> bool {
        matches!(self, Self::Fail { .. })
    }
}

/// One record per examined file.
#[derive(Debug, Clone)]
pub struct ValidationRecord {
    /// Path of the examined file.
    pub path: PathBuf,
    /// Name of the category that governed the file.
    pub category: &'static str,
    /// The verdict.
    pub outcome: ValidationOutcome,
}

/// Aggregated result of a validation run.
///
/// Records keep traversal order: category declaration order, lexicographic
/// path order within a category. Order is irrelevant to correctness but
/// keeps report output deterministic.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    /// Per-file records in traversal order.
    pub records: Vec<ValidationRecord>,
}

impl ValidationReport {
    /// Number of documents that passed.
    #[must_use]
    pub fn passed(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.outcome == ValidationOutcome::Pass)
            .count()
    }

    /// Number of documents that failed.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.records.iter().filter(|r| r.outcome.is_fail()).count()
    }

    /// Number of documents skipped as not governed.
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.outcome == ValidationOutcome::Skipped)
            .count()
    }

    /// Whether the run recorded no failures.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    /// Iterates over the failed records.
    pub fn failures(&self) -> impl Iterator<Item = &ValidationRecord> {
        self.records.iter().filter(|r| r.outcome.is_fail())
    }
}

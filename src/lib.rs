//! # Confguard
//!
//! Governance validator for declarative configuration repositories.
//!
//! Confguard walks a repository of configuration artifacts (class schemas,
//! data cards, tool cards, tenant configs, prompt templates) and checks two
//! things: every governed document conforms to its typed schema, and the
//! ownership policy declared in per-repository `OWNERSHIP.yaml` files is
//! consistent: mandatory fields present, claimed paths existing, no path
//! owned by two agents.
//!
//! ## Features
//!
//! - Type-dispatched schema validation across category directories
//! - Discriminator filtering for mixed-purpose directories
//! - Front-matter template validation with `$schema` reference checking
//! - Ownership conflict and consistency checking across repositories
//! - Deterministic line-oriented reports with CI-friendly exit status
//!
//! ## Example
//!
//! ```rust,ignore
//! use confguard::services::{TypedModelEngine, ValidationOrchestrator};
//!
//! let mut orchestrator = ValidationOrchestrator::new("pom-config", TypedModelEngine::new());
//! let report = orchestrator.run();
//! assert!(report.is_success());
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]
// multiple_crate_versions is inherently crate-level (detects duplicate transitive dependencies).
#![allow(clippy::multiple_crate_versions)]

use thiserror::Error as ThisError;

// Module declarations
pub mod cli;
pub mod config;
pub mod models;
pub mod observability;
pub mod rendering;
pub mod services;

// Re-exports for convenience
pub use config::{ConfguardConfig, RepoSpec};
pub use models::{
    AgentEntry, AgentRecord, CATEGORIES, Category, Discriminator, Document, DocumentFormat,
    DocumentType, FailureKind, FrontMatter, OwnershipDeclaration, OwnershipIssue, OwnershipReport,
    RepoReport, ValidationOutcome, ValidationRecord, ValidationReport,
};
pub use services::{
    DocumentLoader, FrontMatterParser, LoadError, MissingReference, OWNERSHIP_FILE,
    OwnershipValidator, ReferenceResolver, Resolution, SchemaEngine, SchemaViolation, TypeResolver,
    TypedModelEngine, ValidationOrchestrator,
};

/// Error type for confguard operations.
///
/// Uses `thiserror` for automatic `Display` and `Error` trait implementations.
///
/// Per-document and per-agent findings are *values* in the reports, not
/// errors: only conditions that stop the process (unreadable configuration,
/// malformed CLI input, double logging init) surface through this type.
///
/// # Error Variant Triggers
///
/// | Variant | Raised When |
/// |---------|-------------|
/// | `InvalidInput` | Malformed CLI arguments (e.g. `--repo` without `NAME=PATH`) |
/// | `OperationFailed` | Config file unreadable/unparseable, logging re-initialized |
#[derive(Debug, ThisError)]
pub enum Error {
    /// Invalid input was provided.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An operation failed.
    #[error("operation '{operation}' failed: {cause}")]
    OperationFailed {
        /// The operation that failed.
        operation: String,
        /// The underlying cause.
        cause: String,
    },
}

/// Result type alias for confguard operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidInput("test error".to_string());
        assert_eq!(err.to_string(), "invalid input: test error");

        let err = Error::OperationFailed {
            operation: "test".to_string(),
            cause: "failed".to_string(),
        };
        assert_eq!(err.to_string(), "operation 'test' failed: failed");
    }
}

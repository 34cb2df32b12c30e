//! Validation orchestration across governed categories.

use crate::models::{
    CATEGORIES, Category, DocumentFormat, FailureKind, ValidationOutcome, ValidationRecord,
    ValidationReport,
};
use crate::services::document_loader::{DocumentLoader, FrontMatterParser};
use crate::services::reference_resolver::ReferenceResolver;
use crate::services::schema_engine::SchemaEngine;
use crate::services::type_resolver::{Resolution, TypeResolver};
use std::path::{Path, PathBuf};

/// Filename prefix marking templates/drafts excluded from validation.
const IGNORE_PREFIX: char = '_';

/// Lifecycle phase of a validation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No run started yet.
    #[default]
    Idle,
    /// A run is in progress.
    Running,
    /// The last run finished and its report was produced.
    Reported,
}

/// Walks configured categories and validates every governed document.
///
/// Categories are visited in declaration order; files within a category in
/// lexicographic path order. Category roots that do not exist are skipped
/// silently; a repository may legitimately omit an optional category.
pub struct ValidationOrchestrator<E> {
    root: PathBuf,
    categories: &'static [Category],
    engine: E,
    phase: Phase,
}

impl<E: SchemaEngine> ValidationOrchestrator<E> {
    /// Creates an orchestrator over the default category table.
    pub fn new(root: impl Into<PathBuf>, engine: E) -> Self {
        Self {
            root: root.into(),
            categories: CATEGORIES,
            engine,
            phase: Phase::Idle,
        }
    }

    /// Replaces the category table. Intended for tests and embedders.
    #[must_use]
    pub const fn with_categories(mut self, categories: &'static [Category]) -> Self {
        self.categories = categories;
        self
    }

    /// Current lifecycle phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Runs validation over every configured category.
    ///
    /// Every file is processed before the overall verdict is decided, so a
    /// single bad file never hides problems elsewhere.
    pub fn run(&mut self) -> ValidationReport {
        self.phase = Phase::Running;
        let mut report = ValidationReport::default();

        for category in self.categories {
            let category_root = self.root.join(category.root);
            if !category_root.is_dir() {
                tracing::debug!(category = category.name, "category root absent, skipping");
                continue;
            }

            let files =
                collect_files(&category_root, category.extension, category.skip_archived_dirs);
            tracing::debug!(category = category.name, files = files.len(), "validating category");

            for path in files {
                let outcome = self.validate_file(category, &path);
                if let ValidationOutcome::Fail { kind, message } = &outcome {
                    tracing::info!(
                        category = category.name,
                        path = %path.display(),
                        kind = %kind,
                        "validation failed: {message}"
                    );
                }
                report.records.push(ValidationRecord {
                    path,
                    category: category.name,
                    outcome,
                });
            }
        }

        self.phase = Phase::Reported;
        report
    }

    fn validate_file(&self, category: &Category, path: &Path) -> ValidationOutcome {
        match category.format {
            DocumentFormat::Yaml => self.validate_yaml(category, path),
            DocumentFormat::FrontMatter => self.validate_template(category, path),
        }
    }

    fn validate_yaml(&self, category: &Category, path: &Path) -> ValidationOutcome {
        let document = match DocumentLoader::load_yaml(path) {
            Ok(document) => document,
            Err(e) => {
                return ValidationOutcome::Fail {
                    kind: FailureKind::Parse,
                    message: e.to_string(),
                };
            },
        };

        match TypeResolver::resolve(category, &document.parsed) {
            Resolution::Skip => ValidationOutcome::Skipped,
            Resolution::Validate(doc_type) => {
                match self.engine.validate(&document.parsed, doc_type) {
                    Ok(()) => ValidationOutcome::Pass,
                    Err(violation) => ValidationOutcome::Fail {
                        kind: FailureKind::Schema,
                        message: violation.message,
                    },
                }
            },
        }
    }

    fn validate_template(&self, category: &Category, path: &Path) -> ValidationOutcome {
        let raw = match DocumentLoader::read(path) {
            Ok(raw) => raw,
            Err(e) => {
                return ValidationOutcome::Fail {
                    kind: FailureKind::Parse,
                    message: e.to_string(),
                };
            },
        };

        let front = match FrontMatterParser::split(&raw) {
            Ok(front) => front,
            Err(e) => {
                return ValidationOutcome::Fail {
                    kind: FailureKind::Parse,
                    message: e.to_string(),
                };
            },
        };

        // No front matter: nothing to govern.
        if !front.has_front_matter {
            return ValidationOutcome::Pass;
        }

        if let Err(violation) = self.engine.validate(&front.metadata, category.doc_type) {
            return ValidationOutcome::Fail {
                kind: FailureKind::Schema,
                message: violation.message,
            };
        }

        match ReferenceResolver::resolve(path, &front.metadata) {
            Ok(()) => ValidationOutcome::Pass,
            Err(e) => ValidationOutcome::Fail {
                kind: FailureKind::MissingReference,
                message: e.to_string(),
            },
        }
    }
}

/// Enumerates a category's governed files under the configuration root.
///
/// Returns an empty list when the category root does not exist. Used by
/// the orchestrator and by the status command.
#[must_use]
pub fn collect_category_files(root: &Path, category: &Category) -> Vec<PathBuf> {
    let category_root = root.join(category.root);
    if !category_root.is_dir() {
        return Vec::new();
    }
    collect_files(&category_root, category.extension, category.skip_archived_dirs)
}

/// Collects matching files recursively, lexicographically sorted.
fn collect_files(root: &Path, extension: &str, skip_archived_dirs: bool) -> Vec<PathBuf> {
    let mut files = Vec::new();
    walk(root, extension, skip_archived_dirs, &mut files);
    files.sort();
    files
}

fn walk(dir: &Path, extension: &str, skip_archived_dirs: bool, out: &mut Vec<PathBuf>) {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(path = %dir.display(), "failed to read directory: {e}");
            return;
        },
    };

    for entry in entries.flatten() {
        let path = entry.path();
        let name = entry.file_name();
        let name = name.to_string_lossy();

        if path.is_dir() {
            if skip_archived_dirs && name.starts_with(IGNORE_PREFIX) {
                continue;
            }
            walk(&path, extension, skip_archived_dirs, out);
        } else if !name.starts_with(IGNORE_PREFIX)
            && path.extension().is_some_and(|ext| ext == extension)
        {
            out.push(path);
        }
    }
}

//! Cross-file schema reference resolution.

use serde_json::Value;
use std::path::Path;
use thiserror::Error as ThisError;

/// Key in template front matter that points at a schema document.
pub const SCHEMA_REF_KEY: &str = "$schema";

/// A schema reference that does not resolve to an existing file.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
#[error("schema reference not found: {reference}")]
pub struct MissingReference {
    /// The reference as declared in the front matter.
    pub reference: String,
}

/// Resolves `$schema` front matter references.
pub struct ReferenceResolver;

impl ReferenceResolver {
    /// Checks the optional schema reference declared by a template.
    ///
    /// The reference is resolved relative to the document's own directory,
    /// not the repository root. Absence of the key is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`MissingReference`] when the declared reference does not
    /// exist on disk, a failure of the same severity as a schema
    /// violation, attributed to the referencing document.
    pub fn resolve(document_path: &Path, metadata: &Value) -> Result<(), MissingReference> {
        let Some(reference) = metadata.get(SCHEMA_REF_KEY).and_then(Value::as_str) else {
            return Ok(());
        };

        let base = document_path.parent().unwrap_or(Path::new("."));
        if base.join(reference).exists() {
            Ok(())
        } else {
            Err(MissingReference {
                reference: reference.to_string(),
            })
        }
    }
}

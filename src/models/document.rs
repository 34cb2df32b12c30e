//! Governed document types.

use serde_json::Value;
use std::path::PathBuf;

/// A configuration document loaded from one file.
///
/// Created per file at validation time and discarded after its verdict is
/// recorded; never persisted or mutated. A file that fails to parse never
/// becomes a `Document`; the loader reports a typed load error for that
/// path instead.
#[derive(Debug, Clone)]
pub struct Document {
    /// Path the document was loaded from.
    pub source_path: PathBuf,
    /// Raw file content, kept for front matter extraction.
    pub raw_content: String,
    /// The parsed structured value.
    pub parsed: Value,
}

/// Result of splitting a document into front matter and body.
///
/// Produced by an explicit two-delimiter scan. Content that does not start
/// with the delimiter line, or that has no closing delimiter, yields
/// `has_front_matter: false` with the full content as body, a valid state
/// rather than an error.
#[derive(Debug, Clone, PartialEq)]
pub struct FrontMatter {
    /// Whether the content carried a front matter block.
    pub has_front_matter: bool,
    /// Parsed front matter metadata; an empty object when absent.
    pub metadata: Value,
    /// Body text after the closing delimiter, or the full content when no
    /// front matter was found.
    pub body: String,
}

impl FrontMatter {
    /// Creates the "no front matter" result for the given content.
    #[must_use]
    pub fn absent(content: &str) -> Self {
        Self {
            has_front_matter: false,
            metadata: Value::Object(serde_json::Map::new()),
            body: content.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_keeps_full_content() {
        let front = FrontMatter::absent("plain body text");
        assert!(!front.has_front_matter);
        assert_eq!(front.body, "plain body text");
        assert!(front.metadata.as_object().is_some_and(serde_json::Map::is_empty));
    }
}

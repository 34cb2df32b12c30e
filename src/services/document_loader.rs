//! Document loading and front matter extraction.
//!
//! Loads governed files into structured in-memory values. Front matter
//! format:
//! ```text
//! ---
//! name: company-summary
//! $schema: ../schemas/summary_schema.yaml
//! ---
//! The actual template body here.
//! ```
//!
//! Loading failures are per-file values, never raised across the batch
//! boundary: a malformed document is recorded against its own path and
//! processing continues with the next file.

use crate::models::{Document, FrontMatter};
use serde_json::Value;
use std::path::Path;
use thiserror::Error as ThisError;

/// Per-file loading failure, recorded against the offending path.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum LoadError {
    /// The file could not be read.
    #[error("failed to read {path}: {cause}")]
    Io {
        /// Path of the unreadable file.
        path: String,
        /// Underlying I/O cause.
        cause: String,
    },
    /// The structured content is malformed.
    #[error("invalid YAML: {cause}")]
    Parse {
        /// Parser cause.
        cause: String,
    },
}

/// Loads governed documents from disk.
pub struct DocumentLoader;

impl DocumentLoader {
    /// Reads a file as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Io`] if the file cannot be read.
    pub fn read(path: &Path) -> Result<String, LoadError> {
        std::fs::read_to_string(path).map_err(|e| LoadError::Io {
            path: path.display().to_string(),
            cause: e.to_string(),
        })
    }

    /// Loads a whole file as one YAML value.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Io`] if the file cannot be read and
    /// [`LoadError::Parse`] if the content is not valid YAML.
    pub fn load_yaml(path: &Path) -> Result<Document, LoadError> {
        let raw_content = Self::read(path)?;
        let parsed: Value =
            serde_yaml_ng::from_str(&raw_content).map_err(|e| LoadError::Parse {
                cause: e.to_string(),
            })?;

        Ok(Document {
            source_path: path.to_path_buf(),
            raw_content,
            parsed,
        })
    }
}

/// Splits front-matter documents with an explicit two-delimiter scan.
pub struct FrontMatterParser;

impl FrontMatterParser {
    /// The front matter delimiter.
    const DELIMITER: &'static str = "---";

    /// Splits content into front matter and body.
    ///
    /// The content must start with the delimiter line; otherwise, or when
    /// no closing delimiter exists, the result is tagged
    /// `has_front_matter: false` with the full content as body. Both are
    /// valid states; some documents legitimately omit front matter.
    ///
    /// Splitting is a pure function: the same content always yields the
    /// same front matter and body.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Parse`] if the block between the delimiters is
    /// not valid YAML.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use confguard::services::FrontMatterParser;
    ///
    /// let content = "---\nname: summary\n---\nTemplate body";
    /// let front = FrontMatterParser::split(content).unwrap();
    /// assert!(front.has_front_matter);
    /// assert_eq!(front.metadata["name"], "summary");
    /// assert_eq!(front.body, "Template body");
    /// ```
    pub fn split(content: &str) -> Result<FrontMatter, LoadError> {
        if !content.starts_with(Self::DELIMITER) {
            return Ok(FrontMatter::absent(content));
        }

        let after_first = &content[Self::DELIMITER.len()..];
        let Some(end) = after_first.find(Self::DELIMITER) else {
            // Fewer than two delimiters: a valid no-front-matter state.
            return Ok(FrontMatter::absent(content));
        };

        let yaml_block = &after_first[..end];
        let body = after_first[end + Self::DELIMITER.len()..].trim_start_matches(['\r', '\n']);

        let metadata: Value = if yaml_block.trim().is_empty() {
            Value::Object(serde_json::Map::new())
        } else {
            serde_yaml_ng::from_str(yaml_block).map_err(|e| LoadError::Parse {
                cause: format!("invalid YAML front matter: {e}"),
            })?
        };

        // A block of only comments parses to null; treat it as empty.
        let metadata = if metadata.is_null() {
            Value::Object(serde_json::Map::new())
        } else {
            metadata
        };

        Ok(FrontMatter {
            has_front_matter: true,
            metadata,
            body: body.to_string(),
        })
    }
}

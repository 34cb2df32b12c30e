//! Structural validation of documents against typed card models.

use crate::models::cards::{
    DataCardConfig, LlmModelCard, PromptTemplateCard, ResearcherAiConfig, SchemaClassConfig,
    TenantGroupConfig, ToolCard, UxConfig,
};
use crate::models::DocumentType;
use serde::Deserialize;
use serde_json::Value;
use std::fmt;

/// A structural validation failure.
///
/// The message is human-readable and sufficient to locate the offending
/// field (serde's `missing field \`x\`` / `invalid type` diagnostics).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaViolation {
    /// What is wrong with the document.
    pub message: String,
}

impl fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Capability interface for structural document validation.
///
/// The orchestrator depends on this seam, not on any particular schema
/// mechanism. Implementations must surface every failure as a value;
/// nothing may propagate uncaught across the category boundary.
pub trait SchemaEngine {
    /// Validates a document against the model for `doc_type`.
    ///
    /// # Errors
    ///
    /// Returns a [`SchemaViolation`] describing the first structural
    /// problem found.
    fn validate(&self, document: &Value, doc_type: DocumentType) -> Result<(), SchemaViolation>;
}

/// Default engine: deserializes documents into the typed card models.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypedModelEngine;

impl TypedModelEngine {
    /// Creates a new typed model engine.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl SchemaEngine for TypedModelEngine {
    fn validate(&self, document: &Value, doc_type: DocumentType) -> Result<(), SchemaViolation> {
        match doc_type {
            DocumentType::SchemaClass => check::<SchemaClassConfig>(document),
            DocumentType::DataCard => check::<DataCardConfig>(document),
            DocumentType::LlmModel => check::<LlmModelCard>(document),
            DocumentType::Tool => check::<ToolCard>(document),
            DocumentType::TenantGroup => check::<TenantGroupConfig>(document),
            DocumentType::ResearcherAi => check::<ResearcherAiConfig>(document),
            DocumentType::UxConfig => check::<UxConfig>(document),
            DocumentType::PromptTemplate => check::<PromptTemplateCard>(document),
        }
    }
}

/// Runs one typed deserialization, discarding the parsed value.
fn check<'de, T: Deserialize<'de>>(document: &'de Value) -> Result<(), SchemaViolation> {
    T::deserialize(document).map(|_| ()).map_err(|e| SchemaViolation {
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_tool_card_passes() {
        let engine = TypedModelEngine::new();
        let document = json!({
            "type": "tool",
            "name": "web_search",
            "description": "Searches the public web",
            "parameters": [{ "name": "query", "required": true }]
        });

        assert!(engine.validate(&document, DocumentType::Tool).is_ok());
    }

    #[test]
    fn test_missing_field_names_the_field() {
        let engine = TypedModelEngine::new();
        let document = json!({ "type": "tool", "name": "web_search" });

        let violation = engine
            .validate(&document, DocumentType::Tool)
            .unwrap_err();
        assert!(
            violation.message.contains("description"),
            "message should name the field: {}",
            violation.message
        );
    }

    #[test]
    fn test_wrong_shape_is_a_violation() {
        let engine = TypedModelEngine::new();
        let document = json!(["not", "a", "mapping"]);

        assert!(engine.validate(&document, DocumentType::DataCard).is_err());
    }

    #[test]
    fn test_every_document_type_dispatches() {
        let engine = TypedModelEngine::new();
        let empty = json!({});
        for doc_type in [
            DocumentType::SchemaClass,
            DocumentType::DataCard,
            DocumentType::LlmModel,
            DocumentType::Tool,
            DocumentType::TenantGroup,
            DocumentType::ResearcherAi,
            DocumentType::UxConfig,
        ] {
            assert!(
                engine.validate(&empty, doc_type).is_err(),
                "{doc_type} should require at least one field"
            );
        }
        // Prompt templates have no required fields.
        assert!(engine.validate(&empty, DocumentType::PromptTemplate).is_ok());
    }
}

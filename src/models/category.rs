//! Category descriptors for governed directories.
//!
//! A category binds a subdirectory of the configuration repository to one
//! expected document type, optionally filtered by a discriminator field
//! inside each document. The category table is static configuration, not
//! runtime state.

use std::fmt;

/// The typed model a governed document must conform to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentType {
    /// Vector store class schema definition.
    SchemaClass,
    /// Data source card.
    DataCard,
    /// LLM model card.
    LlmModel,
    /// Tool integration card.
    Tool,
    /// Tenant group configuration.
    TenantGroup,
    /// Researcher AI configuration.
    ResearcherAi,
    /// UX configuration.
    UxConfig,
    /// Prompt template front matter.
    PromptTemplate,
}

impl DocumentType {
    /// Returns the document type as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SchemaClass => "schema_class",
            Self::DataCard => "data_card",
            Self::LlmModel => "llm_model",
            Self::Tool => "tool",
            Self::TenantGroup => "tenant_group",
            Self::ResearcherAi => "researcher_ai",
            Self::UxConfig => "ux_config",
            Self::PromptTemplate => "prompt_template",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// On-disk format of a category's documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// Whole file is one YAML mapping.
    Yaml,
    /// Delimited YAML header followed by free-form body text.
    FrontMatter,
}

/// Discriminator used to select a subset of a directory's files.
///
/// Only documents whose `field` equals `value` are governed by the
/// category; others are skipped, not failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Discriminator {
    /// Top-level field read from the document.
    pub field: &'static str,
    /// Expected value of the field.
    pub value: &'static str,
}

/// A governed subdirectory bound to one expected document type.
#[derive(Debug, Clone, Copy)]
pub struct Category {
    /// Category name, used in report headers.
    pub name: &'static str,
    /// Directory root relative to the configuration repository.
    pub root: &'static str,
    /// Type every governed document must conform to.
    pub doc_type: DocumentType,
    /// Optional discriminator for mixed-purpose directories.
    pub discriminator: Option<Discriminator>,
    /// On-disk document format.
    pub format: DocumentFormat,
    /// File extension of governed documents, without the dot.
    pub extension: &'static str,
    /// Whether files under `_`-prefixed parent directories are excluded.
    pub skip_archived_dirs: bool,
}

/// The governed categories, in validation order.
pub const CATEGORIES: &[Category] = &[
    Category {
        name: "schemas",
        root: "schemas",
        doc_type: DocumentType::SchemaClass,
        discriminator: Some(Discriminator { field: "type", value: "schema" }),
        format: DocumentFormat::Yaml,
        extension: "yaml",
        skip_archived_dirs: false,
    },
    Category {
        name: "data_cards",
        root: "data_cards",
        doc_type: DocumentType::DataCard,
        discriminator: Some(Discriminator { field: "type", value: "data_card" }),
        format: DocumentFormat::Yaml,
        extension: "yaml",
        skip_archived_dirs: false,
    },
    Category {
        name: "llm_models",
        root: "llm_models",
        doc_type: DocumentType::LlmModel,
        discriminator: Some(Discriminator { field: "type", value: "llm_model" }),
        format: DocumentFormat::Yaml,
        extension: "yaml",
        skip_archived_dirs: false,
    },
    Category {
        name: "tools",
        root: "tools",
        doc_type: DocumentType::Tool,
        discriminator: Some(Discriminator { field: "type", value: "tool" }),
        format: DocumentFormat::Yaml,
        extension: "yaml",
        skip_archived_dirs: false,
    },
    Category {
        name: "tenant_groups",
        root: "tenant_groups",
        doc_type: DocumentType::TenantGroup,
        discriminator: None,
        format: DocumentFormat::Yaml,
        extension: "yaml",
        skip_archived_dirs: false,
    },
    Category {
        name: "researcher_ai",
        root: "researcher_ai",
        doc_type: DocumentType::ResearcherAi,
        discriminator: Some(Discriminator { field: "type", value: "researcher_ai" }),
        format: DocumentFormat::Yaml,
        extension: "yaml",
        skip_archived_dirs: false,
    },
    Category {
        name: "ux_configs",
        root: "ux_configs",
        doc_type: DocumentType::UxConfig,
        discriminator: Some(Discriminator { field: "type", value: "ux_config" }),
        format: DocumentFormat::Yaml,
        extension: "yaml",
        skip_archived_dirs: false,
    },
    Category {
        name: "prompts",
        root: "prompts",
        doc_type: DocumentType::PromptTemplate,
        discriminator: None,
        format: DocumentFormat::FrontMatter,
        extension: "prompty",
        skip_archived_dirs: true,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_order_is_stable() {
        let names: Vec<&str> = CATEGORIES.iter().map(|c| c.name).collect();
        assert_eq!(
            names,
            vec![
                "schemas",
                "data_cards",
                "llm_models",
                "tools",
                "tenant_groups",
                "researcher_ai",
                "ux_configs",
                "prompts"
            ]
        );
    }

    #[test]
    fn test_only_prompts_use_front_matter() {
        for category in CATEGORIES {
            if category.name == "prompts" {
                assert_eq!(category.format, DocumentFormat::FrontMatter);
                assert!(category.skip_archived_dirs);
            } else {
                assert_eq!(category.format, DocumentFormat::Yaml);
            }
        }
    }

    #[test]
    fn test_tenant_groups_have_no_discriminator() {
        let tenant = CATEGORIES
            .iter()
            .find(|c| c.name == "tenant_groups")
            .unwrap();
        assert!(tenant.discriminator.is_none());
    }

    #[test]
    fn test_document_type_display() {
        assert_eq!(DocumentType::DataCard.to_string(), "data_card");
        assert_eq!(DocumentType::PromptTemplate.as_str(), "prompt_template");
    }
}

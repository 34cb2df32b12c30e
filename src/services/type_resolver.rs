//! Category type resolution.

use crate::models::{Category, DocumentType};
use serde_json::Value;

/// Outcome of resolving a document against a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The document is governed by the category and must conform to the
    /// type.
    Validate(DocumentType),
    /// The document is not governed by this category: neither validated
    /// nor failed.
    Skip,
}

/// Resolves which typed model a document must conform to.
pub struct TypeResolver;

impl TypeResolver {
    /// Resolves a document against a category.
    ///
    /// Categories without a discriminator always resolve to the category's
    /// bound type. With a discriminator, only documents whose field equals
    /// the expected value are governed; documents where the field is
    /// absent or different are skipped; a directory may hold documents of
    /// mixed purpose, only a subset of which the category governs.
    ///
    /// Null and empty documents are skipped. A non-mapping document (a
    /// bare list, say) resolves to the bound type so its shape error
    /// surfaces through the schema engine.
    #[must_use]
    pub fn resolve(category: &Category, document: &Value) -> Resolution {
        if document.is_null() {
            return Resolution::Skip;
        }

        let Some(mapping) = document.as_object() else {
            return Resolution::Validate(category.doc_type);
        };
        if mapping.is_empty() {
            return Resolution::Skip;
        }

        match category.discriminator {
            None => Resolution::Validate(category.doc_type),
            Some(discriminator) => {
                let matches = mapping
                    .get(discriminator.field)
                    .and_then(Value::as_str)
                    .is_some_and(|value| value == discriminator.value);
                if matches {
                    Resolution::Validate(category.doc_type)
                } else {
                    Resolution::Skip
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DocumentFormat, Discriminator};
    use serde_json::json;
    use test_case::test_case;

    const DISCRIMINATED: Category = Category {
        name: "data_cards",
        root: "data_cards",
        doc_type: DocumentType::DataCard,
        discriminator: Some(Discriminator {
            field: "type",
            value: "data_card",
        }),
        format: DocumentFormat::Yaml,
        extension: "yaml",
        skip_archived_dirs: false,
    };

    const UNDISCRIMINATED: Category = Category {
        name: "tenant_groups",
        root: "tenant_groups",
        doc_type: DocumentType::TenantGroup,
        discriminator: None,
        format: DocumentFormat::Yaml,
        extension: "yaml",
        skip_archived_dirs: false,
    };

    #[test]
    fn test_matching_discriminator_validates() {
        let document = json!({ "type": "data_card", "name": "crunchbase" });
        assert_eq!(
            TypeResolver::resolve(&DISCRIMINATED, &document),
            Resolution::Validate(DocumentType::DataCard)
        );
    }

    #[test_case(json!({ "type": "llm_model", "name": "other" }) ; "different value")]
    #[test_case(json!({ "name": "no discriminator field" }) ; "absent field")]
    #[test_case(json!({ "type": 3 }) ; "non-string value")]
    #[test_case(json!(null) ; "null document")]
    #[test_case(json!({}) ; "empty mapping")]
    fn test_skipped(document: Value) {
        assert_eq!(
            TypeResolver::resolve(&DISCRIMINATED, &document),
            Resolution::Skip
        );
    }

    #[test]
    fn test_no_discriminator_always_validates() {
        let document = json!({ "group_name": "emea" });
        assert_eq!(
            TypeResolver::resolve(&UNDISCRIMINATED, &document),
            Resolution::Validate(DocumentType::TenantGroup)
        );
    }

    #[test]
    fn test_non_mapping_document_routes_to_engine() {
        let document = json!(["a", "b"]);
        assert_eq!(
            TypeResolver::resolve(&DISCRIMINATED, &document),
            Resolution::Validate(DocumentType::DataCard)
        );
    }
}

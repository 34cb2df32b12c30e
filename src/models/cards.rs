//! Typed card models for governed documents.
//!
//! Each struct is the schema a category's documents are checked against.
//! Deserialization failures ("missing field", "invalid type") are the
//! structured errors surfaced in the validation report. Unknown keys are
//! tolerated: cards describe the governed surface, not an exhaustive one.

use serde::Deserialize;

/// One property entry in a vector store class schema.
#[derive(Debug, Clone, Deserialize)]
pub struct SchemaProperty {
    /// Property name.
    pub name: String,
    /// Data types accepted by the property.
    #[serde(alias = "dataType")]
    pub data_type: Vec<String>,
    /// Human-readable description.
    #[serde(default)]
    pub description: Option<String>,
    /// Classification tags (`Cat`, `LLM`, `evidence`, ...).
    #[serde(default)]
    pub tags: Vec<String>,
    /// Field sets the property belongs to (`standard`, `extended`, `system`).
    #[serde(default)]
    pub sets: Vec<String>,
}

/// Vector store class schema definition.
#[derive(Debug, Clone, Deserialize)]
pub struct SchemaClassConfig {
    /// Class name.
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// Vectorizer module, if the class is vectorized.
    #[serde(default)]
    pub vectorizer: Option<String>,
    /// Property definitions.
    #[serde(default)]
    pub properties: Vec<SchemaProperty>,
}

/// Data source card.
#[derive(Debug, Clone, Deserialize)]
pub struct DataCardConfig {
    /// Card name.
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// Upstream source identifier.
    #[serde(default)]
    pub source: Option<String>,
    /// Refresh cadence in days.
    #[serde(default)]
    pub refresh_interval_days: Option<u32>,
    /// Field names exposed by the source.
    #[serde(default)]
    pub fields: Vec<String>,
}

/// LLM model card.
#[derive(Debug, Clone, Deserialize)]
pub struct LlmModelCard {
    /// Model name.
    pub name: String,
    /// Provider identifier.
    pub provider: String,
    /// Context window in tokens.
    #[serde(default)]
    pub context_window: Option<u32>,
    /// Default sampling temperature.
    #[serde(default)]
    pub temperature: Option<f32>,
    /// Capability labels.
    #[serde(default)]
    pub capabilities: Vec<String>,
}

/// One parameter accepted by a tool.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolParameter {
    /// Parameter name.
    pub name: String,
    /// Human-readable description.
    #[serde(default)]
    pub description: Option<String>,
    /// Whether the parameter is mandatory.
    #[serde(default)]
    pub required: bool,
}

/// Tool integration card.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolCard {
    /// Tool name.
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// Invocation endpoint.
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Accepted parameters.
    #[serde(default)]
    pub parameters: Vec<ToolParameter>,
}

/// Tenant group configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct TenantGroupConfig {
    /// Group name.
    pub group_name: String,
    /// Human-readable description.
    #[serde(default)]
    pub description: Option<String>,
    /// Tenant identifiers in the group.
    #[serde(default)]
    pub tenants: Vec<String>,
    /// Feature labels enabled for the group.
    #[serde(default)]
    pub features: Vec<String>,
}

/// Researcher AI configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ResearcherAiConfig {
    /// Researcher name.
    pub name: String,
    /// Human-readable description.
    #[serde(default)]
    pub description: Option<String>,
    /// Pre-computed search queries.
    #[serde(default)]
    pub search_queries: Vec<String>,
    /// Schema the researcher writes into.
    #[serde(default)]
    pub schema_ref: Option<String>,
    /// Fields the researcher focuses on.
    #[serde(default)]
    pub field_focus: Vec<String>,
}

/// UX configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct UxConfig {
    /// Configuration name.
    pub name: String,
    /// Human-readable description.
    #[serde(default)]
    pub description: Option<String>,
    /// Layout identifier.
    #[serde(default)]
    pub layout: Option<String>,
    /// Component identifiers in render order.
    #[serde(default)]
    pub components: Vec<String>,
}

/// Prompt template front matter.
///
/// Every field is optional: structural validation of templates rejects
/// wrong shapes, not missing metadata. A template without front matter is
/// not validated at all.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PromptTemplateCard {
    /// Template name.
    #[serde(default)]
    pub name: Option<String>,
    /// Human-readable description.
    #[serde(default)]
    pub description: Option<String>,
    /// Model the template targets.
    #[serde(default)]
    pub model: Option<String>,
    /// Tags for discovery.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Cross-file schema reference, resolved relative to the template.
    #[serde(default, rename = "$schema")]
    pub schema_ref: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_schema_class_requires_name_and_description() {
        let missing: Result<SchemaClassConfig, _> =
            serde_json::from_value(json!({ "name": "Page_facts" }));
        let err = missing.unwrap_err().to_string();
        assert!(err.contains("description"), "message names the field: {err}");

        let ok: SchemaClassConfig = serde_json::from_value(json!({
            "name": "Page_facts",
            "description": "Facts extracted per page",
            "properties": [
                { "name": "entityNameCat", "dataType": ["text"], "tags": ["Cat"], "sets": ["standard"] }
            ]
        }))
        .unwrap();
        assert_eq!(ok.properties.len(), 1);
        assert_eq!(ok.properties[0].data_type, vec!["text"]);
    }

    #[test]
    fn test_data_card_tolerates_unknown_keys() {
        let card: DataCardConfig = serde_json::from_value(json!({
            "type": "data_card",
            "name": "crunchbase",
            "description": "Company firmographics",
            "extra_key": 42
        }))
        .unwrap();
        assert_eq!(card.name, "crunchbase");
        assert!(card.fields.is_empty());
    }

    #[test]
    fn test_llm_model_requires_provider() {
        let err = serde_json::from_value::<LlmModelCard>(json!({ "name": "gpt-4o" }))
            .unwrap_err()
            .to_string();
        assert!(err.contains("provider"));
    }

    #[test]
    fn test_prompt_template_all_fields_optional() {
        let card: PromptTemplateCard = serde_json::from_value(json!({})).unwrap();
        assert!(card.name.is_none());
        assert!(card.schema_ref.is_none());

        let card: PromptTemplateCard = serde_json::from_value(json!({
            "name": "summarize",
            "$schema": "../schemas/summary_schema.yaml"
        }))
        .unwrap();
        assert_eq!(card.schema_ref.as_deref(), Some("../schemas/summary_schema.yaml"));
    }

    #[test]
    fn test_prompt_template_rejects_wrong_shape() {
        let err = serde_json::from_value::<PromptTemplateCard>(json!({ "tags": "not-a-list" }))
            .unwrap_err()
            .to_string();
        assert!(err.contains("tags") || err.contains("sequence"), "unexpected: {err}");
    }
}

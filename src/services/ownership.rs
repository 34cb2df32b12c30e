//! Ownership declaration validation.
//!
//! Checks each governed repository's `OWNERSHIP.yaml` for three things:
//! agents declaring all mandatory fields, claimed paths existing on disk,
//! and no path being claimed as owned by more than one agent. Repositories
//! are validated independently; one repository's failure never skips
//! another's validation.

use crate::config::RepoSpec;
use crate::models::{
    AgentEntry, AgentRecord, OwnershipDeclaration, OwnershipIssue, OwnershipReport, RepoReport,
};
use std::collections::HashMap;
use std::path::Path;

/// File name of the per-repository ownership declaration.
pub const OWNERSHIP_FILE: &str = "OWNERSHIP.yaml";

/// Validates ownership declarations for one or more repositories.
pub struct OwnershipValidator;

impl OwnershipValidator {
    /// Loads and parses a repository's ownership declaration.
    ///
    /// Agent order follows document order. A declaration without an
    /// `ai_agents` mapping is empty and valid.
    ///
    /// # Errors
    ///
    /// Returns a human-readable cause when the file is absent, unreadable,
    /// or not valid YAML. The caller records the cause against the
    /// repository; it is never fatal to the batch.
    pub fn load(path: &Path) -> Result<OwnershipDeclaration, String> {
        if !path.exists() {
            return Err(format!("not found: {}", path.display()));
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
        let value: serde_yaml_ng::Value =
            serde_yaml_ng::from_str(&raw).map_err(|e| format!("invalid YAML: {e}"))?;

        Ok(Self::from_value(&value))
    }

    fn from_value(value: &serde_yaml_ng::Value) -> OwnershipDeclaration {
        let mut agents = Vec::new();

        if let Some(mapping) = value
            .get("ai_agents")
            .and_then(serde_yaml_ng::Value::as_mapping)
        {
            for (key, entry) in mapping {
                let name = key.as_str().unwrap_or("<invalid agent name>").to_string();
                let entry = serde_yaml_ng::from_value::<AgentEntry>(entry.clone())
                    .map_err(|e| e.to_string());
                agents.push(AgentRecord { name, entry });
            }
        }

        OwnershipDeclaration { agents }
    }

    /// Checks one agent's mandatory fields and claimed paths.
    ///
    /// `read_only` paths are declarative and not existence-checked: an
    /// agent may read paths it does not manage, including paths outside
    /// its own repository clone.
    #[must_use]
    pub fn validate_agent(
        name: &str,
        entry: &AgentEntry,
        repo_root: &Path,
    ) -> Vec<OwnershipIssue> {
        let mut issues = Vec::new();

        for field in entry.missing_fields() {
            issues.push(OwnershipIssue::MissingField {
                agent: name.to_string(),
                field,
            });
        }

        for (field, paths) in [("owns", &entry.owns), ("can_write", &entry.can_write)] {
            let Some(paths) = paths else { continue };
            for path in paths {
                let full_path = repo_root.join(path.trim_end_matches('/'));
                if !full_path.exists() {
                    issues.push(OwnershipIssue::MissingPath {
                        agent: name.to_string(),
                        field,
                        path: path.clone(),
                    });
                }
            }
        }

        issues
    }

    /// Finds paths claimed as owned by more than one agent.
    ///
    /// Single pass in declaration order over a claim map scoped to this
    /// invocation, so the detector is re-entrant and testable per
    /// declaration. Matching is on path literals only: owning `services/`
    /// does not conflict with another agent owning `services/x.py`.
    #[must_use]
    pub fn find_conflicts(declaration: &OwnershipDeclaration) -> Vec<OwnershipIssue> {
        let mut owned_by: HashMap<&str, &str> = HashMap::new();
        let mut conflicts = Vec::new();

        for agent in &declaration.agents {
            let Ok(entry) = &agent.entry else { continue };
            let Some(owns) = &entry.owns else { continue };

            for path in owns {
                if let Some(first_owner) = owned_by.get(path.as_str()) {
                    conflicts.push(OwnershipIssue::Conflict {
                        path: path.clone(),
                        first_owner: (*first_owner).to_string(),
                        second_owner: agent.name.clone(),
                    });
                } else {
                    owned_by.insert(path, &agent.name);
                }
            }
        }

        conflicts
    }

    /// Validates one repository's ownership declaration.
    #[must_use]
    pub fn validate_repo(spec: &RepoSpec) -> RepoReport {
        let ownership_path = spec.path.join(OWNERSHIP_FILE);
        tracing::debug!(repo = %spec.name, path = %ownership_path.display(), "validating ownership");

        let declaration = match Self::load(&ownership_path) {
            Ok(declaration) => declaration,
            Err(cause) => {
                tracing::info!(repo = %spec.name, "ownership declaration unavailable: {cause}");
                return RepoReport {
                    name: spec.name.clone(),
                    agent_count: 0,
                    load_error: Some(cause),
                    issues: Vec::new(),
                };
            },
        };

        let mut issues = Vec::new();
        for agent in &declaration.agents {
            match &agent.entry {
                Ok(entry) => issues.extend(Self::validate_agent(&agent.name, entry, &spec.path)),
                Err(cause) => issues.push(OwnershipIssue::InvalidAgent {
                    agent: agent.name.clone(),
                    cause: cause.clone(),
                }),
            }
        }
        issues.extend(Self::find_conflicts(&declaration));

        RepoReport {
            name: spec.name.clone(),
            agent_count: declaration.agents.len(),
            load_error: None,
            issues,
        }
    }

    /// Validates every configured repository independently.
    #[must_use]
    pub fn validate_all(specs: &[RepoSpec]) -> OwnershipReport {
        OwnershipReport {
            repos: specs.iter().map(Self::validate_repo).collect(),
        }
    }
}

//! Ownership declaration types.
//!
//! Each governed repository declares path authority in an `OWNERSHIP.yaml`
//! at its root: a mapping of agent names to the paths they own, can write,
//! or only read. Declaration order is preserved because conflict
//! attribution is order-sensitive.

use serde::Deserialize;
use thiserror::Error as ThisError;

/// Path authority entry for one agent.
///
/// Every field is optional at the type level so that missing fields surface
/// as per-agent warnings instead of deserialization failures; the field
/// validator enforces presence as policy.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AgentEntry {
    /// What the agent is responsible for.
    #[serde(default)]
    pub description: Option<String>,
    /// Paths the agent exclusively owns.
    #[serde(default)]
    pub owns: Option<Vec<String>>,
    /// Paths the agent may write without owning them.
    #[serde(default)]
    pub can_write: Option<Vec<String>>,
    /// Paths the agent may only read. Declarative; not existence-checked.
    #[serde(default)]
    pub read_only: Option<Vec<String>>,
}

impl AgentEntry {
    /// Returns the mandatory fields this entry fails to declare.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.description.is_none() {
            missing.push("description");
        }
        if self.owns.is_none() {
            missing.push("owns");
        }
        if self.can_write.is_none() {
            missing.push("can_write");
        }
        if self.read_only.is_none() {
            missing.push("read_only");
        }
        missing
    }
}

/// Agent entry paired with its declaration name.
#[derive(Debug, Clone)]
pub struct AgentRecord {
    /// Agent name (the mapping key in the declaration).
    pub name: String,
    /// Parsed entry, or the cause when the declared value did not have the
    /// expected shape.
    pub entry: Result<AgentEntry, String>,
}

/// Per-repository ownership declaration, agents in declaration order.
#[derive(Debug, Clone, Default)]
pub struct OwnershipDeclaration {
    /// Declared agents in document order.
    pub agents: Vec<AgentRecord>,
}

/// A finding against an ownership declaration.
///
/// Findings are recorded, never raised: the validator continues to the next
/// agent and to conflict detection regardless.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum OwnershipIssue {
    /// A mandatory field is absent from an agent entry.
    #[error("{agent}: missing '{field}' field")]
    MissingField {
        /// Offending agent.
        agent: String,
        /// The absent field.
        field: &'static str,
    },
    /// A claimed path does not exist under the repository root.
    #[error("{agent}.{field}: path doesn't exist: {path}")]
    MissingPath {
        /// Offending agent.
        agent: String,
        /// Field the path was claimed under (`owns` or `can_write`).
        field: &'static str,
        /// The path as declared.
        path: String,
    },
    /// The agent entry is not a mapping of the expected shape.
    #[error("{agent}: invalid agent entry: {cause}")]
    InvalidAgent {
        /// Offending agent.
        agent: String,
        /// Deserialization cause.
        cause: String,
    },
    /// A path is claimed as owned by two agents.
    ///
    /// Attribution is order-sensitive: `first_owner` is the earlier agent in
    /// declaration order. The conflict itself is symmetric.
    #[error("conflict: '{path}' owned by both {first_owner} and {second_owner}")]
    Conflict {
        /// The contested path literal.
        path: String,
        /// First agent to claim the path.
        first_owner: String,
        /// Later claimant.
        second_owner: String,
    },
}

/// Validation result for one repository.
#[derive(Debug, Clone)]
pub struct RepoReport {
    /// Repository name.
    pub name: String,
    /// Number of agents declared.
    pub agent_count: usize,
    /// Why the declaration could not be loaded, if it could not.
    pub load_error: Option<String>,
    /// Findings against the declaration.
    pub issues: Vec<OwnershipIssue>,
}

impl RepoReport {
    /// A repository is valid iff its declaration loaded and the union of
    /// findings is empty.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.load_error.is_none() && self.issues.is_empty()
    }
}

/// Combined result across every configured repository.
#[derive(Debug, Clone, Default)]
pub struct OwnershipReport {
    /// Per-repository reports in configuration order.
    pub repos: Vec<RepoReport>,
}

impl OwnershipReport {
    /// Whether every repository is valid.
    #[must_use]
    pub fn all_valid(&self) -> bool {
        self.repos.iter().all(RepoReport::is_valid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_reported_in_declaration_order() {
        let entry = AgentEntry {
            description: Some("docs agent".to_string()),
            owns: Some(vec!["docs/".to_string()]),
            can_write: None,
            read_only: None,
        };
        assert_eq!(entry.missing_fields(), vec!["can_write", "read_only"]);
    }

    #[test]
    fn test_complete_entry_has_no_missing_fields() {
        let entry = AgentEntry {
            description: Some("agent".to_string()),
            owns: Some(Vec::new()),
            can_write: Some(Vec::new()),
            read_only: Some(Vec::new()),
        };
        assert!(entry.missing_fields().is_empty());
    }

    #[test]
    fn test_issue_display() {
        let issue = OwnershipIssue::Conflict {
            path: "x/y.yaml".to_string(),
            first_owner: "alpha".to_string(),
            second_owner: "beta".to_string(),
        };
        assert_eq!(
            issue.to_string(),
            "conflict: 'x/y.yaml' owned by both alpha and beta"
        );

        let issue = OwnershipIssue::MissingField {
            agent: "gamma".to_string(),
            field: "read_only",
        };
        assert_eq!(issue.to_string(), "gamma: missing 'read_only' field");
    }

    #[test]
    fn test_repo_validity() {
        let valid = RepoReport {
            name: "config".to_string(),
            agent_count: 2,
            load_error: None,
            issues: Vec::new(),
        };
        assert!(valid.is_valid());

        let absent = RepoReport {
            name: "docs".to_string(),
            agent_count: 0,
            load_error: Some("not found: docs/OWNERSHIP.yaml".to_string()),
            issues: Vec::new(),
        };
        assert!(!absent.is_valid());

        let report = OwnershipReport {
            repos: vec![valid, absent],
        };
        assert!(!report.all_valid());
    }
}

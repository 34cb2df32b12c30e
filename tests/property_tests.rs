//! Property-based tests for front matter extraction and conflict detection.
//!
//! Uses proptest to verify invariants across random inputs:
//! - Front matter extraction is deterministic (same content, same split)
//! - Constructed front-matter documents split back into header and body
//! - Content without a leading delimiter is always a no-front-matter state
//! - Conflict detection never flags a set of disjoint `owns` lists

// Property tests use expect/unwrap for simplicity - panics are acceptable in tests
#![allow(clippy::expect_used, clippy::unwrap_used)]

use confguard::models::{AgentEntry, AgentRecord, OwnershipDeclaration};
use confguard::services::{FrontMatterParser, OwnershipValidator};
use proptest::prelude::*;

proptest! {
    /// Property: splitting the same content twice yields identical results.
    #[test]
    fn prop_front_matter_split_is_deterministic(content in ".{0,400}") {
        let first = FrontMatterParser::split(&content);
        let second = FrontMatterParser::split(&content);
        prop_assert_eq!(first, second);
    }

    /// Property: a document assembled from a simple key/value header and a
    /// body splits back into exactly that header and body.
    #[test]
    fn prop_constructed_document_roundtrips(
        key in "k_[a-z_]{0,14}",
        value in "v[a-zA-Z0-9 ]{0,20}v",
        body in "[a-zA-Z0-9 .\n]{0,120}",
    ) {
        // Leading newlines in the body are consumed by the delimiter scan.
        prop_assume!(!body.starts_with('\n'));
        let content = format!("---\n{key}: {value}\n---\n{body}");

        let front = FrontMatterParser::split(&content).unwrap();
        prop_assert!(front.has_front_matter);
        prop_assert_eq!(front.metadata[key.as_str()].as_str().unwrap(), value.as_str());
        prop_assert_eq!(front.body, body);
    }

    /// Property: content that does not start with the delimiter never has
    /// front matter, and the body is the content itself.
    #[test]
    fn prop_no_leading_delimiter_means_no_front_matter(content in "[^-].{0,200}") {
        let front = FrontMatterParser::split(&content).unwrap();
        prop_assert!(!front.has_front_matter);
        prop_assert_eq!(front.body, content);
    }

    /// Property: agents with pairwise-disjoint `owns` lists never conflict.
    #[test]
    fn prop_disjoint_owns_never_conflict(paths in prop::collection::hash_set("[a-z]{1,8}/[a-z]{1,8}\\.yaml", 1..20)) {
        let paths: Vec<String> = paths.into_iter().collect();
        // Distribute the distinct paths round-robin across three agents.
        let mut agents: Vec<AgentRecord> = (0..3)
            .map(|i| AgentRecord {
                name: format!("agent-{i}"),
                entry: Ok(AgentEntry {
                    description: Some("generated".to_string()),
                    owns: Some(Vec::new()),
                    can_write: Some(Vec::new()),
                    read_only: Some(Vec::new()),
                }),
            })
            .collect();
        for (i, path) in paths.iter().enumerate() {
            if let Ok(entry) = &mut agents[i % 3].entry {
                if let Some(owns) = &mut entry.owns {
                    owns.push(path.clone());
                }
            }
        }

        let declaration = OwnershipDeclaration { agents };
        prop_assert!(OwnershipValidator::find_conflicts(&declaration).is_empty());
    }

    /// Property: duplicating one path across two agents yields at least one
    /// conflict attributing the first agent as first owner.
    #[test]
    fn prop_duplicated_path_conflicts(path in "[a-z]{1,8}\\.yaml") {
        let agent = |name: &str, owns: Vec<String>| AgentRecord {
            name: name.to_string(),
            entry: Ok(AgentEntry {
                description: Some("generated".to_string()),
                owns: Some(owns),
                can_write: Some(Vec::new()),
                read_only: Some(Vec::new()),
            }),
        };
        let declaration = OwnershipDeclaration {
            agents: vec![
                agent("first", vec![path.clone()]),
                agent("second", vec![path.clone()]),
            ],
        };

        let conflicts = OwnershipValidator::find_conflicts(&declaration);
        prop_assert_eq!(conflicts.len(), 1);
        prop_assert_eq!(
            conflicts[0].to_string(),
            format!("conflict: '{path}' owned by both first and second")
        );
    }
}

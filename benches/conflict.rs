//! Benchmarks for conflict detection over ownership declarations.
//!
//! The detector is a single pass over all owned paths; these benchmarks
//! track that it stays linear as declarations grow.

// Criterion macros generate items without docs - this is expected for benchmarks
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use confguard::models::{AgentEntry, AgentRecord, OwnershipDeclaration};
use confguard::services::OwnershipValidator;

/// Builds a declaration with `agents` agents owning `paths_per_agent`
/// distinct paths each, plus one shared path to guarantee a conflict.
fn build_declaration(agents: usize, paths_per_agent: usize) -> OwnershipDeclaration {
    let records = (0..agents)
        .map(|i| {
            let mut owns: Vec<String> = (0..paths_per_agent)
                .map(|j| format!("services/agent_{i}/file_{j}.yaml"))
                .collect();
            owns.push("shared/CONVENTIONS.md".to_string());
            AgentRecord {
                name: format!("agent-{i}"),
                entry: Ok(AgentEntry {
                    description: Some("generated".to_string()),
                    owns: Some(owns),
                    can_write: Some(Vec::new()),
                    read_only: Some(Vec::new()),
                }),
            }
        })
        .collect();
    OwnershipDeclaration { agents: records }
}

fn bench_find_conflicts(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_conflicts");

    for agents in [4, 16, 64] {
        let declaration = build_declaration(agents, 32);
        let total_paths = agents * 33;
        group.throughput(Throughput::Elements(total_paths as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(agents),
            &declaration,
            |b, declaration| {
                b.iter(|| OwnershipValidator::find_conflicts(black_box(declaration)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_find_conflicts);
criterion_main!(benches);

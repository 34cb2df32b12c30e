//! Validation services.
//!
//! The service layer holds the two validation tracks: the schema track
//! (document loader, type resolver, schema engine, reference resolver,
//! orchestrator) and the ownership track (declaration loader, agent field
//! validator, conflict detector, aggregator).

mod document_loader;
mod orchestrator;
mod ownership;
mod reference_resolver;
mod schema_engine;
mod type_resolver;

pub use document_loader::{DocumentLoader, FrontMatterParser, LoadError};
pub use orchestrator::{Phase, ValidationOrchestrator, collect_category_files};
pub use ownership::{OWNERSHIP_FILE, OwnershipValidator};
pub use reference_resolver::{MissingReference, ReferenceResolver, SCHEMA_REF_KEY};
pub use schema_engine::{SchemaEngine, SchemaViolation, TypedModelEngine};
pub use type_resolver::{Resolution, TypeResolver};

//! Data models for confguard.
//!
//! This module contains the core data structures used throughout the
//! system: governed documents, category descriptors, typed card models,
//! validation reports, and ownership declarations.

pub mod cards;
mod category;
mod document;
mod ownership;
mod report;

pub use cards::{
    DataCardConfig, LlmModelCard, PromptTemplateCard, ResearcherAiConfig, SchemaClassConfig,
    SchemaProperty, TenantGroupConfig, ToolCard, ToolParameter, UxConfig,
};
pub use category::{CATEGORIES, Category, Discriminator, DocumentFormat, DocumentType};
pub use document::{Document, FrontMatter};
pub use ownership::{
    AgentEntry, AgentRecord, OwnershipDeclaration, OwnershipIssue, OwnershipReport, RepoReport,
};
pub use report::{FailureKind, ValidationOutcome, ValidationRecord, ValidationReport};

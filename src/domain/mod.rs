//! Core domain layer. No external I/O dependencies.
//!
//! Entities and business rules live here. Dependencies flow inward.

pub mod entities;
pub mod errors;
pub mod prompt;

pub use entities::{
    BuildRule, DeployOutcome, DeploymentManifest, GeneratedDocument, INDEX_FILE, Profile,
    ProjectName, Username,
};
pub use errors::DomainError;
pub use prompt::{PromptTemplate, RenderedPrompt};

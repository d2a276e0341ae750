//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// GitHub answered with something other than 200. The workflow stops here.
    #[error("Error fetching GitHub profile data. Status code: {0}")]
    ProfileStatus(u16),

    #[error("Profile fetch failed: {0}")]
    Profile(String),

    #[error("AI generation failed: {0}")]
    Ai(String),

    #[error("Staging failed: {0}")]
    Staging(String),

    /// The deployment tool could not be run at all (missing binary, I/O).
    /// A tool that runs and exits non-zero is a `DeployOutcome::Failed`, not this.
    #[error("Deployment tool error: {0}")]
    Deploy(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

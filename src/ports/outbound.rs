//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{DeployOutcome, DomainError, GeneratedDocument, Profile, ProjectName, Username};

/// Public profile source (GitHub REST API).
#[async_trait::async_trait]
pub trait ProfilePort: Send + Sync {
    /// Fetch the profile for `username`. Any non-200 answer is
    /// `DomainError::ProfileStatus` and yields no profile.
    async fn fetch_profile(&self, username: &Username) -> Result<Profile, DomainError>;
}

/// Page generator (hosted language model).
#[async_trait::async_trait]
pub trait GeneratorPort: Send + Sync {
    /// Produce one HTML/CSS document from the profile. The returned text is not validated.
    async fn generate(&self, profile: &Profile) -> Result<GeneratedDocument, DomainError>;
}

/// Deployment backend: submit a build, get an outcome.
#[async_trait::async_trait]
pub trait DeployPort: Send + Sync {
    /// Stage `document` as project `project` and deploy it.
    ///
    /// `Ok(DeployOutcome::Failed)` when the tool ran and rejected the deployment;
    /// `Err` only when staging or launching the tool failed.
    async fn deploy(
        &self,
        document: &GeneratedDocument,
        project: &ProjectName,
    ) -> Result<DeployOutcome, DomainError>;
}

//! Portfolio service. Orchestrates fetch → generate → deploy.
//!
//! Strictly sequential; each step runs only if the previous one produced its value.

use crate::domain::{DeployOutcome, DomainError, Username};
use crate::ports::{DeployPort, GeneratorPort, ProfilePort};
use std::sync::Arc;
use tracing::info;

/// Which step is running. Lets the UI show progress without owning the workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    FetchProfile,
    Generate,
    Deploy,
}

impl Step {
    pub fn label(self) -> &'static str {
        match self {
            Step::FetchProfile => "Fetching GitHub profile",
            Step::Generate => "Generating portfolio page",
            Step::Deploy => "Deploying to Vercel",
        }
    }
}

pub struct PortfolioService {
    profiles: Arc<dyn ProfilePort>,
    generator: Arc<dyn GeneratorPort>,
    deployer: Arc<dyn DeployPort>,
}

impl PortfolioService {
    pub fn new(
        profiles: Arc<dyn ProfilePort>,
        generator: Arc<dyn GeneratorPort>,
        deployer: Arc<dyn DeployPort>,
    ) -> Self {
        Self {
            profiles,
            generator,
            deployer,
        }
    }

    /// Run the workflow once for `username`.
    pub async fn create_portfolio(&self, username: &Username) -> Result<DeployOutcome, DomainError> {
        self.create_portfolio_with(username, |_| {}).await
    }

    /// Same as [`create_portfolio`](Self::create_portfolio), calling `on_step` before each step.
    pub async fn create_portfolio_with(
        &self,
        username: &Username,
        mut on_step: impl FnMut(Step) + Send,
    ) -> Result<DeployOutcome, DomainError> {
        on_step(Step::FetchProfile);
        let profile = self.profiles.fetch_profile(username).await?;

        on_step(Step::Generate);
        let document = self.generator.generate(&profile).await?;
        info!(username = %username, html_len = document.len(), "page generated");

        let project = username.project_name();
        on_step(Step::Deploy);
        let outcome = self.deployer.deploy(&document, &project).await?;
        info!(
            username = %username,
            project = %project,
            live = outcome.is_live(),
            "portfolio workflow finished"
        );
        Ok(outcome)
    }
}

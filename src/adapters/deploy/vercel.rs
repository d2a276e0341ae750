//! Vercel CLI integration. Implements DeployPort.
//!
//! Stages `index.html` + `vercel.json` in a fresh temporary directory and runs
//! `vercel --token <T> -y --prod` there. The directory is removed when the call
//! returns, whatever the outcome.

use crate::domain::{
    DeployOutcome, DeploymentManifest, DomainError, GeneratedDocument, INDEX_FILE, ProjectName,
};
use crate::ports::DeployPort;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tempfile::TempDir;
use tokio::fs;
use tokio::process::Command;
use tracing::{debug, info, warn};

pub const MANIFEST_FILE: &str = "vercel.json";

/// Runs the Vercel CLI (or any binary with the same flags) against a staged project.
pub struct VercelDeployer {
    bin: PathBuf,
    token: String,
    staging_root: Option<PathBuf>,
}

impl VercelDeployer {
    /// # Arguments
    /// * `bin` - Executable name or path (e.g., "vercel")
    /// * `token` - Deployment token passed via `--token`
    pub fn new(bin: impl AsRef<Path>, token: impl Into<String>) -> Self {
        Self {
            bin: bin.as_ref().to_path_buf(),
            token: token.into(),
            staging_root: None,
        }
    }

    /// Create temporary directories under `root` instead of the system temp dir.
    pub fn with_staging_root(mut self, root: impl AsRef<Path>) -> Self {
        self.staging_root = Some(root.as_ref().to_path_buf());
        self
    }

    fn staging_dir(&self) -> Result<TempDir, DomainError> {
        let mut builder = tempfile::Builder::new();
        builder.prefix("gh-portfolio-");
        let dir = match &self.staging_root {
            Some(root) => builder.tempdir_in(root),
            None => builder.tempdir(),
        };
        dir.map_err(|e| DomainError::Staging(format!("create temp dir: {}", e)))
    }
}

/// Write `<root>/<project>/index.html` and `<root>/<project>/vercel.json`.
/// Returns the project directory.
pub async fn stage_project(
    root: &Path,
    document: &GeneratedDocument,
    project: &ProjectName,
) -> Result<PathBuf, DomainError> {
    let project_dir = root.join(project.as_str());
    fs::create_dir(&project_dir)
        .await
        .map_err(|e| DomainError::Staging(format!("create project dir: {}", e)))?;

    fs::write(project_dir.join(INDEX_FILE), document.as_str())
        .await
        .map_err(|e| DomainError::Staging(format!("write {}: {}", INDEX_FILE, e)))?;

    let manifest = DeploymentManifest::static_site(project);
    let json = serde_json::to_string_pretty(&manifest)
        .map_err(|e| DomainError::Staging(format!("serialize manifest: {}", e)))?;
    fs::write(project_dir.join(MANIFEST_FILE), json)
        .await
        .map_err(|e| DomainError::Staging(format!("write {}: {}", MANIFEST_FILE, e)))?;

    debug!(path = %project_dir.display(), "project staged");
    Ok(project_dir)
}

#[async_trait]
impl DeployPort for VercelDeployer {
    async fn deploy(
        &self,
        document: &GeneratedDocument,
        project: &ProjectName,
    ) -> Result<DeployOutcome, DomainError> {
        // Dropped on every return path below, which deletes the directory.
        let staging = self.staging_dir()?;
        let project_dir = stage_project(staging.path(), document, project).await?;

        info!(
            project = %project,
            bin = %self.bin.display(),
            html_len = document.len(),
            "running deployment tool"
        );

        let output = Command::new(&self.bin)
            .arg("--token")
            .arg(&self.token)
            .arg("-y")
            .arg("--prod")
            .current_dir(&project_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| {
                DomainError::Deploy(format!("failed to run {}: {}", self.bin.display(), e))
            })?;

        let outcome = if output.status.success() {
            let url = String::from_utf8_lossy(&output.stdout).trim().to_string();
            info!(project = %project, url = %url, "deployment succeeded");
            DeployOutcome::Live { url }
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            warn!(
                project = %project,
                code = ?output.status.code(),
                stderr_len = stderr.len(),
                "deployment tool exited non-zero"
            );
            DeployOutcome::Failed { stderr }
        };

        if let Err(e) = staging.close() {
            warn!(error = %e, "failed to remove staging directory");
        }
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_stage_writes_exactly_two_files() {
        let root = tempfile::tempdir().unwrap();
        let project = ProjectName::new("alice-portfolio").unwrap();
        let doc = GeneratedDocument::new("<html>...</html>");

        let dir = stage_project(root.path(), &doc, &project).await.unwrap();

        assert_eq!(dir, root.path().join("alice-portfolio"));
        let mut names: Vec<String> = std::fs::read_dir(&dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        assert_eq!(names, vec!["index.html", "vercel.json"]);

        assert_eq!(
            std::fs::read_to_string(dir.join("index.html")).unwrap(),
            "<html>...</html>"
        );
        let manifest: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(dir.join("vercel.json")).unwrap())
                .unwrap();
        assert_eq!(manifest["name"], "alice-portfolio");
        assert_eq!(manifest["version"], 2);
        assert_eq!(manifest["builds"][0]["use"], "@vercel/static");
    }

    #[tokio::test]
    async fn test_missing_binary_is_error_and_cleans_up() {
        let root = tempfile::tempdir().unwrap();
        let deployer = VercelDeployer::new("/nonexistent/gh-portfolio-deploy-bin", "t")
            .with_staging_root(root.path());
        let project = ProjectName::new("alice-portfolio").unwrap();

        let err = deployer
            .deploy(&GeneratedDocument::new("<html></html>"), &project)
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Deploy(_)));
        assert_eq!(std::fs::read_dir(root.path()).unwrap().count(), 0);
    }
}

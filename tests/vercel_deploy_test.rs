#![cfg(unix)]

mod common;

use common::{LIVE_URL, TOKEN, entries, failing_cli, succeeding_cli};
use gh_portfolio::adapters::deploy::VercelDeployer;
use gh_portfolio::domain::{DeployOutcome, GeneratedDocument, ProjectName};
use gh_portfolio::ports::DeployPort;
use tempfile::TempDir;

fn project() -> ProjectName {
    ProjectName::new("alice-portfolio").unwrap()
}

#[tokio::test]
async fn test_success_reports_url_and_cleans_up() {
    let bin_dir = TempDir::new().unwrap();
    let staging = TempDir::new().unwrap();
    let log = bin_dir.path().join("cwd.log");
    let cli = succeeding_cli(bin_dir.path(), &log);

    let deployer = VercelDeployer::new(&cli, TOKEN).with_staging_root(staging.path());
    let outcome = deployer
        .deploy(&GeneratedDocument::new("<html>...</html>"), &project())
        .await
        .unwrap();

    assert_eq!(
        outcome,
        DeployOutcome::Live {
            url: LIVE_URL.to_string()
        }
    );
    let cwd = std::fs::read_to_string(&log).unwrap();
    assert!(cwd.trim_end().ends_with("/alice-portfolio"));
    assert_eq!(entries(staging.path()), 0);
}

#[tokio::test]
async fn test_failure_reports_stderr_and_cleans_up() {
    let bin_dir = TempDir::new().unwrap();
    let staging = TempDir::new().unwrap();
    let cli = failing_cli(bin_dir.path());

    let deployer = VercelDeployer::new(&cli, "wrong").with_staging_root(staging.path());
    let outcome = deployer
        .deploy(&GeneratedDocument::new("<html>...</html>"), &project())
        .await
        .unwrap();

    match outcome {
        DeployOutcome::Failed { stderr } => assert!(stderr.contains("Error: invalid token")),
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert_eq!(entries(staging.path()), 0);
}

#[tokio::test]
async fn test_repeated_runs_use_independent_directories() {
    let bin_dir = TempDir::new().unwrap();
    let staging = TempDir::new().unwrap();
    let log = bin_dir.path().join("cwd.log");
    let cli = succeeding_cli(bin_dir.path(), &log);
    let deployer = VercelDeployer::new(&cli, TOKEN).with_staging_root(staging.path());
    let doc = GeneratedDocument::new("<html>...</html>");

    deployer.deploy(&doc, &project()).await.unwrap();
    deployer.deploy(&doc, &project()).await.unwrap();

    let log = std::fs::read_to_string(&log).unwrap();
    let dirs: Vec<&str> = log.lines().collect();
    assert_eq!(dirs.len(), 2);
    assert_ne!(dirs[0], dirs[1]);
    assert_eq!(entries(staging.path()), 0);
}

//! Final console report for a run.

use crate::domain::{DeployOutcome, DomainError};

/// Text printed for a finished deployment.
pub fn render_outcome(outcome: &DeployOutcome) -> String {
    match outcome {
        DeployOutcome::Live { url } => format!(
            "Deployment is successful!\nYour website is live at: {}\n",
            url
        ),
        DeployOutcome::Failed { stderr } => format!(
            "Deployment failed. Please see the error message below:\n{}\n",
            stderr.trim_end()
        ),
    }
}

/// Text printed when the workflow stops with an error.
pub fn render_error(err: &DomainError) -> String {
    format!("{}\n", err)
}

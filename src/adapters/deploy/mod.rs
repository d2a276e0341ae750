//! Deployment adapters. Implement DeployPort.

pub mod vercel;

pub use vercel::{MANIFEST_FILE, VercelDeployer, stage_project};

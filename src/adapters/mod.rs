//! Infrastructure adapters. Implement outbound ports.
//!
//! GitHub, LLM, deployment CLI, terminal UI. Map errors to DomainError.

pub mod ai;
pub mod deploy;
pub mod github;
pub mod ui;

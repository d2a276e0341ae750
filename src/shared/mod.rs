//! Cross-cutting pieces shared by adapters and wiring.

pub mod config;

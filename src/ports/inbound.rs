//! Inbound port. UI (adapter) calls into the application.

use crate::domain::{DomainError, Username};

/// Input port: where the username comes from when it is not given on the command line.
pub trait InputPort: Send + Sync {
    fn ask_username(&self) -> Result<Username, DomainError>;
}

//! Implements InputPort. Inquire-based username prompt.

use crate::domain::{DomainError, Username};
use crate::ports::InputPort;
use inquire::Text;
use inquire::validator::Validation;

/// TUI adapter. Inquire prompts.
#[derive(Default)]
pub struct TuiInputPort;

impl TuiInputPort {
    pub fn new() -> Self {
        Self
    }
}

impl InputPort for TuiInputPort {
    fn ask_username(&self) -> Result<Username, DomainError> {
        let raw = Text::new("GitHub username:")
            .with_validator(|input: &str| {
                Ok(match Username::parse(input) {
                    Ok(_) => Validation::Valid,
                    Err(e) => Validation::Invalid(e.to_string().into()),
                })
            })
            .prompt()
            .map_err(|e| DomainError::InvalidInput(e.to_string()))?;
        Username::parse(&raw)
    }
}

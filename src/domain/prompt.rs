//! Prompt template for portfolio generation.
//!
//! The instruction is a value, not inline string building, so adapters and tests
//! can substitute it.

use crate::domain::Profile;

/// Placeholder in `user` replaced by the profile's raw JSON.
pub const PROFILE_PLACEHOLDER: &str = "{profile}";

const PORTFOLIO_SYSTEM: &str = "You are an expert web designer. Generate HTML and CSS code that is professional, aesthetically pleasing, and user-friendly.";

const PORTFOLIO_USER: &str = "Create a professional, elegant, and responsive portfolio website for a developer.
The website should include a navigation bar, a header section with the user's name and a brief introduction,
an About Me section with the user's profile image and a description, a Projects section showcasing the user's work,
and a Contact section with a form. It should also include a footer with copyright information.
The design should be modern, with a clean layout, appealing visuals, and subtle animations.
Include the following information from the provided GitHub profile:
---
{profile}
";

#[derive(Debug, Clone)]
pub struct PromptTemplate {
    pub system: String,
    pub user: String,
}

/// System + user message pair ready to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPrompt {
    pub system: String,
    pub user: String,
}

impl PromptTemplate {
    pub fn new(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            user: user.into(),
        }
    }

    /// The fixed web-designer instruction used for every run.
    pub fn portfolio() -> Self {
        Self::new(PORTFOLIO_SYSTEM, PORTFOLIO_USER)
    }

    /// Substitute the profile verbatim. A template without the placeholder gets the
    /// profile appended so the data is never silently dropped.
    pub fn render(&self, profile: &Profile) -> RenderedPrompt {
        let user = if self.user.contains(PROFILE_PLACEHOLDER) {
            self.user.replace(PROFILE_PLACEHOLDER, profile.raw())
        } else {
            format!("{}\n{}", self.user, profile.raw())
        };
        RenderedPrompt {
            system: self.system.clone(),
            user,
        }
    }
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self::portfolio()
    }
}

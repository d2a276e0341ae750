//! Mock AI adapter for running without API calls.
//!
//! Returns a fixed page built from the profile for development and testing.

use crate::domain::{DomainError, GeneratedDocument, Profile};
use crate::ports::GeneratorPort;
use std::time::Duration;
use tracing::info;

/// Mock generator.
///
/// Returns a minimal HTML page without making API calls.
/// Simulates network latency with configurable delay.
pub struct MockGeneratorAdapter {
    /// Simulated network delay in milliseconds.
    delay_ms: u64,
}

impl MockGeneratorAdapter {
    /// Create a new mock adapter with default delay (100ms).
    pub fn new() -> Self {
        Self { delay_ms: 100 }
    }

    /// Create a mock adapter with custom delay.
    pub fn with_delay(delay_ms: u64) -> Self {
        Self { delay_ms }
    }
}

impl Default for MockGeneratorAdapter {
    fn default() -> Self {
        Self::new()
    }
}

/// Minimal escaping for text placed in element content.
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[async_trait::async_trait]
impl GeneratorPort for MockGeneratorAdapter {
    async fn generate(&self, profile: &Profile) -> Result<GeneratedDocument, DomainError> {
        info!(
            profile_len = profile.raw().len(),
            "[MOCK] Simulating page generation"
        );

        tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;

        let name = escape_html(profile.display_name().unwrap_or("Developer"));
        let bio = profile
            .data()
            .get("bio")
            .and_then(|v| v.as_str())
            .map(escape_html)
            .unwrap_or_default();

        Ok(GeneratedDocument::new(format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
             <title>{name} | Portfolio</title>\n\
             <style>body{{font-family:sans-serif;margin:0 auto;max-width:48rem;padding:2rem}}</style>\n\
             </head>\n<body>\n<header><h1>{name}</h1><p>{bio}</p></header>\n\
             <footer><p>[MOCK] generated without a language model</p></footer>\n\
             </body>\n</html>\n"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_adapter() {
        let adapter = MockGeneratorAdapter::with_delay(1);
        let profile =
            Profile::from_body(r#"{"login":"alice","name":"Alice <A>","bio":"Rust & Go"}"#)
                .unwrap();

        let doc = adapter.generate(&profile).await.unwrap();

        assert!(doc.as_str().starts_with("<!DOCTYPE html>"));
        assert!(doc.as_str().contains("<h1>Alice &lt;A&gt;</h1>"));
        assert!(doc.as_str().contains("Rust &amp; Go"));
    }
}

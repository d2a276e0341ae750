//! Domain entities. Pure data structures for the core business.
//!
//! No HTTP or process types here; adapters map into these.

use crate::domain::DomainError;
use serde::Serialize;
use std::fmt;

/// A GitHub login. Restricted to GitHub's alphabet (ASCII alphanumerics and `-`)
/// so it can be templated into a URL path and a directory name as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidInput("username is empty".into()));
        }
        if let Some(bad) = trimmed
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '-'))
        {
            return Err(DomainError::InvalidInput(format!(
                "username {:?} contains invalid character {:?}",
                trimmed, bad
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Deployment project name for this user: `<username>-portfolio`.
    pub fn project_name(&self) -> ProjectName {
        ProjectName(format!("{}-portfolio", self.0))
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Deployment project name. Always a single path component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectName(String);

impl ProjectName {
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\']) {
            return Err(DomainError::InvalidInput(format!(
                "project name {:?} is not a single path component",
                name
            )));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Raw account data returned by the GitHub API. No schema is enforced:
/// `raw` is the exact response body and is what goes into the prompt.
#[derive(Debug, Clone)]
pub struct Profile {
    raw: String,
    data: serde_json::Value,
}

impl Profile {
    /// Wrap a response body. Fails only if the body is not JSON at all.
    pub fn from_body(raw: impl Into<String>) -> Result<Self, DomainError> {
        let raw = raw.into();
        let data = serde_json::from_str(&raw)
            .map_err(|e| DomainError::Profile(format!("response body is not JSON: {}", e)))?;
        Ok(Self { raw, data })
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn data(&self) -> &serde_json::Value {
        &self.data
    }

    /// Display name, falling back to the login. Used for logs and the mock page only.
    pub fn display_name(&self) -> Option<&str> {
        self.data
            .get("name")
            .and_then(|v| v.as_str())
            .or_else(|| self.data.get("login").and_then(|v| v.as_str()))
    }
}

/// Markup produced by the language model. Never validated or parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedDocument(String);

impl GeneratedDocument {
    pub fn new(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// `vercel.json`: tells the deployment tool how to serve the staged files.
#[derive(Debug, Clone, Serialize)]
pub struct DeploymentManifest {
    pub name: String,
    pub version: u32,
    pub builds: Vec<BuildRule>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BuildRule {
    pub src: String,
    #[serde(rename = "use")]
    pub builder: String,
}

/// File the generated document is staged under.
pub const INDEX_FILE: &str = "index.html";

impl DeploymentManifest {
    /// Static site manifest: a single `index.html` served by `@vercel/static`.
    pub fn static_site(project: &ProjectName) -> Self {
        Self {
            name: project.as_str().to_string(),
            version: 2,
            builds: vec![BuildRule {
                src: INDEX_FILE.to_string(),
                builder: "@vercel/static".to_string(),
            }],
        }
    }
}

/// Terminal result of a deployment attempt that actually ran the tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployOutcome {
    /// Exit code 0; stdout holds the live URL.
    Live { url: String },
    /// Non-zero exit; stderr holds the tool's diagnostic.
    Failed { stderr: String },
}

impl DeployOutcome {
    pub fn is_live(&self) -> bool {
        matches!(self, DeployOutcome::Live { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_trims_and_accepts_hyphens() {
        let u = Username::parse("  alice-dev ").unwrap();
        assert_eq!(u.as_str(), "alice-dev");
        assert_eq!(u.project_name().as_str(), "alice-dev-portfolio");
    }

    #[test]
    fn test_username_rejects_empty_and_path_chars() {
        assert!(matches!(
            Username::parse("   "),
            Err(DomainError::InvalidInput(_))
        ));
        assert!(Username::parse("../etc").is_err());
        assert!(Username::parse("alice/bob").is_err());
        assert!(Username::parse("alice?x=1").is_err());
    }

    #[test]
    fn test_project_name_single_component() {
        assert!(ProjectName::new("alice-portfolio").is_ok());
        assert!(ProjectName::new("").is_err());
        assert!(ProjectName::new("..").is_err());
        assert!(ProjectName::new("a/b").is_err());
    }

    #[test]
    fn test_profile_keeps_raw_body() {
        let body = r#"{"login":"alice","name":null,"bio":"Rustacean"}"#;
        let p = Profile::from_body(body).unwrap();
        assert_eq!(p.raw(), body);
        assert_eq!(p.display_name(), Some("alice"));
        assert!(Profile::from_body("<html>rate limited</html>").is_err());
    }

    #[test]
    fn test_manifest_shape() {
        let project = ProjectName::new("alice-portfolio").unwrap();
        let json = serde_json::to_value(DeploymentManifest::static_site(&project)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "alice-portfolio",
                "version": 2,
                "builds": [{"src": "index.html", "use": "@vercel/static"}]
            })
        );
    }
}

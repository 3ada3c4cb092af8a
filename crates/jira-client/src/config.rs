//! Connection configuration.
//!
//! Connection parameters arrive as a flat key-value JSON file (the Rust
//! rendition of the old `jira.properties`): site domain, account email,
//! API token, and target project key.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ClientError, Result};

fn default_estimate_field() -> String {
    // Story points are an instance-specific custom field; this is the
    // id Jira Cloud assigns by default.
    "customfield_10016".to_string()
}

/// Flat connection configuration for one Jira site and project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JiraConfig {
    /// Site domain, e.g. `example.atlassian.net`, or a full base URL.
    pub domain: String,
    /// Account email for basic auth.
    pub email: String,
    /// API token paired with the email.
    pub token: String,
    /// Project key new issues are filed under, e.g. `PROJ`.
    pub project: String,
    /// Custom field id carrying the story-point estimate.
    #[serde(default = "default_estimate_field")]
    pub estimate_field: String,
}

impl JiraConfig {
    /// Loads the configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| ClientError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| ClientError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Base URL for REST calls, without a trailing slash.
    pub fn base_url(&self) -> String {
        let trimmed = self.domain.trim().trim_end_matches('/');
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            trimmed.to_string()
        } else {
            format!("https://{trimmed}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flat_config() {
        let config: JiraConfig = serde_json::from_str(
            r#"{
                "domain": "example.atlassian.net",
                "email": "dev@example.com",
                "token": "secret",
                "project": "PROJ"
            }"#,
        )
        .expect("parse config");
        assert_eq!(config.project, "PROJ");
        assert_eq!(config.estimate_field, "customfield_10016");
    }

    #[test]
    fn base_url_normalizes_domain() {
        let mut config: JiraConfig = serde_json::from_str(
            r#"{"domain": "example.atlassian.net/", "email": "e", "token": "t", "project": "P"}"#,
        )
        .expect("parse config");
        assert_eq!(config.base_url(), "https://example.atlassian.net");

        config.domain = "https://jira.internal:8443".to_string();
        assert_eq!(config.base_url(), "https://jira.internal:8443");
    }

    #[test]
    fn missing_key_is_a_parse_error() {
        let result: std::result::Result<JiraConfig, _> =
            serde_json::from_str(r#"{"domain": "d", "email": "e"}"#);
        assert!(result.is_err());
    }
}

//! Jira Cloud REST client.
//!
//! Posts issue-creation requests to the v2 REST API with basic auth.
//! Implements the pipeline's [`TicketClient`] seam; everything above this
//! crate stays unaware of HTTP.

use std::time::Duration;

use anyhow::Context;
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{debug, info};

use jira_model::{StoryRequest, SubTaskRequest};
use jira_submit::TicketClient;

use crate::config::JiraConfig;
use crate::error::{ClientError, Result};

/// HTTP request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Issue creation endpoint, REST API v2 (plain-text description).
const ISSUE_ENDPOINT: &str = "/rest/api/2/issue";

/// Client handle for one Jira site and project.
pub struct JiraClient {
    http: Client,
    base_url: String,
    email: String,
    token: String,
    project: String,
    estimate_field: String,
}

#[derive(Debug, Deserialize)]
struct CreatedIssue {
    key: String,
}

impl JiraClient {
    /// Builds a client from the loaded configuration.
    pub fn new(config: &JiraConfig) -> Result<Self> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            http,
            base_url: config.base_url(),
            email: config.email.clone(),
            token: config.token.clone(),
            project: config.project.clone(),
            estimate_field: config.estimate_field.clone(),
        })
    }

    /// Creates an issue and returns its key, e.g. `PROJ-42`.
    fn post_issue(&self, fields: Value) -> Result<String> {
        let url = format!("{}{ISSUE_ENDPOINT}", self.base_url);
        debug!(%url, "posting issue");
        let response = self
            .http
            .post(&url)
            .basic_auth(&self.email, Some(&self.token))
            .header(ACCEPT, "application/json")
            .json(&json!({ "fields": fields }))
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ClientError::Api {
                status: status.as_u16(),
                message: extract_api_message(&body),
            });
        }
        let created: CreatedIssue = response.json()?;
        Ok(created.key)
    }

    fn story_fields(&self, request: &StoryRequest) -> Value {
        json!({
            "project": { "key": self.project },
            "issuetype": { "name": "Story" },
            "summary": request.summary,
            "description": request.description,
            "components": [{ "name": request.component }],
        })
    }

    fn sub_task_fields(&self, request: &SubTaskRequest) -> Value {
        let mut fields = json!({
            "project": { "key": self.project },
            "issuetype": { "name": "Sub-task" },
            "parent": { "key": request.parent },
            "summary": request.summary,
            "description": request.description,
            "components": [{ "name": request.component }],
            "labels": labels_value(&request.label),
        });
        fields[self.estimate_field.as_str()] = json!(request.estimate);
        fields
    }
}

impl TicketClient for JiraClient {
    fn create_story(&self, request: &StoryRequest) -> anyhow::Result<()> {
        let key = self
            .post_issue(self.story_fields(request))
            .context("create story")?;
        info!(issue_key = %key, "story created");
        Ok(())
    }

    fn create_sub_task(&self, request: &SubTaskRequest) -> anyhow::Result<()> {
        let key = self
            .post_issue(self.sub_task_fields(request))
            .context("create sub-task")?;
        info!(issue_key = %key, parent = %request.parent, "sub-task created");
        Ok(())
    }
}

/// Jira rejects empty-string labels; an empty cell means no label.
fn labels_value(label: &str) -> Value {
    let trimmed = label.trim();
    if trimmed.is_empty() {
        json!([])
    } else {
        json!([trimmed])
    }
}

/// Pulls the human-readable messages out of a Jira error body.
///
/// Error bodies look like
/// `{"errorMessages": ["..."], "errors": {"field": "..."}}`; anything
/// unparseable falls back to the raw body.
fn extract_api_message(body: &str) -> String {
    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return fallback_message(body);
    };
    let mut messages = Vec::new();
    if let Some(list) = value.get("errorMessages").and_then(Value::as_array) {
        for entry in list {
            if let Some(text) = entry.as_str() {
                messages.push(text.to_string());
            }
        }
    }
    if let Some(map) = value.get("errors").and_then(Value::as_object) {
        for (field, detail) in map {
            if let Some(text) = detail.as_str() {
                messages.push(format!("{field}: {text}"));
            }
        }
    }
    if messages.is_empty() {
        fallback_message(body)
    } else {
        messages.join("; ")
    }
}

fn fallback_message(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "no error detail provided".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> JiraClient {
        let config = JiraConfig {
            domain: "example.atlassian.net".to_string(),
            email: "dev@example.com".to_string(),
            token: "secret".to_string(),
            project: "PROJ".to_string(),
            estimate_field: "customfield_10016".to_string(),
        };
        JiraClient::new(&config).expect("build client")
    }

    #[test]
    fn story_payload_shape() {
        let client = test_client();
        let fields = client.story_fields(&StoryRequest {
            summary: "Fix bug".to_string(),
            description: "Null pointer".to_string(),
            component: "Auth".to_string(),
        });
        assert_eq!(fields["project"]["key"], "PROJ");
        assert_eq!(fields["issuetype"]["name"], "Story");
        assert_eq!(fields["components"][0]["name"], "Auth");
        assert!(fields.get("parent").is_none());
    }

    #[test]
    fn sub_task_payload_carries_parent_and_estimate() {
        let client = test_client();
        let fields = client.sub_task_fields(&SubTaskRequest {
            parent: "PROJ-1".to_string(),
            summary: "Fix bug".to_string(),
            description: "Null pointer".to_string(),
            component: "Auth".to_string(),
            label: "bug".to_string(),
            estimate: 3,
        });
        assert_eq!(fields["parent"]["key"], "PROJ-1");
        assert_eq!(fields["issuetype"]["name"], "Sub-task");
        assert_eq!(fields["labels"][0], "bug");
        assert_eq!(fields["customfield_10016"], 3);
    }

    #[test]
    fn empty_label_sends_no_labels() {
        assert_eq!(labels_value("  "), json!([]));
        assert_eq!(labels_value("bug"), json!(["bug"]));
    }

    #[test]
    fn api_message_extraction() {
        let body = r#"{"errorMessages":["Parent issue not found"],"errors":{"components":"Component is not valid"}}"#;
        assert_eq!(
            extract_api_message(body),
            "Parent issue not found; components: Component is not valid"
        );
        assert_eq!(extract_api_message("not json"), "not json");
        assert_eq!(extract_api_message(""), "no error detail provided");
    }
}

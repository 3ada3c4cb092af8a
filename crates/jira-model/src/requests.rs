//! Ticket creation request payloads.
//!
//! One request per CSV data row, already coerced: string fields arrive as
//! read from the file, the estimate as a whole story-point value.

use serde::{Deserialize, Serialize};

/// Request to create a user story.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryRequest {
    /// Summary line.
    pub summary: String,
    /// Body text.
    pub description: String,
    /// Component name.
    pub component: String,
}

/// Request to create a sub-task under an existing issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubTaskRequest {
    /// Key of the parent issue, e.g. `PROJ-1`.
    pub parent: String,
    /// Summary line.
    pub summary: String,
    /// Body text.
    pub description: String,
    /// Component name.
    pub component: String,
    /// Label attached to the sub-task.
    pub label: String,
    /// Story-point estimate.
    pub estimate: i64,
}

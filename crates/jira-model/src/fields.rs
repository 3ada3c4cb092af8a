//! Type-safe enumerations for the ticket vocabulary.
//!
//! These enums provide compile-time type safety for the concepts the
//! mapping and submission layers exchange as strings at the CSV boundary.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A ticket field a CSV column can be bound to.
///
/// The vocabulary is closed. [`TargetField::Skip`] is the sentinel for
/// "this column maps to nothing" and is the only value more than one
/// column may select at the same time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetField {
    /// Ticket summary line.
    Summary,
    /// Ticket body text.
    Description,
    /// Component name the ticket is filed under.
    Component,
    /// Parent issue key (sub-tasks only).
    Parent,
    /// Label attached to the ticket.
    Label,
    /// Story-point estimate (sub-tasks only).
    Estimate,
    /// Column is not mapped to any field.
    Skip,
}

impl TargetField {
    /// All fields in canonical display order, `skip` last.
    pub const ALL: [TargetField; 7] = [
        TargetField::Summary,
        TargetField::Description,
        TargetField::Component,
        TargetField::Parent,
        TargetField::Label,
        TargetField::Estimate,
        TargetField::Skip,
    ];

    /// Returns the lowercase name as shown to the user.
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetField::Summary => "summary",
            TargetField::Description => "description",
            TargetField::Component => "component",
            TargetField::Parent => "parent",
            TargetField::Label => "label",
            TargetField::Estimate => "estimate",
            TargetField::Skip => "skip",
        }
    }

    /// Returns true for the unmapped sentinel.
    pub fn is_skip(&self) -> bool {
        matches!(self, TargetField::Skip)
    }

    /// Case-insensitive exact match against the field vocabulary.
    ///
    /// Used to pre-select a binding when a CSV header happens to carry a
    /// field name. Returns `None` for anything outside the vocabulary.
    pub fn matching(name: &str) -> Option<TargetField> {
        let trimmed = name.trim();
        TargetField::ALL
            .into_iter()
            .find(|field| trimmed.eq_ignore_ascii_case(field.as_str()))
    }
}

impl fmt::Display for TargetField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TargetField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TargetField::matching(s).ok_or_else(|| format!("Unknown target field: {s}"))
    }
}

/// The kind of ticket a run creates, one per CSV data row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TicketVariant {
    /// A user story.
    Story,
    /// A sub-task under an existing parent issue.
    SubTask,
}

impl TicketVariant {
    /// Fields that must be bound to a column before a run may start.
    pub fn required_fields(&self) -> &'static [TargetField] {
        match self {
            TicketVariant::Story => &[
                TargetField::Summary,
                TargetField::Description,
                TargetField::Component,
            ],
            TicketVariant::SubTask => &[
                TargetField::Summary,
                TargetField::Description,
                TargetField::Component,
                TargetField::Parent,
                TargetField::Label,
                TargetField::Estimate,
            ],
        }
    }

    /// Returns the issue type name as Jira expects it.
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketVariant::Story => "Story",
            TicketVariant::SubTask => "Sub-task",
        }
    }
}

impl fmt::Display for TicketVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TicketVariant {
    type Err = String;

    /// Parse a variant name. Accepts the legacy command labels
    /// ("UserStory", "Sub-Task") as well as the short forms.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase().replace(['-', '_'], "");
        match normalized.as_str() {
            "STORY" | "USERSTORY" => Ok(TicketVariant::Story),
            "SUBTASK" => Ok(TicketVariant::SubTask),
            _ => Err(format!("Unknown ticket variant: {s}")),
        }
    }
}

//! Batch submission pipeline.
//!
//! Consumes the finalized bindings from the resolver, validates field
//! coverage for the chosen variant, then walks the data rows in order and
//! drives the external ticket client. Runs are strictly sequential; the
//! first client failure aborts the rest of the run.

use anyhow::Result;
use tracing::{debug, info, warn};

use jira_map::MappingResolver;
use jira_model::{StoryRequest, SubTaskRequest, TargetField, TicketVariant};

use crate::coerce::parse_estimate;
use crate::error::{RowFailure, SubmitError};

/// External ticket-creation collaborator.
///
/// Connection parameters, authentication, and transport concerns live
/// behind this seam; the pipeline only hands over fully-coerced requests.
pub trait TicketClient {
    /// Creates a user story.
    fn create_story(&self, request: &StoryRequest) -> Result<()>;

    /// Creates a sub-task under an existing issue.
    fn create_sub_task(&self, request: &SubTaskRequest) -> Result<()>;
}

/// Outcome of one submission run.
#[derive(Debug)]
pub struct SubmitReport {
    /// Tickets committed by the client, in row order.
    pub created: usize,
    /// The failure that aborted the run, if any. Rows after it were
    /// never attempted.
    pub failure: Option<RowFailure>,
}

impl SubmitReport {
    /// True when every row was committed.
    pub fn is_success(&self) -> bool {
        self.failure.is_none()
    }
}

/// Column indexes for the fields the chosen variant requires.
struct ResolvedColumns {
    summary: usize,
    description: usize,
    component: usize,
    sub_task: Option<SubTaskColumns>,
}

struct SubTaskColumns {
    parent: usize,
    label: usize,
    estimate: usize,
}

/// Fails with every unresolved required field when the bindings do not
/// cover the variant. Must pass before any row is processed; partial
/// validation is not permitted.
pub fn validate_coverage(
    resolver: &MappingResolver,
    variant: TicketVariant,
) -> std::result::Result<(), SubmitError> {
    resolve_columns(resolver, variant).map(|_| ())
}

fn resolve_columns(
    resolver: &MappingResolver,
    variant: TicketVariant,
) -> std::result::Result<ResolvedColumns, SubmitError> {
    let mut missing = Vec::new();
    let mut lookup = |field: TargetField| match resolver.field_column_index(field) {
        Some(index) => index,
        None => {
            missing.push(field);
            0
        }
    };
    let summary = lookup(TargetField::Summary);
    let description = lookup(TargetField::Description);
    let component = lookup(TargetField::Component);
    let sub_task = match variant {
        TicketVariant::Story => None,
        TicketVariant::SubTask => Some(SubTaskColumns {
            parent: lookup(TargetField::Parent),
            label: lookup(TargetField::Label),
            estimate: lookup(TargetField::Estimate),
        }),
    };
    if missing.is_empty() {
        Ok(ResolvedColumns {
            summary,
            description,
            component,
            sub_task,
        })
    } else {
        Err(SubmitError::MissingMappings(missing))
    }
}

/// Creates one ticket per data row via `client` and reports the outcome.
///
/// Rows are processed in input order. Cells missing from short rows read
/// as empty strings. The first client failure stops the run; the report's
/// `created` count covers only rows committed strictly before it.
pub fn run(
    resolver: &MappingResolver,
    variant: TicketVariant,
    rows: &[Vec<String>],
    client: &dyn TicketClient,
) -> std::result::Result<SubmitReport, SubmitError> {
    let columns = resolve_columns(resolver, variant)?;
    info!(variant = %variant, row_count = rows.len(), "submission run started");

    let mut created = 0usize;
    let mut failure = None;
    for (row_index, row) in rows.iter().enumerate() {
        let summary = cell(row, columns.summary);
        let description = cell(row, columns.description);
        let component = cell(row, columns.component);
        debug!(row = row_index, variant = %variant, "creating ticket");

        let result = match &columns.sub_task {
            None => client.create_story(&StoryRequest {
                summary: summary.to_string(),
                description: description.to_string(),
                component: component.to_string(),
            }),
            Some(extra) => client.create_sub_task(&SubTaskRequest {
                parent: cell(row, extra.parent).to_string(),
                summary: summary.to_string(),
                description: description.to_string(),
                component: component.to_string(),
                label: cell(row, extra.label).to_string(),
                estimate: parse_estimate(cell(row, extra.estimate)),
            }),
        };
        match result {
            Ok(()) => created += 1,
            Err(error) => {
                warn!(row = row_index, %error, "ticket creation failed, aborting run");
                failure = Some(RowFailure {
                    row: row_index,
                    error,
                });
                break;
            }
        }
    }
    info!(created, failed = failure.is_some(), "submission run finished");
    Ok(SubmitReport { created, failure })
}

fn cell(row: &[String], index: usize) -> &str {
    row.get(index).map(String::as_str).unwrap_or("")
}

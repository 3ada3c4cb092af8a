use std::cell::RefCell;

use anyhow::{Result, anyhow};

use jira_map::MappingResolver;
use jira_model::{StoryRequest, SubTaskRequest, TargetField, TicketVariant};
use jira_submit::{SubmitError, TicketClient, run, validate_coverage};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Call {
    Story(StoryRequest),
    SubTask(SubTaskRequest),
}

/// Records every call; fails the call at `fail_at`, counted across both
/// ticket kinds.
#[derive(Default)]
struct RecordingClient {
    calls: RefCell<Vec<Call>>,
    fail_at: Option<usize>,
}

impl RecordingClient {
    fn failing_at(index: usize) -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            fail_at: Some(index),
        }
    }

    fn check(&self) -> Result<()> {
        if self.fail_at == Some(self.calls.borrow().len()) {
            return Err(anyhow!("issue rejected by tracker"));
        }
        Ok(())
    }
}

impl TicketClient for RecordingClient {
    fn create_story(&self, request: &StoryRequest) -> Result<()> {
        self.check()?;
        self.calls.borrow_mut().push(Call::Story(request.clone()));
        Ok(())
    }

    fn create_sub_task(&self, request: &SubTaskRequest) -> Result<()> {
        self.check()?;
        self.calls.borrow_mut().push(Call::SubTask(request.clone()));
        Ok(())
    }
}

fn sub_task_resolver() -> MappingResolver {
    let header: Vec<String> = ["Summary", "Desc", "Comp", "Parent", "Label", "SP"]
        .iter()
        .map(|name| (*name).to_string())
        .collect();
    let mut resolver = MappingResolver::initialize(&header);
    resolver.set_selection(1, TargetField::Description);
    resolver.set_selection(2, TargetField::Component);
    resolver.set_selection(3, TargetField::Parent);
    resolver.set_selection(4, TargetField::Label);
    resolver.set_selection(5, TargetField::Estimate);
    resolver
}

fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|cell| (*cell).to_string()).collect()
}

#[test]
fn coverage_fails_when_estimate_unbound() {
    let header: Vec<String> = ["Summary", "Description", "Component", "Parent", "Label"]
        .iter()
        .map(|name| (*name).to_string())
        .collect();
    let resolver = MappingResolver::initialize(&header);

    // The story trio plus parent and label are bound; estimate is not.
    assert!(validate_coverage(&resolver, TicketVariant::Story).is_ok());
    let error = validate_coverage(&resolver, TicketVariant::SubTask).expect_err("must fail");
    let SubmitError::MissingMappings(missing) = error;
    assert_eq!(missing, vec![TargetField::Estimate]);
}

#[test]
fn coverage_enumerates_every_missing_field() {
    let resolver = MappingResolver::initialize(&[
        "Summary".to_string(),
        "Notes".to_string(),
    ]);
    let error = validate_coverage(&resolver, TicketVariant::SubTask).expect_err("must fail");
    let SubmitError::MissingMappings(missing) = error;
    assert_eq!(
        missing,
        vec![
            TargetField::Description,
            TargetField::Component,
            TargetField::Parent,
            TargetField::Label,
            TargetField::Estimate,
        ]
    );
}

#[test]
fn end_to_end_sub_task_row() {
    let resolver = sub_task_resolver();
    let rows = vec![row(&["Fix bug", "Null pointer", "Auth", "PROJ-1", "bug", "3,0"])];
    let client = RecordingClient::default();

    let report = run(&resolver, TicketVariant::SubTask, &rows, &client).expect("coverage ok");
    assert!(report.is_success());
    assert_eq!(report.created, 1);
    assert_eq!(
        client.calls.borrow().as_slice(),
        &[Call::SubTask(SubTaskRequest {
            parent: "PROJ-1".to_string(),
            summary: "Fix bug".to_string(),
            description: "Null pointer".to_string(),
            component: "Auth".to_string(),
            label: "bug".to_string(),
            estimate: 3,
        })]
    );
}

#[test]
fn story_run_ignores_sub_task_columns() {
    let resolver = sub_task_resolver();
    let rows = vec![
        row(&["First", "one", "Core", "PROJ-9", "x", "5"]),
        row(&["Second", "two", "Core", "PROJ-9", "x", "8"]),
    ];
    let client = RecordingClient::default();

    let report = run(&resolver, TicketVariant::Story, &rows, &client).expect("coverage ok");
    assert_eq!(report.created, 2);
    assert_eq!(
        client.calls.borrow()[0],
        Call::Story(StoryRequest {
            summary: "First".to_string(),
            description: "one".to_string(),
            component: "Core".to_string(),
        })
    );
}

#[test]
fn short_rows_read_as_empty_strings() {
    let resolver = sub_task_resolver();
    let rows = vec![row(&["Only summary"])];
    let client = RecordingClient::default();

    let report = run(&resolver, TicketVariant::SubTask, &rows, &client).expect("coverage ok");
    assert_eq!(report.created, 1);
    assert_eq!(
        client.calls.borrow()[0],
        Call::SubTask(SubTaskRequest {
            parent: String::new(),
            summary: "Only summary".to_string(),
            description: String::new(),
            component: String::new(),
            label: String::new(),
            estimate: 0,
        })
    );
}

#[test]
fn failure_aborts_run_and_count_reflects_committed_rows() {
    let resolver = sub_task_resolver();
    let rows = vec![
        row(&["a", "", "", "P-1", "", "1"]),
        row(&["b", "", "", "P-1", "", "2"]),
        row(&["c", "", "", "P-1", "", "3"]),
    ];
    let client = RecordingClient::failing_at(1);

    let report = run(&resolver, TicketVariant::SubTask, &rows, &client).expect("coverage ok");
    assert!(!report.is_success());
    assert_eq!(report.created, 1);
    let failure = report.failure.expect("failure recorded");
    assert_eq!(failure.row, 1);
    assert!(failure.error.to_string().contains("issue rejected"));
    // The third row was never attempted.
    assert_eq!(client.calls.borrow().len(), 1);
}

#[test]
fn missing_mapping_stops_run_before_any_row() {
    let resolver = MappingResolver::initialize(&["Summary".to_string()]);
    let rows = vec![row(&["never sent"])];
    let client = RecordingClient::default();

    let result = run(&resolver, TicketVariant::Story, &rows, &client);
    assert!(result.is_err());
    assert!(client.calls.borrow().is_empty());
}

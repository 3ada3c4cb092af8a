use std::path::PathBuf;

use jira_model::TicketVariant;

/// Outcome of one `run` invocation, ready for terminal reporting.
#[derive(Debug)]
pub struct RunSummary {
    pub csv_file: PathBuf,
    pub variant: TicketVariant,
    pub row_count: usize,
    pub created: usize,
    pub dry_run: bool,
    /// Description of the failure that aborted the run, if any.
    pub failure: Option<String>,
}

impl RunSummary {
    pub fn is_success(&self) -> bool {
        self.failure.is_none()
    }
}

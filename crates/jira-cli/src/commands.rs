use anyhow::{Context, Result, anyhow, bail};
use comfy_table::{Cell, Table};
use tracing::{info, info_span, warn};

use jira_client::{JiraClient, JiraConfig};
use jira_ingest::{CsvTable, Delimiter, read_csv_table};
use jira_map::MappingResolver;
use jira_model::{StoryRequest, SubTaskRequest, TargetField, TicketVariant};
use jira_submit::TicketClient;

use crate::cli::{MapArgs, PreviewArgs, RunArgs};
use crate::summary::{apply_table_style, check_cell, dim_cell, header_cell};
use crate::types::RunSummary;

pub fn run_fields() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Story"),
        header_cell("Sub-task"),
    ]);
    apply_table_style(&mut table);
    for field in TargetField::ALL {
        let story = TicketVariant::Story.required_fields().contains(&field);
        let sub_task = TicketVariant::SubTask.required_fields().contains(&field);
        let name_cell = if field.is_skip() {
            dim_cell(field.as_str())
        } else {
            Cell::new(field.as_str())
        };
        table.add_row(vec![name_cell, check_cell(story), check_cell(sub_task)]);
    }
    println!("{table}");
    println!("✓ marks the fields a variant requires; skip discards a column.");
    Ok(())
}

pub fn run_preview(args: &PreviewArgs) -> Result<()> {
    let table = load_table(&args.csv_file, args.delimiter.into())?;
    let mut out = Table::new();
    out.set_header(table.headers.iter().map(|name| header_cell(name)));
    apply_table_style(&mut out);
    let limit = args.limit.unwrap_or(table.rows.len());
    for row in table.rows.iter().take(limit) {
        out.add_row(row.iter().map(Cell::new));
    }
    println!("{out}");
    let shown = table.rows.len().min(limit);
    if shown < table.rows.len() {
        println!("{} of {} data rows shown", shown, table.rows.len());
    } else {
        println!("{} data rows", table.rows.len());
    }
    Ok(())
}

pub fn run_map(args: &MapArgs) -> Result<()> {
    let table = load_table(&args.csv_file, args.delimiter.into())?;
    let mut resolver = MappingResolver::initialize(&table.headers);
    apply_overrides(&mut resolver, &args.map)?;

    let mut out = Table::new();
    out.set_header(vec![
        header_cell("#"),
        header_cell("Column"),
        header_cell("Mapped To"),
        header_cell("Available"),
    ]);
    apply_table_style(&mut out);
    for (index, binding) in resolver.bindings().iter().enumerate() {
        let selected_cell = if binding.is_skipped() {
            dim_cell(binding.selected.as_str())
        } else {
            Cell::new(binding.selected.as_str())
                .fg(comfy_table::Color::Green)
        };
        let choices: Vec<&str> = binding
            .choices
            .iter()
            .map(TargetField::as_str)
            .collect();
        out.add_row(vec![
            Cell::new(index),
            Cell::new(&binding.source_header),
            selected_cell,
            Cell::new(choices.join(", ")),
        ]);
    }
    println!("{out}");
    println!(
        "{} of {} columns mapped",
        resolver.bound_count(),
        resolver.len()
    );
    Ok(())
}

pub fn run_submit(args: &RunArgs) -> Result<RunSummary> {
    let variant = TicketVariant::from(args.variant);
    let run_span = info_span!("run", csv_file = %args.csv_file.display(), variant = %variant);
    let _run_guard = run_span.enter();

    let table = load_table(&args.csv_file, args.delimiter.into())?;
    let mut resolver = MappingResolver::initialize(&table.headers);
    apply_overrides(&mut resolver, &args.map)?;

    let report = if args.dry_run {
        info!("dry run: no tickets will be created");
        jira_submit::run(&resolver, variant, &table.rows, &DryRunClient)?
    } else {
        let config = JiraConfig::load(&args.config)
            .with_context(|| format!("load config {}", args.config.display()))?;
        let client = JiraClient::new(&config)?;
        jira_submit::run(&resolver, variant, &table.rows, &client)?
    };

    Ok(RunSummary {
        csv_file: args.csv_file.clone(),
        variant,
        row_count: table.rows.len(),
        created: report.created,
        dry_run: args.dry_run,
        failure: report.failure.map(|failure| failure.to_string()),
    })
}

fn load_table(path: &std::path::Path, delimiter: Delimiter) -> Result<CsvTable> {
    let table = read_csv_table(path, delimiter)?;
    Ok(table)
}

/// Applies `--map COLUMN=FIELD` overrides, one selection at a time.
///
/// Malformed specs and unknown columns or fields are usage errors; an
/// override whose field is already bound elsewhere is ignored with a
/// warning, exactly as the resolver refuses it.
pub fn apply_overrides(resolver: &mut MappingResolver, specs: &[String]) -> Result<()> {
    for spec in specs {
        let Some((column_spec, field_spec)) = spec.split_once('=') else {
            bail!("invalid --map '{spec}', expected COLUMN=FIELD");
        };
        let field: TargetField = field_spec
            .trim()
            .parse()
            .map_err(|message: String| anyhow!(message))?;
        let column = resolve_column(resolver, column_spec.trim())
            .ok_or_else(|| anyhow!("no column named '{}' in the header", column_spec.trim()))?;
        resolver.set_selection(column, field);
        if resolver.bindings()[column].selected != field {
            warn!(
                column = column_spec.trim(),
                field = %field,
                "override ignored: field is bound to another column"
            );
        }
    }
    Ok(())
}

fn resolve_column(resolver: &MappingResolver, spec: &str) -> Option<usize> {
    if let Some(index) = resolver.column_index_by_header(spec) {
        return Some(index);
    }
    match spec.parse::<usize>() {
        Ok(index) if index < resolver.len() => Some(index),
        _ => None,
    }
}

/// Stand-in client for `--dry-run`: logs each would-be ticket and commits
/// nothing.
struct DryRunClient;

impl TicketClient for DryRunClient {
    fn create_story(&self, request: &StoryRequest) -> Result<()> {
        info!(
            summary = %request.summary,
            component = %request.component,
            "dry run: story not submitted"
        );
        Ok(())
    }

    fn create_sub_task(&self, request: &SubTaskRequest) -> Result<()> {
        info!(
            parent = %request.parent,
            summary = %request.summary,
            estimate = request.estimate,
            "dry run: sub-task not submitted"
        );
        Ok(())
    }
}

//! The `run` command's work, independent of argument parsing.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{error, info, info_span, warn};

use lifting_config::{load_default_schema, load_schema};
use lifting_core::PipelineContext;
use lifting_ingest::{read_raw_table, write_clean_table};
use lifting_model::{CleanTable, Relation, WarehouseSchema};
use lifting_warehouse::{
    CsvDirSink, MemorySink, RelationSink, SqliteSink, WarehouseLoader, build_relations,
    render_ddl,
};

use crate::report::{RunReport, fingerprint_file, write_report};
use crate::types::{LoadSummary, RelationSummary, RunOptions, RunResult};

pub fn load_config(path: Option<&Path>) -> Result<WarehouseSchema> {
    match path {
        Some(path) => {
            load_schema(path).with_context(|| format!("load config: {}", path.display()))
        }
        None => load_default_schema().context("load default config"),
    }
}

/// Ingest, clean, model, and load the input described by `options`.
///
/// Failures before loading (config, ingest, modeling) are returned as errors.
/// Load failures are recorded per sink in the result so every requested sink
/// is attempted.
pub fn run_pipeline(options: &RunOptions) -> Result<RunResult> {
    let span = info_span!("run", input = %options.input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let schema = load_config(options.config.as_deref())?;
    let raw = read_raw_table(&options.input)?;
    let input_sha256 = fingerprint_file(&options.input)?;
    info!(rows = raw.len(), sha256 = %input_sha256, "input read");

    let output = PipelineContext::new(schema)
        .run(&raw)
        .context("build star schema")?;
    let relations = build_relations(&output).context("assemble relations")?;

    if !options.dry_run {
        write_side_outputs(options, &output.clean, &relations)?;
    }

    let loader = WarehouseLoader::new();
    let mut loads = Vec::new();
    for (target, mut sink) in requested_sinks(options)? {
        loads.push(load_into(&loader, &target, sink.as_mut(), &relations));
    }

    let errors: Vec<String> = loads
        .iter()
        .filter_map(|load| {
            load.error
                .as_ref()
                .map(|error| format!("{}: {error}", load.target))
        })
        .collect();
    let result = RunResult {
        input: options.input.clone(),
        input_sha256,
        stats: output.stats,
        relations: relations.iter().map(summarize).collect(),
        loads,
        has_errors: !errors.is_empty(),
        errors,
    };

    if let Some(path) = &options.report {
        write_report(path, &RunReport::from_result(&result))?;
        info!(path = %path.display(), "run report written");
    }
    info!(
        duration_ms = start.elapsed().as_millis(),
        has_errors = result.has_errors,
        "run complete"
    );
    Ok(result)
}

fn write_side_outputs(
    options: &RunOptions,
    clean: &CleanTable,
    relations: &[Relation],
) -> Result<()> {
    if let Some(path) = &options.clean_csv {
        write_clean_table(clean, path)?;
        info!(path = %path.display(), rows = clean.len(), "cleaned dataset written");
    }
    if let Some(path) = &options.ddl {
        std::fs::write(path, render_ddl(relations))
            .with_context(|| format!("write ddl: {}", path.display()))?;
        info!(path = %path.display(), "ddl written");
    }
    Ok(())
}

/// Sinks in load order. A dry run, or a run without any target, loads into
/// memory so validation and verification still happen.
fn requested_sinks(options: &RunOptions) -> Result<Vec<(String, Box<dyn RelationSink>)>> {
    let mut sinks: Vec<(String, Box<dyn RelationSink>)> = Vec::new();
    if !options.dry_run {
        if let Some(path) = &options.database {
            let sink = SqliteSink::open(path)
                .with_context(|| format!("open database: {}", path.display()))?;
            let target = sink
                .path()
                .map_or_else(|| "sqlite::memory:".to_string(), |path| {
                    format!("sqlite:{}", path.display())
                });
            sinks.push((target, Box::new(sink)));
        }
        if let Some(dir) = &options.csv_dir {
            let sink = CsvDirSink::new(dir);
            sinks.push((format!("csv:{}", sink.dir().display()), Box::new(sink)));
        }
    }
    if sinks.is_empty() {
        sinks.push(("memory".to_string(), Box::new(MemorySink::new())));
    }
    Ok(sinks)
}

fn load_into(
    loader: &WarehouseLoader,
    target: &str,
    sink: &mut dyn RelationSink,
    relations: &[Relation],
) -> LoadSummary {
    match loader.load(sink, relations) {
        Ok(report) => LoadSummary {
            target: target.to_string(),
            rows: Some(report.total_rows()),
            error: None,
        },
        Err(err) => {
            error!(sink = target, error = %err, "load failed");
            LoadSummary {
                target: target.to_string(),
                rows: None,
                error: Some(err.to_string()),
            }
        }
    }
}

fn summarize(relation: &Relation) -> RelationSummary {
    if relation.rows.is_empty() {
        warn!(relation = %relation.name, "relation is empty");
    }
    RelationSummary {
        name: relation.name.clone(),
        kind: relation.kind,
        columns: relation.fields.len(),
        rows: relation.row_count(),
    }
}

use std::path::PathBuf;

use lifting_core::PipelineStats;
use lifting_model::RelationKind;

/// What `lifting run` should do, independent of clap.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub input: PathBuf,
    /// Warehouse config; `None` uses `LIFTING_WAREHOUSE_CONFIG` or the
    /// built-in layout.
    pub config: Option<PathBuf>,
    pub database: Option<PathBuf>,
    pub csv_dir: Option<PathBuf>,
    pub ddl: Option<PathBuf>,
    pub clean_csv: Option<PathBuf>,
    pub report: Option<PathBuf>,
    /// Validate and load into memory only; no output files except the report.
    pub dry_run: bool,
}

#[derive(Debug)]
pub struct RunResult {
    pub input: PathBuf,
    pub input_sha256: String,
    pub stats: PipelineStats,
    pub relations: Vec<RelationSummary>,
    pub loads: Vec<LoadSummary>,
    pub errors: Vec<String>,
    pub has_errors: bool,
}

#[derive(Debug, Clone)]
pub struct RelationSummary {
    pub name: String,
    pub kind: RelationKind,
    pub columns: usize,
    pub rows: usize,
}

/// Outcome of loading the relation set into one sink.
#[derive(Debug, Clone)]
pub struct LoadSummary {
    /// `sqlite:<path>`, `csv:<dir>`, or `memory`.
    pub target: String,
    pub rows: Option<usize>,
    pub error: Option<String>,
}

impl LoadSummary {
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

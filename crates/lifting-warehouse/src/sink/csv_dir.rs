use std::fs::{self, File};
use std::path::{Path, PathBuf};

use polars::prelude::{
    Column, CsvWriter, DataFrame, IntoColumn, NamedFrom, PlSmallStr, SerWriter, Series,
};
use tracing::{debug, info, warn};

use lifting_model::{FieldType, Relation, Value};

use super::RelationSink;
use crate::error::{Result, WarehouseError};

const STAGING_SUFFIX: &str = "csv.tmp";
const BACKUP_SUFFIX: &str = "csv.bak";

/// A relation file moved into place, with the file it replaced.
struct Swapped {
    target: PathBuf,
    backup: Option<PathBuf>,
}

/// One `<relation>.csv` per relation in a directory.
///
/// Every relation is staged next to its target first; targets are replaced
/// only after the whole set has been written. Replaced files are kept as
/// backups until every target is in place, and restored if any swap fails.
#[derive(Debug, Clone)]
pub struct CsvDirSink {
    dir: PathBuf,
}

impl CsvDirSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn relation_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.csv"))
    }

    fn staging_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!(".{name}.{STAGING_SUFFIX}"))
    }

    fn backup_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!(".{name}.{BACKUP_SUFFIX}"))
    }

    /// Move `staged` onto the relation's target, backing up an existing file.
    fn swap_in(&self, relation: &Relation, staged: &Path) -> Result<Swapped> {
        let target = self.relation_path(&relation.name);
        let backup = if target.is_file() {
            let backup = self.backup_path(&relation.name);
            fs::rename(&target, &backup).map_err(|error| WarehouseError::io(&target, error))?;
            Some(backup)
        } else {
            None
        };
        if let Err(error) = fs::rename(staged, &target) {
            if let Some(backup) = &backup {
                restore(backup, &target);
            }
            return Err(WarehouseError::io(&target, error));
        }
        Ok(Swapped { target, backup })
    }

    fn stage(&self, relation: &Relation) -> Result<PathBuf> {
        let mut frame = relation_frame(relation)?;
        let path = self.staging_path(&relation.name);
        let mut file = File::create(&path).map_err(|error| WarehouseError::io(&path, error))?;
        CsvWriter::new(&mut file)
            .include_header(true)
            .finish(&mut frame)?;
        debug!(relation = %relation.name, rows = frame.height(), "relation staged");
        Ok(path)
    }
}

/// A typed DataFrame with one column per relation field.
pub fn relation_frame(relation: &Relation) -> Result<DataFrame> {
    let mut columns: Vec<Column> = Vec::with_capacity(relation.fields.len());
    for (idx, field) in relation.fields.iter().enumerate() {
        let values = relation.rows.iter().map(|row| &row[idx]);
        let name: PlSmallStr = field.name.as_str().into();
        let series = match field.field_type {
            FieldType::Integer => {
                Series::new(name, values.map(Value::as_i64).collect::<Vec<Option<i64>>>())
            }
            FieldType::Real => {
                Series::new(name, values.map(Value::as_f64).collect::<Vec<Option<f64>>>())
            }
            FieldType::Text => Series::new(
                name,
                values
                    .map(|value| (!value.is_missing()).then(|| value.to_string()))
                    .collect::<Vec<Option<String>>>(),
            ),
        };
        columns.push(series.into_column());
    }
    Ok(DataFrame::new(columns)?)
}

fn restore(backup: &Path, target: &Path) {
    if let Err(error) = fs::rename(backup, target) {
        warn!(path = %target.display(), %error, "could not restore previous relation file");
    }
}

/// Undo completed swaps, newest first.
fn roll_back(swapped: &[Swapped]) {
    for swap in swapped.iter().rev() {
        match &swap.backup {
            Some(backup) => restore(backup, &swap.target),
            None => discard(std::slice::from_ref(&swap.target)),
        }
    }
}

fn discard(paths: &[PathBuf]) {
    for path in paths {
        if let Err(error) = fs::remove_file(path) {
            warn!(path = %path.display(), %error, "could not remove file");
        }
    }
}

impl RelationSink for CsvDirSink {
    fn write_all(&mut self, relations: &[Relation]) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|error| WarehouseError::io(&self.dir, error))?;

        let mut staged = Vec::with_capacity(relations.len());
        for relation in relations {
            match self.stage(relation) {
                Ok(path) => staged.push(path),
                Err(error) => {
                    discard(&staged);
                    return Err(error);
                }
            }
        }
        let mut swapped = Vec::with_capacity(staged.len());
        for (idx, (relation, staged_path)) in relations.iter().zip(&staged).enumerate() {
            match self.swap_in(relation, staged_path) {
                Ok(swap) => swapped.push(swap),
                Err(error) => {
                    roll_back(&swapped);
                    discard(&staged[idx..]);
                    return Err(error);
                }
            }
        }
        let backups: Vec<PathBuf> = swapped.into_iter().filter_map(|swap| swap.backup).collect();
        discard(&backups);
        info!(dir = %self.dir.display(), relations = relations.len(), "csv relations written");
        Ok(())
    }

    fn relation_names(&self) -> Result<Vec<String>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }
        let entries = fs::read_dir(&self.dir).map_err(|error| WarehouseError::io(&self.dir, error))?;
        let mut names = Vec::new();
        for entry in entries {
            let path = entry
                .map_err(|error| WarehouseError::io(&self.dir, error))?
                .path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("csv") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    fn row_count(&self, relation: &str) -> Result<Option<usize>> {
        let path = self.relation_path(relation);
        if !path.is_file() {
            return Ok(None);
        }
        let mut reader = csv::ReaderBuilder::new().has_headers(true).from_path(&path)?;
        let mut rows = 0usize;
        for record in reader.records() {
            record?;
            rows += 1;
        }
        Ok(Some(rows))
    }
}

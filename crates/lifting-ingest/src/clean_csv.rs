use std::path::Path;

use anyhow::{Context, Result};
use csv::WriterBuilder;

use lifting_model::CleanTable;

/// Write a cleaned dataset as CSV, one column per normalized name.
///
/// Missing values become empty cells and numbers are written without
/// trailing zeros.
pub fn write_clean_table(table: &CleanTable, path: &Path) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .from_path(path)
        .with_context(|| format!("create csv: {}", path.display()))?;
    writer
        .write_record(table.column_names())
        .with_context(|| format!("write header: {}", path.display()))?;
    for row in &table.rows {
        let record: Vec<String> = table
            .column_names()
            .map(|name| row.get(name).to_string())
            .collect();
        writer
            .write_record(&record)
            .with_context(|| format!("write row: {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flush csv: {}", path.display()))?;
    Ok(())
}

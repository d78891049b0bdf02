use std::path::Path;

use anyhow::{Context, Result};
use csv::{ReaderBuilder, StringRecord};
use tracing::debug;

use lifting_model::{RawRow, RawTable, RawValue};

fn strip_bom(raw: &str) -> &str {
    raw.trim_start_matches('\u{feff}')
}

fn is_blank(record: &StringRecord) -> bool {
    record.iter().all(|value| strip_bom(value).trim().is_empty())
}

/// Read a CSV file into a [`RawTable`].
///
/// The first non-blank record is the header row. Cells stay as authored text
/// (cleaning trims and interprets them); blank lines are skipped and short
/// rows are padded with empty cells.
pub fn read_raw_table(path: &Path) -> Result<RawTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("read csv: {}", path.display()))?;
    let mut records = reader.records();

    let mut headers: Vec<String> = Vec::new();
    for record in records.by_ref() {
        let record = record.with_context(|| format!("read header: {}", path.display()))?;
        if is_blank(&record) {
            continue;
        }
        headers = record.iter().map(|value| strip_bom(value).to_string()).collect();
        break;
    }

    let mut rows = Vec::new();
    let mut padded = 0usize;
    for record in records {
        let record = record.with_context(|| format!("read record: {}", path.display()))?;
        if is_blank(&record) {
            continue;
        }
        if record.len() < headers.len() {
            padded += 1;
        }
        let mut row = RawRow::new();
        for (idx, header) in headers.iter().enumerate() {
            let value = record.get(idx).map(strip_bom).unwrap_or("");
            row.push(header.clone(), RawValue::Text(value.to_string()));
        }
        rows.push(row);
    }

    debug!(
        path = %path.display(),
        columns = headers.len(),
        rows = rows.len(),
        padded,
        "read raw csv"
    );
    Ok(RawTable {
        rows,
        source: Some(path.to_path_buf()),
    })
}

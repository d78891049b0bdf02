//! JSON run report.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::types::RunResult;

#[derive(Debug, Serialize)]
pub struct RunReport {
    pub generated_at: String,
    pub input: InputReport,
    pub clean: CleanReport,
    pub dimensions: BTreeMap<String, DimensionReport>,
    pub fact: FactReport,
    pub relations: BTreeMap<String, usize>,
    pub loads: Vec<LoadReportEntry>,
}

#[derive(Debug, Serialize)]
pub struct InputReport {
    pub path: String,
    pub sha256: String,
}

#[derive(Debug, Serialize)]
pub struct CleanReport {
    pub input_rows: usize,
    pub output_rows: usize,
    pub duplicate_rows: usize,
    pub degraded_fields: usize,
}

#[derive(Debug, Serialize)]
pub struct DimensionReport {
    pub entities: usize,
    pub incomplete_keys: usize,
}

#[derive(Debug, Serialize)]
pub struct FactReport {
    pub rows: usize,
    pub dropped_rows: usize,
}

#[derive(Debug, Serialize)]
pub struct LoadReportEntry {
    pub target: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RunReport {
    pub fn from_result(result: &RunResult) -> Self {
        let stats = &result.stats;
        Self {
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            input: InputReport {
                path: result.input.display().to_string(),
                sha256: result.input_sha256.clone(),
            },
            clean: CleanReport {
                input_rows: stats.clean.input_rows,
                output_rows: stats.clean.output_rows,
                duplicate_rows: stats.clean.duplicate_rows,
                degraded_fields: stats.clean.degraded_fields,
            },
            dimensions: stats
                .dimension_rows
                .iter()
                .map(|(name, entities)| {
                    let incomplete_keys =
                        stats.incomplete_keys.get(name).copied().unwrap_or_default();
                    (
                        name.clone(),
                        DimensionReport {
                            entities: *entities,
                            incomplete_keys,
                        },
                    )
                })
                .collect(),
            fact: FactReport {
                rows: stats.fact_rows,
                dropped_rows: stats.dropped_fact_rows,
            },
            relations: result
                .relations
                .iter()
                .map(|relation| (relation.name.clone(), relation.rows))
                .collect(),
            loads: result
                .loads
                .iter()
                .map(|load| LoadReportEntry {
                    target: load.target.clone(),
                    rows: load.rows,
                    error: load.error.clone(),
                })
                .collect(),
        }
    }
}

pub fn write_report(path: &Path, report: &RunReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("serialize run report")?;
    std::fs::write(path, json).with_context(|| format!("write report: {}", path.display()))
}

/// Hex SHA-256 of a file's contents.
pub fn fingerprint_file(path: &Path) -> Result<String> {
    let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let mut reader = BufReader::new(file);
    let mut hasher = Sha256::new();
    let mut buffer = [0u8; 8192];
    loop {
        let read = reader
            .read(&mut buffer)
            .with_context(|| format!("read {}", path.display()))?;
        if read == 0 {
            break;
        }
        hasher.update(&buffer[..read]);
    }
    Ok(hex::encode(hasher.finalize()))
}

//! Record cleaning over a whole raw table.

use std::collections::{BTreeMap, HashMap, HashSet};

use tracing::{debug, info, warn};

use lifting_model::{
    CleanColumn, CleanRow, CleanTable, FieldKind, KeyPart, RawTable, Value,
    normalize_column_name,
};

use crate::normalization::{is_sentinel, normalize_field};

/// Counters gathered while cleaning; none of these are errors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanStats {
    pub input_rows: usize,
    pub output_rows: usize,
    /// Exact duplicates removed (first occurrence kept).
    pub duplicate_rows: usize,
    /// Non-sentinel values that could not be cleaned and became missing.
    pub degraded_fields: usize,
}

#[derive(Debug, Clone)]
pub struct CleanOutput {
    pub table: CleanTable,
    pub stats: CleanStats,
}

/// Applies column-name normalization and field cleaning to raw rows.
#[derive(Debug, Clone, Default)]
pub struct RecordCleaner {
    kinds: BTreeMap<String, FieldKind>,
}

impl RecordCleaner {
    /// `kinds` maps normalized column names to their kind; unknown columns are
    /// cleaned as free text.
    pub fn new(kinds: BTreeMap<String, FieldKind>) -> Self {
        Self { kinds }
    }

    pub fn kind_of(&self, column: &str) -> FieldKind {
        self.kinds.get(column).copied().unwrap_or_default()
    }

    pub fn clean(&self, raw: &RawTable) -> CleanOutput {
        let (columns, renames) = self.normalize_columns(raw);
        let mut stats = CleanStats {
            input_rows: raw.len(),
            ..CleanStats::default()
        };
        let mut seen: HashSet<Vec<Option<KeyPart>>> = HashSet::with_capacity(raw.len());
        let mut rows = Vec::with_capacity(raw.len());

        for raw_row in &raw.rows {
            let mut values: BTreeMap<String, Value> = columns
                .iter()
                .map(|column| (column.name.clone(), Value::Missing))
                .collect();
            for (authored, raw_value) in raw_row.iter() {
                let Some(name) = renames.get(authored) else {
                    continue;
                };
                let kind = self.kind_of(name);
                let value = normalize_field(raw_value, kind);
                if value.is_missing()
                    && raw_value.as_text().is_some_and(|text| !is_sentinel(&text))
                {
                    stats.degraded_fields += 1;
                }
                values.insert(name.clone(), value);
            }

            let fingerprint: Vec<Option<KeyPart>> = columns
                .iter()
                .map(|column| values.get(&column.name).and_then(Value::key_part))
                .collect();
            if !seen.insert(fingerprint) {
                stats.duplicate_rows += 1;
                continue;
            }
            rows.push(CleanRow::new(values));
        }

        stats.output_rows = rows.len();
        info!(
            input_rows = stats.input_rows,
            output_rows = stats.output_rows,
            duplicate_rows = stats.duplicate_rows,
            degraded_fields = stats.degraded_fields,
            "records cleaned"
        );
        CleanOutput {
            table: CleanTable { columns, rows },
            stats,
        }
    }

    /// Normalize every authored column name once, before any field logic.
    fn normalize_columns(&self, raw: &RawTable) -> (Vec<CleanColumn>, HashMap<String, String>) {
        let mut columns: Vec<CleanColumn> = Vec::new();
        let mut renames: HashMap<String, String> = HashMap::new();
        for authored in raw.columns() {
            let name = normalize_column_name(authored);
            if name.is_empty() {
                debug!(column = %authored, "skipping column with blank name");
                continue;
            }
            if let Some(existing) = columns.iter().find(|column| column.name == name) {
                warn!(
                    column = %authored,
                    normalized = %existing.name,
                    "column name collides after normalization; later value wins"
                );
            } else {
                columns.push(CleanColumn {
                    kind: self.kind_of(&name),
                    name: name.clone(),
                });
            }
            renames.insert(authored.to_string(), name);
        }
        debug!(column_count = columns.len(), "normalized column names");
        (columns, renames)
    }
}

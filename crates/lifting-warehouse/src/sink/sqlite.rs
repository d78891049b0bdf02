use std::path::{Path, PathBuf};

use rusqlite::types::Value as SqlValue;
use rusqlite::{Connection, OptionalExtension, Transaction, params, params_from_iter};
use tracing::{debug, info};

use lifting_model::{Relation, RelationKind, Value};

use super::RelationSink;
use crate::ddl::{create_table, creation_order, quote_ident};
use crate::error::{Result, WarehouseError};

/// A SQLite database holding the star schema.
pub struct SqliteSink {
    conn: Connection,
    path: Option<PathBuf>,
}

impl SqliteSink {
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|error| WarehouseError::io(parent, error))?;
        }
        let conn = Connection::open(path)?;
        Self::configure(conn, Some(path.to_path_buf()))
    }

    pub fn open_in_memory() -> Result<Self> {
        Self::configure(Connection::open_in_memory()?, None)
    }

    fn configure(conn: Connection, path: Option<PathBuf>) -> Result<Self> {
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        Ok(Self { conn, path })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

fn sql_value(value: &Value) -> SqlValue {
    match value {
        Value::Missing => SqlValue::Null,
        Value::Integer(value) => SqlValue::Integer(*value),
        Value::Number(value) => SqlValue::Real(*value),
        Value::Text(value) => SqlValue::Text(value.clone()),
    }
}

fn insert_rows(tx: &Transaction<'_>, relation: &Relation) -> Result<()> {
    let columns: Vec<String> = relation
        .fields
        .iter()
        .map(|field| quote_ident(&field.name))
        .collect();
    let placeholders: Vec<String> = (1..=columns.len()).map(|idx| format!("?{idx}")).collect();
    let sql = format!(
        "INSERT INTO {} ({}) VALUES ({})",
        quote_ident(&relation.name),
        columns.join(", "),
        placeholders.join(", ")
    );
    let mut stmt = tx.prepare(&sql)?;
    for row in &relation.rows {
        stmt.execute(params_from_iter(row.iter().map(sql_value)))?;
    }
    Ok(())
}

/// Stored tables outside the incoming set whose foreign keys reference one of
/// `replaced`. Stale fact relations are dropped; anything else blocks the load.
fn stale_dependents(tx: &Transaction<'_>, replaced: &[&Relation]) -> Result<Vec<String>> {
    let mut stmt = tx.prepare(
        "SELECT DISTINCT m.name FROM sqlite_master m, pragma_foreign_key_list(m.name) p \
         WHERE m.type = 'table' AND p.\"table\" = ?1 ORDER BY m.name",
    )?;
    let mut stale = Vec::new();
    for relation in replaced {
        let dependents = stmt
            .query_map(params![relation.name], |row| row.get::<_, String>(0))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        for dependent in dependents {
            if replaced.iter().any(|rel| rel.name == dependent) || stale.contains(&dependent) {
                continue;
            }
            if !dependent.starts_with(RelationKind::Fact.prefix()) {
                return Err(WarehouseError::structure(format!(
                    "table {dependent} references {} and is not part of the load",
                    relation.name
                )));
            }
            stale.push(dependent);
        }
    }
    Ok(stale)
}

/// Fact rows whose foreign key finds no dimension row.
fn dangling_count(tx: &Transaction<'_>, relation: &Relation) -> Result<Option<(String, i64)>> {
    for foreign_key in &relation.foreign_keys {
        let sql = format!(
            "SELECT COUNT(*) FROM {fact} f LEFT JOIN {dim} d ON f.{col} = d.{ref_col} \
             WHERE d.{ref_col} IS NULL",
            fact = quote_ident(&relation.name),
            dim = quote_ident(&foreign_key.references),
            col = quote_ident(&foreign_key.column),
            ref_col = quote_ident(&foreign_key.referenced_column),
        );
        let count: i64 = tx.query_row(&sql, [], |row| row.get(0))?;
        if count > 0 {
            return Ok(Some((foreign_key.column.clone(), count)));
        }
    }
    Ok(None)
}

impl RelationSink for SqliteSink {
    fn write_all(&mut self, relations: &[Relation]) -> Result<()> {
        let ordered = creation_order(relations);
        let tx = self.conn.transaction()?;
        for stale in stale_dependents(&tx, &ordered)? {
            info!(relation = %stale, "dropping stale fact relation");
            tx.execute_batch(&format!("DROP TABLE IF EXISTS {};", quote_ident(&stale)))?;
        }
        for relation in ordered.iter().rev() {
            tx.execute_batch(&format!(
                "DROP TABLE IF EXISTS {};",
                quote_ident(&relation.name)
            ))?;
        }
        for relation in &ordered {
            tx.execute_batch(&create_table(relation))?;
            insert_rows(&tx, relation)?;
            debug!(relation = %relation.name, rows = relation.row_count(), "relation written");
        }
        for relation in ordered.iter().filter(|rel| rel.is_fact()) {
            if let Some((column, count)) = dangling_count(&tx, relation)? {
                return Err(WarehouseError::integrity(
                    &relation.name,
                    format!("{count} rows have a dangling {column}"),
                ));
            }
        }
        tx.commit()?;
        let target = self.path.as_ref().map_or_else(
            || ":memory:".to_string(),
            |path| path.display().to_string(),
        );
        info!(
            path = %target,
            relations = relations.len(),
            "sqlite load committed"
        );
        Ok(())
    }

    fn relation_names(&self) -> Result<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")?;
        let names = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(names)
    }

    fn row_count(&self, relation: &str) -> Result<Option<usize>> {
        let exists = self
            .conn
            .query_row(
                "SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?1",
                params![relation],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        if exists.is_none() {
            return Ok(None);
        }
        let count: i64 = self.conn.query_row(
            &format!("SELECT COUNT(*) FROM {}", quote_ident(relation)),
            [],
            |row| row.get(0),
        )?;
        Ok(Some(count as usize))
    }
}

//! Storage backends for relation sets.

mod csv_dir;
mod memory;
mod sqlite;

pub use csv_dir::CsvDirSink;
pub use memory::MemorySink;
pub use sqlite::SqliteSink;

use lifting_model::Relation;

use crate::error::Result;

/// A store that accepts a whole relation set at once.
///
/// `write_all` replaces each relation by name and is all-or-nothing: when it
/// fails, relations written by an earlier call are left as they were.
pub trait RelationSink {
    fn write_all(&mut self, relations: &[Relation]) -> Result<()>;

    /// Names of every relation currently stored, sorted.
    fn relation_names(&self) -> Result<Vec<String>>;

    /// Row count of a stored relation; `None` when it does not exist.
    fn row_count(&self, relation: &str) -> Result<Option<usize>>;
}

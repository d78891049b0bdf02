//! Star-schema persistence.
//!
//! Pipeline output becomes a set of named [`Relation`](lifting_model::Relation)s
//! (`dim_<name>` with surrogate key `id_<name>`, and `fact_<name>`). The
//! [`WarehouseLoader`] validates the set, hands it to a [`RelationSink`] as
//! a single all-or-nothing write, and verifies what the sink reports back.

pub mod ddl;
pub mod error;
pub mod loader;
pub mod relations;
pub mod sink;
pub mod validate;

pub use ddl::{create_table, render_ddl};
pub use error::{Result, WarehouseError};
pub use loader::{LoadReport, WarehouseLoader};
pub use relations::{build_relations, dimension_relation, fact_relation};
pub use sink::{CsvDirSink, MemorySink, RelationSink, SqliteSink};
pub use validate::{validate_integrity, validate_structure};

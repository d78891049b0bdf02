//! Raw CSV ingestion and cleaned dataset export.

pub mod clean_csv;
pub mod csv_table;

pub use clean_csv::write_clean_table;
pub use csv_table::read_raw_table;

use anyhow::Result;
use comfy_table::Table;

use lifting_cli::pipeline::{load_config, run_pipeline};
use lifting_cli::types::{RunOptions, RunResult};

use crate::cli::{RunArgs, SchemaArgs};
use crate::summary::apply_table_style;

pub fn run_run(args: &RunArgs) -> Result<RunResult> {
    let options = RunOptions {
        input: args.input.clone(),
        config: args.config.clone(),
        database: args.database.clone(),
        csv_dir: args.csv_dir.clone(),
        ddl: args.ddl.clone(),
        clean_csv: args.clean_csv.clone(),
        report: args.report.clone(),
        dry_run: args.dry_run,
    };
    run_pipeline(&options)
}

pub fn run_schema(args: &SchemaArgs) -> Result<()> {
    let schema = load_config(args.config.as_deref())?;

    let mut table = Table::new();
    table.set_header(vec!["Relation", "Key", "Natural key", "Attributes"]);
    apply_table_style(&mut table);
    for dimension in &schema.dimensions {
        table.add_row(vec![
            dimension.relation_name(),
            dimension.key_column(),
            dimension.natural_key.join(", "),
            dimension.attributes.join(", "),
        ]);
    }
    let foreign_keys: Vec<String> = schema
        .fact
        .dimensions
        .iter()
        .filter_map(|name| schema.dimension(name))
        .map(|dimension| dimension.key_column())
        .collect();
    table.add_row(vec![
        schema.fact.relation_name(),
        foreign_keys.join(", "),
        "-".to_string(),
        schema.fact.measures.join(", "),
    ]);
    println!("{table}");

    if !schema.columns.is_empty() {
        let mut kinds = Table::new();
        kinds.set_header(vec!["Column", "Kind"]);
        apply_table_style(&mut kinds);
        for (column, kind) in &schema.columns {
            kinds.add_row(vec![column.clone(), kind.to_string()]);
        }
        println!("{kinds}");
    }
    Ok(())
}

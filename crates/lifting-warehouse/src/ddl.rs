//! SQL DDL rendering for a relation set.

use std::fmt::Write as _;

use lifting_model::Relation;

/// Quote an identifier for SQLite.
pub fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// `CREATE TABLE` statement for one relation.
pub fn create_table(relation: &Relation) -> String {
    let mut lines: Vec<String> = relation
        .fields
        .iter()
        .map(|field| {
            let mut line = format!(
                "    {} {}",
                quote_ident(&field.name),
                field.field_type.sql_type()
            );
            if !field.nullable {
                line.push_str(" NOT NULL");
            }
            if relation.primary_key.as_deref() == Some(field.name.as_str()) {
                line.push_str(" PRIMARY KEY");
            }
            line
        })
        .collect();
    for foreign_key in &relation.foreign_keys {
        lines.push(format!(
            "    FOREIGN KEY ({}) REFERENCES {} ({})",
            quote_ident(&foreign_key.column),
            quote_ident(&foreign_key.references),
            quote_ident(&foreign_key.referenced_column)
        ));
    }
    format!(
        "CREATE TABLE {} (\n{}\n);\n",
        quote_ident(&relation.name),
        lines.join(",\n")
    )
}

/// Dimension relations first so every foreign key target exists when the
/// fact relation is created.
pub fn creation_order(relations: &[Relation]) -> Vec<&Relation> {
    let mut ordered: Vec<&Relation> = relations.iter().filter(|rel| rel.is_dimension()).collect();
    ordered.extend(relations.iter().filter(|rel| !rel.is_dimension()));
    ordered
}

/// DDL script for the whole relation set.
pub fn render_ddl(relations: &[Relation]) -> String {
    let mut script = String::new();
    for (idx, relation) in creation_order(relations).into_iter().enumerate() {
        if idx > 0 {
            script.push('\n');
        }
        let _ = writeln!(script, "-- {} relation", relation.kind);
        script.push_str(&create_table(relation));
    }
    script
}

//! Drizzle table definition emitter.

use crate::schema::{Column, LogicalType, Schema, Table};

const IMPORT: &str = "import { pgTable, varchar, serial, boolean, timestamp, decimal, jsonb } from 'drizzle-orm/pg-core';\n";

/// Render Drizzle table definitions: a fixed import line followed by one
/// exported `pgTable` constant per table. An empty schema yields the
/// import line alone.
pub fn generate_drizzle(schema: &Schema) -> String {
    let mut output = String::from(IMPORT);

    for table in &schema.tables {
        output.push('\n');
        render_table(&mut output, table);
    }

    output
}

fn render_table(output: &mut String, table: &Table) {
    output.push_str(&format!(
        "export const {} = pgTable('{}', {{\n",
        table.name, table.name
    ));

    for col in &table.columns {
        output.push_str(&format!("  {}: {}", col.name, column_builder(col)));
        if col.is_primary_key {
            output.push_str(".primaryKey()");
        }
        if !col.nullable {
            output.push_str(".notNull()");
        }
        output.push_str(",\n");
    }

    output.push_str("});\n");
}

/// Constructor call per logical type. The branch lives here rather than
/// in the type map because each arm picks a call chain with its own
/// defaulting, not a bare token.
fn column_builder(col: &Column) -> &'static str {
    match col.typ {
        LogicalType::String => "varchar(255)",
        // Integer columns always map to auto-incrementing serial, even
        // outside primary keys.
        LogicalType::Integer => "serial()",
        LogicalType::Boolean => "boolean()",
        LogicalType::Timestamp => "timestamp().defaultNow()",
        LogicalType::Decimal => "decimal('10,2')",
        LogicalType::Json => "jsonb()",
        _ => "varchar(255)",
    }
}

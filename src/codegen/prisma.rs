//! Prisma schema emitter.

use super::types::prisma_type;
use crate::schema::{LogicalType, Schema, Table};

// The exported Prisma schema always targets PostgreSQL, independent of
// the selected SQL dialect.
const PREAMBLE: &str = "generator client {\n  provider = \"prisma-client-js\"\n}\n\ndatasource db {\n  provider = \"postgresql\"\n  url      = env(\"DATABASE_URL\")\n}\n";

/// Render a Prisma schema: fixed generator/datasource preamble followed
/// by one model block per table. An empty schema yields the preamble
/// alone.
pub fn generate_prisma(schema: &Schema) -> String {
    let mut output = String::from(PREAMBLE);

    for table in &schema.tables {
        output.push('\n');
        render_model(&mut output, table);
    }

    output
}

fn render_model(output: &mut String, table: &Table) {
    output.push_str(&format!("model {} {{\n", model_name(&table.name)));

    for col in &table.columns {
        let nullable = if col.nullable { "?" } else { "" };
        output.push_str(&format!(
            "  {} {}{}",
            col.name,
            prisma_type(col.typ),
            nullable
        ));
        if col.is_primary_key {
            output.push_str(" @id");
        }
        // Timestamps default to now() regardless of nullability or key
        // status.
        if col.typ == LogicalType::Timestamp {
            output.push_str(" @default(now())");
        }
        output.push('\n');
    }

    output.push_str("}\n");
}

/// Model name is the table name with only its first character
/// upper-cased: `user_accounts` becomes `User_accounts`.
fn model_name(table_name: &str) -> String {
    let mut chars = table_name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

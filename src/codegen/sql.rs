//! SQL DDL emitter.

use super::dialect::SqlDialect;
use super::types::sql_type;
use crate::schema::{Schema, Table};

/// Render one `CREATE TABLE` statement per table, in schema order,
/// separated by a blank line. An empty schema yields an empty string.
pub fn generate_sql(schema: &Schema, dialect: SqlDialect) -> String {
    schema
        .tables
        .iter()
        .map(|table| render_table(table, dialect))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn render_table(table: &Table, dialect: SqlDialect) -> String {
    // Clause order is fixed: type, PRIMARY KEY, NOT NULL, REFERENCES.
    let columns: Vec<String> = table
        .columns
        .iter()
        .map(|col| {
            let mut line = format!("  {} {}", col.name, sql_type(col.typ, dialect));
            if col.is_primary_key {
                line.push_str(" PRIMARY KEY");
            }
            if !col.nullable {
                line.push_str(" NOT NULL");
            }
            if col.is_foreign_key {
                if let Some(target) = &col.foreign_key_table {
                    line.push_str(&format!(" REFERENCES {}(id)", target));
                }
            }
            line
        })
        .collect();

    format!("CREATE TABLE {} (\n{}\n);", table.name, columns.join(",\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Column, LogicalType};

    fn column(name: &str, typ: LogicalType) -> Column {
        Column {
            name: name.to_string(),
            typ,
            nullable: true,
            is_primary_key: false,
            is_foreign_key: false,
            foreign_key_table: None,
        }
    }

    fn schema_of(tables: Vec<Table>) -> Schema {
        Schema {
            tables,
            description: None,
            explanation: None,
            created_at: None,
        }
    }

    #[test]
    fn test_empty_schema() {
        let schema = schema_of(vec![]);
        for dialect in SqlDialect::ALL {
            assert_eq!(generate_sql(&schema, dialect), "");
        }
    }

    #[test]
    fn test_flag_composition() {
        let schema = schema_of(vec![Table {
            name: "orders".to_string(),
            columns: vec![Column {
                name: "user_id".to_string(),
                typ: LogicalType::Integer,
                nullable: false,
                is_primary_key: true,
                is_foreign_key: true,
                foreign_key_table: Some("users".to_string()),
            }],
        }]);

        let sql = generate_sql(&schema, SqlDialect::PostgreSQL);
        assert_eq!(
            sql,
            "CREATE TABLE orders (\n  user_id INTEGER PRIMARY KEY NOT NULL REFERENCES users(id)\n);"
        );
    }

    #[test]
    fn test_fk_without_target_omits_references() {
        let schema = schema_of(vec![Table {
            name: "orders".to_string(),
            columns: vec![Column {
                name: "user_id".to_string(),
                typ: LogicalType::Integer,
                nullable: false,
                is_primary_key: false,
                is_foreign_key: true,
                foreign_key_table: None,
            }],
        }]);

        let sql = generate_sql(&schema, SqlDialect::PostgreSQL);
        assert!(!sql.contains("REFERENCES"));
        assert!(sql.contains("user_id INTEGER NOT NULL"));
    }

    #[test]
    fn test_boolean_dialect_divergence() {
        let schema = schema_of(vec![Table {
            name: "flags".to_string(),
            columns: vec![column("active", LogicalType::Boolean)],
        }]);

        let pg = generate_sql(&schema, SqlDialect::PostgreSQL);
        let my = generate_sql(&schema, SqlDialect::MySQL);
        let lite = generate_sql(&schema, SqlDialect::SQLite);

        assert!(pg.contains("active BOOLEAN"));
        assert!(my.contains("active BOOLEAN"));
        assert!(lite.contains("active INTEGER"));
        assert!(!pg.contains("NOT NULL"));
        assert!(!my.contains("NOT NULL"));
        assert!(!lite.contains("NOT NULL"));
    }

    #[test]
    fn test_table_and_column_order_preserved() {
        let schema = schema_of(vec![
            Table {
                name: "zebra".to_string(),
                columns: vec![
                    column("z_col", LogicalType::Text),
                    column("a_col", LogicalType::Text),
                ],
            },
            Table {
                name: "alpha".to_string(),
                columns: vec![column("only", LogicalType::Text)],
            },
        ]);

        let sql = generate_sql(&schema, SqlDialect::SQLite);
        let zebra = sql.find("CREATE TABLE zebra").unwrap();
        let alpha = sql.find("CREATE TABLE alpha").unwrap();
        assert!(zebra < alpha);
        assert!(sql.find("z_col").unwrap() < sql.find("a_col").unwrap());
        // Statements are separated by exactly one blank line
        assert!(sql.contains(");\n\nCREATE TABLE alpha"));
    }
}

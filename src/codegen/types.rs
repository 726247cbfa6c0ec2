//! Logical type to physical type mapping.

use super::dialect::SqlDialect;
use crate::schema::LogicalType;

/// Map a logical type to the physical column type for a SQL dialect.
///
/// Total: unrecognized types fall back to the dialect's generic text
/// type rather than failing.
pub fn sql_type(typ: LogicalType, dialect: SqlDialect) -> &'static str {
    match dialect {
        SqlDialect::PostgreSQL => postgres_type(typ),
        SqlDialect::MySQL => mysql_type(typ),
        SqlDialect::SQLite => sqlite_type(typ),
    }
}

fn postgres_type(typ: LogicalType) -> &'static str {
    match typ {
        LogicalType::String => "VARCHAR(255)",
        LogicalType::Integer => "INTEGER",
        LogicalType::Boolean => "BOOLEAN",
        LogicalType::Timestamp => "TIMESTAMP DEFAULT CURRENT_TIMESTAMP",
        LogicalType::Decimal => "DECIMAL(10,2)",
        LogicalType::Json => "JSONB",
        LogicalType::Text => "TEXT",
        LogicalType::Uuid => "UUID",
        _ => "TEXT",
    }
}

fn mysql_type(typ: LogicalType) -> &'static str {
    match typ {
        LogicalType::String => "VARCHAR(255)",
        LogicalType::Integer => "INT",
        LogicalType::Boolean => "BOOLEAN",
        LogicalType::Timestamp => "TIMESTAMP DEFAULT CURRENT_TIMESTAMP",
        LogicalType::Decimal => "DECIMAL(10,2)",
        LogicalType::Json => "JSON",
        LogicalType::Text => "TEXT",
        LogicalType::Uuid => "CHAR(36)",
        _ => "TEXT",
    }
}

fn sqlite_type(typ: LogicalType) -> &'static str {
    match typ {
        LogicalType::String => "TEXT",
        LogicalType::Integer => "INTEGER",
        // SQLite has no native boolean
        LogicalType::Boolean => "INTEGER",
        LogicalType::Timestamp => "DATETIME DEFAULT CURRENT_TIMESTAMP",
        LogicalType::Decimal => "REAL",
        LogicalType::Json => "TEXT",
        LogicalType::Text => "TEXT",
        LogicalType::Uuid => "TEXT",
        _ => "TEXT",
    }
}

/// Map a logical type to a Prisma scalar type name.
///
/// Dialect-independent; unrecognized types fall back to `String`.
pub fn prisma_type(typ: LogicalType) -> &'static str {
    match typ {
        LogicalType::String => "String",
        LogicalType::Integer => "Int",
        LogicalType::Boolean => "Boolean",
        LogicalType::Timestamp => "DateTime",
        LogicalType::Decimal => "Decimal",
        LogicalType::Json => "Json",
        LogicalType::Text => "String",
        LogicalType::Uuid => "String",
        _ => "String",
    }
}

//! Schema to code generation targets.

mod dialect;
mod drizzle;
mod prisma;
mod sql;
mod types;

pub use dialect::SqlDialect;
pub use drizzle::generate_drizzle;
pub use prisma::generate_prisma;
pub use sql::generate_sql;
pub use types::{prisma_type, sql_type};

use serde::Serialize;

use crate::schema::Schema;

/// SQL DDL rendered per dialect.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SqlArtifacts {
    pub postgresql: String,
    pub mysql: String,
    pub sqlite: String,
}

/// Every generated artifact for one schema.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedCode {
    pub sql: SqlArtifacts,
    pub prisma: String,
    pub drizzle: String,
}

/// Generate all artifacts from one schema. Each emission is independent
/// and derived from the same immutable input.
pub fn generate_all(schema: &Schema) -> GeneratedCode {
    GeneratedCode {
        sql: SqlArtifacts {
            postgresql: generate_sql(schema, SqlDialect::PostgreSQL),
            mysql: generate_sql(schema, SqlDialect::MySQL),
            sqlite: generate_sql(schema, SqlDialect::SQLite),
        },
        prisma: generate_prisma(schema),
        drizzle: generate_drizzle(schema),
    }
}

/// A single exportable artifact format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Sql(SqlDialect),
    Prisma,
    Drizzle,
}

impl OutputFormat {
    /// Parse format from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "prisma" => Some(Self::Prisma),
            "drizzle" => Some(Self::Drizzle),
            other => SqlDialect::from_str(other).map(Self::Sql),
        }
    }

    /// File extension for downloaded artifacts.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Sql(_) => "sql",
            Self::Prisma => "prisma",
            Self::Drizzle => "ts",
        }
    }
}

/// Generate one artifact in the requested format.
pub fn generate_one(schema: &Schema, format: OutputFormat) -> String {
    match format {
        OutputFormat::Sql(dialect) => generate_sql(schema, dialect),
        OutputFormat::Prisma => generate_prisma(schema),
        OutputFormat::Drizzle => generate_drizzle(schema),
    }
}

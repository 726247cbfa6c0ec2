//! In-memory schema model shared by every code generation target.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Invalid schema JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Abstract column type, independent of any SQL dialect or ORM.
///
/// Unrecognized type strings decode to [`LogicalType::Unknown`] and each
/// target degrades them to its generic textual type instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogicalType {
    String,
    Integer,
    Boolean,
    Timestamp,
    Decimal,
    Json,
    Text,
    Uuid,
    #[serde(other)]
    Unknown,
}

impl LogicalType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::Timestamp => "timestamp",
            Self::Decimal => "decimal",
            Self::Json => "json",
            Self::Text => "text",
            Self::Uuid => "uuid",
            Self::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub name: String,
    #[serde(rename = "type")]
    pub typ: LogicalType,
    pub nullable: bool,
    pub is_primary_key: bool,
    /// Optional on the wire; a column that never references anything
    /// simply omits it.
    #[serde(default)]
    pub is_foreign_key: bool,
    /// May be absent even when `is_foreign_key` is set; emitters then
    /// omit the reference clause.
    #[serde(default)]
    pub foreign_key_table: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub name: String,
    /// Column order is significant and preserved verbatim in every
    /// emitted artifact.
    pub columns: Vec<Column>,
}

/// Root schema value. Produced upstream (AI generation or direct user
/// editing) and consumed read-only; generation never mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    pub tables: Vec<Table>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub explanation: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Schema {
    /// Decode a schema from the JSON document the upstream producer emits.
    pub fn from_json(input: &str) -> Result<Self, SchemaError> {
        Ok(serde_json::from_str(input)?)
    }
}

//! Schema validator.
//!
//! The generation engine trusts its input and performs no validation of
//! its own; callers at the boundary (CLI, wasm entry) run this guard
//! before invoking it.

use crate::schema::Schema;

/// A single validation problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Human-readable description of the problem.
    pub message: String,
    /// Location in the schema that caused it (e.g. `tables[0].columns[1]`).
    pub location: String,
    /// Whether this blocks generation (`Error`) or is advisory (`Warning`).
    pub severity: Severity,
}

/// Severity of a [`ValidationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Blocks generation: the emitted artifacts would be malformed.
    Error,
    /// Advisory: artifacts are well-formed but may not mean what the
    /// author intended.
    Warning,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self.severity {
            Severity::Error => "ERROR",
            Severity::Warning => "WARN",
        };
        write!(f, "[{}] {}: {}", tag, self.location, self.message)
    }
}

/// Validate a [`Schema`] and return all problems found.
///
/// An empty `Vec` means generation may proceed. Any entry with
/// [`Severity::Error`] should block it.
pub fn validate(schema: &Schema) -> Vec<ValidationError> {
    let mut errors: Vec<ValidationError> = Vec::new();
    let table_names: Vec<&str> = schema.tables.iter().map(|t| t.name.as_str()).collect();
    let mut seen_names: Vec<&str> = Vec::new();

    for (idx, table) in schema.tables.iter().enumerate() {
        let loc = format!("tables[{idx}]");

        if table.name.is_empty() {
            errors.push(ValidationError {
                message: "table name must not be empty".to_string(),
                location: loc,
                severity: Severity::Error,
            });
            continue;
        }

        if seen_names.contains(&table.name.as_str()) {
            errors.push(ValidationError {
                message: format!("duplicate table name '{}'", table.name),
                location: format!("{loc}.name"),
                severity: Severity::Error,
            });
        } else {
            seen_names.push(&table.name);
        }

        if table.columns.is_empty() {
            errors.push(ValidationError {
                message: format!("table '{}' has no columns", table.name),
                location: format!("{loc}.columns"),
                severity: Severity::Error,
            });
        }

        for (cidx, col) in table.columns.iter().enumerate() {
            let col_loc = format!("{loc}.columns[{cidx}]");

            if col.name.is_empty() {
                errors.push(ValidationError {
                    message: format!("column in table '{}' has no name", table.name),
                    location: col_loc,
                    severity: Severity::Error,
                });
                continue;
            }

            if col.is_foreign_key {
                match &col.foreign_key_table {
                    Some(target) if !table_names.contains(&target.as_str()) => {
                        errors.push(ValidationError {
                            message: format!(
                                "column '{}' references unknown table '{}'",
                                col.name, target
                            ),
                            location: col_loc,
                            severity: Severity::Warning,
                        });
                    }
                    None => {
                        errors.push(ValidationError {
                            message: format!(
                                "column '{}' is a foreign key without a target table; \
                                 the reference clause will be omitted",
                                col.name
                            ),
                            location: col_loc,
                            severity: Severity::Warning,
                        });
                    }
                    _ => {}
                }
            }
        }
    }

    errors
}

/// Returns `true` if `validate()` produces no `Error`-severity issues.
pub fn is_valid(schema: &Schema) -> bool {
    !validate(schema)
        .iter()
        .any(|e| e.severity == Severity::Error)
}

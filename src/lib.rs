pub mod codegen;
pub mod schema;
pub mod validate;

use wasm_bindgen::prelude::*;

use codegen::{generate_all, generate_one, OutputFormat};
use schema::Schema;
use validate::{validate, Severity};

/// Initialize panic hook for better error messages in WASM
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();
}

/// Generate code artifacts from a schema JSON document.
///
/// With a format name (`postgresql`, `mysql`, `sqlite`, `prisma`,
/// `drizzle`) returns that artifact as plain text; without one, returns
/// every artifact as a JSON object.
#[wasm_bindgen(js_name = "schemaToCode")]
pub fn generate_code(schema_json: &str, format: Option<String>) -> Result<String, String> {
    let schema = Schema::from_json(schema_json).map_err(|e| e.to_string())?;

    let errors: Vec<String> = validate(&schema)
        .iter()
        .filter(|e| e.severity == Severity::Error)
        .map(|e| e.to_string())
        .collect();
    if !errors.is_empty() {
        return Err(errors.join("; "));
    }

    match format {
        Some(name) => {
            let format = OutputFormat::from_str(&name)
                .ok_or_else(|| format!("Unknown format: {}", name))?;
            Ok(generate_one(&schema, format))
        }
        None => serde_json::to_string(&generate_all(&schema)).map_err(|e| e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEMA_JSON: &str = r#"{
        "tables": [
            {
                "name": "users",
                "columns": [
                    {"name": "id", "type": "integer", "nullable": false, "isPrimaryKey": true},
                    {"name": "name", "type": "string", "nullable": false, "isPrimaryKey": false}
                ]
            }
        ]
    }"#;

    #[test]
    fn test_generate_single_format() {
        let sql = generate_code(SCHEMA_JSON, Some("postgresql".to_string())).unwrap();
        assert!(sql.contains("CREATE TABLE users"));
        assert!(sql.contains("id INTEGER PRIMARY KEY NOT NULL"));
    }

    #[test]
    fn test_generate_all_formats_as_json() {
        let out = generate_code(SCHEMA_JSON, None).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert!(value["sql"]["postgresql"]
            .as_str()
            .unwrap()
            .contains("CREATE TABLE users"));
        assert!(value["sql"]["mysql"].as_str().unwrap().contains("INT"));
        assert!(value["prisma"].as_str().unwrap().contains("model Users {"));
        assert!(value["drizzle"]
            .as_str()
            .unwrap()
            .contains("export const users"));
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        let err = generate_code(SCHEMA_JSON, Some("mongo".to_string())).unwrap_err();
        assert!(err.contains("Unknown format"));
    }

    #[test]
    fn test_invalid_schema_is_rejected() {
        let invalid = r#"{"tables": [{"name": "", "columns": []}]}"#;
        let err = generate_code(invalid, None).unwrap_err();
        assert!(err.contains("table name"));
    }

    #[test]
    fn test_bad_json_is_rejected() {
        assert!(generate_code("nope", None).is_err());
    }
}

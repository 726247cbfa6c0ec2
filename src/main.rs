use schemagen::codegen::{generate_all, generate_one, OutputFormat};
use schemagen::schema::Schema;
use schemagen::validate::{validate, Severity};
use std::env;
use std::fs;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <schema.json> [options]", args[0]);
        eprintln!();
        eprintln!("Options:");
        eprintln!("  -o, --output <file>   Output file (default: stdout)");
        eprintln!("  -f, --format <fmt>    postgresql, mysql, sqlite, prisma, drizzle");
        eprintln!("                        (default: all formats as JSON)");
        process::exit(1);
    }

    let input_path = &args[1];
    let mut output_path: Option<String> = None;
    let mut format: Option<OutputFormat> = None;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "-o" | "--output" => {
                i += 1;
                if i < args.len() {
                    output_path = Some(args[i].clone());
                }
            }
            "-f" | "--format" => {
                i += 1;
                if i < args.len() {
                    format = Some(OutputFormat::from_str(&args[i]).unwrap_or_else(|| {
                        eprintln!("Invalid format: {}", args[i]);
                        process::exit(1);
                    }));
                }
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }

    let input = match fs::read_to_string(input_path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to read {}: {}", input_path, e);
            process::exit(1);
        }
    };

    let schema = match Schema::from_json(&input) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Schema error: {}", e);
            process::exit(1);
        }
    };

    let problems = validate(&schema);
    for problem in &problems {
        eprintln!("{}", problem);
    }
    if problems.iter().any(|p| p.severity == Severity::Error) {
        process::exit(1);
    }

    let output = match format {
        Some(format) => generate_one(&schema, format),
        None => match serde_json::to_string_pretty(&generate_all(&schema)) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Failed to serialize output: {}", e);
                process::exit(1);
            }
        },
    };

    match output_path {
        Some(path) => {
            if let Err(e) = fs::write(&path, &output) {
                eprintln!("Failed to write {}: {}", path, e);
                process::exit(1);
            }
        }
        None => print!("{}", output),
    }
}

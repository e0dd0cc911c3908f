use std::process;

use crate::{report_error, GenerateCommands};

pub(crate) fn cmd_generate(command: GenerateCommands, quiet: bool) {
    match command {
        GenerateCommands::Typescript {
            input,
            out,
            runtime_import,
        } => {
            // Determine the schema format by extension
            let ext = input.extension().and_then(|e| e.to_str()).unwrap_or("");

            let text = match std::fs::read_to_string(&input) {
                Ok(s) => s,
                Err(e) => {
                    let msg = format!("error reading '{}': {}", input.display(), e);
                    report_error(&msg, quiet);
                    process::exit(1);
                }
            };

            let schema: serde_json::Value = match ext {
                "yaml" | "yml" => match serde_yaml::from_str(&text) {
                    Ok(v) => v,
                    Err(e) => {
                        let msg = format!("error parsing YAML in '{}': {}", input.display(), e);
                        report_error(&msg, quiet);
                        process::exit(1);
                    }
                },
                "json" => match serde_json::from_str(&text) {
                    Ok(v) => v,
                    Err(e) => {
                        let msg = format!("error parsing JSON in '{}': {}", input.display(), e);
                        report_error(&msg, quiet);
                        process::exit(1);
                    }
                },
                _ => {
                    let msg = format!(
                        "unsupported input file type '{}': expected .yaml, .yml, or .json",
                        input.display()
                    );
                    report_error(&msg, quiet);
                    process::exit(1);
                }
            };

            let config = dombind_codegen::TypeScriptConfig {
                out_file: out,
                runtime_import,
            };

            match dombind_codegen::generate_typescript(&schema, &config) {
                Ok(out_file) => {
                    if !quiet {
                        println!("Generated TypeScript bindings in {}", out_file.display());
                    }
                }
                Err(e) => {
                    let msg = format!("code generation error: {}", e);
                    report_error(&msg, quiet);
                    process::exit(1);
                }
            }
        }
    }
}

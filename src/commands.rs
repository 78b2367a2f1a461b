//! Command handlers behind the `mockstruct` binary.

use anyhow::{bail, Context, Result};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::adapters::output::{self, OutputFormat};
use crate::adapters::synthesizer::{
    synthesize_from_source, synthesize_many_from_source, SynthesisOptions,
};
use crate::adapters::ts_parser::TsInterfaceSource;
use crate::cli::{Cli, Command, GenerateArgs, LegacyArgs, ValidateArgs};
use crate::config::Settings;
use crate::domain::SynthError;

pub const CLI_NAME: &str = "mockstruct";
pub const CLI_DESCRIPTION: &str = "TypeScript Interface Mock Generator CLI";

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Generate(args) => generate(&cli.config, &args),
        Command::Ms(args) => legacy(&args),
        Command::Validate(args) => validate(&args),
        Command::Info => {
            println!("{}", info_text());
            Ok(())
        }
    }
}

/// The input must exist and be a `.ts` or `.tsx` file.
pub fn validate_input_file(path: &Path) -> Result<()> {
    if !path.exists() {
        bail!("File \"{}\" does not exist", path.display());
    }
    let is_typescript = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map_or(false, |ext| ext == "ts" || ext == "tsx");
    if !is_typescript {
        bail!("File \"{}\" is not a TypeScript file", path.display());
    }
    Ok(())
}

/// Generate one object (count 1) or an array of objects for `interface`.
pub fn generate_value(
    file: &Path,
    interface: &str,
    count: i64,
    options: &SynthesisOptions,
) -> Result<Value, SynthError> {
    let source = TsInterfaceSource::new(file);
    if count == 1 {
        let object = synthesize_from_source(&source, interface, options)?;
        return Ok(Value::Object(object));
    }
    let count = usize::try_from(count).map_err(|_| SynthError::InvalidCount(count))?;
    let objects = synthesize_many_from_source(&source, interface, count, options)?;
    Ok(Value::Array(objects.into_iter().map(Value::Object).collect()))
}

fn generate(config_path: &Path, args: &GenerateArgs) -> Result<()> {
    let settings = Settings::load_for_generate(config_path, args)?;

    let file = absolute(&args.file);
    if !args.no_validation {
        validate_input_file(&file)?;
    }
    if let Some(out) = &args.out {
        output::validate_output_path(out)?;
    }

    let count = settings.generation.count;
    info!(count, interface = %args.interface, "generating mock object(s)");

    let data = generate_value(&file, &args.interface, count, &settings.synthesis_options())
        .with_context(|| format!("failed to mock interface \"{}\"", args.interface))?;

    emit(&data, args.out.as_deref(), settings.generation.format)
}

fn legacy(args: &LegacyArgs) -> Result<()> {
    let file = absolute(&args.file);
    validate_input_file(&file)?;
    if let Some(out) = &args.out {
        output::validate_output_path(out)?;
    }

    let data = generate_value(&file, &args.name, 1, &SynthesisOptions::default())?;
    emit(&data, args.out.as_deref(), OutputFormat::Pretty)
}

fn validate(args: &ValidateArgs) -> Result<()> {
    let file = absolute(&args.file);
    validate_input_file(&file)?;

    match generate_value(&file, &args.interface, 1, &SynthesisOptions::default()) {
        Ok(_) => {
            println!("Interface \"{}\" is valid and can be mocked", args.interface);
            Ok(())
        }
        Err(e) => bail!("Interface validation failed: {e}"),
    }
}

fn emit(data: &Value, out: Option<&Path>, format: OutputFormat) -> Result<()> {
    match out {
        Some(path) => {
            output::save_to_file(data, path, format)?;
            let size = std::fs::metadata(path).map(|m| m.len()).unwrap_or(0);
            eprintln!("Output saved to: {}", absolute(path).display());
            eprintln!("File size: {:.2} KB", size as f64 / 1024.0);
        }
        None => println!("{}", output::render(data, format)?),
    }
    eprintln!("{}", output::summary(data));
    Ok(())
}

fn absolute(path: &Path) -> PathBuf {
    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .unwrap_or_else(|_| path.to_path_buf())
}

pub fn info_text() -> String {
    format!(
        "{CLI_NAME} v{version}
{CLI_DESCRIPTION}

Features:
  - Generate realistic mock data from TypeScript interfaces
  - Multiple mock objects per run
  - Seed-based reproducible generation
  - Output formats: json, compact, pretty
  - Save output to JSON files
  - File and interface validation
  - Contextual values based on property names

Usage examples:
  {CLI_NAME} generate -f ./types.ts -i User
  {CLI_NAME} gen -f ./types.ts -i User -c 5 -s 12345
  {CLI_NAME} gen -f ./types.ts -i User --out ./output/users.json
  {CLI_NAME} gen -f ./types.ts -i User -c 10 -o compact --out ./data/mock-users.json
  {CLI_NAME} validate -f ./types.ts -i User
  {CLI_NAME} ms --interface ./types.ts --name User --out ./legacy-output.json

For more help: {CLI_NAME} --help",
        version = env!("CARGO_PKG_VERSION"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const TYPES: &str = "interface User {\n  id: string;\n  age: number;\n  isActive: boolean;\n}\n";

    fn fixture() -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("types.ts");
        fs::write(&path, TYPES).unwrap();
        (dir, path)
    }

    #[test]
    fn test_validate_input_file() {
        let (dir, path) = fixture();
        assert!(validate_input_file(&path).is_ok());
        assert!(validate_input_file(&dir.path().join("missing.ts")).is_err());

        let js = dir.path().join("types.js");
        fs::write(&js, TYPES).unwrap();
        assert!(validate_input_file(&js).is_err());
    }

    #[test]
    fn test_generate_value_single_and_batch() {
        let (_dir, path) = fixture();
        let options = SynthesisOptions::new().with_seed(42);

        let single = generate_value(&path, "User", 1, &options).unwrap();
        assert_eq!(single.as_object().unwrap().len(), 3);

        let batch = generate_value(&path, "User", 4, &options).unwrap();
        assert_eq!(batch.as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_generate_value_errors() {
        let (_dir, path) = fixture();
        let options = SynthesisOptions::new();

        assert!(matches!(
            generate_value(&path, "User", 0, &options),
            Err(SynthError::InvalidCount(0))
        ));
        assert!(matches!(
            generate_value(&path, "User", -3, &options),
            Err(SynthError::InvalidCount(-3))
        ));
        assert!(matches!(
            generate_value(&path, "Missing", 1, &options),
            Err(SynthError::SchemaNotFound { .. })
        ));
    }

    #[test]
    fn test_info_text_mentions_usage() {
        let text = info_text();
        assert!(text.starts_with("mockstruct v"));
        assert!(text.contains("gen -f ./types.ts -i User -c 5 -s 12345"));
    }
}

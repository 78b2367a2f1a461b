use crate::domain::SynthError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// How generated data is rendered as text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Single line
    Json,
    /// Single line, same as `json`
    Compact,
    /// Indented with two spaces
    #[default]
    Pretty,
}

pub fn render(value: &Value, format: OutputFormat) -> Result<String, SynthError> {
    let text = match format {
        OutputFormat::Json | OutputFormat::Compact => serde_json::to_string(value)?,
        OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
    };
    Ok(text)
}

/// Check an output destination before any data is generated.
///
/// The file must have a `.json` extension. Missing parent directories are created.
pub fn validate_output_path(path: &Path) -> Result<PathBuf, SynthError> {
    let has_json_extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map_or(false, |ext| ext.eq_ignore_ascii_case("json"));
    if !has_json_extension {
        return Err(SynthError::InvalidOutputPath {
            path: path.to_path_buf(),
            reason: "output file must have .json extension".to_string(),
        });
    }

    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        if !dir.exists() {
            fs::create_dir_all(dir).map_err(|e| SynthError::io(dir, e))?;
            info!(dir = %dir.display(), "created output directory");
        }
    }

    if path.exists() {
        warn!(path = %path.display(), "output file already exists and will be overwritten");
    }

    Ok(path.to_path_buf())
}

pub fn save_to_file(value: &Value, path: &Path, format: OutputFormat) -> Result<(), SynthError> {
    let text = render(value, format)?;
    fs::write(path, text).map_err(|e| SynthError::io(path, e))
}

/// One-line description of what was generated, e.g. `Generated 5 objects`.
pub fn summary(value: &Value) -> String {
    match value {
        Value::Array(items) => format!("Generated {} objects", items.len()),
        Value::Object(fields) => format!("Generated object with {} properties", fields.len()),
        _ => "Generated value".to_string(),
    }
}

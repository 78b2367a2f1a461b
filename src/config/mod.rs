use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

pub mod validator;

use crate::adapters::output::OutputFormat;
use crate::adapters::synthesizer::SynthesisOptions;
use crate::cli::GenerateArgs;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub generation: GenerationSettings,
    /// Fields that are always emitted with a fixed value, whatever their declared type
    #[serde(default)]
    pub overrides: Vec<FieldOverride>,
}

/// A constant value for one field.
///
/// Kept as a list of entries rather than a table because the config loader
/// lower-cases table keys, which would break camelCase field names.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FieldOverride {
    pub field: String,
    pub value: Value,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GenerationSettings {
    #[serde(default = "default_count")]
    pub count: i64,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_count() -> i64 {
    1
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            count: default_count(),
            seed: None,
            format: OutputFormat::default(),
        }
    }
}

impl Settings {
    /// Load settings from an optional config file, then `MOCKSTRUCT_*` environment
    /// variables (`__` separates nested keys, e.g. `MOCKSTRUCT_GENERATION__SEED`).
    pub fn load(config_path: &Path) -> Result<Self, anyhow::Error> {
        let settings = Self::read(config_path)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Like [`Settings::load`], with `generate` flags applied before validation.
    pub fn load_for_generate(config_path: &Path, args: &GenerateArgs) -> Result<Self, anyhow::Error> {
        let mut settings = Self::read(config_path)?;
        settings.apply_generate_overrides(args);
        settings.validate()?;
        Ok(settings)
    }

    fn read(config_path: &Path) -> Result<Self, anyhow::Error> {
        let s = Config::builder()
            .add_source(File::from(config_path.to_path_buf()).required(false))
            .add_source(
                Environment::with_prefix("MOCKSTRUCT")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_default("generation.count", 1)?
            .set_default("generation.format", "pretty")?
            .build()?;

        Ok(s.try_deserialize()?)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        validator::ConfigValidator::validate(self).map_err(|errors| {
            let error_messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            anyhow::anyhow!(
                "Configuration validation failed:\n{}",
                error_messages.join("\n")
            )
        })
    }

    /// Apply command-line overrides (CLI > env vars > config file)
    pub fn apply_generate_overrides(&mut self, args: &GenerateArgs) {
        if let Some(count) = args.count {
            self.generation.count = count;
        }
        if let Some(seed) = args.seed {
            self.generation.seed = Some(seed);
        }
        if let Some(format) = args.output {
            self.generation.format = format;
        }
    }

    pub fn synthesis_options(&self) -> SynthesisOptions {
        let options = SynthesisOptions {
            seed: self.generation.seed,
            ..SynthesisOptions::default()
        };
        self.overrides
            .iter()
            .fold(options, |options, entry| {
                options.with_constant(entry.field.clone(), entry.value.clone())
            })
    }
}

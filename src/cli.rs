use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::adapters::output::OutputFormat;

/// Mock data generator for TypeScript interfaces
#[derive(Parser, Debug, Clone)]
#[command(name = "mockstruct", version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(long, global = true, env = "MOCKSTRUCT_CONFIG", default_value = "mockstruct.toml")]
    pub config: PathBuf,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Generate mock data from a TypeScript interface
    #[command(visible_aliases = ["gen", "g"])]
    Generate(GenerateArgs),

    /// Generate mock structure (legacy command)
    Ms(LegacyArgs),

    /// Validate a TypeScript file and interface
    #[command(visible_alias = "val")]
    Validate(ValidateArgs),

    /// Display information about the CLI
    #[command(visible_alias = "i")]
    Info,
}

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Path to TypeScript file containing the interface
    #[arg(short, long)]
    pub file: PathBuf,

    /// Name of the interface to generate mock for
    #[arg(short, long)]
    pub interface: String,

    /// Number of mock objects to generate [default: 1]
    #[arg(short, long, allow_negative_numbers = true)]
    pub count: Option<i64>,

    /// Seed for consistent random generation
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Output format [default: pretty]
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Save output to a JSON file instead of displaying in console
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Skip file validation
    #[arg(long)]
    pub no_validation: bool,
}

#[derive(Args, Debug, Clone)]
pub struct LegacyArgs {
    /// Path to TypeScript file containing the interface
    #[arg(long = "interface")]
    pub file: PathBuf,

    /// Name of the interface to parse
    #[arg(long)]
    pub name: String,

    /// Save output to a JSON file instead of displaying in console
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {
    /// Path to TypeScript file
    #[arg(short, long)]
    pub file: PathBuf,

    /// Interface name to validate
    #[arg(short, long)]
    pub interface: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_defaults() {
        let cli = Cli::parse_from(["mockstruct", "generate", "-f", "types.ts", "-i", "User"]);
        assert_eq!(cli.config, PathBuf::from("mockstruct.toml"));
        assert_eq!(cli.verbose, 0);
        match cli.command {
            Command::Generate(args) => {
                assert_eq!(args.file, PathBuf::from("types.ts"));
                assert_eq!(args.interface, "User");
                assert!(args.count.is_none());
                assert!(args.seed.is_none());
                assert!(args.output.is_none());
                assert!(args.out.is_none());
                assert!(!args.no_validation);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_generate_with_args() {
        let cli = Cli::parse_from([
            "mockstruct",
            "-vv",
            "gen",
            "-f",
            "types.ts",
            "-i",
            "User",
            "-c",
            "5",
            "-s",
            "12345",
            "-o",
            "compact",
            "--out",
            "out/users.json",
            "--no-validation",
        ]);
        assert_eq!(cli.verbose, 2);
        let Command::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.count, Some(5));
        assert_eq!(args.seed, Some(12345));
        assert_eq!(args.output, Some(OutputFormat::Compact));
        assert_eq!(args.out, Some(PathBuf::from("out/users.json")));
        assert!(args.no_validation);
    }

    #[test]
    fn test_negative_count_reaches_the_command() {
        let cli = Cli::parse_from(["mockstruct", "g", "-f", "a.ts", "-i", "A", "-c", "-2"]);
        let Command::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.count, Some(-2));
    }

    #[test]
    fn test_legacy_and_validate() {
        let cli = Cli::parse_from(["mockstruct", "ms", "--interface", "a.ts", "--name", "User"]);
        assert!(matches!(cli.command, Command::Ms(LegacyArgs { ref name, .. }) if name == "User"));

        let cli = Cli::parse_from(["mockstruct", "val", "-f", "a.ts", "-i", "User"]);
        assert!(matches!(cli.command, Command::Validate(_)));

        let cli = Cli::parse_from(["mockstruct", "info"]);
        assert!(matches!(cli.command, Command::Info));
    }
}

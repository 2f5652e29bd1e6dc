use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use optline_core::{SessionSpec, validate_session};
use optline_parser::{ParseReport, run_session, split_command_line};

/// Output format for reports and token lists.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum CliOutputFormat {
    Json,
    Yaml,
}

#[derive(Debug, Parser)]
#[command(name = "optline")]
#[command(about = "Spec-driven command-line argument parsing and validation")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse tokens against a session spec file and print a report.
    Parse(ParseArgs),
    /// Validate one or more session spec files.
    Check(CheckArgs),
    /// Split a raw command-line string into tokens.
    Tokenize(TokenizeArgs),
}

#[derive(Debug, Args)]
struct ParseArgs {
    /// Session spec file (JSON, or YAML by extension).
    #[arg(long)]
    spec: PathBuf,
    /// Raw command-line string, split with the quote-aware tokenizer.
    #[arg(long, conflicts_with = "tokens")]
    line: Option<String>,
    /// Pre-split tokens (everything after `--`).
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    tokens: Vec<String>,
    /// Report output format.
    #[arg(long, default_value = "json")]
    format: CliOutputFormat,
}

#[derive(Debug, Args)]
struct CheckArgs {
    /// Session spec files to validate.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
}

#[derive(Debug, Args)]
struct TokenizeArgs {
    /// Raw command-line string.
    #[arg(long, allow_hyphen_values = true)]
    line: String,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Parse(args) => run_parse(args),
        Command::Check(args) => run_check(args),
        Command::Tokenize(args) => run_tokenize(args),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run_parse(args: ParseArgs) -> Result<(), String> {
    let spec = load_spec(&args.spec)?;

    let tokens = match &args.line {
        Some(line) => split_command_line(line),
        None => args.tokens.clone(),
    };

    let report = run_session(&spec, &tokens);
    println!("{}", format_report(&report, args.format)?);

    match &report.error {
        Some(error) => Err(error.clone()),
        None => Ok(()),
    }
}

fn run_check(args: CheckArgs) -> Result<(), String> {
    let mut invalid = 0usize;

    for input in &args.inputs {
        let spec = load_spec(input)?;
        let errors = validate_session(&spec);
        if errors.is_empty() {
            println!("{}: OK", input.display());
        } else {
            invalid += 1;
            println!("{}: INVALID", input.display());
            for error in &errors {
                println!("  - {error}");
            }
        }
    }

    if invalid > 0 {
        Err(format!("{invalid} invalid spec file(s)"))
    } else {
        Ok(())
    }
}

fn run_tokenize(args: TokenizeArgs) -> Result<(), String> {
    let tokens = split_command_line(&args.line);
    let raw = serde_json::to_string_pretty(&tokens)
        .map_err(|err| format!("Failed to serialize tokens: {err}"))?;
    println!("{raw}");
    Ok(())
}

fn load_spec(path: &Path) -> Result<SessionSpec, String> {
    let raw = fs::read_to_string(path)
        .map_err(|err| format!("Failed to read '{}': {err}", path.display()))?;

    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

    if is_yaml {
        serde_yaml::from_str(&raw)
            .map_err(|err| format!("Failed to parse '{}': {err}", path.display()))
    } else {
        serde_json::from_str(&raw)
            .map_err(|err| format!("Failed to parse '{}': {err}", path.display()))
    }
}

fn format_report(report: &ParseReport, format: CliOutputFormat) -> Result<String, String> {
    match format {
        CliOutputFormat::Json => serde_json::to_string_pretty(report)
            .map_err(|err| format!("Failed to serialize report: {err}")),
        CliOutputFormat::Yaml => serde_yaml::to_string(report)
            .map_err(|err| format!("Failed to serialize report: {err}")),
    }
}

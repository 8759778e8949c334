//! Brandguard command-line interface.
//!
//! Loads a competitor list from a YAML/JSON file, checks or filters
//! text from a file or stdin, and renders the report as text, JSON, or
//! YAML. `check` exits non-zero when mentions are found, so it can gate
//! a pipeline.

use std::fmt::Write as _;
use std::fs;
use std::io::Read as _;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use brandguard_core::{check, CheckReport, CompetitorList};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "brandguard", version, about = "Check text for competitor mentions")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check text and report every flagged sentence
    Check {
        /// Competitor list file (YAML, or JSON by extension)
        #[arg(short, long, value_name = "FILE")]
        competitors: PathBuf,

        /// Input text file; reads stdin when omitted
        input: Option<PathBuf>,

        /// Report format
        #[arg(long, value_enum, default_value = "text")]
        format: Format,
    },

    /// Print the input with flagged sentences removed
    Filter {
        /// Competitor list file (YAML, or JSON by extension)
        #[arg(short, long, value_name = "FILE")]
        competitors: PathBuf,

        /// Input text file; reads stdin when omitted
        input: Option<PathBuf>,
    },
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Format {
    Text,
    Json,
    Yaml,
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            competitors,
            input,
            format,
        } => {
            let list = load_competitors(&competitors)?;
            let text = read_input(input.as_deref())?;
            let report = check(&text, &list)?;

            match format {
                Format::Text => print!("{}", render_text_report(&report)),
                Format::Json => println!("{}", serde_json::to_string_pretty(&report)?),
                Format::Yaml => print!("{}", serde_yaml::to_string(&report)?),
            }

            if report.verdict.is_flagged() {
                Ok(ExitCode::FAILURE)
            } else {
                Ok(ExitCode::SUCCESS)
            }
        }

        Commands::Filter { competitors, input } => {
            let list = load_competitors(&competitors)?;
            let text = read_input(input.as_deref())?;
            let report = check(&text, &list)?;

            println!("{}", report.filtered_text);
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Load a competitor list, choosing the parser by file extension.
fn load_competitors(path: &Path) -> Result<CompetitorList> {
    let list = if path.extension().is_some_and(|ext| ext == "json") {
        CompetitorList::from_json_file(path)
    } else {
        CompetitorList::from_yaml_file(path)
    };
    let list =
        list.with_context(|| format!("loading competitor list from {}", path.display()))?;
    tracing::debug!(
        path = %path.display(),
        entries = list.competitors.len(),
        "loaded competitor list"
    );
    Ok(list)
}

/// Read the input text from a file, or stdin when no file is given.
fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
        }
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("reading stdin")?;
            Ok(text)
        }
    }
}

/// Render a human-readable report.
fn render_text_report(report: &CheckReport) -> String {
    let mut out = String::new();

    if report.verdict.is_pass() {
        out.push_str("PASS: no competitor mentions found\n");
        return out;
    }

    let _ = writeln!(
        out,
        "FLAGGED: {} sentence(s) name competitors",
        report.flagged.len()
    );
    for flag in &report.flagged {
        let _ = writeln!(
            out,
            "  [{}..{}] {}: {}",
            flag.start,
            flag.end,
            flag.competitors.join(", "),
            flag.text
        );
    }
    if let Some(message) = report.error_message() {
        let _ = writeln!(out, "\n{}", message);
    }
    let _ = writeln!(out, "\nFiltered output:\n{}", report.filtered_text);

    out
}

//! taskbind - resolve service task definitions from the command line.
//!
//! Reads a JSON array of task definitions (as produced by the document
//! parser), resolves each one against a descriptor factory and prints a JSON
//! report. Classification misses are warnings: they appear in the report and
//! in the log, and only fail the run with `--strict`.

mod logging;

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use taskbind_core::config::{LogFormat, ResolverConfig};
use taskbind_core::domain::{Diagnostic, TaskDefinition};
use taskbind_core::impls::{
    CollectingDiagnosticSink, DescriptorBehaviorFactory, FanoutDiagnosticSink,
    TracingDiagnosticSink,
};
use taskbind_core::app::ResolutionReport;
use taskbind_core::ports::DiagnosticSink;
use taskbind_core::{ResolverBuilder, ServiceTaskResolver};

#[derive(Parser)]
#[command(name = "taskbind")]
#[command(about = "Resolve service task behaviors", long_about = None)]
struct Cli {
    /// Resolver configuration (TOML)
    #[arg(long, global = true, env = "TASKBIND_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (overrides the config file)
    #[arg(long, global = true, env = "LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: pretty, compact or json (overrides the config file)
    #[arg(long, global = true, value_parser = parse_format)]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve every definition in a JSON file
    Resolve {
        /// JSON array of task definitions
        file: PathBuf,
        /// Exit with status 2 when any definition is rejected
        #[arg(long)]
        strict: bool,
    },
    /// List the registered named types
    Types,
}

#[derive(Serialize)]
struct CliReport {
    #[serde(flatten)]
    report: ResolutionReport,
    diagnostics: Vec<Diagnostic>,
}

fn parse_format(s: &str) -> Result<LogFormat, String> {
    match s.to_lowercase().as_str() {
        "pretty" => Ok(LogFormat::Pretty),
        "compact" => Ok(LogFormat::Compact),
        "json" => Ok(LogFormat::Json),
        other => Err(format!("unknown log format '{other}'")),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = match &cli.config {
        Some(path) => ResolverConfig::load_from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ResolverConfig::default(),
    };

    let level = cli.log_level.as_deref().unwrap_or(&config.logging.level);
    logging::init_logging(
        logging::parse_level(level),
        cli.log_format.unwrap_or(config.logging.format),
    );

    match cli.command {
        Commands::Resolve { file, strict } => resolve(&config, &file, strict),
        Commands::Types => {
            let resolver = build_resolver(&config, Arc::new(TracingDiagnosticSink::new()))?;
            for name in resolver.registry().registered_types() {
                println!("{name}");
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn build_resolver(
    config: &ResolverConfig,
    sink: Arc<dyn DiagnosticSink>,
) -> Result<ServiceTaskResolver> {
    let resolver = ResolverBuilder::new()
        .with_config(config)?
        .factory(Arc::new(DescriptorBehaviorFactory::new()))
        .diagnostic_sink(sink)
        .build()?;
    Ok(resolver)
}

fn resolve(config: &ResolverConfig, file: &Path, strict: bool) -> Result<ExitCode> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("reading {}", file.display()))?;
    let definitions: Vec<TaskDefinition> = serde_json::from_str(&content)
        .with_context(|| format!("parsing task definitions from {}", file.display()))?;

    let collected = CollectingDiagnosticSink::new();
    let sink = FanoutDiagnosticSink::new()
        .with_sink(Arc::new(TracingDiagnosticSink::new()))
        .with_sink(Arc::new(collected.clone()));
    let resolver = build_resolver(config, Arc::new(sink))?;

    let report = resolver.resolve_all(&definitions);
    let rejected = report.rejected;
    let output = CliReport {
        report,
        diagnostics: collected.drain(),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);

    if strict && rejected > 0 {
        return Ok(ExitCode::from(2));
    }
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_format_accepts_known_names() {
        assert_eq!(parse_format("JSON"), Ok(LogFormat::Json));
        assert_eq!(parse_format("pretty"), Ok(LogFormat::Pretty));
        assert!(parse_format("xml").is_err());
    }

    #[test]
    fn cli_parses_resolve_command() {
        let cli = Cli::try_parse_from(["taskbind", "resolve", "defs.json", "--strict"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Resolve { ref file, strict: true } if file == Path::new("defs.json")
        ));
    }
}

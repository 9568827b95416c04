//! CLI entrypoint for numeric-converter
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use numconv_application::{ConversionHistory, ConvertUseCase, NoConversionHistory};
use numconv_domain::{ConversionRequest, ConversionResult, FormatTag, OutputFormat};
use numconv_infrastructure::{ConfigLoader, FileConfig, JsonlConversionHistory};
use numconv_presentation::{Cli, ConsoleFormatter, JsonLinesServer};
use std::io;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(ExitCode::SUCCESS);
    }

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };
    config.validate()?;

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    // === Dependency Injection ===
    let use_case = ConvertUseCase::new().with_history(open_history(&cli, &config));
    let output = cli
        .output
        .map(OutputFormat::from)
        .or(config.output.format)
        .unwrap_or_default();

    // JSON boundary mode
    if cli.json {
        info!("Serving JSON requests from stdin");
        let server = JsonLinesServer::new(use_case);
        let summary = server
            .serve(io::stdin().lock(), io::stdout().lock())
            .context("Failed to read requests from stdin")?;
        info!(
            "Answered {} requests ({} failed)",
            summary.succeeded + summary.failed,
            summary.failed
        );
        return Ok(ExitCode::SUCCESS);
    }

    let Some(input) = cli.input else {
        bail!("Input is required. Use --json to read requests from stdin.");
    };

    let (from, to) = config
        .defaults
        .to_default_formats()
        .resolve(cli.from.map(FormatTag::from), cli.to.map(FormatTag::from));

    // Every-format mode
    if cli.all {
        return match use_case.convert_to_all(&input, from) {
            Ok(rendered) => {
                let text = match output {
                    OutputFormat::Json => ConsoleFormatter::format_all_json(&rendered),
                    OutputFormat::Plain | OutputFormat::Full => {
                        ConsoleFormatter::format_all(&input, from, &rendered)
                    }
                };
                print!("{}", text);
                if !text.ends_with('\n') {
                    println!();
                }
                Ok(ExitCode::SUCCESS)
            }
            Err(e) => {
                eprintln!(
                    "{}",
                    ConsoleFormatter::format_plain(&ConversionResult::Failed(e.to_string()))
                );
                Ok(ExitCode::FAILURE)
            }
        };
    }

    // Single conversion
    let request = ConversionRequest::typed(input, from, to);
    let result = use_case.execute(&request);

    match output {
        OutputFormat::Json => println!("{}", ConsoleFormatter::format_json(&result)),
        OutputFormat::Full => println!("{}", ConsoleFormatter::format_full(&request, &result)),
        OutputFormat::Plain if result.is_success() => {
            println!("{}", ConsoleFormatter::format_plain(&result))
        }
        OutputFormat::Plain => eprintln!("{}", ConsoleFormatter::format_plain(&result)),
    }

    Ok(if result.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Pick the history sink: `--no-history` wins, then `--history`, then config.
fn open_history(cli: &Cli, config: &FileConfig) -> Arc<dyn ConversionHistory> {
    if cli.no_history {
        return Arc::new(NoConversionHistory);
    }

    let path = cli.history.as_ref().or(config.history.active_path());
    match path.and_then(JsonlConversionHistory::open) {
        Some(history) => {
            info!("Recording history to {}", history.path().display());
            Arc::new(history)
        }
        None => {
            if let Some(path) = path {
                warn!("History disabled: could not open {}", path.display());
            }
            Arc::new(NoConversionHistory)
        }
    }
}

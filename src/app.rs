// Declare modules
pub mod cli;
pub mod config;
pub mod error;
pub mod formatter;
pub mod models;
pub mod scanner;

use anyhow::{Context, Result};
use clap::Parser;
use std::env;

use self::cli::Cli;
use self::config::resolve_config;
use self::formatter::OutputGenerator;
use self::models::{CombineSummary, RuntimeConfig};
use self::scanner::Scanner;

/// Parses arguments, loads configuration and runs the combiner.
pub fn run() -> Result<()> {
    let args = Cli::parse();

    let current_dir = env::current_dir().context("Failed to get current directory")?;
    let config = resolve_config(&args, &current_dir).context("Error loading config")?;

    if config.patterns.is_empty() {
        log::warn!("⚠️ No paths configured; the combined file will be empty.");
    }

    let summary = combine(&config)?;

    log::info!("Combined {} file(s)", summary.included.len());
    if !summary.errors.is_empty() {
        log::warn!("{} path(s) could not be combined", summary.errors.len());
    }
    println!(
        "Files combined successfully into {}!",
        summary.output_file.display()
    );
    Ok(())
}

/// One pass over the configured patterns. Read and walk errors are logged
/// and skipped; only a failed write of the output aborts.
pub fn combine(config: &RuntimeConfig) -> Result<CombineSummary> {
    let scanner = Scanner::new(config);
    let mut output = OutputGenerator::new(&config.comment_symbol);
    let mut included = Vec::new();
    let mut errors = Vec::new();

    for pattern in &config.patterns {
        let mut entries = Vec::new();
        let walked = scanner.expand(pattern, &mut entries);

        for entry in entries {
            match output.push_file(&entry) {
                Ok(()) => {
                    log::debug!("Added {}", entry.relative_path);
                    included.push(entry.relative_path);
                }
                Err(err) => {
                    log::error!("{}", err);
                    errors.push(err);
                }
            }
        }

        if let Err(err) = walked {
            log::error!("{}", err);
            errors.push(err);
        }
    }

    log::debug!("Writing {} bytes", output.as_str().len());
    output.write_to(&config.output_file)?;

    Ok(CombineSummary {
        output_file: config.output_file.clone(),
        included,
        errors,
    })
}

//! Command-line interface layer.

use std::{fs, path::Path};

use anyhow::Result;
use colored::Colorize;

use crate::config;
use crate::report;

mod args;
mod exit_status;
pub mod run;

pub use args::Arguments;
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    if args.init {
        init()?;
        println!(
            "{} {}",
            report::SUCCESS_MARK.green(),
            format!("Created {}", config::CONFIG_FILE_NAME).green()
        );
        return Ok(ExitStatus::Success);
    }

    let cwd = std::env::current_dir()?;
    let loaded = config::load_config(&cwd)?;
    let mut config = loaded.config;

    // CLI overrides
    if let Some(driving) = args.driving {
        config.driving = driving.to_string_lossy().to_string();
    }
    if !args.references.is_empty() {
        config.references = args
            .references
            .iter()
            .map(|p| p.to_string_lossy().to_string())
            .collect();
    }
    config.validate()?;

    let outcome = run::run(&config)?;

    if args.verbose {
        let source = if loaded.from_file {
            config::CONFIG_FILE_NAME
        } else {
            "built-in defaults"
        };
        eprintln!("config: {}", source);
        for bundle in &outcome.checked {
            eprintln!("loaded {} ({} keys)", bundle.name, bundle.entries);
        }
    }

    if outcome.report.passed() {
        report::print_success(outcome.checked.len());
        Ok(ExitStatus::Success)
    } else {
        report::report(outcome.report.findings());
        Ok(ExitStatus::Failure)
    }
}

fn init() -> Result<()> {
    let config_path = Path::new(config::CONFIG_FILE_NAME);
    if config_path.exists() {
        anyhow::bail!("{} already exists", config::CONFIG_FILE_NAME);
    }

    fs::write(config_path, config::default_config_json()?)?;
    Ok(())
}

//! Energy mix CLI - Command Line Scenario Exploration
//!
//! This is the operational entry point for the energy mix scenario calculator.
//!
//! # Commands
//!
//! - `energymix compute --nuclear 30 --renewable 20` - Evaluate one mix against the baseline
//! - `energymix sweep --vary nuclear --fixed 20` - Step one share across its range
//! - `energymix presets` - List the preset mixes
//! - `energymix baseline` - Show the fixed comparison baseline
//! - `energymix check` - Validate configuration and run a calculator self-check
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate wraps `scenario_core` with
//! configuration, logging, and output formatting.

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::Path;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

use commands::OutputFormat;
use config::CliConfig;
use scenario_core::EnergySource;
pub use error::{CliError, Result};

/// Energy mix scenario calculator CLI
#[derive(Parser, Debug)]
#[command(name = "energymix")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "energymix.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate one mix and compare it against the baseline
    Compute {
        /// Nuclear share in percent (defaults to configuration)
        #[arg(short, long, allow_negative_numbers = true)]
        nuclear: Option<i64>,

        /// Renewable share in percent, at most 100 - nuclear (defaults to configuration)
        #[arg(short, long, allow_negative_numbers = true)]
        renewable: Option<i64>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Step one share across its valid range
    Sweep {
        /// Share to vary (nuclear, renewable)
        #[arg(long, default_value = "nuclear")]
        vary: EnergySource,

        /// Value of the other adjustable share in percent
        #[arg(long, allow_negative_numbers = true)]
        fixed: i64,

        /// Step in percentage points (defaults to configuration)
        #[arg(short, long, allow_negative_numbers = true)]
        step: Option<i64>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// List the preset mixes with their metrics
    Presets {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Show the fixed comparison baseline
    Baseline {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Check configuration and run a calculator self-check
    Check,
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = CliConfig::load_or_default(Path::new(&cli.config))
        .and_then(CliConfig::with_env_override)
        .with_context(|| format!("failed to load configuration from {}", cli.config))?;

    let log_level = if cli.verbose {
        "debug"
    } else {
        config.log_level.as_str()
    };
    init_tracing(log_level);

    if cli.verbose {
        info!("Verbose mode enabled");
    }
    debug!(?config, "Configuration loaded");

    match cli.command {
        Commands::Compute {
            nuclear,
            renewable,
            format,
        } => commands::compute::run(
            nuclear.unwrap_or(config.default_nuclear),
            renewable.unwrap_or(config.default_renewable),
            format,
        ),
        Commands::Sweep {
            vary,
            fixed,
            step,
            format,
        } => commands::sweep::run(vary, fixed, step.unwrap_or(config.sweep_step), format),
        Commands::Presets { format } => commands::presets::run(format),
        Commands::Baseline { format } => commands::baseline::run(format),
        Commands::Check => commands::check::run(&config, &cli.config),
    }
    .context("command failed")?;

    Ok(())
}

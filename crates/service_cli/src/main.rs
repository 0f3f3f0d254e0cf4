//! Voltaic CLI - Command Line Operations for Energy Option Pricing
//!
//! This is the operational entry point for the voltaic pricing library.
//!
//! # Commands
//!
//! - `voltaic price` - Price a European option on an energy future
//!   against a settlement CSV
//! - `voltaic expiry` - Show the expiry date for an instrument and
//!   delivery month
//!
//! # Architecture
//!
//! As the service layer of the A-P-S architecture, this crate wires the
//! adapter and pricer layers together behind a command-line interface
//! and maps failure kinds to user-facing messages.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

/// Voltaic energy option pricing CLI
#[derive(Parser)]
#[command(name = "voltaic")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a European option on an energy future
    Price {
        /// Underlying instrument (e.g. "Crude Oil", "CL", "Natural Gas")
        #[arg(short, long)]
        instrument: String,

        /// Delivery month (YYYY-MM)
        #[arg(short, long)]
        month: String,

        /// Option kind: call or put
        #[arg(short, long)]
        kind: String,

        /// Strike price
        #[arg(short, long)]
        strike: f64,

        /// Path to a settlement CSV file
        #[arg(short, long)]
        quotes: PathBuf,

        /// Valuation date (YYYY-MM-DD); defaults to today
        #[arg(short, long)]
        date: Option<String>,

        /// Market parameter TOML file (risk_free_rate, volatility)
        #[arg(short, long)]
        config: Option<String>,
    },

    /// Show the expiry date for an instrument and delivery month
    Expiry {
        /// Underlying instrument (e.g. "Crude Oil", "CL", "Natural Gas")
        #[arg(short, long)]
        instrument: String,

        /// Delivery month (YYYY-MM)
        #[arg(short, long)]
        month: String,
    },
}

fn main() -> ExitCode {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let outcome = match cli.command {
        Commands::Price {
            instrument,
            month,
            kind,
            strike,
            quotes,
            date,
            config,
        } => commands::price::run(
            &instrument,
            &month,
            &kind,
            strike,
            &quotes,
            date.as_deref(),
            config.as_deref(),
        ),
        Commands::Expiry { instrument, month } => commands::expiry::run(&instrument, &month),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.user_message());
            ExitCode::FAILURE
        }
    }
}

mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use veritas::{Validator, ValidatorConfig};

#[derive(Parser, Debug)]
#[command(name = "veritas")]
#[command(version, about = "Veritas - validate Brazilian documents, contacts and numbers", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Parse the value as JSON instead of plain text
    #[arg(long, global = true)]
    json: bool,

    /// Configuration file (defaults to ./veritas.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a CPF (individual taxpayer number)
    Cpf {
        /// Value to check, punctuation allowed
        value: String,
    },

    /// Validate a CNPJ (company taxpayer number)
    Cnpj {
        /// Value to check, punctuation allowed
        value: String,
    },

    /// Validate an email address
    Email { value: String },

    /// Validate a Brazilian phone number
    Phone { value: String },

    /// Validate a URL, probing it when url.check_reachability is set
    Url { value: String },

    /// Check string length in characters
    String {
        value: String,

        /// Minimum length
        #[arg(long, default_value_t = 0)]
        min: usize,

        /// Maximum length
        #[arg(long)]
        max: Option<usize>,
    },

    /// Validate a number, optionally against one constraint
    Number {
        #[arg(allow_negative_numbers = true)]
        value: String,

        /// Must be greater than zero
        #[arg(long, group = "check")]
        positive: bool,

        /// Must be less than zero
        #[arg(long, group = "check")]
        negative: bool,

        /// Integer part must be even
        #[arg(long, group = "check")]
        even: bool,

        /// Must be a prime integer
        #[arg(long, group = "check")]
        prime: bool,

        /// Must be greater than this
        #[arg(long, group = "check", allow_negative_numbers = true)]
        gt: Option<f64>,

        /// Must be smaller than this
        #[arg(long, group = "check", allow_negative_numbers = true)]
        lt: Option<f64>,

        /// Must lie within MIN..=MAX
        #[arg(
            long,
            group = "check",
            num_args = 2,
            value_names = ["MIN", "MAX"],
            allow_negative_numbers = true
        )]
        between: Option<Vec<f64>>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => {
            anyhow::ensure!(path.exists(), "Config file not found: {:?}", path);
            ValidatorConfig::load(path)?
        }
        None => ValidatorConfig::load_default().context("Failed to load veritas.toml")?,
    };
    tracing::debug!(?config, "configuration loaded");

    let validator = Validator::with_config(config);

    // Execute command
    let valid = commands::execute(&validator, cli.command, cli.json)?;
    if !valid {
        std::process::exit(1);
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

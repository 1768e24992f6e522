//! Options Data CLI
//!
//! Prints the built-in sample contracts and checks them against validation rules.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use options_data::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Command {
    /// Human-readable table
    Table,
    /// JSON array in the UI record shape
    Json,
    /// Check every contract against the selected rules
    Validate,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Rules {
    Default,
    Strict,
    Lenient,
}

/// Inspect the sample option contracts
#[derive(Parser, Debug)]
#[command(name = "options_cli")]
#[command(version, about, long_about = None)]
struct Args {
    #[arg(value_enum, default_value_t = Command::Table)]
    command: Command,

    /// Validation preset
    #[arg(long, value_enum, default_value_t = Rules::Default)]
    rules: Rules,

    /// Validation config file (JSON), overrides --rules
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "options_data=debug,info" } else { "options_data=info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

fn load_config(args: &Args) -> Result<ValidationConfig, Box<dyn std::error::Error>> {
    if let Some(path) = &args.config {
        let text = std::fs::read_to_string(path)?;
        let config: ValidationConfig =
            serde_json::from_str(&text).map_err(OptionsError::from)?;
        config.check()?;
        return Ok(config);
    }

    Ok(match args.rules {
        Rules::Default => ValidationConfig::default(),
        Rules::Strict => ValidationConfig::strict(),
        Rules::Lenient => ValidationConfig::lenient(),
    })
}

fn print_table(contracts: &[OptionContract]) {
    println!(
        "{:>8}  {:<4}  {:>7}  {:>7}  {:>7}  {:<5}  {}",
        "Strike", "Type", "Bid", "Ask", "Mid", "Side", "Expiration"
    );
    for c in contracts {
        println!(
            "{:>8.2}  {:<4}  {:>7.2}  {:>7.2}  {:>7.3}  {:<5}  {}",
            c.strike_price,
            c.option_type,
            c.bid,
            c.ask,
            c.mid(),
            c.long_short,
            c.expiration_date.to_rfc3339()
        );
    }
}

fn run(args: &Args) -> Result<bool, Box<dyn std::error::Error>> {
    let contracts = sample_data();

    match args.command {
        Command::Table => print_table(contracts),
        Command::Json => {
            let json = serde_json::to_string_pretty(contracts).map_err(OptionsError::from)?;
            println!("{}", json);
        }
        Command::Validate => {
            let config = load_config(args)?;
            let failures = validate_all(contracts, &config);
            for (index, err) in &failures {
                println!("#{}: {}", index, err);
            }
            println!("{} of {} contracts valid", contracts.len() - failures.len(), contracts.len());
            return Ok(failures.is_empty());
        }
    }

    Ok(true)
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

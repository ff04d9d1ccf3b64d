//! Command-line adapter for the registration form engine.
//!
//! Reads form snapshots from JSON files and reports validation results,
//! cascade options, password strength and submission outcomes.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use regform::cli::{self, Environment};
use regform::exit_codes;
use regform::io::config::DEFAULT_CONFIG_PATH;
use regform::logging;

#[derive(Parser)]
#[command(
    name = "regform",
    version,
    about = "Registration form validation and derived-state engine"
)]
struct Cli {
    /// Config file (missing file means defaults).
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate a form snapshot and list failing fields.
    Validate { form: PathBuf },
    /// Print every derived value for a form snapshot as JSON.
    Derive { form: PathBuf },
    /// List selectable countries.
    Countries,
    /// List states of a country.
    States { country: String },
    /// List cities of a state.
    Cities { country: String, state: String },
    /// Classify a password.
    Strength { password: String },
    /// Submit a form snapshot through the submission gate.
    Submit { form: PathBuf },
}

fn main() {
    logging::init();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::ERROR);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    let env = || Environment::load(&cli.config);
    match &cli.command {
        Command::Validate { form } => cli::validate_form(&env()?, form),
        Command::Derive { form } => cli::derive_form(&env()?, form),
        Command::Countries => Ok(cli::list_countries(&env()?)),
        Command::States { country } => Ok(cli::list_states(&env()?, country)),
        Command::Cities { country, state } => Ok(cli::list_cities(&env()?, country, state)),
        Command::Strength { password } => Ok(cli::show_strength(password)),
        Command::Submit { form } => cli::submit_form(&env()?, form),
    }
}

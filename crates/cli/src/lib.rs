//! Command-line front end for the BMI calculator.

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;

pub use cli::{Cli, Commands};
pub use commands::CliError;
pub use config::Config;

/// Runs a parsed command with the loaded configuration.
///
/// # Errors
///
/// Returns a [`CliError`] if the command fails.
pub fn run(cli: &Cli, config: &Config) -> Result<String, CliError> {
    match &cli.command {
        Commands::Calc(args) => commands::calc(args, config),
        Commands::Categories => Ok(commands::categories()),
    }
}

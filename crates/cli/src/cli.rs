use std::{ffi::OsString, path::PathBuf};

use bmi_calculator::{HeightUnit, WeightUnit};
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum, error::ErrorKind};

#[derive(Debug, Parser)]
#[command(name = "bmi")]
#[command(about = "Body-mass-index calculator", long_about = None)]
pub struct Cli {
    /// Config file (default: <config dir>/bmi/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Parses process arguments, exiting with a usage error on conflicts.
    #[must_use]
    pub fn parse_checked() -> Self {
        let cli = Self::parse();
        if let Err(error) = cli.check_height_fields() {
            error.exit();
        }
        cli
    }

    /// Parses `args`, rejecting height fields the chosen height unit ignores.
    ///
    /// # Errors
    ///
    /// Returns a [`clap::Error`] for invalid or conflicting arguments.
    pub fn try_parse_checked_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let cli = Self::try_parse_from(args)?;
        cli.check_height_fields()?;
        Ok(cli)
    }

    fn check_height_fields(&self) -> Result<(), clap::Error> {
        let Commands::Calc(args) = &self.command else {
            return Ok(());
        };
        let conflict = match args.height_unit {
            Some(HeightUnit::Imperial) if args.height.is_some() => Some(("--height", "imperial")),
            Some(HeightUnit::Metric) if args.feet.is_some() => Some(("--feet", "metric")),
            Some(HeightUnit::Metric) if args.inches.is_some() => Some(("--inches", "metric")),
            _ => None,
        };
        match conflict {
            Some((flag, unit)) => Err(Self::command().error(
                ErrorKind::ArgumentConflict,
                format!("the argument '{flag}' cannot be used with '--height-unit {unit}'"),
            )),
            None => Ok(()),
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Calculate BMI from a weight and a height
    Calc(CalcArgs),

    /// List the BMI categories and their ranges
    Categories,
}

#[derive(Debug, Default, Args)]
pub struct CalcArgs {
    /// Weight, in the selected weight unit
    #[arg(short, long, allow_hyphen_values = true)]
    pub weight: Option<String>,

    /// Weight unit: kg or lb
    #[arg(long)]
    pub weight_unit: Option<WeightUnit>,

    /// Height in centimeters (metric)
    #[arg(long, allow_hyphen_values = true, conflicts_with_all = ["feet", "inches"])]
    pub height: Option<String>,

    /// Height feet (imperial)
    #[arg(long, allow_hyphen_values = true)]
    pub feet: Option<String>,

    /// Height inches (imperial)
    #[arg(long, allow_hyphen_values = true)]
    pub inches: Option<String>,

    /// Height unit: metric or imperial
    #[arg(long)]
    pub height_unit: Option<HeightUnit>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

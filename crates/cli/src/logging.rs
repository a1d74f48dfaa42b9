use tracing_subscriber::{EnvFilter, fmt};

use crate::Config;

const LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Raises `base` by one level per `verbosity` step, saturating at `trace`.
///
/// An unrecognized `base` is passed through unchanged so `EnvFilter`
/// directives like `bmi_calculator=debug` still work.
#[must_use]
pub fn effective_level(base: &str, verbosity: u8) -> String {
    match LEVELS.iter().position(|level| level.eq_ignore_ascii_case(base)) {
        Some(index) => {
            let raised = (index + usize::from(verbosity)).min(LEVELS.len() - 1);
            LEVELS[raised].to_string()
        }
        None => base.to_string(),
    }
}

fn level_filter(base: &str, verbosity: u8) -> EnvFilter {
    EnvFilter::new(effective_level(base, verbosity))
}

/// Installs the global subscriber, writing human-readable events to stderr,
/// then reports the loaded configuration.
///
/// `RUST_LOG` takes precedence over the configured level and `verbosity`.
pub fn init(config: &Config, verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| level_filter(&config.log_level, verbosity));

    let result = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();

    if let Err(error) = result {
        eprintln!("warning: logging disabled: {error}");
    }
    report_config(config);
}

fn report_config(config: &Config) {
    tracing::debug!(?config, "loaded configuration");
}

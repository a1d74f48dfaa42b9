use bmi_calculator::{Category, HeightUnit};
use bmi_form::{Alert, FormAction, FormState, StateChanged, Store};
use thiserror::Error;

use crate::{
    cli::{CalcArgs, OutputFormat},
    config::{Config, ConfigError},
};

/// Errors surfaced by the command-line front end.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{}: {}", .0.title, .0.message)]
    InvalidInput(Alert),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),
}

impl CliError {
    /// Process exit status for this error.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::InvalidInput(_) => 1,
            CliError::Config(_) | CliError::Encode(_) => 2,
        }
    }
}

/// Picks the height unit from explicit flags, then from which fields were
/// given, then from the config.
fn height_unit(args: &CalcArgs, config: &Config) -> HeightUnit {
    if let Some(unit) = args.height_unit {
        unit
    } else if args.feet.is_some() || args.inches.is_some() {
        HeightUnit::Imperial
    } else if args.height.is_some() {
        HeightUnit::Metric
    } else {
        config.height_unit
    }
}

/// Fills the form from flags, submits it and renders the result.
///
/// # Errors
///
/// Returns [`CliError::InvalidInput`] with the form's alert if a required
/// field is not a number.
pub fn calc(args: &CalcArgs, config: &Config) -> Result<String, CliError> {
    let mut store = Store::new(FormState::default());
    store.subscribe(|event: &StateChanged| -> Option<()> {
        if event.current.result != event.previous.result {
            tracing::info!(
                bmi = event.current.result.map(|result| result.value()),
                category = event.current.category_text(),
                "result updated"
            );
        }
        None
    });

    let text = |value: &Option<String>| value.clone().unwrap_or_default();
    let actions = [
        FormAction::SelectWeightUnit(args.weight_unit.unwrap_or(config.weight_unit)),
        FormAction::SelectHeightUnit(height_unit(args, config)),
        FormAction::SetWeight(text(&args.weight)),
        FormAction::SetHeight(text(&args.height)),
        FormAction::SetHeightFeet(text(&args.feet)),
        FormAction::SetHeightInches(text(&args.inches)),
        FormAction::Calculate,
    ];
    for action in actions {
        store.dispatch(action);
    }

    let state = store.state();
    if let Some(alert) = &state.alert {
        return Err(CliError::InvalidInput(alert.clone()));
    }
    render(state, args.format)
}

fn render(state: &FormState, format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Text => {
            let lines: Vec<String> = [state.bmi_line(), state.category_line()]
                .into_iter()
                .flatten()
                .collect();
            Ok(lines.join("\n"))
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&state.result)?),
    }
}

/// Renders the classification table.
#[must_use]
pub fn categories() -> String {
    Category::ALL
        .iter()
        .map(|category| {
            let range = match category.bounds() {
                (None, Some(upper)) => format!("bmi < {upper}"),
                (Some(lower), Some(upper)) => format!("{lower} <= bmi < {upper}"),
                (Some(lower), None) => format!("bmi >= {lower}"),
                (None, None) => "any".to_string(),
            };
            format!("{:<12}{range}", category.name())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

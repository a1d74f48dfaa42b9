use bmi_calculator::{HeightUnit, WeightUnit, calculate};

use crate::{Alert, FormState};

/// A user interaction with the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    SetWeight(String),
    SetHeight(String),
    SetHeightFeet(String),
    SetHeightInches(String),
    SelectWeightUnit(WeightUnit),
    SelectHeightUnit(HeightUnit),
    Calculate,
    DismissAlert,
}

/// Applies an action, returning the next state.
///
/// Unit switches keep every text field and the current result.
/// A failed calculation keeps the previous result and raises an alert.
///
/// # Example
///
/// ```
/// use bmi_form::{FormAction, FormState, update};
///
/// let state = FormState::default();
/// let state = update(&state, FormAction::SetWeight("70".into()));
/// let state = update(&state, FormAction::SetHeight("175".into()));
/// let state = update(&state, FormAction::Calculate);
///
/// assert_eq!(state.bmi_line().as_deref(), Some("Your BMI: 22.86"));
/// assert_eq!(state.category_line().as_deref(), Some("BMI Classification: Normal"));
/// ```
#[must_use]
pub fn update(state: &FormState, action: FormAction) -> FormState {
    let mut next = state.clone();
    match action {
        FormAction::SetWeight(text) => next.weight = text,
        FormAction::SetHeight(text) => next.height = text,
        FormAction::SetHeightFeet(text) => next.height_feet = text,
        FormAction::SetHeightInches(text) => next.height_inches = text,
        FormAction::SelectWeightUnit(unit) => next.weight_unit = unit,
        FormAction::SelectHeightUnit(unit) => next.height_unit = unit,
        FormAction::Calculate => {
            match calculate(&state.weight_input(), &state.height_input()) {
                Ok(result) => next.result = Some(result),
                Err(error) => next.alert = Some(Alert::invalid_input(&error)),
            }
        }
        FormAction::DismissAlert => next.alert = None,
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use bmi_calculator::Category;

    fn filled_metric() -> FormState {
        FormState {
            weight: "70".into(),
            height: "175".into(),
            ..FormState::default()
        }
    }

    #[test]
    fn calculate_stores_result() {
        let state = update(&filled_metric(), FormAction::Calculate);
        let result = state.result.unwrap();
        assert_relative_eq!(result.value(), 22.857, epsilon = 1e-3);
        assert_eq!(result.category(), Category::Normal);
        assert!(state.alert.is_none());
    }

    #[test]
    fn failed_calculation_keeps_previous_result() {
        let state = update(&filled_metric(), FormAction::Calculate);
        let previous = state.result;

        let state = update(&state, FormAction::SetWeight("abc".into()));
        let state = update(&state, FormAction::Calculate);

        assert_eq!(state.result, previous);
        let alert = state.alert.unwrap();
        assert_eq!(alert.title, "Invalid Input");
        assert_eq!(alert.message, "Please enter valid numbers.");
        assert_eq!(alert.dismiss_label, "OK");
    }

    #[test]
    fn dismiss_clears_alert_only() {
        let state = FormState {
            weight: "abc".into(),
            ..filled_metric()
        };
        let state = update(&state, FormAction::Calculate);
        assert!(state.alert.is_some());

        let dismissed = update(&state, FormAction::DismissAlert);
        assert!(dismissed.alert.is_none());
        assert_eq!(dismissed.weight, "abc");
    }

    #[test]
    fn unit_switch_keeps_text_and_result() {
        let state = update(&filled_metric(), FormAction::Calculate);
        let switched = update(&state, FormAction::SelectHeightUnit(HeightUnit::Imperial));
        let switched = update(&switched, FormAction::SelectWeightUnit(WeightUnit::Pounds));

        assert_eq!(switched.height, "175");
        assert_eq!(switched.weight, "70");
        assert_eq!(switched.result, state.result);
    }

    #[test]
    fn imperial_mode_ignores_centimeter_field() {
        let state = FormState {
            weight: "154".into(),
            height: "not used".into(),
            height_feet: "5".into(),
            height_inches: "9".into(),
            weight_unit: WeightUnit::Pounds,
            height_unit: HeightUnit::Imperial,
            ..FormState::default()
        };

        let state = update(&state, FormAction::Calculate);
        assert_eq!(state.bmi_line().as_deref(), Some("Your BMI: 22.74"));
        assert_eq!(state.category_text(), "Normal");
    }

    #[test]
    fn update_leaves_input_state_untouched() {
        let before = filled_metric();
        let _ = update(&before, FormAction::Calculate);
        assert_eq!(before, filled_metric());
    }
}

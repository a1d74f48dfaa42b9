use bmi_calculator::{BmiResult, HeightInput, HeightUnit, WeightInput, WeightUnit};

use crate::Alert;

/// Everything the form shows.
///
/// A new state is produced for every action; a state is never mutated in
/// place once handed to a renderer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub weight: String,
    pub height: String,
    pub height_feet: String,
    pub height_inches: String,
    pub weight_unit: WeightUnit,
    pub height_unit: HeightUnit,
    /// The most recent successful calculation.
    pub result: Option<BmiResult>,
    pub alert: Option<Alert>,
}

impl FormState {
    /// The weight field with its selected unit.
    #[must_use]
    pub fn weight_input(&self) -> WeightInput {
        WeightInput::new(self.weight.clone(), self.weight_unit)
    }

    /// The height fields required by the selected unit.
    #[must_use]
    pub fn height_input(&self) -> HeightInput {
        match self.height_unit {
            HeightUnit::Metric => HeightInput::metric(self.height.clone()),
            HeightUnit::Imperial => {
                HeightInput::imperial(self.height_feet.clone(), self.height_inches.clone())
            }
        }
    }

    #[must_use]
    pub fn weight_placeholder(&self) -> &'static str {
        match self.weight_unit {
            WeightUnit::Kilograms => "Weight (kgs)",
            WeightUnit::Pounds => "Weight (lbs)",
        }
    }

    /// Placeholders for the visible height fields, in display order.
    #[must_use]
    pub fn height_placeholders(&self) -> &'static [&'static str] {
        match self.height_unit {
            HeightUnit::Metric => &["Height (cm)"],
            HeightUnit::Imperial => &["Height (ft)", "Height (in)"],
        }
    }

    /// The BMI line, rounded to two decimals.
    #[must_use]
    pub fn bmi_line(&self) -> Option<String> {
        self.result.map(|result| format!("Your BMI: {:.2}", result.value()))
    }

    #[must_use]
    pub fn category_line(&self) -> Option<String> {
        self.result.map(|result| format!("BMI Classification: {}", result.category()))
    }

    /// The category name, or an empty string before the first result.
    #[must_use]
    pub fn category_text(&self) -> &'static str {
        self.result.map_or("", |result| result.category().name())
    }
}

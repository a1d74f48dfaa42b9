//! Raw form inputs and their validation.

use uom::si::f64::{Length, Mass};

use crate::{
    error::{Field, InvalidInputError},
    units::{self, HeightUnit, WeightUnit},
};

/// A weight as typed, with its selected unit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeightInput {
    pub text: String,
    pub unit: WeightUnit,
}

impl WeightInput {
    /// Creates a weight input from text and a unit.
    pub fn new(text: impl Into<String>, unit: WeightUnit) -> Self {
        Self {
            text: text.into(),
            unit,
        }
    }

    /// Parses and converts the weight to a mass.
    ///
    /// # Errors
    ///
    /// Returns an [`InvalidInputError`] if the text is not a finite decimal.
    pub fn to_mass(&self) -> Result<Mass, InvalidInputError> {
        let value = parse_field(Field::Weight, &self.text)?;
        Ok(self.unit.to_mass(value))
    }
}

/// A height as typed.
///
/// The variant determines which text fields are required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeightInput {
    Metric { centimeters: String },
    Imperial { feet: String, inches: String },
}

impl HeightInput {
    /// Creates a metric height input.
    pub fn metric(centimeters: impl Into<String>) -> Self {
        Self::Metric {
            centimeters: centimeters.into(),
        }
    }

    /// Creates an imperial height input.
    pub fn imperial(feet: impl Into<String>, inches: impl Into<String>) -> Self {
        Self::Imperial {
            feet: feet.into(),
            inches: inches.into(),
        }
    }

    /// The unit scheme of this input.
    #[must_use]
    pub fn unit(&self) -> HeightUnit {
        match self {
            Self::Metric { .. } => HeightUnit::Metric,
            Self::Imperial { .. } => HeightUnit::Imperial,
        }
    }

    /// Parses and converts the height to a length.
    ///
    /// For imperial input, feet are validated before inches.
    ///
    /// # Errors
    ///
    /// Returns an [`InvalidInputError`] naming the first field that is not a
    /// finite decimal.
    pub fn to_length(&self) -> Result<Length, InvalidInputError> {
        match self {
            Self::Metric { centimeters } => {
                let centimeters = parse_field(Field::HeightCentimeters, centimeters)?;
                Ok(units::metric_height(centimeters))
            }
            Self::Imperial { feet, inches } => {
                let feet = parse_field(Field::HeightFeet, feet)?;
                let inches = parse_field(Field::HeightInches, inches)?;
                Ok(units::imperial_height(feet, inches))
            }
        }
    }
}

impl Default for HeightInput {
    fn default() -> Self {
        Self::metric("")
    }
}

/// Parses a field as a finite decimal number.
///
/// Text is taken as written: surrounding whitespace is not trimmed,
/// and `inf` or `NaN` spellings are rejected.
fn parse_field(field: Field, text: &str) -> Result<f64, InvalidInputError> {
    text.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| InvalidInputError::new(field, text))
}

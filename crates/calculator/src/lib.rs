//! Body-mass-index calculation from form text.
//!
//! [`calculate`] validates the raw text of a weight and a height, converts
//! them to canonical quantities ([`Mass`](uom::si::f64::Mass) and
//! [`Length`](uom::si::f64::Length)), evaluates the [`BodyMassIndex`] model
//! and classifies the result into a [`Category`].
//!
//! Weight is entered in kilograms or pounds ([`WeightUnit`]).
//! Height is entered in centimeters or as feet plus inches ([`HeightInput`]).

mod category;
mod error;
mod input;
mod model;

pub mod units;

use bmi_core::Model;

pub use category::{Category, NORMAL_LOWER, OBESE_LOWER, OVERWEIGHT_LOWER};
pub use error::{Field, InvalidInputError};
pub use input::{HeightInput, WeightInput};
pub use model::{BmiResult, BodyMassIndex, Measurements};
pub use units::{HeightUnit, WeightUnit};

/// Validates form text and computes the body-mass index.
///
/// Fields are validated in order (weight, then height) and the first failure
/// is returned without computing anything.
///
/// # Example
///
/// ```
/// use bmi_calculator::{calculate, Category, HeightInput, WeightInput, WeightUnit};
///
/// let weight = WeightInput::new("154", WeightUnit::Pounds);
/// let height = HeightInput::imperial("5", "9");
///
/// let result = calculate(&weight, &height).unwrap();
/// assert_eq!(format!("{:.2}", result.value()), "22.74");
/// assert_eq!(result.category(), Category::Normal);
/// ```
///
/// # Errors
///
/// Returns an [`InvalidInputError`] if a required field is not a finite decimal.
pub fn calculate(
    weight: &WeightInput,
    height: &HeightInput,
) -> Result<BmiResult, InvalidInputError> {
    let measurements = parse(weight, height).inspect_err(|error| {
        tracing::debug!(field = %error.field(), text = error.text(), "rejected form input");
    })?;

    let Ok(result) = BodyMassIndex.call(&measurements);
    Ok(result)
}

/// Validates form text and converts it to canonical quantities.
///
/// # Errors
///
/// Returns an [`InvalidInputError`] if a required field is not a finite decimal.
pub fn parse(
    weight: &WeightInput,
    height: &HeightInput,
) -> Result<Measurements, InvalidInputError> {
    Ok(Measurements {
        weight: weight.to_mass()?,
        height: height.to_length()?,
    })
}

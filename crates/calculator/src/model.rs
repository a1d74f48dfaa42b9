use std::convert::Infallible;

use bmi_core::Model;
use serde::{Serialize, Serializer};
use uom::si::{
    areal_mass_density::kilogram_per_square_meter,
    f64::{Area, ArealMassDensity, Length, Mass},
    length::meter,
    mass::kilogram,
};

use crate::category::Category;

/// Weight and height in canonical quantities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurements {
    pub weight: Mass,
    pub height: Length,
}

/// A computed body-mass index and its category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BmiResult {
    #[serde(serialize_with = "serialize_bmi")]
    bmi: ArealMassDensity,
    category: Category,
}

impl BmiResult {
    /// Builds a result from a BMI quantity, classifying it.
    #[must_use]
    pub fn new(bmi: ArealMassDensity) -> Self {
        let category = Category::from_bmi(bmi.get::<kilogram_per_square_meter>());
        Self { bmi, category }
    }

    /// The BMI in kg/m².
    #[must_use]
    pub fn value(&self) -> f64 {
        self.bmi.get::<kilogram_per_square_meter>()
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    /// Returns `true` unless the height was zero or the inputs overflowed.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.value().is_finite()
    }
}

/// Body-mass index: weight divided by the square of height.
///
/// Non-positive heights are not rejected. A zero height yields an infinite
/// or NaN index, which is classified as [`Category::Obese`].
///
/// # Example
///
/// ```
/// use bmi_calculator::{BodyMassIndex, Category, Measurements};
/// use bmi_core::Model;
/// use uom::si::{
///     f64::{Length, Mass},
///     length::centimeter,
///     mass::kilogram,
/// };
///
/// let input = Measurements {
///     weight: Mass::new::<kilogram>(70.0),
///     height: Length::new::<centimeter>(175.0),
/// };
/// let result = BodyMassIndex.call(&input).unwrap();
/// assert_eq!(result.category(), Category::Normal);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BodyMassIndex;

impl Model for BodyMassIndex {
    type Input = Measurements;
    type Output = BmiResult;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let Measurements { weight, height } = *input;
        let area: Area = height * height;
        let bmi: ArealMassDensity = weight / area;

        let result = BmiResult::new(bmi);
        if result.is_finite() {
            tracing::debug!(
                weight_kg = weight.get::<kilogram>(),
                height_m = height.get::<meter>(),
                bmi = result.value(),
                category = %result.category(),
                "computed body-mass index"
            );
        } else {
            tracing::warn!(
                weight_kg = weight.get::<kilogram>(),
                height_m = height.get::<meter>(),
                "body-mass index is not finite"
            );
        }
        Ok(result)
    }
}

/// Writes the BMI in kg/m².
///
/// Non-finite values are written as the strings `"inf"`, `"-inf"` or `"NaN"`,
/// since formats like JSON have no number for them.
#[allow(clippy::trivially_copy_pass_by_ref)]
fn serialize_bmi<S>(bmi: &ArealMassDensity, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let value = bmi.get::<kilogram_per_square_meter>();
    if value.is_finite() {
        serializer.serialize_f64(value)
    } else {
        serializer.serialize_str(&value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::length::centimeter;

    fn measure(kg: f64, m: f64) -> Measurements {
        Measurements {
            weight: Mass::new::<kilogram>(kg),
            height: Length::new::<meter>(m),
        }
    }

    #[test]
    fn divides_weight_by_height_squared() {
        let input = Measurements {
            weight: Mass::new::<kilogram>(70.0),
            height: Length::new::<centimeter>(175.0),
        };
        let result = BodyMassIndex.call(&input).unwrap();
        assert_relative_eq!(result.value(), 22.857_142_857, epsilon = 1e-6);
        assert_eq!(result.category(), Category::Normal);
    }

    #[test]
    fn zero_height_is_infinite_and_obese() {
        let result = BodyMassIndex.call(&measure(70.0, 0.0)).unwrap();
        assert!(!result.is_finite());
        assert_eq!(result.category(), Category::Obese);
    }

    #[test]
    fn zero_weight_and_height_is_nan_and_obese() {
        let result = BodyMassIndex.call(&measure(0.0, 0.0)).unwrap();
        assert!(result.value().is_nan());
        assert_eq!(result.category(), Category::Obese);
    }

    #[test]
    fn negative_height_is_squared_away() {
        let positive = BodyMassIndex.call(&measure(70.0, 1.75)).unwrap();
        let negative = BodyMassIndex.call(&measure(70.0, -1.75)).unwrap();
        assert_relative_eq!(positive.value(), negative.value());
    }

    #[test]
    fn serializes_value_and_category() {
        let result = BodyMassIndex.call(&measure(80.0, 2.0)).unwrap();
        let json = serde_json::to_value(result).unwrap();
        assert_eq!(json, serde_json::json!({ "bmi": 20.0, "category": "Normal" }));
    }

    #[test]
    fn serializes_non_finite_value_as_string() {
        let infinite = BodyMassIndex.call(&measure(70.0, 0.0)).unwrap();
        let json = serde_json::to_value(infinite).unwrap();
        assert_eq!(json, serde_json::json!({ "bmi": "inf", "category": "Obese" }));

        let nan = BodyMassIndex.call(&measure(0.0, 0.0)).unwrap();
        let json = serde_json::to_value(nan).unwrap();
        assert_eq!(json["bmi"], "NaN");
    }
}

use approx::assert_relative_eq;
use bmi_calculator::{
    Category, Field, HeightInput, WeightInput, WeightUnit, calculate, parse,
};
use uom::si::{length::meter, mass::kilogram};

#[test]
fn metric_scenario() {
    let weight = WeightInput::new("70", WeightUnit::Kilograms);
    let height = HeightInput::metric("175");

    let result = calculate(&weight, &height).unwrap();
    assert_relative_eq!(result.value(), 22.857, epsilon = 1e-3);
    assert_eq!(result.category(), Category::Normal);
}

#[test]
fn imperial_scenario() {
    let weight = WeightInput::new("154", WeightUnit::Pounds);
    let height = HeightInput::imperial("5", "9");

    let measurements = parse(&weight, &height).unwrap();
    assert_relative_eq!(measurements.weight.get::<kilogram>(), 69.85, epsilon = 1e-2);
    assert_relative_eq!(measurements.height.get::<meter>(), 1.7526, epsilon = 1e-9);

    let result = calculate(&weight, &height).unwrap();
    assert_relative_eq!(result.value(), 22.74, epsilon = 1e-2);
    assert_eq!(result.category(), Category::Normal);
}

#[test]
fn non_numeric_weight_is_rejected() {
    let weight = WeightInput::new("abc", WeightUnit::Kilograms);
    let height = HeightInput::metric("175");

    let error = calculate(&weight, &height).unwrap_err();
    assert_eq!(error.field(), Field::Weight);
    assert_eq!(error.to_string(), "Please enter valid numbers.");
}

#[test]
fn missing_inches_are_rejected() {
    let weight = WeightInput::new("70", WeightUnit::Kilograms);
    let height = HeightInput::imperial("5", "");

    let error = calculate(&weight, &height).unwrap_err();
    assert_eq!(error.field(), Field::HeightInches);
}

#[test]
fn weight_is_checked_before_height() {
    let weight = WeightInput::new("", WeightUnit::Pounds);
    let height = HeightInput::metric("");

    let error = calculate(&weight, &height).unwrap_err();
    assert_eq!(error.field(), Field::Weight);
}

#[test]
fn result_iff_every_required_field_parses() {
    let texts = ["72.5", "", "x", "1e3", "NaN"];
    for weight_text in texts {
        for height_text in texts {
            let weight = WeightInput::new(weight_text, WeightUnit::Kilograms);
            let valid = |t: &str| t.parse::<f64>().is_ok_and(f64::is_finite);

            let metric = calculate(&weight, &HeightInput::metric(height_text));
            assert_eq!(metric.is_ok(), valid(weight_text) && valid(height_text));

            let imperial = calculate(&weight, &HeightInput::imperial("5", height_text));
            assert_eq!(imperial.is_ok(), valid(weight_text) && valid(height_text));
        }
    }
}

#[test]
fn zero_height_is_not_rejected() {
    let weight = WeightInput::new("70", WeightUnit::Kilograms);
    let height = HeightInput::metric("0");

    let result = calculate(&weight, &height).unwrap();
    assert!(!result.is_finite());
    assert_eq!(result.category(), Category::Obese);
}

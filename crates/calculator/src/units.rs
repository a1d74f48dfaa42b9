//! Unit selections and conversions to canonical quantities.
//!
//! Weight is converted to a [`Mass`] and height to a [`Length`].
//! The conversion factors are fixed at the values the calculator has always
//! used, which differ slightly from the exact international pound.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uom::si::{
    f64::{Length, Mass},
    length::meter,
    mass::kilogram,
};

/// Kilograms per pound.
pub const KILOGRAMS_PER_POUND: f64 = 0.453_592;

/// Meters per foot.
pub const METERS_PER_FOOT: f64 = 0.3048;

/// Meters per inch.
pub const METERS_PER_INCH: f64 = 0.0254;

/// Centimeters per meter.
pub const CENTIMETERS_PER_METER: f64 = 100.0;

/// The unit a weight is entered in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    #[serde(alias = "pound", alias = "lb", alias = "lbs")]
    Pounds,
    #[default]
    #[serde(alias = "kilogram", alias = "kg", alias = "kgs")]
    Kilograms,
}

impl WeightUnit {
    /// Converts a value entered in this unit to a mass.
    #[must_use]
    pub fn to_mass(self, value: f64) -> Mass {
        let kilograms = match self {
            WeightUnit::Kilograms => value,
            WeightUnit::Pounds => value * KILOGRAMS_PER_POUND,
        };
        Mass::new::<kilogram>(kilograms)
    }

    /// Expresses a mass as a value in this unit.
    ///
    /// This is the inverse of [`WeightUnit::to_mass`].
    #[must_use]
    pub fn from_mass(self, mass: Mass) -> f64 {
        let kilograms = mass.get::<kilogram>();
        match self {
            WeightUnit::Kilograms => kilograms,
            WeightUnit::Pounds => kilograms / KILOGRAMS_PER_POUND,
        }
    }

    /// Short label shown on unit toggles.
    #[must_use]
    pub fn abbreviation(self) -> &'static str {
        match self {
            WeightUnit::Pounds => "lbs",
            WeightUnit::Kilograms => "kgs",
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

impl FromStr for WeightUnit {
    type Err = ParseUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lb" | "lbs" | "pound" | "pounds" => Ok(WeightUnit::Pounds),
            "kg" | "kgs" | "kilogram" | "kilograms" => Ok(WeightUnit::Kilograms),
            _ => Err(ParseUnitError::Weight(s.to_string())),
        }
    }
}

/// The unit scheme a height is entered in.
///
/// Metric heights are a single centimeter value.
/// Imperial heights are a pair of feet and inches values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeightUnit {
    #[default]
    #[serde(alias = "cm")]
    Metric,
    #[serde(alias = "ft")]
    Imperial,
}

impl HeightUnit {
    /// Short label shown on unit toggles.
    #[must_use]
    pub fn abbreviation(self) -> &'static str {
        match self {
            HeightUnit::Metric => "cm",
            HeightUnit::Imperial => "ft",
        }
    }
}

impl fmt::Display for HeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

impl FromStr for HeightUnit {
    type Err = ParseUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cm" | "metric" => Ok(HeightUnit::Metric),
            "ft" | "imperial" => Ok(HeightUnit::Imperial),
            _ => Err(ParseUnitError::Height(s.to_string())),
        }
    }
}

/// Errors returned when a unit name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseUnitError {
    #[error("unknown weight unit `{0}` (expected kg or lb)")]
    Weight(String),
    #[error("unknown height unit `{0}` (expected metric or imperial)")]
    Height(String),
}

/// Converts a centimeter value to a length.
#[must_use]
pub fn metric_height(centimeters: f64) -> Length {
    Length::new::<meter>(centimeters / CENTIMETERS_PER_METER)
}

/// Converts a feet and inches pair to a length.
///
/// The two parts are summed, so `inches` may exceed a foot.
#[must_use]
pub fn imperial_height(feet: f64, inches: f64) -> Length {
    Length::new::<meter>(feet * METERS_PER_FOOT + inches * METERS_PER_INCH)
}

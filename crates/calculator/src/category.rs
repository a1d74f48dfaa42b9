use std::fmt;

use serde::Serialize;

/// Lower bound of the [`Category::Normal`] band.
pub const NORMAL_LOWER: f64 = 18.5;

/// Lower bound of the [`Category::Overweight`] band.
pub const OVERWEIGHT_LOWER: f64 = 24.9;

/// Lower bound of the [`Category::Obese`] band.
pub const OBESE_LOWER: f64 = 29.9;

/// A qualitative BMI band.
///
/// Bands are half-open and checked in order:
///
/// | BMI (kg/m²)          | Category      |
/// |----------------------|---------------|
/// | `bmi < 18.5`         | `Underweight` |
/// | `18.5 <= bmi < 24.9` | `Normal`      |
/// | `24.9 <= bmi < 29.9` | `Overweight`  |
/// | otherwise            | `Obese`       |
///
/// A NaN value fails every comparison and lands in `Obese`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl Category {
    /// All categories, lowest band first.
    pub const ALL: [Category; 4] = [
        Category::Underweight,
        Category::Normal,
        Category::Overweight,
        Category::Obese,
    ];

    /// Classifies a BMI value in kg/m².
    #[must_use]
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < NORMAL_LOWER {
            Category::Underweight
        } else if bmi < OVERWEIGHT_LOWER {
            Category::Normal
        } else if bmi < OBESE_LOWER {
            Category::Overweight
        } else {
            Category::Obese
        }
    }

    /// The band's `[lower, upper)` bounds in kg/m².
    ///
    /// `None` marks an unbounded side.
    #[must_use]
    pub fn bounds(self) -> (Option<f64>, Option<f64>) {
        match self {
            Category::Underweight => (None, Some(NORMAL_LOWER)),
            Category::Normal => (Some(NORMAL_LOWER), Some(OVERWEIGHT_LOWER)),
            Category::Overweight => (Some(OVERWEIGHT_LOWER), Some(OBESE_LOWER)),
            Category::Obese => (Some(OBESE_LOWER), None),
        }
    }

    /// Display name of the category.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Category::Underweight => "Underweight",
            Category::Normal => "Normal",
            Category::Overweight => "Overweight",
            Category::Obese => "Obese",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

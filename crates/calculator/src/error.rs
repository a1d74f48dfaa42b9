use std::fmt;

use thiserror::Error;

/// A text field on the calculator form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Weight,
    HeightCentimeters,
    HeightFeet,
    HeightInches,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Weight => "weight",
            Field::HeightCentimeters => "height (cm)",
            Field::HeightFeet => "height (ft)",
            Field::HeightInches => "height (in)",
        })
    }
}

/// A required field could not be parsed as a finite decimal number.
///
/// The message is the same for every field; [`InvalidInputError::field`]
/// identifies which one failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Please enter valid numbers.")]
pub struct InvalidInputError {
    field: Field,
    text: String,
}

impl InvalidInputError {
    pub(crate) fn new(field: Field, text: &str) -> Self {
        Self {
            field,
            text: text.to_string(),
        }
    }

    /// The first field that failed to parse.
    #[must_use]
    pub fn field(&self) -> Field {
        self.field
    }

    /// The rejected text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

use bmi_calculator::InvalidInputError;

/// A blocking, dismissible notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: &'static str,
    pub message: String,
    pub dismiss_label: &'static str,
}

impl Alert {
    /// The alert raised when a required field is not a number.
    #[must_use]
    pub fn invalid_input(error: &InvalidInputError) -> Self {
        Self {
            title: "Invalid Input",
            message: error.to_string(),
            dismiss_label: "OK",
        }
    }
}

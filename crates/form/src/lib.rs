//! View state for the BMI calculator form.
//!
//! A front end renders a [`FormState`], turns user interaction into
//! [`FormAction`]s, and applies them with [`update`] or through a [`Store`]
//! that notifies observers of each change.

mod action;
mod alert;
mod state;
mod store;

pub use action::{FormAction, update};
pub use alert::Alert;
pub use state::FormState;
pub use store::{StateChanged, Store};

//! Core traits shared by the BMI calculator crates.
//!
//! - [`Model`]: a deterministic callable that maps a typed input to a typed output
//! - [`Observer`]: receives events and optionally returns a control action

mod model;
mod observer;

pub use model::Model;
pub use observer::Observer;

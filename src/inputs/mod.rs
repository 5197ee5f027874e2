//! Projection inputs: the input record, frequency enums, validation, and batch loading

mod data;
mod validation;
pub mod loader;

pub use data::{CompoundingFrequency, ContributionFrequency, ProjectionInput};
pub use validation::{validate, InputError};

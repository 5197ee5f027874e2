//! Display-derived analysis: checkpoint comparison tables and
//! month-over-month difference series
//!
//! Derived purely from a projection result for presentation; nothing here
//! feeds back into the engine.

mod checkpoints;
mod series;

pub use checkpoints::{best_at, checkpoint_months, comparison_table, ComparisonRow};
pub use series::{difference_series, DifferencePoint};

//! Savings Projector - CD vs HYSA projection engine
//!
//! This library provides:
//! - Month-by-month balance projections for a fixed-term CD, a HYSA with
//!   recurring contributions, and the combined strategy summing both
//! - A verdict rule deciding which strategy wins, with a tie tolerance
//! - Checkpoint comparison tables and difference series for display layers
//! - Input validation and CSV-based batch scenario loading

pub mod analysis;
pub mod format;
pub mod inputs;
pub mod projection;
pub mod session;

// Re-export commonly used types
pub use inputs::{validate, CompoundingFrequency, ContributionFrequency, InputError, ProjectionInput};
pub use projection::{project, project_batch, BalancePoint, ProjectionResult, StrategyChoice};
pub use session::CalculatorSession;

//! Projection engine for CD, HYSA, and combined balance projections

mod balances;
mod engine;

pub use balances::{BalancePoint, ProjectionResult, StrategyChoice};
pub use engine::{decide_winner, project, project_batch, TIE_TOLERANCE};

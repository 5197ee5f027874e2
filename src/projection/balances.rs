//! Output structures for savings projections

use serde::{Deserialize, Serialize};

/// One month-indexed balance observation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BalancePoint {
    /// Projection month (1-indexed)
    pub month: u32,

    /// End-of-month balance
    pub balance: f64,
}

/// Which strategy came out ahead
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrategyChoice {
    #[serde(rename = "CD")]
    Cd,
    #[serde(rename = "HYSA")]
    Hysa,
    Combined,
    Equal,
}

impl StrategyChoice {
    /// Get the display label matching the original calculator
    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyChoice::Cd => "CD",
            StrategyChoice::Hysa => "HYSA",
            StrategyChoice::Combined => "Combined",
            StrategyChoice::Equal => "Equal",
        }
    }
}

/// Complete projection result
///
/// Produced fresh on each invocation of the engine; never mutated in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionResult {
    // Final balances
    pub cd_final_balance: f64,
    pub hysa_final_balance: f64,
    pub combined_final_balance: f64,

    // Interest earned (growth net of principal and contributions)
    pub cd_interest_earned: f64,
    pub hysa_interest_earned: f64,
    pub combined_interest_earned: f64,

    // Month-indexed balance histories, months 1..=term
    pub cd_monthly_balances: Vec<BalancePoint>,
    pub hysa_monthly_balances: Vec<BalancePoint>,
    pub combined_monthly_balances: Vec<BalancePoint>,

    /// Initial deposits plus all recurring contributions
    pub total_contributions: f64,

    /// Verdict of the three-way comparison
    pub better_option: StrategyChoice,

    /// Winner's margin over the runner-up; 0 when Equal
    pub difference: f64,
}

impl ProjectionResult {
    /// Projection term in months
    pub fn term_months(&self) -> u32 {
        self.cd_monthly_balances.len() as u32
    }

    /// Balances for a given month as (cd, hysa, combined), if in range
    pub fn balances_at(&self, month: u32) -> Option<(f64, f64, f64)> {
        let idx = month.checked_sub(1)? as usize;
        let cd = self.cd_monthly_balances.get(idx)?;
        let hysa = self.hysa_monthly_balances.get(idx)?;
        let combined = self.combined_monthly_balances.get(idx)?;
        Some((cd.balance, hysa.balance, combined.balance))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_labels() {
        assert_eq!(StrategyChoice::Cd.as_str(), "CD");
        assert_eq!(StrategyChoice::Hysa.as_str(), "HYSA");
        assert_eq!(StrategyChoice::Combined.as_str(), "Combined");
        assert_eq!(StrategyChoice::Equal.as_str(), "Equal");
    }

    #[test]
    fn test_strategy_serde_names() {
        assert_eq!(
            serde_json::to_string(&StrategyChoice::Hysa).unwrap(),
            "\"HYSA\""
        );
        let choice: StrategyChoice = serde_json::from_str("\"CD\"").unwrap();
        assert_eq!(choice, StrategyChoice::Cd);
    }

    #[test]
    fn test_balances_at_bounds() {
        let result = crate::projection::project(&crate::inputs::ProjectionInput::default());

        assert!(result.balances_at(0).is_none());
        assert!(result.balances_at(1).is_some());
        assert!(result.balances_at(12).is_some());
        assert!(result.balances_at(13).is_none());
    }
}

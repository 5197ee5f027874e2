//! Month-over-month difference series for charting

use serde::{Deserialize, Serialize};

use crate::projection::ProjectionResult;

/// Differences between strategies for one month
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifferencePoint {
    pub month: u32,

    /// CD balance minus HYSA balance
    pub cd_vs_hysa: f64,

    /// Combined balance minus the best individual leg
    pub combined_vs_best: f64,
}

/// Derive the per-month difference series from a projection result
pub fn difference_series(result: &ProjectionResult) -> Vec<DifferencePoint> {
    result
        .cd_monthly_balances
        .iter()
        .zip(&result.hysa_monthly_balances)
        .zip(&result.combined_monthly_balances)
        .map(|((cd, hysa), combined)| DifferencePoint {
            month: cd.month,
            cd_vs_hysa: cd.balance - hysa.balance,
            combined_vs_best: combined.balance - cd.balance.max(hysa.balance),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::ProjectionInput;
    use crate::projection::project;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_difference_series_values() {
        let result = project(&ProjectionInput::default());
        let series = difference_series(&result);

        assert_eq!(series.len(), result.cd_monthly_balances.len());

        for (i, point) in series.iter().enumerate() {
            let cd = result.cd_monthly_balances[i].balance;
            let hysa = result.hysa_monthly_balances[i].balance;
            let combined = result.combined_monthly_balances[i].balance;

            assert_eq!(point.month, i as u32 + 1);
            assert_abs_diff_eq!(point.cd_vs_hysa, cd - hysa, epsilon = 1e-12);
            assert_abs_diff_eq!(
                point.combined_vs_best,
                combined - cd.max(hysa),
                epsilon = 1e-12
            );
            // Combined minus best leg equals the smaller leg, never negative
            assert!(point.combined_vs_best >= 0.0);
        }
    }
}

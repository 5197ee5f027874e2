//! Checkpoint comparison table
//!
//! Samples the balance histories at fractions of the term and labels each
//! checkpoint with the best option at that month. Unlike the final verdict,
//! the per-checkpoint comparison uses strict inequality with no tolerance
//! band; exact ties default to Equal.

use serde::{Deserialize, Serialize};

use crate::projection::{ProjectionResult, StrategyChoice};

/// One sampled row of the comparison table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub month: u32,
    pub cd_balance: f64,
    pub hysa_balance: f64,
    pub combined_balance: f64,
    pub best_option: StrategyChoice,
}

/// Checkpoint months for a given term: roughly 1/6, 1/3, 1/2, 2/3 of the
/// term plus the final month, deduplicated for short terms
pub fn checkpoint_months(term_months: u32) -> Vec<u32> {
    let mut months = vec![
        term_months.div_ceil(6),
        term_months.div_ceil(3),
        term_months.div_ceil(2),
        (2 * term_months).div_ceil(3),
        term_months,
    ];
    months.sort_unstable();
    months.dedup();
    months
}

/// Best option at a single checkpoint, strict comparison without tolerance
pub fn best_at(cd: f64, hysa: f64, combined: f64) -> StrategyChoice {
    if cd > hysa && cd > combined {
        StrategyChoice::Cd
    } else if hysa > cd && hysa > combined {
        StrategyChoice::Hysa
    } else if combined > cd && combined > hysa {
        StrategyChoice::Combined
    } else {
        StrategyChoice::Equal
    }
}

/// Build the comparison table for a projection result
pub fn comparison_table(result: &ProjectionResult) -> Vec<ComparisonRow> {
    checkpoint_months(result.term_months())
        .into_iter()
        .filter_map(|month| {
            let (cd_balance, hysa_balance, combined_balance) = result.balances_at(month)?;
            Some(ComparisonRow {
                month,
                cd_balance,
                hysa_balance,
                combined_balance,
                best_option: best_at(cd_balance, hysa_balance, combined_balance),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::ProjectionInput;
    use crate::projection::project;

    #[test]
    fn test_checkpoint_months_twelve() {
        assert_eq!(checkpoint_months(12), vec![2, 4, 6, 8, 12]);
    }

    #[test]
    fn test_checkpoint_months_short_terms_dedup() {
        assert_eq!(checkpoint_months(1), vec![1]);
        assert_eq!(checkpoint_months(2), vec![1, 2]);
        assert_eq!(checkpoint_months(7), vec![2, 3, 4, 5, 7]);
    }

    #[test]
    fn test_best_at_is_strict() {
        // Exact ties are Equal; no tolerance band here
        assert_eq!(best_at(100.0, 100.0, 100.0), StrategyChoice::Equal);
        assert_eq!(best_at(100.0, 50.0, 100.0), StrategyChoice::Equal);

        // Any strict margin wins, however small
        assert_eq!(best_at(100.0, 50.0, 100.001), StrategyChoice::Combined);
        assert_eq!(best_at(100.001, 50.0, 100.0), StrategyChoice::Cd);
        assert_eq!(best_at(50.0, 100.001, 100.0), StrategyChoice::Hysa);
    }

    #[test]
    fn test_comparison_table_rows() {
        let result = project(&ProjectionInput::default());
        let table = comparison_table(&result);

        assert_eq!(table.len(), 5);
        assert_eq!(table.last().unwrap().month, 12);

        for row in &table {
            // With both legs funded the combined balance strictly dominates
            assert_eq!(row.best_option, StrategyChoice::Combined);
            assert!(row.combined_balance > row.cd_balance);
        }
    }

    #[test]
    fn test_comparison_table_equal_on_empty_leg() {
        let input = ProjectionInput {
            initial_deposit_hysa: 0.0,
            regular_contribution: 0.0,
            ..Default::default()
        };
        let table = comparison_table(&project(&input));

        // combined == cd at every checkpoint, so strict comparison ties out
        for row in &table {
            assert_eq!(row.best_option, StrategyChoice::Equal);
        }
    }
}

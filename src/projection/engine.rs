//! Core projection engine for monthly CD/HYSA balance simulations

use rayon::prelude::*;

use crate::inputs::ProjectionInput;

use super::balances::{BalancePoint, ProjectionResult, StrategyChoice};

/// Tie tolerance for the final verdict, in currency units
///
/// Absorbs floating-point noise between strategies that are economically
/// identical.
pub const TIE_TOLERANCE: f64 = 0.01;

/// Run the projection for a validated input record
///
/// Pure and deterministic: no I/O, no state between calls. Assumes the
/// caller has already run `inputs::validate`; a zero term is a contract
/// violation, not a recoverable condition.
pub fn project(input: &ProjectionInput) -> ProjectionResult {
    debug_assert!(input.term_months >= 1, "term_months must be validated before projecting");

    let cd_rate = input.cd_rate / 100.0;
    let hysa_rate = input.hysa_rate / 100.0;
    let cd_periods = input.cd_compounding.periods_per_year();
    let hysa_periods = input.hysa_compounding.periods_per_year();

    // Contributions are a smooth monthly-equivalent amount, fractional for
    // weekly/biweekly/quarterly cadences.
    let contribution_per_month =
        input.regular_contribution * input.contribution_frequency.per_month();

    let term = input.term_months as usize;
    let mut cd_monthly_balances = Vec::with_capacity(term);
    let mut hysa_monthly_balances = Vec::with_capacity(term);
    let mut combined_monthly_balances = Vec::with_capacity(term);

    let mut cd_balance = input.initial_deposit_cd;
    let mut hysa_balance = input.initial_deposit_hysa;

    // Total contributions start with both initial deposits
    let mut total_contributions = input.initial_deposit_cd + input.initial_deposit_hysa;

    for month in 1..=input.term_months {
        cd_balance = apply_monthly_interest(cd_balance, cd_rate, cd_periods, month);
        hysa_balance = apply_monthly_interest(hysa_balance, hysa_rate, hysa_periods, month);

        // Interest-then-contribution ordering: this month's contribution
        // earns no interest this month.
        total_contributions += contribution_per_month;
        hysa_balance += contribution_per_month;

        cd_monthly_balances.push(BalancePoint {
            month,
            balance: cd_balance,
        });
        hysa_monthly_balances.push(BalancePoint {
            month,
            balance: hysa_balance,
        });
        combined_monthly_balances.push(BalancePoint {
            month,
            balance: cd_balance + hysa_balance,
        });
    }

    let cd_final_balance = cd_balance;
    let hysa_final_balance = hysa_balance;
    let combined_final_balance = cd_final_balance + hysa_final_balance;

    // Interest isolates pure growth: HYSA growth net of principal and of all
    // recurring contributions.
    let cd_interest_earned = cd_final_balance - input.initial_deposit_cd;
    let hysa_interest_earned = hysa_final_balance
        - input.initial_deposit_hysa
        - contribution_per_month * input.term_months as f64;
    let combined_interest_earned = cd_interest_earned + hysa_interest_earned;

    let (better_option, difference) =
        decide_winner(cd_final_balance, hysa_final_balance, combined_final_balance);

    ProjectionResult {
        cd_final_balance,
        hysa_final_balance,
        combined_final_balance,
        cd_interest_earned,
        hysa_interest_earned,
        combined_interest_earned,
        cd_monthly_balances,
        hysa_monthly_balances,
        combined_monthly_balances,
        total_contributions,
        better_option,
        difference,
    }
}

/// Run projections for a batch of scenarios in parallel
pub fn project_batch(inputs: &[ProjectionInput]) -> Vec<ProjectionResult> {
    log::debug!("projecting {} scenarios", inputs.len());
    inputs.par_iter().map(project).collect()
}

/// Apply one month of interest to a balance
///
/// Sub-monthly compounding (e.g. daily) is approximated by raising the
/// per-period factor to a fractional power each month rather than simulating
/// each sub-period discretely. Monthly or less frequent compounding applies
/// one discrete step only in compounding months.
fn apply_monthly_interest(balance: f64, annual_rate: f64, periods_per_year: f64, month: u32) -> f64 {
    let compounds_per_month = periods_per_year / 12.0;

    if compounds_per_month > 1.0 {
        balance * (1.0 + annual_rate / periods_per_year).powf(compounds_per_month)
    } else {
        // periods_per_year is 12, 4, 2, or 1 here, so this divides evenly
        let months_per_compound = (12.0 / periods_per_year) as u32;
        if month % months_per_compound == 0 {
            balance * (1.0 + annual_rate / periods_per_year)
        } else {
            balance
        }
    }
}

/// Decide the winning strategy from the three final balances
///
/// A strategy wins only if it beats both others by more than the tie
/// tolerance; anything else is Equal with zero difference.
pub fn decide_winner(cd: f64, hysa: f64, combined: f64) -> (StrategyChoice, f64) {
    if cd > hysa + TIE_TOLERANCE && cd > combined + TIE_TOLERANCE {
        (StrategyChoice::Cd, cd - hysa.max(combined))
    } else if hysa > cd + TIE_TOLERANCE && hysa > combined + TIE_TOLERANCE {
        (StrategyChoice::Hysa, hysa - cd.max(combined))
    } else if combined > cd + TIE_TOLERANCE && combined > hysa + TIE_TOLERANCE {
        (StrategyChoice::Combined, combined - cd.max(hysa))
    } else {
        (StrategyChoice::Equal, 0.0)
    }
}

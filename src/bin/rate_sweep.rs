//! Sweep savings scenarios and report which strategy wins each one
//!
//! Loads scenarios from data/scenarios.csv when present, otherwise sweeps a
//! built-in grid of HYSA rates and contribution cadences against the default
//! CD leg.

use std::path::Path;

use savings_projector::inputs::loader::{load_scenarios, DEFAULT_SCENARIOS_PATH};
use savings_projector::{
    project_batch, validate, ContributionFrequency, ProjectionInput, StrategyChoice,
};

fn built_in_grid() -> Vec<ProjectionInput> {
    let rates = [3.5, 4.0, 4.5, 5.0];
    let cadences = [
        ContributionFrequency::Weekly,
        ContributionFrequency::Biweekly,
        ContributionFrequency::Monthly,
        ContributionFrequency::Quarterly,
    ];

    let mut grid = Vec::with_capacity(rates.len() * cadences.len());
    for &hysa_rate in &rates {
        for &contribution_frequency in &cadences {
            grid.push(ProjectionInput {
                hysa_rate,
                contribution_frequency,
                term_months: 60,
                ..Default::default()
            });
        }
    }
    grid
}

fn main() {
    env_logger::init();

    println!("Savings Projector - Rate Sweep");
    println!("{}", "=".repeat(60));

    let scenarios = match load_scenarios(Path::new(DEFAULT_SCENARIOS_PATH)) {
        Ok(scenarios) if !scenarios.is_empty() => {
            println!("Loaded {} scenarios from {}\n", scenarios.len(), DEFAULT_SCENARIOS_PATH);
            scenarios
        }
        Ok(_) => {
            println!("Scenario file is empty; using built-in sweep grid\n");
            built_in_grid()
        }
        Err(err) => {
            println!("No scenario file ({err}); using built-in sweep grid\n");
            built_in_grid()
        }
    };

    let mut valid = Vec::with_capacity(scenarios.len());
    for scenario in scenarios {
        match validate(&scenario) {
            Ok(()) => valid.push(scenario),
            Err(err) => eprintln!("skipping invalid scenario: {err}"),
        }
    }

    let results = project_batch(&valid);

    println!(
        "{:>8} {:>11} {:>6} {:>13} {:>13} {:>13} {:>9} {:>12}",
        "HYSA APY", "Cadence", "Term", "CD Final", "HYSA Final", "Combined", "Winner", "Margin"
    );
    println!("{}", "-".repeat(92));

    for (scenario, result) in valid.iter().zip(&results) {
        let winner = match result.better_option {
            StrategyChoice::Equal => "Equal".to_string(),
            choice => choice.as_str().to_string(),
        };
        println!(
            "{:>7.2}% {:>11} {:>6} {:>13.2} {:>13.2} {:>13.2} {:>9} {:>12.2}",
            scenario.hysa_rate,
            scenario.contribution_frequency.as_str(),
            scenario.term_months,
            result.cd_final_balance,
            result.hysa_final_balance,
            result.combined_final_balance,
            winner,
            result.difference,
        );
    }
}

//! CSV-based scenario loader
//!
//! Loads batches of projection inputs from a scenarios CSV, one scenario per
//! row. Column order matches the sample file in data/scenarios.csv.

use std::error::Error;
use std::fs::File;
use std::path::Path;

use super::data::ProjectionInput;

/// Default path to the scenarios file
pub const DEFAULT_SCENARIOS_PATH: &str = "data/scenarios.csv";

/// Load projection scenarios from a CSV file
///
/// Expected columns: initial_deposit_cd, initial_deposit_hysa, cd_rate,
/// hysa_rate, term_months, cd_compounding, hysa_compounding,
/// regular_contribution, contribution_frequency
pub fn load_scenarios(path: &Path) -> Result<Vec<ProjectionInput>, Box<dyn Error>> {
    let file = File::open(path)?;
    let mut reader = csv::Reader::from_reader(file);

    let mut scenarios = Vec::new();

    for result in reader.records() {
        let record = result?;
        scenarios.push(ProjectionInput {
            initial_deposit_cd: record[0].parse()?,
            initial_deposit_hysa: record[1].parse()?,
            cd_rate: record[2].parse()?,
            hysa_rate: record[3].parse()?,
            term_months: record[4].parse()?,
            cd_compounding: record[5].parse()?,
            hysa_compounding: record[6].parse()?,
            regular_contribution: record[7].parse()?,
            contribution_frequency: record[8].parse()?,
        });
    }

    log::info!("loaded {} scenarios from {}", scenarios.len(), path.display());

    Ok(scenarios)
}

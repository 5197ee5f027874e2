//! Input record and frequency enums for savings projections

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::validation::InputError;

/// How often interest is capitalized into principal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CompoundingFrequency {
    Daily,
    Monthly,
    Quarterly,
    Semiannually,
    Annually,
}

impl CompoundingFrequency {
    /// Number of compounding periods per year
    pub fn periods_per_year(&self) -> f64 {
        match self {
            CompoundingFrequency::Daily => 365.0,
            CompoundingFrequency::Monthly => 12.0,
            CompoundingFrequency::Quarterly => 4.0,
            CompoundingFrequency::Semiannually => 2.0,
            CompoundingFrequency::Annually => 1.0,
        }
    }

    /// Get the string representation matching the form values
    pub fn as_str(&self) -> &'static str {
        match self {
            CompoundingFrequency::Daily => "daily",
            CompoundingFrequency::Monthly => "monthly",
            CompoundingFrequency::Quarterly => "quarterly",
            CompoundingFrequency::Semiannually => "semiannually",
            CompoundingFrequency::Annually => "annually",
        }
    }
}

impl FromStr for CompoundingFrequency {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "daily" => Ok(CompoundingFrequency::Daily),
            "monthly" => Ok(CompoundingFrequency::Monthly),
            "quarterly" => Ok(CompoundingFrequency::Quarterly),
            "semiannually" => Ok(CompoundingFrequency::Semiannually),
            "annually" => Ok(CompoundingFrequency::Annually),
            _ => Err(InputError::UnknownFrequency {
                field: "compounding frequency",
                value: s.to_string(),
            }),
        }
    }
}

/// Cadence at which recurring deposits are added to the HYSA
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ContributionFrequency {
    Weekly,
    Biweekly,
    Monthly,
    Quarterly,
}

impl ContributionFrequency {
    /// Average contribution occurrences per month
    ///
    /// Weekly and biweekly use average weeks per month (4.33 / 2.17), so
    /// contributions are modeled as a smooth monthly-equivalent rate rather
    /// than discrete weekly events.
    pub fn per_month(&self) -> f64 {
        match self {
            ContributionFrequency::Weekly => 4.33,
            ContributionFrequency::Biweekly => 2.17,
            ContributionFrequency::Monthly => 1.0,
            ContributionFrequency::Quarterly => 1.0 / 3.0,
        }
    }

    /// Get the string representation matching the form values
    pub fn as_str(&self) -> &'static str {
        match self {
            ContributionFrequency::Weekly => "weekly",
            ContributionFrequency::Biweekly => "biweekly",
            ContributionFrequency::Monthly => "monthly",
            ContributionFrequency::Quarterly => "quarterly",
        }
    }
}

impl FromStr for ContributionFrequency {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "weekly" => Ok(ContributionFrequency::Weekly),
            "biweekly" => Ok(ContributionFrequency::Biweekly),
            "monthly" => Ok(ContributionFrequency::Monthly),
            "quarterly" => Ok(ContributionFrequency::Quarterly),
            _ => Err(InputError::UnknownFrequency {
                field: "contribution frequency",
                value: s.to_string(),
            }),
        }
    }
}

/// A validated set of calculator inputs, the sole argument to the engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionInput {
    /// Initial CD deposit in dollars
    pub initial_deposit_cd: f64,

    /// Initial HYSA deposit in dollars
    pub initial_deposit_hysa: f64,

    /// CD annual percentage yield (e.g. 4.25 for 4.25%)
    pub cd_rate: f64,

    /// HYSA annual percentage yield
    pub hysa_rate: f64,

    /// Projection term in months
    pub term_months: u32,

    /// CD compounding frequency
    pub cd_compounding: CompoundingFrequency,

    /// HYSA compounding frequency
    pub hysa_compounding: CompoundingFrequency,

    /// Recurring contribution amount in dollars, applied only to the HYSA
    pub regular_contribution: f64,

    /// Cadence of the recurring contribution
    pub contribution_frequency: ContributionFrequency,
}

impl Default for ProjectionInput {
    /// Default inputs matching the calculator form defaults
    fn default() -> Self {
        Self {
            initial_deposit_cd: 5000.0,
            initial_deposit_hysa: 0.0,
            cd_rate: 4.25,
            hysa_rate: 4.0,
            term_months: 12,
            cd_compounding: CompoundingFrequency::Daily,
            hysa_compounding: CompoundingFrequency::Daily,
            regular_contribution: 250.0,
            contribution_frequency: ContributionFrequency::Monthly,
        }
    }
}

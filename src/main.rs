//! Savings Projector CLI
//!
//! Compares projected growth for a fixed-term CD, a HYSA with recurring
//! contributions, and the combined strategy holding both.

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use clap::Parser;

use savings_projector::analysis::{comparison_table, difference_series};
use savings_projector::format::{format_currency, format_percent};
use savings_projector::{
    project, validate, CompoundingFrequency, ContributionFrequency, ProjectionInput,
    StrategyChoice,
};

#[derive(Parser, Debug)]
#[command(
    name = "savings_projector",
    about = "Compare CD, HYSA, and combined savings growth"
)]
struct Cli {
    /// Initial CD deposit in dollars
    #[arg(long, default_value_t = 5000.0)]
    cd_deposit: f64,

    /// Initial HYSA deposit in dollars
    #[arg(long, default_value_t = 0.0)]
    hysa_deposit: f64,

    /// CD APY in percent
    #[arg(long, default_value_t = 4.25)]
    cd_rate: f64,

    /// HYSA APY in percent
    #[arg(long, default_value_t = 4.0)]
    hysa_rate: f64,

    /// Term length in months
    #[arg(long, default_value_t = 12)]
    term_months: u32,

    /// CD compounding frequency
    #[arg(long, value_enum, default_value = "daily")]
    cd_compounding: CompoundingFrequency,

    /// HYSA compounding frequency
    #[arg(long, value_enum, default_value = "daily")]
    hysa_compounding: CompoundingFrequency,

    /// Recurring HYSA contribution in dollars
    #[arg(long, default_value_t = 250.0)]
    contribution: f64,

    /// Contribution cadence
    #[arg(long, value_enum, default_value = "monthly")]
    contribution_frequency: ContributionFrequency,

    /// Write the full monthly series to a CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Print the full result record as JSON instead of tables
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let inputs = ProjectionInput {
        initial_deposit_cd: cli.cd_deposit,
        initial_deposit_hysa: cli.hysa_deposit,
        cd_rate: cli.cd_rate,
        hysa_rate: cli.hysa_rate,
        term_months: cli.term_months,
        cd_compounding: cli.cd_compounding,
        hysa_compounding: cli.hysa_compounding,
        regular_contribution: cli.contribution,
        contribution_frequency: cli.contribution_frequency,
    };

    validate(&inputs)?;
    let results = project(&inputs);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    println!("Savings Projector v0.1.0");
    println!("========================\n");

    println!("Certificate of Deposit");
    println!("  Initial Deposit:  {}", format_currency(inputs.initial_deposit_cd));
    println!("  APY:              {}", format_percent(inputs.cd_rate));
    println!("  Compounding:      {}", inputs.cd_compounding.as_str());
    println!("  Interest Earned:  {}", format_currency(results.cd_interest_earned));
    println!("  Final Balance:    {}", format_currency(results.cd_final_balance));
    println!();

    println!("High Yield Savings");
    println!("  Initial Deposit:  {}", format_currency(inputs.initial_deposit_hysa));
    println!(
        "  Contribution:     {} ({})",
        format_currency(inputs.regular_contribution),
        inputs.contribution_frequency.as_str()
    );
    println!("  APY:              {}", format_percent(inputs.hysa_rate));
    println!("  Compounding:      {}", inputs.hysa_compounding.as_str());
    println!("  Interest Earned:  {}", format_currency(results.hysa_interest_earned));
    println!("  Final Balance:    {}", format_currency(results.hysa_final_balance));
    println!();

    println!("Combined Strategy");
    println!("  Total Contributions: {}", format_currency(results.total_contributions));
    println!("  Interest Earned:     {}", format_currency(results.combined_interest_earned));
    println!("  Final Balance:       {}", format_currency(results.combined_final_balance));
    println!();

    match results.better_option {
        StrategyChoice::Equal => println!("Best Strategy: Equal Returns"),
        choice => println!(
            "Best Strategy: {} (+{} over runner-up)",
            choice.as_str(),
            format_currency(results.difference)
        ),
    }

    // Monthly balance table, first 24 months to console
    println!("\nMonthly Balances ({} months):", results.term_months());
    println!("{:>5} {:>14} {:>14} {:>14}", "Month", "CD", "HYSA", "Combined");
    println!("{}", "-".repeat(50));
    for (cd, (hysa, combined)) in results.cd_monthly_balances.iter().zip(
        results
            .hysa_monthly_balances
            .iter()
            .zip(&results.combined_monthly_balances),
    ).take(24) {
        println!(
            "{:>5} {:>14.2} {:>14.2} {:>14.2}",
            cd.month, cd.balance, hysa.balance, combined.balance
        );
    }
    if results.term_months() > 24 {
        println!("... ({} more months)", results.term_months() - 24);
    }

    // Checkpoint comparison table
    println!("\nDetailed Comparison:");
    println!(
        "{:>5} {:>14} {:>14} {:>14} {:>10}",
        "Month", "CD", "HYSA", "Combined", "Best"
    );
    println!("{}", "-".repeat(62));
    for row in comparison_table(&results) {
        println!(
            "{:>5} {:>14.2} {:>14.2} {:>14.2} {:>10}",
            row.month,
            row.cd_balance,
            row.hysa_balance,
            row.combined_balance,
            row.best_option.as_str()
        );
    }

    if let Some(path) = cli.csv {
        let mut file = File::create(&path)?;

        writeln!(file, "Month,CD,HYSA,Combined,CD_vs_HYSA,Combined_vs_Best")?;
        for (cd, diff) in results
            .cd_monthly_balances
            .iter()
            .zip(difference_series(&results))
        {
            let idx = (cd.month - 1) as usize;
            writeln!(
                file,
                "{},{:.8},{:.8},{:.8},{:.8},{:.8}",
                cd.month,
                cd.balance,
                results.hysa_monthly_balances[idx].balance,
                results.combined_monthly_balances[idx].balance,
                diff.cd_vs_hysa,
                diff.combined_vs_best,
            )?;
        }

        println!("\nFull results written to: {}", path.display());
    }

    Ok(())
}

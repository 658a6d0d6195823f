//! Compare Avalanche vs Snowball across a sweep of monthly budgets
//!
//! Runs both strategies for every budget level in parallel and writes the
//! results to strategy_comparison.csv

use anyhow::{Context, Result};
use finance_sim::{Debt, ScenarioRunner, StrategyComparison};
use rayon::prelude::*;
use std::fs::File;
use std::io::Write;
use std::time::Instant;

fn main() -> Result<()> {
    env_logger::init();

    let start = Instant::now();

    // Mixed portfolio: high-rate cards, a mid-rate loan, small balances
    let debts = vec![
        Debt::new(5000.0, 0.18),
        Debt::new(2500.0, 0.22),
        Debt::new(8000.0, 0.06),
        Debt::new(12_000.0, 0.09),
        Debt::new(3000.0, 0.04),
        Debt::new(1500.0, 0.15),
    ];
    let total: f64 = debts.iter().map(|d| d.principal()).sum();
    println!("Portfolio: {} debts, ${:.2} total", debts.len(), total);

    let budgets: Vec<f64> = (8..=24).map(|step| step as f64 * 50.0).collect();

    println!("Running {} budget levels x 2 strategies...", budgets.len());
    let results: Vec<(f64, StrategyComparison)> = budgets
        .par_iter()
        .map(|&budget| {
            let runner = ScenarioRunner::new(&debts, budget);
            (budget, runner.compare())
        })
        .collect();

    let csv_path = "strategy_comparison.csv";
    let mut file = File::create(csv_path).context("Unable to create comparison CSV")?;
    writeln!(
        file,
        "Budget,AvalancheMonths,AvalancheInterest,SnowballMonths,SnowballInterest,InterestSaved,MonthsSaved"
    )?;

    for (budget, comparison) in &results {
        writeln!(
            file,
            "{:.2},{},{:.2},{},{:.2},{:.2},{}",
            budget,
            comparison.avalanche.months_elapsed,
            comparison.avalanche.total_interest_paid,
            comparison.snowball.months_elapsed,
            comparison.snowball.total_interest_paid,
            comparison.interest_saved(),
            comparison.months_saved(),
        )?;
    }

    println!("Results written to: {}", csv_path);

    // Quick console view of the extremes
    if let (Some((lo, first)), Some((hi, last))) = (results.first(), results.last()) {
        println!(
            "  ${:.0}/month: Avalanche {} months (${:.2} interest), saves ${:.2} vs Snowball",
            lo,
            first.avalanche.months_elapsed,
            first.avalanche.total_interest_paid,
            first.interest_saved(),
        );
        println!(
            "  ${:.0}/month: Avalanche {} months (${:.2} interest), saves ${:.2} vs Snowball",
            hi,
            last.avalanche.months_elapsed,
            last.avalanche.total_interest_paid,
            last.interest_saved(),
        );
    }

    println!("Done in {:?}", start.elapsed());
    Ok(())
}

//! Finance Sim CLI
//!
//! Runs a debt repayment simulation over a demo or CSV-loaded portfolio,
//! prints the month-by-month schedule, and walks through savings-goal
//! examples.

use anyhow::{anyhow, Context, Result};
use clap::{Parser, ValueEnum};
use finance_sim::debt::load_debts;
use finance_sim::savings::format_years_and_months;
use finance_sim::{
    Debt, DebtSimulator, SavingsPlan, SimulationOutcome, SimulatorConfig, Strategy,
};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrategyArg {
    Avalanche,
    Snowball,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Avalanche => Strategy::Avalanche,
            StrategyArg::Snowball => Strategy::Snowball,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "finance_sim", about = "Debt repayment and savings goal simulation")]
struct Args {
    /// Monthly repayment budget
    #[arg(long, default_value_t = 500.0)]
    budget: f64,

    /// Payoff strategy
    #[arg(long, value_enum, default_value_t = StrategyArg::Avalanche)]
    strategy: StrategyArg,

    /// CSV portfolio with Principal,AnnualRate columns; demo debts when omitted
    #[arg(long)]
    debts: Option<PathBuf>,

    /// Output path for the monthly schedule CSV
    #[arg(long, default_value = "repayment_schedule.csv")]
    out: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    println!("Finance Sim v0.1.0");
    println!("==================\n");

    let debts = match &args.debts {
        Some(path) => load_debts(path).map_err(|e| anyhow!("Failed to load {:?}: {}", path, e))?,
        None => demo_debts(),
    };

    run_repayment(&debts, args.budget, args.strategy.into(), &args.out)?;
    run_savings_examples();

    Ok(())
}

/// Reference portfolio: the three-debt demo scenario
fn demo_debts() -> Vec<Debt> {
    vec![
        Debt::new(5000.0, 0.18),
        Debt::new(8000.0, 0.06),
        Debt::new(3000.0, 0.04),
    ]
}

fn run_repayment(debts: &[Debt], budget: f64, strategy: Strategy, out: &PathBuf) -> Result<()> {
    println!("Debts:");
    for (i, debt) in debts.iter().enumerate() {
        println!("  {}. {}", i + 1, debt);
    }
    println!("\nMonthly Budget: ${:.2}", budget);
    println!("Strategy: {}\n", strategy);

    let mut config = SimulatorConfig::new(budget, strategy);
    config.detailed_output = true;
    let result = DebtSimulator::new(debts, config).run();

    // Print first 24 months to console
    println!(
        "{:>5} {:>12} {:>12} {:>12} {:>14} {:>6}",
        "Month", "Interest", "Minimums", "TargetPay", "Balance", "Debts"
    );
    println!("{}", "-".repeat(66));
    for row in result.months.iter().take(24) {
        println!(
            "{:>5} {:>12.2} {:>12.2} {:>12.2} {:>14.2} {:>6}",
            row.month,
            row.interest_accrued,
            row.minimum_payments,
            row.target_payment,
            row.total_balance_eop,
            row.active_debts,
        );
    }
    if result.months.len() > 24 {
        println!("... ({} more months)", result.months.len() - 24);
    }

    // Write the full schedule to CSV
    let mut file = File::create(out).with_context(|| format!("Unable to create {:?}", out))?;
    writeln!(
        file,
        "Month,InterestAccrued,MinimumPayments,TargetPayment,TotalBalance,ActiveDebts"
    )?;
    for row in &result.months {
        writeln!(
            file,
            "{},{:.2},{:.2},{:.2},{:.2},{}",
            row.month,
            row.interest_accrued,
            row.minimum_payments,
            row.target_payment,
            row.total_balance_eop,
            row.active_debts,
        )?;
    }
    println!("\nFull schedule written to: {}", out.display());

    // Print summary
    let summary = result.summary();
    println!("\nSummary:");
    println!(
        "  Months to Payoff: {} ({:.1} years)",
        summary.months_elapsed, summary.years_elapsed
    );
    println!("  Total Interest Paid: ${:.2}", summary.total_interest_paid);
    match result.outcome {
        SimulationOutcome::AllDebtsPaid => {}
        SimulationOutcome::InsufficientBudget { required_interest } => {
            println!(
                "  HALTED: budget ${:.2} cannot cover ${:.2} of monthly interest",
                budget, required_interest
            );
        }
        SimulationOutcome::MaxMonthsReached => {
            println!("  HALTED: month cap reached before payoff");
        }
    }

    println!("\nPayoff Order ({} Strategy):", result.strategy);
    for (i, record) in result.payoff_order.iter().enumerate() {
        println!("  {}. {}", i + 1, record);
    }
    println!();

    Ok(())
}

fn run_savings_examples() {
    println!("Savings Goal Examples");
    println!("=====================\n");

    let examples = [
        ("Building savings from scratch", SavingsPlan::new(0.0, 1000.0, 0.05, 10_000.0)),
        ("Doubling with no contributions", SavingsPlan::new(1000.0, 0.0, 0.05, 2000.0)),
        ("$100k at $5000/year and 7%", SavingsPlan::new(0.0, 5000.0, 0.07, 100_000.0)),
    ];

    for (label, plan) in examples {
        println!("{}:", label);
        println!("  Initial: ${:.2}", plan.initial_principal);
        println!("  Annual Contribution: ${:.2}", plan.annual_contribution);
        println!("  Annual Interest Rate: {:.1}%", plan.annual_rate * 100.0);
        println!("  Target: ${:.2}", plan.target_amount);

        match plan.years_to_target() {
            Ok(years) => {
                println!("  Time to reach target: {}", format_years_and_months(years));
                println!("  Final balance: ${:.2}", plan.balance_at(years));
            }
            Err(e) => println!("  {}", e),
        }
        println!();
    }
}

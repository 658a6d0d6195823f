//! Core month-by-month repayment engine
//!
//! Each month, every active debt except the priority target receives an
//! interest-only minimum payment; the entire remaining budget goes to the
//! target. When the target's balance reaches zero it is recorded in payoff
//! order and the next debt in priority order becomes the target.
//!
//! Time complexity: O(N * M) for N debts over M months.

use super::results::{MonthRow, PayoffRecord, SimulationOutcome, SimulationResult};
use super::state::SimulationState;
use crate::debt::Debt;
use log::warn;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Target balances at or below this count as paid off after a payment.
///
/// Money-rounding tolerance, distinct from the entity-level
/// [`crate::debt::PAYOFF_EPSILON`]: this one decides when a residual balance
/// is too small to be worth another month.
pub const PAYOFF_THRESHOLD: f64 = 0.01;

/// Default cap on simulated months (100 years).
///
/// Guards against a stalled run when the budget exactly covers interest and
/// principal never shrinks.
pub const DEFAULT_MAX_MONTHS: u32 = 1200;

/// Payoff prioritization strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    /// Highest interest rate first (greedy, interest-optimal)
    Avalanche,
    /// Lowest balance first (quick wins for motivation)
    Snowball,
}

impl Strategy {
    /// Order debts so the priority target sits at index 0.
    ///
    /// Applied once at simulation start; the ordering is not re-evaluated
    /// as balances change.
    pub(crate) fn sort(&self, debts: &mut [Debt]) {
        match self {
            Strategy::Avalanche => {
                debts.sort_by(|a, b| b.annual_rate().total_cmp(&a.annual_rate()))
            }
            Strategy::Snowball => debts.sort_by(|a, b| a.principal().total_cmp(&b.principal())),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Avalanche => write!(f, "Avalanche"),
            Strategy::Snowball => write!(f, "Snowball"),
        }
    }
}

/// Configuration for a simulation run
#[derive(Debug, Clone)]
pub struct SimulatorConfig {
    /// Total budget available each month
    pub monthly_budget: f64,

    /// Payoff prioritization strategy
    pub strategy: Strategy,

    /// Hard cap on simulated months
    pub max_months: u32,

    /// Whether to record a [`MonthRow`] per month
    pub detailed_output: bool,
}

impl SimulatorConfig {
    /// Config with the default month cap and no per-month detail
    pub fn new(monthly_budget: f64, strategy: Strategy) -> Self {
        Self {
            monthly_budget,
            strategy,
            max_months: DEFAULT_MAX_MONTHS,
            detailed_output: false,
        }
    }
}

/// Debt repayment simulator
///
/// Owns private copies of the input debts (deep-copied at construction), so
/// the caller's originals are never mutated. A run is a single deterministic
/// pass; the result is frozen once [`DebtSimulator::run`] returns.
pub struct DebtSimulator {
    config: SimulatorConfig,
    state: SimulationState,
}

impl DebtSimulator {
    /// Create a simulator over deep copies of `debts`, sorted by the
    /// configured strategy
    pub fn new(debts: &[Debt], config: SimulatorConfig) -> Self {
        let state = SimulationState::from_debts(debts, config.strategy);
        Self { config, state }
    }

    /// Run the simulation to termination
    pub fn run(mut self) -> SimulationResult {
        let mut months = Vec::new();

        let outcome = loop {
            if self.state.is_finished() {
                break SimulationOutcome::AllDebtsPaid;
            }
            if self.state.months_elapsed >= self.config.max_months {
                break SimulationOutcome::MaxMonthsReached;
            }

            self.state.months_elapsed += 1;

            let required_interest = self.state.required_interest();
            if self.config.monthly_budget < required_interest {
                warn!(
                    "month {}: budget ${:.2} cannot cover ${:.2} of interest, halting",
                    self.state.months_elapsed, self.config.monthly_budget, required_interest
                );
                break SimulationOutcome::InsufficientBudget { required_interest };
            }

            let row = self.pay_month(required_interest);
            if self.config.detailed_output {
                months.push(row);
            }
        };

        SimulationResult {
            strategy: self.config.strategy,
            monthly_budget: self.config.monthly_budget,
            months_elapsed: self.state.months_elapsed,
            total_interest_paid: self.state.total_interest_paid,
            payoff_order: self.state.payoff_order,
            outcome,
            months,
        }
    }

    /// Apply one month of payments: interest-only minimums on every debt
    /// except the target, then the full remaining budget on the target
    fn pay_month(&mut self, interest_accrued: f64) -> MonthRow {
        let mut remaining = self.config.monthly_budget;
        let mut minimum_payments = 0.0;

        for debt in self.state.active.iter_mut().skip(1) {
            let interest = debt.monthly_interest();
            // Accrue-then-pay with an interest-sized payment leaves the
            // balance unchanged
            debt.apply_payment(interest);
            remaining -= interest;
            minimum_payments += interest;
            self.state.total_interest_paid += interest;
        }

        let target = &mut self.state.active[0];
        let target_interest = target.monthly_interest();
        self.state.total_interest_paid += target_interest;

        let target_payment = remaining;
        // Any overpayment excess is not redistributed within the month; the
        // freed-up budget reaches the next target starting next month.
        let _excess = target.apply_payment(remaining);

        if target.principal() <= PAYOFF_THRESHOLD {
            let record = PayoffRecord::from_debt(target);
            self.state.payoff_order.push(record);
            self.state.active.remove(0);
        }

        MonthRow {
            month: self.state.months_elapsed,
            interest_accrued,
            minimum_payments,
            target_payment,
            total_balance_eop: self.state.total_balance(),
            active_debts: self.state.active.len() as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn demo_debts() -> Vec<Debt> {
        vec![
            Debt::new(5000.0, 0.18),
            Debt::new(8000.0, 0.06),
            Debt::new(3000.0, 0.04),
        ]
    }

    #[test]
    fn test_single_debt_scenario() {
        let debts = vec![Debt::new(1000.0, 0.12)];
        let sim = DebtSimulator::new(&debts, SimulatorConfig::new(100.0, Strategy::Avalanche));
        let result = sim.run();

        // $100/month retires $1000 at 12% in about 11 months
        assert_eq!(result.months_elapsed, 11);
        assert!(result.total_interest_paid > 0.0);
        assert_eq!(result.payoff_order.len(), 1);
        assert!(result.outcome.is_paid_off());
    }

    #[test]
    fn test_avalanche_priority() {
        let debts = vec![Debt::new(1000.0, 0.05), Debt::new(1000.0, 0.20)];
        let sim = DebtSimulator::new(&debts, SimulatorConfig::new(200.0, Strategy::Avalanche));
        let result = sim.run();

        // The higher-rate debt must be retired first
        assert_relative_eq!(result.payoff_order[0].original_rate, 0.20);
        assert_relative_eq!(result.payoff_order[1].original_rate, 0.05);
    }

    #[test]
    fn test_snowball_priority() {
        let debts = vec![
            Debt::new(2000.0, 0.20),
            Debt::new(500.0, 0.05),
            Debt::new(1000.0, 0.10),
        ];
        let sim = DebtSimulator::new(&debts, SimulatorConfig::new(300.0, Strategy::Snowball));
        let result = sim.run();

        // Smallest balance retired first
        assert_relative_eq!(result.payoff_order[0].original_principal, 500.0);
        assert_eq!(result.payoff_order.len(), 3);
    }

    #[test]
    fn test_reference_scenario_regression() {
        // {$5000@18%, $8000@6%, $3000@4%} at $500/month: 38 months,
        // ~$1743.09 total interest, all three retired
        let sim =
            DebtSimulator::new(&demo_debts(), SimulatorConfig::new(500.0, Strategy::Avalanche));
        let result = sim.run();

        assert_eq!(result.months_elapsed, 38);
        assert!((result.total_interest_paid - 1743.09).abs() < 1.0);
        assert_eq!(result.payoff_order.len(), 3);
        assert_relative_eq!(result.payoff_order[0].original_rate, 0.18);
        assert!(result.outcome.is_paid_off());
    }

    #[test]
    fn test_insufficient_budget_halts_at_month_one() {
        // Monthly interest: $208.33 + $83.33 + $37.50 ~= $329.17 > $100
        let debts = vec![
            Debt::new(10_000.0, 0.25),
            Debt::new(5000.0, 0.20),
            Debt::new(3000.0, 0.15),
        ];
        let sim = DebtSimulator::new(&debts, SimulatorConfig::new(100.0, Strategy::Avalanche));
        let result = sim.run();

        assert_eq!(result.months_elapsed, 1);
        assert!(result.payoff_order.is_empty());
        match result.outcome {
            SimulationOutcome::InsufficientBudget { required_interest } => {
                assert!((required_interest - 329.166).abs() < 0.01);
            }
            other => panic!("Expected InsufficientBudget, got {:?}", other),
        }
    }

    #[test]
    fn test_budget_equal_to_interest_hits_month_cap() {
        // Budget exactly covers interest: principal never shrinks
        let debts = vec![Debt::new(1000.0, 0.12)];
        let mut config = SimulatorConfig::new(10.0, Strategy::Avalanche);
        config.max_months = 24;

        let result = DebtSimulator::new(&debts, config).run();

        assert_eq!(result.months_elapsed, 24);
        assert_eq!(result.outcome, SimulationOutcome::MaxMonthsReached);
        assert!(result.payoff_order.is_empty());
    }

    #[test]
    fn test_empty_portfolio_is_trivially_paid() {
        let result = DebtSimulator::new(&[], SimulatorConfig::new(500.0, Strategy::Avalanche)).run();

        assert_eq!(result.months_elapsed, 0);
        assert_eq!(result.outcome, SimulationOutcome::AllDebtsPaid);
        assert_relative_eq!(result.total_interest_paid, 0.0);
    }

    #[test]
    fn test_caller_debts_never_mutated() {
        let debts = demo_debts();
        let _ = DebtSimulator::new(&debts, SimulatorConfig::new(500.0, Strategy::Avalanche)).run();

        assert_relative_eq!(debts[0].principal(), 5000.0);
        assert_relative_eq!(debts[1].principal(), 8000.0);
        assert_relative_eq!(debts[2].principal(), 3000.0);
    }

    #[test]
    fn test_detailed_output_records_every_month() {
        let mut config = SimulatorConfig::new(500.0, Strategy::Avalanche);
        config.detailed_output = true;

        let result = DebtSimulator::new(&demo_debts(), config).run();

        assert_eq!(result.months.len(), result.months_elapsed as usize);
        // Balance decreases month over month once payments flow
        for pair in result.months.windows(2) {
            assert!(pair[1].total_balance_eop <= pair[0].total_balance_eop);
        }
        assert_eq!(result.months.last().unwrap().active_debts, 0);
    }

    #[test]
    fn test_total_interest_monotone_during_run() {
        // Longer horizons can only accumulate more interest
        let debts = demo_debts();
        let mut short = SimulatorConfig::new(500.0, Strategy::Avalanche);
        short.max_months = 10;
        let mut long = SimulatorConfig::new(500.0, Strategy::Avalanche);
        long.max_months = 20;

        let short_run = DebtSimulator::new(&debts, short).run();
        let long_run = DebtSimulator::new(&debts, long).run();

        assert!(long_run.total_interest_paid >= short_run.total_interest_paid);
    }
}

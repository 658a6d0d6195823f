//! Result records for repayment simulations

use super::engine::Strategy;
use crate::debt::Debt;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Immutable record of one retired debt, identified by its original terms
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayoffRecord {
    /// Principal at creation
    pub original_principal: f64,

    /// Annual rate at creation
    pub original_rate: f64,
}

impl PayoffRecord {
    /// Snapshot the original terms of a debt
    pub fn from_debt(debt: &Debt) -> Self {
        Self {
            original_principal: debt.original_principal(),
            original_rate: debt.original_rate(),
        }
    }
}

impl fmt::Display for PayoffRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Debt[Principal: ${:.2}, Rate: {:.2}%]",
            self.original_principal,
            self.original_rate * 100.0
        )
    }
}

/// A single month of simulation output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthRow {
    /// Month number (1-indexed)
    pub month: u32,

    /// Interest accrued across all active debts this month
    pub interest_accrued: f64,

    /// Sum of interest-only minimum payments on non-target debts
    pub minimum_payments: f64,

    /// Budget applied to the priority target
    pub target_payment: f64,

    /// Total remaining balance after this month's payments
    pub total_balance_eop: f64,

    /// Active debts remaining after this month's payoff check
    pub active_debts: u32,
}

/// How a simulation terminated
///
/// Insufficient budget is a recorded terminal state, not an error: the
/// partial results leading up to it remain valid and inspectable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SimulationOutcome {
    /// Every debt reached zero balance
    AllDebtsPaid,

    /// Monthly interest exceeded the budget. No payments were applied in
    /// the failing month; months_elapsed includes that month.
    InsufficientBudget {
        /// Interest the failing month would have required
        required_interest: f64,
    },

    /// The month cap was hit before payoff (e.g., budget exactly covers
    /// interest and principal never shrinks)
    MaxMonthsReached,
}

impl SimulationOutcome {
    pub fn is_paid_off(&self) -> bool {
        matches!(self, SimulationOutcome::AllDebtsPaid)
    }
}

/// Complete, frozen result of one simulation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Strategy the run was configured with
    pub strategy: Strategy,

    /// Monthly budget the run was configured with
    pub monthly_budget: f64,

    /// Months simulated, including a failing month
    pub months_elapsed: u32,

    /// Interest accumulated across all payments
    pub total_interest_paid: f64,

    /// Debts in the order they reached zero balance
    pub payoff_order: Vec<PayoffRecord>,

    /// Terminal state of the run
    pub outcome: SimulationOutcome,

    /// Per-month detail, empty unless detailed output was requested
    pub months: Vec<MonthRow>,
}

impl SimulationResult {
    /// Get summary statistics
    pub fn summary(&self) -> SimulationSummary {
        SimulationSummary {
            months_elapsed: self.months_elapsed,
            years_elapsed: self.months_elapsed as f64 / 12.0,
            total_interest_paid: self.total_interest_paid,
            debts_paid: self.payoff_order.len() as u32,
            paid_off: self.outcome.is_paid_off(),
        }
    }
}

/// Summary statistics for a simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationSummary {
    pub months_elapsed: u32,
    pub years_elapsed: f64,
    pub total_interest_paid: f64,
    pub debts_paid: u32,
    pub paid_off: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payoff_record_snapshots_original_terms() {
        let mut debt = Debt::new(5000.0, 0.18);
        debt.apply_payment(1000.0);

        let record = PayoffRecord::from_debt(&debt);
        assert_eq!(record.original_principal, 5000.0);
        assert_eq!(record.original_rate, 0.18);
        assert_eq!(record.to_string(), "Debt[Principal: $5000.00, Rate: 18.00%]");
    }

    #[test]
    fn test_summary() {
        let result = SimulationResult {
            strategy: Strategy::Avalanche,
            monthly_budget: 500.0,
            months_elapsed: 38,
            total_interest_paid: 1743.09,
            payoff_order: vec![
                PayoffRecord { original_principal: 5000.0, original_rate: 0.18 },
                PayoffRecord { original_principal: 3000.0, original_rate: 0.04 },
            ],
            outcome: SimulationOutcome::AllDebtsPaid,
            months: Vec::new(),
        };

        let summary = result.summary();
        assert_eq!(summary.months_elapsed, 38);
        assert_eq!(summary.debts_paid, 2);
        assert!(summary.paid_off);
        assert!((summary.years_elapsed - 38.0 / 12.0).abs() < 1e-12);
    }
}

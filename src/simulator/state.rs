//! Working state for one repayment simulation

use super::engine::Strategy;
use super::results::PayoffRecord;
use crate::debt::Debt;

/// Mutable session state owned by a running simulation
///
/// Holds deep copies of the caller's debts, so the originals are never
/// mutated. The vector order is the priority order: index 0 is the debt
/// receiving all budget beyond the interest-only minimums.
#[derive(Debug, Clone)]
pub struct SimulationState {
    /// Active debts in priority order (index 0 = current target)
    pub active: Vec<Debt>,

    /// Months simulated so far (monotone increasing)
    pub months_elapsed: u32,

    /// Interest accumulated across all payments (monotone non-decreasing)
    pub total_interest_paid: f64,

    /// Debts that reached zero balance, in payoff order (append-only)
    pub payoff_order: Vec<PayoffRecord>,
}

impl SimulationState {
    /// Copy the caller's debts and sort them by the given strategy.
    ///
    /// The ordering is fixed here and not re-evaluated as balances change.
    pub fn from_debts(debts: &[Debt], strategy: Strategy) -> Self {
        let mut active = debts.to_vec();
        strategy.sort(&mut active);

        Self {
            active,
            months_elapsed: 0,
            total_interest_paid: 0.0,
            payoff_order: Vec::new(),
        }
    }

    /// Interest that would accrue across all active debts this month
    pub fn required_interest(&self) -> f64 {
        self.active.iter().map(|d| d.monthly_interest()).sum()
    }

    /// Sum of current balances across active debts
    pub fn total_balance(&self) -> f64 {
        self.active.iter().map(|d| d.principal()).sum()
    }

    /// Whether every debt has been retired
    pub fn is_finished(&self) -> bool {
        self.active.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_avalanche_orders_by_rate_descending() {
        let debts = vec![
            Debt::new(1000.0, 0.05),
            Debt::new(2000.0, 0.20),
            Debt::new(3000.0, 0.10),
        ];
        let state = SimulationState::from_debts(&debts, Strategy::Avalanche);

        let rates: Vec<f64> = state.active.iter().map(|d| d.annual_rate()).collect();
        assert_eq!(rates, vec![0.20, 0.10, 0.05]);
    }

    #[test]
    fn test_snowball_orders_by_balance_ascending() {
        let debts = vec![
            Debt::new(3000.0, 0.10),
            Debt::new(500.0, 0.05),
            Debt::new(2000.0, 0.20),
        ];
        let state = SimulationState::from_debts(&debts, Strategy::Snowball);

        let balances: Vec<f64> = state.active.iter().map(|d| d.principal()).collect();
        assert_eq!(balances, vec![500.0, 2000.0, 3000.0]);
    }

    #[test]
    fn test_required_interest_sums_active_debts() {
        let debts = vec![Debt::new(1200.0, 0.12), Debt::new(2400.0, 0.06)];
        let state = SimulationState::from_debts(&debts, Strategy::Avalanche);

        // 1200 * 1% + 2400 * 0.5%
        assert_relative_eq!(state.required_interest(), 12.0 + 12.0);
    }

    #[test]
    fn test_caller_debts_untouched() {
        let debts = vec![Debt::new(1000.0, 0.12)];
        let mut state = SimulationState::from_debts(&debts, Strategy::Avalanche);
        state.active[0].apply_payment(500.0);

        assert_relative_eq!(debts[0].principal(), 1000.0);
    }
}

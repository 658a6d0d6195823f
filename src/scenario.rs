//! Scenario runner for batch strategy comparisons
//!
//! Pre-loads a debt portfolio once, then allows running many simulations
//! with different strategies or configs without re-building the inputs at
//! every call site.

use crate::debt::Debt;
use crate::simulator::{DebtSimulator, SimulationResult, SimulatorConfig, Strategy};

/// Pre-loaded portfolio runner for batch simulations
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new(&debts, 500.0);
/// let comparison = runner.compare();
/// println!("Avalanche saves ${:.2}", comparison.interest_saved());
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    /// Portfolio shared by every run (each run deep-copies it)
    debts: Vec<Debt>,

    /// Budget shared by every run
    monthly_budget: f64,
}

impl ScenarioRunner {
    /// Create a runner over a copy of the given portfolio
    pub fn new(debts: &[Debt], monthly_budget: f64) -> Self {
        Self {
            debts: debts.to_vec(),
            monthly_budget,
        }
    }

    /// Run a single simulation with the given strategy
    pub fn run(&self, strategy: Strategy) -> SimulationResult {
        let config = SimulatorConfig::new(self.monthly_budget, strategy);
        DebtSimulator::new(&self.debts, config).run()
    }

    /// Run a single simulation with full config control
    pub fn run_with_config(&self, config: SimulatorConfig) -> SimulationResult {
        DebtSimulator::new(&self.debts, config).run()
    }

    /// Run several strategies against the same portfolio
    pub fn run_strategies(&self, strategies: &[Strategy]) -> Vec<SimulationResult> {
        strategies.iter().map(|&s| self.run(s)).collect()
    }

    /// Run both strategies and pair up the results
    pub fn compare(&self) -> StrategyComparison {
        StrategyComparison {
            avalanche: self.run(Strategy::Avalanche),
            snowball: self.run(Strategy::Snowball),
        }
    }

    /// Get reference to the portfolio for inspection
    pub fn debts(&self) -> &[Debt] {
        &self.debts
    }

    pub fn monthly_budget(&self) -> f64 {
        self.monthly_budget
    }
}

/// Side-by-side result of running both strategies on one portfolio
#[derive(Debug, Clone)]
pub struct StrategyComparison {
    pub avalanche: SimulationResult,
    pub snowball: SimulationResult,
}

impl StrategyComparison {
    /// Interest saved by Avalanche relative to Snowball (positive when
    /// Avalanche is cheaper)
    pub fn interest_saved(&self) -> f64 {
        self.snowball.total_interest_paid - self.avalanche.total_interest_paid
    }

    /// Months saved by Avalanche relative to Snowball
    pub fn months_saved(&self) -> i64 {
        self.snowball.months_elapsed as i64 - self.avalanche.months_elapsed as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_portfolio() -> Vec<Debt> {
        vec![
            Debt::new(5000.0, 0.18),
            Debt::new(8000.0, 0.06),
            Debt::new(3000.0, 0.04),
        ]
    }

    #[test]
    fn test_avalanche_never_costs_more_interest() {
        let runner = ScenarioRunner::new(&test_portfolio(), 500.0);
        let comparison = runner.compare();

        assert!(comparison.avalanche.outcome.is_paid_off());
        assert!(comparison.snowball.outcome.is_paid_off());
        // Highest-rate-first is the interest-optimal greedy choice
        assert!(comparison.interest_saved() >= 0.0);
    }

    #[test]
    fn test_run_strategies_returns_one_result_each() {
        let runner = ScenarioRunner::new(&test_portfolio(), 500.0);
        let results = runner.run_strategies(&[Strategy::Avalanche, Strategy::Snowball]);

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].strategy, Strategy::Avalanche);
        assert_eq!(results[1].strategy, Strategy::Snowball);
    }

    #[test]
    fn test_runs_share_the_same_portfolio() {
        let runner = ScenarioRunner::new(&test_portfolio(), 500.0);
        let first = runner.run(Strategy::Avalanche);
        let second = runner.run(Strategy::Avalanche);

        // Each run deep-copies the portfolio, so results are identical
        assert_eq!(first.months_elapsed, second.months_elapsed);
        assert_eq!(first.total_interest_paid, second.total_interest_paid);
    }
}

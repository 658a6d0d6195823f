//! Finance Sim - personal finance simulation engine
//!
//! This library provides:
//! - Month-by-month debt repayment simulation with greedy payoff strategies
//!   (Avalanche and Snowball)
//! - Savings-goal time estimation via bisection over the compound-growth curve
//! - Batch scenario framework for comparing strategies across portfolios

pub mod debt;
pub mod savings;
pub mod scenario;
pub mod simulator;

// Re-export commonly used types
pub use debt::Debt;
pub use savings::{SavingsError, SavingsPlan};
pub use scenario::{ScenarioRunner, StrategyComparison};
pub use simulator::{
    DebtSimulator, SimulationOutcome, SimulationResult, SimulatorConfig, Strategy,
};

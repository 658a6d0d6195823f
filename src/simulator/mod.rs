//! Debt repayment simulation engine

mod engine;
mod results;
mod state;

pub use engine::{DebtSimulator, SimulatorConfig, Strategy, DEFAULT_MAX_MONTHS, PAYOFF_THRESHOLD};
pub use results::{
    MonthRow, PayoffRecord, SimulationOutcome, SimulationResult, SimulationSummary,
};
pub use state::SimulationState;

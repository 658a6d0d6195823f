//! Debt data structures and portfolio loading

mod data;
pub mod loader;

pub use data::{Debt, MONTHS_PER_YEAR, PAYOFF_EPSILON};
pub use loader::{load_debts, load_debts_from_reader};

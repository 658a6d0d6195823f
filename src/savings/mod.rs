//! Savings-goal time estimation via bisection search
//!
//! Given an initial principal, a level annual contribution, an annual rate,
//! and a target amount, finds the minimal time at which the compounded
//! balance meets the target. The balance curve is monotone non-decreasing in
//! time for non-negative contribution and rate, which is what makes the
//! bisection valid; it converges in O(log((high - low) / precision)) steps.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rates below this magnitude use the linear contribution formula to avoid
/// dividing by a near-zero rate
pub const RATE_EPSILON: f64 = 1e-10;

/// Default search precision: one month, expressed in years
pub const DEFAULT_PRECISION_YEARS: f64 = 1.0 / 12.0;

/// Generous floor for the bisection upper bound, in years. Keeps the true
/// answer inside the initial bracket even when the heuristic estimate is low.
const MIN_UPPER_BOUND_YEARS: f64 = 100.0;

/// Failure modes of the goal estimation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SavingsError {
    /// No contributions and no interest can close the gap to the target
    #[error(
        "target ${target:.2} is unreachable from ${balance:.2}: no contributions and no growth"
    )]
    UnreachableGoal { target: f64, balance: f64 },
}

/// Immutable savings-goal parameters
///
/// Every query is a pure function of these five values; instances are plain
/// copyable data with no hidden state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SavingsPlan {
    /// Starting balance
    pub initial_principal: f64,

    /// Amount contributed each year
    pub annual_contribution: f64,

    /// Annual interest rate as a decimal (0.05 = 5%)
    pub annual_rate: f64,

    /// Savings goal
    pub target_amount: f64,

    /// Convergence tolerance for the time search, in years
    pub precision: f64,
}

impl SavingsPlan {
    /// New plan with monthly precision
    pub fn new(
        initial_principal: f64,
        annual_contribution: f64,
        annual_rate: f64,
        target_amount: f64,
    ) -> Self {
        Self {
            initial_principal,
            annual_contribution,
            annual_rate,
            target_amount,
            precision: DEFAULT_PRECISION_YEARS,
        }
    }

    /// Override the search precision
    pub fn with_precision(mut self, precision: f64) -> Self {
        self.precision = precision;
        self
    }

    /// Balance after `years` of compound growth with level contributions.
    ///
    /// F(t) = P(1+r)^t + C * ((1+r)^t - 1) / r, falling back to the linear
    /// form C * t when the rate is effectively zero. Times at or below zero
    /// return the initial principal unchanged.
    pub fn balance_at(&self, years: f64) -> f64 {
        if years <= 0.0 {
            return self.initial_principal;
        }

        let growth = (1.0 + self.annual_rate).powf(years);
        let principal_growth = self.initial_principal * growth;

        let contribution_growth = if self.annual_rate.abs() < RATE_EPSILON {
            self.annual_contribution * years
        } else {
            self.annual_contribution * (growth - 1.0) / self.annual_rate
        };

        principal_growth + contribution_growth
    }

    /// Minimal time, in years, at which the balance meets the target.
    ///
    /// Bisection over [0, upper bound], maintaining the invariant
    /// `balance_at(low) < target <= balance_at(high)`. The returned value is
    /// the upper end of the final bracket, so the target is met, not merely
    /// approached.
    pub fn years_to_target(&self) -> Result<f64, SavingsError> {
        if self.initial_principal >= self.target_amount {
            return Ok(0.0);
        }

        // Without contributions, a positive rate compounds nothing out of a
        // non-positive balance, so that case is just as unreachable.
        if self.annual_contribution <= 0.0
            && (self.annual_rate <= 0.0 || self.initial_principal <= 0.0)
        {
            return Err(SavingsError::UnreachableGoal {
                target: self.target_amount,
                balance: self.initial_principal,
            });
        }

        let mut low = 0.0_f64;
        let mut high = self.upper_bound_years();

        while high - low > self.precision {
            let mid = (low + high) / 2.0;
            if self.balance_at(mid) < self.target_amount {
                low = mid;
            } else {
                high = mid;
            }
        }

        Ok(high)
    }

    /// Pessimistic upper bound for the search: 1.5x the no-interest time to
    /// close the deficit when contributions exist, otherwise a doubling-time
    /// estimate from the closed-form inversion. Floored at 100 years.
    fn upper_bound_years(&self) -> f64 {
        let deficit = self.target_amount - self.initial_principal;
        if deficit <= 0.0 {
            return 0.0;
        }

        if self.annual_contribution > 0.0 {
            (deficit / self.annual_contribution * 1.5).max(MIN_UPPER_BOUND_YEARS)
        } else {
            ((self.target_amount / self.initial_principal).ln() / (1.0 + self.annual_rate).ln())
                .max(MIN_UPPER_BOUND_YEARS)
        }
    }
}

/// Format fractional years as "X years and Y months"
pub fn format_years_and_months(years: f64) -> String {
    let mut whole_years = years as u32;
    let mut months = ((years - whole_years as f64) * 12.0).round() as u32;

    // 11.99 months rounds up into the next year
    if months >= 12 {
        whole_years += 1;
        months = 0;
    }

    match (whole_years, months) {
        (0, m) => format!("{} months", m),
        (y, 0) => format!("{} years", y),
        (y, m) => format!("{} years and {} months", y, m),
    }
}

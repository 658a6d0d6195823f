//! Debt entity: one loan-like obligation with a balance and an annual rate

use std::fmt;

/// Balances at or below this are treated as fully paid off.
///
/// Repeated floating-point payments rarely land exactly on zero.
pub const PAYOFF_EPSILON: f64 = 1e-9;

/// Number of compounding periods per year (monthly model)
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// A single debt with a current balance and a fixed annual interest rate
///
/// The principal is mutated only through [`Debt::apply_payment`]. The terms
/// at creation are snapshotted so payoff records can identify the debt after
/// its balance has been driven to zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Debt {
    /// Current principal balance, non-negative
    principal: f64,

    /// Annual interest rate as a decimal (0.18 = 18%)
    annual_rate: f64,

    /// Principal at creation
    original_principal: f64,

    /// Rate at creation
    original_rate: f64,
}

impl Debt {
    /// Create a new debt with the given starting principal and annual rate
    pub fn new(principal: f64, annual_rate: f64) -> Self {
        Self {
            principal,
            annual_rate,
            original_principal: principal,
            original_rate: annual_rate,
        }
    }

    /// Interest accrued on the current balance over one month
    pub fn monthly_interest(&self) -> f64 {
        self.principal * (self.annual_rate / MONTHS_PER_YEAR)
    }

    /// Apply a payment: accrue one month of interest into the principal
    /// (compounding), then deduct the payment.
    ///
    /// Returns the excess when the payment clears the debt, otherwise 0.
    /// The accrue-then-pay ordering means reported interest always reflects
    /// the pre-payment balance.
    pub fn apply_payment(&mut self, payment: f64) -> f64 {
        let interest = self.monthly_interest();
        self.principal += interest;

        if payment >= self.principal {
            let excess = payment - self.principal;
            self.principal = 0.0;
            excess
        } else {
            self.principal -= payment;
            0.0
        }
    }

    /// Whether the balance has been driven to zero (within tolerance)
    pub fn is_paid_off(&self) -> bool {
        self.principal <= PAYOFF_EPSILON
    }

    /// Current principal balance
    pub fn principal(&self) -> f64 {
        self.principal
    }

    /// Annual interest rate as a decimal
    pub fn annual_rate(&self) -> f64 {
        self.annual_rate
    }

    /// Principal at creation
    pub fn original_principal(&self) -> f64 {
        self.original_principal
    }

    /// Annual rate at creation
    pub fn original_rate(&self) -> f64 {
        self.original_rate
    }
}

impl fmt::Display for Debt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Debt[Principal: ${:.2}, Rate: {:.2}%]",
            self.original_principal,
            self.original_rate * 100.0
        )
    }
}

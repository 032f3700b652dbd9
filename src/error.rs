//! Error types for debt simulation
//!
//! Every failure is a deterministic validation outcome: the engine never
//! retries or falls back to a partial result.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised by [`simulate`](crate::simulate) and [`compare`](crate::compare).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// An input value violates a documented constraint.
    #[error("Invalid input{}: {}", debt_label(.debt_id), .violation)]
    InvalidInput {
        /// Offending debt, `None` for config-level violations
        debt_id: Option<String>,
        /// What was wrong with it
        violation: InputViolation,
    },

    /// The month ceiling was reached with debts still open.
    #[error("No full payoff after {months} months: {open_debts} debt(s) still open, {outstanding} outstanding")]
    NonConvergent {
        /// Months simulated before giving up
        months: u32,
        /// Number of debts with a positive balance at the ceiling
        open_debts: usize,
        /// Sum of the open balances at the ceiling
        outstanding: Decimal,
    },
}

fn debt_label(debt_id: &Option<String>) -> String {
    match debt_id {
        Some(id) => format!(" for debt '{}'", id),
        None => String::new(),
    }
}

/// Detail of an [`SimulationError::InvalidInput`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputViolation {
    #[error("debt identifier is empty")]
    EmptyId,

    #[error("debt identifier appears more than once")]
    DuplicateId,

    #[error("annual interest rate {0}% is negative")]
    NegativeRate(Decimal),

    #[error("minimum installment {0} must be positive")]
    NonPositiveInstallment(Decimal),

    #[error("extra monthly payment {0} is negative")]
    NegativeExtraPayment(Decimal),

    #[error("month ceiling must be at least 1")]
    ZeroMonthCeiling,

    #[error("month ceiling '{0}' is not a month count")]
    InvalidMonthCeiling(String),

    #[error("minimum installment {installment} does not exceed first-month interest {interest}; increase the installment")]
    InstallmentBelowInterest {
        installment: Decimal,
        interest: Decimal,
    },

    #[error("required field '{0}' is missing")]
    MissingField(&'static str),

    #[error("unknown debt status '{0}'")]
    UnknownStatus(String),

    #[error("unknown repayment strategy '{0}'")]
    UnknownStrategy(String),
}

impl SimulationError {
    /// Build an input error attributed to a specific debt
    pub fn for_debt(debt_id: impl Into<String>, violation: InputViolation) -> Self {
        SimulationError::InvalidInput {
            debt_id: Some(debt_id.into()),
            violation,
        }
    }

    /// Build an input error not tied to any debt
    pub fn config(violation: InputViolation) -> Self {
        SimulationError::InvalidInput {
            debt_id: None,
            violation,
        }
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, SimulationError::InvalidInput { .. })
    }

    pub fn is_non_convergent(&self) -> bool {
        matches!(self, SimulationError::NonConvergent { .. })
    }
}

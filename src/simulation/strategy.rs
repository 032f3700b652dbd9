//! Repayment strategies and the focus-debt ordering they impose

use crate::error::{InputViolation, SimulationError};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Which open debt receives the extra payment each month
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Smallest balance first; ties by lowest rate, then identifier
    #[default]
    Snowball,
    /// Highest rate first; ties by smallest balance, then identifier
    Avalanche,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::Snowball, Strategy::Avalanche];

    /// Priority ordering: the debt that sorts first is the focus debt
    ///
    /// Total and deterministic as long as identifiers are unique.
    pub fn priority(
        &self,
        a: (&str, Decimal, Decimal),
        b: (&str, Decimal, Decimal),
    ) -> Ordering {
        let (a_id, a_balance, a_rate) = a;
        let (b_id, b_balance, b_rate) = b;
        match self {
            Strategy::Snowball => a_balance
                .cmp(&b_balance)
                .then_with(|| a_rate.cmp(&b_rate))
                .then_with(|| a_id.cmp(b_id)),
            Strategy::Avalanche => b_rate
                .cmp(&a_rate)
                .then_with(|| a_balance.cmp(&b_balance))
                .then_with(|| a_id.cmp(b_id)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Snowball => "snowball",
            Strategy::Avalanche => "avalanche",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "snowball" => Ok(Strategy::Snowball),
            "avalanche" => Ok(Strategy::Avalanche),
            other => Err(SimulationError::config(InputViolation::UnknownStrategy(
                other.to_string(),
            ))),
        }
    }
}

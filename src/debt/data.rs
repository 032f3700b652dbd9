//! Debt data structures: the validated simulation input and the stored record

use crate::error::{InputViolation, SimulationError};
use crate::simulation::Strategy;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a debt
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DebtStatus {
    /// Open and being repaid on the original terms
    #[default]
    Active,
    /// Open, repaid on renegotiated terms
    Negotiated,
    /// Settled; never simulated
    Paid,
}

impl DebtStatus {
    /// Whether debts with this status take part in a repayment simulation
    pub fn participates(&self) -> bool {
        matches!(self, DebtStatus::Active | DebtStatus::Negotiated)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DebtStatus::Active => "active",
            DebtStatus::Negotiated => "negotiated",
            DebtStatus::Paid => "paid",
        }
    }
}

impl fmt::Display for DebtStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DebtStatus {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(DebtStatus::Active),
            "negotiated" => Ok(DebtStatus::Negotiated),
            "paid" => Ok(DebtStatus::Paid),
            other => Err(SimulationError::config(InputViolation::UnknownStatus(
                other.to_string(),
            ))),
        }
    }
}

/// A debt snapshot as consumed by the simulator
///
/// Immutable for the duration of a run. Amounts are currency units, the rate is
/// a percentage per year (15.2 means 15.2%/year).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Debt {
    /// Identifier, unique within one simulation set
    pub id: String,

    /// Current outstanding balance
    pub principal_remaining: Decimal,

    /// Annual interest rate in percent
    pub annual_interest_rate: Decimal,

    /// Contractual minimum monthly payment
    pub minimum_installment: Decimal,

    #[serde(default)]
    pub status: DebtStatus,
}

impl Debt {
    /// Create an active debt
    pub fn new(
        id: impl Into<String>,
        principal_remaining: Decimal,
        annual_interest_rate: Decimal,
        minimum_installment: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            principal_remaining,
            annual_interest_rate,
            minimum_installment,
            status: DebtStatus::Active,
        }
    }

    /// Same debt with a different status
    pub fn with_status(mut self, status: DebtStatus) -> Self {
        self.status = status;
        self
    }

    /// Whether this debt enters a simulation: participating status and a
    /// positive balance (anything else is already paid)
    pub fn is_open(&self) -> bool {
        self.status.participates() && self.principal_remaining > Decimal::ZERO
    }
}

/// A debt row as kept by the record store
///
/// Loosely typed on purpose: every field the simulator needs is optional here
/// and only becomes mandatory in [`DebtRecord::to_debt`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DebtRecord {
    pub id: Option<String>,

    #[serde(default)]
    pub client_id: Option<String>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub institution: Option<String>,

    /// Outstanding amount
    pub total_amount: Option<Decimal>,

    #[serde(default)]
    pub remaining_installments: Option<u32>,

    /// Monthly installment
    pub installment_value: Option<Decimal>,

    /// Annual interest rate in percent
    pub interest_rate: Option<Decimal>,

    #[serde(default)]
    pub due_date: Option<NaiveDate>,

    pub status: Option<String>,

    /// "snowball", "avalanche" or "other"
    #[serde(default)]
    pub payoff_method: Option<String>,

    #[serde(default)]
    pub observations: Option<String>,
}

impl DebtRecord {
    /// Validate the record into a simulation input
    ///
    /// Missing required fields and unknown statuses are rejected, never
    /// defaulted. Range checks on the amounts happen in the simulator.
    pub fn to_debt(&self) -> Result<Debt, SimulationError> {
        let id = match self.id.as_deref().map(str::trim) {
            Some(id) if !id.is_empty() => id.to_string(),
            Some(_) => return Err(SimulationError::config(InputViolation::EmptyId)),
            None => return Err(SimulationError::config(InputViolation::MissingField("id"))),
        };

        let missing = |field| SimulationError::for_debt(id.clone(), InputViolation::MissingField(field));
        let principal_remaining = self.total_amount.ok_or_else(|| missing("total_amount"))?;
        let minimum_installment = self.installment_value.ok_or_else(|| missing("installment_value"))?;
        let annual_interest_rate = self.interest_rate.ok_or_else(|| missing("interest_rate"))?;
        let status = self
            .status
            .as_deref()
            .ok_or_else(|| missing("status"))?
            .parse::<DebtStatus>()
            .map_err(|err| match err {
                SimulationError::InvalidInput { violation, .. } => {
                    SimulationError::for_debt(id.clone(), violation)
                }
                other => other,
            })?;

        Ok(Debt {
            id,
            principal_remaining,
            annual_interest_rate,
            minimum_installment,
            status,
        })
    }

    /// Strategy the client picked for this debt, if it is one we simulate
    pub fn preferred_strategy(&self) -> Option<Strategy> {
        self.payoff_method.as_deref().and_then(|m| m.parse().ok())
    }
}

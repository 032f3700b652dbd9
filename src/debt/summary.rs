//! Portfolio-level figures shown alongside a client's debt list

use super::{Debt, DebtStatus};
use crate::money::saturating_sum;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Headline totals over a client's debts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    /// Outstanding balance summed over every debt, whatever its status
    pub total_balance: Decimal,
    pub active_count: usize,
    pub negotiated_count: usize,
    /// Minimum installments due each month on active debts
    pub monthly_commitment: Decimal,
}

impl PortfolioSummary {
    pub fn from_debts(debts: &[Debt]) -> Self {
        let active = || debts.iter().filter(|d| d.status == DebtStatus::Active);

        Self {
            total_balance: saturating_sum(debts.iter().map(|d| d.principal_remaining)),
            active_count: active().count(),
            negotiated_count: debts
                .iter()
                .filter(|d| d.status == DebtStatus::Negotiated)
                .count(),
            monthly_commitment: saturating_sum(active().map(|d| d.minimum_installment)),
        }
    }
}

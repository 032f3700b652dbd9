//! Simulation output: monthly snapshots, the lazy schedule and summary figures

use super::state::SimulationState;
use super::strategy::Strategy;
use crate::debt::Debt;
use crate::money::saturating_sum;
use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One debt's movement during one month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySnapshot {
    pub debt_id: String,
    pub opening_balance: Decimal,
    pub interest_accrued: Decimal,
    pub payment_applied: Decimal,
    pub closing_balance: Decimal,
    /// Received the extra budget this month
    pub is_focus: bool,
    /// Balance reached zero this month
    pub paid_off: bool,
}

/// Every open debt's snapshot for one simulated month, in strategy priority order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthSchedule {
    /// 1-based month number
    pub month: u32,
    pub focus_debt: String,
    /// Extra budget applied to the focus debt this month
    pub extra_payment: Decimal,
    /// Installments freed by debts retired this month
    pub rolled_over: Decimal,
    pub snapshots: Vec<MonthlySnapshot>,
}

impl MonthSchedule {
    /// Extra budget available from the following month on
    pub fn next_extra_payment(&self) -> Decimal {
        self.extra_payment.saturating_add(self.rolled_over)
    }

    pub fn interest(&self) -> Decimal {
        saturating_sum(self.snapshots.iter().map(|s| s.interest_accrued))
    }

    pub fn payments(&self) -> Decimal {
        saturating_sum(self.snapshots.iter().map(|s| s.payment_applied))
    }

    /// Debts still open after this month, carrying their closing balances
    ///
    /// Together with [`next_extra_payment`](Self::next_extra_payment) these are
    /// the inputs of a fresh run that continues exactly where this month ends.
    /// Terms (rate, installment, status) come from `originals`.
    pub fn resume_debts(&self, originals: &[Debt]) -> Vec<Debt> {
        self.snapshots
            .iter()
            .filter(|s| !s.paid_off)
            .filter_map(|s| {
                originals.iter().find(|d| d.id == s.debt_id).map(|d| Debt {
                    principal_remaining: s.closing_balance,
                    ..d.clone()
                })
            })
            .collect()
    }
}

/// Month-by-month schedule of a completed simulation
///
/// Replays the run on demand, one month per `next()`. Consuming; a fresh
/// `simulate` call is needed to walk it again.
#[derive(Debug)]
pub struct Schedule {
    state: SimulationState,
    strategy: Strategy,
    months: u32,
}

impl Schedule {
    pub(crate) fn new(state: SimulationState, strategy: Strategy, months: u32) -> Self {
        Self {
            state,
            strategy,
            months,
        }
    }
}

impl Iterator for Schedule {
    type Item = MonthSchedule;

    fn next(&mut self) -> Option<MonthSchedule> {
        if self.state.is_settled() || self.state.month >= self.months {
            return None;
        }
        Some(self.state.advance_month(self.strategy))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = if self.state.is_settled() {
            0
        } else {
            self.months.saturating_sub(self.state.month) as usize
        };
        (left, Some(left))
    }
}

impl ExactSizeIterator for Schedule {}

/// Result of one strategy run
#[derive(Debug)]
pub struct SimulationResult {
    pub strategy: Strategy,

    /// Months until every debt reached zero
    pub months_to_payoff: u32,

    /// Interest accrued across all debts and months
    pub total_interest_paid: Decimal,

    /// Every payment applied, principal and interest
    pub total_paid: Decimal,

    /// Debt ids in payoff order
    pub payoff_order: Vec<String>,

    pub schedule: Schedule,
}

impl SimulationResult {
    /// Result for a set with nothing left to pay
    pub(crate) fn settled(strategy: Strategy) -> Self {
        Self {
            strategy,
            months_to_payoff: 0,
            total_interest_paid: Decimal::ZERO,
            total_paid: Decimal::ZERO,
            payoff_order: Vec::new(),
            schedule: Schedule::new(SimulationState::from_debts(&[], Decimal::ZERO), strategy, 0),
        }
    }

    pub fn summary(&self) -> SimulationSummary {
        SimulationSummary {
            strategy: self.strategy,
            months_to_payoff: self.months_to_payoff,
            total_interest_paid: self.total_interest_paid,
            total_paid: self.total_paid,
            payoff_order: self.payoff_order.clone(),
        }
    }
}

/// Serialisable figures of a strategy run, without the schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationSummary {
    pub strategy: Strategy,
    pub months_to_payoff: u32,
    pub total_interest_paid: Decimal,
    pub total_paid: Decimal,
    pub payoff_order: Vec<String>,
}

impl SimulationSummary {
    /// Calendar month in which the last debt is retired, counting `start` as
    /// the month before the first simulated one
    pub fn debt_free_date(&self, start: NaiveDate) -> Option<NaiveDate> {
        start.checked_add_months(Months::new(self.months_to_payoff))
    }

    /// Whole years and remaining months to payoff
    pub fn years_and_months(&self) -> (u32, u32) {
        (self.months_to_payoff / 12, self.months_to_payoff % 12)
    }
}

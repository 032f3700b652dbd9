//! Running state of one repayment simulation

use super::schedule::{MonthSchedule, MonthlySnapshot};
use super::strategy::Strategy;
use crate::debt::Debt;
use crate::money::{monthly_interest, round_cents, saturating_sum};
use rust_decimal::Decimal;

/// A debt that still carries a balance
#[derive(Debug, Clone)]
struct OpenDebt {
    id: String,
    balance: Decimal,
    annual_rate: Decimal,
    installment: Decimal,
}

impl OpenDebt {
    fn priority_key(&self) -> (&str, Decimal, Decimal) {
        (&self.id, self.balance, self.annual_rate)
    }
}

/// State of a simulation between months
///
/// Built from already-validated open debts. Cloning before the first month
/// gives an independent replay of the same run.
#[derive(Debug, Clone)]
pub struct SimulationState {
    /// Months simulated so far
    pub month: u32,

    open: Vec<OpenDebt>,

    /// Extra budget for the focus debt, including rolled-over installments
    extra_payment: Decimal,

    pub total_interest: Decimal,
    pub total_paid: Decimal,

    /// Debt ids in the order their balance reached zero
    pub payoff_order: Vec<String>,
}

impl SimulationState {
    pub fn from_debts(debts: &[Debt], extra_payment: Decimal) -> Self {
        Self {
            month: 0,
            open: debts
                .iter()
                .map(|d| OpenDebt {
                    id: d.id.clone(),
                    balance: d.principal_remaining,
                    annual_rate: d.annual_interest_rate,
                    installment: d.minimum_installment,
                })
                .collect(),
            extra_payment,
            total_interest: Decimal::ZERO,
            total_paid: Decimal::ZERO,
            payoff_order: Vec::new(),
        }
    }

    /// No debt left open
    pub fn is_settled(&self) -> bool {
        self.open.is_empty()
    }

    pub fn open_count(&self) -> usize {
        self.open.len()
    }

    /// Sum of the open balances
    pub fn outstanding(&self) -> Decimal {
        saturating_sum(self.open.iter().map(|d| d.balance))
    }

    /// Simulate one calendar month and return its snapshots
    ///
    /// Accrue interest on every open debt, rank them by the strategy, pay the
    /// minimum on all of them plus the extra budget on the first, then retire
    /// zero balances and roll their installments into the extra budget.
    pub fn advance_month(&mut self, strategy: Strategy) -> MonthSchedule {
        self.month += 1;
        let extra_payment = self.extra_payment;

        let mut entries: Vec<(OpenDebt, MonthlySnapshot)> = self
            .open
            .drain(..)
            .map(|mut debt| {
                let opening = debt.balance;
                let interest = monthly_interest(opening, debt.annual_rate);
                debt.balance = opening.saturating_add(interest);
                let snapshot = MonthlySnapshot {
                    debt_id: debt.id.clone(),
                    opening_balance: opening,
                    interest_accrued: interest,
                    payment_applied: Decimal::ZERO,
                    closing_balance: debt.balance,
                    is_focus: false,
                    paid_off: false,
                };
                (debt, snapshot)
            })
            .collect();

        // Focus selection sees post-accrual balances
        entries.sort_by(|(a, _), (b, _)| strategy.priority(a.priority_key(), b.priority_key()));

        let mut rolled_over = Decimal::ZERO;
        for (rank, (debt, snapshot)) in entries.iter_mut().enumerate() {
            let due = if rank == 0 {
                debt.installment.saturating_add(extra_payment)
            } else {
                debt.installment
            };
            // Capped at the balance; any excess is discarded
            let payment = round_cents(due).min(debt.balance);
            debt.balance -= payment;

            snapshot.payment_applied = payment;
            snapshot.closing_balance = debt.balance;
            snapshot.is_focus = rank == 0;

            self.total_interest = self.total_interest.saturating_add(snapshot.interest_accrued);
            self.total_paid = self.total_paid.saturating_add(payment);

            if debt.balance.is_zero() {
                snapshot.paid_off = true;
                rolled_over = rolled_over.saturating_add(debt.installment);
                self.payoff_order.push(debt.id.clone());
                log::debug!(
                    "month {}: debt '{}' paid off, {} rolls into the extra budget",
                    self.month,
                    debt.id,
                    debt.installment
                );
            }
        }
        self.extra_payment = self.extra_payment.saturating_add(rolled_over);

        let focus_debt = entries
            .first()
            .map(|(debt, _)| debt.id.clone())
            .unwrap_or_default();

        let mut snapshots = Vec::with_capacity(entries.len());
        for (debt, snapshot) in entries {
            if !snapshot.paid_off {
                self.open.push(debt);
            }
            snapshots.push(snapshot);
        }

        MonthSchedule {
            month: self.month,
            focus_debt,
            extra_payment,
            rolled_over,
            snapshots,
        }
    }
}

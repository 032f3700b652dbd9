//! Core repayment engine: input validation and the monthly payoff loop

use super::schedule::{Schedule, SimulationResult};
use super::state::SimulationState;
use super::strategy::Strategy;
use crate::debt::Debt;
use crate::error::{InputViolation, SimulationError};
use crate::money::{monthly_interest, saturating_sum};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Default iteration ceiling: 100 years of monthly payments
pub const DEFAULT_MAX_MONTHS: u32 = 1200;

/// Configuration for a simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Budget beyond the minimums, applied each month to the focus debt
    pub extra_monthly_payment: Decimal,

    pub strategy: Strategy,

    /// Months simulated before giving up with `NonConvergent`
    #[serde(default = "default_max_months")]
    pub max_months: u32,
}

/// Environment variable that overrides the month ceiling in the binaries
pub const MAX_MONTHS_ENV: &str = "MAX_SIMULATION_MONTHS";

fn default_max_months() -> u32 {
    DEFAULT_MAX_MONTHS
}

/// Parse a month ceiling override; `None` gives the default
pub fn parse_max_months(value: Option<&str>) -> Result<u32, SimulationError> {
    let Some(value) = value else {
        return Ok(DEFAULT_MAX_MONTHS);
    };
    match value.trim().parse::<u32>() {
        Ok(0) => Err(SimulationError::config(InputViolation::ZeroMonthCeiling)),
        Ok(months) => Ok(months),
        Err(_) => Err(SimulationError::config(InputViolation::InvalidMonthCeiling(
            value.to_string(),
        ))),
    }
}

/// Month ceiling from `MAX_SIMULATION_MONTHS`, falling back to the default
pub fn max_months_from_env() -> Result<u32, SimulationError> {
    parse_max_months(std::env::var(MAX_MONTHS_ENV).ok().as_deref())
}

impl SimulationConfig {
    pub fn new(strategy: Strategy, extra_monthly_payment: Decimal) -> Self {
        Self {
            extra_monthly_payment,
            strategy,
            max_months: DEFAULT_MAX_MONTHS,
        }
    }

    pub fn with_max_months(mut self, max_months: u32) -> Self {
        self.max_months = max_months;
        self
    }

    /// Same config with a different strategy
    pub fn with_strategy(&self, strategy: Strategy) -> Self {
        Self {
            strategy,
            ..self.clone()
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new(Strategy::Snowball, Decimal::ZERO)
    }
}

/// Repayment simulator bound to one configuration
#[derive(Debug, Clone)]
pub struct RepaymentEngine {
    config: SimulationConfig,
}

impl RepaymentEngine {
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Run the simulation over `debts`
    ///
    /// Debts that are paid or carry no balance are dropped first; an empty
    /// remainder yields a zero-month, zero-interest result.
    pub fn simulate(&self, debts: &[Debt]) -> Result<SimulationResult, SimulationError> {
        let strategy = self.config.strategy;
        let open = self.validate(debts)?;
        if open.is_empty() {
            log::debug!("no open debts, nothing to simulate");
            return Ok(SimulationResult::settled(strategy));
        }

        let initial = SimulationState::from_debts(&open, self.config.extra_monthly_payment);
        let mut state = initial.clone();

        while !state.is_settled() {
            if state.month >= self.config.max_months {
                log::warn!(
                    "{} simulation hit the {}-month ceiling with {} debt(s) open",
                    strategy,
                    self.config.max_months,
                    state.open_count()
                );
                return Err(SimulationError::NonConvergent {
                    months: state.month,
                    open_debts: state.open_count(),
                    outstanding: state.outstanding(),
                });
            }

            let month = state.advance_month(strategy);
            log::trace!(
                "month {}: focus '{}', interest {}, paid {}",
                month.month,
                month.focus_debt,
                month.interest(),
                month.payments()
            );
        }

        log::debug!(
            "{} payoff of {} debt(s) in {} months, interest {}",
            strategy,
            open.len(),
            state.month,
            state.total_interest
        );

        Ok(SimulationResult {
            strategy,
            months_to_payoff: state.month,
            total_interest_paid: state.total_interest,
            total_paid: state.total_paid,
            payoff_order: state.payoff_order,
            schedule: Schedule::new(initial, strategy, state.month),
        })
    }

    /// Check the config and every open debt, returning the open debts
    fn validate(&self, debts: &[Debt]) -> Result<Vec<Debt>, SimulationError> {
        let extra = self.config.extra_monthly_payment;
        if extra < Decimal::ZERO {
            return Err(SimulationError::config(InputViolation::NegativeExtraPayment(extra)));
        }
        if self.config.max_months == 0 {
            return Err(SimulationError::config(InputViolation::ZeroMonthCeiling));
        }

        let open: Vec<Debt> = debts.iter().filter(|d| d.is_open()).cloned().collect();

        let mut seen = HashSet::new();
        for debt in &open {
            if debt.id.trim().is_empty() {
                return Err(SimulationError::config(InputViolation::EmptyId));
            }
            if !seen.insert(debt.id.as_str()) {
                return Err(SimulationError::for_debt(&debt.id, InputViolation::DuplicateId));
            }
            if debt.annual_interest_rate < Decimal::ZERO {
                return Err(SimulationError::for_debt(
                    &debt.id,
                    InputViolation::NegativeRate(debt.annual_interest_rate),
                ));
            }
            if debt.minimum_installment <= Decimal::ZERO {
                return Err(SimulationError::for_debt(
                    &debt.id,
                    InputViolation::NonPositiveInstallment(debt.minimum_installment),
                ));
            }
        }

        // Most that could ever be paid towards one debt in a month: its own
        // installment plus the extra budget plus every other installment
        // once rolled over.
        let capacity =
            extra.saturating_add(saturating_sum(open.iter().map(|d| d.minimum_installment)));

        for debt in &open {
            let interest = monthly_interest(debt.principal_remaining, debt.annual_interest_rate);
            if debt.minimum_installment <= interest && capacity <= interest {
                return Err(SimulationError::for_debt(
                    &debt.id,
                    InputViolation::InstallmentBelowInterest {
                        installment: debt.minimum_installment,
                        interest,
                    },
                ));
            }
        }

        Ok(open)
    }
}

/// Simulate repayment of `debts` under `config`
pub fn simulate(debts: &[Debt], config: &SimulationConfig) -> Result<SimulationResult, SimulationError> {
    RepaymentEngine::new(config.clone()).simulate(debts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::debt::DebtStatus;
    use crate::simulation::MonthSchedule;
    use rust_decimal_macros::dec;

    fn config(strategy: Strategy, extra: Decimal) -> SimulationConfig {
        SimulationConfig::new(strategy, extra)
    }

    /// Three debts where the two strategies pick different focus debts
    fn mixed_debts() -> Vec<Debt> {
        vec![
            Debt::new("card", dec!(3000), dec!(24), dec!(90)),
            Debt::new("car", dec!(12000), dec!(6), dec!(300)),
            Debt::new("loan", dec!(1500), dec!(9), dec!(60)),
        ]
    }

    #[test]
    fn test_single_debt_payoff() {
        let debts = vec![Debt::new("a", dec!(1000), dec!(12), dec!(100))];
        let result = simulate(&debts, &SimulationConfig::default()).unwrap();

        assert_eq!(result.months_to_payoff, 11);
        assert_eq!(result.total_interest_paid, dec!(58.98));
        assert_eq!(result.total_paid, dec!(1058.98));
        assert_eq!(result.payoff_order, vec!["a".to_string()]);

        let months: Vec<MonthSchedule> = result.schedule.collect();
        assert_eq!(months.len(), 11);
        let last = &months[10].snapshots[0];
        assert!(last.paid_off);
        assert_eq!(last.closing_balance, Decimal::ZERO);
        assert!(last.payment_applied < dec!(100));
    }

    #[test]
    fn test_parse_max_months() {
        assert_eq!(parse_max_months(None).unwrap(), DEFAULT_MAX_MONTHS);
        assert_eq!(parse_max_months(Some("360")).unwrap(), 360);
        assert_eq!(parse_max_months(Some(" 24 ")).unwrap(), 24);
        assert_eq!(
            parse_max_months(Some("0")).unwrap_err(),
            SimulationError::config(InputViolation::ZeroMonthCeiling)
        );
        assert_eq!(
            parse_max_months(Some("ten years")).unwrap_err(),
            SimulationError::config(InputViolation::InvalidMonthCeiling("ten years".to_string()))
        );
    }

    #[test]
    fn test_huge_amounts_saturate() {
        let debts = vec![Debt::new("a", dec!(1000), dec!(12), dec!(100))];
        let result = simulate(&debts, &config(Strategy::Avalanche, Decimal::MAX)).unwrap();
        assert_eq!(result.months_to_payoff, 1);
        assert_eq!(result.total_interest_paid, dec!(10.00));
        assert_eq!(result.total_paid, dec!(1010.00));

        let month = result.schedule.last().unwrap();
        assert_eq!(month.next_extra_payment(), Decimal::MAX);

        let debts = vec![
            Debt::new("a", dec!(1000), dec!(12), Decimal::MAX),
            Debt::new("b", dec!(2000), dec!(6), Decimal::MAX),
        ];
        let result = simulate(&debts, &config(Strategy::Snowball, dec!(50))).unwrap();
        assert_eq!(result.months_to_payoff, 1);
        assert_eq!(result.total_interest_paid, dec!(20.00));
        assert_eq!(result.total_paid, dec!(3020.00));
        assert_eq!(result.payoff_order, vec!["a", "b"]);
    }

    #[test]
    fn test_schedule_reconciles_to_the_cent() {
        let result = simulate(&mixed_debts(), &config(Strategy::Avalanche, dec!(100))).unwrap();
        let total_interest = result.total_interest_paid;
        let total_paid = result.total_paid;

        let mut interest = Decimal::ZERO;
        let mut paid = Decimal::ZERO;
        for month in result.schedule {
            for snap in &month.snapshots {
                assert_eq!(
                    snap.closing_balance,
                    snap.opening_balance + snap.interest_accrued - snap.payment_applied
                );
                assert!(snap.closing_balance >= Decimal::ZERO);
                interest += snap.interest_accrued;
                paid += snap.payment_applied;
            }
        }
        assert_eq!(interest, total_interest);
        assert_eq!(paid, total_paid);
        // Principal plus interest is exactly what was paid
        assert_eq!(paid, dec!(16500) + interest);
    }

    #[test]
    fn test_empty_and_paid_only_sets() {
        let result = simulate(&[], &config(Strategy::Avalanche, dec!(50))).unwrap();
        assert_eq!(result.months_to_payoff, 0);
        assert_eq!(result.total_interest_paid, Decimal::ZERO);
        assert!(result.payoff_order.is_empty());
        assert_eq!(result.schedule.count(), 0);

        let debts = vec![
            Debt::new("done", dec!(500), dec!(10), dec!(50)).with_status(DebtStatus::Paid),
            Debt::new("zero", Decimal::ZERO, dec!(10), dec!(50)),
        ];
        let result = simulate(&debts, &SimulationConfig::default()).unwrap();
        assert_eq!(result.months_to_payoff, 0);
        assert!(result.payoff_order.is_empty());
    }

    #[test]
    fn test_paid_debts_do_not_participate() {
        let debts = vec![
            Debt::new("a", dec!(1000), dec!(12), dec!(100)),
            // Invalid terms, but excluded before validation
            Debt::new("b", dec!(9999), dec!(-5), dec!(0)).with_status(DebtStatus::Paid),
        ];
        let result = simulate(&debts, &SimulationConfig::default()).unwrap();
        assert_eq!(result.payoff_order, vec!["a".to_string()]);
        assert_eq!(result.months_to_payoff, 11);
    }

    #[test]
    fn test_negotiated_debts_participate() {
        let debts = vec![
            Debt::new("a", dec!(1000), dec!(12), dec!(100)).with_status(DebtStatus::Negotiated),
        ];
        let result = simulate(&debts, &SimulationConfig::default()).unwrap();
        assert_eq!(result.months_to_payoff, 11);
    }

    #[test]
    fn test_installment_below_interest_rejected() {
        // 5000 at 36% accrues 150.00 in month one
        let debts = vec![Debt::new("card", dec!(5000), dec!(36), dec!(120))];
        let err = simulate(&debts, &SimulationConfig::default()).unwrap_err();
        assert_eq!(
            err,
            SimulationError::for_debt(
                "card",
                InputViolation::InstallmentBelowInterest {
                    installment: dec!(120),
                    interest: dec!(150.00),
                }
            )
        );

        // Installment exactly equal to interest never shrinks the balance either
        let debts = vec![Debt::new("card", dec!(5000), dec!(36), dec!(150))];
        assert!(simulate(&debts, &SimulationConfig::default())
            .unwrap_err()
            .is_invalid_input());
    }

    #[test]
    fn test_short_installment_accepted_when_rollover_can_cover_it() {
        // Mortgage minimum (1200) is below its 1275.00 interest until the
        // card's 450 rolls over onto it
        let debts = vec![
            Debt::new("debt-1", dec!(8500), dec!(15.2), dec!(450)),
            Debt::new("debt-2", dec!(180000), dec!(8.5), dec!(1200)),
        ];
        let result = simulate(&debts, &SimulationConfig::default()).unwrap();
        assert_eq!(result.months_to_payoff, 237);
        assert_eq!(result.total_interest_paid, dec!(202014.82));
        assert_eq!(result.payoff_order, vec!["debt-1".to_string(), "debt-2".to_string()]);

        let mut schedule = result.schedule;
        let first = schedule.next().unwrap();
        assert_eq!(first.focus_debt, "debt-1");
        // Mortgage balance grows while it waits for the rollover
        let mortgage = first.snapshots.iter().find(|s| s.debt_id == "debt-2").unwrap();
        assert_eq!(mortgage.closing_balance, dec!(180075.00));
    }

    #[test]
    fn test_extra_payment_covers_short_installment() {
        let debts = vec![Debt::new("card", dec!(5000), dec!(36), dec!(120))];
        let result = simulate(&debts, &config(Strategy::Snowball, dec!(100))).unwrap();
        assert!(result.months_to_payoff > 0);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let cases = vec![
            (
                vec![Debt::new("a", dec!(100), dec!(-1), dec!(10))],
                dec!(0),
                SimulationError::for_debt("a", InputViolation::NegativeRate(dec!(-1))),
            ),
            (
                vec![Debt::new("a", dec!(100), dec!(5), dec!(0))],
                dec!(0),
                SimulationError::for_debt("a", InputViolation::NonPositiveInstallment(dec!(0))),
            ),
            (
                vec![Debt::new("a", dec!(100), dec!(5), dec!(10))],
                dec!(-5),
                SimulationError::config(InputViolation::NegativeExtraPayment(dec!(-5))),
            ),
            (
                vec![
                    Debt::new("a", dec!(100), dec!(5), dec!(10)),
                    Debt::new("a", dec!(200), dec!(5), dec!(10)),
                ],
                dec!(0),
                SimulationError::for_debt("a", InputViolation::DuplicateId),
            ),
            (
                vec![Debt::new(" ", dec!(100), dec!(5), dec!(10))],
                dec!(0),
                SimulationError::config(InputViolation::EmptyId),
            ),
        ];

        for (debts, extra, expected) in cases {
            let err = simulate(&debts, &config(Strategy::Avalanche, extra)).unwrap_err();
            assert_eq!(err, expected);
        }

        let debts = vec![Debt::new("a", dec!(100), dec!(5), dec!(10))];
        let err = simulate(&debts, &SimulationConfig::default().with_max_months(0)).unwrap_err();
        assert_eq!(err, SimulationError::config(InputViolation::ZeroMonthCeiling));
    }

    #[test]
    fn test_ceiling_reports_non_convergence() {
        let debts = vec![Debt::new("a", dec!(1000), dec!(12), dec!(100))];
        let err = simulate(&debts, &SimulationConfig::default().with_max_months(5)).unwrap_err();
        match err {
            SimulationError::NonConvergent {
                months,
                open_debts,
                outstanding,
            } => {
                assert_eq!(months, 5);
                assert_eq!(open_debts, 1);
                assert!(outstanding > Decimal::ZERO);
            }
            other => panic!("expected NonConvergent, got {:?}", other),
        }
    }

    #[test]
    fn test_strategies_diverge_on_mixed_debts() {
        let snowball = simulate(&mixed_debts(), &config(Strategy::Snowball, dec!(100))).unwrap();
        let avalanche = simulate(&mixed_debts(), &config(Strategy::Avalanche, dec!(100))).unwrap();

        assert_eq!(snowball.payoff_order, vec!["loan", "card", "car"]);
        assert_eq!(avalanche.payoff_order, vec!["card", "loan", "car"]);
        assert_eq!(snowball.months_to_payoff, 35);
        assert_eq!(avalanche.months_to_payoff, 35);
        assert_eq!(snowball.total_interest_paid, dec!(2258.29));
        assert_eq!(avalanche.total_interest_paid, dec!(2044.34));
    }

    #[test]
    fn test_focus_follows_strategy_each_month() {
        let result = simulate(&mixed_debts(), &config(Strategy::Avalanche, dec!(100))).unwrap();
        for month in result.schedule {
            let focus = &month.snapshots[0];
            assert!(focus.is_focus);
            assert_eq!(focus.debt_id, month.focus_debt);
            assert!(month.snapshots[1..].iter().all(|s| !s.is_focus));
        }

        let mut schedule = simulate(&mixed_debts(), &config(Strategy::Snowball, dec!(100)))
            .unwrap()
            .schedule;
        assert_eq!(schedule.next().unwrap().focus_debt, "loan");
    }

    #[test]
    fn test_schedule_size_is_exact() {
        let result = simulate(&mixed_debts(), &config(Strategy::Snowball, dec!(0))).unwrap();
        let months = result.months_to_payoff as usize;
        let mut schedule = result.schedule;
        assert_eq!(schedule.len(), months);
        schedule.next();
        assert_eq!(schedule.len(), months - 1);
    }

    #[test]
    fn test_more_extra_never_slower_on_mixed_debts() {
        for strategy in Strategy::ALL {
            let mut prev: Option<(u32, Decimal)> = None;
            for extra in [dec!(0), dec!(50), dec!(100), dec!(300), dec!(1000)] {
                let result = simulate(&mixed_debts(), &config(strategy, extra)).unwrap();
                if let Some((months, interest)) = prev {
                    assert!(result.months_to_payoff <= months);
                    assert!(result.total_interest_paid <= interest);
                }
                prev = Some((result.months_to_payoff, result.total_interest_paid));
            }
        }
    }

    #[test]
    fn test_resume_reproduces_tail() {
        let debts = mixed_debts();
        let cfg = config(Strategy::Snowball, dec!(100));
        let full = simulate(&debts, &cfg).unwrap();
        let full_summary = full.summary();
        let months: Vec<MonthSchedule> = full.schedule.collect();

        for k in [1usize, 6, 12, 20, 34] {
            let at = &months[k - 1];
            let resumed_cfg = config(Strategy::Snowball, at.next_extra_payment());
            let tail = simulate(&at.resume_debts(&debts), &resumed_cfg).unwrap();

            let interest_so_far: Decimal = months[..k].iter().map(|m| m.interest()).sum();
            let paid_so_far = months[..k]
                .iter()
                .flat_map(|m| &m.snapshots)
                .filter(|s| s.paid_off)
                .count();

            assert_eq!(tail.months_to_payoff as usize, months.len() - k);
            assert_eq!(tail.total_interest_paid, full_summary.total_interest_paid - interest_so_far);
            assert_eq!(tail.payoff_order[..], full_summary.payoff_order[paid_so_far..]);

            let tail_months: Vec<MonthSchedule> = tail.schedule.collect();
            for (resumed, original) in tail_months.iter().zip(&months[k..]) {
                assert_eq!(resumed.snapshots, original.snapshots);
                assert_eq!(resumed.focus_debt, original.focus_debt);
            }
        }
    }

    mod properties {
        use super::super::*;
        use crate::money::round_cents;
        use crate::simulation::{MonthSchedule, MonthlySnapshot};
        use proptest::collection::vec as prop_vec;
        use proptest::strategy::Strategy as _;
        use proptest::{prop_assert, prop_assert_eq, proptest};
        use rust_decimal_macros::dec;
        use std::cmp::Ordering;

        /// Balance in cents, rate in basis points of a percent, margin in cents
        fn debt_terms() -> impl proptest::strategy::Strategy<Value = (i64, i64, i64)> {
            (10_000i64..5_000_000, 0i64..3_000, 100i64..50_000)
        }

        /// Installment that always retires the balance within a few years
        fn installment_for(balance: Decimal, rate: Decimal, margin: Decimal) -> Decimal {
            monthly_interest(balance, rate) + round_cents(balance / dec!(40)) + margin
        }

        fn build_debts(terms: &[(i64, i64, i64)]) -> Vec<Debt> {
            terms
                .iter()
                .enumerate()
                .map(|(i, &(balance, rate, margin))| {
                    let balance = Decimal::new(balance, 2);
                    let rate = Decimal::new(rate, 2);
                    let installment = installment_for(balance, rate, Decimal::new(margin, 2));
                    Debt::new(format!("d{:02}", i), balance, rate, installment)
                })
                .collect()
        }

        fn pick(avalanche: bool) -> Strategy {
            if avalanche {
                Strategy::Avalanche
            } else {
                Strategy::Snowball
            }
        }

        proptest! {
            #![proptest_config(proptest::test_runner::Config::with_cases(64))]

            #[test]
            fn payoff_order_covers_every_debt_once(
                terms in prop_vec(debt_terms(), 1..8),
                extra in 0i64..100_000,
                avalanche in proptest::bool::ANY,
            ) {
                let debts = build_debts(&terms);
                let cfg = SimulationConfig::new(pick(avalanche), Decimal::new(extra, 2));
                let result = simulate(&debts, &cfg).unwrap();

                prop_assert!(result.months_to_payoff <= DEFAULT_MAX_MONTHS);
                prop_assert!(result.total_interest_paid >= Decimal::ZERO);

                let mut order = result.payoff_order.clone();
                order.sort();
                let mut ids: Vec<String> = debts.iter().map(|d| d.id.clone()).collect();
                ids.sort();
                prop_assert_eq!(order, ids);
            }

            #[test]
            fn focus_is_top_priority_every_month(
                terms in prop_vec(debt_terms(), 2..6),
                extra in 0i64..50_000,
                avalanche in proptest::bool::ANY,
            ) {
                let debts = build_debts(&terms);
                let strategy = pick(avalanche);
                let result = simulate(&debts, &SimulationConfig::new(strategy, Decimal::new(extra, 2))).unwrap();
                let rate_of = |id: &str| {
                    debts.iter().find(|d| d.id == id).map(|d| d.annual_interest_rate).unwrap()
                };

                for month in result.schedule {
                    let key = |s: &MonthlySnapshot| {
                        (s.debt_id.clone(), s.opening_balance + s.interest_accrued, rate_of(&s.debt_id))
                    };
                    let focus = key(&month.snapshots[0]);
                    for other in &month.snapshots[1..] {
                        let other = key(other);
                        prop_assert_eq!(
                            strategy.priority(
                                (focus.0.as_str(), focus.1, focus.2),
                                (other.0.as_str(), other.1, other.2),
                            ),
                            Ordering::Less
                        );
                    }
                }
            }

            #[test]
            fn repeated_runs_are_identical(
                terms in prop_vec(debt_terms(), 1..6),
                extra in 0i64..50_000,
                avalanche in proptest::bool::ANY,
            ) {
                let debts = build_debts(&terms);
                let cfg = SimulationConfig::new(pick(avalanche), Decimal::new(extra, 2));
                let first = simulate(&debts, &cfg).unwrap();
                let second = simulate(&debts, &cfg).unwrap();

                prop_assert_eq!(first.summary(), second.summary());
                let a: Vec<MonthSchedule> = first.schedule.collect();
                let b: Vec<MonthSchedule> = second.schedule.collect();
                prop_assert_eq!(a, b);
            }

            #[test]
            fn more_extra_never_slows_a_single_debt(
                (balance, rate, margin) in debt_terms(),
                extra in 0i64..50_000,
                bump in 1i64..50_000,
            ) {
                let debts = build_debts(&[(balance, rate, margin)]);
                let base = simulate(&debts, &SimulationConfig::new(Strategy::Snowball, Decimal::new(extra, 2))).unwrap();
                let more = simulate(&debts, &SimulationConfig::new(Strategy::Snowball, Decimal::new(extra + bump, 2))).unwrap();

                prop_assert!(more.months_to_payoff <= base.months_to_payoff);
                prop_assert!(more.total_interest_paid <= base.total_interest_paid);
            }

            #[test]
            fn higher_rate_never_costs_less_interest(
                balance in 10_000i64..5_000_000,
                (low, high) in (0i64..3_000, 0i64..3_000).prop_map(|(a, b)| (a.min(b), a.max(b))),
                margin in 100i64..50_000,
            ) {
                let principal = Decimal::new(balance, 2);
                let installment = installment_for(principal, Decimal::new(high, 2), Decimal::new(margin, 2));
                let run = |rate| {
                    let debts = vec![Debt::new("d", principal, Decimal::new(rate, 2), installment)];
                    simulate(&debts, &SimulationConfig::default()).unwrap()
                };

                let cheap = run(low);
                let dear = run(high);
                prop_assert!(dear.total_interest_paid >= cheap.total_interest_paid);
                prop_assert!(dear.months_to_payoff >= cheap.months_to_payoff);
            }
        }
    }
}

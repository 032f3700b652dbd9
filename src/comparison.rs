//! Side-by-side strategy comparison
//!
//! Runs the simulator once per strategy over the same debts. Positive savings
//! mean avalanche beats snowball.

use crate::debt::Debt;
use crate::error::SimulationError;
use crate::simulation::{simulate, SimulationConfig, SimulationResult, SimulationSummary, Strategy};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Snowball and avalanche runs over the same debts
#[derive(Debug)]
pub struct StrategyComparison {
    pub snowball: SimulationResult,
    pub avalanche: SimulationResult,
    /// `snowball - avalanche` total interest
    pub interest_saved: Decimal,
    /// `snowball - avalanche` months to payoff
    pub months_saved: i64,
}

impl StrategyComparison {
    fn from_runs(snowball: SimulationResult, avalanche: SimulationResult) -> Self {
        let interest_saved = snowball.total_interest_paid - avalanche.total_interest_paid;
        let months_saved = i64::from(snowball.months_to_payoff) - i64::from(avalanche.months_to_payoff);
        Self {
            snowball,
            avalanche,
            interest_saved,
            months_saved,
        }
    }

    /// Strategy to suggest: avalanche unless snowball is strictly cheaper, or
    /// equally cheap and strictly faster
    pub fn recommended(&self) -> Strategy {
        if self.interest_saved < Decimal::ZERO
            || (self.interest_saved.is_zero() && self.months_saved < 0)
        {
            Strategy::Snowball
        } else {
            Strategy::Avalanche
        }
    }

    pub fn result_for(&self, strategy: Strategy) -> &SimulationResult {
        match strategy {
            Strategy::Snowball => &self.snowball,
            Strategy::Avalanche => &self.avalanche,
        }
    }

    /// Take the chosen run, dropping the other
    pub fn into_result(self, strategy: Strategy) -> SimulationResult {
        match strategy {
            Strategy::Snowball => self.snowball,
            Strategy::Avalanche => self.avalanche,
        }
    }

    pub fn summary(&self) -> ComparisonSummary {
        ComparisonSummary {
            snowball: self.snowball.summary(),
            avalanche: self.avalanche.summary(),
            interest_saved: self.interest_saved,
            months_saved: self.months_saved,
            recommended: self.recommended(),
        }
    }
}

/// Serialisable figures of a [`StrategyComparison`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonSummary {
    pub snowball: SimulationSummary,
    pub avalanche: SimulationSummary,
    pub interest_saved: Decimal,
    pub months_saved: i64,
    pub recommended: Strategy,
}

/// Compare both strategies with the given extra monthly payment
pub fn compare(debts: &[Debt], extra_monthly_payment: Decimal) -> Result<StrategyComparison, SimulationError> {
    compare_with(
        debts,
        &SimulationConfig::new(Strategy::Snowball, extra_monthly_payment),
    )
}

/// Compare both strategies, taking everything but the strategy from `config`
///
/// The two runs share no state and execute in parallel.
pub fn compare_with(debts: &[Debt], config: &SimulationConfig) -> Result<StrategyComparison, SimulationError> {
    let (snowball, avalanche) = rayon::join(
        || simulate(debts, &config.with_strategy(Strategy::Snowball)),
        || simulate(debts, &config.with_strategy(Strategy::Avalanche)),
    );
    Ok(StrategyComparison::from_runs(snowball?, avalanche?))
}

/// What the extra monthly payment buys under one strategy
#[derive(Debug)]
pub struct ExtraPaymentImpact {
    /// Same strategy, no extra payment (freed installments still roll over)
    pub baseline: SimulationResult,
    pub accelerated: SimulationResult,
    /// `baseline - accelerated` total interest
    pub interest_saved: Decimal,
    /// `baseline - accelerated` months to payoff
    pub months_saved: i64,
}

/// Measure the configured extra payment against paying minimums only
pub fn extra_payment_impact(debts: &[Debt], config: &SimulationConfig) -> Result<ExtraPaymentImpact, SimulationError> {
    let baseline_config = SimulationConfig {
        extra_monthly_payment: Decimal::ZERO,
        ..config.clone()
    };
    let (baseline, accelerated) = rayon::join(
        || simulate(debts, &baseline_config),
        || simulate(debts, config),
    );
    let (baseline, accelerated) = (baseline?, accelerated?);

    let interest_saved = baseline.total_interest_paid - accelerated.total_interest_paid;
    let months_saved = i64::from(baseline.months_to_payoff) - i64::from(accelerated.months_to_payoff);
    Ok(ExtraPaymentImpact {
        baseline,
        accelerated,
        interest_saved,
        months_saved,
    })
}

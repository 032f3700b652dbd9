//! Batch runner for comparing many clients or many payment levels
//!
//! Holds the run settings once, then fans comparisons out over rayon. Each
//! comparison is independent, so results come back in input order regardless
//! of scheduling.

use crate::comparison::{compare_with, ComparisonSummary};
use crate::debt::{ClientDebts, Debt};
use crate::error::SimulationError;
use crate::simulation::{SimulationConfig, Strategy};
use rayon::prelude::*;
use rust_decimal::Decimal;

/// Comparison outcome for one client
#[derive(Debug, Clone, PartialEq)]
pub struct ClientComparison {
    pub client_id: String,
    pub outcome: Result<ComparisonSummary, SimulationError>,
}

/// Pre-configured comparison runner
///
/// # Example
/// ```ignore
/// let runner = ComparisonRunner::new(dec!(200));
/// let results = runner.run_batch(&clients);
/// ```
#[derive(Debug, Clone)]
pub struct ComparisonRunner {
    /// Strategy is ignored; both are always run
    base_config: SimulationConfig,
}

impl ComparisonRunner {
    /// Runner with the given extra monthly payment and the default ceiling
    pub fn new(extra_monthly_payment: Decimal) -> Self {
        Self {
            base_config: SimulationConfig::new(Strategy::Snowball, extra_monthly_payment),
        }
    }

    pub fn with_config(config: SimulationConfig) -> Self {
        Self { base_config: config }
    }

    pub fn with_max_months(mut self, max_months: u32) -> Self {
        self.base_config.max_months = max_months;
        self
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.base_config
    }

    /// Compare strategies for one client's debts
    pub fn compare_client(&self, debts: &[Debt]) -> Result<ComparisonSummary, SimulationError> {
        compare_with(debts, &self.base_config).map(|c| c.summary())
    }

    /// Compare strategies for every client in parallel
    pub fn run_batch(&self, clients: &[ClientDebts]) -> Vec<ClientComparison> {
        clients
            .par_iter()
            .map(|client| {
                let outcome = self.compare_client(&client.debts);
                if let Err(err) = &outcome {
                    log::warn!("client {}: {}", client.client_id, err);
                }
                ClientComparison {
                    client_id: client.client_id.clone(),
                    outcome,
                }
            })
            .collect()
    }

    /// Compare strategies for one client at several extra-payment levels
    pub fn run_extra_payment_scenarios(
        &self,
        debts: &[Debt],
        extra_payments: &[Decimal],
    ) -> Vec<Result<ComparisonSummary, SimulationError>> {
        extra_payments
            .par_iter()
            .map(|&extra| {
                let config = SimulationConfig {
                    extra_monthly_payment: extra,
                    ..self.base_config.clone()
                };
                compare_with(debts, &config).map(|c| c.summary())
            })
            .collect()
    }
}

impl Default for ComparisonRunner {
    fn default() -> Self {
        Self::with_config(SimulationConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn client(id: &str, debts: Vec<Debt>) -> ClientDebts {
        ClientDebts {
            client_id: id.to_string(),
            debts,
        }
    }

    fn mixed_debts() -> Vec<Debt> {
        vec![
            Debt::new("card", dec!(3000), dec!(24), dec!(90)),
            Debt::new("car", dec!(12000), dec!(6), dec!(300)),
            Debt::new("loan", dec!(1500), dec!(9), dec!(60)),
        ]
    }

    #[test]
    fn test_batch_keeps_order_and_isolates_failures() {
        let clients = vec![
            client("c-1", mixed_debts()),
            // 20 + 100 never covers the 150 of monthly interest
            client("c-2", vec![Debt::new("card", dec!(5000), dec!(36), dec!(20))]),
            client("c-3", Vec::new()),
            client("c-4", vec![Debt::new("a", dec!(1000), dec!(12), dec!(100))]),
        ];

        let results = ComparisonRunner::new(dec!(100)).run_batch(&clients);
        let ids: Vec<_> = results.iter().map(|r| r.client_id.as_str()).collect();
        assert_eq!(ids, vec!["c-1", "c-2", "c-3", "c-4"]);

        let first = results[0].outcome.as_ref().unwrap();
        assert_eq!(first.interest_saved, dec!(213.95));
        assert!(results[1].outcome.as_ref().unwrap_err().is_invalid_input());
        assert_eq!(results[2].outcome.as_ref().unwrap().snowball.months_to_payoff, 0);
        assert!(results[3].outcome.is_ok());
    }

    #[test]
    fn test_batch_survives_huge_installments() {
        let clients = vec![
            client(
                "c-1",
                vec![
                    Debt::new("a", dec!(1000), dec!(12), Decimal::MAX),
                    Debt::new("b", dec!(2000), dec!(6), Decimal::MAX),
                ],
            ),
            client("c-2", mixed_debts()),
        ];

        let results = ComparisonRunner::new(Decimal::MAX).run_batch(&clients);
        let first = results[0].outcome.as_ref().unwrap();
        assert_eq!(first.snowball.months_to_payoff, 1);
        assert_eq!(first.avalanche.total_interest_paid, dec!(20.00));
        assert_eq!(first.interest_saved, Decimal::ZERO);
        // One debt retired per month once the focus payment is unbounded
        assert_eq!(results[1].outcome.as_ref().unwrap().avalanche.months_to_payoff, 3);
    }

    #[test]
    fn test_batch_matches_single_runs() {
        let clients = vec![client("c-1", mixed_debts())];
        let runner = ComparisonRunner::new(dec!(250));
        let batch = runner.run_batch(&clients);
        let single = runner.compare_client(&clients[0].debts);
        assert_eq!(batch[0].outcome, single);
    }

    #[test]
    fn test_extra_payment_sweep() {
        let runner = ComparisonRunner::default();
        let levels = [dec!(0), dec!(100), dec!(300)];
        let results = runner.run_extra_payment_scenarios(&mixed_debts(), &levels);
        assert_eq!(results.len(), 3);

        let months: Vec<u32> = results
            .iter()
            .map(|r| r.as_ref().unwrap().avalanche.months_to_payoff)
            .collect();
        assert_eq!(months, vec![45, 35, 25]);
    }

    #[test]
    fn test_runner_ceiling() {
        let runner = ComparisonRunner::new(Decimal::ZERO).with_max_months(10);
        assert_eq!(runner.config().max_months, 10);
        let err = runner.compare_client(&mixed_debts()).unwrap_err();
        assert!(err.is_non_convergent());
    }
}

//! Debt Planner - repayment simulation engine for client debt portfolios
//!
//! This library provides:
//! - Month-by-month payoff simulation under snowball and avalanche strategies
//! - Strategy comparison (interest and months saved)
//! - Validation of stored debt records into simulation inputs
//! - Batch comparison across many clients

pub mod error;
pub mod money;
pub mod debt;
pub mod simulation;
pub mod comparison;
pub mod scenario;

// Re-export commonly used types
pub use error::{InputViolation, SimulationError};
pub use debt::{Debt, DebtRecord, DebtStatus, PortfolioSummary};
pub use simulation::{simulate, SimulationConfig, SimulationResult, Strategy};
pub use comparison::{compare, compare_with, StrategyComparison};
pub use scenario::ComparisonRunner;

//! Repayment simulation: strategies, monthly state and the payoff engine

mod strategy;
mod state;
mod engine;
mod schedule;

pub use strategy::Strategy;
pub use engine::{
    max_months_from_env, parse_max_months, simulate, RepaymentEngine, SimulationConfig,
    DEFAULT_MAX_MONTHS, MAX_MONTHS_ENV,
};
pub use schedule::{MonthSchedule, MonthlySnapshot, Schedule, SimulationResult, SimulationSummary};

//! Debt data structures, record loading and portfolio figures

mod data;
mod summary;
pub mod loader;

pub use data::{Debt, DebtRecord, DebtStatus};
pub use summary::PortfolioSummary;
pub use loader::{
    group_by_client, load_debts, load_records, load_records_from_reader, preferred_strategy,
    ClientDebts, LoadError,
};

//! Load debt records from CSV exports of the record store

use super::{Debt, DebtRecord};
use crate::error::{InputViolation, SimulationError};
use crate::simulation::Strategy;
use csv::Reader;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// Failure while reading debt records
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Row numbers are 1-based and exclude the header line
    #[error("Bad debt record at row {row}: {source}")]
    Record {
        row: usize,
        #[source]
        source: SimulationError,
    },
}

/// Debts belonging to one client
#[derive(Debug, Clone, PartialEq)]
pub struct ClientDebts {
    pub client_id: String,
    pub debts: Vec<Debt>,
}

/// Load raw records from a CSV file
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<DebtRecord>, LoadError> {
    read_records(Reader::from_path(path)?)
}

/// Load raw records from any reader (e.g., string buffer, network stream)
pub fn load_records_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<DebtRecord>, LoadError> {
    read_records(Reader::from_reader(reader))
}

fn read_records<R: std::io::Read>(mut reader: Reader<R>) -> Result<Vec<DebtRecord>, LoadError> {
    let mut records = Vec::new();
    for result in reader.deserialize() {
        let record: DebtRecord = result?;
        records.push(record);
    }
    Ok(records)
}

/// Validate every record into a [`Debt`], failing on the first bad row
pub fn to_debts(records: &[DebtRecord]) -> Result<Vec<Debt>, LoadError> {
    records
        .iter()
        .enumerate()
        .map(|(i, rec)| rec.to_debt().map_err(|source| LoadError::Record { row: i + 1, source }))
        .collect()
}

/// Load and validate the debts of a single-client CSV file
pub fn load_debts<P: AsRef<Path>>(path: P) -> Result<Vec<Debt>, LoadError> {
    to_debts(&load_records(path)?)
}

/// Split a multi-client export into per-client debt lists
///
/// Clients appear in the order their first record does; each client's debts
/// keep file order.
pub fn group_by_client(records: &[DebtRecord]) -> Result<Vec<ClientDebts>, LoadError> {
    let mut clients: Vec<ClientDebts> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for (i, rec) in records.iter().enumerate() {
        let row = i + 1;
        let debt = rec.to_debt().map_err(|source| LoadError::Record { row, source })?;
        let client_id = match rec.client_id.as_deref().map(str::trim) {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => {
                return Err(LoadError::Record {
                    row,
                    source: SimulationError::for_debt(
                        debt.id,
                        InputViolation::MissingField("client_id"),
                    ),
                })
            }
        };

        let slot = *index.entry(client_id.clone()).or_insert_with(|| {
            clients.push(ClientDebts {
                client_id,
                debts: Vec::new(),
            });
            clients.len() - 1
        });
        clients[slot].debts.push(debt);
    }

    Ok(clients)
}

/// Strategy most records ask for, ignoring methods we do not simulate
///
/// Ties go to avalanche.
pub fn preferred_strategy(records: &[DebtRecord]) -> Option<Strategy> {
    let (mut snowball, mut avalanche) = (0usize, 0usize);
    for strategy in records.iter().filter_map(DebtRecord::preferred_strategy) {
        match strategy {
            Strategy::Snowball => snowball += 1,
            Strategy::Avalanche => avalanche += 1,
        }
    }
    match (snowball, avalanche) {
        (0, 0) => None,
        (s, a) if s > a => Some(Strategy::Snowball),
        _ => Some(Strategy::Avalanche),
    }
}

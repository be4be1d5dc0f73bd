use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::ledger::Ledger;

mod amount;
mod csv_ledger;

pub use csv_ledger::CsvLedgerReader;

#[derive(Debug, Error)]
pub enum ReadError {
    #[error("Failed to open ledger file {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read ledger")]
    Io(#[from] std::io::Error),

    #[error("Ledger is not valid UTF-8, convert the export (e.g. from Windows-1250) to UTF-8 first")]
    Encoding(#[source] std::io::Error),

    #[error("Unknown profile '{name}', available profiles: {available}")]
    UnknownProfile { name: String, available: String },

    #[error("Malformed ledger")]
    Csv(#[from] csv::Error),

    #[error("Column '{0}' not found in the ledger header")]
    MissingColumn(String),

    #[error("Line {line}: invalid date '{value}', expected format {format}")]
    InvalidDate {
        line: u64,
        value: String,
        format: String,
    },

    #[error("Line {line}: invalid amount '{value}': {reason}")]
    InvalidAmount {
        line: u64,
        value: String,
        reason: &'static str,
    },
}

pub trait LedgerReader {
    fn read(&self, path: &Path, profile: &str) -> Result<Ledger, ReadError>;
}

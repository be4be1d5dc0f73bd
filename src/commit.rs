use std::path::PathBuf;
use thiserror::Error;

use crate::filter;
use crate::ledger::{Ledger, Transaction};

#[derive(Debug, Error)]
pub enum CommitError {
    #[error("Failed to serialize the processed transactions")]
    Serialize(#[from] postcard::Error),

    #[error("Failed to compress the processed transactions")]
    Compress(#[source] std::io::Error),

    #[error("Failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Durably records transactions as processed.
pub trait PersistenceCommitter {
    /// Returns how many of the given transactions weren't recorded before.
    fn mark_processed(&mut self, transactions: &[&Transaction]) -> Result<usize, CommitError>;
}

/// Marks every unprocessed transaction of the ledger as processed. The ledger is only modified after
/// the committer succeeded, so a failed commit leaves it untouched.
pub fn commit(
    ledger: &mut Ledger,
    committer: &mut impl PersistenceCommitter,
) -> Result<usize, CommitError> {
    let unprocessed = filter::unprocessed(ledger);
    if unprocessed.is_empty() {
        return Ok(0);
    }
    let recorded = committer.mark_processed(&unprocessed)?;
    log::debug!(
        "Recorded {} new of {} unprocessed transactions",
        recorded,
        unprocessed.len()
    );
    Ok(ledger.mark_all_processed())
}

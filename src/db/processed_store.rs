use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use super::file;
use crate::commit::{CommitError, PersistenceCommitter};
use crate::ledger::{Transaction, TransactionId};

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[cfg_attr(test, derive(PartialEq, Eq))]
pub struct DatabaseV1 {
    pub processed: BTreeSet<TransactionId>,
}

/// The ids of all transactions ever processed, backed by a database file.
pub struct ProcessedStore {
    path: PathBuf,
    db: DatabaseV1,
}

impl ProcessedStore {
    /// Starts with an empty store if the file doesn't exist yet.
    pub fn open(path: &Path) -> Result<Self> {
        let db = file::load(path)?.unwrap_or_default();
        log::debug!("{} processed transactions on record", db.processed.len());
        Ok(Self {
            path: path.to_path_buf(),
            db,
        })
    }

    pub fn contains(&self, id: TransactionId) -> bool {
        self.db.processed.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.db.processed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.db.processed.is_empty()
    }
}

impl PersistenceCommitter for ProcessedStore {
    fn mark_processed(&mut self, transactions: &[&Transaction]) -> Result<usize, CommitError> {
        let mut db = self.db.clone();
        let added = transactions
            .iter()
            .filter(|transaction| db.processed.insert(transaction.id()))
            .count();
        if added > 0 {
            file::save(&db, &self.path)?;
        }
        self.db = db;
        Ok(added)
    }
}
